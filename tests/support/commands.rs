//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a tuskytux command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - the store path and API URL of this test
    /// - colors and proxies disabled
    /// - the current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tuskytux").expect("failed to find tuskytux binary");
        cmd.env("TUSKYTUX_CONFIG", self.config_path());
        cmd.env("TUSKYTUX_API_URL", &self.api_url);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("TUSKYTUX_LOG");
        for var in ["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run the REPL with `script` piped to stdin.
    pub fn repl(&self, script: &str) -> Output {
        self.cmd()
            .write_stdin(script)
            .output()
            .expect("failed to run tuskytux")
    }

    /// Run the REPL with lines joined into a script.
    pub fn run_lines(&self, lines: &[&str]) -> Output {
        let mut script = lines.join("\n");
        script.push('\n');
        self.repl(&script)
    }
}
