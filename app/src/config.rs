//! Command-line and environment configuration for the `todo` binary.

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Terminal client for the todo API")]
pub struct Args {
    /// Base URL of the todo API, e.g. http://localhost:5000/api
    #[arg(long, env = "TODO_API_URL")]
    pub api_url: String,

    /// Per-request timeout in seconds. No timeout when unset.
    #[arg(long, env = "TODO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "todo",
            "--api-url",
            "http://localhost:5000/api",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(args.api_url, "http://localhost:5000/api");
        assert_eq!(args.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let result = Args::try_parse_from([
            "todo",
            "--api-url",
            "http://x",
            "--timeout-secs",
            "soon",
        ]);
        assert!(result.is_err());
    }
}
