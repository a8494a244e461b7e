use clap::Parser;

/// Generates a market health report with an LLM and posts it to a GitHub issue.
#[derive(Debug, Parser)]
#[command(name = "market-health-reporter", version)]
pub struct Cli {
    /// LLM API key
    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub llm_api_key: String,

    /// Issue number
    #[arg(long)]
    pub issue: u64,

    /// Comment body: `pair, venue, start, end`
    #[arg(long = "comment-body")]
    pub comment_body: String,

    /// GitHub token
    #[arg(long = "github-token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Rapid API key (accepted, not used)
    #[arg(long = "rapid-api")]
    pub rapid_api: String,

    /// Also write the report and data artifacts to disk
    #[arg(long = "save-report")]
    pub save_report: bool,
}
