use clap::Parser;
use market_health_reporter::cli::Cli;
use market_health_reporter::clients::{GithubClient, OpenAiClient};
use market_health_reporter::config::{InputPaths, Settings};
use market_health_reporter::pipeline::{self, RunRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_health_reporter=info".into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("--rapid-api supplied ({} chars) but not used", cli.rapid_api.len());

    let settings = Settings::from_env()?;
    let completion = OpenAiClient::new(cli.llm_api_key, &settings)?;
    let commenter = GithubClient::new(cli.github_token, &settings)?;

    let request = RunRequest {
        issue: cli.issue,
        comment_body: cli.comment_body,
        save_report: cli.save_report,
    };

    if let Err(e) = pipeline::run(&InputPaths::default(), &request, &completion, &commenter).await {
        tracing::error!("Report generation failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
