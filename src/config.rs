use std::time::Duration;

use url::Url;

use crate::{AppError, Result};

pub const REPO_NAME: &str = "1712n/dn-institute";

pub const DATA_FILE: &str = "tools/market_health_reporter_doc/data/data1.json";
pub const SYSTEM_PROMPT_FILE: &str = "tools/market_health_reporter_doc/prompts/system_prompt.txt";
pub const HUMAN_PROMPT_FILE: &str = "tools/market_health_reporter_doc/prompts/prompt1.txt";
pub const ARTICLE_EXAMPLE_FILE: &str = "content/market-health/posts/2023-08-14-huobi/index.md";
pub const OUTPUT_DIR: &str = "content/market-health/posts";
// Trailing separator required by `artifacts::data_path`.
pub const DATA_DIR: &str = "tools/market_health_reporter_doc/data/";

pub const ARTICLE_TAG: &str = "article";
pub const COMPLETION_MODEL: &str = "gpt-4";

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const TIMEOUT_SECS: u64 = 120;

/// Fixed input locations for one run.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub data: String,
    pub system_prompt: String,
    pub human_prompt: String,
    pub article_example: String,
    pub output_dir: String,
    pub data_dir: String,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            data: DATA_FILE.to_string(),
            system_prompt: SYSTEM_PROMPT_FILE.to_string(),
            human_prompt: HUMAN_PROMPT_FILE.to_string(),
            article_example: ARTICLE_EXAMPLE_FILE.to_string(),
            output_dir: OUTPUT_DIR.to_string(),
            data_dir: DATA_DIR.to_string(),
        }
    }
}

/// Environment-derived settings for the outbound clients.
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai_api_base: Url,
    pub github_api_base: Url,
    /// True only inside GitHub Actions.
    pub post_comments: bool,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let openai_api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string());
        let github_api_base = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_GITHUB_API_BASE.to_string());

        Ok(Self {
            openai_api_base: parse_base("OPENAI_API_BASE", &openai_api_base)?,
            github_api_base: parse_base("GITHUB_API_URL", &github_api_base)?,
            post_comments: running_in_actions(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        })
    }

    /// Settings pointing both clients at `base`, used against local mock servers.
    pub fn for_base_url(base: &str, post_comments: bool) -> Result<Self> {
        let base = parse_base("base url", base)?;
        Ok(Self {
            openai_api_base: base.clone(),
            github_api_base: base,
            post_comments,
            timeout: Duration::from_secs(5),
        })
    }
}

fn parse_base(name: &str, value: &str) -> Result<Url> {
    Url::parse(value.trim())
        .map_err(|e| AppError::Validation(format!("Invalid {}: {}", name, e)))
}

pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false)
}

/// Joins `path` onto `base` without dropping any path segment of the base.
pub fn endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
