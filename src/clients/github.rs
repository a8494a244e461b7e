use crate::config::{endpoint, Settings};
use crate::types::IssueRef;
use crate::{AppError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

/// Destination for the generated report.
#[async_trait]
pub trait IssueCommenter: Send + Sync {
    async fn post_comment(&self, repo_name: &str, issue_number: u64, body: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct GithubRepo {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct GithubIssue {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct GithubComment {
    id: u64,
    html_url: Option<String>,
}

pub struct GithubClient {
    client: Client,
    api_base: url::Url,
    post_comments: bool,
}

impl GithubClient {
    pub fn new(token: String, settings: &Settings) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("market-health-reporter"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        let auth = format!("Bearer {}", token.trim());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth)
                .map_err(|_| AppError::Validation("Invalid GitHub token".to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: settings.github_api_base.clone(),
            post_comments: settings.post_comments,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, what: &str, path: &str) -> Result<T> {
        let response = self
            .client
            .get(endpoint(&self.api_base, path))
            .send()
            .await
            .map_err(|e| AppError::IssueApi(format!("{} request failed: {}", what, e)))?;
        Self::decode(what, response).await
    }

    async fn decode<T: DeserializeOwned>(what: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let reason = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "not authorized",
                StatusCode::NOT_FOUND => "not found",
                _ => "failed",
            };
            return Err(AppError::IssueApi(format!(
                "{} {} ({}): {}",
                what, reason, status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::IssueApi(format!("Failed to parse {} response: {}", what, e)))
    }

    async fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<GithubComment> {
        let repo: GithubRepo = self
            .get_json("resolve repository", &format!("repos/{}/{}", issue.owner, issue.name))
            .await?;
        let found: GithubIssue = self
            .get_json(
                "resolve issue",
                &format!("repos/{}/issues/{}", repo.full_name, issue.number),
            )
            .await?;
        debug!("Resolved {}#{}", repo.full_name, found.number);

        let response = self
            .client
            .post(endpoint(
                &self.api_base,
                &format!("repos/{}/issues/{}/comments", repo.full_name, found.number),
            ))
            .json(&json!({ "body": body }))
            .send()
            .await
            .map_err(|e| AppError::IssueApi(format!("create issue comment request failed: {}", e)))?;
        Self::decode("create issue comment", response).await
    }
}

#[async_trait]
impl IssueCommenter for GithubClient {
    async fn post_comment(&self, repo_name: &str, issue_number: u64, body: &str) -> Result<()> {
        let issue = IssueRef::parse(repo_name, issue_number)?;

        if !self.post_comments {
            info!(
                "Not running in GitHub Actions; skipping comment on {}#{}",
                repo_name, issue_number
            );
            return Ok(());
        }

        let comment = self.create_comment(&issue, body).await?;
        info!(
            "Posted comment {} on {}#{} {}",
            comment.id,
            repo_name,
            issue_number,
            comment.html_url.as_deref().unwrap_or("")
        );
        Ok(())
    }
}
