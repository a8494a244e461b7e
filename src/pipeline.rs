use tracing::{debug, info};

use crate::artifacts;
use crate::clients::ai::prompts::build_messages;
use crate::clients::{CompletionClient, IssueCommenter};
use crate::comment;
use crate::config::{InputPaths, ARTICLE_TAG, REPO_NAME};
use crate::tags::extract_between;
use crate::Result;

/// One report-generation trigger.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub issue: u64,
    pub comment_body: String,
    pub save_report: bool,
}

/// Generates the report and delivers it to the issue. Returns the report body.
pub async fn run(
    paths: &InputPaths,
    request: &RunRequest,
    completion: &dyn CompletionClient,
    commenter: &dyn IssueCommenter,
) -> Result<String> {
    let key = comment::parse(&request.comment_body)?;
    info!(
        "Generating report for {} on {} ({} .. {})",
        key.pair_id, key.venue_id, key.start, key.end
    );
    let cached = artifacts::find_existing(&paths.data_dir, &key);
    match &cached {
        Some(path) => debug!("Cached data artifact found at {}", path.display()),
        None => debug!("No cached data artifact for {}", key.base_name()),
    }

    // Inputs come from fixed locations, not from the parsed key.
    let data = artifacts::read_text(&paths.data)?;
    let system_prompt = artifacts::read_text(&paths.system_prompt)?;
    let human_prompt = artifacts::read_text(&paths.human_prompt)?;
    let article_example = artifacts::read_text(&paths.article_example)?;

    let messages = build_messages(&system_prompt, &human_prompt, &article_example, &data);
    debug!("This is a prompt: {}", messages.user);

    info!("Requesting completion from {}", completion.provider_name());
    let response = completion.complete(&messages.system, &messages.user).await?;
    let report = extract_between(ARTICLE_TAG, &response)?;
    info!("This is an answer: {}", report);

    if request.save_report {
        artifacts::save_report(&paths.output_dir, &key, &report)?;
        if cached.is_none() {
            artifacts::save_data(&paths.data_dir, &key, &data)?;
        }
    }

    commenter
        .post_comment(REPO_NAME, request.issue, &report)
        .await?;

    Ok(report)
}
