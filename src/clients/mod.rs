pub mod ai;
pub mod github;

pub use ai::{CompletionClient, OpenAiClient};
pub use github::{GithubClient, IssueCommenter};
