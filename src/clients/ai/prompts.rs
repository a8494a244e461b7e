use crate::types::PromptMessages;

/// Merges the prompt files and the raw data payload into the two chat messages.
///
/// `data` is passed through verbatim; nothing is truncated or re-encoded.
pub fn build_messages(
    system_prompt: &str,
    human_template: &str,
    example: &str,
    data: &str,
) -> PromptMessages {
    let user = format!(
        r#"
<example> {} </example>
{}
<data> {} </data>
"#,
        example, human_template, data
    );

    PromptMessages {
        system: system_prompt.to_string(),
        user,
    }
}
