// Prompt fragments sent to the generation workflow.
// A plain article URL is sent as-is; only variations wrap the input.

/// Prefix for asking the workflow to rewrite an existing post.
pub const VARIATION_PREFIX: &str = "Please generate a different variation of this LinkedIn post: ";

/// Builds the variation prompt for the given post content.
pub fn variation_prompt(content: &str) -> String {
    format!("{VARIATION_PREFIX}{content}")
}
