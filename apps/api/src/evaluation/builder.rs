//! Prompt builder — renders the outbound payload for a template.

use tracing::debug;

use crate::evaluation::prompts::USER_CONTENT_PLACEHOLDER;
use crate::evaluation::templates::Template;

/// Substitutes `user_content` into the template body, verbatim.
///
/// No validation, escaping or truncation happens here: rejecting blank input
/// is the caller's job, and delimiter-like text in the content (for example a
/// literal `<<score: A>>`) reaches the model unchanged.
pub fn build(template: &Template, user_content: &str) -> String {
    if user_content.contains("<<") || user_content.contains("</") {
        debug!(
            template = template.id,
            "user content contains tag-like delimiters; sending unescaped"
        );
    }
    template
        .body
        .replacen(USER_CONTENT_PLACEHOLDER, user_content, 1)
}
