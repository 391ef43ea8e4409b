// Prompt bodies for every evaluation template.
// Each body carries exactly one `{user_content}` placeholder, filled by the builder.

/// Placeholder substituted with the submitted content.
pub const USER_CONTENT_PLACEHOLDER: &str = "{user_content}";

/// Single-score prompt. The reply is expected to carry one `<<score: X>>` tag.
pub const EEAT_SCORE_PROMPT: &str = r#"Please evaluate the following content for adherence to Google's EEAT (Experience, Expertise, Authoritativeness, Trustworthiness) guidelines. Provide an F to A++ score for how well it adheres to the guidelines, and surround the score in delimiters like '<<score: A>>'. Then, provide recommendations on how to improve the content according to the EEAT guidelines.

Content:

{user_content}
"#;

/// Sectioned rubric prompt. The reply is expected to wrap each part in its own tag.
pub const EEAT_RUBRIC_PROMPT: &str = r#"You are an experienced search quality rater. Evaluate the content below against Google's EEAT guidelines.

Assess each category separately:
- Experience: does the content show first-hand or life experience with the topic?
- Expertise: does the author demonstrate the knowledge or skill the topic requires?
- Authoritativeness: is the content or its author a recognised go-to source for the topic?
- Trustworthiness: is the content accurate, honest, safe, and properly sourced?

Grade the content on a scale from F to A++.

Format your reply EXACTLY as follows, using each tag once:

<category_assessments>
One short paragraph per EEAT category.
</category_assessments>

<recommendations>
A list of concrete changes that would raise the grade.
</recommendations>

<grade_justification>
Why the content earned this grade and not the one above it.
</grade_justification>

<overall_grade><<A>></overall_grade>

Content:

{user_content}
"#;
