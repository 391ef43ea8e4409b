//! Template registry. Adding a rubric variant is a new table entry, not a new code path.

use serde::Serialize;

use crate::evaluation::prompts::{EEAT_RUBRIC_PROMPT, EEAT_SCORE_PROMPT};

pub const DEFAULT_TEMPLATE_ID: &str = "eeat_score";

/// The tagging scheme a template asks the model to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// One `<<score: X>>` tag somewhere in free-form commentary.
    InlineScore,
    /// `<category_assessments>`, `<recommendations>`, `<grade_justification>`
    /// and `<overall_grade><<X>></overall_grade>` blocks.
    SectionedBlock,
}

#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip)]
    pub body: &'static str,
    pub schema: Schema,
}

pub static TEMPLATES: &[Template] = &[
    Template {
        id: "eeat_score",
        title: "EEAT score with recommendations",
        body: EEAT_SCORE_PROMPT,
        schema: Schema::InlineScore,
    },
    Template {
        id: "eeat_rubric",
        title: "EEAT rubric with per-category assessment",
        body: EEAT_RUBRIC_PROMPT,
        schema: Schema::SectionedBlock,
    },
];

/// Looks up a template by id. Ids are matched exactly.
pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_exists() {
        let template = find_template(DEFAULT_TEMPLATE_ID).unwrap();
        assert_eq!(template.schema, Schema::InlineScore);
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(find_template("eeat_unknown").is_none());
    }

    #[test]
    fn test_template_ids_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_template_serializes_without_body() {
        let json = serde_json::to_value(find_template("eeat_rubric").unwrap()).unwrap();
        assert_eq!(json["schema"], "sectioned_block");
        assert!(json.get("body").is_none());
    }
}
