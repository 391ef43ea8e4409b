//! Reply extractor — recovers structured fields from free-text model output.
//!
//! Format compliance of a language model is probabilistic, so a missing or
//! malformed tag is a normal outcome: it yields the `NOT_FOUND` sentinel or an
//! omitted section, never an error.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::evaluation::templates::Schema;

/// Grade value when the reply carries no recognisable grade tag.
pub const NOT_FOUND: &str = "Not found";

/// Section key holding the commentary of an `InlineScore` reply.
pub const BODY_SECTION: &str = "body";

/// Plain sections of a `SectionedBlock` reply, in display order.
pub const PLAIN_SECTIONS: [&str; 3] = [
    "category_assessments",
    "recommendations",
    "grade_justification",
];

const GRADE_SECTION: &str = "overall_grade";

static SCORE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<<\s*score\s*:(.*?)>>").unwrap());

static SECTION_TAGS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PLAIN_SECTIONS
        .iter()
        .map(|&name| (name, section_regex(name)))
        .collect()
});

static GRADE_BLOCK: LazyLock<Regex> = LazyLock::new(|| section_regex(GRADE_SECTION));

static INNER_GRADE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<<(.*?)>>").unwrap());

/// `<name> … </name>`, case-insensitive, spanning lines, first closing tag wins.
fn section_regex(name: &str) -> Regex {
    Regex::new(&format!(r"(?is)<\s*{name}\s*>(.*?)<\s*/\s*{name}\s*>")).unwrap()
}

/// Structured view of one model reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub schema: Schema,
    /// Section name → trimmed text. A missing key means the model did not
    /// produce that section.
    pub sections: BTreeMap<String, String>,
    /// Trimmed grade token, or `NOT_FOUND`.
    pub grade: String,
    /// The reply exactly as received.
    pub raw: String,
}

impl EvaluationResult {
    pub fn grade_found(&self) -> bool {
        self.grade != NOT_FOUND
    }

    /// Human-facing commentary for the primary display area.
    ///
    /// `InlineScore` shows the body with the score tag removed. `SectionedBlock`
    /// joins the recovered sections under headings, falling back to the raw
    /// reply when the model produced none of them.
    pub fn primary_text(&self) -> String {
        match self.schema {
            Schema::InlineScore => self
                .sections
                .get(BODY_SECTION)
                .cloned()
                .unwrap_or_else(|| self.raw.trim().to_string()),
            Schema::SectionedBlock => {
                let parts: Vec<String> = PLAIN_SECTIONS
                    .iter()
                    .filter_map(|&name| {
                        self.sections
                            .get(name)
                            .map(|text| format!("{}\n{}", section_heading(name), text))
                    })
                    .collect();
                if parts.is_empty() {
                    self.raw.trim().to_string()
                } else {
                    parts.join("\n\n")
                }
            }
        }
    }
}

fn section_heading(name: &str) -> &'static str {
    match name {
        "category_assessments" => "Category Assessments",
        "recommendations" => "Recommendations",
        "grade_justification" => "Grade Justification",
        _ => "Notes",
    }
}

/// Parses `reply` according to `schema`. Never fails.
pub fn extract(reply: &str, schema: Schema) -> EvaluationResult {
    let (sections, grade) = match schema {
        Schema::InlineScore => extract_inline_score(reply),
        Schema::SectionedBlock => extract_sectioned_block(reply),
    };

    EvaluationResult {
        schema,
        sections,
        grade,
        raw: reply.to_string(),
    }
}

fn extract_inline_score(reply: &str) -> (BTreeMap<String, String>, String) {
    let mut sections = BTreeMap::new();

    let grade = SCORE_TAG
        .captures(reply)
        .map(|caps| caps[1].trim().to_string());

    // Every tag is stripped so the body can be re-extracted without a grade
    // resurfacing; only the first one supplies the grade.
    let body = if SCORE_TAG.is_match(reply) {
        SCORE_TAG.replace_all(reply, "").trim().to_string()
    } else {
        reply.trim().to_string()
    };
    sections.insert(BODY_SECTION.to_string(), body);

    (sections, grade.unwrap_or_else(|| NOT_FOUND.to_string()))
}

fn extract_sectioned_block(reply: &str) -> (BTreeMap<String, String>, String) {
    let sections = SECTION_TAGS
        .iter()
        .filter_map(|(name, re)| {
            re.captures(reply)
                .map(|caps| (name.to_string(), caps[1].trim().to_string()))
        })
        .collect();

    let grade = GRADE_BLOCK
        .captures(reply)
        .and_then(|outer| {
            INNER_GRADE
                .captures(&outer[1])
                .map(|inner| inner[1].trim().to_string())
        })
        .unwrap_or_else(|| NOT_FOUND.to_string());

    (sections, grade)
}
