//! Evaluator — build prompt → one completion call → extract.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluation::builder::build;
use crate::evaluation::extractor::{extract, EvaluationResult};
use crate::evaluation::templates::Template;
use crate::llm_client::Completer;

/// Runs a single evaluation. The only failure is the completion call itself;
/// its cause is carried through unparsed.
pub async fn evaluate(
    completer: &dyn Completer,
    template: &Template,
    content: &str,
) -> Result<EvaluationResult, AppError> {
    let prompt = build(template, content);

    let reply = completer
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let result = extract(&reply, template.schema);

    if result.grade_found() {
        info!(grade = %result.grade, sections = result.sections.len(), "evaluation parsed");
    } else {
        warn!(
            template = template.id,
            "model reply carried no grade tag; falling back to raw display"
        );
    }

    Ok(result)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::evaluation::extractor::NOT_FOUND;
    use crate::evaluation::templates::find_template;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Canned completer that records every prompt it receives.
    pub(crate) struct StubCompleter {
        reply: Result<String, String>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl StubCompleter {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Completer for StubCompleter {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|message| LlmError::Api {
                status: 500,
                message,
            })
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    #[tokio::test]
    async fn test_evaluate_sends_built_prompt_and_parses_reply() {
        let stub = StubCompleter::replying("Well sourced. <<score: A>>");
        let template = find_template("eeat_score").unwrap();

        let result = evaluate(&stub, template, "My post").await.unwrap();

        assert_eq!(result.grade, "A");
        assert_eq!(result.primary_text(), "Well sourced.");
        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build(template, "My post"));
    }

    #[tokio::test]
    async fn test_evaluate_missing_tag_is_not_an_error() {
        let stub = StubCompleter::replying("<recommendations>More data.</recommendations>");
        let template = find_template("eeat_rubric").unwrap();

        let result = evaluate(&stub, template, "My post").await.unwrap();

        assert_eq!(result.grade, NOT_FOUND);
        assert_eq!(result.sections["recommendations"], "More data.");
    }

    #[tokio::test]
    async fn test_evaluate_upstream_failure_carries_cause() {
        let stub = StubCompleter::failing("invalid api key");
        let template = find_template("eeat_score").unwrap();

        let err = evaluate(&stub, template, "My post").await.unwrap_err();

        match err {
            AppError::Llm(msg) => assert!(msg.contains("invalid api key")),
            other => panic!("expected Llm error, got {other:?}"),
        }
    }
}
