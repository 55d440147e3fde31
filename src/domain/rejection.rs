// ============================================================
// Layer 3 — Submission Rejections
// ============================================================
// The three reasons a submission is refused before the
// answering service is ever invoked. These are expected,
// user-correctable conditions, not failures — which is why
// they get their own enum instead of riding on anyhow::Error
// (service load and query failures do use anyhow, because
// those come from outside and carry arbitrary causes).
//
// Every variant maps to one fixed user-visible message; the
// Display impl (via thiserror) IS that message.
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// Why a submission was refused without touching the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    /// The context field was empty (after trimming)
    #[error("Please enter a context passage first.")]
    EmptyContext,

    /// The question field was empty (after trimming)
    #[error("Please type a question.")]
    EmptyQuestion,

    /// No service handle installed — either still loading
    /// or the load failed permanently
    #[error("The answering service has not finished loading yet. Please wait...")]
    ServiceNotReady,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        // Controller tests match on these exact strings, so pin them here
        assert_eq!(
            SubmitRejection::EmptyContext.to_string(),
            "Please enter a context passage first."
        );
        assert_eq!(SubmitRejection::EmptyQuestion.to_string(), "Please type a question.");
        assert!(SubmitRejection::ServiceNotReady.to_string().contains("not finished loading"));
    }
}
