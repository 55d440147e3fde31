// ============================================================
// Layer 2 — Answer Renderer
// ============================================================
// Pure formatting: turns (question, answers, elapsed seconds)
// into the text block the view displays. No I/O, no state —
// which is exactly what makes it trivially testable.
//
// The original tool family drifted on two points:
//   - whether to show every answer or only the top two
//   - whether to cap the displayed confidence at 100%
// Both are collapsed into one explicit RenderOptions value
// instead of living in near-duplicate code paths. The defaults
// pick the stricter variant: top two answers, clamped.
//
// Reference: Rust Book §5 (Structs), §8 (Strings)

use std::fmt::Write;

use crate::domain::answer::Answer;

/// Display policy for rendered answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// How many answers to display; None shows everything
    /// the service returned, in the service's own order
    pub max_answers_shown: Option<usize>,

    /// Cap displayed confidence at 100.00% even when the
    /// service reports a score above 1.0
    pub clamp_confidence: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { max_answers_shown: Some(2), clamp_confidence: true }
    }
}

/// Fixed advice shown under every result block.
const TIPS: &str = "\
Tips for better results:
  - More specific questions tend to get better answers
  - Longer, more detailed contexts help the service
  - Avoid subjective or opinion questions";

/// Render the block for a completed query.
///
/// Empty `answers` produces the fixed "no answer found" block;
/// otherwise a heading naming the question, the elapsed time,
/// and one entry per shown answer.
pub fn render_answers(
    question: &str,
    answers:  &[Answer],
    elapsed_seconds: f64,
    options:  &RenderOptions,
) -> String {
    if answers.is_empty() {
        return format!(
            "No answer found\n\
             The service could not find an answer to your question in the given text.\n\
             Tips:\n  \
             - Check that the question relates to the context\n  \
             - Try rephrasing your question\n  \
             - Provide a more detailed context\n\
             Processed in {elapsed_seconds:.2} seconds"
        );
    }

    let shown = match options.max_answers_shown {
        Some(n) => &answers[..n.min(answers.len())],
        None    => answers,
    };

    let mut out = String::new();
    // write! to a String cannot fail, so the Results are ignored
    let _ = writeln!(out, "Answers for: \"{question}\"");
    let _ = writeln!(out, "Processed in {elapsed_seconds:.2} seconds");

    for (index, answer) in shown.iter().enumerate() {
        let confidence = answer.confidence_percent(options.clamp_confidence);
        let _ = writeln!(out);
        let _ = writeln!(out, "Answer {}: {}", index + 1, answer.text);
        let _ = writeln!(out, "Confidence: {confidence:.2}%");
    }

    let _ = write!(out, "\n{TIPS}");
    out
}
