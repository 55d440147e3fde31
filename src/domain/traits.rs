// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// the session controller never learns where answers come from
// or where its output goes. For example:
//   - LexicalAnswerer implements AnsweringService
//   - A future remote inference client could too
//   - The controller only sees AnsweringService and works
//     with both without any changes
//
// The same applies to the output side: the controller writes
// through SessionView, so tests drive it with a recording view
// instead of a real terminal.
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::answer::Answer;

// ─── AnsweringService ─────────────────────────────────────────────────────────
/// Any component that can find answers to a question inside a
/// context passage.
///
/// Implementations:
///   - LexicalAnswerer → keyword-overlap sentence extraction
///   - test doubles    → scripted answers or scripted failures
pub trait AnsweringService {
    /// Given a question and a context passage, return candidate
    /// answers ranked however the service sees fit. An empty Vec
    /// means the service found nothing; Err means inference
    /// itself failed.
    fn find_answers(&self, question: &str, context: &str) -> Result<Vec<Answer>>;
}

// ─── SessionView ──────────────────────────────────────────────────────────────
/// The output surface the session controller renders into.
///
/// Implementations:
///   - ConsoleView    → prints to the terminal, theme-aware
///   - RecordingView  → captures output for assertions in tests
pub trait SessionView {
    /// Replace the main output region with `block`.
    /// Each call overwrites the previous display in spirit —
    /// the controller always renders complete blocks.
    fn show(&mut self, block: &str);

    /// Emit a diagnostic line (timings, raw errors). Advisory
    /// only; never part of the main output region.
    fn diagnostic(&mut self, line: &str);
}
