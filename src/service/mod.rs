// ============================================================
// Layer 5 — Answering Services
// ============================================================
// Concrete implementations of the AnsweringService trait.
// Everything above this layer treats the service as a black
// box: (question, context) in, ranked candidates out.
//
// Currently one implementation:
//   lexical.rs — keyword-overlap sentence extraction
//
// Reference: Rust Book §10 (Traits)

/// Keyword-overlap extractive answerer (the default service)
pub mod lexical;
