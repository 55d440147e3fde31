// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal: take a context and a question, get answers from the
// service, and put them in front of the user.
//
// Rules for this layer:
//   - No terminal or filesystem access (that's Layers 1 and 6)
//   - No concrete answering service (that's Layer 5)
//   - Only workflow coordination and formatting
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Pure answer-to-text formatting and its display policy
pub mod render;

// The session controller: validation, timing, token handling
pub mod session;
