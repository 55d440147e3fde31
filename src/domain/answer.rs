// ============================================================
// Layer 3 — Answer Domain Type
// ============================================================
// Represents one candidate answer returned by the answering
// service. This is the only value that crosses the service
// boundary back into the application:
//   - `text`  — the extracted answer span
//   - `score` — the service's confidence, nominally 0..1
//
// The service owns ranking: answers arrive in whatever order
// the service produced and are never re-sorted here. Display
// concerns (truncation, clamping, percentage formatting) live
// in the renderer, not on this type — except the percentage
// conversion itself, which belongs to the value.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A single candidate answer with its confidence score.
///
/// `score` is nominally in [0.0, 1.0] but the service is an
/// external black box, so out-of-range values must be tolerated
/// (see `confidence_percent` with clamping).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text extracted from the context passage
    pub text: String,

    /// The service's confidence estimate, nominally 0..1
    pub score: f32,
}

impl Answer {
    /// Create a new Answer
    pub fn new(text: impl Into<String>, score: f32) -> Self {
        Self { text: text.into(), score }
    }

    /// Confidence as a percentage for display.
    ///
    /// With `clamp` set, the result never exceeds 100.0 even if
    /// the service reported a score above 1.0.
    pub fn confidence_percent(&self, clamp: bool) -> f32 {
        let percent = self.score * 100.0;
        if clamp { percent.min(100.0) } else { percent }
    }
}
