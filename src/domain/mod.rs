// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or terminal access
//   - NO clap or rendering code
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no terminal, no filesystem)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One candidate answer with its confidence score
pub mod answer;

// Why a submission was refused before reaching the service
pub mod rejection;

// The persisted light/dark display preference
pub mod theme;

// Core abstractions (traits) that other layers implement
pub mod traits;
