// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting concerns that don't belong in
// any specific business layer:
//
//   theme_store.rs  — Light/dark preference persistence.
//                     Reads the canonical theme.json, falls
//                     back to the legacy file, migrates on
//                     write. The only state this program
//                     keeps on disk.
//
//   console_view.rs — The real SessionView: prints rendered
//                     blocks to the terminal with a touch of
//                     theme-aware styling, and routes the
//                     diagnostic channel into tracing.
//
// Why is this a separate layer?
//   These concerns touch the outside world (filesystem,
//   terminal) and the layers above must stay testable without
//   either. Keeping them here:
//   - Lets controller tests run with in-memory doubles
//   - Makes it easy to swap implementations
//     (e.g. a GUI view instead of the console)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Theme preference saving and loading
pub mod theme_store;

/// Terminal implementation of SessionView
pub mod console_view;
