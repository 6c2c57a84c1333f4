// ─── Whisky Wine Core ───
// Accessor for the Wine runtime bundled into the app at build time.
//
// Architecture:
//   core/
//     error.rs    — Crate-wide error type
//     wine/       — Bundle layout, version descriptor, quarantine removal

pub mod error;
pub mod wine;
