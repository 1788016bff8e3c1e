// Text justification pipeline: tokenize -> pack -> justify -> join.
// All CPU-only; the handler on top does auth and quota admission.

pub mod engine;
pub mod handlers;
pub mod justifier;
pub mod packer;
pub mod tokenizer;

// Re-export the public API consumed by other modules (routes, tests).
pub use engine::{justify_text, DEFAULT_LINE_WIDTH};
