//! Deterministic palette generation from a base color or a mood.
//!
//! AI generation and image/website extraction live outside this crate; they
//! produce a base color that can be fed through here.

pub mod generator;
pub mod hsl;
pub mod mood;
pub mod readable;

pub use generator::{generate_palette, SchemeKind};
pub use hsl::Hsl;
pub use mood::{generate_mood_palette, Mood};
pub use readable::{best_text_color, ensure_readable};
