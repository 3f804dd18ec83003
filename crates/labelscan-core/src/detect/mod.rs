//! Additive detection in OCR'd ingredient text
//!
//! Identity resolution over messy surface forms: every catalog record
//! gets one precompiled alternation pattern covering its name and
//! regulatory-code aliases, and matches once per input text.

mod matcher;
pub mod patterns;

pub use matcher::{AliasMatcher, DetectionEntry, Detections};
