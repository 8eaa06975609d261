//! Password rule sections
//!
//! Each section inspects one aspect of a candidate password.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::{MIN_LENGTH, length_section, password_length};
pub use pattern::{PatternFindings, pattern_analysis_section};
pub use variety::{CharacterClasses, character_variety_section};
