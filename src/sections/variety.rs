//! Character variety section - detects which character classes are present.

use secrecy::{ExposeSecret, SecretString};

const SYMBOL_POOL: u32 = 33;
const UNICODE_POOL: u32 = 100;

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    /// ASCII punctuation or space.
    pub symbol: bool,
    /// Anything outside printable ASCII.
    pub other: bool,
}

impl CharacterClasses {
    /// Size of the alphabet a brute-force attacker would have to cover.
    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += 26;
        }
        if self.upper {
            pool += 26;
        }
        if self.digit {
            pool += 10;
        }
        if self.symbol {
            pool += SYMBOL_POOL;
        }
        if self.other {
            pool += UNICODE_POOL;
        }
        pool
    }
}

/// Classifies every character of the password.
pub fn character_variety_section(password: &SecretString) -> CharacterClasses {
    let mut classes = CharacterClasses::default();
    for c in password.expose_secret().chars() {
        match c {
            'a'..='z' => classes.lower = true,
            'A'..='Z' => classes.upper = true,
            '0'..='9' => classes.digit = true,
            c if c == ' ' || c.is_ascii_punctuation() => classes.symbol = true,
            _ => classes.other = true,
        }
    }
    classes
}
