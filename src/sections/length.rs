//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Minimum password length, shared with the length rule's title.
pub const MIN_LENGTH: usize = 10;

/// Password length in UTF-16 code units.
///
/// Login clients measure passwords this way, so a character outside the
/// Basic Multilingual Plane (most emoji) counts twice.
pub fn password_length(password: &SecretString) -> usize {
    password.expose_secret().encode_utf16().count()
}

/// Returns `true` if the password is shorter than `MIN_LENGTH`.
pub fn length_section(password: &SecretString) -> bool {
    password_length(password) < MIN_LENGTH
}
