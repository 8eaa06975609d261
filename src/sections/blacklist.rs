//! Blacklist section - looks the password up in the common-password list.

use crate::blacklist::Blacklist;
use secrecy::{ExposeSecret, SecretString};

/// Returns the password's rank in the blacklist, if it is listed.
pub fn blacklist_section(password: &SecretString, blacklist: Option<&Blacklist>) -> Option<usize> {
    blacklist.and_then(|list| list.rank(password.expose_secret()))
}
