//! Password rule checking and strength display state
//!
//! This library checks candidate passwords against account password rules
//! and keeps the resulting strength display for a login flow's password
//! screen.
//!
//! # Features
//!
//! - `async` (default): Enables channel-driven checking and store updates
//!   with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/blacklist.txt`)
//! - `PWD_GUESSES_PER_SECOND`: Attacker speed for crack-time estimates
//!   (default: 10)
//!
//! # Example
//!
//! ```rust
//! use pwd_status::{Action, CheckerConfig, PasswordChecker, PasswordStatusStore};
//! use secrecy::SecretString;
//!
//! let checker = PasswordChecker::new(CheckerConfig::default());
//! let mut store = PasswordStatusStore::new();
//! assert!(store.display().is_none());
//!
//! let password = SecretString::new("MyPassw0rd!".to_string().into());
//! store.dispatch(&Action::update_password(checker.check(&password)));
//!
//! let display = store.display().unwrap();
//! for rule in display.rules() {
//!     println!("{} {}", if rule.satisfied { "ok" } else { "--" }, rule.title);
//! }
//! println!("Strength: {}", display.strength_label());
//! println!("Time to crack: {}", display.crack_time_label());
//! ```

// Internal modules
mod blacklist;
mod cached_users;
mod checker;
mod config;
mod display;
mod reducer;
mod sections;
mod status;
mod store;

// Public API
pub use blacklist::{Blacklist, BlacklistError};
pub use cached_users::{CachedUsersState, LoginArea};
pub use checker::{PasswordChecker, check_password_rules};
pub use config::{CheckerConfig, ConfigError};
pub use display::{
    PasswordRule, PasswordStrengthDisplay, RULE_COUNT, RuleKind, StrengthLabel, project,
};
pub use reducer::{Action, DisplayState, reduce};
pub use sections::MIN_LENGTH;
pub use status::{CrackTime, PasswordStatus, StatusError};
pub use store::PasswordStatusStore;

#[cfg(feature = "async")]
pub use checker::check_password_rules_tx;

#[cfg(feature = "async")]
pub use store::drive_store;
