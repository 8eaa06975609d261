//! Password rule checker - produces the status record for a candidate password.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::{Blacklist, BlacklistError};
use crate::config::CheckerConfig;
use crate::sections::{
    CharacterClasses, PatternFindings, blacklist_section, character_variety_section,
    length_section, password_length, pattern_analysis_section,
};
use crate::status::{CrackTime, PasswordStatus};

/// Upper bound on the base-10 exponent of a guess count, keeping the
/// estimate finite.
const MAX_GUESS_EXPONENT: f64 = 300.0;

#[cfg(feature = "async")]
const CHECK_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Debug, Clone, Default)]
pub struct PasswordChecker {
    config: CheckerConfig,
    blacklist: Option<Blacklist>,
}

impl PasswordChecker {
    /// Creates a checker without a blacklist.
    pub fn new(config: CheckerConfig) -> Self {
        Self { config, blacklist: None }
    }

    /// Creates a checker and loads the blacklist named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `BlacklistError` if the blacklist file is missing, unreadable
    /// or empty.
    pub fn from_config(config: CheckerConfig) -> Result<Self, BlacklistError> {
        let blacklist = Blacklist::from_config(&config)?;
        Ok(Self { config, blacklist: Some(blacklist) })
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Checks a password against the account rules.
    ///
    /// The password passes when every character rule holds, or when it is at
    /// least `passphrase_length` UTF-16 units long. The crack-time estimate
    /// works on `char`s, matching the pattern section.
    pub fn check(&self, password: &SecretString) -> PasswordStatus {
        let chars = password.expose_secret().chars().count();

        // Orchestrator: each section inspects one aspect
        let too_short = length_section(password);
        let classes = character_variety_section(password);
        let patterns = pattern_analysis_section(password);
        let rank = blacklist_section(password, self.blacklist.as_ref());

        let guesses = estimate_guesses(chars, &classes, &patterns, rank);

        let mut status = PasswordStatus {
            too_short,
            no_lower_case: !classes.lower,
            no_upper_case: !classes.upper,
            no_number: !classes.digit,
            passed: false,
            seconds_to_crack: CrackTime::Seconds(guesses / self.config.guesses_per_second),
        };
        status.passed =
            password_length(password) >= self.config.passphrase_length || status.all_rules_met();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            too_short = status.too_short,
            no_lower_case = status.no_lower_case,
            no_upper_case = status.no_upper_case,
            no_number = status.no_number,
            passed = status.passed,
            blacklisted = rank.is_some(),
            "password checked"
        );

        status
    }
}

/// Checks a password with `config` and no blacklist.
pub fn check_password_rules(password: &SecretString, config: &CheckerConfig) -> PasswordStatus {
    PasswordChecker::new(config.clone()).check(password)
}

/// Expected number of guesses to find the password.
///
/// Brute force over the character pool covers half the search space on
/// average. Characters that only continue a run add nothing to it, and a
/// listed password falls after as many guesses as its blacklist rank.
fn estimate_guesses(
    length: usize,
    classes: &CharacterClasses,
    patterns: &PatternFindings,
    rank: Option<usize>,
) -> f64 {
    let effective = length.saturating_sub(patterns.redundant_chars());
    let pool = classes.pool_size();
    let exponent = if pool == 0 {
        0.0
    } else {
        effective as f64 * f64::from(pool).log10()
    };

    let brute_force = 10f64.powf(exponent.min(MAX_GUESS_EXPONENT)) / 2.0;
    let guesses = match rank {
        Some(rank) => brute_force.min(rank as f64),
        None => brute_force,
    };
    guesses.max(1.0)
}

/// Waits out the typing debounce, checks the password and sends the status.
///
/// Nothing is sent if the token is cancelled first, which is how a newer
/// keystroke supersedes this check.
#[cfg(feature = "async")]
pub async fn check_password_rules_tx(
    checker: &PasswordChecker,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStatus>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password check cancelled");
            return;
        }
        _ = tokio::time::sleep(CHECK_DEBOUNCE) => {}
    }

    let status = checker.check(password);

    if let Err(_err) = tx.send(status).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password status: {}", _err);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::reducer::Action;
    use crate::store::PasswordStatusStore;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_password_rules_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let checker = PasswordChecker::default();
        let token = CancellationToken::new();

        check_password_rules_tx(&checker, &secret("Password123"), token, tx).await;

        let status = rx.recv().await.expect("Should receive status");
        assert!(status.passed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_password_rules_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let checker = PasswordChecker::default();
        let token = CancellationToken::new();
        token.cancel();

        check_password_rules_tx(&checker, &secret("Password123"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_feeds_store() {
        let (tx, mut rx) = mpsc::channel(1);
        let checker = PasswordChecker::default();

        check_password_rules_tx(&checker, &secret("short"), CancellationToken::new(), tx).await;
        let status = rx.recv().await.expect("Should receive status");

        let mut store = PasswordStatusStore::new();
        store.dispatch(&Action::update_password(status));

        let display = store.display().expect("display after update");
        assert!(!display.passed());
        let satisfied: Vec<_> = display.rules().iter().map(|r| r.satisfied).collect();
        assert_eq!(satisfied, vec![false, true, false, false]);
    }
}
