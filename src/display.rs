//! Projection of a password status into the rows shown on the password screen.

use serde::Serialize;

use crate::sections::MIN_LENGTH;
use crate::status::{CrackTime, PasswordStatus, SECONDS_PER_YEAR};

/// Number of rule rows in every display.
pub const RULE_COUNT: usize = 4;

/// The rules shown to the user, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    MinLength,
    LowerCase,
    UpperCase,
    Digit,
}

impl RuleKind {
    pub const ALL: [RuleKind; RULE_COUNT] = [
        RuleKind::MinLength,
        RuleKind::LowerCase,
        RuleKind::UpperCase,
        RuleKind::Digit,
    ];

    pub fn title(self) -> String {
        match self {
            RuleKind::MinLength => format!("Must have at least {} characters", MIN_LENGTH),
            RuleKind::LowerCase => "Must have at least 1 lowercase letter".to_string(),
            RuleKind::UpperCase => "Must have at least 1 uppercase letter".to_string(),
            RuleKind::Digit => "Must have at least 1 number".to_string(),
        }
    }

    fn is_satisfied(self, status: &PasswordStatus) -> bool {
        match self {
            RuleKind::MinLength => !status.too_short,
            RuleKind::LowerCase => !status.no_lower_case,
            RuleKind::UpperCase => !status.no_upper_case,
            RuleKind::Digit => !status.no_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordRule {
    pub title: String,
    pub satisfied: bool,
}

/// Overall strength shown next to the rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only built by `project`, so the rule rows always match `RuleKind::ALL`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthDisplay {
    passed: bool,
    seconds_to_crack: CrackTime,
    rules: [PasswordRule; RULE_COUNT],
}

impl PasswordStrengthDisplay {
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn seconds_to_crack(&self) -> &CrackTime {
        &self.seconds_to_crack
    }

    pub fn rules(&self) -> &[PasswordRule; RULE_COUNT] {
        &self.rules
    }

    /// `Strong` needs a passing password that takes at least a year to crack.
    /// Text estimates can't be compared, so they never rate above `Moderate`.
    pub fn strength_label(&self) -> StrengthLabel {
        if !self.passed {
            return StrengthLabel::Weak;
        }
        match self.seconds_to_crack.as_seconds() {
            Some(seconds) if seconds >= SECONDS_PER_YEAR => StrengthLabel::Strong,
            _ => StrengthLabel::Moderate,
        }
    }

    pub fn crack_time_label(&self) -> String {
        self.seconds_to_crack.label()
    }

    pub fn rule(&self, kind: RuleKind) -> &PasswordRule {
        &self.rules[kind as usize]
    }

    pub fn unsatisfied(&self) -> impl Iterator<Item = &PasswordRule> {
        self.rules.iter().filter(|rule| !rule.satisfied)
    }
}

/// Projects a password status into its display form.
///
/// Each rule is satisfied exactly when its failure flag is unset; `passed`
/// and `seconds_to_crack` are carried over unchanged.
pub fn project(status: &PasswordStatus) -> PasswordStrengthDisplay {
    PasswordStrengthDisplay {
        passed: status.passed,
        seconds_to_crack: status.seconds_to_crack.clone(),
        rules: RuleKind::ALL.map(|kind| PasswordRule {
            title: kind.title(),
            satisfied: kind.is_satisfied(status),
        }),
    }
}
