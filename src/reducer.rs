//! Login-flow actions and the reducer holding the latest password strength display.

use crate::display::{PasswordStrengthDisplay, project};
use crate::status::PasswordStatus;

/// Events seen by the login flow's state container.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The password field changed and was re-checked.
    UpdatePassword { status: PasswordStatus },
    /// Accounts remembered on this device and which of them have PIN login.
    LoadCachedUsers { users: Vec<String>, pin_enabled: Vec<String> },
    /// Pick a cached account for the next login.
    SelectUser(String),
    /// Forget a cached account.
    DeleteCachedUser(String),
    OpenUserList,
    CloseUserList,
    Other(String),
}

impl Action {
    pub fn update_password(status: PasswordStatus) -> Self {
        Action::UpdatePassword { status }
    }

    /// Short name used when logging dispatches.
    pub fn kind(&self) -> &str {
        match self {
            Action::UpdatePassword { .. } => "update_password",
            Action::LoadCachedUsers { .. } => "load_cached_users",
            Action::SelectUser(_) => "select_user",
            Action::DeleteCachedUser(_) => "delete_cached_user",
            Action::OpenUserList => "open_user_list",
            Action::CloseUserList => "close_user_list",
            Action::Other(kind) => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    /// No password status has been received yet.
    #[default]
    Uninitialized,
    Ready(PasswordStrengthDisplay),
}

impl DisplayState {
    pub fn display(&self) -> Option<&PasswordStrengthDisplay> {
        match self {
            DisplayState::Uninitialized => None,
            DisplayState::Ready(display) => Some(display),
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, DisplayState::Ready(_))
    }

    /// Applies an action in place, returning `true` if the display was
    /// replaced.
    ///
    /// A password update replaces the state wholesale with a fresh
    /// projection. Every other action leaves it untouched.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::UpdatePassword { status } => {
                *self = DisplayState::Ready(project(status));
                true
            }
            _ => false,
        }
    }
}

/// Applies an action to the display state.
pub fn reduce(mut state: DisplayState, action: &Action) -> DisplayState {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::CrackTime;

    fn status(no_number: bool, seconds: f64) -> PasswordStatus {
        PasswordStatus {
            too_short: false,
            no_lower_case: false,
            no_upper_case: false,
            no_number,
            passed: !no_number,
            seconds_to_crack: CrackTime::Seconds(seconds),
        }
    }

    #[test]
    fn test_default_is_uninitialized() {
        let state = DisplayState::default();
        assert_eq!(state, DisplayState::Uninitialized);
        assert!(state.display().is_none());
        assert!(!state.is_initialized());
    }

    #[test]
    fn test_update_password_projects_status() {
        let input = status(true, 12.0);
        let state = reduce(DisplayState::default(), &Action::update_password(input.clone()));

        assert_eq!(state, DisplayState::Ready(project(&input)));
    }

    #[test]
    fn test_update_replaces_previous_display() {
        let first = reduce(DisplayState::default(), &Action::update_password(status(true, 1.0)));
        let second = reduce(first, &Action::update_password(status(false, 5000.0)));

        let display = second.display().unwrap();
        assert!(display.passed());
        assert!(display.rules().iter().all(|r| r.satisfied));
        assert_eq!(display.seconds_to_crack(), &CrackTime::Seconds(5000.0));
    }

    #[test]
    fn test_other_actions_leave_state_unchanged() {
        let ready = reduce(DisplayState::default(), &Action::update_password(status(true, 3.0)));
        let actions = [
            Action::LoadCachedUsers {
                users: vec!["alice".to_string(), "bob".to_string()],
                pin_enabled: vec!["bob".to_string()],
            },
            Action::SelectUser("alice".to_string()),
            Action::DeleteCachedUser("bob".to_string()),
            Action::OpenUserList,
            Action::CloseUserList,
            Action::Other("pin/update".to_string()),
        ];

        for action in &actions {
            assert_eq!(reduce(ready.clone(), action), ready);
            assert_eq!(reduce(DisplayState::Uninitialized, action), DisplayState::Uninitialized);
        }
    }

    #[test]
    fn test_apply_reports_replacement() {
        let mut state = DisplayState::default();
        assert!(!state.apply(&Action::OpenUserList));
        assert!(state.apply(&Action::update_password(status(false, 2.0))));
        assert!(state.apply(&Action::update_password(status(false, 2.0))));
        assert!(!state.apply(&Action::Other("pin/update".to_string())));
        assert!(state.is_initialized());
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::update_password(status(false, 0.0)).kind(), "update_password");
        assert_eq!(Action::Other("pin/update".to_string()).kind(), "pin/update");
    }
}
