//! Cached-user picker state.
//!
//! Tracks the accounts remembered on this device, which of them can log in
//! with a PIN, the account picked for the next login and whether the picker
//! dropdown is open.

use crate::reducer::Action;

/// Which login screen the picker is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginArea {
    #[default]
    Password,
    /// Only PIN-enabled accounts are offered here.
    Pin,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CachedUsersState {
    users: Vec<String>,
    pin_enabled: Vec<String>,
    selected: Option<String>,
    show_list: bool,
}

impl CachedUsersState {
    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn pin_enabled(&self) -> &[String] {
        &self.pin_enabled
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_list_open(&self) -> bool {
        self.show_list
    }

    /// Accounts the picker offers on the given screen.
    pub fn visible_users(&self, area: LoginArea) -> &[String] {
        match area {
            LoginArea::Password => &self.users,
            LoginArea::Pin => &self.pin_enabled,
        }
    }

    /// Applies an action, returning `true` if the state changed.
    ///
    /// Selecting or deleting an account that is not cached is ignored.
    /// Deleting the selected account clears the selection.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::LoadCachedUsers { users, pin_enabled } => {
                let pin_enabled: Vec<String> = pin_enabled
                    .iter()
                    .filter(|user| users.contains(*user))
                    .cloned()
                    .collect();
                let selected = self.selected.clone().filter(|user| users.contains(user));
                let next = CachedUsersState {
                    users: users.clone(),
                    pin_enabled,
                    selected,
                    show_list: self.show_list,
                };
                let changed = *self != next;
                *self = next;
                changed
            }
            Action::SelectUser(user) => {
                if !self.users.contains(user) || self.selected.as_ref() == Some(user) {
                    return false;
                }
                self.selected = Some(user.clone());
                true
            }
            Action::DeleteCachedUser(user) => {
                let before = self.users.len();
                self.users.retain(|cached| cached != user);
                if self.users.len() == before {
                    return false;
                }
                self.pin_enabled.retain(|cached| cached != user);
                if self.selected.as_ref() == Some(user) {
                    self.selected = None;
                }
                true
            }
            Action::OpenUserList => !std::mem::replace(&mut self.show_list, true),
            Action::CloseUserList => std::mem::replace(&mut self.show_list, false),
            Action::UpdatePassword { .. } | Action::Other(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> CachedUsersState {
        let mut state = CachedUsersState::default();
        state.apply(&Action::LoadCachedUsers {
            users: vec!["alice".to_string(), "bob".to_string(), "carol".to_string()],
            pin_enabled: vec!["bob".to_string(), "mallory".to_string()],
        });
        state
    }

    #[test]
    fn test_load_keeps_only_cached_pin_users() {
        let state = loaded();
        assert_eq!(state.users(), ["alice", "bob", "carol"]);
        assert_eq!(state.pin_enabled(), ["bob"]);
        assert_eq!(state.selected(), None);
        assert!(!state.is_list_open());
    }

    #[test]
    fn test_visible_users_by_area() {
        let state = loaded();
        assert_eq!(state.visible_users(LoginArea::Password).len(), 3);
        assert_eq!(state.visible_users(LoginArea::Pin), ["bob"]);
    }

    #[test]
    fn test_select_user() {
        let mut state = loaded();
        assert!(state.apply(&Action::SelectUser("carol".to_string())));
        assert_eq!(state.selected(), Some("carol"));

        assert!(!state.apply(&Action::SelectUser("carol".to_string())));
        assert!(!state.apply(&Action::SelectUser("mallory".to_string())));
        assert_eq!(state.selected(), Some("carol"));
    }

    #[test]
    fn test_delete_selected_user_clears_selection() {
        let mut state = loaded();
        state.apply(&Action::SelectUser("bob".to_string()));

        assert!(state.apply(&Action::DeleteCachedUser("bob".to_string())));
        assert_eq!(state.users(), ["alice", "carol"]);
        assert!(state.pin_enabled().is_empty());
        assert_eq!(state.selected(), None);

        assert!(!state.apply(&Action::DeleteCachedUser("bob".to_string())));
    }

    #[test]
    fn test_reload_drops_stale_selection() {
        let mut state = loaded();
        state.apply(&Action::SelectUser("alice".to_string()));

        assert!(state.apply(&Action::LoadCachedUsers {
            users: vec!["bob".to_string()],
            pin_enabled: vec![],
        }));
        assert_eq!(state.selected(), None);

        assert!(!state.apply(&Action::LoadCachedUsers {
            users: vec!["bob".to_string()],
            pin_enabled: vec![],
        }));
    }

    #[test]
    fn test_open_and_close_list() {
        let mut state = loaded();
        assert!(state.apply(&Action::OpenUserList));
        assert!(state.is_list_open());
        assert!(!state.apply(&Action::OpenUserList));

        assert!(state.apply(&Action::CloseUserList));
        assert!(!state.is_list_open());
        assert!(!state.apply(&Action::CloseUserList));
    }

    #[test]
    fn test_unrelated_actions_are_ignored() {
        let mut state = loaded();
        let before = state.clone();
        assert!(!state.apply(&Action::Other("pin/update".to_string())));
        assert_eq!(state, before);
    }
}
