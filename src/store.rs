//! State container for the password screen.
//!
//! The store is created by the caller and handed to whatever needs to read
//! or update the display; there is no process-wide instance.

use crate::cached_users::CachedUsersState;
use crate::display::PasswordStrengthDisplay;
use crate::reducer::{Action, DisplayState};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

type Listener = Box<dyn FnMut(&DisplayState) + Send>;

#[derive(Default)]
pub struct PasswordStatusStore {
    state: DisplayState,
    cached_users: CachedUsersState,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for PasswordStatusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordStatusStore")
            .field("state", &self.state)
            .field("cached_users", &self.cached_users)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PasswordStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns the current projection, or `None` before the first update.
    pub fn display(&self) -> Option<&PasswordStrengthDisplay> {
        self.state.display()
    }

    pub fn cached_users(&self) -> &CachedUsersState {
        &self.cached_users
    }

    /// Registers a listener called with the new state after every update.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DisplayState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Runs an action through every slice of the store.
    ///
    /// Returns `true` if the action replaced the display. Listeners are only
    /// notified in that case.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        let replaces = self.state.apply(action);
        let _users_changed = self.cached_users.apply(action);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            action = action.kind(),
            replaced = replaces,
            users_changed = _users_changed,
            "dispatched action"
        );

        if replaces {
            for listener in self.listeners.iter_mut() {
                listener(&self.state);
            }
        }
        replaces
    }
}

/// Feeds actions from a channel into the store until the channel closes or
/// the token is cancelled, sending every new display on `tx`.
///
/// Returns the store so the caller can inspect its final state.
#[cfg(feature = "async")]
pub async fn drive_store(
    mut store: PasswordStatusStore,
    mut rx: mpsc::Receiver<Action>,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthDisplay>,
) -> PasswordStatusStore {
    loop {
        let action = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            action = rx.recv() => match action {
                Some(action) => action,
                None => break,
            },
        };

        if !store.dispatch(&action) {
            continue;
        }
        let Some(display) = store.display().cloned() else {
            continue;
        };
        // a full channel must not keep a cancelled driver alive
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            sent = tx.send(display) => {
                if let Err(_err) = sent {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Failed to send password display update: {}", _err);
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password status store stopped");

    store
}
