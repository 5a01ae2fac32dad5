//! Shared access to one game from several threads.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::game::{GameConfig, GameController};

/// A cloneable handle to a game behind a `parking_lot::Mutex`.
///
/// Every handle sees the same game; each call holds the lock for the
/// duration of the closure only.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameController>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: GameController) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::new(GameController::with_config(config))
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameController) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Hold the lock across several calls.
    pub fn lock(&self) -> MutexGuard<'_, GameController> {
        self.0.lock()
    }

    /// Number of live handles to this game.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl From<GameController> for SharedGame {
    fn from(game: GameController) -> Self {
        SharedGame::new(game)
    }
}
