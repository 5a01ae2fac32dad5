//! Game orchestration: turns, special moves, outcomes, history and persistence.

mod config;
mod controller;
mod history;
mod outcome;
mod persistence;
mod player;

pub use config::{GameConfig, DEFAULT_BLACK_NAME, DEFAULT_WHITE_NAME};
pub use controller::{GameController, GamePhase};
pub use history::{GameSnapshot, HistoryManager};
pub use outcome::Outcome;
pub use persistence::{PersistenceError, SnapshotCodec, TextSnapshotCodec};
pub use player::Player;
