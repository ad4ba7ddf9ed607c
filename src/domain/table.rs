use serde::{Deserialize, Serialize};

use crate::domain::deck::ShoeConfig;
use crate::engine::errors::GameError;

/// Индекс места за столом (0..MAX_SEATS-1). Номер места стабилен, места не сдвигаются.
pub type SeatIndex = u8;

/// Мест за столом всегда семь.
pub const MAX_SEATS: usize = 7;

/// Состояние раунда.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameState {
    /// Раунд ещё не начинался.
    #[default]
    Waiting,
    /// Карты розданы, есть игрок, чей ход.
    InProgress,
    /// Все места доиграли.
    Done,
}

/// Конфиг стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Сколько колод в шузе.
    #[serde(default = "default_decks")]
    pub decks: u8,
}

fn default_decks() -> u8 {
    6
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            decks: default_decks(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.decks == 0 {
            return Err(GameError::InvalidConfig("decks = 0".into()));
        }
        Ok(())
    }

    pub fn shoe(&self) -> ShoeConfig {
        ShoeConfig { decks: self.decks }
    }
}
