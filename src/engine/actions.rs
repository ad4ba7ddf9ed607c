use serde::{Deserialize, Serialize};

/// Действие игрока, чей сейчас ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Hit,
    Stand,
    /// Удвоить ставку, взять одну карту и закрыть руку.
    DoubleDown,
    /// Разбить пару на две руки.
    Split,
}
