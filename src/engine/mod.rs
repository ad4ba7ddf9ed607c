//! Движок блэкджека: рассадка, раздача, очередь ходов, история раунда.
//!
//! Высокоуровневый объект: `Table`
//! Основные операции:
//!   - `join` / `leave` – рассадка (хэндл `Seating` можно отдать другому потоку)
//!   - `start` – раздать два круга и выбрать первого игрока
//!   - `hit` / `stand` / `double_down` / `split` – ход текущего игрока
//!   - `finish_dealer` – добор дилера после того, как все доиграли

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod round_history;
pub mod seating;

pub use actions::PlayerAction;
pub use errors::GameError;
pub use game_loop::{Table, Turn};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use seating::{lock_player, Seating};

/// RNG интерфейс для перемешивания шуза.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
