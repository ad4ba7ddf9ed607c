use serde::{Deserialize, Serialize};

use crate::domain::player::{Player, PlayerConfig};
use crate::engine::{PlayerAction, Table};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня над одним столом.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Посадить нового игрока на первое свободное место.
    Join(PlayerConfig),

    /// Освободить место.
    Leave { seat_index: u8 },

    /// Раздать карты и начать раунд.
    Start,

    /// Действие игрока, чей сейчас ход.
    Action(PlayerAction),

    /// Добор дилера после окончания раунда.
    FinishDealer,
}

/// Применить команду к столу.
pub fn apply_command(table: &mut Table, command: Command) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Join(config) => {
            let seat_index = table.join(Player::shared(config))?;
            Ok(CommandResponse::Seated { seat_index })
        }
        Command::Leave { seat_index } => {
            let player = table
                .seating()
                .player_at(seat_index)?
                .ok_or(ApiError::EmptySeat(seat_index))?;
            table.leave(&player)?;
            Ok(CommandResponse::Ok)
        }
        Command::Start => {
            table.start()?;
            Ok(CommandResponse::Ok)
        }
        Command::Action(action) => {
            table.apply_action(action)?;
            Ok(CommandResponse::Ok)
        }
        Command::FinishDealer => Ok(CommandResponse::DealerTotal(table.finish_dealer()?)),
    }
}

/// Разобрать команду из JSON и применить.
pub fn apply_json_command(table: &mut Table, json: &str) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(json)?;
    apply_command(table, command)
}
