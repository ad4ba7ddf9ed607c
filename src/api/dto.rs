use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hands::HandsMode;
use crate::domain::table::GameState;

/// DTO одной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub cards: Vec<Card>,
    pub bet: Chips,
    pub total: u32,
    pub is_active: bool,
    pub is_bust: bool,
    pub has_blackjack: bool,
}

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub seat_index: u8,
    pub name: String,
    pub wallet: Chips,
    pub mode: HandsMode,
    /// Одна рука, после сплита – две.
    pub hands: Vec<HandDto>,
    pub is_done: bool,
    pub can_split: bool,
    pub can_double_down: bool,
}

/// DTO дилера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerViewDto {
    /// Видимые карты. Пока закрытая карта не открыта – только первая.
    pub cards: Vec<Card>,
    /// Сколько карт скрыто.
    pub hidden_cards: u8,
    /// Сумма – только когда все карты открыты.
    pub total: Option<u32>,
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub decks: u8,
    pub state: GameState,
    /// Место, чей сейчас ход.
    pub turn_seat: Option<u8>,
    pub shoe_remaining: usize,
    pub dealer: DealerViewDto,
    pub players: Vec<PlayerViewDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,
    /// Игрок посажен на место.
    Seated { seat_index: u8 },
    /// Дилер закончил добор.
    DealerTotal(u32),
}
