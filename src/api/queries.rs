use serde::{Deserialize, Serialize};

use crate::domain::dealer::Dealer;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::engine::{lock_player, RoundHistory, Table};

use super::dto::{DealerViewDto, HandDto, PlayerViewDto, TableViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние стола. `reveal_dealer = false` прячет закрытую карту дилера.
    GetTable { reveal_dealer: bool },

    /// История текущего раунда.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Table(TableViewDto),
    History(RoundHistory),
}

pub fn handle_query(table: &Table, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetTable { reveal_dealer } => {
            Ok(QueryResponse::Table(build_table_view(table, reveal_dealer)?))
        }
        Query::GetHistory => Ok(QueryResponse::History(table.history().clone())),
    }
}

/// Сформировать DTO стола.
pub fn build_table_view(table: &Table, reveal_dealer: bool) -> Result<TableViewDto, ApiError> {
    let mut players = Vec::new();
    for (seat, shared) in table.seating().occupied()? {
        let player = lock_player(&shared)?;
        players.push(build_player_dto(seat, &player));
    }

    Ok(TableViewDto {
        decks: table.config().decks,
        state: table.state(),
        turn_seat: table.turn_seat(),
        shoe_remaining: table.shoe_len(),
        dealer: build_dealer_dto(table.dealer(), reveal_dealer),
        players,
    })
}

fn build_dealer_dto(dealer: &Dealer, reveal: bool) -> DealerViewDto {
    if reveal {
        return DealerViewDto {
            cards: dealer.cards().to_vec(),
            hidden_cards: 0,
            total: Some(dealer.total()),
        };
    }

    let cards: Vec<_> = dealer.up_card().into_iter().collect();
    DealerViewDto {
        hidden_cards: dealer.cards().len().saturating_sub(cards.len()) as u8,
        cards,
        total: None,
    }
}

fn build_player_dto(seat: u8, player: &Player) -> PlayerViewDto {
    PlayerViewDto {
        seat_index: seat,
        name: player.name().to_string(),
        wallet: player.wallet(),
        mode: player.hands().mode(),
        hands: player.hands().iter().map(build_hand_dto).collect(),
        is_done: player.is_done(),
        can_split: player.can_split(),
        can_double_down: player.can_double_down(),
    }
}

fn build_hand_dto(hand: &Hand) -> HandDto {
    HandDto {
        cards: hand.cards().to_vec(),
        bet: hand.bet(),
        total: hand.total(),
        is_active: hand.is_active(),
        is_bust: hand.is_bust(),
        has_blackjack: hand.has_blackjack(),
    }
}
