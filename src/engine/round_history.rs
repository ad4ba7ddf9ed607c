use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Раздача двух кругов закончена.
    RoundStarted { seats: Vec<SeatIndex> },

    /// Карта игроку при раздаче или по `hit`.
    CardDealt { seat: SeatIndex, card: Card },

    /// Карта дилеру.
    DealerCard { card: Card },

    /// Игрок закрыл активную руку.
    Stood { seat: SeatIndex },

    /// Активная рука перебрала.
    Busted { seat: SeatIndex, total: u32 },

    DoubledDown {
        seat: SeatIndex,
        card: Card,
        new_bet: Chips,
    },

    Split { seat: SeatIndex },

    /// Ход перешёл к другому месту.
    TurnChanged { seat: SeatIndex },

    /// Все места доиграли.
    RoundDone,

    /// Дилер закончил добор.
    DealerFinished { total: u32 },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
