use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Shoe;
use crate::domain::hand::Hand;

/// Дилер добирает, пока сумма строго меньше этого порога.
pub const DEALER_DRAW_THRESHOLD: u32 = 16;

/// Дилер: одна рука без ставки, без сплита и дабла.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(Vec::new(), Chips::ZERO, true),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Все карты дилера. Скрывать закрытую карту – задача того, кто рисует.
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Открытая карта (первая розданная).
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    pub fn hit(&mut self, card: Card) {
        self.hand.hit(card);
    }

    /// Добирать по одной карте из общего шуза, пока сумма < 16.
    /// Возвращает оставшийся шуз.
    pub fn draw_until_threshold(&mut self, shoe: Shoe) -> Shoe {
        let mut remaining = shoe;

        while self.hand.total() < DEALER_DRAW_THRESHOLD {
            let (drawn, leftover) = remaining.draw(1);
            let Some(card) = drawn.first().copied() else {
                log::warn!(
                    "шуз пуст, дилер остановился на {}",
                    self.hand.total()
                );
                break;
            };
            self.hit(card);
            remaining = leftover;
        }

        remaining
    }
}
