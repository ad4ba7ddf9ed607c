use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hands::Hands;
use crate::engine::errors::GameError;

/// Максимальные очки руки без перебора.
pub const BLACKJACK: u32 = 21;

/// Мягкий туз: один туз считается 11 вместо 1.
const SOFT_ACE_BONUS: u32 = 10;

/// Дабл разрешён только на двух картах с суммой 9, 10 или 11.
pub const DOUBLE_DOWN_MIN: u32 = 9;
pub const DOUBLE_DOWN_MAX: u32 = 11;

/// Одна рука со ставкой.
///
/// Карты лежат в порядке получения; сумма от порядка не зависит.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: Chips,
    is_active: bool,
}

impl Hand {
    pub fn new(cards: Vec<Card>, bet: Chips, is_active: bool) -> Self {
        Self {
            cards,
            bet,
            is_active,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn bet(&self) -> Chips {
        self.bet
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub(crate) fn double_bet(&mut self) {
        self.bet += self.bet;
    }

    /// Добавить карту. Можно ли её сейчас брать – решает вызывающий.
    pub fn hit(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Очки руки: тузы по 1, и если туз есть и +10 не даёт перебора –
    /// один туз становится 11 (мягкая сумма).
    ///
    /// Одного условного бонуса достаточно: два туза по 11 всегда дают перебор.
    pub fn total(&self) -> u32 {
        let hard: u32 = self.cards.iter().map(Card::value).sum();
        let has_ace = self.cards.iter().any(Card::is_ace);

        if has_ace && hard + SOFT_ACE_BONUS <= BLACKJACK {
            hard + SOFT_ACE_BONUS
        } else {
            hard
        }
    }

    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    pub fn can_double_down(&self) -> bool {
        self.cards.len() == 2 && (DOUBLE_DOWN_MIN..=DOUBLE_DOWN_MAX).contains(&self.total())
    }

    /// Разбить пару на две руки по одной карте, каждая с исходной ставкой.
    pub fn split(&self) -> Result<Hands, GameError> {
        match self.cards.as_slice() {
            [a, b] if a.rank == b.rank => Ok(Hands::split_pair(*a, *b, self.bet)),
            _ => Err(GameError::SplitNotAllowed),
        }
    }
}
