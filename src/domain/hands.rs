use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Hand;
use crate::engine::errors::GameError;

/// Режим набора рук игрока.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandsMode {
    #[default]
    Normal,
    Split,
}

/// Какая рука сейчас играет.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActiveHand {
    /// Ход по этому набору рук закончен.
    None,
    #[default]
    First,
    Second,
}

/// Одна или две руки игрока (вторая появляется только после сплита).
///
/// Переходы по `stand`:
///   - First  + Normal -> None
///   - First  + Split  -> Second
///   - Second          -> None
///   - None            -> None
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hands {
    mode: HandsMode,
    first: Hand,
    /// Есть только в режиме Split.
    second: Option<Hand>,
    active: ActiveHand,
}

impl Hands {
    /// Обычный набор: одна активная рука.
    pub fn new(cards: Vec<Card>, bet: Chips) -> Self {
        Self {
            mode: HandsMode::Normal,
            first: Hand::new(cards, bet, true),
            second: None,
            active: ActiveHand::First,
        }
    }

    /// Две руки по одной карте после сплита, играет первая.
    pub fn split_pair(first: Card, second: Card, bet: Chips) -> Self {
        Self {
            mode: HandsMode::Split,
            first: Hand::new(vec![first], bet, true),
            second: Some(Hand::new(vec![second], bet, false)),
            active: ActiveHand::First,
        }
    }

    pub fn mode(&self) -> HandsMode {
        self.mode
    }

    pub fn active(&self) -> ActiveHand {
        self.active
    }

    pub fn first(&self) -> &Hand {
        &self.first
    }

    pub fn second(&self) -> Option<&Hand> {
        self.second.as_ref()
    }

    /// Все руки по порядку (одна или две).
    pub fn iter(&self) -> impl Iterator<Item = &Hand> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    pub fn active_hand(&self) -> Option<&Hand> {
        match self.active {
            ActiveHand::None => None,
            ActiveHand::First => Some(&self.first),
            ActiveHand::Second => self.second.as_ref(),
        }
    }

    pub(crate) fn active_hand_mut(&mut self) -> Option<&mut Hand> {
        match self.active {
            ActiveHand::None => None,
            ActiveHand::First => Some(&mut self.first),
            ActiveHand::Second => self.second.as_mut(),
        }
    }

    /// Карта в активную руку. Если ход окончен – ничего не делаем.
    pub fn hit(&mut self, card: Card) {
        match self.active_hand_mut() {
            Some(hand) => hand.hit(card),
            None => log::warn!("hit {card} на завершённом наборе рук проигнорирован"),
        }
    }

    pub fn stand(&mut self) {
        match self.active {
            ActiveHand::First => {
                self.first.set_active(false);
                self.active = ActiveHand::None;

                if self.mode == HandsMode::Split {
                    if let Some(second) = self.second.as_mut() {
                        second.set_active(true);
                        self.active = ActiveHand::Second;
                    }
                }
            }
            ActiveHand::Second => {
                if let Some(second) = self.second.as_mut() {
                    second.set_active(false);
                }
                self.active = ActiveHand::None;
            }
            ActiveHand::None => {}
        }
    }

    pub fn can_split(&self) -> bool {
        self.mode == HandsMode::Normal
            && self.second.is_none()
            && self.active == ActiveHand::First
            && self.first.can_split()
    }

    pub fn can_double_down(&self) -> bool {
        self.active_hand().is_some_and(Hand::can_double_down)
    }

    /// Новый набор в режиме Split. Повторный сплит запрещён.
    pub fn split(&self) -> Result<Hands, GameError> {
        if !self.can_split() {
            return Err(GameError::SplitNotAllowed);
        }
        self.first.split()
    }

    pub fn is_bust(&self) -> bool {
        self.active_hand().is_some_and(Hand::is_bust)
    }

    pub fn is_done(&self) -> bool {
        self.active == ActiveHand::None
    }

    /// Блэкджек бывает только до сплита и только на первой руке.
    pub fn has_blackjack(&self) -> bool {
        self.mode == HandsMode::Normal && self.first.has_blackjack()
    }
}
