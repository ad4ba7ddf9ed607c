use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hands::Hands;
use crate::engine::errors::GameError;

/// Игрок, которого стол держит по ссылке. Место за столом и вызывающий код
/// делят один и тот же объект.
pub type SharedPlayer = Arc<Mutex<Player>>;

/// Параметры нового игрока.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    /// Начальная ставка на первую руку.
    pub bet: Chips,
    /// Фишки вне ставки (из них оплачиваются дабл и сплит).
    pub wallet: Chips,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_bet(mut self, bet: Chips) -> Self {
        self.bet = bet;
        self
    }

    pub fn with_wallet(mut self, wallet: Chips) -> Self {
        self.wallet = wallet;
        self
    }
}

/// Игрок за столом: кошелёк + руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    name: String,
    wallet: Chips,
    hands: Hands,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            name: config.name,
            wallet: config.wallet,
            hands: Hands::new(Vec::new(), config.bet),
        }
    }

    /// Сразу обернуть в `Arc<Mutex<_>>` для посадки за стол.
    pub fn shared(config: PlayerConfig) -> SharedPlayer {
        Arc::new(Mutex::new(Self::new(config)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wallet(&self) -> Chips {
        self.wallet
    }

    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    /// Ставка активной руки (ноль, если ход окончен).
    fn active_bet(&self) -> Chips {
        self.hands
            .active_hand()
            .map(|h| h.bet())
            .unwrap_or(Chips::ZERO)
    }

    pub fn can_split(&self) -> bool {
        self.wallet.covers(self.active_bet()) && self.hands.can_split()
    }

    pub fn can_double_down(&self) -> bool {
        self.wallet.covers(self.active_bet()) && self.hands.can_double_down()
    }

    pub fn hit(&mut self, card: Card) {
        self.hands.hit(card);
    }

    pub fn stand(&mut self) {
        self.hands.stand();
    }

    /// Удвоить ставку активной руки и взять ровно одну карту.
    /// Закрыть руку после дабла обязан стол.
    pub fn double_down(&mut self, card: Card) -> Result<(), GameError> {
        if !self.can_double_down() {
            return Err(GameError::DoubleDownNotAllowed);
        }

        let bet = self.active_bet();
        let hand = self
            .hands
            .active_hand_mut()
            .ok_or(GameError::DoubleDownNotAllowed)?;

        hand.double_bet();
        hand.hit(card);
        self.wallet -= bet;
        Ok(())
    }

    /// Разбить пару: из кошелька списывается вторая ставка.
    pub fn split(&mut self) -> Result<(), GameError> {
        if !self.can_split() {
            return Err(GameError::SplitNotAllowed);
        }

        let bet = self.active_bet();
        let split = self.hands.split()?;

        self.hands = split;
        self.wallet -= bet;
        Ok(())
    }

    pub fn is_bust(&self) -> bool {
        self.hands.is_bust()
    }

    pub fn is_done(&self) -> bool {
        self.hands.is_done()
    }

    pub fn has_blackjack(&self) -> bool {
        self.hands.has_blackjack()
    }
}
