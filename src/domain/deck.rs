use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Количество карт в одной стандартной колоде.
pub const CARDS_PER_DECK: usize = 52;

/// Параметры шуза.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoeConfig {
    /// Сколько 52-карточных колод смешать.
    pub decks: u8,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self { decks: 6 }
    }
}

/// Шуз: упорядоченный источник карт. Берём всегда с хвоста (LIFO).
///
/// Перемешивание делает `RandomSource` снаружи, сам шуз ничего случайного не знает.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Новый перемешанный шуз из `config.decks` колод.
    pub fn new<R: RandomSource>(config: ShoeConfig, rng: &mut R) -> Self {
        let mut shoe = Self::unshuffled(config.decks);
        rng.shuffle(&mut shoe.cards);
        shoe
    }

    /// Неперемешанный шуз: колоды подряд, в каждой Hearts 2..A, Spades, Clubs, Diamonds.
    pub fn unshuffled(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * CARDS_PER_DECK);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Self { cards }
    }

    /// Шуз с заранее заданным порядком (последняя карта выйдет первой).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Чистая операция: вернуть последние `n` карт и остаток шуза.
    ///
    /// `drawn` сохраняет порядок хвоста. Если карт меньше `n`, забираем все.
    /// Вызывающий обязан заменить свой шуз на `remaining`.
    pub fn draw(&self, n: usize) -> (Vec<Card>, Shoe) {
        let split_at = self.cards.len().saturating_sub(n);
        let drawn = self.cards[split_at..].to_vec();
        let remaining = Shoe {
            cards: self.cards[..split_at].to_vec(),
        };
        (drawn, remaining)
    }
}
