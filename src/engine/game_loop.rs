use std::sync::Arc;

use log::debug;

use crate::domain::card::Card;
use crate::domain::dealer::Dealer;
use crate::domain::deck::Shoe;
use crate::domain::hand::Hand;
use crate::domain::player::SharedPlayer;
use crate::domain::table::{GameState, SeatIndex, TableConfig};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::GameError;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::seating::{lock_player, Seating};
use crate::engine::RandomSource;

/// Чей сейчас ход: номер места и сам игрок.
///
/// Ход действителен, только пока на `seat` сидит именно `player`.
#[derive(Clone, Debug)]
pub struct Turn {
    pub seat: SeatIndex,
    pub player: SharedPlayer,
}

/// Стол блэкджека: дилер, семь мест, общий шуз и указатель хода.
///
/// Рассадка потокобезопасна (хэндл `Seating`), всё остальное требует
/// `&mut self`: один раунд на стол ведёт один владелец.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    dealer: Dealer,
    seating: Arc<Seating>,
    shoe: Shoe,
    turn: Option<Turn>,
    state: GameState,
    history: RoundHistory,
}

impl Table {
    /// Пустой стол со свежим перемешанным шузом.
    pub fn new<R: RandomSource>(config: TableConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let shoe = Shoe::new(config.shoe(), rng);
        Ok(Self::with_shoe(config, shoe))
    }

    /// Стол с заданным шузом (подтасованная колода для тестов и реплея).
    pub fn with_shoe(config: TableConfig, shoe: Shoe) -> Self {
        Self {
            config,
            dealer: Dealer::new(),
            seating: Arc::new(Seating::new()),
            shoe,
            turn: None,
            state: GameState::Waiting,
            history: RoundHistory::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Хэндл рассадки для лобби в другом потоке.
    pub fn seating(&self) -> Arc<Seating> {
        Arc::clone(&self.seating)
    }

    pub fn join(&self, player: SharedPlayer) -> Result<SeatIndex, GameError> {
        let seat = self.seating.join(player)?;
        debug!("игрок сел на место {seat}");
        Ok(seat)
    }

    /// Освободить место. Если уходит игрок, чей ход, ход сразу переходит
    /// к следующему занятому месту.
    pub fn leave(&mut self, player: &SharedPlayer) -> Result<(), GameError> {
        if let Some(seat) = self.seating.leave(player)? {
            debug!("место {seat} освободилось");
            self.resolve_turn()?;
        }
        Ok(())
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == GameState::InProgress
    }

    pub fn is_done(&self) -> bool {
        self.state == GameState::Done
    }

    /// Место, чей ход. `None`, если игрок ушёл через хэндл рассадки и
    /// ход ещё не передан (передаётся при следующем действии).
    pub fn turn_seat(&self) -> Option<SeatIndex> {
        self.seated_turn().map(|t| t.seat)
    }

    pub fn turn_player(&self) -> Option<SharedPlayer> {
        self.seated_turn().map(|t| Arc::clone(&t.player))
    }

    pub fn shoe_len(&self) -> usize {
        self.shoe.len()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Раздача: два круга, в каждом по карте каждому занятому месту, затем дилеру.
    /// Ход получает первое место без блэкджека; если таких нет – раунд сразу окончен.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Waiting {
            return Err(GameError::RoundAlreadyStarted);
        }

        let occupied = self.seating.occupied()?;
        let needed = 2 * (occupied.len() + 1);
        if self.shoe.len() < needed {
            return Err(GameError::ShoeExhausted);
        }

        for _ in 0..2 {
            for (seat, player) in &occupied {
                let card = self.draw_card()?;
                lock_player(player)?.hit(card);
                self.history.push(RoundEventKind::CardDealt { seat: *seat, card });
            }

            let card = self.draw_card()?;
            self.dealer.hit(card);
            self.history.push(RoundEventKind::DealerCard { card });
        }

        self.history.push(RoundEventKind::RoundStarted {
            seats: occupied.iter().map(|(seat, _)| *seat).collect(),
        });

        let mut first_to_act = None;
        for (seat, player) in occupied {
            let natural = lock_player(&player)?.has_blackjack();
            if natural {
                debug!("место {seat}: блэкджек, пропускаем");
                continue;
            }
            first_to_act = Some(Turn { seat, player });
            break;
        }

        match first_to_act {
            Some(turn) => {
                debug!("раунд начат, ходит место {}", turn.seat);
                self.history.push(RoundEventKind::TurnChanged { seat: turn.seat });
                self.turn = Some(turn);
                self.state = GameState::InProgress;
            }
            None => self.finish_round(),
        }

        Ok(())
    }

    /// Карта в активную руку игрока, чей ход. Перебор сразу закрывает руку.
    pub fn hit(&mut self) -> Result<(), GameError> {
        let turn = self.current_turn()?;
        let card = self.draw_card()?;

        let busted = {
            let mut player = lock_player(&turn.player)?;
            player.hit(card);

            if player.is_bust() {
                let total = player.hands().active_hand().map(Hand::total).unwrap_or_default();
                player.stand();
                Some(total)
            } else {
                None
            }
        };

        self.history.push(RoundEventKind::CardDealt { seat: turn.seat, card });

        if let Some(total) = busted {
            debug!("место {}: перебор ({total})", turn.seat);
            self.history.push(RoundEventKind::Busted { seat: turn.seat, total });
            self.advance_turn(&turn)?;
        }

        Ok(())
    }

    pub fn stand(&mut self) -> Result<(), GameError> {
        let turn = self.current_turn()?;
        lock_player(&turn.player)?.stand();

        debug!("место {}: стоп", turn.seat);
        self.history.push(RoundEventKind::Stood { seat: turn.seat });
        self.advance_turn(&turn)
    }

    /// Дабл: проверка правил до того, как тянем карту и списываем фишки.
    pub fn double_down(&mut self) -> Result<(), GameError> {
        let turn = self.current_turn()?;

        let new_bet = {
            let mut player = lock_player(&turn.player)?;
            if !player.can_double_down() {
                return Err(GameError::DoubleDownNotAllowed);
            }

            let card = self.draw_card()?;
            player.double_down(card)?;
            let new_bet = player
                .hands()
                .active_hand()
                .map(Hand::bet)
                .unwrap_or_default();
            player.stand();

            self.history.push(RoundEventKind::DoubledDown {
                seat: turn.seat,
                card,
                new_bet,
            });
            new_bet
        };

        debug!("место {}: дабл, ставка {new_bet}", turn.seat);
        self.advance_turn(&turn)
    }

    /// Сплит пары. Ход остаётся у того же места, играет первая рука.
    pub fn split(&mut self) -> Result<(), GameError> {
        let turn = self.current_turn()?;
        lock_player(&turn.player)?.split()?;

        debug!("место {}: сплит", turn.seat);
        self.history.push(RoundEventKind::Split { seat: turn.seat });
        Ok(())
    }

    pub fn apply_action(&mut self, action: PlayerAction) -> Result<(), GameError> {
        match action {
            PlayerAction::Hit => self.hit(),
            PlayerAction::Stand => self.stand(),
            PlayerAction::DoubleDown => self.double_down(),
            PlayerAction::Split => self.split(),
        }
    }

    /// Добор дилера после того, как все места доиграли. Возвращает сумму дилера.
    pub fn finish_dealer(&mut self) -> Result<u32, GameError> {
        if self.state != GameState::Done {
            return Err(GameError::RoundInProgress);
        }

        let shoe = std::mem::take(&mut self.shoe);
        self.shoe = self.dealer.draw_until_threshold(shoe);

        let total = self.dealer.total();
        debug!("дилер остановился на {total}");
        self.history.push(RoundEventKind::DealerFinished { total });
        Ok(total)
    }

    /// Взять одну карту с хвоста шуза и заменить шуз остатком.
    fn draw_card(&mut self) -> Result<Card, GameError> {
        let (drawn, remaining) = self.shoe.draw(1);
        let card = drawn.first().copied().ok_or(GameError::ShoeExhausted)?;
        self.shoe = remaining;
        Ok(card)
    }

    fn current_turn(&mut self) -> Result<Turn, GameError> {
        self.resolve_turn()?.ok_or(GameError::NoTurnPlayer)
    }

    fn holds_seat(&self, turn: &Turn) -> Result<bool, GameError> {
        Ok(self
            .seating
            .player_at(turn.seat)?
            .is_some_and(|p| Arc::ptr_eq(&p, &turn.player)))
    }

    fn seated_turn(&self) -> Option<&Turn> {
        self.turn
            .as_ref()
            .filter(|t| self.holds_seat(t).unwrap_or(false))
    }

    /// Игрок, чей ход, ушёл из-за стола: ход к следующему занятому месту
    /// после его места (новичок, севший на освободившееся место, хода не получает).
    fn resolve_turn(&mut self) -> Result<Option<Turn>, GameError> {
        let Some(turn) = self.turn.clone() else {
            return Ok(None);
        };
        if self.holds_seat(&turn)? {
            return Ok(Some(turn));
        }

        debug!("место {}: игрок ушёл посреди хода", turn.seat);
        self.pass_turn_after(turn.seat)?;
        Ok(self.turn.clone())
    }

    /// Если у игрока не осталось активной руки – ход к следующему занятому месту
    /// справа; если справа никого, раунд окончен.
    fn advance_turn(&mut self, turn: &Turn) -> Result<(), GameError> {
        let done = lock_player(&turn.player)?.is_done();
        if !done {
            return Ok(());
        }
        self.pass_turn_after(turn.seat)
    }

    fn pass_turn_after(&mut self, seat: SeatIndex) -> Result<(), GameError> {
        match self.seating.next_occupied_after(seat)? {
            Some((seat, player)) => {
                debug!("ход переходит к месту {seat}");
                self.history.push(RoundEventKind::TurnChanged { seat });
                self.turn = Some(Turn { seat, player });
            }
            None => self.finish_round(),
        }

        Ok(())
    }

    fn finish_round(&mut self) {
        debug!("все места доиграли");
        self.turn = None;
        self.state = GameState::Done;
        self.history.push(RoundEventKind::RoundDone);
    }
}
