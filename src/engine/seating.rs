use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Player, SeatIndex, SharedPlayer, MAX_SEATS};
use crate::engine::errors::GameError;

type Seats = [Option<SharedPlayer>; MAX_SEATS];

/// Рассадка за столом.
///
/// Единственная часть стола под собственным мьютексом: `join`/`leave` можно
/// звать из другого потока (лобби), пока раунд идёт. Ходы (`hit`/`stand`/...)
/// этим мьютексом не защищены и сериализуются через `&mut Table`.
///
/// Ушедший игрок оставляет дыру (`None`), места не сдвигаются.
#[derive(Debug, Default)]
pub struct Seating {
    seats: Mutex<Seats>,
}

impl Seating {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Seats>, GameError> {
        self.seats
            .lock()
            .map_err(|_| GameError::Internal("мьютекс рассадки отравлен"))
    }

    /// Посадить игрока на первое свободное место слева направо.
    pub fn join(&self, player: SharedPlayer) -> Result<SeatIndex, GameError> {
        let mut seats = self.lock()?;
        let idx = seats
            .iter()
            .position(Option::is_none)
            .ok_or(GameError::TableFull)?;

        seats[idx] = Some(player);
        Ok(idx as SeatIndex)
    }

    /// Освободить место именно этого игрока (сравнение по ссылке).
    /// Если игрока нет за столом – ничего не делаем.
    pub fn leave(&self, player: &SharedPlayer) -> Result<Option<SeatIndex>, GameError> {
        let mut seats = self.lock()?;
        let idx = seats
            .iter()
            .position(|s| s.as_ref().is_some_and(|p| Arc::ptr_eq(p, player)));

        if let Some(i) = idx {
            seats[i] = None;
        }
        Ok(idx.map(|i| i as SeatIndex))
    }

    pub fn player_at(&self, seat: SeatIndex) -> Result<Option<SharedPlayer>, GameError> {
        let seats = self.lock()?;
        Ok(seats.get(seat as usize).cloned().flatten())
    }

    pub fn seated_count(&self) -> Result<usize, GameError> {
        Ok(self.lock()?.iter().filter(|s| s.is_some()).count())
    }

    /// Снимок занятых мест по порядку.
    pub fn occupied(&self) -> Result<Vec<(SeatIndex, SharedPlayer)>, GameError> {
        let seats = self.lock()?;
        Ok(seats
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.clone().map(|p| (i as SeatIndex, p)))
            .collect())
    }

    /// Следующее занятое место строго после `seat`. Без перехода по кругу:
    /// у последнего места следующего нет.
    pub fn next_occupied_after(
        &self,
        seat: SeatIndex,
    ) -> Result<Option<(SeatIndex, SharedPlayer)>, GameError> {
        let seats = self.lock()?;
        Ok(seats
            .iter()
            .enumerate()
            .skip(seat as usize + 1)
            .find_map(|(i, s)| s.clone().map(|p| (i as SeatIndex, p))))
    }
}

/// Захватить игрока на время одного действия.
pub fn lock_player(player: &SharedPlayer) -> Result<MutexGuard<'_, Player>, GameError> {
    player
        .lock()
        .map_err(|_| GameError::Internal("мьютекс игрока отравлен"))
}
