use thiserror::Error;

/// Ошибки движка блэкджека. Нарушение правил – это значение, а не паника.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Все 7 мест за столом заняты")]
    TableFull,

    #[error("Сейчас нет игрока, чей ход")]
    NoTurnPlayer,

    #[error("Сплит недоступен для этой руки")]
    SplitNotAllowed,

    #[error("Дабл недоступен: не хватает фишек или рука не 9–11 на двух картах")]
    DoubleDownNotAllowed,

    #[error("Раунд на этом столе уже был начат")]
    RoundAlreadyStarted,

    #[error("Раунд ещё идёт")]
    RoundInProgress,

    #[error("В шузе закончились карты")]
    ShoeExhausted,

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
