use serde::{Deserialize, Serialize};

use crate::engine::GameError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// На этом месте никто не сидит.
    EmptySeat(u8),

    /// Нарушение правил или неверное состояние раунда.
    EngineError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Internal(msg) => ApiError::Internal(msg.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
