use std::fs;
use std::path::Path;

use crate::domain::table::TableConfig;
use crate::engine::errors::GameError;

/// Разобрать конфиг стола из JSON, например `{"decks": 8}`.
/// Отсутствующие поля берутся по умолчанию.
pub fn table_config_from_json(json: &str) -> Result<TableConfig, GameError> {
    let config: TableConfig =
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Загрузить конфиг стола из JSON-файла.
pub fn load_table_config(path: impl AsRef<Path>) -> Result<TableConfig, GameError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| GameError::InvalidConfig(format!("{}: {e}", path.display())))?;
    table_config_from_json(&raw)
}
