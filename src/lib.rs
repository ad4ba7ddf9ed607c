//! Движок одного стола блэкджека.
//!
//! Слои:
//! - `domain` – карты, шуз, руки, дилер, игрок;
//! - `engine` – рассадка, раунд, очередь ходов, ошибки;
//! - `infra` – RNG и загрузка конфига;
//! - `api` – команды, запросы и DTO для внешнего кода.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
