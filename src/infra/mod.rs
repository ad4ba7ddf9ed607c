//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для перемешивания шуза;
//! - загрузка конфига стола.

pub mod config;
pub mod rng;

pub use config::*;
pub use rng::*;
