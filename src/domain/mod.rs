//! Доменная модель блэкджека: карты, шуз, руки, дилер, игрок, конфиг стола.

pub mod card;
pub mod chips;
pub mod dealer;
pub mod deck;
pub mod hand;
pub mod hands;
pub mod player;
pub mod table;

pub use card::*;
pub use chips::*;
pub use dealer::*;
pub use deck::*;
pub use hand::*;
pub use hands::*;
pub use player::*;
pub use table::*;
