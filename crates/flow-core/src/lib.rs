pub mod browser;
pub mod config;
pub mod constants;
pub mod controller;
pub mod field;
pub mod selector;
pub mod spin;

pub use browser::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use field::*;
pub use selector::*;
pub use spin::*;
