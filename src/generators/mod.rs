pub mod modules;
pub mod symbol;
pub mod tables;

pub use modules::Modules;
pub use symbol::{Element, Elements, Symbol, MODULE_COUNT};
pub use tables::{Parity, Pattern, Stripe};
