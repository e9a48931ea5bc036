//! Query Handlers

mod card_handlers;
mod set_handlers;

pub use card_handlers::*;
pub use set_handlers::*;
