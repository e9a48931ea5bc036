//! HTTP Handlers

mod cards;
mod ping;
mod search;
mod sets;

pub use cards::*;
pub use ping::*;
pub use search::*;
pub use sets::*;
