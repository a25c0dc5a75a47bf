//! Round engine for the football scoring card game. Keep this crate free of IO
//! and platform concerns; persistence and rendering live with the caller.

pub mod cards;
pub mod config;
pub mod content;
pub mod deck;
pub mod history;
pub mod notices;
pub mod round;
pub mod scoring;
pub mod state;
pub mod stats;

pub use cards::*;
pub use config::*;
pub use content::*;
pub use deck::*;
pub use history::*;
pub use notices::*;
pub use round::*;
pub use scoring::*;
pub use state::*;
pub use stats::*;
