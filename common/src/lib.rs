//! Card data and table logic for "What Could Go Wrong?", a discussion game
//! about the downsides of AI systems.
//!
//! - [`data`] loads prompt and response decks from CSV, manages packs and
//!   flags data-integrity problems.
//! - [`round`] coordinates rounds: czar draws, players submit, czar judges,
//!   scores go up, the czar role rotates.
//! - [`rng`] derives every random decision from a single seed.

pub mod config;
pub mod data;
pub mod error;
pub mod rng;
pub mod round;

pub use config::GameConfig;
pub use data::{
    cards::{Card, Pack, PackMeta, PromptCard, ResponseCard},
    deck::Deck,
};
pub use error::{ParseError, RoundError};
pub use rng::TableRng;
pub use round::{EndReason, Game, PlayerId, RoundPhase};
