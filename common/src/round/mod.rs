//! The round coordinator and an automated driver for it.

mod game;
mod simulate;

pub use game::{EndReason, Game, Player, PlayerId, RoundPhase};
pub use simulate::{simulate, RandomStrategy, RoundRecord, SimulationReport, Standing, Strategy};
