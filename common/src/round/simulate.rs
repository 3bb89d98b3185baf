use serde::Serialize;

use super::game::{EndReason, Game, Player, PlayerId, RoundPhase};
use crate::{
    data::cards::{Card, PromptCard, ResponseCard},
    error::RoundError,
    rng::{Stream, TableRng},
};

/// Decides for simulated players. Hands are never empty when asked.
pub trait Strategy {
    /// Index into `player.hand()` of the card to submit.
    fn choose_response(&mut self, player: &Player, prompt: &PromptCard) -> usize;

    /// Index into `responses` (reveal order) of the winning card.
    fn judge(&mut self, czar: &Player, prompt: &PromptCard, responses: &[&ResponseCard]) -> usize;
}

/// Plays and judges uniformly at random from the strategy stream of a seed.
pub struct RandomStrategy {
    rng: TableRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        RandomStrategy {
            rng: TableRng::stream(seed, Stream::Strategy),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_response(&mut self, player: &Player, _prompt: &PromptCard) -> usize {
        self.rng.gen_index(player.hand().len())
    }

    fn judge(&mut self, _czar: &Player, _prompt: &PromptCard, responses: &[&ResponseCard]) -> usize {
        self.rng.gen_index(responses.len())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub czar: String,
    pub prompt: String,
    pub winner: String,
    pub winning_response: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub seat: PlayerId,
    pub name: String,
    pub score: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    pub seed: u64,
    pub rounds: Vec<RoundRecord>,
    pub standings: Vec<Standing>,
    pub end_reason: EndReason,
}

/// Plays rounds until the game ends or `max_rounds` rounds are scored, then
/// stops the game if it is still running.
pub fn simulate<S: Strategy>(
    game: &mut Game,
    strategy: &mut S,
    max_rounds: u32,
) -> Result<SimulationReport, RoundError> {
    let mut rounds = Vec::new();

    while !game.is_over() && (rounds.len() as u32) < max_rounds {
        if game.phase() == RoundPhase::NextRound {
            game.start_round()?;
        }

        let prompt = match game.draw_prompt() {
            Ok(prompt) => prompt.clone(),
            Err(RoundError::GameOver(_)) => break,
            Err(e) => return Err(e),
        };

        for id in game.pending() {
            let choice = strategy.choose_response(game.player(id)?, &prompt);
            game.submit(id, choice)?;
        }

        let revealed: Vec<ResponseCard> = game.reveal()?.into_iter().cloned().collect();
        let revealed: Vec<&ResponseCard> = revealed.iter().collect();
        let czar = game.czar();
        let pick = strategy.judge(game.player(czar)?, &prompt, &revealed);
        let winner = game.pick_winner(pick)?;

        rounds.push(RoundRecord {
            round: game.round(),
            czar: game.player(czar)?.name().to_owned(),
            prompt: prompt.text().to_owned(),
            winner: game.player(winner)?.name().to_owned(),
            winning_response: revealed[pick].text().to_owned(),
        });

        if !game.is_over() {
            game.end_round()?;
        }
    }

    if !game.is_over() {
        game.stop()?;
    }

    Ok(SimulationReport {
        seed: game.seed(),
        rounds,
        standings: game
            .standings()
            .into_iter()
            .map(|player| Standing {
                seat: player.id(),
                name: player.name().to_owned(),
                score: player.score(),
            })
            .collect(),
        end_reason: game.end_reason().unwrap_or(EndReason::Stopped),
    })
}
