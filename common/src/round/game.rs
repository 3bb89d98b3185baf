use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::{
    config::GameConfig,
    data::{
        cards::{Card, PromptCard, ResponseCard},
        deck::Deck,
        vec_map::VecMap,
    },
    error::RoundError,
    rng::{Stream, TableRng},
};

/// A seat at the table. Seats are fixed when the game starts and the czar
/// role walks them in order. Displayed 1-based, as players count seats.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0 + 1)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<ResponseCard>,
    score: u32,
}

impl Player {
    fn new(id: PlayerId, name: String) -> Self {
        let name = if name.trim().is_empty() {
            format!("Player #{}", id.0 + 1)
        } else {
            name.trim().to_owned()
        };

        Player {
            id,
            name,
            hand: Vec::new(),
            score: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[ResponseCard] {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum EndReason {
    /// The players agreed to stop.
    Stopped,
    PromptsExhausted,
    ResponsesExhausted,
    TargetReached { winner: PlayerId },
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Stopped => f.write_str("the players stopped the game"),
            EndReason::PromptsExhausted => f.write_str("the prompt deck is empty"),
            EndReason::ResponsesExhausted => f.write_str("the response deck ran out"),
            EndReason::TargetReached { winner } => write!(f, "{} reached the target score", winner),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingCzar,
    PromptRevealed,
    ResponsesCollected,
    ResponseRevealed,
    Scored,
    NextRound,
    Over(EndReason),
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundPhase::AwaitingCzar => f.write_str("waiting for the czar to draw"),
            RoundPhase::PromptRevealed => f.write_str("collecting responses"),
            RoundPhase::ResponsesCollected => f.write_str("waiting for the czar to reveal"),
            RoundPhase::ResponseRevealed => f.write_str("waiting for the czar to judge"),
            RoundPhase::Scored => f.write_str("discussing the round"),
            RoundPhase::NextRound => f.write_str("between rounds"),
            RoundPhase::Over(_) => f.write_str("the game is over"),
        }
    }
}

/// One table playing one game: draw, submit, reveal, judge, rotate.
///
/// Every operation checks the phase first and returns a [`RoundError`]
/// without touching the game when the move is not allowed.
pub struct Game {
    config: GameConfig,
    seed: u64,
    players: Vec<Player>,
    prompts: Deck<PromptCard>,
    responses: Deck<ResponseCard>,
    czar: PlayerId,
    round: u32,
    phase: RoundPhase,
    prompt: Option<PromptCard>,
    submissions: VecMap<PlayerId, ResponseCard>,
    revealed: Vec<PlayerId>,
    winner: Option<PlayerId>,
    reveal_rng: TableRng,
}

impl Game {
    /// Seats the players, shuffles both decks, picks the first czar and deals.
    pub fn new(
        config: GameConfig,
        names: Vec<String>,
        prompts: Vec<PromptCard>,
        responses: Vec<ResponseCard>,
        seed: u64,
    ) -> Result<Self, RoundError> {
        config
            .check()
            .map_err(|e| RoundError::InvalidConfig(e.to_string()))?;

        let min = config.min_players;
        if names.len() < min {
            return Err(RoundError::TooFewPlayers {
                min,
                actual: names.len(),
            });
        }
        if let Some(max) = config.max_players {
            if names.len() > max {
                return Err(RoundError::TooManyPlayers {
                    max,
                    actual: names.len(),
                });
            }
        }

        let needed = names.len().checked_mul(config.hand_size);
        match needed {
            Some(needed) if responses.len() >= needed => {}
            _ => {
                return Err(RoundError::NotEnoughResponses {
                    available: responses.len(),
                    needed: needed.unwrap_or(usize::MAX),
                })
            }
        }

        let mut players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(PlayerId(seat), name))
            .collect();
        for (i, player) in players.iter().enumerate() {
            if players[.. i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&player.name))
            {
                return Err(RoundError::DuplicateName(player.name.clone()));
            }
        }

        let mut prompts = Deck::new(prompts);
        prompts.shuffle(&mut TableRng::stream(seed, Stream::Prompts));
        let mut responses = Deck::new(responses);
        responses.shuffle(&mut TableRng::stream(seed, Stream::Responses));

        let czar = PlayerId(TableRng::stream(seed, Stream::Czar).gen_index(players.len()));

        for player in players.iter_mut() {
            player.hand = responses.draw_many(config.hand_size);
        }

        info!(
            "Game started with {} players (seed {}), {} is the first czar",
            players.len(),
            seed,
            players[czar.0].name
        );

        Ok(Game {
            config,
            seed,
            players,
            prompts,
            responses,
            czar,
            round: 1,
            phase: RoundPhase::AwaitingCzar,
            prompt: None,
            submissions: VecMap::new(),
            revealed: Vec::new(),
            winner: None,
            reveal_rng: TableRng::stream(seed, Stream::Reveal),
        })
    }

    fn expect(&self, phase: RoundPhase, action: &'static str) -> Result<(), RoundError> {
        match self.phase {
            RoundPhase::Over(reason) => Err(RoundError::GameOver(reason)),
            current if current == phase => Ok(()),
            current => Err(RoundError::WrongPhase {
                action,
                phase: current,
            }),
        }
    }

    fn check_player(&self, player: PlayerId) -> Result<(), RoundError> {
        if player.0 < self.players.len() {
            Ok(())
        } else {
            Err(RoundError::UnknownPlayer(player))
        }
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        debug!("Round {}: {:?} -> {:?}", self.round, self.phase, phase);
        self.phase = phase;
    }

    fn finish(&mut self, reason: EndReason) {
        info!("Game over after round {}: {}", self.round, reason);
        self.set_phase(RoundPhase::Over(reason));
    }

    /// The czar turns over the top prompt. An empty prompt deck ends the game
    /// and is reported as [`RoundError::GameOver`].
    pub fn draw_prompt(&mut self) -> Result<&PromptCard, RoundError> {
        self.expect(RoundPhase::AwaitingCzar, "drawing a prompt")?;

        match self.prompts.draw() {
            Some(prompt) => {
                debug!("Round {} prompt: {}", self.round, prompt.text());
                self.set_phase(RoundPhase::PromptRevealed);
                Ok(&*self.prompt.insert(prompt))
            }
            None => {
                let reason = EndReason::PromptsExhausted;
                self.finish(reason);
                Err(RoundError::GameOver(reason))
            }
        }
    }

    /// A player puts one card from their hand face down. Once every player
    /// except the czar has submitted, the round moves on to the reveal.
    pub fn submit(&mut self, player: PlayerId, hand_index: usize) -> Result<(), RoundError> {
        self.expect(RoundPhase::PromptRevealed, "submitting a response")?;
        self.check_player(player)?;

        if player == self.czar {
            return Err(RoundError::CzarCannotSubmit(player));
        }
        if self.submissions.contains_key(&player) {
            return Err(RoundError::AlreadySubmitted(player));
        }

        let hand = &mut self.players[player.0].hand;
        if hand_index >= hand.len() {
            return Err(RoundError::NoSuchCard {
                player,
                index: hand_index,
                hand_size: hand.len(),
            });
        }

        let card = hand.remove(hand_index);
        self.submissions.insert(player, card);

        if self.submissions.len() == self.players.len() - 1 {
            self.set_phase(RoundPhase::ResponsesCollected);
        }
        Ok(())
    }

    /// Players who still owe a card this round, in seat order.
    pub fn pending(&self) -> Vec<PlayerId> {
        if self.phase != RoundPhase::PromptRevealed {
            return Vec::new();
        }

        self.players
            .iter()
            .map(Player::id)
            .filter(|&id| id != self.czar && !self.submissions.contains_key(&id))
            .collect()
    }

    /// The czar turns the submissions over in a shuffled order, so nobody can
    /// tell whose card is whose.
    pub fn reveal(&mut self) -> Result<Vec<&ResponseCard>, RoundError> {
        self.expect(RoundPhase::ResponsesCollected, "revealing responses")?;

        let mut order: Vec<PlayerId> = self.submissions.keys().copied().collect();
        self.reveal_rng.shuffle(&mut order);
        self.revealed = order;
        self.set_phase(RoundPhase::ResponseRevealed);

        Ok(self.revealed())
    }

    /// Revealed responses in reveal order. Empty before the reveal.
    pub fn revealed(&self) -> Vec<&ResponseCard> {
        self.revealed
            .iter()
            .filter_map(|id| self.submissions.get(id))
            .collect()
    }

    /// The czar picks a revealed response by its position in the reveal.
    /// Its owner scores a point.
    pub fn pick_winner(&mut self, reveal_index: usize) -> Result<PlayerId, RoundError> {
        self.expect(RoundPhase::ResponseRevealed, "picking a winner")?;

        let winner = *self
            .revealed
            .get(reveal_index)
            .ok_or(RoundError::NoSuchSubmission {
                index: reveal_index,
                count: self.revealed.len(),
            })?;

        self.winner = Some(winner);
        self.players[winner.0].score += 1;
        info!(
            "Round {}: {} wins with {:?}",
            self.round,
            self.players[winner.0].name,
            self.submissions.get(&winner).map(|card| card.text()).unwrap_or_default()
        );
        self.set_phase(RoundPhase::Scored);
        self.check_target(winner);

        Ok(winner)
    }

    /// A discussion point for a good argument, allowed once the responses are
    /// on the table. Anyone can earn one, the czar included.
    pub fn award_bonus(&mut self, player: PlayerId) -> Result<u32, RoundError> {
        match self.phase {
            RoundPhase::Over(reason) => return Err(RoundError::GameOver(reason)),
            RoundPhase::ResponseRevealed | RoundPhase::Scored => {}
            phase =>
                return Err(RoundError::WrongPhase {
                    action: "awarding a bonus",
                    phase,
                }),
        }
        self.check_player(player)?;

        let score = &mut self.players[player.0].score;
        *score += 1;
        let score = *score;
        debug!("Round {}: bonus point for {}", self.round, player);
        self.check_target(player);

        Ok(score)
    }

    fn check_target(&mut self, player: PlayerId) {
        if let Some(target) = self.config.points_to_win {
            if self.players[player.0].score >= target {
                self.finish(EndReason::TargetReached { winner: player });
            }
        }
    }

    /// Closes the round: played cards are discarded, the czar role passes to
    /// the next seat and every hand is topped up. Running out of responses
    /// while topping up ends the game.
    pub fn end_round(&mut self) -> Result<(), RoundError> {
        self.expect(RoundPhase::Scored, "ending the round")?;

        self.prompt = None;
        self.submissions.clear();
        self.revealed.clear();
        self.winner = None;
        self.czar = PlayerId((self.czar.0 + 1) % self.players.len());
        self.set_phase(RoundPhase::NextRound);

        let hand_size = self.config.hand_size;
        let mut short = false;
        for player in self.players.iter_mut() {
            let missing = hand_size.saturating_sub(player.hand.len());
            let drawn = self.responses.draw_many(missing);
            short |= drawn.len() < missing;
            player.hand.extend(drawn);
        }

        if short {
            self.finish(EndReason::ResponsesExhausted);
        }
        Ok(())
    }

    /// Returns the number of the round that starts.
    pub fn start_round(&mut self) -> Result<u32, RoundError> {
        self.expect(RoundPhase::NextRound, "starting a round")?;

        self.round += 1;
        self.set_phase(RoundPhase::AwaitingCzar);
        Ok(self.round)
    }

    /// The players agree to stop.
    pub fn stop(&mut self) -> Result<(), RoundError> {
        if let RoundPhase::Over(reason) = self.phase {
            return Err(RoundError::GameOver(reason));
        }
        self.finish(EndReason::Stopped);
        Ok(())
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, RoundPhase::Over(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            RoundPhase::Over(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn czar(&self) -> PlayerId {
        self.czar
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn prompt(&self) -> Option<&PromptCard> {
        self.prompt.as_ref()
    }

    /// The player who won the round being discussed.
    pub fn round_winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, RoundError> {
        self.players.get(id.0).ok_or(RoundError::UnknownPlayer(id))
    }

    /// Looks a player up by name, ignoring case.
    pub fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|player| player.name.eq_ignore_ascii_case(name.trim()))
            .map(Player::id)
    }

    pub fn remaining_prompts(&self) -> usize {
        self.prompts.len()
    }

    pub fn remaining_responses(&self) -> usize {
        self.responses.len()
    }

    /// Players by score, highest first; ties keep seat order.
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<&Player> = self.players.iter().collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        standings
    }

    /// Everyone sharing the top score.
    pub fn leaders(&self) -> Vec<PlayerId> {
        let top = self.players.iter().map(Player::score).max().unwrap_or(0);
        self.players
            .iter()
            .filter(|player| player.score == top)
            .map(Player::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(count: usize) -> Vec<String> {
        (0 .. count).map(|i| format!("P{}", i)).collect()
    }

    fn prompts(count: usize) -> Vec<PromptCard> {
        (0 .. count)
            .map(|i| PromptCard::new(format!("Prompt {} ____", i)))
            .collect()
    }

    fn responses(count: usize) -> Vec<ResponseCard> {
        (0 .. count)
            .map(|i| ResponseCard::new(format!("Response {}", i)))
            .collect()
    }

    fn game(players: usize, seed: u64) -> Game {
        Game::new(
            GameConfig::default(),
            names(players),
            prompts(10),
            responses(60),
            seed,
        )
        .unwrap()
    }

    fn submit_all(game: &mut Game) {
        for player in game.pending() {
            game.submit(player, 0).unwrap();
        }
    }

    fn play_round(game: &mut Game) -> PlayerId {
        game.draw_prompt().unwrap();
        submit_all(game);
        game.reveal().unwrap();
        let winner = game.pick_winner(0).unwrap();
        game.end_round().unwrap();
        game.start_round().unwrap();
        winner
    }

    #[test]
    fn test_deals_full_hands() {
        let game = game(4, 1);

        for player in game.players() {
            assert_eq!(player.hand().len(), 5);
            assert_eq!(player.score(), 0);
        }
        assert_eq!(game.remaining_responses(), 40);
        assert_eq!(game.phase(), RoundPhase::AwaitingCzar);
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_full_round_walks_every_phase() {
        let mut game = game(4, 2);
        let czar = game.czar();

        game.draw_prompt().unwrap();
        assert_eq!(game.phase(), RoundPhase::PromptRevealed);
        assert_eq!(game.pending().len(), 3);
        assert!(!game.pending().contains(&czar));

        submit_all(&mut game);
        assert_eq!(game.phase(), RoundPhase::ResponsesCollected);

        assert_eq!(game.reveal().unwrap().len(), 3);
        assert_eq!(game.phase(), RoundPhase::ResponseRevealed);

        let winner = game.pick_winner(1).unwrap();
        assert_ne!(winner, czar);
        assert_eq!(game.player(winner).unwrap().score(), 1);
        assert_eq!(game.phase(), RoundPhase::Scored);

        game.end_round().unwrap();
        assert_eq!(game.phase(), RoundPhase::NextRound);
        assert_eq!(game.czar(), PlayerId((czar.0 + 1) % 4));
        for player in game.players() {
            assert_eq!(player.hand().len(), 5);
        }

        assert_eq!(game.start_round().unwrap(), 2);
        assert_eq!(game.phase(), RoundPhase::AwaitingCzar);
    }

    #[test]
    fn test_czar_rotates_through_every_seat() {
        let mut game = game(3, 5);
        let first = game.czar();

        let mut seen = vec![first];
        for _ in 0 .. 3 {
            play_round(&mut game);
            seen.push(game.czar());
        }

        assert_eq!(seen[1], PlayerId((first.0 + 1) % 3));
        assert_eq!(seen[2], PlayerId((first.0 + 2) % 3));
        assert_eq!(seen[3], first);
    }

    #[test]
    fn test_czar_assignment_is_seeded() {
        let a = game(4, 1234);
        let b = game(4, 1234);
        assert_eq!(a.czar(), b.czar());

        let czars: Vec<_> = (0 .. 32).map(|seed| game(4, seed).czar()).collect();
        assert!(czars.iter().any(|&czar| czar != czars[0]));
    }

    #[test]
    fn test_illegal_moves_leave_game_untouched() {
        let mut game = game(4, 3);
        let czar = game.czar();
        let other = PlayerId((czar.0 + 1) % 4);

        assert!(matches!(
            game.submit(other, 0),
            Err(RoundError::WrongPhase { .. })
        ));
        assert!(matches!(game.reveal(), Err(RoundError::WrongPhase { .. })));
        assert!(matches!(game.award_bonus(other), Err(RoundError::WrongPhase { .. })));

        game.draw_prompt().unwrap();
        assert_eq!(game.submit(czar, 0), Err(RoundError::CzarCannotSubmit(czar)));
        assert_eq!(game.submit(PlayerId(9), 0), Err(RoundError::UnknownPlayer(PlayerId(9))));
        assert_eq!(game.submit(other, 5), Err(RoundError::NoSuchCard {
            player: other,
            index: 5,
            hand_size: 5,
        }));

        game.submit(other, 0).unwrap();
        assert_eq!(game.submit(other, 0), Err(RoundError::AlreadySubmitted(other)));
        assert_eq!(game.player(other).unwrap().hand().len(), 4);
        assert_eq!(game.phase(), RoundPhase::PromptRevealed);
    }

    #[test]
    fn test_pick_out_of_range() {
        let mut game = game(3, 8);
        game.draw_prompt().unwrap();
        submit_all(&mut game);
        game.reveal().unwrap();

        assert_eq!(game.pick_winner(2), Err(RoundError::NoSuchSubmission {
            index: 2,
            count: 2,
        }));
        assert_eq!(game.phase(), RoundPhase::ResponseRevealed);
    }

    #[test]
    fn test_bonus_points() {
        let mut game = game(3, 4);
        let czar = game.czar();
        game.draw_prompt().unwrap();
        submit_all(&mut game);
        game.reveal().unwrap();

        assert_eq!(game.award_bonus(czar).unwrap(), 1);
        game.pick_winner(0).unwrap();
        assert_eq!(game.award_bonus(czar).unwrap(), 2);
        assert_eq!(game.leaders(), vec![czar]);
    }

    #[test]
    fn test_reveal_shows_every_submission_once() {
        let mut game = game(4, 6);
        game.draw_prompt().unwrap();

        let mut submitted = Vec::new();
        for player in game.pending() {
            let text = game.player(player).unwrap().hand()[0].text().to_owned();
            submitted.push((player, text));
            game.submit(player, 0).unwrap();
        }

        let mut revealed: Vec<String> = game
            .reveal()
            .unwrap()
            .into_iter()
            .map(|card| card.text().to_owned())
            .collect();
        let first = revealed[0].clone();
        let winner = game.pick_winner(0).unwrap();

        let owner = submitted.iter().find(|(_, text)| *text == first).map(|(id, _)| *id);
        assert_eq!(owner, Some(winner));

        let mut expected: Vec<String> = submitted.into_iter().map(|(_, text)| text).collect();
        expected.sort();
        revealed.sort();
        assert_eq!(revealed, expected);
    }

    #[test]
    fn test_prompts_running_out_ends_game() {
        let mut game = Game::new(
            GameConfig::default(),
            names(3),
            prompts(1),
            responses(40),
            9,
        )
        .unwrap();

        play_round(&mut game);
        assert_eq!(
            game.draw_prompt().unwrap_err(),
            RoundError::GameOver(EndReason::PromptsExhausted)
        );
        assert_eq!(game.end_reason(), Some(EndReason::PromptsExhausted));
        assert!(matches!(game.stop(), Err(RoundError::GameOver(_))));
    }

    #[test]
    fn test_responses_running_out_ends_game() {
        // 15 dealt, one spare: the first top-up needs 2.
        let mut game = Game::new(
            GameConfig::default(),
            names(3),
            prompts(5),
            responses(16),
            10,
        )
        .unwrap();

        game.draw_prompt().unwrap();
        submit_all(&mut game);
        game.reveal().unwrap();
        game.pick_winner(0).unwrap();
        game.end_round().unwrap();

        assert_eq!(game.end_reason(), Some(EndReason::ResponsesExhausted));
        assert_eq!(game.remaining_responses(), 0);
        let short_hands = game.players().iter().filter(|p| p.hand().len() < 5).count();
        assert_eq!(short_hands, 1);
    }

    #[test]
    fn test_target_score_ends_game() {
        let config = GameConfig {
            points_to_win: Some(1),
            ..GameConfig::default()
        };
        let mut game = Game::new(config, names(3), prompts(5), responses(30), 11).unwrap();

        game.draw_prompt().unwrap();
        submit_all(&mut game);
        game.reveal().unwrap();
        let winner = game.pick_winner(0).unwrap();

        assert_eq!(game.end_reason(), Some(EndReason::TargetReached { winner }));
        assert_eq!(game.end_round(), Err(RoundError::GameOver(EndReason::TargetReached { winner })));
    }

    #[test]
    fn test_setup_errors() {
        let too_few = Game::new(GameConfig::default(), names(2), prompts(1), responses(30), 0);
        assert_eq!(too_few.err(), Some(RoundError::TooFewPlayers { min: 3, actual: 2 }));

        let config = GameConfig {
            max_players: Some(3),
            ..GameConfig::default()
        };
        let too_many = Game::new(config, names(4), prompts(1), responses(30), 0);
        assert_eq!(too_many.err(), Some(RoundError::TooManyPlayers { max: 3, actual: 4 }));

        let short = Game::new(GameConfig::default(), names(4), prompts(1), responses(19), 0);
        assert_eq!(short.err(), Some(RoundError::NotEnoughResponses {
            available: 19,
            needed: 20,
        }));

        let dupes = vec!["Ada".to_owned(), "ada".to_owned(), "Lin".to_owned()];
        let dupes = Game::new(GameConfig::default(), dupes, prompts(1), responses(30), 0);
        assert_eq!(dupes.err(), Some(RoundError::DuplicateName("ada".to_owned())));
    }

    #[test]
    fn test_house_rules_checked_before_dealing() {
        let empty_hands = GameConfig {
            hand_size: 0,
            ..GameConfig::default()
        };
        let game = Game::new(empty_hands, names(3), prompts(1), responses(30), 0);
        assert!(matches!(game.err(), Some(RoundError::InvalidConfig(_))));

        let lone = GameConfig {
            min_players: 1,
            ..GameConfig::default()
        };
        let game = Game::new(lone, names(3), prompts(1), responses(30), 0);
        assert!(matches!(game.err(), Some(RoundError::InvalidConfig(_))));

        let huge_hands = GameConfig {
            hand_size: usize::MAX,
            ..GameConfig::default()
        };
        let game = Game::new(huge_hands, names(3), prompts(1), responses(30), 0);
        assert_eq!(game.err(), Some(RoundError::NotEnoughResponses {
            available: 30,
            needed: usize::MAX,
        }));
    }

    #[test]
    fn test_blank_names_get_seat_names() {
        let names = vec!["".to_owned(), " Ada ".to_owned(), "Lin".to_owned()];
        let game = Game::new(GameConfig::default(), names, prompts(1), responses(30), 0).unwrap();

        assert_eq!(game.players()[0].name(), "Player #1");
        assert_eq!(game.find_player("ada"), Some(PlayerId(1)));
        assert_eq!(game.find_player("nobody"), None);
    }

    #[test]
    fn test_stop_from_any_phase() {
        let mut game = game(3, 12);
        game.draw_prompt().unwrap();

        game.stop().unwrap();
        assert_eq!(game.end_reason(), Some(EndReason::Stopped));
        assert_eq!(
            game.reveal().unwrap_err(),
            RoundError::GameOver(EndReason::Stopped)
        );
    }
}
