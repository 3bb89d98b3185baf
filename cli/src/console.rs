use anyhow::{anyhow, bail, Context};
use common::{Card, Game, PlayerId, RoundError, RoundPhase};
use linefeed::{Interface, ReadResult};
use log::{debug, error};

const HELP: &[&str] = &[
    "draw                   czar reveals the next prompt",
    "hand <player>          show a player's cards",
    "submit <player> <n>    play card n from a player's hand",
    "reveal                 czar turns the responses over",
    "pick <n>               czar picks response n as the winner",
    "bonus <player>         a point for a good argument",
    "next                   end the round and pass the czar role on",
    "scores                 show the standings",
    "status                 show where the round is",
    "stop                   end the game",
    "Players can be named or given by seat number.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Draw,
    Hand(String),
    Submit(String, usize),
    Reveal,
    Pick(usize),
    Bonus(String),
    Next,
    Scores,
    Status,
    Help,
    Stop,
}

/// Card and response numbers are typed 1-based and stored 0-based.
fn position(word: &str) -> anyhow::Result<usize> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => bail!("{:?} is not a card number", word),
    }
}

pub fn parse(line: &str) -> anyhow::Result<Action> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (command, rest) = match words.split_first() {
        Some((command, rest)) => (command.to_ascii_lowercase(), rest),
        None => bail!("Type a command, or \"help\""),
    };

    let action = match (command.as_str(), rest) {
        ("draw", []) => Action::Draw,
        ("hand", [_, ..]) => Action::Hand(rest.join(" ")),
        ("submit", [_, .., card]) => {
            let player = rest[.. rest.len() - 1].join(" ");
            Action::Submit(player, position(card)?)
        }
        ("reveal", []) => Action::Reveal,
        ("pick", [n]) => Action::Pick(position(n)?),
        ("bonus", [_, ..]) => Action::Bonus(rest.join(" ")),
        ("next", []) => Action::Next,
        ("scores", []) => Action::Scores,
        ("status", []) => Action::Status,
        ("help", _) | ("?", _) => Action::Help,
        ("stop", []) | ("quit", []) | ("exit", []) => Action::Stop,
        ("draw", _) | ("reveal", _) | ("next", _) | ("scores", _) | ("status", _) | ("stop", _) =>
            bail!("{} takes no arguments", command),
        ("hand", _) | ("bonus", _) => bail!("Usage: {} <player>", command),
        ("submit", _) => bail!("Usage: submit <player> <card number>"),
        ("pick", _) => bail!("Usage: pick <response number>"),
        _ => bail!("Unknown command {:?}, type \"help\"", command),
    };

    Ok(action)
}

/// The shared screen for a table playing in person.
pub struct Console {
    game: Game,
}

impl Console {
    pub fn new(game: Game) -> Self {
        Console { game }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let interface = Interface::new("wcgw").context("Error opening the console")?;
        interface.set_prompt("> ")?;

        for line in self.intro() {
            println!("{}", line);
        }

        loop {
            let line = match interface.read_line() {
                Ok(ReadResult::Input(line)) => line,
                Ok(_) => break,
                Err(e) => {
                    error!("Failed to read console input: {}", e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }
            interface.add_history_unique(line.clone());

            match parse(&line).and_then(|action| self.execute(action)) {
                Ok(output) =>
                    for line in output {
                        println!("{}", line);
                    },
                Err(e) => println!("! {}", e),
            }

            if self.game.is_over() {
                break;
            }
        }

        if !self.game.is_over() {
            for line in self.execute(Action::Stop)? {
                println!("{}", line);
            }
        }
        Ok(())
    }

    fn intro(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} players, {} prompts, {} responses left after dealing (seed {})",
            self.game.players().len(),
            self.game.remaining_prompts(),
            self.game.remaining_responses(),
            self.game.seed()
        )];
        lines.push(format!(
            "{} is the first card czar. Type \"draw\" to begin, \"help\" for commands.",
            self.name(self.game.czar())
        ));
        lines
    }

    fn name(&self, id: PlayerId) -> &str {
        self.game.player(id).map(|player| player.name()).unwrap_or("?")
    }

    /// A seat number (1-based) or a player name.
    pub fn resolve(&self, who: &str) -> anyhow::Result<PlayerId> {
        if let Ok(seat) = who.parse::<usize>() {
            if seat >= 1 && seat <= self.game.players().len() {
                return Ok(PlayerId(seat - 1));
            }
        }

        self.game
            .find_player(who)
            .ok_or_else(|| anyhow!("Nobody called {:?} is playing", who))
    }

    pub fn execute(&mut self, action: Action) -> anyhow::Result<Vec<String>> {
        debug!("Console action: {:?}", action);

        let output = match action {
            Action::Draw => {
                let round = self.game.round();
                let czar = self.name(self.game.czar()).to_owned();
                let prompt = match self.game.draw_prompt() {
                    Ok(prompt) => prompt.clone(),
                    Err(RoundError::GameOver(_)) => return Ok(self.ending()),
                    Err(e) => return Err(e.into()),
                };
                let mut lines = vec![format!("Round {}: {} reads", round, czar), format!("  {}", prompt.text())];
                if prompt.pick() > 1 {
                    lines.push(format!("  (this prompt has {} blanks; play your best single card)", prompt.pick()));
                }
                lines
            }

            Action::Hand(who) => {
                let id = self.resolve(&who)?;
                let player = self.game.player(id)?;
                let mut lines = vec![format!("{}'s hand:", player.name())];
                lines.extend(
                    player
                        .hand()
                        .iter()
                        .enumerate()
                        .map(|(i, card)| format!("  {}. {}", i + 1, card.text())),
                );
                lines
            }

            Action::Submit(who, card) => {
                let id = self.resolve(&who)?;
                self.game.submit(id, card)?;
                match self.game.phase() {
                    RoundPhase::ResponsesCollected =>
                        vec!["All responses are in. Czar, type \"reveal\".".to_owned()],
                    _ => vec![format!(
                        "{} played a card. Waiting for: {}",
                        self.name(id),
                        self.pending_names().join(", ")
                    )],
                }
            }

            Action::Reveal => {
                let revealed = self.game.reveal()?;
                let mut lines = vec!["Responses:".to_owned()];
                lines.extend(
                    revealed
                        .iter()
                        .enumerate()
                        .map(|(i, card)| format!("  {}. {}", i + 1, card.text())),
                );
                lines.push("Discuss, then the czar picks with \"pick <n>\".".to_owned());
                lines
            }

            Action::Pick(index) => {
                let winner = self.game.pick_winner(index)?;
                let score = self.game.player(winner)?.score();
                let mut lines = vec![format!(
                    "{} wins the round and has {} point{}",
                    self.name(winner),
                    score,
                    if score == 1 { "" } else { "s" }
                )];
                lines.extend(self.ending());
                lines
            }

            Action::Bonus(who) => {
                let id = self.resolve(&who)?;
                let score = self.game.award_bonus(id)?;
                let mut lines = vec![format!("Bonus point for {} (now {})", self.name(id), score)];
                lines.extend(self.ending());
                lines
            }

            Action::Next => {
                self.game.end_round()?;
                if self.game.is_over() {
                    self.ending()
                } else {
                    let round = self.game.start_round()?;
                    vec![format!(
                        "Round {}. {} is the card czar, type \"draw\".",
                        round,
                        self.name(self.game.czar())
                    )]
                }
            }

            Action::Scores => self.scores(),

            Action::Status => self.status(),

            Action::Help => HELP.iter().map(|line| line.to_string()).collect(),

            Action::Stop => {
                self.game.stop()?;
                self.ending()
            }
        };

        Ok(output)
    }

    fn pending_names(&self) -> Vec<String> {
        self.game
            .pending()
            .into_iter()
            .map(|id| self.name(id).to_owned())
            .collect()
    }

    fn scores(&self) -> Vec<String> {
        self.game
            .standings()
            .into_iter()
            .map(|player| format!("{:>4}  {}", player.score(), player.name()))
            .collect()
    }

    fn status(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Round {}, czar {}: {}",
            self.game.round(),
            self.name(self.game.czar()),
            self.game.phase()
        )];
        if let Some(prompt) = self.game.prompt() {
            lines.push(format!("  {}", prompt.text()));
        }
        let pending = self.pending_names();
        if !pending.is_empty() {
            lines.push(format!("Waiting for: {}", pending.join(", ")));
        }
        lines.push(format!(
            "{} prompts and {} responses left",
            self.game.remaining_prompts(),
            self.game.remaining_responses()
        ));
        lines
    }

    /// Final standings once the game is over, nothing before.
    fn ending(&self) -> Vec<String> {
        let reason = match self.game.end_reason() {
            Some(reason) => reason,
            None => return Vec::new(),
        };

        let leaders: Vec<String> = self
            .game
            .leaders()
            .into_iter()
            .map(|id| self.name(id).to_owned())
            .collect();
        let mut lines = vec![
            format!("Game over: {}.", reason),
            format!("Top score: {}", leaders.join(", ")),
        ];
        lines.extend(self.scores());
        lines
    }
}
