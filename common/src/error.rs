use std::{io, path::PathBuf};

use crate::round::{EndReason, PlayerId, RoundPhase};

/// Failure to turn a CSV file into a deck.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV, including rows with a different number of fields than
    /// the header and invalid UTF-8.
    #[error("malformed CSV{}: {source}", line_suffix(.line))]
    Csv {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    #[error("card on line {line} has no text")]
    BlankText { line: u64 },

    #[error("header row has no columns")]
    EmptyHeader,
}

impl ParseError {
    pub(crate) fn csv(source: csv::Error) -> Self {
        let line = source.position().map(|position| position.line());
        ParseError::Csv { line, source }
    }

    /// Line in the file the error points at, when known.
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::Csv { line, .. } => *line,
            ParseError::BlankText { line } => Some(*line),
            _ => None,
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" on line {}", line),
        None => String::new(),
    }
}

/// An action the round coordinator refused. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("{action} is not allowed while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: RoundPhase,
    },

    #[error("the game is over: {0}")]
    GameOver(EndReason),

    #[error("{0} is not at the table")]
    UnknownPlayer(PlayerId),

    #[error("{0} is the card czar this round and does not submit")]
    CzarCannotSubmit(PlayerId),

    #[error("{0} already submitted a card this round")]
    AlreadySubmitted(PlayerId),

    #[error("{player} has no card #{index} (hand holds {hand_size})")]
    NoSuchCard {
        player: PlayerId,
        index: usize,
        hand_size: usize,
    },

    #[error("there is no revealed response #{index} ({count} revealed)")]
    NoSuchSubmission { index: usize, count: usize },

    #[error("need at least {min} players, got {actual}")]
    TooFewPlayers { min: usize, actual: usize },

    #[error("at most {max} players can join, got {actual}")]
    TooManyPlayers { max: usize, actual: usize },

    #[error("two players are called {0:?}")]
    DuplicateName(String),

    #[error("invalid house rules: {0}")]
    InvalidConfig(String),

    #[error("response deck holds {available} cards, dealing needs {needed}")]
    NotEnoughResponses { available: usize, needed: usize },
}
