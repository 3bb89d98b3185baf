//! Data-integrity checks over loaded packs. Problems found here are flagged
//! for a human to look at; none of them stop a pack from being played.

use std::fmt;

use serde::Serialize;

use super::{
    cards::{Card, Pack},
    vec_map::VecMap,
};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum Issue {
    /// The same text appears on more than one card of a deck.
    DuplicateText {
        deck: &'static str,
        text: String,
        cards: Vec<usize>,
    },
    /// Two cards of a deck share a card number.
    DuplicateNumber {
        deck: &'static str,
        number: String,
        cards: Vec<usize>,
    },
    /// The prompt asks for more responses than a round collects.
    MultipleBlanks { card: usize, blanks: usize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DuplicateText { deck, text, cards } =>
                write!(f, "duplicate {} text {:?} on cards {}", deck, text, join(cards)),
            Issue::DuplicateNumber { deck, number, cards } =>
                write!(f, "duplicate {} number {:?} on cards {}", deck, number, join(cards)),
            Issue::MultipleBlanks { card, blanks } => write!(
                f,
                "prompt card #{} has {} blanks but each player submits one card",
                card, blanks
            ),
        }
    }
}

/// Cards are numbered by position in their deck, counting from 1, which is
/// not the file line once a header or blank lines are skipped.
fn join(cards: &[usize]) -> String {
    cards
        .iter()
        .map(|card| format!("#{}", card))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct ValidationReport {
    pub pack: String,
    pub prompts: usize,
    pub responses: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks a pack. Row numbers count cards from 1, in file order, not counting
/// the header.
pub fn validate(pack: &Pack) -> ValidationReport {
    let mut issues = Vec::new();

    duplicates(&pack.prompts, &mut issues);
    duplicates(&pack.responses, &mut issues);

    issues.extend(
        pack.prompts
            .iter()
            .enumerate()
            .filter(|(_, prompt)| prompt.blanks() > 1)
            .map(|(index, prompt)| Issue::MultipleBlanks {
                card: index + 1,
                blanks: prompt.blanks(),
            }),
    );

    ValidationReport {
        pack: pack.name.clone(),
        prompts: pack.prompts.len(),
        responses: pack.responses.len(),
        issues,
    }
}

fn duplicates<C: Card>(cards: &[C], issues: &mut Vec<Issue>) {
    // Issues come out in first-seen order.
    let mut by_text: VecMap<&str, Vec<usize>> = VecMap::new();
    let mut by_number: VecMap<&str, Vec<usize>> = VecMap::new();

    for (index, card) in cards.iter().enumerate() {
        let position = index + 1;
        by_text.get_or_insert_with(card.text(), Vec::new).push(position);
        if let Some(number) = card.number() {
            by_number.get_or_insert_with(number, Vec::new).push(position);
        }
    }

    issues.extend(
        by_text
            .into_iter()
            .filter(|(_, cards)| cards.len() > 1)
            .map(|(text, cards)| Issue::DuplicateText {
                deck: C::KIND,
                text: text.to_owned(),
                cards,
            }),
    );
    issues.extend(
        by_number
            .into_iter()
            .filter(|(_, cards)| cards.len() > 1)
            .map(|(number, cards)| Issue::DuplicateNumber {
                deck: C::KIND,
                number: number.to_owned(),
                cards,
            }),
    );
}
