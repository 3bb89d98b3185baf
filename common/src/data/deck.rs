use std::collections::VecDeque;

use crate::rng::TableRng;

/// Cards of one kind, drawn from the top.
///
/// Loading preserves file order; a game shuffles before dealing. There is no
/// way to put cards back: once a deck runs dry the game ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck<C> {
    cards: VecDeque<C>,
}

impl<C> Deck<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Deck {
            cards: cards.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<C> {
        self.cards.pop_front()
    }

    /// Draws up to `count` cards, fewer if the deck runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<C> {
        let count = count.min(self.cards.len());
        self.cards.drain(.. count).collect()
    }

    pub fn shuffle(&mut self, rng: &mut TableRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }

    pub fn into_vec(self) -> Vec<C> {
        self.cards.into()
    }
}

impl<C> From<Vec<C>> for Deck<C> {
    fn from(cards: Vec<C>) -> Self {
        Deck::new(cards)
    }
}
