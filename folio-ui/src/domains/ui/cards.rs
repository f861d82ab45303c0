//! Expandable content cards with a "Read more" toggle.

use std::fmt;

use folio_contracts::Presentable;
use folio_model::PresentationFlag;

/// Text shown on a card's toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMoreLabel {
    ReadMore,
    ReadLess,
}

impl ReadMoreLabel {
    pub fn for_expanded(expanded: bool) -> Self {
        if expanded { Self::ReadLess } else { Self::ReadMore }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadMore => "Read more",
            Self::ReadLess => "Read less",
        }
    }
}

impl fmt::Display for ReadMoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardDeck<C> {
    cards: Vec<C>,
}

impl<C: Presentable> CardDeck<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .is_some_and(|card| card.has_flag(PresentationFlag::Expanded))
    }

    /// Flip card `index` and return the label its button should now show.
    /// `None` for an index past the end.
    pub fn toggle(&mut self, index: usize) -> Option<ReadMoreLabel> {
        let card = self.cards.get_mut(index)?;
        let expanded = card.toggle_flag(PresentationFlag::Expanded);
        log::debug!("card {index} expanded={expanded}");
        Some(ReadMoreLabel::for_expanded(expanded))
    }

    /// Collapse every card, returning how many were open.
    pub fn collapse_all(&mut self) -> usize {
        let mut collapsed = 0;
        for card in &mut self.cards {
            if card.has_flag(PresentationFlag::Expanded) {
                card.set_flag(PresentationFlag::Expanded, false);
                collapsed += 1;
            }
        }
        collapsed
    }

    pub fn into_cards(self) -> Vec<C> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::headless::HeadlessItem;

    #[test]
    fn toggle_flips_label() {
        let mut deck = CardDeck::new(HeadlessItem::batch("card", 3, 10.0));
        assert_eq!(deck.toggle(1), Some(ReadMoreLabel::ReadLess));
        assert!(deck.is_expanded(1));
        assert_eq!(deck.toggle(1), Some(ReadMoreLabel::ReadMore));
        assert!(!deck.is_expanded(1));
        assert_eq!(ReadMoreLabel::ReadLess.to_string(), "Read less");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut deck = CardDeck::new(HeadlessItem::batch("card", 2, 10.0));
        assert_eq!(deck.toggle(2), None);
        assert!(!deck.is_expanded(2));
    }

    #[test]
    fn collapse_all_counts_open_cards() {
        let mut deck = CardDeck::new(HeadlessItem::batch("card", 4, 10.0));
        deck.toggle(0);
        deck.toggle(3);
        assert_eq!(deck.collapse_all(), 2);
        assert!((0..4).all(|i| !deck.is_expanded(i)));
    }
}
