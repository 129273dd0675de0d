//! Ordered card listing, one line per suit.

use core::fmt;

use strum::EnumCount;

use crate::card::{Card, Rank, Suit};
use crate::options::ListingOptions;

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = Rank::MAX as usize;

/// Number of cards in a full listing.
pub const DECK_SIZE: usize = RANKS_PER_SUIT * Suit::COUNT;

/// Every rank/suit combination, grouped by suit.
///
/// ```
/// use cardcode::Listing;
///
/// let listing = Listing::default();
/// let text = listing.to_string();
/// assert!(text.starts_with("AC,2C,3C"));
/// assert_eq!(text.lines().count(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Listing {
    options: ListingOptions,
}

impl Listing {
    /// Creates a listing with the given options.
    #[must_use]
    pub const fn new(options: ListingOptions) -> Self {
        Self { options }
    }

    /// Returns the listing options.
    #[must_use]
    pub const fn options(&self) -> &ListingOptions {
        &self.options
    }

    /// Returns one row per configured suit.
    pub fn rows(&self) -> impl Iterator<Item = Row> + use<> {
        let separator = self.options.separator;
        self.options
            .suits
            .into_iter()
            .map(move |suit| Row { suit, separator })
    }

    /// Returns every card, suit by suit, ranks ascending.
    pub fn cards(&self) -> impl Iterator<Item = Card> + use<> {
        self.rows().flat_map(|row| row.cards())
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// A single suit's line in a [`Listing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    suit: Suit,
    separator: &'static str,
}

impl Row {
    /// Returns the row's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the row's cards, ace to king.
    pub fn cards(&self) -> impl Iterator<Item = Card> + use<> {
        let suit = self.suit;
        Rank::all().map(move |rank| Card::new(rank, suit))
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards().enumerate() {
            if index > 0 {
                f.write_str(self.separator)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
