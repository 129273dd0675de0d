//! Listing configuration options.

use crate::card::Suit;

/// Configuration options for a card [`Listing`](crate::Listing).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardcode::{ListingOptions, Suit};
///
/// let options = ListingOptions::default()
///     .with_separator(" ")
///     .with_suits([Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingOptions {
    /// Text placed between cards on the same line.
    pub separator: &'static str,
    /// Suits in the order their lines are printed.
    pub suits: [Suit; 4],
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            separator: ",",
            suits: [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades],
        }
    }
}

impl ListingOptions {
    /// Sets the separator between cards.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcode::ListingOptions;
    ///
    /// let options = ListingOptions::default().with_separator(", ");
    /// assert_eq!(options.separator, ", ");
    /// ```
    #[must_use]
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the order of the suit lines.
    ///
    /// Repeating a suit repeats its line.
    #[must_use]
    pub const fn with_suits(mut self, suits: [Suit; 4]) -> Self {
        self.suits = suits;
        self
    }
}
