//! Card types and rank/suit normalization.

use core::fmt;
use core::str::FromStr;

use strum::{EnumCount, EnumIter};

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum Suit {
    /// Clubs.
    Clubs = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Hearts.
    Hearts = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// Returns the suit's initial, e.g. `"H"` for hearts.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
        }
    }

    /// Parses a suit initial. Lowercase letters are accepted.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Named face ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum SpecialRank {
    /// Ace.
    Ace = 1,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl SpecialRank {
    /// Returns the numeric rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank's initial, e.g. `"Q"` for the queen.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Looks up the special rank with the given numeric value.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Ace),
            11 => Some(Self::Jack),
            12 => Some(Self::Queen),
            13 => Some(Self::King),
            _ => None,
        }
    }

    /// Parses a rank initial. Lowercase letters are accepted.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

const RANK_CODES: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A card rank, always in `1..=13` (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank value (ace).
    pub const MIN: u8 = 1;
    /// Highest rank value (king).
    pub const MAX: u8 = 13;

    /// Creates a rank from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] if `value` is not in `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcode::{CardError, Rank};
    ///
    /// assert_eq!(Rank::new(12).map(Rank::code), Ok("Q"));
    /// assert_eq!(Rank::new(14), Err(CardError::RankOutOfRange(14)));
    /// ```
    pub const fn new(value: u8) -> Result<Self, CardError> {
        if matches!(value, Self::MIN..=Self::MAX) {
            Ok(Self(value))
        } else {
            Err(CardError::RankOutOfRange(value as u32))
        }
    }

    /// Creates a rank from a named face rank.
    #[must_use]
    pub const fn from_special(special: SpecialRank) -> Self {
        Self(special.value())
    }

    /// Returns every rank in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Returns the numeric rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the named face rank, if this is an ace, jack, queen or king.
    #[must_use]
    pub const fn special(self) -> Option<SpecialRank> {
        SpecialRank::from_value(self.0)
    }

    /// Returns the normalized rank code: `"A"`, `"J"`, `"Q"`, `"K"` or the
    /// decimal value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        RANK_CODES[(self.0 - Self::MIN) as usize]
    }
}

impl From<SpecialRank> for Rank {
    fn from(special: SpecialRank) -> Self {
        Self::from_special(special)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A playing card with a normalized rank and suit.
///
/// ```
/// use cardcode::{Card, SpecialRank, Suit};
///
/// let card = Card::from_special(SpecialRank::Ace, Suit::Clubs);
/// assert_eq!(card.rank_code(), "A");
/// assert_eq!(card.suit_code(), "C");
///
/// let parsed: Result<Card, _> = "10h".parse();
/// assert_eq!(parsed.map(|card| card.rank_code()), Ok("10"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from a numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] if `value` is not in `1..=13`.
    pub const fn from_value(value: u8, suit: Suit) -> Result<Self, CardError> {
        match Rank::new(value) {
            Ok(rank) => Ok(Self::new(rank, suit)),
            Err(err) => Err(err),
        }
    }

    /// Creates a card from a named face rank.
    #[must_use]
    pub const fn from_special(rank: SpecialRank, suit: Suit) -> Self {
        Self::new(Rank::from_special(rank), suit)
    }

    /// Returns the card's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the normalized rank, e.g. `"A"` or `"10"`.
    #[must_use]
    pub const fn rank_code(&self) -> &'static str {
        self.rank.code()
    }

    /// Returns the normalized suit, e.g. `"H"`.
    #[must_use]
    pub const fn suit_code(&self) -> &'static str {
        self.suit.code()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rank_code())?;
        f.write_str(self.suit_code())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a combined card string such as `"10H"`, `"AS"` or `"h10"`.
    ///
    /// Digits may appear anywhere but must form a single run. Without digits
    /// the first letter must be a rank initial (`A`, `J`, `Q`, `K`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CardError::Empty);
        }

        let mut value: Option<u32> = None;
        let mut run_ended = false;
        let mut letters = ['\0'; 2];
        let mut letter_count = 0usize;

        for ch in s.chars() {
            if let Some(digit) = ch.to_digit(10) {
                if run_ended {
                    return Err(CardError::InvalidCardFormat);
                }
                value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            } else {
                run_ended |= value.is_some();
                if letter_count < letters.len() {
                    letters[letter_count] = ch;
                }
                letter_count += 1;
            }
        }

        let (rank, suit_letters) = match value {
            Some(value) => {
                let value = u8::try_from(value).map_err(|_| CardError::RankOutOfRange(value))?;
                (Rank::new(value)?, &letters[..letter_count.min(letters.len())])
            }
            None => {
                let special =
                    SpecialRank::from_letter(letters[0]).ok_or(CardError::MissingRank)?;
                (
                    Rank::from_special(special),
                    &letters[1..letter_count.min(letters.len())],
                )
            }
        };
        let suit_count = if value.is_some() {
            letter_count
        } else {
            letter_count - 1
        };

        match (suit_count, suit_letters.first()) {
            (0, _) | (_, None) => Err(CardError::MissingSuit),
            (1, Some(&letter)) => Suit::from_letter(letter)
                .map(|suit| Self::new(rank, suit))
                .ok_or(CardError::UnknownSuit(letter)),
            _ => Err(CardError::MultipleSuits),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
