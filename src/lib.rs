//! Playing-card rank and suit normalization with optional `no_std` support.
//!
//! The crate provides a [`Card`] type that turns numeric ranks, named face
//! ranks, or combined strings such as `"10H"` into a canonical card code,
//! and a [`Listing`] that renders every card one suit per line.
//!
//! # Example
//!
//! ```
//! use cardcode::{Card, Suit};
//!
//! let card = Card::from_value(1, Suit::Clubs);
//! assert_eq!(card.map(|card| card.to_string()), Ok("AC".to_owned()));
//!
//! let parsed: Result<Card, _> = "10H".parse();
//! assert_eq!(parsed.map(|card| card.to_string()), Ok("10H".to_owned()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod listing;
pub mod options;

// Re-export main types
pub use card::{Card, Rank, SpecialRank, Suit};
pub use error::CardError;
pub use listing::{DECK_SIZE, Listing, RANKS_PER_SUIT, Row};
pub use options::ListingOptions;
