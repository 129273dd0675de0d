//! Listing integration tests.

use cardcode::{Card, DECK_SIZE, Listing, ListingOptions, RANKS_PER_SUIT, Suit};
use rstest::rstest;

#[test]
fn default_listing_has_four_lines_of_thirteen() {
    let text = Listing::default().to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert_eq!(line.split(',').count(), RANKS_PER_SUIT);
    }
    assert_eq!(lines[0], "AC,2C,3C,4C,5C,6C,7C,8C,9C,10C,JC,QC,KC");
    assert_eq!(lines[3], "AS,2S,3S,4S,5S,6S,7S,8S,9S,10S,JS,QS,KS");
    assert!(text.ends_with("KS\n"));
}

#[test]
fn cards_are_grouped_by_suit_and_unique() {
    let cards: Vec<Card> = Listing::default().cards().collect();
    assert_eq!(cards.len(), DECK_SIZE);

    let suits: Vec<Suit> = cards.chunks(RANKS_PER_SUIT).map(|row| row[0].suit()).collect();
    assert_eq!(suits, [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]);

    for (index, card) in cards.iter().enumerate() {
        assert!(!cards[..index].contains(card), "duplicate {card}");
        assert_eq!(usize::from(card.rank().value()), index % RANKS_PER_SUIT + 1);
    }
}

#[test]
fn rows_render_like_listing_lines() {
    let listing = Listing::default();
    let text = listing.to_string();
    for (row, line) in listing.rows().zip(text.lines()) {
        assert_eq!(row.to_string(), line);
        assert!(row.cards().all(|card| card.suit() == row.suit()));
    }
}

#[rstest]
#[case(", ", "AH, 2H, 3H")]
#[case("\t", "AH\t2H\t3H")]
fn custom_separator(#[case] separator: &'static str, #[case] prefix: &str) {
    let options = ListingOptions::default()
        .with_separator(separator)
        .with_suits([Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs]);
    let text = Listing::new(options).to_string();

    assert!(text.starts_with(prefix), "{text}");
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn options_builder_sets_fields() {
    let order = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    let options = ListingOptions::default().with_separator(" ").with_suits(order);

    assert_eq!(options.separator, " ");
    assert_eq!(options.suits, order);
    assert_eq!(Listing::new(options).options(), &options);

    let first = Listing::new(options).cards().next();
    assert_eq!(first, Card::from_value(1, Suit::Spades).ok());
}
