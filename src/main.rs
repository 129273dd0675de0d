//! Prints every card code, one suit per line.

use std::io::{self, Write};

use cardcode::{DECK_SIZE, Listing};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so stdout only carries the listing.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cardcode=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let listing = Listing::default();
    debug!(options = ?listing.options(), cards = DECK_SIZE, "printing listing");

    let mut stdout = io::stdout().lock();
    if let Err(err) = write!(stdout, "{listing}").and_then(|()| stdout.flush()) {
        warn!(%err, "failed to write listing");
    }
}
