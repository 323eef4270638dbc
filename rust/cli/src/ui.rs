//! UI helper functions for terminal output formatting.

use std::io::Write;

use fairdeal_engine::cards::Card;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Space-separated card notation, e.g. `AS KD 2C`.
pub fn format_cards<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
