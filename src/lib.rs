pub mod calculator;
pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod render;
pub mod search;
pub mod tab;
pub mod tone;

pub use calculator::TabCalculator;
pub use chord::Chord;
pub use config::TabConfig;
pub use error::*;
pub use fretboard::{Fretboard, FRET_LIMIT, MAX_FRETS, STANDARD_TUNING, STRING_COUNT};
pub use render::{render_tab, FRET_LABELS};
pub use search::movement_cost;
pub use tab::Tab;
pub use tone::Tone;

/// Find the `count` most playable tabs for a major chord.
/// This is the main entry point for the library.
pub fn generate_tabs(chord_name: &str, count: i64) -> Result<Vec<Tab>, TabError> {
    TabCalculator::new(chord_name)?.generate(count)
}

/// Generate and render tabs using the given configuration.
pub fn render_chord(chord_name: &str, config: &TabConfig) -> Result<Vec<String>, TabError> {
    let fretboard = config.fretboard();
    let calc = TabCalculator::with_fretboard(chord_name.parse()?, fretboard);
    let tabs = calc.generate(config.count)?;
    Ok(tabs
        .iter()
        .map(|tab| render_tab(tab, &fretboard, &config.fret_labels))
        .collect())
}
