use crate::fretboard::STRING_COUNT;
use crate::search::movement_cost;

/// One fret per string, in the fretboard's print order.
///
/// Tabs are only produced by the search; fret 0 means the string is played open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tab {
    frets: [u8; STRING_COUNT],
}

impl Tab {
    pub(crate) fn new(frets: [u8; STRING_COUNT]) -> Self {
        Self { frets }
    }

    pub fn frets(&self) -> [u8; STRING_COUNT] {
        self.frets
    }

    /// Total fret distance between neighbouring strings.
    pub fn movement_cost(&self) -> u32 {
        movement_cost(&self.frets)
    }
}
