//! # Combination Search
//!
//! Ranks every way of picking one candidate fret per string.
//!
//! ## Algorithm
//! 1. Build the full cross product of the per-string candidate lists. The last string
//!    varies fastest, so combinations come out in lexicographic order.
//! 2. Score each combination with [`movement_cost`].
//! 3. Stable-sort by score and keep the first `count`.
//!
//! The search is exhaustive. For a triad on a 14-fret neck each string has at most four
//! candidates, so there are at most 4^6 = 4096 combinations.
//!
//! ## Ties
//! Combinations with equal cost keep their enumeration order.

use itertools::iproduct;
use tracing::debug;

use crate::error::TabError;
use crate::fretboard::{Candidates, Fretboard};
use crate::tab::Tab;

/// Sum of absolute fret differences between adjacent strings.
///
/// # Example
/// ```
/// use tabgen::movement_cost;
///
/// assert_eq!(movement_cost(&[3, 5, 5, 5, 3, 3]), 4);
/// ```
pub fn movement_cost(frets: &[u8]) -> u32 {
    frets
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]) as u32)
        .sum()
}

/// Check that a requested tab count is at least 1.
pub fn validate_count(count: i64) -> Result<usize, TabError> {
    if count < 1 {
        return Err(TabError::InvalidArgument(format!(
            "tab count must be at least 1, got {}",
            count
        )));
    }
    usize::try_from(count)
        .map_err(|_| TabError::InvalidArgument(format!("tab count {} is too large", count)))
}

/// Number of combinations the search will score.
pub fn combination_count(candidates: &Candidates) -> usize {
    candidates.iter().map(Vec::len).product()
}

/// The `count` lowest-cost tabs, best first.
///
/// `candidates` must be index-aligned with the strings of `fretboard`; `count` comes
/// from [`validate_count`]. Returns every combination when fewer than `count` exist.
///
/// # Errors
/// Returns [`TabError::NoCandidates`] if any string has an empty candidate list, since
/// the cross product would otherwise be silently empty.
pub fn rank_tabs(
    fretboard: &Fretboard,
    candidates: &Candidates,
    count: usize,
) -> Result<Vec<Tab>, TabError> {
    if let Some(string) = candidates.iter().position(Vec::is_empty) {
        return Err(TabError::NoCandidates {
            string,
            open: fretboard.strings()[string],
            max_frets: fretboard.max_frets(),
        });
    }

    let [first, second, third, fourth, fifth, sixth] = candidates;
    let mut scored: Vec<(u32, Tab)> = iproduct!(
        first.iter(),
        second.iter(),
        third.iter(),
        fourth.iter(),
        fifth.iter(),
        sixth.iter()
    )
    .map(|(&a, &b, &c, &d, &e, &f)| {
        let frets = [a, b, c, d, e, f];
        (movement_cost(&frets), Tab::new(frets))
    })
    .collect();

    debug!(combinations = scored.len(), "scored all combinations");

    // sort_by_key is stable, ties stay in enumeration order
    scored.sort_by_key(|(cost, _)| *cost);
    scored.truncate(count);

    if let Some((best, _)) = scored.first() {
        debug!(best_cost = *best, kept = scored.len(), "ranked tabs");
    }

    Ok(scored.into_iter().map(|(_, tab)| tab).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;
    use crate::fretboard::MAX_FRETS;
    use crate::tone::Tone;

    fn candidates_for(root: Tone) -> Candidates {
        Fretboard::default()
            .candidate_frets(&Chord::major(root))
            .unwrap()
    }

    fn rank(candidates: &Candidates, count: usize) -> Result<Vec<Tab>, TabError> {
        rank_tabs(&Fretboard::default(), candidates, count)
    }

    #[test]
    fn test_movement_cost_of_short_input() {
        assert_eq!(movement_cost(&[]), 0);
        assert_eq!(movement_cost(&[7]), 0);
        assert_eq!(movement_cost(&[7, 2]), 5);
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count(1), Ok(1));
        assert_eq!(validate_count(10_000), Ok(10_000));
        assert!(matches!(validate_count(0), Err(TabError::InvalidArgument(_))));
        assert!(matches!(validate_count(-1), Err(TabError::InvalidArgument(_))));
    }

    #[test]
    fn test_best_c_major_tabs() {
        let tabs = rank(&candidates_for(Tone::C), 3).unwrap();
        let frets: Vec<_> = tabs.iter().map(Tab::frets).collect();
        assert_eq!(
            frets,
            vec![
                [3, 5, 5, 5, 3, 3],
                [8, 8, 9, 10, 10, 8],
                [8, 8, 9, 10, 10, 12],
            ]
        );
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        // Both cost 4; the one with the lower last fret is enumerated first.
        let tabs = rank(&candidates_for(Tone::E), 2).unwrap();
        assert_eq!(tabs[0].frets(), [0, 0, 1, 2, 2, 0]);
        assert_eq!(tabs[1].frets(), [0, 0, 1, 2, 2, 4]);
    }

    #[test]
    fn test_ranking_is_sorted_and_bounded() {
        for root in Tone::ALL {
            let candidates = candidates_for(root);
            let tabs = rank(&candidates, 50).unwrap();
            assert_eq!(tabs.len(), 50);
            assert!(tabs
                .windows(2)
                .all(|w| w[0].movement_cost() <= w[1].movement_cost()));
        }
    }

    #[test]
    fn test_count_above_total_returns_everything() {
        let candidates = candidates_for(Tone::C);
        assert_eq!(combination_count(&candidates), 2304);
        let tabs = rank(&candidates, 10_000).unwrap();
        assert_eq!(tabs.len(), 2304);
    }

    #[test]
    fn test_single_candidate_per_string() {
        let candidates: Candidates = [
            vec![1],
            vec![2],
            vec![3],
            vec![4],
            vec![5],
            vec![6],
        ];
        let tabs = rank(&candidates, 5).unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].frets(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_string_is_reported_not_ranked() {
        let candidates: Candidates = [
            vec![1],
            vec![],
            vec![3],
            vec![4],
            vec![5],
            vec![6],
        ];
        assert_eq!(
            rank(&candidates, 3),
            Err(TabError::NoCandidates {
                string: 1,
                open: Tone::H,
                max_frets: MAX_FRETS,
            })
        );
    }

    #[test]
    fn test_combinations_follow_candidate_order() {
        // Enumerated as (0,0) (0,4) (4,0) (4,4); costs 2 6 6 2, ties keep that order.
        let candidates: Candidates = [
            vec![2],
            vec![2],
            vec![2],
            vec![2],
            vec![0, 4],
            vec![0, 4],
        ];
        let frets: Vec<_> = rank(&candidates, 10)
            .unwrap()
            .iter()
            .map(Tab::frets)
            .collect();
        assert_eq!(
            frets,
            vec![
                [2, 2, 2, 2, 0, 0],
                [2, 2, 2, 2, 4, 4],
                [2, 2, 2, 2, 0, 4],
                [2, 2, 2, 2, 4, 0],
            ]
        );
    }
}
