//! # Rail Combination Optimizer
//!
//! Chooses the catalog segments for one row's rail: the combination with the
//! fewest segments whose total length falls inside the required range, and
//! among those, the shortest total.
//!
//! ## Algorithm
//!
//! A dynamic program over every achievable total from 0 to `max_rail`. Slot
//! `s` of the table holds the fewest-segment way to reach exactly `s` mm, as a
//! back-pointer: the catalog index of the last segment added and the segment
//! count. Walking back-pointers from `s` recovers the full counts.
//!
//! ```text
//! best[0] = 0 segments
//! best[s] = min over catalog entries L <= s with best[s - L] defined
//!           of best[s - L] + 1          (first entry in catalog order on ties)
//! ```
//!
//! The selection step then compares every defined slot in
//! `[min_rail, max_rail]` by `(segment_count, total)`.
//!
//! Time and space are O(max_rail × catalog) and O(max_rail).
//!
//! ## Example
//!
//! ```rust
//! use rail_core::calculations::rail_optimizer::optimize;
//! use rail_core::catalog::{RailSegment, RAIL_CATALOG};
//!
//! let best = optimize(3360, 4320, &RAIL_CATALOG).unwrap();
//! assert_eq!(best.total_length_mm, 3500);
//! assert_eq!(best.segment_lengths_desc(), vec![1750, 1750]);
//! assert_eq!(best.count_of(RailSegment::R175), 2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calculations::geometry::MAX_RAIL_LENGTH_MM;
use crate::catalog::RailSegment;

/// How many of one catalog segment a combination uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCount {
    pub segment: RailSegment,
    pub count: u32,
}

/// The selected combination of catalog segments for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailCombination {
    /// One entry per catalog segment, in catalog order (zero counts included)
    pub counts: Vec<SegmentCount>,

    /// Total number of segments
    pub segment_count: u32,

    /// Sum of all segment lengths (mm)
    pub total_length_mm: u32,
}

impl RailCombination {
    /// How many of `segment` the combination uses
    pub fn count_of(&self, segment: RailSegment) -> u32 {
        self.counts
            .iter()
            .filter(|c| c.segment == segment)
            .map(|c| c.count)
            .sum()
    }

    /// Only the segments actually used, in catalog order
    pub fn used(&self) -> impl Iterator<Item = &SegmentCount> {
        self.counts.iter().filter(|c| c.count > 0)
    }

    /// Every segment as an individual piece, longest first
    pub fn segments_desc(&self) -> Vec<RailSegment> {
        let mut segments: Vec<RailSegment> = self
            .counts
            .iter()
            .flat_map(|c| std::iter::repeat(c.segment).take(c.count as usize))
            .collect();
        segments.sort_by(|a, b| b.length_mm().cmp(&a.length_mm()));
        segments
    }

    /// Every segment length, longest first
    pub fn segment_lengths_desc(&self) -> Vec<u32> {
        self.segments_desc().iter().map(|s| s.length_mm()).collect()
    }
}

/// Back-pointer for one reachable total
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Catalog index of the last segment added, `None` for the empty rail
    last: Option<usize>,
    segment_count: u32,
}

/// Find the best combination of catalog segments with a total in
/// `[min_rail_mm, max_rail_mm]`.
///
/// Returns `None` when the range is empty (`min > max`), when `max_rail_mm`
/// exceeds [`MAX_RAIL_LENGTH_MM`], or when no total in the range is
/// reachable with the catalog. The returned total is always inside the range.
pub fn optimize(min_rail_mm: u32, max_rail_mm: u32, catalog: &[RailSegment]) -> Option<RailCombination> {
    if min_rail_mm > max_rail_mm || max_rail_mm > MAX_RAIL_LENGTH_MM {
        return None;
    }

    let table = build_table(max_rail_mm, catalog);

    let (target, slot) = (min_rail_mm..=max_rail_mm)
        .filter_map(|sum| table[sum as usize].map(|slot| (sum, slot)))
        .min_by_key(|&(sum, slot)| selection_key(sum, slot))?;

    debug!(
        min_rail_mm,
        max_rail_mm,
        target,
        segment_count = slot.segment_count,
        "selected rail combination"
    );

    Some(reconstruct(&table, target, catalog))
}

/// Fewest segments first, then the shortest total.
fn selection_key(sum: u32, slot: Slot) -> (u32, u32) {
    (slot.segment_count, sum)
}

fn build_table(max_rail_mm: u32, catalog: &[RailSegment]) -> Vec<Option<Slot>> {
    let len = max_rail_mm as usize + 1;
    let mut table: Vec<Option<Slot>> = vec![None; len];
    table[0] = Some(Slot {
        last: None,
        segment_count: 0,
    });

    for sum in 1..len {
        let mut best: Option<Slot> = None;
        for (index, segment) in catalog.iter().enumerate() {
            let length = segment.length_mm() as usize;
            if length == 0 || length > sum {
                continue;
            }
            let Some(previous) = table[sum - length] else {
                continue;
            };
            let candidate = previous.segment_count + 1;
            // Strict comparison keeps the earliest catalog entry on ties
            if best.map_or(true, |b| candidate < b.segment_count) {
                best = Some(Slot {
                    last: Some(index),
                    segment_count: candidate,
                });
            }
        }
        table[sum] = best;
    }

    trace!(
        reachable = table.iter().filter(|slot| slot.is_some()).count(),
        max_rail_mm,
        "built rail table"
    );
    table
}

fn reconstruct(table: &[Option<Slot>], target: u32, catalog: &[RailSegment]) -> RailCombination {
    let mut counts: Vec<SegmentCount> = catalog
        .iter()
        .map(|&segment| SegmentCount { segment, count: 0 })
        .collect();

    let mut sum = target as usize;
    while let Some(Slot { last: Some(index), .. }) = table[sum] {
        counts[index].count += 1;
        sum -= catalog[index].length_mm() as usize;
    }

    let segment_count: u32 = counts.iter().map(|c| c.count).sum();
    let total_length_mm: u32 = counts.iter().map(|c| c.count * c.segment.length_mm()).sum();

    RailCombination {
        counts,
        segment_count,
        total_length_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RAIL_CATALOG;

    /// Exhaustive search over every count vector with a total up to 7000 mm
    fn brute_force(min: u32, max: u32) -> Option<(u32, u32)> {
        let mut best: Option<(u32, u32)> = None;
        for a in 0..=4u32 {
            for b in 0..=6u32 {
                for c in 0..=11u32 {
                    for d in 0..=15u32 {
                        let sum = a * 1750 + b * 1250 + c * 680 + d * 480;
                        if sum < min || sum > max {
                            continue;
                        }
                        let key = (a + b + c + d, sum);
                        if best.map_or(true, |k| key < k) {
                            best = Some(key);
                        }
                    }
                }
            }
        }
        best
    }

    #[test]
    fn test_scenario_a_two_long_segments() {
        let best = optimize(3360, 4320, &RAIL_CATALOG).unwrap();
        assert_eq!(best.segment_count, 2);
        assert_eq!(best.total_length_mm, 3500);
        assert_eq!(best.count_of(RailSegment::R175), 2);
        assert_eq!(best.used().count(), 1);
    }

    #[test]
    fn test_tie_break_prefers_shorter_total() {
        // Both 1750 + 480 = 2230 and 1750 + 680 = 2430 use two segments
        let best = optimize(2100, 2430, &RAIL_CATALOG).unwrap();
        assert_eq!(best.total_length_mm, 2230);
        assert_eq!(best.segment_lengths_desc(), vec![1750, 480]);
    }

    #[test]
    fn test_segment_count_beats_shorter_total() {
        // 960 (480 + 480) is shorter than 1250 but needs two segments
        let best = optimize(900, 1300, &RAIL_CATALOG).unwrap();
        assert_eq!(best.total_length_mm, 1250);
        assert_eq!(best.segment_count, 1);
    }

    #[test]
    fn test_single_segment_smallest() {
        let best = optimize(480, 1440, &RAIL_CATALOG).unwrap();
        assert_eq!(best.segment_lengths_desc(), vec![480]);
    }

    #[test]
    fn test_single_point_range() {
        let best = optimize(1160, 1160, &RAIL_CATALOG).unwrap();
        assert_eq!(best.total_length_mm, 1160);
        assert_eq!(best.segment_lengths_desc(), vec![680, 480]);

        assert!(optimize(1161, 1161, &RAIL_CATALOG).is_none());
    }

    #[test]
    fn test_zero_in_range_gives_empty_rail() {
        let best = optimize(0, 5000, &RAIL_CATALOG).unwrap();
        assert_eq!(best.segment_count, 0);
        assert_eq!(best.total_length_mm, 0);
        assert!(best.segments_desc().is_empty());
        assert_eq!(best.counts.len(), RAIL_CATALOG.len());
    }

    #[test]
    fn test_unreachable_range() {
        assert!(optimize(380, 470, &RAIL_CATALOG).is_none());
        assert!(optimize(1, 479, &RAIL_CATALOG).is_none());
    }

    #[test]
    fn test_empty_range() {
        assert!(optimize(500, 400, &RAIL_CATALOG).is_none());
    }

    #[test]
    fn test_search_bound() {
        assert!(optimize(0, u32::MAX, &RAIL_CATALOG).is_none());
        assert!(optimize(MAX_RAIL_LENGTH_MM + 1, MAX_RAIL_LENGTH_MM + 1, &RAIL_CATALOG).is_none());
        let best = optimize(MAX_RAIL_LENGTH_MM - 1000, MAX_RAIL_LENGTH_MM, &RAIL_CATALOG).unwrap();
        assert!(best.total_length_mm <= MAX_RAIL_LENGTH_MM);
    }

    #[test]
    fn test_idempotent() {
        let first = optimize(2100, 2430, &RAIL_CATALOG);
        let second = optimize(2100, 2430, &RAIL_CATALOG);
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_order_does_not_change_result_total() {
        let mut reversed = RAIL_CATALOG;
        reversed.reverse();
        let forward = optimize(3360, 4320, &RAIL_CATALOG).unwrap();
        let backward = optimize(3360, 4320, &reversed).unwrap();
        assert_eq!(forward.total_length_mm, backward.total_length_mm);
        assert_eq!(forward.segment_count, backward.segment_count);
    }

    #[test]
    fn test_matches_brute_force() {
        // Sweep windows across the lengths a few rows of displays produce
        for min in (0..=6000).step_by(97) {
            for width in [0, 50, 200, 475, 900] {
                let max = min + width;
                let expected = brute_force(min, max);
                let actual = optimize(min, max, &RAIL_CATALOG)
                    .map(|c| (c.segment_count, c.total_length_mm));
                assert_eq!(actual, expected, "range [{}, {}]", min, max);
            }
        }
    }

    #[test]
    fn test_result_always_in_range_and_consistent() {
        for min in (400..=8000).step_by(131) {
            let max = min + 400;
            if let Some(best) = optimize(min, max, &RAIL_CATALOG) {
                assert!(best.total_length_mm >= min && best.total_length_mm <= max);
                let lengths = best.segment_lengths_desc();
                assert_eq!(lengths.iter().sum::<u32>(), best.total_length_mm);
                assert_eq!(lengths.len() as u32, best.segment_count);
                assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
