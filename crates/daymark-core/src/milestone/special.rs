//! Easter-egg day counts.

/// Day counts that trigger the celebration.
pub const SPECIAL_DAY_COUNTS: [i64; 5] = [12_345, 23_456, 42_000, 10_101, 20_202];

/// Exact membership test; near misses do not count.
pub fn is_special_day_count(days: i64) -> bool {
    SPECIAL_DAY_COUNTS.contains(&days)
}
