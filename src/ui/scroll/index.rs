//! Progress → index mapping.

/// Progress at or below this value always selects the first item.
pub const LEADING_DEAD_ZONE: f64 = 0.1;

/// Progress at or above this value always selects the last item.
pub const TRAILING_DEAD_ZONE: f64 = 0.9;

/// Convert scroll progress through the gallery into an item index.
///
/// Progress is clamped into `[0.0, 1.0]` first (overscroll can push it
/// outside), and NaN is treated as `0.0`. Boundary values resolve to the
/// dead zones. Between them the progress is rescaled to `[0, 1]`,
/// multiplied by `item_count` and floored.
///
/// The result is always in `[0, item_count - 1]`; an empty catalog maps
/// to `0`.
pub fn compute_index(progress: f64, item_count: usize) -> usize {
    let last = item_count.saturating_sub(1);
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    if progress <= LEADING_DEAD_ZONE {
        return 0;
    }
    if progress >= TRAILING_DEAD_ZONE {
        return last;
    }

    let scaled = (progress - LEADING_DEAD_ZONE) / (TRAILING_DEAD_ZONE - LEADING_DEAD_ZONE);
    let index = (scaled * item_count as f64).floor() as usize;
    // Floating-point rounding just below the trailing dead zone can overshoot.
    index.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_dead_zone_selects_first() {
        assert_eq!(compute_index(0.0, 5), 0);
        assert_eq!(compute_index(0.05, 5), 0);
        assert_eq!(compute_index(0.1, 5), 0);
    }

    #[test]
    fn trailing_dead_zone_selects_last() {
        assert_eq!(compute_index(0.9, 5), 4);
        assert_eq!(compute_index(0.95, 5), 4);
        assert_eq!(compute_index(1.0, 5), 4);
    }

    #[test]
    fn interpolated_range() {
        assert_eq!(compute_index(0.5, 5), 2);
        assert_eq!(compute_index(0.18, 5), 0);
        assert_eq!(compute_index(0.3, 5), 1);
        assert_eq!(compute_index(0.89, 5), 4);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(compute_index(-0.4, 5), 0);
        assert_eq!(compute_index(1.7, 5), 4);
        assert_eq!(compute_index(f64::NAN, 5), 0);
    }

    #[test]
    fn single_item_catalog() {
        assert_eq!(compute_index(0.0, 1), 0);
        assert_eq!(compute_index(0.5, 1), 0);
        assert_eq!(compute_index(1.0, 1), 0);
    }

    #[test]
    fn empty_catalog_maps_to_zero() {
        assert_eq!(compute_index(0.5, 0), 0);
    }
}
