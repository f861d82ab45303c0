//! Circular layout math for the carousel track.
//!
//! Item `i` sits at logical position `i * spacing + base_offset`. The logical
//! position is wrapped into `[-total/2, total/2)` around the track center so
//! the ring scrolls without a visible seam.

/// Bring `offset` into `(-total_width, 0]`.
///
/// Values already in range are returned untouched so repeated normalisation
/// never drifts.
pub fn normalize_offset(offset: f32, total_width: f32) -> f32 {
    if total_width <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    if offset > -total_width && offset <= 0.0 {
        return offset;
    }
    let r = offset.rem_euclid(total_width);
    let shifted = if r == 0.0 { 0.0 } else { r - total_width };
    // r can sit within rounding distance of total_width, which would land
    // exactly on the excluded bound.
    if shifted <= -total_width { 0.0 } else { shifted }
}

/// Wrap a logical position into `[-total_width/2, total_width/2)`.
pub fn wrap_logical(logical: f32, total_width: f32) -> f32 {
    if total_width <= 0.0 {
        return 0.0;
    }
    let mut r = logical.rem_euclid(total_width);
    if r >= total_width {
        r = 0.0;
    }
    r - total_width / 2.0
}

/// Track-local center position of item `index`.
pub fn item_position(
    index: usize,
    spacing: f32,
    base_offset: f32,
    track_width: f32,
    item_count: usize,
) -> f32 {
    let total = spacing * item_count as f32;
    let logical = index as f32 * spacing + base_offset;
    track_width / 2.0 + wrap_logical(logical, total)
}

/// Index of the value closest to `target`; ties keep the first one seen.
pub fn nearest_index<I>(target: f32, centers: I) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
{
    let mut best: Option<(usize, f32)> = None;
    for (i, c) in centers.into_iter().enumerate() {
        let d = (c - target).abs();
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const W: f32 = 1260.0; // 7 items * 180px

    #[test]
    fn normalize_keeps_in_range_values_exact() {
        for o in [0.0, -0.1, -630.25, -1259.99] {
            assert_eq!(normalize_offset(o, W), o);
        }
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_offset(-W, W), 0.0);
        assert!((normalize_offset(-W - 10.0, W) - (-10.0)).abs() < 1e-3);
        assert!((normalize_offset(10.0, W) - (10.0 - W)).abs() < 1e-3);
        assert_eq!(normalize_offset(W, W), 0.0);
        assert_eq!(normalize_offset(f32::NAN, W), 0.0);
    }

    #[test]
    fn normalize_never_leaves_the_half_open_range() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let o: f32 = rng.random_range(-1.0e6..1.0e6);
            let n = normalize_offset(o, W);
            assert!(n > -W && n <= 0.0, "{o} -> {n}");
        }
    }

    #[test]
    fn wrap_is_centered_and_half_open() {
        assert_eq!(wrap_logical(0.0, W), -W / 2.0);
        assert_eq!(wrap_logical(W / 2.0, W), 0.0);
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let x: f32 = rng.random_range(-1.0e5..1.0e5);
            let w = wrap_logical(x, W);
            assert!(w >= -W / 2.0 && w < W / 2.0, "{x} -> {w}");
        }
    }

    #[test]
    fn positions_repeat_every_full_turn() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let base: f32 = rng.random_range(-W..0.0);
            for i in 0..7 {
                let a = item_position(i, 180.0, base, 800.0, 7);
                let b = item_position(i, 180.0, base - W, 800.0, 7);
                let diff = (a - b).abs();
                // Either equal, or on opposite sides of the seam.
                assert!(diff < 1e-2 || (diff - W).abs() < 1e-2, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn nearest_prefers_first_on_ties() {
        assert_eq!(nearest_index(0.0, [5.0, -5.0, 7.0]), Some(0));
        assert_eq!(nearest_index(6.5, [5.0, -5.0, 7.0]), Some(2));
        assert_eq!(nearest_index(0.0, std::iter::empty()), None);
    }
}
