//! Shuffle index selection
//!
//! Shuffle here picks the next cursor position at advance time instead of
//! reordering the queue, so the visible queue order never changes while
//! shuffle is toggled on and off.

use rand::Rng;

/// Pick a random queue index for shuffle advancement
///
/// Uniform over `[0, len)` excluding `current` whenever more than one track
/// is available. With a single track the same index is returned (the track
/// replays); with an empty queue there is nothing to pick.
pub fn pick_shuffle_index<R: Rng>(
    rng: &mut R,
    len: usize,
    current: Option<usize>,
) -> Option<usize> {
    match (len, current) {
        (0, _) => None,
        (1, _) => Some(0),
        (_, None) => Some(rng.gen_range(0..len)),
        (_, Some(cur)) => {
            // Offset trick keeps the draw uniform over the other len-1 slots
            let offset = rng.gen_range(1..len);
            Some((cur + offset) % len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_queue_has_no_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_shuffle_index(&mut rng, 0, None), None);
        assert_eq!(pick_shuffle_index(&mut rng, 0, Some(0)), None);
    }

    #[test]
    fn single_track_replays_itself() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_shuffle_index(&mut rng, 1, Some(0)), Some(0));
        assert_eq!(pick_shuffle_index(&mut rng, 1, None), Some(0));
    }

    #[test]
    fn pick_never_repeats_current_index() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let picked = pick_shuffle_index(&mut rng, 5, Some(2)).unwrap();
            assert!(picked < 5);
            assert_ne!(picked, 2);
        }
    }

    #[test]
    fn pick_covers_all_other_indices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let picked = pick_shuffle_index(&mut rng, 4, Some(1)).unwrap();
            seen[picked] = true;
        }
        assert!(seen[0] && seen[2] && seen[3]);
        assert!(!seen[1]);
    }

    #[test]
    fn pick_without_cursor_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let picked = pick_shuffle_index(&mut rng, 3, None).unwrap();
            assert!(picked < 3);
        }
    }
}
