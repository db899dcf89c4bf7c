//! Procedural hurdle generator
//!
//! Difficulty is a pure function of the score tier; spacing comes from the
//! gap draws combined with the screen width, not from a spawn cooldown. The
//! generator is evaluated once per frame while playing.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Hurdle;
use crate::consts::*;

/// Per-tier difficulty knobs. All three are keyed off the same tier value
/// so tests can pin exact thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Widest allowed gap between consecutive hurdles
    pub max_gap: i32,
    /// Hurdles emitted per generator evaluation
    pub batch: u32,
    /// Speed stamped onto hurdles spawned at this tier
    pub speed: f32,
}

/// Difficulty for a given score. The tier is the score divided by
/// [`SCORE_PER_TIER`], rounding down.
pub fn difficulty(score: u32) -> Difficulty {
    let tier = score / SCORE_PER_TIER;
    Difficulty {
        max_gap: (GAP_START - tier as i32 * GAP_DECAY).max(MIN_GAP),
        batch: (1 + tier).min(MAX_BATCH),
        speed: BASE_SPEED + tier as f32 * SPEED_INCREMENT,
    }
}

/// Emit one batch of hurdles past the spawn cursor, returning them with the
/// advanced cursor. Each hurdle draws its gap uniformly from
/// `[max_gap/2, max_gap]`; the cursor steps by the gap twice per hurdle,
/// once to place it and once again beyond it, so consecutive placements
/// land two gaps apart.
pub fn spawn_hurdles(cursor: i32, score: u32, rng: &mut Pcg32) -> (Vec<Hurdle>, i32) {
    let diff = difficulty(score);
    let mut spawned = Vec::with_capacity(diff.batch as usize);
    let mut cursor = cursor;
    for _ in 0..diff.batch {
        let gap = rng.random_range(diff.max_gap / 2..=diff.max_gap);
        let x = cursor + gap;
        spawned.push(Hurdle::new(x as f32, diff.speed));
        cursor = x + gap;
    }
    (spawned, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_difficulty_tier_zero() {
        let diff = difficulty(0);
        assert_eq!(diff.max_gap, 300);
        assert_eq!(diff.batch, 1);
        assert_eq!(diff.speed, 5.0);
    }

    #[test]
    fn test_difficulty_tier_one() {
        let diff = difficulty(1500);
        assert_eq!(diff.max_gap, 280);
        assert_eq!(diff.batch, 2);
        assert_eq!(diff.speed, 5.05);
    }

    #[test]
    fn test_difficulty_gap_floor() {
        // Tier 12: 300 - 240 = 60 would undershoot the floor
        let diff = difficulty(12_000);
        assert_eq!(diff.max_gap, 100);
        assert_eq!(diff.batch, 2);
    }

    #[test]
    fn test_gap_bounds_and_cursor_double_advance() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let (spawned, cursor) = spawn_hurdles(1000, 0, &mut rng);
            assert_eq!(spawned.len(), 1);
            let gap = spawned[0].x as i32 - 1000;
            assert!((150..=300).contains(&gap), "gap {gap} out of range");
            // Cursor ends one more gap past the placed hurdle
            assert_eq!(cursor, spawned[0].x as i32 + gap);
        }
    }

    #[test]
    fn test_batch_spawns_stay_ordered() {
        let mut rng = Pcg32::seed_from_u64(21);
        let (spawned, cursor) = spawn_hurdles(500, 3000, &mut rng);
        assert_eq!(spawned.len(), 2);
        assert!(spawned[0].x < spawned[1].x);
        assert!(cursor > spawned[1].x as i32);
        for hurdle in &spawned {
            assert_eq!(hurdle.speed, 5.0 + 3.0 * 0.05);
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for score in [0, 1500, 4000] {
            assert_eq!(
                spawn_hurdles(1000, score, &mut a),
                spawn_hurdles(1000, score, &mut b)
            );
        }
    }

    #[test]
    fn test_spawned_speed_is_frozen() {
        let mut rng = Pcg32::seed_from_u64(5);
        let (early, cursor) = spawn_hurdles(1000, 0, &mut rng);
        // Later, higher-tier spawns never touch the earlier hurdle
        let (late, _) = spawn_hurdles(cursor, 5000, &mut rng);
        assert_eq!(early[0].speed, 5.0);
        assert_eq!(late[0].speed, 5.25);
    }
}
