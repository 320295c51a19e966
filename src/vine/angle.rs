//! Per-growth-style heading adjustment.

use super::GrowthPattern;

/// Fractional pull toward a directional target per step.
const PULL: f64 = 0.1;

/// Degrees added per step in spiral mode.
const SPIRAL_TURN: f64 = 15.0;

/// Compute the next heading from the current one.
///
/// `jitter` is the caller's uniform(−15, 15) draw, passed in rather than
/// drawn here so the policy stays a pure function of its inputs.
pub fn next_heading(pattern: GrowthPattern, current: f64, depth: u32, jitter: f64) -> f64 {
    match pattern {
        GrowthPattern::Climbing => current + (270.0 - current) * PULL + jitter * 0.5,
        GrowthPattern::Hanging => current + (90.0 - current) * PULL + jitter * 0.5,
        GrowthPattern::Spreading => {
            // Pull target alternates between -90 and 90 with depth parity
            let target = (depth % 2) as f64 * 180.0 - 90.0;
            current + (target - current) * PULL + jitter
        }
        GrowthPattern::Spiral => current + SPIRAL_TURN + jitter * 0.3,
        GrowthPattern::Freeform => current + jitter,
    }
}
