//! Stateful, incremental vine growth with branching, foliage placement, and
//! obstacle avoidance.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::prelude::*;

use super::foliage::{self, Flower, Leaf};
use super::{angle, ColorScheme, GrowthConfig, GrowthPoint, Segment};

/// Headings tried before a blocked branch gives up.
const AVOIDANCE_TRIES: u32 = 8;

/// Accumulated growth state, cloned out of the engine per call.
#[derive(Debug, Clone, PartialEq)]
pub struct VineSnapshot {
    pub completed: bool,
    pub segments: Vec<Segment>,
    pub leaves: Vec<Leaf>,
    pub flowers: Vec<Flower>,
}

/// One growing vine. Owns its config, color scheme, random source, the
/// append-only geometry lists, and the pending-growth queue (FIFO, so growth
/// is breadth-first across branches).
pub struct VineEngine {
    config: GrowthConfig,
    colors: ColorScheme,
    rng: StdRng,
    segments: Vec<Segment>,
    leaves: Vec<Leaf>,
    flowers: Vec<Flower>,
    queue: VecDeque<GrowthPoint>,
    completed: bool,
}

impl VineEngine {
    /// Create an engine, draw its color scheme, and seed the queue with a
    /// single growth point at the configured start position.
    pub fn new(config: GrowthConfig) -> Self {
        let config = config.sanitized();
        let seed = config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0) // Fallback seed for misconfigured system clocks
        });
        let mut rng = StdRng::seed_from_u64(seed);
        let colors = ColorScheme::natural(config.season, &mut rng);
        let root = GrowthPoint {
            pos: config.start_pos,
            heading: config.growth_pattern.initial_heading(),
            depth: 0,
        };
        Self {
            config,
            colors,
            rng,
            segments: Vec::new(),
            leaves: Vec::new(),
            flowers: Vec::new(),
            queue: VecDeque::from(vec![root]),
            completed: false,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    pub fn colors(&self) -> ColorScheme {
        self.colors
    }

    /// Clone out the current accumulated state.
    pub fn snapshot(&self) -> VineSnapshot {
        VineSnapshot {
            completed: self.completed,
            segments: self.segments.clone(),
            leaves: self.leaves.clone(),
            flowers: self.flowers.clone(),
        }
    }

    /// Expand the front of the growth queue by one point.
    ///
    /// A step may add no geometry at all: points at the depth cap are
    /// silently discarded, and a blocked branch terminates. Callers must keep
    /// stepping until `completed` is observed rather than assuming each call
    /// grows something. Stepping an already-completed engine is a no-op that
    /// returns the same state.
    pub fn step(&mut self) -> VineSnapshot {
        if self.completed {
            return self.snapshot();
        }
        match self.queue.pop_front() {
            None => self.completed = true,
            Some(point) => {
                if point.depth < self.config.max_length {
                    self.advance(point);
                }
                if self.queue.is_empty() {
                    self.completed = true;
                }
            }
        }
        self.snapshot()
    }

    /// Drain the queue to produce a complete vine in one call. Same per-node
    /// logic as `step`.
    pub fn grow_to_completion(&mut self) -> VineSnapshot {
        while let Some(point) = self.queue.pop_front() {
            if point.depth < self.config.max_length {
                self.advance(point);
            }
        }
        self.completed = true;
        self.snapshot()
    }

    /// Expand one growth point: project a segment, maybe sprout foliage,
    /// maybe branch, and requeue the continuation.
    ///
    /// The rng draw order below is fixed; a seeded session replays
    /// identically.
    fn advance(&mut self, point: GrowthPoint) {
        if self.blocked(point.pos) {
            return; // branch starts inside an obstacle: dies without a segment
        }

        let length = self.rng.gen_range(10.0..20.0) * self.config.growth_speed;
        let jitter = self.rng.gen_range(-15.0..15.0);
        let mut heading = angle::next_heading(
            self.config.growth_pattern,
            point.heading,
            point.depth,
            jitter,
        );
        let mut end = project(point.pos, heading, length);

        if self.blocked(end) {
            match self.clear_heading(point.pos, heading, length) {
                Some((clear, clear_end)) => {
                    heading = clear;
                    end = clear_end;
                }
                None => return, // nowhere to grow: the branch terminates
            }
        }

        let thickness = (f64::from(self.config.max_length - point.depth) / 2.0).max(1.0);
        self.segments.push(Segment {
            start: point.pos,
            end,
            thickness,
            color: self.colors.vine_color,
        });

        if self.rng.gen_bool(self.config.leaf_probability) {
            let leaf = foliage::sprout_leaf(end, heading, self.colors.leaf_color, &mut self.rng);
            self.leaves.push(leaf);
        }
        if self.rng.gen_bool(self.config.flower_probability) {
            let flower = foliage::sprout_flower(end, self.colors.flower_color, &mut self.rng);
            self.flowers.push(flower);
        }

        if point.depth + 1 < self.config.max_length
            && self.rng.gen_bool(self.config.branch_probability)
        {
            let spread = self.rng.gen_range(-45.0..45.0);
            self.queue.push_back(GrowthPoint {
                pos: end,
                heading: heading + spread,
                depth: point.depth + 1,
            });
        }

        self.queue.push_back(GrowthPoint {
            pos: end,
            heading,
            depth: point.depth + 1,
        });
    }

    fn blocked(&self, pos: (f64, f64)) -> bool {
        self.config.obstacles.iter().any(|obstacle| {
            let dx = pos.0 - obstacle.center.0;
            let dy = pos.1 - obstacle.center.1;
            (dx * dx + dy * dy).sqrt() < obstacle.radius + self.config.obstacle_margin
        })
    }

    /// Try alternative headings within ±45° until one projects clear of every
    /// obstacle. `None` after the try budget means the branch dies.
    fn clear_heading(
        &mut self,
        from: (f64, f64),
        heading: f64,
        length: f64,
    ) -> Option<(f64, (f64, f64))> {
        for _ in 0..AVOIDANCE_TRIES {
            let candidate = heading + self.rng.gen_range(-45.0..45.0);
            let end = project(from, candidate, length);
            if !self.blocked(end) {
                return Some((candidate, end));
            }
        }
        None
    }
}

fn project(from: (f64, f64), heading: f64, length: f64) -> (f64, f64) {
    let rad = heading.to_radians();
    (from.0 + length * rad.cos(), from.1 + length * rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vine::{GrowthPattern, Obstacle};

    fn config(max_length: u32, seed: u64) -> GrowthConfig {
        GrowthConfig {
            max_length,
            seed: Some(seed),
            ..GrowthConfig::default()
        }
    }

    #[test]
    fn init_state_is_empty_and_incomplete() {
        let engine = VineEngine::new(config(10, 1));
        let snapshot = engine.snapshot();
        assert!(!snapshot.completed);
        assert!(snapshot.segments.is_empty());
        assert!(snapshot.leaves.is_empty());
        assert!(snapshot.flowers.is_empty());
    }

    #[test]
    fn max_length_one_takes_exactly_two_steps() {
        let mut engine = VineEngine::new(config(1, 7));

        // Depth 0 < 1: one segment, continuation queued at depth 1.
        let first = engine.step();
        assert!(!first.completed);
        assert_eq!(first.segments.len(), 1);

        // Depth 1 point is discarded, the queue empties, and the session
        // reports completed in the same call.
        let second = engine.step();
        assert!(second.completed);
        assert_eq!(second.segments.len(), 1);
        assert_eq!(second.leaves.len(), first.leaves.len());
        assert_eq!(second.flowers.len(), first.flowers.len());
    }

    #[test]
    fn step_after_completion_is_idempotent() {
        let mut engine = VineEngine::new(config(2, 9));
        while !engine.step().completed {}
        let done = engine.snapshot();
        let again = engine.step();
        assert_eq!(again, done);
    }

    #[test]
    fn stepping_always_terminates() {
        // Even with guaranteed branching the queue is bounded: every popped
        // point enqueues at most 2 with depth+1, capped at max_length.
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 6,
            branch_probability: 1.0,
            seed: Some(21),
            ..GrowthConfig::default()
        });
        let mut steps = 0;
        while !engine.step().completed {
            steps += 1;
            assert!(steps < 1 << 8, "queue failed to drain");
        }
    }

    #[test]
    fn thickness_never_drops_below_one() {
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 12,
            branch_probability: 0.6,
            seed: Some(33),
            ..GrowthConfig::default()
        });
        let snapshot = engine.grow_to_completion();
        assert!(!snapshot.segments.is_empty());
        for segment in &snapshot.segments {
            assert!(segment.thickness >= 1.0);
        }
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let mut a = VineEngine::new(config(8, 1234));
        let mut b = VineEngine::new(config(8, 1234));
        assert_eq!(a.grow_to_completion(), b.grow_to_completion());
    }

    #[test]
    fn segment_lengths_follow_growth_speed() {
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 5,
            growth_speed: 2.0,
            obstacle_margin: 0.0,
            seed: Some(5),
            ..GrowthConfig::default()
        });
        let snapshot = engine.grow_to_completion();
        for segment in &snapshot.segments {
            let dx = segment.end.0 - segment.start.0;
            let dy = segment.end.1 - segment.start.1;
            let length = (dx * dx + dy * dy).sqrt();
            assert!(length > 19.9 && length < 40.1, "length {length} out of range");
        }
    }

    #[test]
    fn start_inside_an_obstacle_grows_nothing() {
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 10,
            obstacles: vec![Obstacle {
                center: (0.0, 0.0),
                radius: 30.0,
            }],
            seed: Some(2),
            ..GrowthConfig::default()
        });
        let snapshot = engine.grow_to_completion();
        assert!(snapshot.completed);
        assert!(snapshot.segments.is_empty());
    }

    #[test]
    fn surrounded_start_exhausts_avoidance_without_a_segment() {
        // A ring of obstacles at distance 15 blocks every projected endpoint
        // (lengths land in [10, 20]) while leaving the start itself clear.
        let ring = (0..8)
            .map(|i| {
                let rad = (i as f64 * 45.0).to_radians();
                Obstacle {
                    center: (15.0 * rad.cos(), 15.0 * rad.sin()),
                    radius: 9.9,
                }
            })
            .collect();
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 10,
            obstacles: ring,
            obstacle_margin: 5.0,
            seed: Some(17),
            ..GrowthConfig::default()
        });

        // Obstacle avoidance applies in step mode as well as full growth.
        let first = engine.step();
        assert!(first.completed);
        assert!(first.segments.is_empty());
        assert!(first.leaves.is_empty());
    }

    #[test]
    fn far_obstacles_do_not_disturb_growth() {
        let far = GrowthConfig {
            max_length: 6,
            obstacles: vec![Obstacle {
                center: (10_000.0, 10_000.0),
                radius: 50.0,
            }],
            seed: Some(77),
            ..GrowthConfig::default()
        };
        let clear = GrowthConfig {
            max_length: 6,
            seed: Some(77),
            ..GrowthConfig::default()
        };
        let mut with_far = VineEngine::new(far);
        let mut without = VineEngine::new(clear);
        assert_eq!(
            with_far.grow_to_completion().segments,
            without.grow_to_completion().segments
        );
    }

    #[test]
    fn spiral_headings_rotate() {
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 4,
            growth_pattern: GrowthPattern::Spiral,
            branch_probability: 0.0,
            seed: Some(8),
            ..GrowthConfig::default()
        });
        let snapshot = engine.grow_to_completion();
        assert_eq!(snapshot.segments.len(), 4);
    }

    #[test]
    fn depth_capped_points_add_no_geometry() {
        let mut engine = VineEngine::new(GrowthConfig {
            max_length: 3,
            branch_probability: 0.0,
            seed: Some(55),
            ..GrowthConfig::default()
        });
        // Three productive steps, then the depth-3 continuation is discarded.
        for _ in 0..3 {
            assert!(!engine.step().completed);
        }
        let before = engine.snapshot();
        let last = engine.step();
        assert!(last.completed);
        assert_eq!(last.segments, before.segments);
        assert_eq!(last.leaves, before.leaves);
        assert_eq!(last.flowers, before.flowers);
    }
}
