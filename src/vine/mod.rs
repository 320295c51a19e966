//! Organic vine growth: data model, growth engine, angle policies, and
//! foliage shapes.

pub mod angle;
pub mod engine;
pub mod foliage;

pub use engine::{VineEngine, VineSnapshot};
pub use foliage::{Flower, FlowerKind, Leaf, LeafKind};

use chrono::Datelike;
use rand::prelude::*;

use crate::palette::Rgb;

/// How a vine prefers to travel as it grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPattern {
    Climbing,
    Hanging,
    Spreading,
    Spiral,
    /// Pure random walk. Also the resolution for unrecognized labels, so
    /// malformed input drives a real policy instead of an error.
    Freeform,
}

impl GrowthPattern {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "climbing" => GrowthPattern::Climbing,
            "hanging" => GrowthPattern::Hanging,
            "spreading" => GrowthPattern::Spreading,
            "spiral" => GrowthPattern::Spiral,
            _ => GrowthPattern::Freeform,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GrowthPattern::Climbing => "climbing",
            GrowthPattern::Hanging => "hanging",
            GrowthPattern::Spreading => "spreading",
            GrowthPattern::Spiral => "spiral",
            GrowthPattern::Freeform => "freeform",
        }
    }

    /// Initial heading in degrees (0° = +x, increasing clockwise in screen
    /// space, so 270° points up).
    pub fn initial_heading(self) -> f64 {
        match self {
            GrowthPattern::Climbing | GrowthPattern::Freeform => 270.0,
            GrowthPattern::Hanging => 90.0,
            GrowthPattern::Spreading | GrowthPattern::Spiral => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "spring" => Season::Spring,
            "autumn" | "fall" => Season::Autumn,
            "winter" => Season::Winter,
            _ => Season::Summer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Season implied by the current calendar month.
    pub fn current() -> Self {
        match chrono::Local::now().month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

/// A circular no-grow region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: (f64, f64),
    pub radius: f64,
}

/// Session configuration. Immutable once a session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    /// Maximum growth depth; every branch terminates at this many segments.
    pub max_length: u32,
    /// Multiplier on the random segment length.
    pub growth_speed: f64,
    pub branch_probability: f64,
    pub leaf_probability: f64,
    pub flower_probability: f64,
    pub growth_pattern: GrowthPattern,
    pub season: Season,
    pub start_pos: (f64, f64),
    pub obstacles: Vec<Obstacle>,
    /// Clearance added to every obstacle radius during collision tests.
    pub obstacle_margin: f64,
    /// Fixed seed for reproducible growth; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            max_length: 10,
            growth_speed: 1.0,
            branch_probability: 0.3,
            leaf_probability: 0.4,
            flower_probability: 0.2,
            growth_pattern: GrowthPattern::Climbing,
            season: Season::Summer,
            start_pos: (0.0, 0.0),
            obstacles: Vec::new(),
            obstacle_margin: 5.0,
            seed: None,
        }
    }
}

impl GrowthConfig {
    /// Clamp fields into their documented ranges.
    pub fn sanitized(mut self) -> Self {
        self.max_length = self.max_length.max(1);
        self.growth_speed = self.growth_speed.max(0.0);
        self.branch_probability = self.branch_probability.clamp(0.0, 1.0);
        self.leaf_probability = self.leaf_probability.clamp(0.0, 1.0);
        self.flower_probability = self.flower_probability.clamp(0.0, 1.0);
        self
    }
}

/// Per-session colors, drawn once at creation and constant thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub vine_color: Rgb,
    pub leaf_color: Rgb,
    pub flower_color: Rgb,
}

impl ColorScheme {
    /// Random natural palette: a muted vine green, a seasonal leaf tone, and
    /// a flower from one of three hue families (pink, white, yellow).
    pub fn natural(season: Season, rng: &mut StdRng) -> Self {
        let vine_color = Rgb::new(
            rng.gen_range(40..=80),
            rng.gen_range(90..=130),
            rng.gen_range(40..=80),
        );

        let (r, g, b) = match season {
            Season::Spring => (70..=120, 140..=200, 60..=110),
            Season::Summer => (50..=100, 120..=180, 50..=100),
            Season::Autumn => (150..=200, 60..=110, 20..=60),
            Season::Winter => (40..=80, 70..=110, 40..=80),
        };
        let leaf_color = Rgb::new(rng.gen_range(r), rng.gen_range(g), rng.gen_range(b));

        let flower_color = match rng.gen_range(0..3) {
            0 => Rgb::new(
                rng.gen_range(200..=255),
                rng.gen_range(100..=150),
                rng.gen_range(150..=200),
            ),
            1 => Rgb::new(
                rng.gen_range(200..=255),
                rng.gen_range(200..=255),
                rng.gen_range(200..=255),
            ),
            _ => Rgb::new(
                rng.gen_range(180..=220),
                rng.gen_range(180..=220),
                rng.gen_range(0..=50),
            ),
        };

        Self {
            vine_color,
            leaf_color,
            flower_color,
        }
    }
}

/// A pending (position, heading, depth) tuple awaiting expansion into a
/// segment. Lives only in the growth queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPoint {
    pub pos: (f64, f64),
    /// Direction of travel in degrees.
    pub heading: f64,
    /// Segments from the root along this branch.
    pub depth: u32,
}

/// One drawn piece of vine. Append-only; immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
    /// Derived from the remaining depth budget; never below 1.
    pub thickness: f64,
    pub color: Rgb,
}
