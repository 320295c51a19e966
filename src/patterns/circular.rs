//! Concentric circular motifs: symmetric point rings with random
//! inter-ring connections.

use std::f64::consts::PI;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::palette::{pick, PaletteKind};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CircularParams {
    pub circles: usize,
    pub points: usize,
    pub density: f64,
    pub symmetry: usize,
    pub hue: f64,
    pub palette: String,
}

impl Default for CircularParams {
    fn default() -> Self {
        Self {
            circles: 8,
            points: 12,
            density: 0.7,
            symmetry: 1,
            hue: 0.5,
            palette: "complementary".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RingPoint {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ring {
    pub radius: f64,
    pub points: Vec<RingPoint>,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    pub circle: usize,
    pub point: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub from: Endpoint,
    pub to: Endpoint,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CircularDocument {
    pub circles: Vec<Ring>,
    pub connections: Vec<Connection>,
    #[serde(rename = "rotationSpeed")]
    pub rotation_speed: f64,
}

pub fn generate(params: &CircularParams, rng: &mut StdRng) -> CircularDocument {
    let symmetry = params.symmetry.max(1);
    let density = params.density.clamp(0.0, 1.0);
    let colors = PaletteKind::from_label(&params.palette).build(params.hue);

    let mut document = CircularDocument {
        circles: Vec::with_capacity(params.circles),
        connections: Vec::new(),
        rotation_speed: rng.gen_range(0.1..0.5),
    };

    for circle_idx in 0..params.circles {
        let radius = 50.0 + circle_idx as f64 * 30.0;
        let per_segment = params.points / symmetry;

        // One base segment of points, repeated around the ring for symmetry.
        let mut ring_points = Vec::with_capacity(per_segment * symmetry);
        for point_idx in 0..per_segment {
            let angle = 2.0 * PI * point_idx as f64 / params.points as f64;
            for sym in 0..symmetry {
                let rotated = angle + 2.0 * PI * sym as f64 / symmetry as f64;
                ring_points.push(RingPoint {
                    x: radius * rotated.cos(),
                    y: radius * rotated.sin(),
                    color: pick(&colors, rng).to_hex(),
                });
            }
        }

        if circle_idx > 0 && !ring_points.is_empty() {
            let count = ring_points.len();
            for i in 0..count {
                if rng.gen_bool(density) {
                    // Mirror the connection into every symmetry segment.
                    for sym in 0..symmetry {
                        let from = (i + sym * per_segment) % count;
                        let to = (i + rng.gen_range(0..3) + sym * per_segment) % count;
                        document.connections.push(Connection {
                            from: Endpoint {
                                circle: circle_idx - 1,
                                point: from,
                            },
                            to: Endpoint {
                                circle: circle_idx,
                                point: to,
                            },
                            color: pick(&colors, rng).to_hex(),
                        });
                    }
                }
            }
        }

        document.circles.push(Ring {
            radius,
            points: ring_points,
            color: pick(&colors, rng).to_hex(),
        });
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn ring_count_and_radii_follow_params() {
        let mut rng = StdRng::seed_from_u64(1);
        let document = generate(&CircularParams::default(), &mut rng);
        assert_eq!(document.circles.len(), 8);
        assert_eq!(document.circles[0].radius, 50.0);
        assert_eq!(document.circles[7].radius, 260.0);
        for ring in &document.circles {
            assert_eq!(ring.points.len(), 12);
        }
    }

    #[test]
    fn symmetry_repeats_the_base_segment() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = CircularParams {
            circles: 2,
            points: 12,
            symmetry: 4,
            ..CircularParams::default()
        };
        let document = generate(&params, &mut rng);
        // 12 / 4 base points, each mirrored 4 times.
        assert_eq!(document.circles[0].points.len(), 12);
    }

    #[test]
    fn zero_density_yields_no_connections() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = CircularParams {
            density: 0.0,
            ..CircularParams::default()
        };
        assert!(generate(&params, &mut rng).connections.is_empty());
    }

    #[test]
    fn connections_reference_adjacent_rings() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = CircularParams {
            density: 1.0,
            ..CircularParams::default()
        };
        let document = generate(&params, &mut rng);
        assert!(!document.connections.is_empty());
        for connection in &document.connections {
            assert_eq!(connection.from.circle + 1, connection.to.circle);
            assert!(connection.from.point < 12);
            assert!(connection.to.point < 12);
        }
    }

    #[test]
    fn oversized_symmetry_produces_empty_rings_not_panics() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = CircularParams {
            points: 4,
            symmetry: 9,
            ..CircularParams::default()
        };
        let document = generate(&params, &mut rng);
        for ring in &document.circles {
            assert!(ring.points.is_empty());
        }
        assert!(document.connections.is_empty());
    }
}
