//! Leaf and flower archetypes and their outline geometry.

use std::f64::consts::PI;

use rand::prelude::*;

use crate::palette::Rgb;

/// Leaf shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Simple,
    Compound,
    Heart,
    Maple,
}

impl LeafKind {
    const ALL: [LeafKind; 4] = [
        LeafKind::Simple,
        LeafKind::Compound,
        LeafKind::Heart,
        LeafKind::Maple,
    ];

    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            LeafKind::Simple => "simple",
            LeafKind::Compound => "compound",
            LeafKind::Heart => "heart",
            LeafKind::Maple => "maple",
        }
    }

    /// Outline points for this archetype at the given size, in leaf-local
    /// coordinates with the stem at the origin.
    pub fn outline(self, size: f64) -> Vec<(f64, f64)> {
        match self {
            LeafKind::Simple => vec![
                (0.0, 0.0),
                (size, -size / 2.0),
                (size * 2.0, 0.0),
                (size, size / 2.0),
            ],
            LeafKind::Heart => {
                // Cardioid: r = size * (1 + sin θ)
                let num_points = 12;
                (0..num_points)
                    .map(|i| {
                        let angle = i as f64 * 2.0 * PI / num_points as f64;
                        let r = size * (1.0 + angle.sin());
                        (r * angle.cos(), r * angle.sin())
                    })
                    .collect()
            }
            LeafKind::Maple => {
                let mut points = Vec::with_capacity(10);
                for lobe in [0.0_f64, 72.0, 144.0, 216.0, 288.0] {
                    let rad = lobe.to_radians();
                    let notch = (lobe + 36.0).to_radians();
                    points.push((size * rad.cos(), size * rad.sin()));
                    points.push((size * 0.5 * notch.cos(), size * 0.5 * notch.sin()));
                }
                points
            }
            LeafKind::Compound => {
                let num_leaflets = 5i32;
                let mut points = Vec::with_capacity(num_leaflets as usize * 4);
                for i in 0..num_leaflets {
                    let offset = (i - num_leaflets / 2) as f64 * size / 3.0;
                    points.extend([
                        (offset, 0.0),
                        (offset + size / 2.0, -size / 4.0),
                        (offset + size, 0.0),
                        (offset + size / 2.0, size / 4.0),
                    ]);
                }
                points
            }
        }
    }
}

/// Flower archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerKind {
    Bud,
    Bloom,
    Cluster,
}

impl FlowerKind {
    const ALL: [FlowerKind; 3] = [FlowerKind::Bud, FlowerKind::Bloom, FlowerKind::Cluster];

    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowerKind::Bud => "bud",
            FlowerKind::Bloom => "bloom",
            FlowerKind::Cluster => "cluster",
        }
    }
}

/// A placed leaf instance. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub pos: (f64, f64),
    pub angle: f64,
    pub size: f64,
    pub kind: LeafKind,
    pub shape: Vec<(f64, f64)>,
    pub color: Rgb,
}

/// A placed flower instance. Append-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flower {
    pub pos: (f64, f64),
    pub size: f64,
    pub kind: FlowerKind,
    pub color: Rgb,
    pub rotation: f64,
}

/// Place a random-archetype leaf at a segment endpoint, perpendicular to the
/// direction of travel (heading ± 90°, side chosen at random).
pub fn sprout_leaf(pos: (f64, f64), heading: f64, color: Rgb, rng: &mut StdRng) -> Leaf {
    let kind = LeafKind::random(rng);
    let side = if rng.gen_bool(0.5) { 90.0 } else { -90.0 };
    let size = rng.gen_range(5.0..15.0);
    Leaf {
        pos,
        angle: heading + side,
        size,
        kind,
        shape: kind.outline(size),
        color,
    }
}

/// Place a random-archetype flower at a segment endpoint.
pub fn sprout_flower(pos: (f64, f64), color: Rgb, rng: &mut StdRng) -> Flower {
    Flower {
        pos,
        size: rng.gen_range(3.0..8.0),
        kind: FlowerKind::random(rng),
        color,
        rotation: rng.gen_range(0.0..360.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn outline_point_counts_per_archetype() {
        assert_eq!(LeafKind::Simple.outline(10.0).len(), 4);
        assert_eq!(LeafKind::Heart.outline(10.0).len(), 12);
        assert_eq!(LeafKind::Maple.outline(10.0).len(), 10);
        assert_eq!(LeafKind::Compound.outline(10.0).len(), 20);
    }

    #[test]
    fn simple_outline_scales_with_size() {
        let outline = LeafKind::Simple.outline(8.0);
        assert_eq!(outline[0], (0.0, 0.0));
        assert_eq!(outline[1], (8.0, -4.0));
        assert_eq!(outline[2], (16.0, 0.0));
        assert_eq!(outline[3], (8.0, 4.0));
    }

    #[test]
    fn maple_lobe_tips_sit_on_the_size_radius() {
        for point in LeafKind::Maple.outline(10.0).iter().step_by(2) {
            let r = (point.0 * point.0 + point.1 * point.1).sqrt();
            assert!((r - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sprouted_leaves_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let leaf = sprout_leaf((1.0, 2.0), 45.0, Rgb::new(60, 140, 60), &mut rng);
            assert!((5.0..15.0).contains(&leaf.size));
            assert!(leaf.angle == 135.0 || leaf.angle == -45.0);
            assert!(!leaf.shape.is_empty());
        }
    }

    #[test]
    fn sprouted_flowers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let flower = sprout_flower((0.0, 0.0), Rgb::new(220, 120, 170), &mut rng);
            assert!((3.0..8.0).contains(&flower.size));
            assert!((0.0..360.0).contains(&flower.rotation));
        }
    }
}
