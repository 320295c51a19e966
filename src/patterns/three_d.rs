//! Random 3D element clouds (cubes or spheres) for client-side scene
//! assembly.

use std::f64::consts::PI;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThreeDParams {
    #[serde(rename = "type")]
    pub kind: String,
    /// Number of elements to scatter.
    pub complexity: usize,
    pub rotation_speed: f64,
    pub color_scheme: String,
}

impl Default for ThreeDParams {
    fn default() -> Self {
        Self {
            kind: "cube".to_string(),
            complexity: 5,
            rotation_speed: 0.01,
            color_scheme: "rainbow".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element3d {
    Cube {
        position: [f64; 3],
        rotation: [f64; 3],
        scale: f64,
    },
    Sphere {
        position: [f64; 3],
        radius: f64,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreeDDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub complexity: usize,
    pub rotation_speed: f64,
    pub color_scheme: String,
    pub elements: Vec<Element3d>,
}

pub fn generate(params: &ThreeDParams, rng: &mut StdRng) -> ThreeDDocument {
    let elements = match params.kind.to_lowercase().as_str() {
        "cube" => (0..params.complexity)
            .map(|_| Element3d::Cube {
                position: random_position(rng),
                rotation: [
                    rng.gen_range(0.0..PI * 2.0),
                    rng.gen_range(0.0..PI * 2.0),
                    rng.gen_range(0.0..PI * 2.0),
                ],
                scale: rng.gen_range(0.5..2.0),
            })
            .collect(),
        "sphere" => (0..params.complexity)
            .map(|_| Element3d::Sphere {
                position: random_position(rng),
                radius: rng.gen_range(0.3..1.0),
            })
            .collect(),
        _ => Vec::new(),
    };

    ThreeDDocument {
        kind: params.kind.clone(),
        complexity: params.complexity,
        rotation_speed: params.rotation_speed,
        color_scheme: params.color_scheme.clone(),
        elements,
    }
}

fn random_position(rng: &mut StdRng) -> [f64; 3] {
    [
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn cube_cloud_has_complexity_elements() {
        let mut rng = StdRng::seed_from_u64(1);
        let document = generate(&ThreeDParams::default(), &mut rng);
        assert_eq!(document.elements.len(), 5);
        for element in &document.elements {
            match element {
                Element3d::Cube { position, scale, .. } => {
                    assert!(position.iter().all(|c| (-5.0..5.0).contains(c)));
                    assert!((0.5..2.0).contains(scale));
                }
                Element3d::Sphere { .. } => panic!("cube request produced a sphere"),
            }
        }
    }

    #[test]
    fn sphere_cloud_uses_radius() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = ThreeDParams {
            kind: "sphere".to_string(),
            complexity: 3,
            ..ThreeDParams::default()
        };
        let document = generate(&params, &mut rng);
        assert_eq!(document.elements.len(), 3);
        for element in &document.elements {
            assert!(matches!(element, Element3d::Sphere { radius, .. } if (0.3..1.0).contains(radius)));
        }
    }

    #[test]
    fn unknown_kind_scatters_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = ThreeDParams {
            kind: "torus".to_string(),
            ..ThreeDParams::default()
        };
        assert!(generate(&params, &mut rng).elements.is_empty());
    }
}
