//! A 3D sine-wave vertex grid, flattened for direct upload to a renderer.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Grid side length in vertices (the grid spans [-size/2, size/2]).
    pub size: usize,
    pub amplitude: f64,
    pub frequency: f64,
    /// Re-randomize size, amplitude, and frequency.
    pub shuffle: bool,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            size: 20,
            amplitude: 1.0,
            frequency: 0.1,
            shuffle: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WaveDocument {
    /// Flat [x0, y0, z0, x1, y1, z1, ...] vertex stream.
    pub vertices: Vec<f64>,
    pub size: usize,
}

pub fn generate(params: &WaveParams, rng: &mut StdRng) -> WaveDocument {
    let (size, amplitude, frequency) = if params.shuffle {
        (
            rng.gen_range(15..=30),
            rng.gen_range(0.5..2.0),
            rng.gen_range(0.05..0.2),
        )
    } else {
        (params.size, params.amplitude, params.frequency)
    };

    let axis = linspace(size);
    let mut vertices = Vec::with_capacity(size * size * 3);
    for &x in &axis {
        for &y in &axis {
            let z = amplitude * (frequency * x).sin() * (frequency * y).cos();
            vertices.extend([x, y, z]);
        }
    }

    WaveDocument { vertices, size }
}

/// `count` evenly spaced values across [-count/2, count/2].
fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let half = count as f64 / 2.0;
            let step = count as f64 / (count - 1) as f64;
            (0..count).map(|i| -half + i as f64 * step).collect()
        }
    }
}
