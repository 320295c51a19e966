//! Client-facing document shapes: hex colors, plain string labels, and
//! `[x, y]` point arrays ready for JSON rendering.

use serde::Serialize;

use crate::vine::{Flower, Leaf, Segment, VineSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentJson {
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub thickness: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafJson {
    pub pos: [f64; 2],
    pub angle: f64,
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub shape: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowerJson {
    pub pos: [f64; 2],
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub rotation: f64,
}

/// The wire form of a vine's accumulated growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VineDocument {
    pub segments: Vec<SegmentJson>,
    pub leaves: Vec<LeafJson>,
    pub flowers: Vec<FlowerJson>,
}

/// Convert internal growth state into the wire document. Pure: the snapshot
/// is read, never mutated.
pub fn vine_document(snapshot: &VineSnapshot) -> VineDocument {
    VineDocument {
        segments: snapshot.segments.iter().map(segment_json).collect(),
        leaves: snapshot.leaves.iter().map(leaf_json).collect(),
        flowers: snapshot.flowers.iter().map(flower_json).collect(),
    }
}

fn segment_json(segment: &Segment) -> SegmentJson {
    SegmentJson {
        start: [segment.start.0, segment.start.1],
        end: [segment.end.0, segment.end.1],
        thickness: segment.thickness,
        color: segment.color.to_hex(),
    }
}

fn leaf_json(leaf: &Leaf) -> LeafJson {
    LeafJson {
        pos: [leaf.pos.0, leaf.pos.1],
        angle: leaf.angle,
        size: leaf.size,
        kind: leaf.kind.label().to_string(),
        color: leaf.color.to_hex(),
        shape: leaf.shape.iter().map(|&(x, y)| [x, y]).collect(),
    }
}

fn flower_json(flower: &Flower) -> FlowerJson {
    FlowerJson {
        pos: [flower.pos.0, flower.pos.1],
        size: flower.size,
        kind: flower.kind.label().to_string(),
        color: flower.color.to_hex(),
        rotation: flower.rotation,
    }
}
