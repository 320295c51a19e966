//! Stateless pattern generators.
//!
//! Each module exposes a parameter struct and a single pure
//! `generate(&params, &mut rng)` returning a JSON-serializable document.
//! No state, no failure modes beyond input parsing; unknown enum-like
//! labels resolve to defaults.

pub mod circular;
pub mod geometric;
pub mod tessellation;
pub mod three_d;
pub mod wave;
