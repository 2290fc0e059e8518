//! Core types and utilities for CT-scan inflammation detection.
//!
//! This crate is intentionally small and purely pixel-geometric. It does
//! *not* depend on any concrete image codec or detection heuristic.

mod coords;
mod image;
mod logger;

pub use coords::FrameOffset;
pub use image::{Pixel, ScanImage, CANDIDATE_MARK, CASE_MARK};
pub use logger::init_with_level;
