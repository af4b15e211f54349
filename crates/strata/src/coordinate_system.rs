//! Mapping between the layout's (depth, cross) axes and screen (x, y).
//!
//! Ranks advance along the depth axis; nodes of one rank are spread along the cross axis.

use crate::config::RankDir;
use crate::graph::{Point, Size};

/// Extent of a node along the depth axis.
pub fn depth_extent(size: Size, rankdir: RankDir) -> f64 {
    if rankdir.is_horizontal() {
        size.width
    } else {
        size.height
    }
}

/// Extent of a node along the cross axis.
pub fn cross_extent(size: Size, rankdir: RankDir) -> f64 {
    if rankdir.is_horizontal() {
        size.height
    } else {
        size.width
    }
}

pub fn to_point(depth: f64, cross: f64, rankdir: RankDir) -> Point {
    let depth = if rankdir.is_reversed() { -depth } else { depth };
    if rankdir.is_horizontal() {
        Point::new(depth, cross)
    } else {
        Point::new(cross, depth)
    }
}
