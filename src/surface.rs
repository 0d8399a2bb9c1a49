//! Drawing surfaces
//!
//! [`Canvas`] is the seam between the simulation and whatever produces
//! pixels. The browser front end paints through egui; [`RecordingCanvas`]
//! keeps the last frame as plain data for the native runner and tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::theme::Rgb;

/// Surface-local point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Size of the drawing surface, taken from its container
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Nothing visible can be drawn on a zero-area surface
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `400x300`
impl FromStr for Bounds {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidBounds(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(bad)?;
        let width: f32 = w.trim().parse().map_err(|_| bad())?;
        let height: f32 = h.trim().parse().map_err(|_| bad())?;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(bad());
        }
        Ok(Self::new(width, height))
    }
}

/// 2D drawing target, cleared and redrawn every frame
pub trait Canvas {
    fn clear(&mut self, bounds: Bounds);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32);

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: f32);
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear {
        bounds: Bounds,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgb,
        alpha: f32,
    },
}

/// Canvas that stores the draw calls of the most recent frame
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, bounds: Bounds) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear { bounds });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
            alpha,
        });
    }
}
