//! JSON dump of a field and its most recent frame

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::field::{Link, Particle, ParticleField};
use crate::surface::{Bounds, DrawOp, RecordingCanvas};

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub frames: u64,
    pub bounds: Bounds,
    pub particles: &'a [Particle],
    pub links: Vec<Link>,
    pub ops: &'a [DrawOp],
}

impl<'a> Snapshot<'a> {
    pub fn new(field: &'a ParticleField, canvas: &'a RecordingCanvas, frames: u64) -> Self {
        Self {
            frames,
            bounds: field.bounds(),
            particles: field.particles(),
            links: field.links().collect(),
            ops: canvas.ops(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let snapshot_err = |source| Error::Snapshot {
            path: path.to_path_buf(),
            source,
        };
        let json = self.to_json().map_err(|e| snapshot_err(std::io::Error::other(e)))?;
        std::fs::write(path, json).map_err(snapshot_err)
    }
}
