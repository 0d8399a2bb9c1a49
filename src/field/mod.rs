//! Particle field simulation
//!
//! Owns a fixed set of particles on a surface. Each frame moves every
//! particle, reflects it off the surface edges, draws it, then links every
//! pair closer than the configured threshold.

mod link;
mod particle;

pub use link::{link_alpha, pairs, Link};
pub use particle::Particle;

use rand::Rng;
use tracing::{debug, trace};

use crate::config::FieldConfig;
use crate::surface::{Bounds, Canvas};
use crate::theme::colors;

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: FieldConfig,
}

impl ParticleField {
    /// Populate a field with `config.particle_count` random particles
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds,
            config,
        };
        field.reinitialize(bounds, rng);
        field
    }

    /// Build a field from explicit particles
    pub fn from_particles(bounds: Bounds, config: FieldConfig, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            bounds,
            config,
        }
    }

    /// Drop the current set and create a fresh one for `bounds`
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        self.bounds = bounds;
        self.particles.clear();
        self.particles.extend(
            (0..self.config.particle_count).map(|_| Particle::random(rng, bounds, &self.config)),
        );

        if bounds.is_empty() {
            debug!(%bounds, "Particle field initialized on an empty surface");
        } else {
            debug!(%bounds, count = self.particles.len(), "Particle field initialized");
        }
    }

    /// Change the reflection bounds. Particles keep their positions.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        let outside = self
            .particles
            .iter()
            .filter(|p| p.x > bounds.width || p.y > bounds.height)
            .count();
        debug!(from = %self.bounds, to = %bounds, outside, "Particle field resized");
        self.bounds = bounds;
    }

    /// Advance every particle by one frame
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.step(bounds);
        }
    }

    /// All links for the current positions, each unordered pair evaluated once
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        pairs(self.particles.len()).filter_map(move |(a, b)| {
            let (pa, pb) = (self.particles[a].position(), self.particles[b].position());
            link_alpha(pa, pb, &self.config).map(|(distance, alpha)| Link {
                a,
                b,
                distance,
                alpha,
            })
        })
    }

    /// Run one animation frame: clear, step, draw particles, draw links.
    /// Returns the number of links drawn.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> usize {
        canvas.clear(self.bounds);
        self.step();

        for p in &self.particles {
            canvas.fill_circle(p.position(), p.radius, p.color, self.config.particle_alpha);
        }

        let mut drawn = 0;
        for link in self.links() {
            canvas.stroke_line(
                self.particles[link.a].position(),
                self.particles[link.b].position(),
                self.config.link_width,
                colors::LINK,
                link.alpha,
            );
            drawn += 1;
        }

        trace!(links = drawn, "Frame drawn");
        drawn
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
