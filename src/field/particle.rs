//! A single drifting point

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::surface::{Bounds, Point};
use crate::theme::{colors, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Units per frame
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32, color: Rgb) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            color,
        }
    }

    /// Random particle somewhere inside `bounds`.
    ///
    /// Scales unit samples instead of using ranges so that a zero-sized
    /// surface or a zero speed never produces an empty range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, config: &FieldConfig) -> Self {
        let x = rng.gen::<f32>() * bounds.width.max(0.0);
        let y = rng.gen::<f32>() * bounds.height.max(0.0);
        let vx = (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed;
        let vy = (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed;
        let radius = rng.gen::<f32>() * config.max_radius;
        let color = match config.palette.len() {
            0 => colors::CYAN,
            n => config.palette[rng.gen_range(0..n)],
        };
        Self::new(x, y, vx, vy, radius, color)
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Integrate one frame, then reflect off any edge the new position lies
    /// beyond. Overshoot of up to one velocity step is left in place.
    #[inline]
    pub fn step(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > bounds.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > bounds.height {
            self.vy = -self.vy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: Bounds = Bounds::new(400.0, 300.0);

    fn at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(x, y, vx, vy, 1.0, colors::CYAN)
    }

    #[test]
    fn test_random_within_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, BOUNDS, &config);
            assert!((0.0..400.0).contains(&p.x));
            assert!((0.0..300.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!((0.0..2.0).contains(&p.radius));
            assert!(config.palette.contains(&p.color));
        }
    }

    #[test]
    fn test_random_uses_both_colors() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let cyan = (0..200)
            .filter(|_| Particle::random(&mut rng, BOUNDS, &config).color == colors::CYAN)
            .count();
        assert!(cyan > 50 && cyan < 150, "cyan={cyan}");
    }

    #[test]
    fn test_random_zero_bounds() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let p = Particle::random(&mut rng, Bounds::new(0.0, 0.0), &config);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut p = at(10.0, 20.0, 0.25, -0.125);
        p.step(BOUNDS);
        assert_eq!((p.x, p.y), (10.25, 19.875));
        assert_eq!((p.vx, p.vy), (0.25, -0.125));
    }

    #[test]
    fn test_reflect_right_edge() {
        let mut p = at(399.9, 150.0, 0.2, 0.0);
        p.step(BOUNDS);
        assert!(p.x > 400.0);
        assert_eq!(p.vx, -0.2);
    }

    #[test]
    fn test_reflect_left_edge() {
        let mut p = at(0.1, 150.0, -0.2, 0.0);
        p.step(BOUNDS);
        assert!(p.x < 0.0);
        assert_eq!(p.vx, 0.2);
    }

    #[test]
    fn test_reflect_y_edges() {
        let mut top = at(200.0, 0.05, 0.0, -0.1);
        top.step(BOUNDS);
        assert_eq!(top.vy, 0.1);

        let mut bottom = at(200.0, 299.95, 0.0, 0.1);
        bottom.step(BOUNDS);
        assert_eq!(bottom.vy, -0.1);
    }

    #[test]
    fn test_outside_moving_out_flips_once() {
        // Already beyond the edge and heading further out
        let mut p = at(401.0, 150.0, 0.2, 0.0);
        p.step(BOUNDS);
        assert_eq!(p.vx, -0.2);
    }
}
