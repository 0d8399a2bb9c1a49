//! Proximity links between particle pairs

use serde::Serialize;

use crate::config::FieldConfig;
use crate::surface::Point;

/// A connection line between particles `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Stroke alpha for two points, or `None` when they are too far apart.
///
/// Fades linearly from `link_alpha` at distance 0 to 0 at `link_distance`;
/// with the default config this is `0.1 - d / 1000`.
#[inline]
pub fn link_alpha(from: Point, to: Point, config: &FieldConfig) -> Option<(f32, f32)> {
    let distance = from.distance(to);
    if distance < config.link_distance {
        let alpha = (config.link_alpha * (1.0 - distance / config.link_distance)).max(0.0);
        Some((distance, alpha))
    } else {
        None
    }
}

/// Every unordered index pair `(i, j)` with `i < j < n`, each exactly once
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn alpha_at(d: f32) -> Option<f32> {
        link_alpha(Point::new(0.0, 0.0), Point::new(d, 0.0), &FieldConfig::default())
            .map(|(_, alpha)| alpha)
    }

    #[test]
    fn test_alpha_at_fifty() {
        let alpha = alpha_at(50.0).unwrap();
        assert!((alpha - 0.05).abs() < 1e-6, "alpha={alpha}");
    }

    #[test]
    fn test_alpha_at_zero_is_max() {
        assert!((alpha_at(0.0).unwrap() - 0.1).abs() < 1e-7);
    }

    #[test]
    fn test_alpha_strictly_decreasing() {
        let mut prev = f32::INFINITY;
        for d in (0..100).map(|d| d as f32) {
            let alpha = alpha_at(d).unwrap();
            assert!((alpha - (0.1 - d / 1000.0)).abs() < 1e-6);
            assert!(alpha < prev);
            prev = alpha;
        }
        assert!(alpha_at(99.999).unwrap() < 1e-5);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(alpha_at(100.0).is_none());
        assert!(alpha_at(150.0).is_none());
    }

    #[test]
    fn test_predicate_symmetric() {
        let config = FieldConfig::default();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(60.0, 80.0),
            Point::new(10.0, 99.0),
            Point::new(250.0, 3.0),
        ];
        for &a in &points {
            for &b in &points {
                assert_eq!(link_alpha(a, b, &config), link_alpha(b, a, &config));
            }
        }
    }

    #[test]
    fn test_pairs_each_once() {
        let n = 50;
        let seen: Vec<_> = pairs(n).collect();
        assert_eq!(seen.len(), n * (n - 1) / 2);
        assert!(seen.iter().all(|&(i, j)| i < j && j < n));
        let unique: HashSet<_> = seen.iter().copied().collect();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn test_pairs_degenerate() {
        assert_eq!(pairs(0).count(), 0);
        assert_eq!(pairs(1).count(), 0);
    }
}
