//! Frame statistics shared by both front ends

use serde::Serialize;
use std::collections::VecDeque;

/// Rolling frame-rate estimate over the last `window` frames
#[derive(Debug)]
pub struct FpsCounter {
    frames: VecDeque<f64>,
    window: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FpsCounter {
    pub fn new(window: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(window + 1),
            window: window.max(2),
        }
    }

    /// Record a frame at `now` seconds
    pub fn tick(&mut self, now: f64) {
        self.frames.push_back(now);
        if self.frames.len() > self.window {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

/// Snapshot of a running field, published once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FrameStats {
    pub frames: u64,
    pub fps: f64,
    pub particles: usize,
    pub links: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_empty() {
        let fps = FpsCounter::default();
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn test_fps_steady_rate() {
        let mut fps = FpsCounter::new(10);
        for i in 0..30 {
            fps.tick(i as f64 / 50.0);
        }
        assert!((fps.fps() - 50.0).abs() < 1e-6, "fps={}", fps.fps());
    }

    #[test]
    fn test_fps_same_instant() {
        let mut fps = FpsCounter::new(10);
        fps.tick(1.0);
        fps.tick(1.0);
        assert_eq!(fps.fps(), 0.0);
    }
}
