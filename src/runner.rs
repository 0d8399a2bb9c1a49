//! Native frame loop
//!
//! Drives a [`ParticleField`] from a fixed-rate tokio interval on its own
//! task. The loop runs until its [`CancellationToken`] fires or the
//! [`FrameLoop`] handle is dropped.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::field::ParticleField;
use crate::stats::{FpsCounter, FrameStats};
use crate::surface::{Bounds, Canvas};
use crate::time::now_seconds;

/// What the frame task hands back when it stops
#[derive(Debug)]
pub struct FrameOutcome<C> {
    pub field: ParticleField,
    pub canvas: C,
    pub frames: u64,
}

/// Handle to a running frame task
pub struct FrameLoop<C> {
    token: CancellationToken,
    bounds_tx: watch::Sender<Bounds>,
    stats_rx: watch::Receiver<FrameStats>,
    task: JoinHandle<FrameOutcome<C>>,
}

impl<C> FrameLoop<C>
where
    C: Canvas + Send + 'static,
{
    /// Spawn the frame task on the current tokio runtime
    pub fn spawn(
        field: ParticleField,
        canvas: C,
        target_fps: u32,
        token: CancellationToken,
    ) -> Self {
        let (bounds_tx, bounds_rx) = watch::channel(field.bounds());
        let (stats_tx, stats_rx) = watch::channel(FrameStats {
            particles: field.len(),
            ..FrameStats::default()
        });
        let period = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));

        info!(target_fps, bounds = %field.bounds(), particles = field.len(), "Starting frame loop");
        let task = tokio::spawn(run(field, canvas, period, token.clone(), bounds_rx, stats_tx));

        Self {
            token,
            bounds_tx,
            stats_rx,
            task,
        }
    }

    /// Apply new surface bounds before the next frame
    pub fn resize(&self, bounds: Bounds) {
        self.bounds_tx.send_replace(bounds);
    }

    /// Latest stats, updated after every frame
    pub fn stats(&self) -> watch::Receiver<FrameStats> {
        self.stats_rx.clone()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Cancel the loop and wait for the task to hand back its state
    pub async fn stop(self) -> Result<FrameOutcome<C>> {
        let Self {
            token,
            bounds_tx,
            task,
            ..
        } = self;
        token.cancel();
        let outcome = task.await.map_err(|e| Error::FrameLoop(e.to_string()))?;
        drop(bounds_tx);
        info!(frames = outcome.frames, "Frame loop stopped");
        Ok(outcome)
    }
}

async fn run<C: Canvas>(
    mut field: ParticleField,
    mut canvas: C,
    period: Duration,
    token: CancellationToken,
    mut bounds_rx: watch::Receiver<Bounds>,
    stats_tx: watch::Sender<FrameStats>,
) -> FrameOutcome<C> {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut fps = FpsCounter::default();
    let mut frames = 0u64;

    loop {
        tokio::select! {
            biased;
            changed = bounds_rx.changed() => {
                if changed.is_err() {
                    debug!("Frame loop handle dropped");
                    break;
                }
                let bounds = *bounds_rx.borrow_and_update();
                field.resize(bounds);
            }
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let links = field.frame(&mut canvas);
                frames += 1;
                fps.tick(now_seconds());
                stats_tx.send_replace(FrameStats {
                    frames,
                    fps: fps.fps(),
                    particles: field.len(),
                    links,
                });
            }
        }
    }

    FrameOutcome {
        field,
        canvas,
        frames,
    }
}
