//! Headless particle field runner
//!
//! Run with: cargo run --features cli --bin particle-field

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use particle_field::{
        Bounds, FieldConfig, FrameLoop, ParticleField, RecordingCanvas, Snapshot,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,particle_field=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("PARTICLE_FIELD_CONFIG") {
        Ok(path) => FieldConfig::load(path)?,
        Err(_) => FieldConfig::default(),
    };
    let bounds: Bounds = std::env::var("PARTICLE_FIELD_SIZE")
        .unwrap_or_else(|_| "400x300".to_string())
        .parse()?;
    let frame_limit = match std::env::var("PARTICLE_FIELD_FRAMES") {
        Ok(n) => Some(n.parse::<u64>()?),
        Err(_) => None,
    };
    let mut rng = match std::env::var("PARTICLE_FIELD_SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse()?),
        Err(_) => StdRng::from_entropy(),
    };

    let field = ParticleField::new(bounds, config.clone(), &mut rng);
    let token = CancellationToken::new();
    let frame_loop = FrameLoop::spawn(field, RecordingCanvas::new(), config.target_fps, token.clone());

    let mut stats = frame_loop.stats();
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));

    info!(%bounds, ?frame_limit, "Running, Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted");
                break;
            }
            changed = stats.changed(), if frame_limit.is_some() => {
                if changed.is_err() {
                    break;
                }
                let frames = stats.borrow_and_update().frames;
                if frame_limit.is_some_and(|limit| frames >= limit) {
                    info!(frames, "Frame limit reached");
                    break;
                }
            }
            _ = stats_interval.tick() => {
                let s = *stats.borrow();
                info!(
                    frames = s.frames,
                    fps = format!("{:.1}", s.fps),
                    particles = s.particles,
                    links = s.links,
                    "stats"
                );
            }
        }
    }

    let outcome = frame_loop.stop().await?;

    if let Ok(path) = std::env::var("PARTICLE_FIELD_SNAPSHOT") {
        let snapshot = Snapshot::new(&outcome.field, &outcome.canvas, outcome.frames);
        snapshot.write(&path)?;
        info!(path = %path, "Snapshot written");
    }

    info!(frames = outcome.frames, "Done");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
