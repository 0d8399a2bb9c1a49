//! eframe app hosting one particle field

use eframe::egui;
use rand::Rng;
use tracing::debug;

use super::painter::PainterCanvas;
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::stats::FpsCounter;
use crate::surface::Bounds;
use crate::time::now_seconds;

/// Seconds between fps log lines
const FPS_LOG_INTERVAL: f64 = 5.0;

pub struct FieldApp {
    field: ParticleField,
    fps_counter: FpsCounter,
    last_fps_log: f64,
}

impl FieldApp {
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, config: FieldConfig, rng: &mut R) -> Self {
        Self {
            field: ParticleField::new(bounds, config, rng),
            fps_counter: FpsCounter::default(),
            last_fps_log: now_seconds(),
        }
    }

    fn log_fps(&mut self, now: f64) {
        self.fps_counter.tick(now);
        if now - self.last_fps_log >= FPS_LOG_INTERVAL {
            self.last_fps_log = now;
            debug!(fps = format!("{:.1}", self.fps_counter.fps()), "particle field");
        }
    }
}

impl eframe::App for FieldApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Transparent so the page shows through
        [0.0; 4]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One frame per display refresh
        ctx.request_repaint();
        self.log_fps(now_seconds());

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                // The canvas tracks its container, so a rect change is a container resize
                self.field.resize(Bounds::new(rect.width(), rect.height()));

                let mut canvas = PainterCanvas::new(ui.painter(), rect.min);
                self.field.frame(&mut canvas);
            });
    }
}
