//! Toast rendering
//!
//! Draws the engine's toast queue as a stack of banners anchored to the
//! top-right corner. Lifecycle (fade in, hold, fade out, expiry) lives in
//! the engine; this module only paints. Each area is keyed by the toast's
//! own id, so surviving banners keep their animation state when an older
//! one expires out of the queue.

use std::time::Instant;

use egui::{self, Align2, Color32, Id, RichText, Vec2};

use crate::effects::EffectsEngine;

use super::chrome;

const TOAST_WIDTH: f32 = 280.0;
const STACK_SPACING: f32 = 8.0;

pub fn render_toasts(ctx: &egui::Context, engine: &EffectsEngine, now: Instant) {
    let mut y_offset = 60.0;

    for toast in engine.toasts() {
        let alpha = toast.alpha(now);

        let response = egui::Area::new(Id::new(("toast", toast.id)))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, y_offset))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(chrome::BG_CARD.gamma_multiply(alpha * 0.95))
                    .stroke(egui::Stroke::new(2.0, toast.accent.gamma_multiply(alpha)))
                    .corner_radius(8.0)
                    .inner_margin(14.0)
                    .shadow(egui::Shadow {
                        spread: 2,
                        blur: 8,
                        color: Color32::from_rgba_unmultiplied(0, 0, 0, (alpha * 100.0) as u8),
                        offset: [0, 2],
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(TOAST_WIDTH);
                        ui.set_max_width(TOAST_WIDTH);
                        ui.label(
                            RichText::new(&toast.message)
                                .color(chrome::TEXT_PRIMARY.gamma_multiply(alpha))
                                .strong()
                                .size(14.0),
                        );
                    });
            });

        y_offset += response.response.rect.height() + STACK_SPACING;
    }

    if !engine.toasts().is_empty() {
        ctx.request_repaint();
    }
}
