//! Effects overlay
//!
//! Paints confetti particles and flying point markers on a foreground
//! layer above all panels. Positions come straight from the engine; this
//! module is stateless.

use std::time::Instant;

use egui::{self, Align2, Color32, FontId, Id, LayerId, Order};

use crate::effects::EffectsEngine;

const PARTICLE_RADIUS: f32 = 4.0;
const FLIGHT_FONT_SIZE: f32 = 18.0;

pub fn render_overlay(ctx: &egui::Context, engine: &EffectsEngine, now: Instant) {
    if engine.particles().is_empty() && engine.flights().is_empty() {
        return;
    }

    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("effects_overlay")));

    for particle in engine.particles() {
        painter.circle_filled(particle.pos(now), PARTICLE_RADIUS, particle.color(now));
    }

    for flight in engine.flights() {
        let alpha = flight.alpha(now);
        let color = Color32::from_rgba_unmultiplied(255, 215, 0, (alpha * 255.0) as u8);
        painter.text(
            flight.pos(now),
            Align2::CENTER_CENTER,
            flight.label(),
            FontId::proportional(FLIGHT_FONT_SIZE),
            color,
        );
    }
}
