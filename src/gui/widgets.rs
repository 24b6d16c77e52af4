//! Dashboard widgets
//!
//! Small allocate-and-paint controls. Hover transitions go through the
//! egui context's animation cache; the task button additionally takes the
//! engine's emphasis cue so a just-completed control stays lit.

use egui::{
    self, Align2, Color32, FontId, Id, Pos2, Rect, Response, RichText, Sense, StrokeKind, Ui, Vec2,
};

use super::chrome;

/// Daily progress bar with a smoothed fill and a bright head dot marking
/// the current edge.
pub fn progress_bar(ui: &mut Ui, fraction: f32, color: Color32, id_salt: impl std::hash::Hash) {
    let id = Id::new(id_salt);
    let fill = ui
        .ctx()
        .animate_value_with_time(id, fraction.clamp(0.0, 1.0), 0.3);

    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), 6.0), Sense::hover());

    ui.painter().rect_filled(rect, 3.0, chrome::TRACK);

    if fill > 0.0 {
        // Never narrower than the bar height, so the rounded cap stays
        // visible at tiny fractions.
        let width = (rect.width() * fill).max(rect.height());
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(width, rect.height()));
        ui.painter().rect_filled(fill_rect, 3.0, color);
        ui.painter().circle_filled(
            Pos2::new(fill_rect.max.x - 3.0, rect.center().y),
            3.0,
            color.lerp_to_gamma(Color32::WHITE, 0.35),
        );
    }
}

/// Action button for tasks and rewards. Hovering eases the glow in;
/// while `emphasized` (the engine's post-completion cue) the button stays
/// fully lit with a thicker outline. Pressing insets the face.
pub fn accent_button(
    ui: &mut Ui,
    label: &str,
    accent: Color32,
    emphasized: bool,
    id_salt: impl std::hash::Hash,
) -> Response {
    let id = Id::new(id_salt);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_owned(), FontId::proportional(13.0), accent);

    let padding = Vec2::new(12.0, 5.0);
    let (rect, response) = ui.allocate_exact_size(galley.size() + padding * 2.0, Sense::click());

    let lit = response.hovered() || emphasized;
    let glow = ui.ctx().animate_bool_with_time(id.with("glow"), lit, 0.15);

    let face = if response.is_pointer_button_down_on() {
        rect.shrink(1.0)
    } else {
        rect
    };

    let painter = ui.painter();
    painter.rect_filled(face, 6.0, accent.gamma_multiply(0.10 + glow * 0.18));
    painter.rect_stroke(
        face,
        6.0,
        egui::Stroke::new(
            if emphasized { 2.0 } else { 1.0 },
            accent.gamma_multiply(0.35 + glow * 0.65),
        ),
        StrokeKind::Inside,
    );
    painter.galley(face.center() - galley.size() / 2.0, galley, accent);

    response
}

/// Frameless icon button; the glyph brightens toward `hover_color`.
pub fn icon_button(
    ui: &mut Ui,
    icon: &str,
    base_color: Color32,
    hover_color: Color32,
    id_salt: impl std::hash::Hash,
) -> Response {
    let id = Id::new(id_salt);
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(22.0), Sense::click());

    let t = ui
        .ctx()
        .animate_bool_with_time(id.with("hover"), response.hovered(), 0.12);

    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        icon,
        FontId::proportional(16.0),
        base_color.lerp_to_gamma(hover_color, t),
    );

    response
}

/// Small rounded label chip. Returns the response so callers can attach
/// hover text.
pub fn chip(ui: &mut Ui, text: impl Into<RichText>, accent: Color32) -> Response {
    egui::Frame::NONE
        .fill(chrome::BG_RAISED)
        .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.6)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(text.into().color(chrome::TEXT_PRIMARY).size(12.0));
        })
        .response
}
