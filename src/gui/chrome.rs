//! Fixed chrome colors
//!
//! Theme palettes color the per-child cards; everything structural (panel
//! backgrounds, card fills, muted text) uses these constants so the
//! dashboard stays readable under every theme.

use egui::Color32;

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 22, 34);
/// Card background
pub const BG_CARD: Color32 = Color32::from_rgb(36, 33, 50);
/// Raised element background (chips, buttons)
pub const BG_RAISED: Color32 = Color32::from_rgb(48, 44, 66);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 238, 248);
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 155, 180);

/// Progress bar trough
pub const TRACK: Color32 = Color32::from_rgb(55, 50, 75);

pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
