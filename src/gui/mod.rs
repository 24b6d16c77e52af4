//! Desktop GUI
//!
//! An eframe/egui dashboard: one card per child with their theme, avatar,
//! animated points counter, daily progress, and task list. All celebration
//! effects render through the shared [`EffectsEngine`](crate::effects).

mod app;
mod chrome;
mod dashboard;
mod overlay;
mod runner;
mod toasts;
mod widgets;

pub use app::ChoreStarApp;
pub use runner::run_gui;
