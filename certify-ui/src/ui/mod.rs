// Page render code. Each page reads its own state, draws it, and returns
// the route it wants to navigate to, if any. Nothing here talks to a backend.

pub mod auth;
pub mod comparison;
pub mod dashboard;
pub mod landing;
pub mod product;
pub mod registration;
pub mod submission;
pub mod verification;

use certify_core::Route;
use egui::{Color32, RichText, Ui};

pub const NEON_GREEN: Color32 = Color32::from_rgb(57, 255, 20);
pub const ELECTRIC_LIME: Color32 = Color32::from_rgb(204, 255, 0);
pub const WARNING_YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);

pub fn page_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.heading(RichText::new(title).strong().color(Color32::WHITE));
    ui.label(RichText::new(subtitle).color(MUTED));
    ui.add_space(12.0);
}

/// A button that navigates when clicked.
pub fn nav_button(ui: &mut Ui, text: &str, target: Route, nav: &mut Option<Route>) {
    if ui.button(text).clicked() {
        *nav = Some(target);
    }
}

pub fn required_marker(ui: &mut Ui, required: bool) {
    if required {
        ui.colored_label(NEON_GREEN, "*");
    }
}
