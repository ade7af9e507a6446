use certify_core::Route;
use egui::{RichText, Ui};

use super::{nav_button, page_header, MUTED, WARNING_YELLOW};

pub fn render(ui: &mut Ui, id: &str) -> Option<Route> {
    let mut nav = None;

    page_header(ui, "Verification Status", "Track the certification of a submitted product");

    ui.group(|ui| {
        egui::Grid::new("verification_grid").num_columns(2).show(ui, |ui| {
            ui.label(RichText::new("Submission ID:").color(MUTED));
            ui.monospace(id);
            ui.end_row();

            ui.label(RichText::new("Status:").color(MUTED));
            ui.colored_label(WARNING_YELLOW, "⏳ Pending review");
            ui.end_row();
        });
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        nav_button(ui, "View Product Page", Route::ProductView { hash: id.to_string() }, &mut nav);
        nav_button(ui, "Back to Dashboard", Route::ManufacturerDashboard, &mut nav);
    });

    nav
}
