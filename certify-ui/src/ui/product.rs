use certify_core::Route;
use egui::{RichText, Ui};

use super::{nav_button, page_header, MUTED, NEON_GREEN};

pub fn render(ui: &mut Ui, hash: &str) -> Option<Route> {
    let mut nav = None;

    page_header(ui, "Product Certificate", "Public record for a certified product");

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Certificate hash:").color(MUTED));
            ui.monospace(hash);
        });
        ui.colored_label(NEON_GREEN, "✔ Listed");
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        nav_button(ui, "⚖ Compare with another product", Route::ProductComparison, &mut nav);
        nav_button(ui, "Home", Route::Landing, &mut nav);
    });

    nav
}
