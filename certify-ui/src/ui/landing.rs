use certify_core::Route;
use egui::{RichText, Ui};

use super::{nav_button, page_header, MUTED, NEON_GREEN};

#[derive(Default)]
pub struct LandingPage {
    lookup_hash: String,
}

impl LandingPage {
    pub fn render(&mut self, ui: &mut Ui) -> Option<Route> {
        let mut nav = None;

        page_header(
            ui,
            "Verified Manufacturer Certification",
            "Register your company, certify products, and let buyers verify them",
        );

        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label(RichText::new("🏭 For Manufacturers").strong().color(NEON_GREEN));
                let blurb = "Register your company and submit products for certification.";
                ui.label(RichText::new(blurb).color(MUTED));
                ui.add_space(6.0);
                nav_button(ui, "Get Started", Route::ManufacturerAuth, &mut nav);
            });

            columns[1].group(|ui| {
                ui.label(RichText::new("🔍 Verify a Product").strong().color(NEON_GREEN));
                let blurb = "Enter the certification hash printed on the product.";
                ui.label(RichText::new(blurb).color(MUTED));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.lookup_hash).hint_text("Product hash"),
                    );
                    let hash = self.lookup_hash.trim();
                    let valid = !hash.is_empty() && !hash.contains('/');
                    if ui.add_enabled(valid, egui::Button::new("Look up")).clicked() {
                        nav = Some(Route::ProductView { hash: hash.to_string() });
                    }
                });
                ui.add_space(6.0);
                nav_button(ui, "⚖ Compare Products", Route::ProductComparison, &mut nav);
            });
        });

        nav
    }
}
