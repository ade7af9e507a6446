use certify_core::Route;
use egui::{RichText, Ui};

use super::{nav_button, page_header, MUTED, NEON_GREEN};

pub fn render(ui: &mut Ui) -> Option<Route> {
    let mut nav = None;

    page_header(ui, "Manufacturer Dashboard", "Manage your company profile and product certifications");

    ui.columns(3, |columns| {
        card(
            &mut columns[0],
            "🏢 Company Profile",
            "Complete registration with your industry licenses.",
            ("Register Company", Route::CompanyRegistration),
            &mut nav,
        );
        card(
            &mut columns[1],
            "📦 Products",
            "Submit a product for certification.",
            ("Submit Product", Route::ProductSubmission),
            &mut nav,
        );
        card(
            &mut columns[2],
            "⚖ Compare",
            "Compare certified products side by side.",
            ("Compare Products", Route::ProductComparison),
            &mut nav,
        );
    });

    nav
}

fn card(ui: &mut Ui, title: &str, blurb: &str, (text, target): (&str, Route), nav: &mut Option<Route>) {
    ui.group(|ui| {
        ui.label(RichText::new(title).strong().color(NEON_GREEN));
        ui.label(RichText::new(blurb).color(MUTED));
        ui.add_space(6.0);
        nav_button(ui, text, target, nav);
    });
}
