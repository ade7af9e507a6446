use certify_core::Route;
use egui::{RichText, Ui};

use super::{page_header, required_marker, MUTED};

const CATEGORIES: &[&str] = &[
    "Apparel",
    "Electronics",
    "Food & Beverage",
    "Automotive Parts",
    "Cosmetics",
    "Home & Garden",
    "Sports Equipment",
    "Pharmaceuticals",
];

/// Product details for certification. Kept only while the page is open.
#[derive(Default)]
pub struct SubmissionPage {
    pub product_name: String,
    pub category: String,
    pub batch_number: String,
    pub description: String,
}

impl SubmissionPage {
    pub fn is_complete(&self) -> bool {
        !self.product_name.trim().is_empty() && !self.category.is_empty()
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<Route> {
        let mut nav = None;

        page_header(ui, "Submit Product", "Send a product for certification review");

        ui.group(|ui| {
            egui::Grid::new("submission_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Product Name");
                        required_marker(ui, true);
                    });
                    ui.text_edit_singleline(&mut self.product_name);
                    ui.end_row();

                    ui.horizontal(|ui| {
                        ui.label("Category");
                        required_marker(ui, true);
                    });
                    egui::ComboBox::new("category_selector", "")
                        .selected_text(if self.category.is_empty() { "Select Category" } else { self.category.as_str() })
                        .show_ui(ui, |ui| {
                            for category in CATEGORIES {
                                ui.selectable_value(&mut self.category, (*category).to_string(), *category);
                            }
                        });
                    ui.end_row();

                    ui.label("Batch Number");
                    ui.text_edit_singleline(&mut self.batch_number);
                    ui.end_row();

                    ui.label("Description");
                    ui.text_edit_multiline(&mut self.description);
                    ui.end_row();
                });
        });

        ui.add_space(10.0);
        let submit = egui::Button::new("Submit for Certification");
        if ui.add_enabled(self.is_complete(), submit).clicked() {
            nav = Some(self.submit());
        }
        if !self.is_complete() {
            ui.label(RichText::new("Product name and category are required").color(MUTED));
        }

        nav
    }

    /// Clears the form and returns the verification route for the new id.
    pub fn submit(&mut self) -> Route {
        let id = submission_id();
        log::info!("Product {:?} queued locally as {}", self.product_name, id);
        *self = Self::default();
        Route::Verification { id }
    }
}

fn submission_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("VR-{}", &id[..8].to_uppercase())
}
