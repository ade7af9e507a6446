use certify_core::Route;
use egui::{RichText, Ui};

use super::{page_header, MUTED};

#[derive(Default)]
pub struct ComparisonPage {
    hashes: [String; 2],
}

impl ComparisonPage {
    pub fn render(&mut self, ui: &mut Ui) -> Option<Route> {
        let mut nav = None;

        page_header(ui, "Compare Products", "Look at two certified products side by side");

        ui.columns(2, |columns| {
            for (column, hash) in columns.iter_mut().zip(self.hashes.iter_mut()) {
                column.group(|ui| {
                    ui.add(egui::TextEdit::singleline(hash).hint_text("Product hash"));
                    let trimmed = hash.trim();
                    if trimmed.is_empty() {
                        ui.label(RichText::new("Enter a hash to compare").color(MUTED));
                    } else {
                        ui.monospace(trimmed);
                        if !trimmed.contains('/') && ui.button("Open product page").clicked() {
                            nav = Some(Route::ProductView { hash: trimmed.to_string() });
                        }
                    }
                });
            }
        });

        nav
    }
}
