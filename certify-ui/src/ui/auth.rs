use certify_core::Route;
use egui::{RichText, Ui};

use super::{nav_button, page_header, MUTED};

/// Sign-in form. Credentials are never checked or stored.
#[derive(Default)]
pub struct AuthPage {
    email: String,
    password: String,
}

impl AuthPage {
    pub fn render(&mut self, ui: &mut Ui) -> Option<Route> {
        let mut nav = None;

        page_header(ui, "Manufacturer Portal", "Sign in to manage your certified products");

        ui.group(|ui| {
            egui::Grid::new("auth_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut self.email).hint_text("you@company.com"));
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                    ui.end_row();
                });

            ui.add_space(6.0);
            let can_sign_in = self.email.contains('@') && !self.password.is_empty();
            if ui.add_enabled(can_sign_in, egui::Button::new("Sign In")).clicked() {
                // Nothing to verify against; the password is not kept around.
                self.password.clear();
                nav = Some(Route::ManufacturerDashboard);
            }
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("New manufacturer?").color(MUTED));
            nav_button(ui, "Register your company", Route::CompanyRegistration, &mut nav);
        });

        nav
    }
}
