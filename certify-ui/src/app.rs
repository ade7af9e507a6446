use std::sync::Arc;

use certify_core::{LicenseCatalog, Route};
use eframe::egui;

use crate::config::AppConfig;
use crate::router::WebRouter;
use crate::ui::{auth::AuthPage, comparison::ComparisonPage, landing::LandingPage};
use crate::ui::{registration::RegistrationPage, submission::SubmissionPage};
use crate::wasm_utils;

/// Manufacturer Certification Portal application
pub struct CertifyApp {
    router: WebRouter,
    catalog: Arc<LicenseCatalog>,

    // Page state. The registration wizard only exists while its route is active.
    landing: LandingPage,
    auth: AuthPage,
    submission: SubmissionPage,
    comparison: ComparisonPage,
    registration: Option<RegistrationPage>,

    startup_error: Option<String>,
}

impl CertifyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log("🚀 Starting Manufacturer Certification Portal");

        let (catalog, startup_error) = match config.load_catalog() {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                log::error!("Falling back to the built-in license catalog: {:#}", e);
                (LicenseCatalog::builtin(), Some(format!("{:#}", e)))
            }
        };

        Self::with_catalog(Arc::new(catalog), config.start_route(), startup_error)
    }

    fn with_catalog(catalog: Arc<LicenseCatalog>, start: Route, startup_error: Option<String>) -> Self {
        Self {
            router: WebRouter::new(start),
            catalog,
            landing: LandingPage::default(),
            auth: AuthPage::default(),
            submission: SubmissionPage::default(),
            comparison: ComparisonPage::default(),
            registration: None,
            startup_error,
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        match self.router.current_route().clone() {
            Route::Landing => self.landing.render(ui),
            Route::ManufacturerAuth => self.auth.render(ui),
            Route::ManufacturerDashboard => crate::ui::dashboard::render(ui),
            Route::CompanyRegistration => {
                let catalog = &self.catalog;
                self.registration
                    .get_or_insert_with(|| RegistrationPage::new(catalog.clone()))
                    .render(ui)
            }
            Route::ProductSubmission => self.submission.render(ui),
            Route::Verification { id } => crate::ui::verification::render(ui, &id),
            Route::ProductView { hash } => crate::ui::product::render(ui, &hash),
            Route::ProductComparison => self.comparison.render(ui),
        }
    }

    fn navigate(&mut self, route: Route) {
        self.router.navigate_to(route);
        self.unmount_inactive_pages();
    }

    /// Leaving the registration route discards the wizard and its form data.
    fn unmount_inactive_pages(&mut self) {
        let current = self.router.current_route();
        if *current != Route::CompanyRegistration && self.registration.take().is_some() {
            log::debug!("Registration page unmounted");
        }
    }
}

impl eframe::App for CertifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut nav = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🛡 CertifyChain").clicked() {
                    nav = Some(Route::Landing);
                }
                ui.separator();

                if ui.add_enabled(self.router.can_go_back(), egui::Button::new("◀ Back")).clicked() {
                    self.router.back();
                    self.unmount_inactive_pages();
                }
                ui.label(egui::RichText::new(self.router.current_route().path()).monospace());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dashboard").clicked() {
                        nav = Some(Route::ManufacturerDashboard);
                    }
                    if ui.button("Compare").clicked() {
                        nav = Some(Route::ProductComparison);
                    }
                });
            });

            if let Some(error) = &self.startup_error {
                ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(route) = self.render_page(ui) {
                nav = Some(route);
            }
        });

        if let Some(route) = nav {
            self.navigate(route);
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certify_core::{FormData, RegistrationAction};

    fn app() -> CertifyApp {
        CertifyApp::with_catalog(Arc::new(LicenseCatalog::builtin()), Route::Landing, None)
    }

    #[test]
    fn test_leaving_registration_discards_the_wizard() {
        let mut app = app();
        app.navigate(Route::CompanyRegistration);
        app.registration = Some(RegistrationPage::new(app.catalog.clone()));
        assert!(app.registration.is_some());

        app.navigate(Route::ManufacturerDashboard);
        assert!(app.registration.is_none());
    }

    #[test]
    fn test_back_button_path_also_unmounts() {
        let mut app = app();
        app.navigate(Route::CompanyRegistration);
        app.registration = Some(RegistrationPage::new(app.catalog.clone()));

        app.router.back();
        app.unmount_inactive_pages();
        assert!(app.registration.is_none());
        assert_eq!(app.router.current_route(), &Route::Landing);
    }

    #[test]
    fn test_every_route_renders_headless() {
        let routes = vec![
            Route::Landing,
            Route::ManufacturerAuth,
            Route::CompanyRegistration,
            Route::ManufacturerDashboard,
            Route::ProductSubmission,
            Route::Verification { id: "VR-1".to_string() },
            Route::ProductView { hash: "abc".to_string() },
            Route::ProductComparison,
        ];

        for route in routes {
            let mut app = app();
            app.navigate(route.clone());
            let ctx = egui::Context::default();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    assert_eq!(app.render_page(ui), None, "{}", route);
                });
            });
        }
    }

    #[test]
    fn test_back_to_verification_keeps_product_draft() {
        let mut app = app();
        app.navigate(Route::Verification { id: "VR-1".to_string() });
        app.navigate(Route::ProductSubmission);
        app.submission.product_name = "Smart Meter X2".to_string();

        app.navigate(Route::ManufacturerDashboard);
        app.router.back();
        app.unmount_inactive_pages();
        app.navigate(Route::Verification { id: "VR-1".to_string() });

        assert_eq!(app.submission.product_name, "Smart Meter X2");
    }

    #[test]
    fn test_registration_mounts_fresh_after_revisit() {
        let mut app = app();
        app.navigate(Route::CompanyRegistration);
        let mut page = RegistrationPage::new(app.catalog.clone());
        page.manager_mut().apply(RegistrationAction::SelectIndustry {
            industry: "Automotive".to_string(),
        });
        app.registration = Some(page);

        app.navigate(Route::ManufacturerDashboard);
        app.navigate(Route::CompanyRegistration);
        assert!(app.registration.is_none());

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                app.render_page(ui);
            });
        });
        let fresh = app.registration.as_ref().unwrap().manager().state();
        assert_eq!(fresh.form, FormData::default());
    }
}
