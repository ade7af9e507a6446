#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use std::sync::Arc;

use certify_core::catalog::{LicenseCatalog, LicenseRequirement};
use certify_core::registration::{
    missing_for_step, ProfileField, RegistrationAction, RegistrationManager, RegistrationStep,
    StepStatus, UploadedFile,
};
use certify_core::Route;
use egui::{Color32, RichText, Ui};

use super::{page_header, required_marker, ELECTRIC_LIME, MUTED, NEON_GREEN, WARNING_YELLOW};

/// The company registration wizard. Created when the page is entered and
/// dropped when the router leaves it, which discards everything typed.
pub struct RegistrationPage {
    manager: RegistrationManager,

    // License key the next dropped file goes to
    armed_slot: Option<String>,
    attach_error: Option<String>,

    #[cfg(not(target_arch = "wasm32"))]
    path_inputs: HashMap<String, String>,
}

impl RegistrationPage {
    pub fn new(catalog: Arc<LicenseCatalog>) -> Self {
        log::debug!("Registration page mounted");
        Self {
            manager: RegistrationManager::new(catalog),
            armed_slot: None,
            attach_error: None,
            #[cfg(not(target_arch = "wasm32"))]
            path_inputs: HashMap::new(),
        }
    }

    pub fn manager(&self) -> &RegistrationManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut RegistrationManager {
        &mut self.manager
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<Route> {
        let mut actions = Vec::new();
        self.release_stale_arm();
        self.collect_dropped_files(ui.ctx(), &mut actions);

        page_header(
            ui,
            "Company Registration",
            "Complete your company profile to start certifying products",
        );
        self.render_progress(ui);
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                match self.manager.state().current_step {
                    RegistrationStep::IndustrySelection => {
                        self.render_industry_step(ui, &mut actions)
                    }
                    RegistrationStep::LicenseInformation => {
                        self.render_license_step(ui, &mut actions)
                    }
                    RegistrationStep::UploadCertificates => {
                        self.render_upload_step(ui, &mut actions)
                    }
                    RegistrationStep::ReviewAndSubmit => self.render_review_step(ui),
                }

                ui.add_space(10.0);
                self.render_messages(ui, &mut actions);
                ui.separator();
                self.render_navigation(ui, &mut actions);
            });

        for action in actions {
            self.manager.dispatch(action);
        }
        self.manager.update();
        self.manager.take_navigation()
    }

    fn render_progress(&self, ui: &mut Ui) {
        let state = self.manager.state();
        let last = RegistrationStep::ALL.len() - 1;

        ui.horizontal_wrapped(|ui| {
            for (i, step) in RegistrationStep::ALL.iter().enumerate() {
                let status = state.step_status(*step);
                let (badge, color) = match status {
                    StepStatus::Completed => ("✔".to_string(), NEON_GREEN),
                    StepStatus::Current => (step.number().to_string(), ELECTRIC_LIME),
                    StepStatus::Pending => (step.number().to_string(), MUTED),
                };

                ui.label(
                    RichText::new(format!(" {} ", badge))
                        .strong()
                        .color(Color32::BLACK)
                        .background_color(color),
                );
                let title_color = if status == StepStatus::Pending { MUTED } else { Color32::WHITE };
                ui.label(RichText::new(step.title()).color(title_color));

                if i < last {
                    let line_color = if status == StepStatus::Completed { NEON_GREEN } else { MUTED };
                    ui.label(RichText::new("────").color(line_color));
                }
            }
        });

        ui.add(
            egui::ProgressBar::new(f32::from(state.progress_percentage) / 100.0).show_percentage(),
        );
    }

    fn render_industry_step(&self, ui: &mut Ui, actions: &mut Vec<RegistrationAction>) {
        let state = self.manager.state();
        let catalog = self.manager.catalog();

        ui.heading("🏢 Select Your Industry");
        ui.label(RichText::new("Choose the industry that best describes your business").color(MUTED));
        ui.add_space(8.0);

        let current = state.form.industry.clone();
        let mut selected = current.clone();
        ui.horizontal(|ui| {
            ui.label("Industry");
            required_marker(ui, true);
            egui::ComboBox::new("industry_selector", "")
                .selected_text(if selected.is_empty() { "Select Industry" } else { selected.as_str() })
                .width(320.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, String::new(), "Select Industry");
                    for industry in catalog.industries() {
                        ui.selectable_value(&mut selected, industry.to_string(), industry);
                    }
                });
        });
        if selected != current {
            actions.push(RegistrationAction::SelectIndustry { industry: selected });
        }

        if !current.is_empty() {
            ui.add_space(8.0);
            ui.group(|ui| {
                ui.label(RichText::new(format!("Required Licenses for {}:", current)).strong());
                for license in catalog.licenses_for(&current) {
                    let (color, tag) = if license.required {
                        (NEON_GREEN, "(Required)")
                    } else {
                        (WARNING_YELLOW, "(Optional)")
                    };
                    ui.horizontal(|ui| {
                        ui.colored_label(color, "●");
                        ui.label(format!("{} {}", license.label, tag));
                    });
                }
            });
        }

        ui.add_space(8.0);
        egui::CollapsingHeader::new("Company Profile")
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("company_profile_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        for field in ProfileField::ALL {
                            ui.label(format!("{}:", field.label()));
                            let mut value = state.form.field(field).to_string();
                            let response = if field == ProfileField::Description {
                                ui.text_edit_multiline(&mut value)
                            } else {
                                ui.text_edit_singleline(&mut value)
                            };
                            if response.changed() {
                                actions.push(RegistrationAction::UpdateField { field, value });
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_license_step(&self, ui: &mut Ui, actions: &mut Vec<RegistrationAction>) {
        let state = self.manager.state();

        ui.heading("📄 License Information");
        ui.label(
            RichText::new(format!("Enter your license numbers for {}", state.form.industry)).color(MUTED),
        );
        ui.add_space(8.0);

        egui::Grid::new("license_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                for license in self.manager.current_licenses() {
                    ui.horizontal(|ui| {
                        ui.label(&license.label);
                        required_marker(ui, license.required);
                    });

                    let mut value = state.form.license(&license.key).to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut value)
                            .hint_text(format!("Enter {}", license.label.to_lowercase()))
                            .desired_width(280.0),
                    );
                    if response.changed() {
                        actions.push(RegistrationAction::SetLicense {
                            key: license.key.clone(),
                            value,
                        });
                    }
                    ui.end_row();
                }
            });
    }

    fn render_upload_step(&mut self, ui: &mut Ui, actions: &mut Vec<RegistrationAction>) {
        ui.heading("⬆ Upload Certificates");
        ui.label(RichText::new("Upload official certificates for each license").color(MUTED));
        ui.add_space(8.0);

        let licenses = self.manager.current_licenses().to_vec();
        for license in &licenses {
            let uploaded = self.manager.state().form.uploaded_files.get(&license.key).cloned();

            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.strong(&license.label);
                    required_marker(ui, license.required);
                    if uploaded.is_some() {
                        ui.colored_label(NEON_GREEN, "✔");
                    }
                });

                match &uploaded {
                    Some(file) => {
                        ui.horizontal(|ui| {
                            ui.colored_label(NEON_GREEN, "📄");
                            ui.label(&file.name);
                            ui.label(
                                RichText::new(format!(
                                    "{} · {}",
                                    format_size(file.size_bytes),
                                    file.attached_at.format("%Y-%m-%d %H:%M")
                                ))
                                .color(MUTED),
                            );
                            if ui.button("✖").on_hover_text("Remove certificate").clicked() {
                                actions.push(RegistrationAction::RemoveFile {
                                    key: license.key.clone(),
                                });
                            }
                        });
                    }
                    None => self.render_empty_slot(ui, license, actions),
                }
            });
            ui.add_space(6.0);
        }
    }

    fn render_empty_slot(
        &mut self,
        ui: &mut Ui,
        license: &LicenseRequirement,
        #[allow(unused_variables)] actions: &mut Vec<RegistrationAction>,
    ) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format!("Upload certificate for {}", license.label)).color(MUTED));
            ui.label(RichText::new("PDF, JPG, PNG (Max 10MB)").small().color(MUTED));

            let armed = self.armed_slot.as_deref() == Some(license.key.as_str());
            if armed {
                ui.colored_label(ELECTRIC_LIME, "Drop the file anywhere on this window");
                if ui.button("Cancel").clicked() {
                    self.armed_slot = None;
                }
            } else if ui.button("⬆ Choose File").clicked() {
                self.armed_slot = Some(license.key.clone());
            }
        });

        #[cfg(not(target_arch = "wasm32"))]
        ui.horizontal(|ui| {
            let input = self.path_inputs.entry(license.key.clone()).or_default();
            ui.add(
                egui::TextEdit::singleline(input)
                    .hint_text("or enter a file path")
                    .desired_width(320.0),
            );
            if ui.button("Attach").clicked() && !input.trim().is_empty() {
                match file_from_path(Path::new(input.trim())) {
                    Ok(file) => {
                        actions.push(RegistrationAction::AttachFile {
                            key: license.key.clone(),
                            file,
                        });
                        input.clear();
                        self.attach_error = None;
                        if self.armed_slot.as_deref() == Some(license.key.as_str()) {
                            self.armed_slot = None;
                        }
                    }
                    Err(e) => self.attach_error = Some(format!("{:#}", e)),
                }
            }
        });
    }

    fn render_review_step(&self, ui: &mut Ui) {
        let state = self.manager.state();

        ui.heading("✔ Review & Submit");
        ui.label(RichText::new("Please review your information before submitting").color(MUTED));
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong("Selected Industry");
            ui.colored_label(NEON_GREEN, &state.form.industry);
        });

        let filled: Vec<ProfileField> = ProfileField::ALL
            .into_iter()
            .filter(|f| !state.form.field(*f).trim().is_empty())
            .collect();
        if !filled.is_empty() {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong("Company Profile");
                egui::Grid::new("review_profile_grid").num_columns(2).show(ui, |ui| {
                    for field in filled {
                        ui.label(RichText::new(format!("{}:", field.label())).color(MUTED));
                        ui.label(state.form.field(field));
                        ui.end_row();
                    }
                });
            });
        }

        let rows = self.manager.review_rows();

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong("License Information");
            egui::Grid::new("review_license_grid").num_columns(2).show(ui, |ui| {
                for row in &rows {
                    ui.label(RichText::new(format!("{}:", row.label)).color(MUTED));
                    ui.label(RichText::new(row.value_display()).strong());
                    ui.end_row();
                }
            });
        });

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong("Uploaded Certificates");
            egui::Grid::new("review_files_grid").num_columns(2).show(ui, |ui| {
                for row in &rows {
                    ui.label(RichText::new(format!("{}:", row.label)).color(MUTED));
                    match &row.file_name {
                        Some(name) => {
                            ui.colored_label(NEON_GREEN, format!("✔ {}", row.upload_status()))
                                .on_hover_text(name);
                        }
                        None => {
                            ui.colored_label(WARNING_YELLOW, format!("⚠ {}", row.upload_status()));
                        }
                    }
                    ui.end_row();
                }
            });
        });
    }

    fn render_messages(&self, ui: &mut Ui, actions: &mut Vec<RegistrationAction>) {
        let state = self.manager.state();

        for error in &state.validation_errors {
            ui.colored_label(Color32::RED, format!("❌ {}", error));
        }
        if let Some(error) = &self.attach_error {
            ui.colored_label(Color32::RED, format!("❌ {}", error));
        }
        for (index, warning) in state.warnings.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.colored_label(WARNING_YELLOW, format!("⚠ {}", warning));
                if ui.small_button("Dismiss").clicked() {
                    actions.push(RegistrationAction::DismissWarning { index });
                }
            });
        }

        let missing = missing_for_step(state.current_step, &state.form, self.manager.catalog());
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|l| l.label.as_str()).collect();
            ui.label(RichText::new(format!("Still needed: {}", labels.join(", "))).color(MUTED));
        }
    }

    fn render_navigation(&self, ui: &mut Ui, actions: &mut Vec<RegistrationAction>) {
        let state = self.manager.state();

        ui.horizontal(|ui| {
            if state.can_go_back && ui.button("◀ Previous").clicked() {
                actions.push(RegistrationAction::GoBackStep);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.current_step.is_last() {
                    let submit = egui::Button::new("Complete Registration ▶");
                    if ui.add_enabled(state.can_proceed, submit).clicked() {
                        actions.push(RegistrationAction::Submit);
                    }
                } else {
                    let next = egui::Button::new("Next Step ▶");
                    if ui.add_enabled(state.can_proceed, next).clicked() {
                        actions.push(RegistrationAction::AdvanceStep);
                    }
                }
            });
        });
    }

    /// Files dropped on the window go to the armed slot, or the first
    /// license still missing a certificate.
    fn collect_dropped_files(&mut self, ctx: &egui::Context, actions: &mut Vec<RegistrationAction>) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.first() else {
            return;
        };
        if self.manager.state().current_step != RegistrationStep::UploadCertificates {
            return;
        }
        let Some(key) = self.armed_slot.take().or_else(|| self.first_open_slot()) else {
            return;
        };

        match file_from_drop(file) {
            Ok(upload) => {
                self.attach_error = None;
                actions.push(RegistrationAction::AttachFile { key, file: upload });
            }
            Err(e) => self.attach_error = Some(format!("{:#}", e)),
        }
    }

    /// An armed slot only survives while it is an empty slot on the upload
    /// step of the selected industry.
    fn release_stale_arm(&mut self) {
        if let Some(key) = self.armed_slot.as_deref() {
            if !self.is_open_slot(key) {
                log::debug!("Disarming certificate slot {}", key);
                self.armed_slot = None;
            }
        }
    }

    fn is_open_slot(&self, key: &str) -> bool {
        let state = self.manager.state();
        state.current_step == RegistrationStep::UploadCertificates
            && !state.form.has_file(key)
            && self.manager.current_licenses().iter().any(|l| l.key == key)
    }

    fn first_open_slot(&self) -> Option<String> {
        let form = &self.manager.state().form;
        self.manager
            .current_licenses()
            .iter()
            .find(|l| !form.has_file(&l.key))
            .map(|l| l.key.clone())
    }
}

fn file_from_drop(file: &egui::DroppedFile) -> anyhow::Result<UploadedFile> {
    let name = file
        .path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.name.clone());

    let size_bytes = match (&file.bytes, &file.path) {
        (Some(bytes), _) => bytes.len() as u64,
        #[cfg(not(target_arch = "wasm32"))]
        (None, Some(path)) => std::fs::metadata(path)?.len(),
        _ => anyhow::bail!("{} could not be read", name),
    };

    let upload = UploadedFile::new(name, size_bytes)?;
    Ok(match &file.path {
        Some(path) => upload.with_path(path.clone()),
        None => upload,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn file_from_path(path: &Path) -> anyhow::Result<UploadedFile> {
    use anyhow::Context;

    let metadata =
        std::fs::metadata(path).with_context(|| format!("cannot read {}", path.display()))?;
    anyhow::ensure!(metadata.is_file(), "{} is not a file", path.display());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadedFile::new(name, metadata.len())?.with_path(path.to_path_buf()))
}

fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    match bytes {
        b if b >= MIB => format!("{:.1} MB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KB", b as f64 / KIB as f64),
        b => format!("{} B", b),
    }
}
