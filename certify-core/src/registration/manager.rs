use std::collections::VecDeque;
use std::sync::Arc;

use super::state::{ProfileField, RegistrationState, RegistrationStep, UploadedFile};
use super::validation::{self, ReviewRow};
use super::RegistrationAction;
use crate::catalog::{LicenseCatalog, LicenseRequirement};
use crate::routes::Route;
use crate::util::RegistrationError;

/// Owns the wizard state for one visit to the registration page.
pub struct RegistrationManager {
    // Current state - single source of truth
    state: RegistrationState,

    // Industry → license table the wizard validates against
    catalog: Arc<LicenseCatalog>,

    // Action queue, drained in order by `update`
    pending_actions: VecDeque<RegistrationAction>,
}

impl RegistrationManager {
    pub fn new(catalog: Arc<LicenseCatalog>) -> Self {
        let mut manager = Self {
            state: RegistrationState::default(),
            catalog,
            pending_actions: VecDeque::new(),
        };
        manager.update_workflow_state();
        manager
    }

    /// UI calls this - just queues the action
    pub fn dispatch(&mut self, action: RegistrationAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame - processes every queued action in order
    pub fn update(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.handle_action(action);
        }
    }

    /// Dispatch and process immediately.
    pub fn apply(&mut self, action: RegistrationAction) {
        self.dispatch(action);
        self.update();
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn catalog(&self) -> &LicenseCatalog {
        &self.catalog
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    /// Drops queued actions without running them.
    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    pub fn validate_step(&self, step: RegistrationStep) -> bool {
        validation::validate_step(step, &self.state.form, &self.catalog)
    }

    /// Licenses listed for the selected industry, in display order.
    pub fn current_licenses(&self) -> &[LicenseRequirement] {
        self.catalog.licenses_for(&self.state.form.industry)
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        validation::review_rows(&self.state.form, &self.catalog)
    }

    /// Hands the pending navigation to the router, at most once.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.state.navigation.take()
    }

    fn handle_action(&mut self, action: RegistrationAction) {
        // Clear previous errors unless it's an error-handling action
        if !action.preserves_messages() {
            self.state.clear_errors();
        }

        let result = match action {
            RegistrationAction::AdvanceStep => self.handle_advance_step(),
            RegistrationAction::GoBackStep => {
                self.handle_go_back_step();
                Ok(())
            }
            RegistrationAction::Reset => {
                self.handle_reset();
                Ok(())
            }
            RegistrationAction::SelectIndustry { industry } => self.handle_select_industry(industry),
            RegistrationAction::UpdateField { field, value } => {
                self.handle_update_field(field, value);
                Ok(())
            }
            RegistrationAction::SetLicense { key, value } => self.handle_set_license(key, value),
            RegistrationAction::AttachFile { key, file } => self.handle_attach_file(key, file),
            RegistrationAction::RemoveFile { key } => {
                self.handle_remove_file(&key);
                Ok(())
            }
            RegistrationAction::Submit => self.handle_submit(),
            RegistrationAction::ClearErrors => {
                self.state.clear_errors();
                Ok(())
            }
            RegistrationAction::DismissWarning { index } => {
                self.handle_dismiss_warning(index);
                Ok(())
            }
        };

        if let Err(error) = result {
            log::warn!("Registration action rejected: {}", error);
            self.state.add_error(error.to_string());
        }

        // Update wizard flags after each action
        self.update_workflow_state();
    }

    /// Update can_proceed and can_go_back flags based on current state
    fn update_workflow_state(&mut self) {
        self.state.can_proceed = self.validate_step(self.state.current_step);
        self.state.can_go_back = !self.state.current_step.is_first();
        self.state.update_progress();
    }
}

// Action handler implementations
impl RegistrationManager {
    fn handle_advance_step(&mut self) -> Result<(), RegistrationError> {
        let step = self.state.current_step;
        if !self.validate_step(step) {
            return Err(RegistrationError::StepIncomplete(step.title()));
        }

        self.state.current_step = step.next();
        log::info!("Advanced to step: {:?}", self.state.current_step);
        Ok(())
    }

    fn handle_go_back_step(&mut self) {
        self.state.current_step = self.state.current_step.prev();
        log::info!("Went back to step: {:?}", self.state.current_step);
    }

    fn handle_reset(&mut self) {
        self.state = RegistrationState::default();
        log::info!("Registration state reset");
    }

    fn handle_select_industry(&mut self, industry: String) -> Result<(), RegistrationError> {
        if !industry.is_empty() && !self.catalog.contains(&industry) {
            return Err(RegistrationError::UnknownIndustry(industry));
        }

        // Entries for licenses the new industry does not list are dropped;
        // shared keys such as GSTIN carry over.
        let catalog = &self.catalog;
        let form = &mut self.state.form;
        let before = form.licenses.len() + form.uploaded_files.len();
        form.licenses.retain(|key, _| catalog.has_license(&industry, key));
        form.uploaded_files.retain(|key, _| catalog.has_license(&industry, key));
        let purged = before - form.licenses.len() - form.uploaded_files.len();

        log::info!("Industry selected: {:?}", industry);
        form.industry = industry;

        if purged > 0 {
            let warning = format!(
                "Cleared {} license entries not used by the selected industry",
                purged
            );
            log::info!("{}", warning);
            self.state.add_warning(warning);
        }
        Ok(())
    }

    fn handle_update_field(&mut self, field: ProfileField, value: String) {
        *self.state.form.field_mut(field) = value;
    }

    fn ensure_listed(&self, key: &str) -> Result<(), RegistrationError> {
        let industry = &self.state.form.industry;
        if self.catalog.has_license(industry, key) {
            Ok(())
        } else {
            Err(RegistrationError::UnknownLicense {
                industry: industry.clone(),
                key: key.to_string(),
            })
        }
    }

    fn handle_set_license(&mut self, key: String, value: String) -> Result<(), RegistrationError> {
        self.ensure_listed(&key)?;
        self.state.form.licenses.insert(key, value);
        Ok(())
    }

    fn handle_attach_file(&mut self, key: String, file: UploadedFile) -> Result<(), RegistrationError> {
        self.ensure_listed(&key)?;
        file.check()?;

        log::info!("Certificate attached for {}: {}", key, file.name);
        if let Some(previous) = self.state.form.uploaded_files.insert(key, file) {
            log::debug!("Replaced previous certificate {}", previous.name);
        }
        Ok(())
    }

    fn handle_remove_file(&mut self, key: &str) {
        if self.state.form.uploaded_files.remove(key).is_some() {
            log::info!("Certificate removed: {}", key);
        }
    }

    fn handle_submit(&mut self) -> Result<(), RegistrationError> {
        if !self.state.current_step.is_last() {
            return Err(RegistrationError::NotAtReview);
        }

        // Nothing is sent anywhere; submitting only leaves the page.
        self.state.navigation = Some(Route::ManufacturerDashboard);
        log::info!(
            "Registration completed for {:?}, navigating to {}",
            self.state.form.industry,
            Route::ManufacturerDashboard
        );
        Ok(())
    }

    fn handle_dismiss_warning(&mut self, index: usize) {
        if index < self.state.warnings.len() {
            self.state.warnings.remove(index);
            log::debug!("Warning dismissed at index: {}", index);
        }
    }
}
