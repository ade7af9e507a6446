use super::state::{ProfileField, UploadedFile};

#[derive(Debug, Clone)]
pub enum RegistrationAction {
    // Wizard control
    AdvanceStep,
    GoBackStep,
    Reset,

    // Form updates
    SelectIndustry { industry: String },
    UpdateField { field: ProfileField, value: String },
    SetLicense { key: String, value: String },
    AttachFile { key: String, file: UploadedFile },
    RemoveFile { key: String },

    // Review
    Submit,

    // Error handling
    ClearErrors,
    DismissWarning { index: usize },
}

impl RegistrationAction {
    pub fn description(&self) -> &'static str {
        match self {
            RegistrationAction::AdvanceStep => "Advancing to next step",
            RegistrationAction::GoBackStep => "Going back to previous step",
            RegistrationAction::Reset => "Resetting registration",
            RegistrationAction::SelectIndustry { .. } => "Selecting industry",
            RegistrationAction::UpdateField { .. } => "Updating company profile",
            RegistrationAction::SetLicense { .. } => "Updating license number",
            RegistrationAction::AttachFile { .. } => "Attaching certificate",
            RegistrationAction::RemoveFile { .. } => "Removing certificate",
            RegistrationAction::Submit => "Submitting registration",
            RegistrationAction::ClearErrors => "Clearing validation errors",
            RegistrationAction::DismissWarning { .. } => "Dismissing warning",
        }
    }

    /// Actions that leave the error and warning lists alone.
    pub fn preserves_messages(&self) -> bool {
        matches!(
            self,
            RegistrationAction::ClearErrors | RegistrationAction::DismissWarning { .. }
        )
    }
}
