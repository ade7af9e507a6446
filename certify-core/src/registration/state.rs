use crate::routes::Route;
use crate::util::RegistrationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use uuid::Uuid;

/// Upper bound for a single certificate file (10 MiB).
pub const MAX_CERTIFICATE_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted certificate extensions and their content types.
pub const ACCEPTED_CERTIFICATE_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationStep {
    IndustrySelection,
    LicenseInformation,
    UploadCertificates,
    ReviewAndSubmit,
}

impl Default for RegistrationStep {
    fn default() -> Self {
        Self::IndustrySelection
    }
}

impl RegistrationStep {
    pub const ALL: [RegistrationStep; 4] = [
        RegistrationStep::IndustrySelection,
        RegistrationStep::LicenseInformation,
        RegistrationStep::UploadCertificates,
        RegistrationStep::ReviewAndSubmit,
    ];

    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::IndustrySelection => 1,
            RegistrationStep::LicenseInformation => 2,
            RegistrationStep::UploadCertificates => 3,
            RegistrationStep::ReviewAndSubmit => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            RegistrationStep::IndustrySelection => "Industry Selection",
            RegistrationStep::LicenseInformation => "License Information",
            RegistrationStep::UploadCertificates => "Upload Certificates",
            RegistrationStep::ReviewAndSubmit => "Review & Submit",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RegistrationStep::IndustrySelection => RegistrationStep::LicenseInformation,
            RegistrationStep::LicenseInformation => RegistrationStep::UploadCertificates,
            RegistrationStep::UploadCertificates => RegistrationStep::ReviewAndSubmit,
            RegistrationStep::ReviewAndSubmit => RegistrationStep::ReviewAndSubmit, // Stay at review
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RegistrationStep::IndustrySelection => RegistrationStep::IndustrySelection, // Stay at first step
            RegistrationStep::LicenseInformation => RegistrationStep::IndustrySelection,
            RegistrationStep::UploadCertificates => RegistrationStep::LicenseInformation,
            RegistrationStep::ReviewAndSubmit => RegistrationStep::UploadCertificates,
        }
    }

    pub fn is_first(self) -> bool {
        self == RegistrationStep::IndustrySelection
    }

    pub fn is_last(self) -> bool {
        self == RegistrationStep::ReviewAndSubmit
    }
}

/// How a step is drawn in the progress bar relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

/// Company profile text fields that are edited directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProfileField {
    CompanyName,
    Address,
    City,
    Country,
    Phone,
    Website,
    EmployeeCount,
    Description,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::CompanyName,
        ProfileField::Address,
        ProfileField::City,
        ProfileField::Country,
        ProfileField::Phone,
        ProfileField::Website,
        ProfileField::EmployeeCount,
        ProfileField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::CompanyName => "Company Name",
            ProfileField::Address => "Address",
            ProfileField::City => "City",
            ProfileField::Country => "Country",
            ProfileField::Phone => "Phone",
            ProfileField::Website => "Website",
            ProfileField::EmployeeCount => "Employee Count",
            ProfileField::Description => "Description",
        }
    }
}

/// In-memory handle for a certificate the user picked. Never uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
    pub attached_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl UploadedFile {
    /// Builds a handle, rejecting anything the certificate picker would not accept.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Result<Self, RegistrationError> {
        let name = name.into();
        let content_type = certificate_content_type(&name)
            .ok_or_else(|| RegistrationError::UnsupportedFileType(name.clone()))?;

        if size_bytes > MAX_CERTIFICATE_BYTES {
            return Err(RegistrationError::FileTooLarge {
                name,
                size_bytes,
                limit: MAX_CERTIFICATE_BYTES,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            size_bytes,
            content_type: content_type.to_string(),
            attached_at: Utc::now(),
            path: None,
        })
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Re-runs the picker checks, for handles that came from a draft file.
    pub fn check(&self) -> Result<(), RegistrationError> {
        if certificate_content_type(&self.name).is_none() {
            return Err(RegistrationError::UnsupportedFileType(self.name.clone()));
        }
        if self.size_bytes > MAX_CERTIFICATE_BYTES {
            return Err(RegistrationError::FileTooLarge {
                name: self.name.clone(),
                size_bytes: self.size_bytes,
                limit: MAX_CERTIFICATE_BYTES,
            });
        }
        Ok(())
    }
}

pub fn certificate_content_type(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ACCEPTED_CERTIFICATE_TYPES
        .iter()
        .find(|(accepted, _)| *accepted == ext)
        .map(|(_, content_type)| *content_type)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub company_name: String,
    pub industry: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub website: String,
    pub employee_count: String,
    pub description: String,
    pub licenses: BTreeMap<String, String>,
    pub uploaded_files: BTreeMap<String, UploadedFile>,
}

impl FormData {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::CompanyName => &self.company_name,
            ProfileField::Address => &self.address,
            ProfileField::City => &self.city,
            ProfileField::Country => &self.country,
            ProfileField::Phone => &self.phone,
            ProfileField::Website => &self.website,
            ProfileField::EmployeeCount => &self.employee_count,
            ProfileField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::CompanyName => &mut self.company_name,
            ProfileField::Address => &mut self.address,
            ProfileField::City => &mut self.city,
            ProfileField::Country => &mut self.country,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Website => &mut self.website,
            ProfileField::EmployeeCount => &mut self.employee_count,
            ProfileField::Description => &mut self.description,
        }
    }

    pub fn license(&self, key: &str) -> &str {
        self.licenses.get(key).map(String::as_str).unwrap_or("")
    }

    /// Present and non-blank after trimming.
    pub fn has_license_value(&self, key: &str) -> bool {
        !self.license(key).trim().is_empty()
    }

    pub fn has_file(&self, key: &str) -> bool {
        self.uploaded_files.contains_key(key)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationState {
    // Current wizard position
    pub current_step: RegistrationStep,

    // Everything the user has entered so far
    pub form: FormData,

    // Wizard control
    pub can_proceed: bool,
    pub can_go_back: bool,

    // Validation and errors
    pub validation_errors: Vec<String>,
    pub warnings: Vec<String>,

    pub progress_percentage: u8,

    // Set once the registration is submitted
    pub navigation: Option<Route>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            current_step: RegistrationStep::default(),
            form: FormData::default(),
            can_proceed: false,
            can_go_back: false,
            validation_errors: Vec::new(),
            warnings: Vec::new(),
            progress_percentage: 0,
            navigation: None,
        }
    }
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
        self.warnings.clear();
    }

    pub fn add_error(&mut self, error: String) {
        self.validation_errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn update_progress(&mut self) {
        self.progress_percentage = match self.current_step {
            RegistrationStep::IndustrySelection => 25,
            RegistrationStep::LicenseInformation => 50,
            RegistrationStep::UploadCertificates => 75,
            RegistrationStep::ReviewAndSubmit => 100,
        };
    }

    pub fn step_status(&self, step: RegistrationStep) -> StepStatus {
        match step.cmp(&self.current_step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.navigation.is_some()
    }
}
