use super::state::{FormData, RegistrationStep};
use crate::catalog::{LicenseCatalog, LicenseRequirement};

/// Gate for leaving `step`. An industry the catalog does not know has no
/// required licenses, so steps 2 and 3 pass trivially for it.
pub fn validate_step(step: RegistrationStep, form: &FormData, catalog: &LicenseCatalog) -> bool {
    match step {
        RegistrationStep::IndustrySelection => !form.industry.is_empty(),
        RegistrationStep::LicenseInformation | RegistrationStep::UploadCertificates => {
            missing_for_step(step, form, catalog).is_empty()
        }
        RegistrationStep::ReviewAndSubmit => true,
    }
}

/// Required licenses that still block `step`.
pub fn missing_for_step<'a>(
    step: RegistrationStep,
    form: &FormData,
    catalog: &'a LicenseCatalog,
) -> Vec<&'a LicenseRequirement> {
    match step {
        RegistrationStep::LicenseInformation => catalog
            .required_for(&form.industry)
            .filter(|l| !form.has_license_value(&l.key))
            .collect(),
        RegistrationStep::UploadCertificates => catalog
            .required_for(&form.industry)
            .filter(|l| !form.has_file(&l.key))
            .collect(),
        RegistrationStep::IndustrySelection | RegistrationStep::ReviewAndSubmit => Vec::new(),
    }
}

/// One line of the review summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub value: Option<String>,
    pub file_name: Option<String>,
}

impl ReviewRow {
    pub fn value_display(&self) -> &str {
        self.value.as_deref().unwrap_or("Not provided")
    }

    pub fn upload_status(&self) -> &'static str {
        if self.file_name.is_some() {
            "Uploaded"
        } else {
            "Missing"
        }
    }
}

pub fn review_rows(form: &FormData, catalog: &LicenseCatalog) -> Vec<ReviewRow> {
    catalog
        .licenses_for(&form.industry)
        .iter()
        .map(|license| ReviewRow {
            key: license.key.clone(),
            label: license.label.clone(),
            required: license.required,
            value: form
                .has_license_value(&license.key)
                .then(|| form.license(&license.key).to_string()),
            file_name: form
                .uploaded_files
                .get(&license.key)
                .map(|f| f.name.clone()),
        })
        .collect()
}
