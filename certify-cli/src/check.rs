use certify_core::registration::{missing_for_step, validate_step};
use certify_core::{FormData, LicenseCatalog, RegistrationStep};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepReport {
    pub step: u8,
    pub title: &'static str,
    pub passed: bool,
    pub missing: Vec<String>,
}

/// What a saved draft would need before the wizard lets it through.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckReport {
    pub industry: String,
    pub known_industry: bool,
    pub steps: Vec<StepReport>,
    /// License or file keys the selected industry does not list.
    pub stale_keys: Vec<String>,
    pub file_problems: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.known_industry && self.steps.iter().all(|s| s.passed) && self.file_problems.is_empty()
    }
}

/// Runs the gates of every step up to and including `through`.
pub fn check_draft(form: &FormData, catalog: &LicenseCatalog, through: RegistrationStep) -> CheckReport {
    let steps = RegistrationStep::ALL
        .iter()
        .copied()
        .take_while(|s| *s <= through)
        .map(|step| StepReport {
            step: step.number(),
            title: step.title(),
            passed: validate_step(step, form, catalog),
            missing: missing_for_step(step, form, catalog)
                .into_iter()
                .map(|l| l.label.clone())
                .collect(),
        })
        .collect();

    let mut stale_keys: Vec<String> = form
        .licenses
        .keys()
        .chain(form.uploaded_files.keys())
        .filter(|key| !catalog.has_license(&form.industry, key))
        .cloned()
        .collect();
    stale_keys.sort();
    stale_keys.dedup();

    let file_problems = form
        .uploaded_files
        .values()
        .filter_map(|file| file.check().err())
        .map(|e| e.to_string())
        .collect();

    CheckReport {
        industry: form.industry.clone(),
        known_industry: form.industry.is_empty() || catalog.contains(&form.industry),
        steps,
        stale_keys,
        file_problems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(json: &str) -> FormData {
        FormData::from_json(json).unwrap()
    }

    #[test]
    fn test_complete_license_draft_passes_through_step_two() {
        let form = draft(
            r#"{
                "industry": "Home & Garden",
                "licenses": { "factoryLicense": "FL-1", "gstin": "29ABCDE1234F1Z5" }
            }"#,
        );
        let report = check_draft(&form, &LicenseCatalog::builtin(), RegistrationStep::LicenseInformation);

        assert_eq!(report.steps.len(), 2);
        assert!(report.passed());
    }

    #[test]
    fn test_missing_certificates_are_listed_by_label() {
        let form = draft(
            r#"{
                "industry": "Home & Garden",
                "licenses": { "factoryLicense": "FL-1", "gstin": "29ABCDE1234F1Z5" }
            }"#,
        );
        let report = check_draft(&form, &LicenseCatalog::builtin(), RegistrationStep::ReviewAndSubmit);

        assert!(!report.passed());
        let uploads = &report.steps[2];
        assert_eq!(uploads.title, "Upload Certificates");
        assert_eq!(uploads.missing, vec!["Factory License No.", "GSTIN"]);
        assert!(report.steps[3].passed);
    }

    #[test]
    fn test_stale_keys_and_unknown_industry_are_reported() {
        let form = draft(r#"{ "industry": "Automotive", "licenses": { "fssai": "1", "gstin": "2" } }"#);
        let report = check_draft(&form, &LicenseCatalog::builtin(), RegistrationStep::IndustrySelection);
        assert_eq!(report.stale_keys, vec!["fssai"]);
        assert!(report.passed());

        let form = draft(r#"{ "industry": "Aerospace" }"#);
        let report = check_draft(&form, &LicenseCatalog::builtin(), RegistrationStep::IndustrySelection);
        assert!(!report.known_industry);
        assert!(!report.passed());
    }

    #[test]
    fn test_empty_draft_fails_industry_gate() {
        let report = check_draft(
            &FormData::default(),
            &LicenseCatalog::builtin(),
            RegistrationStep::IndustrySelection,
        );
        assert!(!report.steps[0].passed);
        assert!(!report.passed());
    }
}
