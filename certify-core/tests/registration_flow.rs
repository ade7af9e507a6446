use certify_core::registration::{validate_step, UploadedFile};
use certify_core::{
    FormData, LicenseCatalog, RegistrationAction, RegistrationManager, RegistrationStep, Route,
};
use std::sync::Arc;

#[cfg(test)]
mod step_gate_tests {
    use super::*;

    fn form_for(industry: &str) -> FormData {
        FormData {
            industry: industry.to_string(),
            ..FormData::default()
        }
    }

    #[test]
    fn test_license_step_requires_every_required_key() {
        let catalog = LicenseCatalog::builtin();

        for industry in catalog.industries() {
            let required: Vec<&str> = catalog.required_for(industry).map(|l| l.key.as_str()).collect();
            let mut form = form_for(industry);

            assert!(
                !validate_step(RegistrationStep::LicenseInformation, &form, &catalog),
                "{} should not validate with no licenses",
                industry
            );

            // Filling all but one required key is still not enough
            for (i, key) in required.iter().enumerate() {
                form.licenses.insert(key.to_string(), format!("NO-{i}"));
                let complete = i + 1 == required.len();
                assert_eq!(
                    validate_step(RegistrationStep::LicenseInformation, &form, &catalog),
                    complete,
                    "{} after filling {}",
                    industry,
                    key
                );
            }

            // Whitespace counts as blank
            form.licenses.insert(required[0].to_string(), " \t ".to_string());
            assert!(!validate_step(RegistrationStep::LicenseInformation, &form, &catalog));
        }
    }

    #[test]
    fn test_upload_step_requires_every_required_file() {
        let catalog = LicenseCatalog::builtin();

        for industry in catalog.industries() {
            let required: Vec<&str> = catalog.required_for(industry).map(|l| l.key.as_str()).collect();
            let mut form = form_for(industry);

            for (i, key) in required.iter().enumerate() {
                assert!(!validate_step(RegistrationStep::UploadCertificates, &form, &catalog));
                form.uploaded_files.insert(
                    key.to_string(),
                    UploadedFile::new(format!("{key}-{i}.pdf"), 512).unwrap(),
                );
            }
            assert!(
                validate_step(RegistrationStep::UploadCertificates, &form, &catalog),
                "{} with every required certificate",
                industry
            );
        }
    }

    #[test]
    fn test_industry_and_review_gates() {
        let catalog = LicenseCatalog::builtin();

        assert!(!validate_step(RegistrationStep::IndustrySelection, &FormData::default(), &catalog));
        assert!(validate_step(RegistrationStep::IndustrySelection, &form_for("Automotive"), &catalog));
        assert!(validate_step(RegistrationStep::ReviewAndSubmit, &FormData::default(), &catalog));
    }
}

#[cfg(test)]
mod journey_tests {
    use super::*;

    #[test]
    fn test_full_registration_journey() {
        let catalog = Arc::new(LicenseCatalog::builtin());
        let mut manager = RegistrationManager::new(catalog.clone());

        manager.apply(RegistrationAction::SelectIndustry {
            industry: "Healthcare & Pharmaceuticals".to_string(),
        });
        manager.apply(RegistrationAction::AdvanceStep);

        for license in catalog.licenses_for("Healthcare & Pharmaceuticals") {
            manager.apply(RegistrationAction::SetLicense {
                key: license.key.clone(),
                value: format!("{}-7781", license.key.to_uppercase()),
            });
        }
        manager.apply(RegistrationAction::AdvanceStep);
        assert_eq!(manager.state().current_step, RegistrationStep::UploadCertificates);

        for license in catalog.licenses_for("Healthcare & Pharmaceuticals") {
            manager.apply(RegistrationAction::AttachFile {
                key: license.key.clone(),
                file: UploadedFile::new(format!("{}.png", license.key), 90_000).unwrap(),
            });
        }
        manager.apply(RegistrationAction::AdvanceStep);
        assert_eq!(manager.state().current_step, RegistrationStep::ReviewAndSubmit);

        let rows = manager.review_rows();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.upload_status() == "Uploaded"));
        assert_eq!(rows[0].value_display(), "DRUGLICENSE-7781");

        manager.apply(RegistrationAction::Submit);
        assert_eq!(manager.take_navigation(), Some(Route::ManufacturerDashboard));

        // A fresh visit to the page starts from nothing
        let revisit = RegistrationManager::new(catalog);
        assert_eq!(revisit.state().form, FormData::default());
        assert_eq!(revisit.state().current_step, RegistrationStep::IndustrySelection);
    }

    #[test]
    fn test_review_shows_not_provided_for_optional_gaps() {
        let catalog = Arc::new(LicenseCatalog::builtin());
        let mut manager = RegistrationManager::new(catalog);

        manager.apply(RegistrationAction::SelectIndustry {
            industry: "Sports & Recreation".to_string(),
        });
        let rows = manager.review_rows();

        let bis = rows.iter().find(|r| r.key == "bisNo").unwrap();
        assert!(!bis.required);
        assert_eq!(bis.value_display(), "Not provided");
        assert_eq!(bis.upload_status(), "Missing");
    }

    #[test]
    fn test_review_treats_whitespace_value_as_not_provided() {
        let catalog = Arc::new(LicenseCatalog::builtin());
        let mut manager = RegistrationManager::new(catalog);

        manager.apply(RegistrationAction::SelectIndustry {
            industry: "Sports & Recreation".to_string(),
        });
        manager.apply(RegistrationAction::SetLicense {
            key: "bisNo".to_string(),
            value: "   ".to_string(),
        });
        manager.apply(RegistrationAction::SetLicense {
            key: "gstin".to_string(),
            value: " 29ABCDE1234F1Z5 ".to_string(),
        });
        let rows = manager.review_rows();

        let bis = rows.iter().find(|r| r.key == "bisNo").unwrap();
        assert_eq!(bis.value_display(), "Not provided");
        let gstin = rows.iter().find(|r| r.key == "gstin").unwrap();
        assert_eq!(gstin.value_display(), " 29ABCDE1234F1Z5 ");
    }
}
