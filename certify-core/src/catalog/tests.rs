use super::*;
use crate::util::CatalogError;
use std::io::Write;

#[test]
fn test_builtin_catalog_has_eight_industries_in_order() {
    let catalog = LicenseCatalog::builtin();
    let names: Vec<&str> = catalog.industries().collect();

    assert_eq!(
        names,
        vec![
            "Apparel & Fashion",
            "Electronics & Technology",
            "Food & Beverage",
            "Automotive",
            "Cosmetics & Personal Care",
            "Home & Garden",
            "Sports & Recreation",
            "Healthcare & Pharmaceuticals",
        ]
    );
}

#[test]
fn test_required_licenses_skip_optional_entries() {
    let catalog = LicenseCatalog::builtin();

    let electronics: Vec<&str> = catalog
        .required_for("Electronics & Technology")
        .map(|l| l.key.as_str())
        .collect();
    assert_eq!(electronics, vec!["gstin", "bisCrs", "pollutionControl"]);
    assert_eq!(catalog.licenses_for("Electronics & Technology").len(), 4);

    let sports: Vec<&str> = catalog
        .required_for("Sports & Recreation")
        .map(|l| l.key.as_str())
        .collect();
    assert_eq!(sports, vec!["gstin", "factoryLicense"]);
}

#[test]
fn test_unknown_industry_has_no_licenses() {
    let catalog = LicenseCatalog::builtin();

    assert!(catalog.licenses_for("").is_empty());
    assert!(catalog.licenses_for("Aerospace").is_empty());
    assert_eq!(catalog.required_for("Aerospace").count(), 0);
    assert!(!catalog.contains("Aerospace"));
}

#[test]
fn test_labels_resolve_per_industry() {
    let catalog = LicenseCatalog::builtin();

    assert_eq!(
        catalog.label_for("Cosmetics & Personal Care", "cdscoLicense"),
        Some("Drug & Cosmetics License No.")
    );
    assert_eq!(catalog.label_for("Automotive", "fssai"), None);
    assert!(catalog.has_license("Automotive", "pollutionNoc"));
}

#[test]
fn test_duplicate_industry_is_rejected() {
    let yaml = r#"
industries:
  - name: Automotive
    licenses: []
  - name: Automotive
    licenses: []
"#;
    let err = LicenseCatalog::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateIndustry(name) if name == "Automotive"));
}

#[test]
fn test_duplicate_license_key_is_rejected() {
    let yaml = r#"
industries:
  - name: Toys
    licenses:
      - { key: gstin, label: GSTIN, required: true }
      - { key: gstin, label: GSTIN again }
"#;
    let err = LicenseCatalog::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateLicense { key, .. } if key == "gstin"));
}

#[test]
fn test_blank_label_is_rejected() {
    let yaml = r#"
industries:
  - name: Toys
    licenses:
      - { key: gstin, label: "  " }
"#;
    assert!(matches!(
        LicenseCatalog::from_yaml_str(yaml),
        Err(CatalogError::IncompleteLicense(_))
    ));
}

#[test]
fn test_load_from_path_reads_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "industries:\n  - name: Toys\n    licenses:\n      - {{ key: bisNo, label: BIS No., required: true }}"
    )
    .unwrap();

    let catalog = load_from_path(file.path()).unwrap();
    assert_eq!(catalog.industries().collect::<Vec<_>>(), vec!["Toys"]);
    assert!(catalog.licenses_for("Toys")[0].required);
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_from_path(std::path::Path::new("/nonexistent/catalog.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/catalog.yaml"));
}
