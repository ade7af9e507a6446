use super::*;
use crate::util::CatalogError;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../metadata/industry_licenses.yaml");

impl LicenseCatalog {
    /// The catalog shipped in `metadata/industry_licenses.yaml`.
    pub fn builtin() -> Self {
        Self::from_yaml_str(BUILTIN_CATALOG).expect("embedded industry catalog is valid")
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: LicenseCatalog = serde_yaml::from_str(yaml)?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for industry in &self.industries {
            if industry.name.trim().is_empty() {
                return Err(CatalogError::EmptyIndustryName);
            }
            if !seen.insert(industry.name.as_str()) {
                return Err(CatalogError::DuplicateIndustry(industry.name.clone()));
            }

            let mut keys = HashSet::new();
            for license in &industry.licenses {
                if license.key.trim().is_empty() || license.label.trim().is_empty() {
                    return Err(CatalogError::IncompleteLicense(industry.name.clone()));
                }
                if !keys.insert(license.key.as_str()) {
                    return Err(CatalogError::DuplicateLicense {
                        industry: industry.name.clone(),
                        key: license.key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

pub fn load_from_path(path: &Path) -> Result<LicenseCatalog, CatalogError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = LicenseCatalog::from_yaml_str(&yaml)?;
    log::info!(
        "Loaded license catalog from {} ({} industries)",
        path.display(),
        catalog.industries.len()
    );
    Ok(catalog)
}

/// Uses `path` when given, the built-in catalog otherwise.
pub fn load_or_builtin(path: Option<&Path>) -> Result<LicenseCatalog, CatalogError> {
    match path {
        Some(p) => load_from_path(p),
        None => Ok(LicenseCatalog::builtin()),
    }
}
