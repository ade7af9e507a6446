use serde::{Deserialize, Serialize};

/// A license a manufacturer must (or may) supply for its industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRequirement {
    pub key: String, // "gstin"
    pub label: String, // "GSTIN"
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub name: String,
    pub licenses: Vec<LicenseRequirement>,
}

/// Industry → ordered license requirements. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseCatalog {
    pub industries: Vec<Industry>,
}

impl Default for LicenseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LicenseCatalog {
    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.industries.iter().map(|i| i.name.as_str())
    }

    pub fn industry(&self, name: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.industry(name).is_some()
    }

    /// Empty for an unknown or empty industry name.
    pub fn licenses_for(&self, industry: &str) -> &[LicenseRequirement] {
        self.industry(industry)
            .map(|i| i.licenses.as_slice())
            .unwrap_or(&[])
    }

    pub fn required_for<'a>(
        &'a self,
        industry: &str,
    ) -> impl Iterator<Item = &'a LicenseRequirement> + 'a {
        self.licenses_for(industry).iter().filter(|l| l.required)
    }

    pub fn has_license(&self, industry: &str, key: &str) -> bool {
        self.licenses_for(industry).iter().any(|l| l.key == key)
    }

    pub fn label_for<'a>(&'a self, industry: &str, key: &str) -> Option<&'a str> {
        self.licenses_for(industry)
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.label.as_str())
    }
}
