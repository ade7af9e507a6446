use crate::util::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side routes. No guards, no data loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Landing,
    ManufacturerAuth,
    CompanyRegistration,
    ManufacturerDashboard,
    ProductSubmission,
    Verification { id: String },
    ProductView { hash: String },
    ProductComparison,
}

impl Default for Route {
    fn default() -> Self {
        Self::Landing
    }
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let not_found = || RouteError::NotFound(path.to_string());

        let trimmed = path.trim();
        if !trimmed.starts_with('/') {
            return Err(not_found());
        }
        let segments: Vec<&str> = trimmed
            .trim_end_matches('/')
            .split('/')
            .skip(1)
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["manufacturer", "auth"] => Ok(Route::ManufacturerAuth),
            ["manufacturer", "register"] => Ok(Route::CompanyRegistration),
            ["manufacturer", "dashboard"] => Ok(Route::ManufacturerDashboard),
            ["manufacturer", "submit-product"] => Ok(Route::ProductSubmission),
            ["manufacturer", "verification", id] if !id.is_empty() => Ok(Route::Verification {
                id: (*id).to_string(),
            }),
            ["product", hash] if !hash.is_empty() => Ok(Route::ProductView {
                hash: (*hash).to_string(),
            }),
            ["compare"] => Ok(Route::ProductComparison),
            _ => Err(not_found()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::ManufacturerAuth => "/manufacturer/auth".to_string(),
            Route::CompanyRegistration => "/manufacturer/register".to_string(),
            Route::ManufacturerDashboard => "/manufacturer/dashboard".to_string(),
            Route::ProductSubmission => "/manufacturer/submit-product".to_string(),
            Route::Verification { id } => format!("/manufacturer/verification/{id}"),
            Route::ProductView { hash } => format!("/product/{hash}"),
            Route::ProductComparison => "/compare".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::ManufacturerAuth => "Manufacturer Sign In",
            Route::CompanyRegistration => "Company Registration",
            Route::ManufacturerDashboard => "Dashboard",
            Route::ProductSubmission => "Submit Product",
            Route::Verification { .. } => "Verification",
            Route::ProductView { .. } => "Product",
            Route::ProductComparison => "Compare Products",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
