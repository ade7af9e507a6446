pub mod catalog;
pub mod registration;
pub mod routes;
pub mod util;

pub use catalog::{load_from_path, load_or_builtin, LicenseCatalog, LicenseRequirement};
pub use registration::{FormData, RegistrationAction, RegistrationManager, RegistrationStep};
pub use routes::Route;
pub use util::{CatalogError, RegistrationError, RouteError};
