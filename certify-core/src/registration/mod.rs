pub mod actions;
pub mod manager;
pub mod state;
pub mod validation;


pub use actions::RegistrationAction;
pub use manager::RegistrationManager;
pub use state::{
    certificate_content_type, FormData, ProfileField, RegistrationState, RegistrationStep,
    StepStatus, UploadedFile, ACCEPTED_CERTIFICATE_TYPES, MAX_CERTIFICATE_BYTES,
};
pub use validation::{missing_for_step, review_rows, validate_step, ReviewRow};
