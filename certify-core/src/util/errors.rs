use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("industry name must not be empty")]
    EmptyIndustryName,
    #[error("duplicate industry: {0}")]
    DuplicateIndustry(String),
    #[error("industry {industry} lists license {key} more than once")]
    DuplicateLicense { industry: String, key: String },
    #[error("industry {0} has a license with an empty key or label")]
    IncompleteLicense(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),
    #[error("license {key} is not listed for {industry}")]
    UnknownLicense { industry: String, key: String },
    #[error("{0}: only PDF, JPG and PNG certificates are accepted")]
    UnsupportedFileType(String),
    #[error("{name} is {size_bytes} bytes, the limit is {limit} bytes")]
    FileTooLarge {
        name: String,
        size_bytes: u64,
        limit: u64,
    },
    #[error("cannot advance: {0} is incomplete")]
    StepIncomplete(&'static str),
    #[error("registration can only be submitted from the review step")]
    NotAtReview,
}
