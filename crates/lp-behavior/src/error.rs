use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("`{present}` is present but `{missing}` is missing")]
    MissingPartner {
        present: &'static str,
        missing: &'static str,
    },
    #[error("host error: {0}")]
    Host(String),
}
