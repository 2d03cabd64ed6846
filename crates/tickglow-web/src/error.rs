use thiserror::Error;

/// Process-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] tickglow_core::ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
