#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot get value from failed attempt: {cause}")]
    InvalidState {
        #[source]
        cause: anyhow::Error,
    },

    #[error("{cause}")]
    Wrapped {
        #[source]
        cause: anyhow::Error,
    },

    #[error("{message}")]
    WrappedWithMessage {
        message: String,
        #[source]
        cause: anyhow::Error,
    },

    #[error("{0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl Error {
    /// The failure captured by the attempt which raised this error, if any.
    pub fn captured_failure(&self) -> Option<&anyhow::Error> {
        match self {
            Self::InvalidState { cause }
            | Self::Wrapped { cause }
            | Self::WrappedWithMessage { cause, .. } => Some(cause),
            Self::SetLogger(_) => None,
        }
    }
}
