#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Every numeric suffix for `base` is taken
    #[error("no unused numeric suffix left for `{base}'")]
    Exhausted { base: String },
    /// `reserve` was called with a name that is already issued
    #[error("name `{name}' is already issued")]
    AlreadyIssued { name: String },
    #[error("cannot reserve an empty name")]
    EmptyReservation,
}

pub type Result<T> = std::result::Result<T, Error>;
