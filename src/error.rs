use thiserror::Error;

/// Errors raised while reading driver input (arguments and scripts)
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Wave schedule not of the form `TURN:COUNT`
    #[error("Invalid wave: {0}")]
    InvalidWave(String),
    /// Unrecognized script line
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Rejected game commands; expected during normal play
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("not enough food")]
    NotEnoughFood,
    #[error("tunnel already occupied")]
    TunnelOccupied,
    #[error("illegal location")]
    IllegalLocation,
    #[error("unknown ant type")]
    UnknownAntType(String),
    #[error("no such boost")]
    NoSuchBoost(String),
    #[error("no Ant at location")]
    NoAntAtLocation,
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
