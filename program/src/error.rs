use pinocchio::program_error::ProgramError;
use pinocchio_log::log;

/// Custom program errors. Codes start at 6000 so clients built against the
/// Anchor version of the program decode them unchanged.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdoError {
    IdoFuture = 6000,
    IdoShort,
    SeqTimes,
    IdoNotStarted,
    IdoEnded,
    RoundNotOver,
    InvalidTokenPrice,
}

impl IdoError {
    pub const fn message(&self) -> &'static str {
        match self {
            IdoError::IdoFuture => "IDO must start in the future",
            IdoError::IdoShort => "IDO length must be longer than 1 default round length",
            IdoError::SeqTimes => "IDO times are non-sequential",
            IdoError::IdoNotStarted => "IDO has not started",
            IdoError::IdoEnded => "IDO has ended",
            IdoError::RoundNotOver => "Current round has not finished yet",
            IdoError::InvalidTokenPrice => "Token price must be a non-zero fraction",
        }
    }

    /// Logs the error message and returns the matching `ProgramError`.
    pub fn fail(self) -> ProgramError {
        log!("Error: {}", self.message());
        to_program_error(self)
    }
}

impl TryFrom<u32> for IdoError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            6000 => Ok(IdoError::IdoFuture),
            6001 => Ok(IdoError::IdoShort),
            6002 => Ok(IdoError::SeqTimes),
            6003 => Ok(IdoError::IdoNotStarted),
            6004 => Ok(IdoError::IdoEnded),
            6005 => Ok(IdoError::RoundNotOver),
            6006 => Ok(IdoError::InvalidTokenPrice),
            _ => Err(ProgramError::InvalidArgument),
        }
    }
}

impl From<IdoError> for ProgramError {
    fn from(err: IdoError) -> Self {
        ProgramError::Custom(err as u32)
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: IdoError) -> ProgramError {
    err.into()
}
