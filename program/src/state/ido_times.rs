use pinocchio::program_error::ProgramError;

use crate::error::IdoError;

/// Offering timetable, in unix seconds.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IdoTimes {
    pub start_at: i64,
    pub end_at: i64,
    pub default_round_length: i64,
}

impl IdoTimes {
    pub const LEN: usize = 24;

    pub const fn new(start_at: i64, end_at: i64, default_round_length: i64) -> Self {
        Self {
            start_at,
            end_at,
            default_round_length,
        }
    }

    /// Asserts the IDO starts after `now` and spans at least one round.
    pub fn validate(&self, now: i64) -> Result<(), ProgramError> {
        if self.start_at <= now {
            return Err(IdoError::IdoFuture.fail());
        }
        if self.end_at < self.start_at {
            return Err(IdoError::SeqTimes.fail());
        }
        let length = self
            .end_at
            .checked_sub(self.start_at)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        if self.default_round_length <= 0 || length < self.default_round_length {
            return Err(IdoError::IdoShort.fail());
        }
        Ok(())
    }

    /// Unix time at which round number `rounds_started + 1` may open.
    pub fn round_boundary(&self, rounds_started: u64) -> Result<i64, ProgramError> {
        let rounds = i64::try_from(rounds_started).map_err(|_| ProgramError::ArithmeticOverflow)?;
        rounds
            .checked_mul(self.default_round_length)
            .and_then(|offset| self.start_at.checked_add(offset))
            .ok_or(ProgramError::ArithmeticOverflow)
    }

    pub const fn has_ended(&self, now: i64) -> bool {
        now >= self.end_at
    }

    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let read = |at: usize| {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&data[at..at + 8]);
            i64::from_le_bytes(buf)
        };
        Ok(Self {
            start_at: read(0),
            end_at: read(8),
            default_round_length: read(16),
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        out[0..8].copy_from_slice(&self.start_at.to_le_bytes());
        out[8..16].copy_from_slice(&self.end_at.to_le_bytes());
        out[16..24].copy_from_slice(&self.default_round_length.to_le_bytes());
        out
    }
}
