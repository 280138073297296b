use pinocchio::program_error::ProgramError;

/// Phase of the offering. Sell and trade rounds alternate until the end time.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Round {
    #[default]
    NotStarted = 0,
    SellRound = 1,
    TradeRound = 2,
    Ended = 3,
}

impl Round {
    pub const fn next(self) -> Self {
        match self {
            Round::NotStarted => Round::SellRound,
            Round::SellRound => Round::TradeRound,
            Round::TradeRound => Round::SellRound,
            Round::Ended => Round::Ended,
        }
    }

    pub const fn end(self) -> Self {
        Round::Ended
    }

    pub const fn is_ended(&self) -> bool {
        matches!(self, Round::Ended)
    }
}

impl TryFrom<u8> for Round {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Round::NotStarted),
            1 => Ok(Round::SellRound),
            2 => Ok(Round::TradeRound),
            3 => Ok(Round::Ended),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}
