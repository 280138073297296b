use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

use crate::state::{IdoTimes, TokenPrice};

pub mod advance_round;
pub mod get_token_price;
pub mod initialize;

pub use advance_round::*;
pub use get_token_price::*;
pub use initialize::*;

/// Instruction set. Data is a one-byte discriminator followed by the
/// instruction's little-endian payload.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum IdoInstruction {
    #[account(0, writable, name = "state", desc = "Global state PDA [\"state\"]")]
    #[account(1, writable, signer, name = "ido_mint", desc = "New mint for the offered token")]
    #[account(2, writable, name = "stable_pool", desc = "Stable token pool PDA [\"stable_pool\"]")]
    #[account(3, name = "stable_mint", desc = "Mint buyers pay with")]
    #[account(4, writable, signer, name = "ido_authority", desc = "Creator and rent payer")]
    #[account(5, name = "token_program", desc = "SPL token program")]
    #[account(6, name = "system_program", desc = "System program")]
    #[account(7, name = "rent", desc = "Rent sysvar")]
    Initialize,

    #[account(0, writable, name = "state", desc = "Global state PDA [\"state\"]")]
    AdvanceRound,

    #[account(0, name = "state", desc = "Global state PDA [\"state\"]")]
    GetTokenPrice,
}

impl TryFrom<&u8> for IdoInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(IdoInstruction::Initialize),
            1 => Ok(IdoInstruction::AdvanceRound),
            2 => Ok(IdoInstruction::GetTokenPrice),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Payload of `Initialize`.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    pub init_ido_tokens_amount: u64,
    pub ido_times: IdoTimes,
    pub token_price: TokenPrice,
}

impl InitializeArgs {
    pub const LEN: usize = 8 + IdoTimes::LEN + TokenPrice::LEN;

    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let mut amount = [0u8; 8];
        amount.copy_from_slice(&data[0..8]);
        Ok(Self {
            init_ido_tokens_amount: u64::from_le_bytes(amount),
            ido_times: IdoTimes::parse(&data[8..32])?,
            token_price: TokenPrice::parse(&data[32..48])?,
        })
    }
}
