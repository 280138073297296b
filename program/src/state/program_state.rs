use core::mem::size_of;

use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::helpers::PROGRAM_STATE_DISCRIMINATOR;
use crate::state::{IdoTimes, Round, TokenPrice};

/// Global offering state, stored at the `"state"` PDA.
///
/// Every field is a byte array so the struct has alignment 1 and can be laid
/// directly over account data. Integers are little-endian.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct ProgramState {
    discriminator: [u8; 8],
    pub ido_authority: Pubkey,
    state_number: [u8; 8],
    current_round: u8,
    order_number: [u8; 8],
    pub ido_token: Pubkey,
    pub stable_token: Pubkey,
    pub stable_token_pool: Pubkey,
    ido_tokens_amount: [u8; 8],
    token_price: [u8; 16],
    ido_times: [u8; 24],
    pub bump: u8,
    pub pool_bump: u8,
}

const _: () = assert!(ProgramState::LEN == 203);

impl ProgramState {
    pub const LEN: usize = size_of::<ProgramState>();

    /// A freshly initialized state in `Round::NotStarted`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ido_authority: Pubkey,
        ido_token: Pubkey,
        stable_token: Pubkey,
        stable_token_pool: Pubkey,
        ido_tokens_amount: u64,
        token_price: TokenPrice,
        ido_times: IdoTimes,
        bump: u8,
        pool_bump: u8,
    ) -> Self {
        Self {
            discriminator: PROGRAM_STATE_DISCRIMINATOR,
            ido_authority,
            state_number: 0u64.to_le_bytes(),
            current_round: Round::NotStarted as u8,
            order_number: 0u64.to_le_bytes(),
            ido_token,
            stable_token,
            stable_token_pool,
            ido_tokens_amount: ido_tokens_amount.to_le_bytes(),
            token_price: token_price.to_bytes(),
            ido_times: ido_times.to_bytes(),
            bump,
            pool_bump,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN || data[..8] != PROGRAM_STATE_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked above and the struct has alignment 1.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn from_bytes_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN || data[..8] != PROGRAM_STATE_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked above and the struct has alignment 1.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// Checks the account can hold a state owned by this program.
    pub fn check_account_info(account: &AccountInfo, writable: bool) -> Result<(), ProgramError> {
        if !account.is_owned_by(&crate::ID) {
            return Err(ProgramError::InvalidAccountOwner);
        }
        if account.data_len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if writable && !account.is_writable() {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(())
    }

    /// Writes `self` to the start of `data`.
    pub fn write_to(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        // SAFETY: `Self` is plain bytes with alignment 1.
        let bytes = unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) };
        data[..Self::LEN].copy_from_slice(bytes);
        Ok(())
    }

    pub fn state_number(&self) -> u64 {
        u64::from_le_bytes(self.state_number)
    }

    pub fn current_round(&self) -> Result<Round, ProgramError> {
        Round::try_from(self.current_round)
    }

    pub fn order_number(&self) -> u64 {
        u64::from_le_bytes(self.order_number)
    }

    pub fn ido_tokens_amount(&self) -> u64 {
        u64::from_le_bytes(self.ido_tokens_amount)
    }

    pub fn token_price(&self) -> Result<TokenPrice, ProgramError> {
        TokenPrice::parse(&self.token_price)
    }

    pub fn ido_times(&self) -> Result<IdoTimes, ProgramError> {
        IdoTimes::parse(&self.ido_times)
    }

    pub fn set_token_price(&mut self, price: TokenPrice) {
        self.token_price = price.to_bytes();
    }

    /// Moves to `round`, counting it as a newly opened round and clearing
    /// the per-round order counter.
    pub fn open_round(&mut self, round: Round) -> Result<(), ProgramError> {
        let next = self
            .state_number()
            .checked_add(1)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        self.state_number = next.to_le_bytes();
        self.current_round = round as u8;
        self.order_number = 0u64.to_le_bytes();
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), ProgramError> {
        self.current_round = self.current_round()?.end() as u8;
        Ok(())
    }
}
