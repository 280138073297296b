use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    sysvars::rent::Rent,
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::ID;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

/// Euclid's algorithm; `gcd(0, 0) == 0`.
#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[inline]
pub fn checked_pow10(exp: u8) -> Result<u64, ProgramError> {
    10u64
        .checked_pow(exp as u32)
        .ok_or(ProgramError::ArithmeticOverflow)
}

#[inline]
pub fn checked_mul(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_mul(b).ok_or(ProgramError::ArithmeticOverflow)
}

/// Checks `account` is the canonical PDA for `seeds` and returns its bump.
pub fn check_pda(account: &AccountInfo, seeds: &[&[u8]]) -> Result<u8, ProgramError> {
    let (expected, bump) = find_program_address(seeds, &ID);
    if *account.key() != expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(bump)
}

/// Creates a rent-exempt account at a PDA, signing for it with `signer_seeds`.
///
/// PDAs can be funded by anyone before they are created, and `CreateAccount`
/// refuses an address that already holds lamports. In that case the rent
/// shortfall is topped up and the account is allocated and assigned instead.
pub fn create_pda_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    owner: &Pubkey,
    rent: &Rent,
    signer_seeds: &[Seed],
) -> ProgramResult {
    let required = rent.minimum_balance(space);
    let signers = [Signer::from(signer_seeds)];

    let current = account.lamports();
    if current == 0 {
        return CreateAccount {
            from: payer,
            to: account,
            lamports: required,
            space: space as u64,
            owner,
        }
        .invoke_signed(&signers);
    }

    let shortfall = required.saturating_sub(current);
    if shortfall > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: shortfall,
        }
        .invoke()?;
    }
    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(&signers)?;
    Assign { account, owner }.invoke_signed(&signers)
}
