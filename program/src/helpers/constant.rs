use pinocchio::pubkey::Pubkey;

use crate::state::TokenPrice;

pub const STATE_SEED: &[u8] = b"state";
pub const STABLE_POOL_SEED: &[u8] = b"stable_pool";

/// Decimals of the mint created for the offered token.
pub const IDO_TOKEN_DECIMALS: u8 = 6;

/// Price growth applied each time a new sell round opens (3%).
pub const PRICE_MULTIPLIER: TokenPrice = TokenPrice {
    numerator: 103,
    denominator: 100,
};

/// First 8 bytes of sha256("account:ProgramState").
pub const PROGRAM_STATE_DISCRIMINATOR: [u8; 8] = [77, 209, 137, 229, 149, 67, 167, 230];

pub const RENT_SYSVAR_ID: Pubkey =
    pinocchio_pubkey::pubkey!("SysvarRent111111111111111111111111111111111");
