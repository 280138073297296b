use pinocchio::program_error::ProgramError;

use crate::error::IdoError;
use crate::helpers::{checked_mul, checked_pow10, gcd, PRICE_MULTIPLIER};

/// Price of one IDO token in stable tokens, as a fraction. After
/// `normalize` it is stable base units per IDO base unit.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenPrice {
    pub numerator: u64,
    pub denominator: u64,
}

impl TokenPrice {
    pub const LEN: usize = 16;

    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Lowest-terms form. Both parts must be non-zero.
    pub fn reduced(numerator: u64, denominator: u64) -> Result<Self, ProgramError> {
        if numerator == 0 || denominator == 0 {
            return Err(IdoError::InvalidTokenPrice.fail());
        }
        let d = gcd(numerator, denominator);
        Ok(Self {
            numerator: numerator / d,
            denominator: denominator / d,
        })
    }

    /// Rescales a price quoted in whole tokens to base units of both mints.
    pub fn normalize(
        self,
        ido_decimals: u8,
        stable_decimals: u8,
    ) -> Result<Self, ProgramError> {
        let numerator = checked_mul(self.numerator, checked_pow10(stable_decimals)?)?;
        let denominator = checked_mul(self.denominator, checked_pow10(ido_decimals)?)?;
        Self::reduced(numerator, denominator)
    }

    /// Price for the next sell round.
    pub fn next_round_price(self) -> Result<Self, ProgramError> {
        let numerator = checked_mul(self.numerator, PRICE_MULTIPLIER.numerator)?;
        let denominator = checked_mul(self.denominator, PRICE_MULTIPLIER.denominator)?;
        Self::reduced(numerator, denominator)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let mut numerator = [0u8; 8];
        let mut denominator = [0u8; 8];
        numerator.copy_from_slice(&data[0..8]);
        denominator.copy_from_slice(&data[8..16]);
        Ok(Self {
            numerator: u64::from_le_bytes(numerator),
            denominator: u64::from_le_bytes(denominator),
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        out[0..8].copy_from_slice(&self.numerator.to_le_bytes());
        out[8..16].copy_from_slice(&self.denominator.to_le_bytes());
        out
    }
}
