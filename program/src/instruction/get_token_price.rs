use pinocchio::{account_info::AccountInfo, ProgramResult};

use crate::helpers::next_account_info;
use crate::state::ProgramState;

/// Returns the current price as return data: numerator then denominator,
/// both u64 little-endian.
pub fn process_get_token_price(accounts: &[AccountInfo]) -> ProgramResult {
    let mut iter = accounts.iter();
    let state_info = next_account_info(&mut iter)?;
    ProgramState::check_account_info(state_info, false)?;

    let data = state_info.try_borrow_data()?;
    let price = ProgramState::from_bytes(&data)?.token_price()?;
    pinocchio::program::set_return_data(&price.to_bytes());

    Ok(())
}
