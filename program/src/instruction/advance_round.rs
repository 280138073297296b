use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::error::IdoError;
use crate::state::{ProgramState, Round};

pub fn process_advance_round(accounts: &[AccountInfo]) -> ProgramResult {
    let [state_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    ProgramState::check_account_info(state_info, true)?;

    let now = Clock::get()?.unix_timestamp;

    let mut data = state_info.try_borrow_mut_data()?;
    let state = ProgramState::from_bytes_mut(&mut data)?;
    advance_state(state, now)
}

/// Moves the round machine forward by at most one step at time `now`.
pub fn advance_state(state: &mut ProgramState, now: i64) -> ProgramResult {
    let round = state.current_round()?;
    if round.is_ended() {
        return Err(IdoError::IdoEnded.fail());
    }

    let times = state.ido_times()?;
    if times.has_ended(now) {
        state.close()?;
        log!("IDO ended after {} rounds", state.state_number());
        return Ok(());
    }

    if now < times.round_boundary(state.state_number())? {
        return Err(match round {
            Round::NotStarted => IdoError::IdoNotStarted,
            _ => IdoError::RoundNotOver,
        }
        .fail());
    }

    let next = round.next();
    state.open_round(next)?;

    // the first sell round keeps the initial price
    if next == Round::SellRound && state.state_number() > 1 {
        let price = state.token_price()?.next_round_price()?;
        state.set_token_price(price);
    }

    let price = state.token_price()?;
    log!(
        "Round {} opened ({}), price {}/{}",
        state.state_number(),
        next as u8,
        price.numerator,
        price.denominator
    );

    Ok(())
}
