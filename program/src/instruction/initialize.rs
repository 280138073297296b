use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::CreateAccount;
use pinocchio_token::{
    instructions::{InitializeAccount3, InitializeMint2},
    state::{Mint, TokenAccount},
};

use crate::helpers::*;
use crate::instruction::InitializeArgs;
use crate::state::ProgramState;

pub fn process_initialize(accounts: &[AccountInfo], args: InitializeArgs) -> ProgramResult {
    let [state_info, ido_mint_info, stable_pool_info, stable_mint_info, ido_authority_info, token_program_info, system_program_info, rent_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let now = Clock::get()?.unix_timestamp;
    args.ido_times.validate(now)?;

    if !ido_authority_info.is_signer() || !ido_mint_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if *token_program_info.key() != pinocchio_token::ID
        || *system_program_info.key() != pinocchio_system::ID
    {
        return Err(ProgramError::IncorrectProgramId);
    }
    if !state_info.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    let state_bump = check_pda(state_info, &[STATE_SEED])?;
    let pool_bump = check_pda(stable_pool_info, &[STABLE_POOL_SEED])?;

    let stable_decimals = {
        let stable_mint = Mint::from_account_info(stable_mint_info)?;
        if !stable_mint.is_initialized() {
            return Err(ProgramError::UninitializedAccount);
        }
        stable_mint.decimals()
    };
    let token_price = args
        .token_price
        .normalize(IDO_TOKEN_DECIMALS, stable_decimals)?;

    if *rent_info.key() != RENT_SYSVAR_ID {
        return Err(ProgramError::InvalidArgument);
    }
    let rent = Rent::from_account_info(rent_info)?;

    // state PDA, owned by this program
    let state_bump_seed = [state_bump];
    let state_seeds = [Seed::from(STATE_SEED), Seed::from(&state_bump_seed)];
    create_pda_account(
        ido_authority_info,
        state_info,
        ProgramState::LEN,
        &crate::ID,
        &rent,
        &state_seeds,
    )?;

    // IDO mint; the state PDA is the mint authority
    CreateAccount {
        from: ido_authority_info,
        to: ido_mint_info,
        lamports: rent.minimum_balance(Mint::LEN),
        space: Mint::LEN as u64,
        owner: &pinocchio_token::ID,
    }
    .invoke()?;
    InitializeMint2 {
        mint: ido_mint_info,
        decimals: IDO_TOKEN_DECIMALS,
        mint_authority: state_info.key(),
        freeze_authority: None,
    }
    .invoke()?;

    // stable pool token account, owned by the state PDA
    let pool_bump_seed = [pool_bump];
    let pool_seeds = [Seed::from(STABLE_POOL_SEED), Seed::from(&pool_bump_seed)];
    create_pda_account(
        ido_authority_info,
        stable_pool_info,
        TokenAccount::LEN,
        &pinocchio_token::ID,
        &rent,
        &pool_seeds,
    )?;
    InitializeAccount3 {
        account: stable_pool_info,
        mint: stable_mint_info,
        owner: state_info.key(),
    }
    .invoke()?;

    let state = ProgramState::new(
        *ido_authority_info.key(),
        *ido_mint_info.key(),
        *stable_mint_info.key(),
        *stable_pool_info.key(),
        args.init_ido_tokens_amount,
        token_price,
        args.ido_times,
        state_bump,
        pool_bump,
    );
    let mut data = state_info.try_borrow_mut_data()?;
    state.write_to(&mut data)?;

    log!(
        "IDO initialized: {} tokens, price {}/{}",
        args.init_ido_tokens_amount,
        token_price.numerator,
        token_price.denominator
    );
    log!(
        "IDO window: {} -> {}, round length {}",
        args.ido_times.start_at,
        args.ido_times.end_at,
        args.ido_times.default_round_length
    );

    Ok(())
}
