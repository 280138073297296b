use ido::{
    helpers::{STABLE_POOL_SEED, STATE_SEED},
    instruction::{IdoInstruction, InitializeArgs},
    state::{IdoTimes, TokenPrice},
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program, sysvar,
};

use super::program_id;

pub fn state_address() -> Pubkey {
    Pubkey::find_program_address(&[STATE_SEED], &program_id()).0
}

pub fn stable_pool_address() -> Pubkey {
    Pubkey::find_program_address(&[STABLE_POOL_SEED], &program_id()).0
}

pub fn initialize_args(amount: u64, ido_times: IdoTimes, token_price: TokenPrice) -> InitializeArgs {
    InitializeArgs {
        init_ido_tokens_amount: amount,
        ido_times,
        token_price,
    }
}

pub mod ixn {
    use super::*;

    pub fn initialize(
        ido_authority: &Pubkey,
        ido_mint: &Pubkey,
        stable_mint: &Pubkey,
        args: &InitializeArgs,
    ) -> Instruction {
        let mut data = vec![IdoInstruction::Initialize as u8];
        data.extend_from_slice(&bincode::serialize(args).unwrap());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(state_address(), false),
                AccountMeta::new(*ido_mint, true),
                AccountMeta::new(stable_pool_address(), false),
                AccountMeta::new_readonly(*stable_mint, false),
                AccountMeta::new(*ido_authority, true),
                AccountMeta::new_readonly(spl_token::id(), false),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(sysvar::rent::id(), false),
            ],
            data,
        }
    }

    /// `nonce` is an ignored trailing account so repeated cranks in the same
    /// blockhash produce distinct transactions.
    pub fn advance_round(nonce: &Pubkey) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(state_address(), false),
                AccountMeta::new_readonly(*nonce, false),
            ],
            data: vec![IdoInstruction::AdvanceRound as u8],
        }
    }

    pub fn get_token_price() -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![AccountMeta::new_readonly(state_address(), false)],
            data: vec![IdoInstruction::GetTokenPrice as u8],
        }
    }
}
