use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, IdoInstruction, InitializeArgs};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match IdoInstruction::try_from(disc)? {
        IdoInstruction::Initialize => {
            msg!("Instruction: Initialize");
            let args = InitializeArgs::parse(payload)?;
            instruction::process_initialize(accounts, args)
        }
        IdoInstruction::AdvanceRound => {
            msg!("Instruction: AdvanceRound");
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            instruction::process_advance_round(accounts)
        }
        IdoInstruction::GetTokenPrice => {
            msg!("Instruction: GetTokenPrice");
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            instruction::process_get_token_price(accounts)
        }
    }
}
