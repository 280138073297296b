use solana_program_test::{BanksClientError, ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

use ido::state::ProgramState;
use spl_token::solana_program::program_pack::Pack;

// Shared instruction builders + PDA helpers
pub mod ido_adapter;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(ido::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("ido.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("ido", &program_id());
    pt
}

/// Local cluster endpoint plus the payer that signs and funds transactions.
pub struct Provider {
    pub ctx: ProgramTestContext,
}

impl Provider {
    pub async fn env() -> Self {
        let ctx = program_test().start_with_context().await;
        Self { ctx }
    }

    pub fn payer(&self) -> &Keypair {
        &self.ctx.payer
    }

    /// Signs with the payer plus `signers` and submits. Returns the
    /// transaction signature.
    pub async fn send(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature, BanksClientError> {
        let mut all: Vec<&Keypair> = vec![&self.ctx.payer];
        all.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.ctx.payer.pubkey()),
            &all[..],
            self.ctx.last_blockhash,
        );
        let signature = tx.signatures[0];
        self.ctx.banks_client.process_transaction(tx).await?;
        Ok(signature)
    }

    pub async fn refresh_blockhash(&mut self) {
        self.ctx.last_blockhash = self
            .ctx
            .banks_client
            .get_new_latest_blockhash(&self.ctx.last_blockhash)
            .await
            .unwrap();
    }

    pub async fn clock(&mut self) -> Clock {
        self.ctx.banks_client.get_sysvar::<Clock>().await.unwrap()
    }

    pub async fn set_unix_timestamp(&mut self, unix_timestamp: i64) {
        let mut clock = self.clock().await;
        clock.unix_timestamp = unix_timestamp;
        self.ctx.set_sysvar(&clock);
    }

    /// Creates an initialized SPL mint with the payer as mint authority.
    pub async fn create_mint(&mut self, decimals: u8) -> Pubkey {
        let mint = Keypair::new();
        let rent = self.ctx.banks_client.get_rent().await.unwrap();
        let payer = self.ctx.payer.pubkey();
        let ixs = [
            system_instruction::create_account(
                &payer,
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint2(
                &spl_token::id(),
                &mint.pubkey(),
                &payer,
                None,
                decimals,
            )
            .unwrap(),
        ];
        self.send(&ixs, &[&mint]).await.unwrap();
        mint.pubkey()
    }

    pub async fn state(&mut self) -> ProgramState {
        let acct = self
            .ctx
            .banks_client
            .get_account(ido_adapter::state_address())
            .await
            .unwrap()
            .expect("state account must exist");
        assert_eq!(acct.owner, program_id());
        *ProgramState::from_bytes(&acct.data).unwrap()
    }

    pub async fn mint(&mut self, address: Pubkey) -> spl_token::state::Mint {
        let acct = self.ctx.banks_client.get_account(address).await.unwrap().unwrap();
        spl_token::state::Mint::unpack(&acct.data).unwrap()
    }

    pub async fn token_account(&mut self, address: Pubkey) -> spl_token::state::Account {
        let acct = self.ctx.banks_client.get_account(address).await.unwrap().unwrap();
        spl_token::state::Account::unpack(&acct.data).unwrap()
    }
}

fn instruction_error(err: BanksClientError) -> InstructionError {
    let te = match err {
        BanksClientError::TransactionError(te) => te,
        BanksClientError::SimulationError { err, .. } => err,
        other => panic!("unexpected banks client error: {:?}", other),
    };
    match te {
        TransactionError::InstructionError(_, ie) => ie,
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Asserts the transaction failed with `expected` in an instruction.
pub fn assert_instruction_error(err: BanksClientError, expected: InstructionError) {
    assert_eq!(instruction_error(err), expected);
}

pub fn assert_ido_error(err: BanksClientError, expected: ido::error::IdoError) {
    match instruction_error(err) {
        InstructionError::Custom(code) => {
            assert_eq!(ido::error::IdoError::try_from(code).unwrap(), expected)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
