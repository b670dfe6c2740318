use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

use crate::{
    config::SdkConfig,
    conversion::{AssetPrecision, to_display},
    error::{Result, domain},
    instructions::{InstructionPlan, PoolInstructionBuilder, PoolOperation},
    params::{
        DepositParams, InitializePoolParams, InitializeProgramParams, PausePoolParams,
        SetSwapOwnerOnlyParams, SwapParams, WithdrawParams,
    },
    pda::PoolAddresses,
    pool_state::PoolRecord,
    summary::PoolSummary,
};

/// Entry point tying the codec, conversion engine, deriver and encoder to one deployment.
///
/// Holds only the immutable [`SdkConfig`], so a single instance can be shared
/// across threads and calls.
#[derive(Debug, Clone)]
pub struct FixedRatioSDK {
    config: SdkConfig,
    builder: PoolInstructionBuilder,
}

impl FixedRatioSDK {
    /// Create a new SDK instance
    pub fn new(config: SdkConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let builder = PoolInstructionBuilder::new(config.program_id, &config.pool_state_seed);
        Ok(Self { config, builder })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Decode a pool account fetched by the caller
    ///
    /// # Arguments
    /// * `address` - The pool state account address
    /// * `data` - Raw account data
    ///
    /// # Returns
    /// Returns the decoded `PoolRecord` with `address` attached
    pub fn decode_pool(&self, address: Pubkey, data: &[u8]) -> Result<PoolRecord> {
        let record = PoolRecord::decode(data)?.with_address(address);

        let derived = self.pool_addresses_for(&record)?;
        if !derived.matches_record(&record) {
            log::warn!(
                "Pool {} does not match the addresses derived for program {} with seed {:?}",
                address,
                self.config.program_id,
                String::from_utf8_lossy(&self.config.pool_state_seed)
            );
        }
        if record.flags.unknown_bits() != 0 {
            log::debug!(
                "Pool {} has unknown flag bits {:#010b}",
                address,
                record.flags.unknown_bits()
            );
        }

        Ok(record)
    }

    /// All derived accounts of the pool for a mint pair and base-unit ratio
    pub fn pool_addresses(
        &self,
        mint_a: Pubkey,
        mint_b: Pubkey,
        ratio_a: u64,
        ratio_b: u64,
    ) -> Result<PoolAddresses> {
        PoolAddresses::derive(
            &self.config.program_id,
            &self.config.pool_state_seed,
            mint_a,
            mint_b,
            ratio_a,
            ratio_b,
        )
    }

    pub fn pool_addresses_for(&self, record: &PoolRecord) -> Result<PoolAddresses> {
        PoolAddresses::for_record(&self.config.program_id, &self.config.pool_state_seed, record)
    }

    /// Precision of `mint`, falling back to the configured default when `decimals` is unknown
    pub fn precision(&self, mint: Pubkey, decimals: Option<u8>) -> Result<AssetPrecision> {
        match decimals {
            Some(decimals) => AssetPrecision::verified(mint, decimals),
            None => AssetPrecision::fallback(mint, self.config.fallback_decimals),
        }
    }

    /// Get a quote for a swap in display units
    ///
    /// # Arguments
    /// * `pool` - The decoded pool
    /// * `input` - Precision of the input mint
    /// * `output` - Precision of the output mint
    /// * `amount_in` - Display amount of the input token
    ///
    /// # Returns
    /// Returns the floored output amount in display units
    pub fn quote(
        &self,
        pool: &PoolRecord,
        input: &AssetPrecision,
        output: &AssetPrecision,
        amount_in: Decimal,
    ) -> Result<Decimal> {
        if pool.counterpart_mint(&input.mint) != Some(output.mint) {
            return Err(domain(format!(
                "{} -> {} is not a direction of pool {}",
                input.mint, output.mint, pool.address
            )));
        }

        let amount_in = input.to_basis_points(amount_in)?;
        let quote = pool.quote_swap(&input.mint, amount_in)?;
        to_display(quote.amount_out, output.decimals)
    }

    pub fn initialize_program_ix(&self, program_authority: Pubkey) -> Result<InstructionPlan> {
        self.builder
            .initialize_program(&InitializeProgramParams { program_authority })
    }

    /// Create an initialize pool instruction from a display ratio, e.g. 1 SOL = 160 USDT
    ///
    /// # Arguments
    /// * `user` - Pool creator and fee payer
    /// * `token_a` / `token_b` - Precision of each side, in any order
    /// * `ratio_a` / `ratio_b` - Display amounts that exchange for each other
    pub fn initialize_pool_ix(
        &self,
        user: Pubkey,
        token_a: &AssetPrecision,
        ratio_a: Decimal,
        token_b: &AssetPrecision,
        ratio_b: Decimal,
    ) -> Result<InstructionPlan> {
        self.builder.initialize_pool(&InitializePoolParams {
            user,
            token_a_mint: token_a.mint,
            token_b_mint: token_b.mint,
            ratio_a: token_a.to_basis_points(ratio_a)?,
            ratio_b: token_b.to_basis_points(ratio_b)?,
        })
    }

    pub fn deposit_ix(
        &self,
        pool: &PoolRecord,
        user: Pubkey,
        token: &AssetPrecision,
        amount: Decimal,
    ) -> Result<InstructionPlan> {
        self.builder.deposit(
            pool,
            &DepositParams {
                user,
                deposit_token_mint: token.mint,
                amount: token.to_basis_points(amount)?,
                user_input_account: None,
                user_output_lp_account: None,
            },
        )
    }

    /// Create a withdraw instruction. LP mints carry the decimals of their
    /// underlying token, so `token` converts the LP amount as well.
    pub fn withdraw_ix(
        &self,
        pool: &PoolRecord,
        user: Pubkey,
        token: &AssetPrecision,
        lp_amount: Decimal,
    ) -> Result<InstructionPlan> {
        self.builder.withdraw(
            pool,
            &WithdrawParams {
                user,
                withdraw_token_mint: token.mint,
                lp_amount_to_burn: token.to_basis_points(lp_amount)?,
                user_input_lp_account: None,
                user_output_account: None,
            },
        )
    }

    pub fn swap_ix(
        &self,
        pool: &PoolRecord,
        user: Pubkey,
        input: &AssetPrecision,
        amount_in: Decimal,
    ) -> Result<InstructionPlan> {
        self.builder.swap(
            pool,
            &SwapParams {
                user,
                input_token_mint: input.mint,
                amount_in: input.to_basis_points(amount_in)?,
                user_input_account: None,
                user_output_account: None,
            },
        )
    }

    pub fn pause_pool_ix(
        &self,
        pool: &PoolRecord,
        pool_owner: Pubkey,
        flags: u8,
    ) -> Result<InstructionPlan> {
        self.builder
            .pause_pool(pool, &PausePoolParams { pool_owner, flags })
    }

    pub fn unpause_pool_ix(
        &self,
        pool: &PoolRecord,
        pool_owner: Pubkey,
        flags: u8,
    ) -> Result<InstructionPlan> {
        self.builder
            .unpause_pool(pool, &PausePoolParams { pool_owner, flags })
    }

    pub fn set_swap_owner_only_ix(
        &self,
        pool: &PoolRecord,
        contract_owner: Pubkey,
        enable_restriction: bool,
        designated_owner: Pubkey,
    ) -> Result<InstructionPlan> {
        self.builder.set_swap_owner_only(
            pool,
            &SetSwapOwnerOnlyParams {
                contract_owner,
                enable_restriction,
                designated_owner,
            },
        )
    }

    pub fn consolidate_pool_fees_ix(&self, pool_states: &[Pubkey]) -> Result<InstructionPlan> {
        self.builder.consolidate_pool_fees(pool_states)
    }

    pub fn pool_view_ix(
        &self,
        pool: &PoolRecord,
        operation: PoolOperation,
    ) -> Result<InstructionPlan> {
        self.builder.pool_view(pool, operation)
    }

    pub fn summarize(
        &self,
        pool: &PoolRecord,
        token_a: &AssetPrecision,
        token_b: &AssetPrecision,
    ) -> Result<PoolSummary> {
        PoolSummary::from_record(pool, token_a, token_b, self.config.max_display_decimals)
    }
}
