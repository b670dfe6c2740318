use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program, sysvar,
};

use crate::{
    account_metas::*,
    constants::*,
    error::{Result, invalid},
    params::*,
    pda::{self, PoolAddresses},
    pool_state::PoolRecord,
};

/// Operations understood by the program, with their instruction arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolOperation {
    InitializeProgram,
    InitializePool {
        ratio_a_numerator: u64,
        ratio_b_denominator: u64,
    },
    Deposit {
        deposit_token_mint: Pubkey,
        amount: u64,
    },
    Withdraw {
        withdraw_token_mint: Pubkey,
        lp_amount_to_burn: u64,
    },
    Swap {
        input_token_mint: Pubkey,
        amount_in: u64,
    },
    GetPoolInfo,
    GetPoolPauseStatus,
    GetLiquidityInfo,
    GetFeeInfo,
    ConsolidatePoolFees {
        pool_count: u8,
    },
    PausePool {
        pause_flags: u8,
    },
    UnpausePool {
        unpause_flags: u8,
    },
    SetSwapOwnerOnly {
        enable_restriction: bool,
        designated_owner: Pubkey,
    },
}

impl PoolOperation {
    pub fn discriminator(&self) -> u8 {
        match self {
            PoolOperation::InitializeProgram => INITIALIZE_PROGRAM_DISCRIMINATOR,
            PoolOperation::InitializePool { .. } => INITIALIZE_POOL_DISCRIMINATOR,
            PoolOperation::Deposit { .. } => DEPOSIT_DISCRIMINATOR,
            PoolOperation::Withdraw { .. } => WITHDRAW_DISCRIMINATOR,
            PoolOperation::Swap { .. } => SWAP_DISCRIMINATOR,
            PoolOperation::GetPoolInfo => GET_POOL_INFO_DISCRIMINATOR,
            PoolOperation::GetPoolPauseStatus => GET_POOL_PAUSE_STATUS_DISCRIMINATOR,
            PoolOperation::GetLiquidityInfo => GET_LIQUIDITY_INFO_DISCRIMINATOR,
            PoolOperation::GetFeeInfo => GET_FEE_INFO_DISCRIMINATOR,
            PoolOperation::ConsolidatePoolFees { .. } => CONSOLIDATE_POOL_FEES_DISCRIMINATOR,
            PoolOperation::PausePool { .. } => PAUSE_POOL_DISCRIMINATOR,
            PoolOperation::UnpausePool { .. } => UNPAUSE_POOL_DISCRIMINATOR,
            PoolOperation::SetSwapOwnerOnly { .. } => SET_SWAP_OWNER_ONLY_DISCRIMINATOR,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PoolOperation::InitializeProgram => "initialize_program",
            PoolOperation::InitializePool { .. } => "initialize_pool",
            PoolOperation::Deposit { .. } => "deposit",
            PoolOperation::Withdraw { .. } => "withdraw",
            PoolOperation::Swap { .. } => "swap",
            PoolOperation::GetPoolInfo => "get_pool_info",
            PoolOperation::GetPoolPauseStatus => "get_pool_pause_status",
            PoolOperation::GetLiquidityInfo => "get_liquidity_info",
            PoolOperation::GetFeeInfo => "get_fee_info",
            PoolOperation::ConsolidatePoolFees { .. } => "consolidate_pool_fees",
            PoolOperation::PausePool { .. } => "pause_pool",
            PoolOperation::UnpausePool { .. } => "unpause_pool",
            PoolOperation::SetSwapOwnerOnly { .. } => "set_swap_owner_only",
        }
    }

    pub fn is_view(&self) -> bool {
        matches!(
            self,
            PoolOperation::GetPoolInfo
                | PoolOperation::GetPoolPauseStatus
                | PoolOperation::GetLiquidityInfo
                | PoolOperation::GetFeeInfo
        )
    }

    /// Instruction payload: discriminator byte followed by little-endian arguments
    pub fn data(&self) -> Vec<u8> {
        let mut data = vec![self.discriminator()];

        match self {
            PoolOperation::InitializePool {
                ratio_a_numerator,
                ratio_b_denominator,
            } => {
                data.extend_from_slice(&ratio_a_numerator.to_le_bytes());
                data.extend_from_slice(&ratio_b_denominator.to_le_bytes());
            }
            PoolOperation::Deposit {
                deposit_token_mint: mint,
                amount,
            }
            | PoolOperation::Withdraw {
                withdraw_token_mint: mint,
                lp_amount_to_burn: amount,
            }
            | PoolOperation::Swap {
                input_token_mint: mint,
                amount_in: amount,
            } => {
                data.extend_from_slice(mint.as_ref());
                data.extend_from_slice(&amount.to_le_bytes());
            }
            PoolOperation::ConsolidatePoolFees { pool_count: value }
            | PoolOperation::PausePool { pause_flags: value }
            | PoolOperation::UnpausePool {
                unpause_flags: value,
            } => {
                data.push(*value);
            }
            PoolOperation::SetSwapOwnerOnly {
                enable_restriction,
                designated_owner,
            } => {
                data.push(*enable_restriction as u8);
                data.extend_from_slice(designated_owner.as_ref());
            }
            PoolOperation::InitializeProgram
            | PoolOperation::GetPoolInfo
            | PoolOperation::GetPoolPauseStatus
            | PoolOperation::GetLiquidityInfo
            | PoolOperation::GetFeeInfo => {}
        }

        data
    }
}

/// Ordered accounts plus payload, ready to be wrapped in a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionPlan {
    pub operation: PoolOperation,
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl InstructionPlan {
    fn new(program_id: Pubkey, operation: PoolOperation, accounts: Vec<AccountMeta>) -> Self {
        let data = operation.data();
        log::debug!(
            "{} plan: {} accounts, data {}",
            operation.name(),
            accounts.len(),
            hex::encode(&data)
        );
        Self {
            operation,
            program_id,
            accounts,
            data,
        }
    }

    pub fn discriminator(&self) -> u8 {
        self.operation.discriminator()
    }

    pub fn signers(&self) -> Vec<Pubkey> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| meta.pubkey)
            .collect()
    }
}

impl From<InstructionPlan> for Instruction {
    fn from(plan: InstructionPlan) -> Self {
        Instruction {
            program_id: plan.program_id,
            accounts: plan.accounts,
            data: plan.data,
        }
    }
}

/// One encoding request, see [`PoolInstructionBuilder::encode`]
#[derive(Debug, Clone)]
pub enum PoolRequest<'a> {
    InitializeProgram(InitializeProgramParams),
    InitializePool(InitializePoolParams),
    Deposit(&'a PoolRecord, DepositParams),
    Withdraw(&'a PoolRecord, WithdrawParams),
    Swap(&'a PoolRecord, SwapParams),
    PausePool(&'a PoolRecord, PausePoolParams),
    UnpausePool(&'a PoolRecord, PausePoolParams),
    SetSwapOwnerOnly(&'a PoolRecord, SetSwapOwnerOnlyParams),
    ConsolidatePoolFees(Vec<Pubkey>),
    /// `operation` must be one of the read-only queries
    View(&'a PoolRecord, PoolOperation),
}

/// Builds instruction plans for one deployment of the program
#[derive(Debug, Clone)]
pub struct PoolInstructionBuilder {
    program_id: Pubkey,
    pool_state_seed: Vec<u8>,
}

impl PoolInstructionBuilder {
    pub fn new(program_id: Pubkey, pool_state_seed: &[u8]) -> Self {
        Self {
            program_id,
            pool_state_seed: pool_state_seed.to_vec(),
        }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn encode(&self, request: &PoolRequest) -> Result<InstructionPlan> {
        match request {
            PoolRequest::InitializeProgram(params) => self.initialize_program(params),
            PoolRequest::InitializePool(params) => self.initialize_pool(params),
            PoolRequest::Deposit(pool, params) => self.deposit(pool, params),
            PoolRequest::Withdraw(pool, params) => self.withdraw(pool, params),
            PoolRequest::Swap(pool, params) => self.swap(pool, params),
            PoolRequest::PausePool(pool, params) => self.pause_pool(pool, params),
            PoolRequest::UnpausePool(pool, params) => self.unpause_pool(pool, params),
            PoolRequest::SetSwapOwnerOnly(pool, params) => self.set_swap_owner_only(pool, params),
            PoolRequest::ConsolidatePoolFees(pool_states) => {
                self.consolidate_pool_fees(pool_states)
            }
            PoolRequest::View(pool, operation) => self.pool_view(pool, operation.clone()),
        }
    }

    pub fn initialize_program(&self, params: &InitializeProgramParams) -> Result<InstructionPlan> {
        require_key(&params.program_authority, "program authority")?;

        let accounts = FixedRatioInitializeProgram {
            program_authority: params.program_authority,
            system_program: system_program::ID,
            rent_sysvar: sysvar::rent::ID,
            system_state: pda::system_state_address(&self.program_id)?.address,
            main_treasury: pda::main_treasury_address(&self.program_id)?.address,
            program_data: pda::program_data_address(&self.program_id)?.address,
        };

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::InitializeProgram,
            accounts.into(),
        ))
    }

    pub fn initialize_pool(&self, params: &InitializePoolParams) -> Result<InstructionPlan> {
        let InitializePoolParams {
            user,
            token_a_mint,
            token_b_mint,
            ratio_a,
            ratio_b,
        } = params;

        require_key(user, "user")?;
        require_key(token_a_mint, "token A mint")?;
        require_key(token_b_mint, "token B mint")?;
        if token_a_mint == token_b_mint {
            return Err(invalid(format!(
                "pool needs two distinct mints, got {} twice",
                token_a_mint
            )));
        }
        if *ratio_a == 0 || *ratio_b == 0 {
            return Err(invalid("pool ratio sides must be greater than zero"));
        }

        let addresses = PoolAddresses::derive(
            &self.program_id,
            &self.pool_state_seed,
            *token_a_mint,
            *token_b_mint,
            *ratio_a,
            *ratio_b,
        )?;
        let pair = addresses.pair;

        let accounts = FixedRatioInitializePool {
            user: *user,
            system_program: system_program::ID,
            system_state: addresses.system_state.address,
            pool_state: addresses.pool_state.address,
            token_program: spl_token::ID,
            main_treasury: addresses.main_treasury.address,
            token_a_mint: pair.token_a_mint,
            token_b_mint: pair.token_b_mint,
            token_a_vault: addresses.token_a_vault.address,
            token_b_vault: addresses.token_b_vault.address,
            lp_token_a_mint: addresses.lp_token_a_mint.address,
            lp_token_b_mint: addresses.lp_token_b_mint.address,
        };

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::InitializePool {
                ratio_a_numerator: pair.ratio_a_numerator,
                ratio_b_denominator: pair.ratio_b_denominator,
            },
            accounts.into(),
        ))
    }

    pub fn deposit(&self, pool: &PoolRecord, params: &DepositParams) -> Result<InstructionPlan> {
        require_pool(pool)?;
        require_key(&params.user, "user")?;
        require_amount(params.amount, "deposit amount")?;
        let is_token_a = pool_side(pool, &params.deposit_token_mint)?;

        let lp_mint = lp_mint_for(pool, is_token_a);
        let accounts = FixedRatioLiquidity {
            user: params.user,
            system_program: system_program::ID,
            system_state: pda::system_state_address(&self.program_id)?.address,
            pool_state: pool.address,
            token_program: spl_token::ID,
            token_a_vault: pool.token_a_vault,
            token_b_vault: pool.token_b_vault,
            user_input_account: params.user_input_account.unwrap_or_else(|| {
                pda::user_token_account(&params.user, &params.deposit_token_mint)
            }),
            user_output_account: params
                .user_output_lp_account
                .unwrap_or_else(|| pda::user_token_account(&params.user, &lp_mint)),
            lp_token_a_mint: pool.lp_token_a_mint,
            lp_token_b_mint: pool.lp_token_b_mint,
        };

        warn_if(pool.flags.liquidity_paused(), pool, "deposit");

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::Deposit {
                deposit_token_mint: params.deposit_token_mint,
                amount: params.amount,
            },
            accounts.into(),
        ))
    }

    pub fn withdraw(&self, pool: &PoolRecord, params: &WithdrawParams) -> Result<InstructionPlan> {
        require_pool(pool)?;
        require_key(&params.user, "user")?;
        require_amount(params.lp_amount_to_burn, "LP amount to burn")?;
        let is_token_a = pool_side(pool, &params.withdraw_token_mint)?;

        let lp_mint = lp_mint_for(pool, is_token_a);
        let accounts = FixedRatioLiquidity {
            user: params.user,
            system_program: system_program::ID,
            system_state: pda::system_state_address(&self.program_id)?.address,
            pool_state: pool.address,
            token_program: spl_token::ID,
            token_a_vault: pool.token_a_vault,
            token_b_vault: pool.token_b_vault,
            user_input_account: params
                .user_input_lp_account
                .unwrap_or_else(|| pda::user_token_account(&params.user, &lp_mint)),
            user_output_account: params.user_output_account.unwrap_or_else(|| {
                pda::user_token_account(&params.user, &params.withdraw_token_mint)
            }),
            lp_token_a_mint: pool.lp_token_a_mint,
            lp_token_b_mint: pool.lp_token_b_mint,
        };

        warn_if(pool.flags.liquidity_paused(), pool, "withdraw");

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::Withdraw {
                withdraw_token_mint: params.withdraw_token_mint,
                lp_amount_to_burn: params.lp_amount_to_burn,
            },
            accounts.into(),
        ))
    }

    pub fn swap(&self, pool: &PoolRecord, params: &SwapParams) -> Result<InstructionPlan> {
        require_pool(pool)?;
        require_key(&params.user, "user")?;
        require_amount(params.amount_in, "swap amount")?;
        let output_mint = if pool_side(pool, &params.input_token_mint)? {
            pool.token_b_mint
        } else {
            pool.token_a_mint
        };

        let accounts = FixedRatioSwap {
            user: params.user,
            system_program: system_program::ID,
            system_state: pda::system_state_address(&self.program_id)?.address,
            pool_state: pool.address,
            token_program: spl_token::ID,
            token_a_vault: pool.token_a_vault,
            token_b_vault: pool.token_b_vault,
            user_input_token_account: params.user_input_account.unwrap_or_else(|| {
                pda::user_token_account(&params.user, &params.input_token_mint)
            }),
            user_output_token_account: params
                .user_output_account
                .unwrap_or_else(|| pda::user_token_account(&params.user, &output_mint)),
            input_mint: params.input_token_mint,
            output_mint,
        };

        warn_if(pool.flags.swaps_paused(), pool, "swap");

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::Swap {
                input_token_mint: params.input_token_mint,
                amount_in: params.amount_in,
            },
            accounts.into(),
        ))
    }

    pub fn pause_pool(&self, pool: &PoolRecord, params: &PausePoolParams) -> Result<InstructionPlan> {
        let accounts = self.pool_pause_accounts(pool, params)?;
        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::PausePool {
                pause_flags: params.flags,
            },
            accounts,
        ))
    }

    pub fn unpause_pool(
        &self,
        pool: &PoolRecord,
        params: &PausePoolParams,
    ) -> Result<InstructionPlan> {
        let accounts = self.pool_pause_accounts(pool, params)?;
        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::UnpausePool {
                unpause_flags: params.flags,
            },
            accounts,
        ))
    }

    fn pool_pause_accounts(
        &self,
        pool: &PoolRecord,
        params: &PausePoolParams,
    ) -> Result<Vec<AccountMeta>> {
        require_pool(pool)?;
        require_key(&params.pool_owner, "pool owner")?;
        if params.flags == 0 || params.flags & !PAUSE_FLAG_ALL != 0 {
            return Err(invalid(format!(
                "pause flags must be 1 (liquidity), 2 (swaps) or 3 (all), got {}",
                params.flags
            )));
        }

        Ok(FixedRatioPoolPause {
            pool_owner: params.pool_owner,
            system_state: pda::system_state_address(&self.program_id)?.address,
            pool_state: pool.address,
        }
        .into())
    }

    pub fn set_swap_owner_only(
        &self,
        pool: &PoolRecord,
        params: &SetSwapOwnerOnlyParams,
    ) -> Result<InstructionPlan> {
        require_pool(pool)?;
        require_key(&params.contract_owner, "contract owner")?;
        if params.enable_restriction {
            require_key(&params.designated_owner, "designated owner")?;
        }

        let accounts = FixedRatioSetSwapOwnerOnly {
            contract_owner: params.contract_owner,
            system_state: pda::system_state_address(&self.program_id)?.address,
            pool_state: pool.address,
            program_data: pda::program_data_address(&self.program_id)?.address,
        };

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::SetSwapOwnerOnly {
                enable_restriction: params.enable_restriction,
                designated_owner: params.designated_owner,
            },
            accounts.into(),
        ))
    }

    pub fn consolidate_pool_fees(&self, pool_states: &[Pubkey]) -> Result<InstructionPlan> {
        if pool_states.is_empty() || pool_states.len() > MAX_POOLS_PER_CONSOLIDATION {
            return Err(invalid(format!(
                "consolidation takes 1..={} pools, got {}",
                MAX_POOLS_PER_CONSOLIDATION,
                pool_states.len()
            )));
        }
        for (index, pool_state) in pool_states.iter().enumerate() {
            require_key(pool_state, "pool state")?;
            if pool_states[..index].contains(pool_state) {
                return Err(invalid(format!("pool {} listed twice", pool_state)));
            }
        }

        let accounts = FixedRatioConsolidatePoolFees {
            system_state: pda::system_state_address(&self.program_id)?.address,
            main_treasury: pda::main_treasury_address(&self.program_id)?.address,
            pool_states: pool_states.to_vec(),
        };

        Ok(InstructionPlan::new(
            self.program_id,
            PoolOperation::ConsolidatePoolFees {
                // bounded by MAX_POOLS_PER_CONSOLIDATION
                pool_count: pool_states.len() as u8,
            },
            accounts.into(),
        ))
    }

    pub fn pool_view(&self, pool: &PoolRecord, operation: PoolOperation) -> Result<InstructionPlan> {
        require_pool(pool)?;
        if !operation.is_view() {
            return Err(invalid(format!(
                "{} is not a read-only pool query",
                operation.name()
            )));
        }

        Ok(InstructionPlan::new(
            self.program_id,
            operation,
            FixedRatioPoolView {
                pool_state: pool.address,
            }
            .into(),
        ))
    }
}

fn require_key(key: &Pubkey, what: &str) -> Result<()> {
    if *key == Pubkey::default() {
        return Err(invalid(format!("missing {} account", what)));
    }
    Ok(())
}

fn require_pool(pool: &PoolRecord) -> Result<()> {
    require_key(&pool.address, "pool state")
}

fn require_amount(amount: u64, what: &str) -> Result<()> {
    if amount == 0 {
        return Err(invalid(format!("{} must be greater than zero", what)));
    }
    Ok(())
}

/// True for token A, false for token B
fn pool_side(pool: &PoolRecord, mint: &Pubkey) -> Result<bool> {
    if *mint == pool.token_a_mint {
        Ok(true)
    } else if *mint == pool.token_b_mint {
        Ok(false)
    } else {
        Err(invalid(format!(
            "mint {} is not part of pool {}",
            mint, pool.address
        )))
    }
}

fn lp_mint_for(pool: &PoolRecord, is_token_a: bool) -> Pubkey {
    if is_token_a || pool.flags.single_lp_token() {
        pool.lp_token_a_mint
    } else {
        pool.lp_token_b_mint
    }
}

fn warn_if(paused: bool, pool: &PoolRecord, action: &str) {
    if paused {
        log::warn!(
            "Pool {} is paused for {}, the program will likely reject this instruction",
            pool.address,
            action
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixedRatioError;
    use assert_matches::assert_matches;

    fn builder() -> PoolInstructionBuilder {
        PoolInstructionBuilder::new(FIXED_RATIO_PROGRAM_ID, POOL_STATE_SEED)
    }

    fn pool() -> PoolRecord {
        PoolRecord {
            address: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            token_a_mint: Pubkey::new_from_array([1; 32]),
            token_b_mint: Pubkey::new_from_array([2; 32]),
            token_a_vault: Pubkey::new_unique(),
            token_b_vault: Pubkey::new_unique(),
            lp_token_a_mint: Pubkey::new_unique(),
            lp_token_b_mint: Pubkey::new_unique(),
            ratio_a_numerator: 1_000_000_000,
            ratio_b_denominator: 160_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_operation_data_layout() {
        let mint = Pubkey::new_from_array([7; 32]);
        let data = PoolOperation::Deposit {
            deposit_token_mint: mint,
            amount: 0x0102,
        }
        .data();
        assert_eq!(data.len(), 1 + 32 + 8);
        assert_eq!(data[0], 2);
        assert_eq!(&data[1..33], mint.as_ref());
        assert_eq!(&data[33..], &[0x02, 0x01, 0, 0, 0, 0, 0, 0]);

        assert_eq!(
            PoolOperation::InitializePool {
                ratio_a_numerator: 1,
                ratio_b_denominator: 2,
            }
            .data(),
            vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(PoolOperation::PausePool { pause_flags: 3 }.data(), vec![19, 3]);
        assert_eq!(PoolOperation::GetFeeInfo.data(), vec![10]);

        let owner_only = PoolOperation::SetSwapOwnerOnly {
            enable_restriction: true,
            designated_owner: mint,
        }
        .data();
        assert_eq!(&owner_only[..2], &[21, 1]);
        assert_eq!(owner_only.len(), 34);
    }

    #[test]
    fn test_deposit_accounts() {
        let pool = pool();
        let user = Pubkey::new_unique();
        let plan = builder()
            .deposit(
                &pool,
                &DepositParams {
                    user,
                    deposit_token_mint: pool.token_b_mint,
                    amount: 5,
                    user_input_account: None,
                    user_output_lp_account: None,
                },
            )
            .unwrap();

        assert_eq!(plan.accounts.len(), 11);
        assert_eq!(plan.accounts[0], AccountMeta::new(user, true));
        assert_eq!(plan.accounts[3], AccountMeta::new(pool.address, false));
        assert_eq!(
            plan.accounts[7].pubkey,
            pda::user_token_account(&user, &pool.token_b_mint)
        );
        assert_eq!(
            plan.accounts[8].pubkey,
            pda::user_token_account(&user, &pool.lp_token_b_mint)
        );
        assert_eq!(plan.signers(), vec![user]);
    }

    #[test]
    fn test_single_lp_mode_routes_to_lp_a() {
        let mut pool = pool();
        pool.flags = crate::pool_state::PoolFlags::from_bits(FLAG_SINGLE_LP_TOKEN);
        let user = Pubkey::new_unique();
        let plan = builder()
            .withdraw(
                &pool,
                &WithdrawParams {
                    user,
                    withdraw_token_mint: pool.token_b_mint,
                    lp_amount_to_burn: 10,
                    user_input_lp_account: None,
                    user_output_account: None,
                },
            )
            .unwrap();
        assert_eq!(
            plan.accounts[7].pubkey,
            pda::user_token_account(&user, &pool.lp_token_a_mint)
        );
    }

    #[test]
    fn test_swap_rejects_foreign_mint_and_zero_amount() {
        let pool = pool();
        let params = SwapParams {
            user: Pubkey::new_unique(),
            input_token_mint: Pubkey::new_unique(),
            amount_in: 1,
            user_input_account: None,
            user_output_account: None,
        };
        assert_matches!(
            builder().swap(&pool, &params),
            Err(FixedRatioError::EncodingValidation(_))
        );

        let params = SwapParams {
            input_token_mint: pool.token_a_mint,
            amount_in: 0,
            ..params
        };
        assert_matches!(
            builder().swap(&pool, &params),
            Err(FixedRatioError::EncodingValidation(_))
        );
    }

    #[test]
    fn test_pause_flags_are_validated() {
        let pool = pool();
        let params = PausePoolParams {
            pool_owner: pool.owner,
            flags: 4,
        };
        assert_matches!(
            builder().pause_pool(&pool, &params),
            Err(FixedRatioError::EncodingValidation(_))
        );

        let plan = builder()
            .unpause_pool(
                &pool,
                &PausePoolParams {
                    flags: PAUSE_FLAG_ALL,
                    ..params
                },
            )
            .unwrap();
        assert_eq!(plan.data, vec![20, 3]);
        assert_eq!(plan.accounts.len(), 3);
    }

    #[test]
    fn test_consolidation_bounds() {
        assert_matches!(
            builder().consolidate_pool_fees(&[]),
            Err(FixedRatioError::EncodingValidation(_))
        );

        let pool_state = Pubkey::new_unique();
        assert_matches!(
            builder().consolidate_pool_fees(&[pool_state, pool_state]),
            Err(FixedRatioError::EncodingValidation(_))
        );

        let pools: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let plan = builder().consolidate_pool_fees(&pools).unwrap();
        assert_eq!(plan.data, vec![17, 3]);
        assert_eq!(plan.accounts.len(), 5);
        assert!(plan.accounts[2..].iter().all(|meta| meta.is_writable));
    }

    #[test]
    fn test_view_requires_view_operation() {
        let pool = pool();
        let plan = builder()
            .encode(&PoolRequest::View(&pool, PoolOperation::GetPoolInfo))
            .unwrap();
        assert_eq!(plan.accounts, vec![AccountMeta::new_readonly(pool.address, false)]);

        assert_matches!(
            builder().pool_view(&pool, PoolOperation::InitializeProgram),
            Err(FixedRatioError::EncodingValidation(_))
        );
    }

    #[test]
    fn test_missing_pool_address_is_rejected() {
        let pool = PoolRecord {
            address: Pubkey::default(),
            ..pool()
        };
        assert_matches!(
            builder().pool_view(&pool, PoolOperation::GetLiquidityInfo),
            Err(FixedRatioError::EncodingValidation(_))
        );
    }
}
