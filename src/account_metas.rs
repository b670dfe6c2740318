use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

pub(crate) struct FixedRatioInitializeProgram {
    pub program_authority: Pubkey,
    pub system_program: Pubkey,
    pub rent_sysvar: Pubkey,
    pub system_state: Pubkey,
    pub main_treasury: Pubkey,
    pub program_data: Pubkey,
}

impl From<FixedRatioInitializeProgram> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioInitializeProgram) -> Self {
        vec![
            AccountMeta::new(accounts.program_authority, true),
            AccountMeta::new_readonly(accounts.system_program, false),
            AccountMeta::new_readonly(accounts.rent_sysvar, false),
            AccountMeta::new(accounts.system_state, false),
            AccountMeta::new(accounts.main_treasury, false),
            AccountMeta::new_readonly(accounts.program_data, false),
        ]
    }
}

pub(crate) struct FixedRatioInitializePool {
    pub user: Pubkey,
    pub system_program: Pubkey,
    pub system_state: Pubkey,
    pub pool_state: Pubkey,
    pub token_program: Pubkey,
    pub main_treasury: Pubkey,
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub lp_token_a_mint: Pubkey,
    pub lp_token_b_mint: Pubkey,
}

impl From<FixedRatioInitializePool> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioInitializePool) -> Self {
        vec![
            AccountMeta::new(accounts.user, true),
            AccountMeta::new_readonly(accounts.system_program, false),
            AccountMeta::new_readonly(accounts.system_state, false),
            AccountMeta::new(accounts.pool_state, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            AccountMeta::new(accounts.main_treasury, false),
            AccountMeta::new_readonly(accounts.token_a_mint, false),
            AccountMeta::new_readonly(accounts.token_b_mint, false),
            AccountMeta::new(accounts.token_a_vault, false),
            AccountMeta::new(accounts.token_b_vault, false),
            AccountMeta::new(accounts.lp_token_a_mint, false),
            AccountMeta::new(accounts.lp_token_b_mint, false),
        ]
    }
}

// deposit and withdraw share one layout; input/output are the user's token and LP accounts
pub(crate) struct FixedRatioLiquidity {
    pub user: Pubkey,
    pub system_program: Pubkey,
    pub system_state: Pubkey,
    pub pool_state: Pubkey,
    pub token_program: Pubkey,
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub user_input_account: Pubkey,
    pub user_output_account: Pubkey,
    pub lp_token_a_mint: Pubkey,
    pub lp_token_b_mint: Pubkey,
}

impl From<FixedRatioLiquidity> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioLiquidity) -> Self {
        vec![
            AccountMeta::new(accounts.user, true),
            AccountMeta::new_readonly(accounts.system_program, false),
            AccountMeta::new_readonly(accounts.system_state, false),
            AccountMeta::new(accounts.pool_state, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            AccountMeta::new(accounts.token_a_vault, false),
            AccountMeta::new(accounts.token_b_vault, false),
            AccountMeta::new(accounts.user_input_account, false),
            AccountMeta::new(accounts.user_output_account, false),
            AccountMeta::new(accounts.lp_token_a_mint, false),
            AccountMeta::new(accounts.lp_token_b_mint, false),
        ]
    }
}

pub(crate) struct FixedRatioSwap {
    pub user: Pubkey,
    pub system_program: Pubkey,
    pub system_state: Pubkey,
    pub pool_state: Pubkey,
    pub token_program: Pubkey,
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub user_input_token_account: Pubkey,
    pub user_output_token_account: Pubkey,
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
}

impl From<FixedRatioSwap> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioSwap) -> Self {
        vec![
            AccountMeta::new(accounts.user, true),
            AccountMeta::new_readonly(accounts.system_program, false),
            AccountMeta::new_readonly(accounts.system_state, false),
            AccountMeta::new(accounts.pool_state, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            AccountMeta::new(accounts.token_a_vault, false),
            AccountMeta::new(accounts.token_b_vault, false),
            AccountMeta::new(accounts.user_input_token_account, false),
            AccountMeta::new(accounts.user_output_token_account, false),
            AccountMeta::new_readonly(accounts.input_mint, false),
            AccountMeta::new_readonly(accounts.output_mint, false),
        ]
    }
}

// pause / unpause
pub(crate) struct FixedRatioPoolPause {
    pub pool_owner: Pubkey,
    pub system_state: Pubkey,
    pub pool_state: Pubkey,
}

impl From<FixedRatioPoolPause> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioPoolPause) -> Self {
        vec![
            AccountMeta::new(accounts.pool_owner, true),
            AccountMeta::new_readonly(accounts.system_state, false),
            AccountMeta::new(accounts.pool_state, false),
        ]
    }
}

pub(crate) struct FixedRatioSetSwapOwnerOnly {
    pub contract_owner: Pubkey,
    pub system_state: Pubkey,
    pub pool_state: Pubkey,
    pub program_data: Pubkey,
}

impl From<FixedRatioSetSwapOwnerOnly> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioSetSwapOwnerOnly) -> Self {
        vec![
            AccountMeta::new(accounts.contract_owner, true),
            AccountMeta::new_readonly(accounts.system_state, false),
            AccountMeta::new(accounts.pool_state, false),
            AccountMeta::new_readonly(accounts.program_data, false),
        ]
    }
}

pub(crate) struct FixedRatioConsolidatePoolFees {
    pub system_state: Pubkey,
    pub main_treasury: Pubkey,
    pub pool_states: Vec<Pubkey>,
}

impl From<FixedRatioConsolidatePoolFees> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioConsolidatePoolFees) -> Self {
        let mut metas = vec![
            AccountMeta::new_readonly(accounts.system_state, false),
            AccountMeta::new(accounts.main_treasury, false),
        ];
        metas.extend(
            accounts
                .pool_states
                .into_iter()
                .map(|pool_state| AccountMeta::new(pool_state, false)),
        );
        metas
    }
}

// read-only queries
pub(crate) struct FixedRatioPoolView {
    pub pool_state: Pubkey,
}

impl From<FixedRatioPoolView> for Vec<AccountMeta> {
    fn from(accounts: FixedRatioPoolView) -> Self {
        vec![AccountMeta::new_readonly(accounts.pool_state, false)]
    }
}
