// Instruction inputs in base units. The SDK facade builds these from display amounts.

use solana_sdk::pubkey::Pubkey;

/// Initialize program parameters
#[derive(Debug, Clone)]
pub struct InitializeProgramParams {
    pub program_authority: Pubkey,
}

/// Initialize pool parameters
///
/// Mints may be given in either order; they are normalized before encoding.
#[derive(Debug, Clone)]
pub struct InitializePoolParams {
    pub user: Pubkey,
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub ratio_a: u64, // base units of token_a_mint
    pub ratio_b: u64, // base units of token_b_mint
}

/// Deposit parameters
#[derive(Debug, Clone)]
pub struct DepositParams {
    pub user: Pubkey,
    pub deposit_token_mint: Pubkey,
    pub amount: u64,
    /// Defaults to the user's associated token account for `deposit_token_mint`
    pub user_input_account: Option<Pubkey>,
    /// Defaults to the user's associated token account for the matching LP mint
    pub user_output_lp_account: Option<Pubkey>,
}

/// Withdraw parameters
#[derive(Debug, Clone)]
pub struct WithdrawParams {
    pub user: Pubkey,
    pub withdraw_token_mint: Pubkey,
    pub lp_amount_to_burn: u64,
    pub user_input_lp_account: Option<Pubkey>,
    pub user_output_account: Option<Pubkey>,
}

/// Swap parameters
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub user: Pubkey,
    pub input_token_mint: Pubkey,
    pub amount_in: u64,
    pub user_input_account: Option<Pubkey>,
    pub user_output_account: Option<Pubkey>,
}

/// Pause or unpause parameters, `flags` is a combination of the `PAUSE_FLAG_*` bits
#[derive(Debug, Clone)]
pub struct PausePoolParams {
    pub pool_owner: Pubkey,
    pub flags: u8,
}

/// Swap owner-only parameters
#[derive(Debug, Clone)]
pub struct SetSwapOwnerOnlyParams {
    pub contract_owner: Pubkey,
    pub enable_restriction: bool,
    pub designated_owner: Pubkey,
}
