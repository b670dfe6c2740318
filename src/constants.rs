use solana_sdk::{pubkey, pubkey::Pubkey};

pub const FIXED_RATIO_PROGRAM_ID: Pubkey = pubkey!("quXSYkeZ8ByTCtYY1J1uxQmE36UZ3LmNGgE3CYMFixD");

// SEEDS
pub const POOL_STATE_SEED: &[u8] = b"pool_state";
pub const TOKEN_A_VAULT_SEED: &[u8] = b"token_a_vault";
pub const TOKEN_B_VAULT_SEED: &[u8] = b"token_b_vault";
pub const LP_TOKEN_A_MINT_SEED: &[u8] = b"lp_token_a_mint";
pub const LP_TOKEN_B_MINT_SEED: &[u8] = b"lp_token_b_mint";
pub const MAIN_TREASURY_SEED: &[u8] = b"main_treasury";
pub const SYSTEM_STATE_SEED: &[u8] = b"system_state";

// POOL FLAGS
pub const FLAG_ONE_TO_MANY_RATIO: u8 = 1 << 0;
pub const FLAG_LIQUIDITY_PAUSED: u8 = 1 << 1;
pub const FLAG_SWAPS_PAUSED: u8 = 1 << 2;
pub const FLAG_WITHDRAWAL_PROTECTION: u8 = 1 << 3;
pub const FLAG_SINGLE_LP_TOKEN: u8 = 1 << 4;
pub const FLAG_SWAP_FOR_OWNERS_ONLY: u8 = 1 << 5;
pub const FLAG_EXACT_EXCHANGE_REQUIRED: u8 = 1 << 6;
pub const KNOWN_FLAGS: u8 = 0b0111_1111;

// pause_flags argument of PausePool / UnpausePool
pub const PAUSE_FLAG_LIQUIDITY: u8 = 1;
pub const PAUSE_FLAG_SWAPS: u8 = 2;
pub const PAUSE_FLAG_ALL: u8 = PAUSE_FLAG_LIQUIDITY | PAUSE_FLAG_SWAPS;

// DISCRIMINATORS (variant index of the program's instruction enum)
pub const INITIALIZE_PROGRAM_DISCRIMINATOR: u8 = 0;
pub const INITIALIZE_POOL_DISCRIMINATOR: u8 = 1;
pub const DEPOSIT_DISCRIMINATOR: u8 = 2;
pub const WITHDRAW_DISCRIMINATOR: u8 = 3;
pub const SWAP_DISCRIMINATOR: u8 = 4;
pub const GET_POOL_INFO_DISCRIMINATOR: u8 = 7;
pub const GET_POOL_PAUSE_STATUS_DISCRIMINATOR: u8 = 8;
pub const GET_LIQUIDITY_INFO_DISCRIMINATOR: u8 = 9;
pub const GET_FEE_INFO_DISCRIMINATOR: u8 = 10;
pub const CONSOLIDATE_POOL_FEES_DISCRIMINATOR: u8 = 17;
pub const PAUSE_POOL_DISCRIMINATOR: u8 = 19;
pub const UNPAUSE_POOL_DISCRIMINATOR: u8 = 20;
pub const SET_SWAP_OWNER_ONLY_DISCRIMINATOR: u8 = 21;

// FEES (lamports)
pub const REGISTRATION_FEE: u64 = 1_150_000_000;
pub const DEPOSIT_WITHDRAWAL_FEE: u64 = 1_300_000;
pub const SWAP_CONTRACT_FEE: u64 = 12_500;

/// Upper bound on pools per consolidation instruction
pub const MAX_POOLS_PER_CONSOLIDATION: usize = 20;

// POOL ACCOUNT LAYOUT
pub const PUBKEY_LEN: usize = 32;
pub const POOL_STATE_LEN: usize = 7 * PUBKEY_LEN // keys
    + 4 * 8 // ratio + liquidity
    + 5 // bump seeds
    + 1 // flags
    + 2 * 8 // fee config
    + 4 * 8 // token fees
    + 3 * 8 // sol fees
    + 8 // last consolidation timestamp
    + 2 * 8; // consolidation counters

// PRECISION
pub const MAX_ASSET_DECIMALS: u8 = 9;
pub const DEFAULT_FALLBACK_DECIMALS: u8 = 6;
pub const DEFAULT_MAX_DISPLAY_DECIMALS: u32 = 6;
