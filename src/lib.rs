//! # Fixed Ratio Trading SDK
//!
//! A client-side SDK for Fixed Ratio Trading pools on Solana. Pools exchange two tokens at a
//! ratio fixed at creation, so every quote is exact arithmetic over the stored ratio. The SDK
//! performs no network I/O: the caller fetches account data and submits transactions, the SDK
//! does everything in between.
//!
//! 1. **Pool state codec**: decodes raw pool account bytes into a [`PoolRecord`]
//! 2. **Conversion engine**: moves amounts between display units and base units
//! 3. **Address deriver**: computes every program derived address of a pool
//! 4. **Instruction encoder (`_ix`)**: returns [`InstructionPlan`]s, convertible into `Instruction`
//!
//! ## 🚀 Quick Start
//!
//! ### Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fixed-ratio-sdk = "0.1.0"
//! ```
//!
//! ### Basic Setup
//!
//! ```rust
//! use fixed_ratio_sdk::{FixedRatioSDK, SdkConfig};
//! use rust_decimal::Decimal;
//! use solana_sdk::pubkey::Pubkey;
//!
//! let sdk = FixedRatioSDK::new(SdkConfig::default())?;
//!
//! // Decimals come from the mint accounts the caller fetched
//! let sol = sdk.precision(Pubkey::new_unique(), Some(9))?;
//! let usdt = sdk.precision(Pubkey::new_unique(), Some(6))?;
//!
//! // 1 SOL = 160 USDT
//! let user = Pubkey::new_unique();
//! let plan = sdk.initialize_pool_ix(user, &sol, Decimal::ONE, &usdt, Decimal::from(160))?;
//! assert_eq!(plan.accounts.len(), 12);
//! assert_eq!(plan.signers(), vec![user]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## ⚠️ Important: Precision Handling
//!
//! **Ratios and amounts are stored on chain in base units.** A display amount is converted with
//! the decimals of its own mint, never the decimals of the other side of the pool.
//!
//! - Display to base units rounds half away from zero
//! - Swap outputs are floored, exactly as the program floors them
//! - When a mint's decimals are unknown, [`FixedRatioSDK::precision`] falls back to the
//!   configured default and marks the result with [`PrecisionSource::Fallback`]
//!
//! ## ⚠️ Important: Token Ordering
//!
//! **The program stores the pair with the lexicographically smaller mint as token A.** The
//! initialize pool encoder reorders caller input and moves each ratio with its mint, so
//! `(SOL, 1, USDT, 160)` and `(USDT, 160, SOL, 1)` produce identical instructions.
//!
//! ## 📖 Usage Patterns
//!
//! #### Decoding and Quoting
//!
//! ```rust,ignore
//! let account = rpc_client.get_account(&pool_address)?;
//! let pool = sdk.decode_pool(pool_address, &account.data)?;
//!
//! // 0.5 SOL in, floored USDT out
//! let out = sdk.quote(&pool, &sol, &usdt, Decimal::new(5, 1))?;
//! ```
//!
//! #### Swapping
//!
//! ```rust,ignore
//! let plan = sdk.swap_ix(&pool, user_pubkey, &sol, Decimal::new(5, 1))?;
//! let tx = Transaction::new_signed_with_payer(
//!     &[plan.into()],
//!     Some(&user_pubkey),
//!     &[&user_keypair],
//!     recent_blockhash,
//! );
//! ```
//!
//! ## 🔧 API Reference
//!
//! ### FixedRatioSDK Methods
//!
//! - **`decode_pool(address, data)`** - Decode a pool account
//! - **`pool_addresses(mint_a, mint_b, ratio_a, ratio_b)`** - Derive every account of a pool
//! - **`precision(mint, decimals)`** - Precision of a mint, with fallback
//! - **`quote(pool, input, output, amount_in)`** - Floored swap output in display units
//! - **`summarize(pool, token_a, token_b)`** - Flattened JSON-friendly [`PoolSummary`]
//!
//! #### Instruction Functions (`_ix`)
//!
//! - **`initialize_program_ix(program_authority)`**
//! - **`initialize_pool_ix(user, token_a, ratio_a, token_b, ratio_b)`**
//! - **`deposit_ix(pool, user, token, amount)`**
//! - **`withdraw_ix(pool, user, token, lp_amount)`**
//! - **`swap_ix(pool, user, input, amount_in)`**
//! - **`pause_pool_ix(pool, pool_owner, flags)`** / **`unpause_pool_ix(pool, pool_owner, flags)`**
//! - **`set_swap_owner_only_ix(pool, contract_owner, enable_restriction, designated_owner)`**
//! - **`consolidate_pool_fees_ix(pool_states)`**
//! - **`pool_view_ix(pool, operation)`**
//!
//! Base unit variants taking the `*Params` structs live on [`PoolInstructionBuilder`].
//!
//! ## 📄 License
//!
//! MIT License - see LICENSE file for details.
//!
//! ---
//!
//! **Note**: Always test thoroughly on devnet before using on mainnet.

mod account_metas;
mod config;
pub mod constants;
mod conversion;
mod error;
mod instructions;
mod params;
pub mod pda;
mod pool_state;
mod sdk;
mod summary;
mod swap;

pub use sdk::FixedRatioSDK;

pub use config::SdkConfig;
pub use error::{FixedRatioError, Result};

pub use conversion::{AssetPrecision, PrecisionSource, format_display, to_basis_points, to_display};
pub use instructions::{InstructionPlan, PoolInstructionBuilder, PoolOperation, PoolRequest};
pub use params::{
    DepositParams, InitializePoolParams, InitializeProgramParams, PausePoolParams,
    SetSwapOwnerOnlyParams, SwapParams, WithdrawParams,
};
pub use pda::{DerivedAddress, NormalizedPair, PoolAddresses};
pub use pool_state::{PoolBumps, PoolFlags, PoolRecord};
pub use summary::PoolSummary;
pub use swap::{
    RatioType, SwapDirection, SwapQuote, expected_one_to_many_flag, get_ratio_type, quote,
    quote_basis_points, validate_one_to_many_pattern,
};

pub use constants::FIXED_RATIO_PROGRAM_ID;
