use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::*,
    error::{FixedRatioError, Result, domain},
};

/// Status byte of a pool. Bits this crate does not know about are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct PoolFlags(u8);

impl PoolFlags {
    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    pub fn one_to_many_ratio(&self) -> bool {
        self.contains(FLAG_ONE_TO_MANY_RATIO)
    }

    pub fn liquidity_paused(&self) -> bool {
        self.contains(FLAG_LIQUIDITY_PAUSED)
    }

    pub fn swaps_paused(&self) -> bool {
        self.contains(FLAG_SWAPS_PAUSED)
    }

    pub fn withdrawal_protection(&self) -> bool {
        self.contains(FLAG_WITHDRAWAL_PROTECTION)
    }

    pub fn single_lp_token(&self) -> bool {
        self.contains(FLAG_SINGLE_LP_TOKEN)
    }

    pub fn swap_for_owners_only(&self) -> bool {
        self.contains(FLAG_SWAP_FOR_OWNERS_ONLY)
    }

    pub fn exact_exchange_required(&self) -> bool {
        self.contains(FLAG_EXACT_EXCHANGE_REQUIRED)
    }

    /// Bits set on-chain that have no accessor here
    pub fn unknown_bits(&self) -> u8 {
        self.0 & !KNOWN_FLAGS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct PoolBumps {
    pub pool_authority: u8,
    pub token_a_vault: u8,
    pub token_b_vault: u8,
    pub lp_token_a_mint: u8,
    pub lp_token_b_mint: u8,
}

/// Decoded pool state account
#[derive(Debug, Clone, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct PoolRecord {
    /// Account address, `Pubkey::default()` until attached with [`PoolRecord::with_address`]
    #[borsh(skip)]
    pub address: Pubkey,

    pub owner: Pubkey,

    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub lp_token_a_mint: Pubkey,
    pub lp_token_b_mint: Pubkey,

    // ratio in base units
    pub ratio_a_numerator: u64,
    pub ratio_b_denominator: u64,

    pub total_token_a_liquidity: u64,
    pub total_token_b_liquidity: u64,

    pub bumps: PoolBumps,
    pub flags: PoolFlags,

    // fee config (lamports)
    pub contract_liquidity_fee: u64,
    pub swap_contract_fee: u64,

    // token fees
    pub collected_fees_token_a: u64,
    pub collected_fees_token_b: u64,
    pub total_fees_withdrawn_token_a: u64,
    pub total_fees_withdrawn_token_b: u64,

    // sol fees
    pub collected_liquidity_fees: u64,
    pub collected_swap_contract_fees: u64,
    pub total_sol_fees_collected: u64,

    pub last_consolidation_timestamp: i64,
    pub total_consolidations: u64,
    pub total_fees_consolidated: u64,

    /// Bytes past the known layout, appended by newer program versions
    #[borsh(skip)]
    pub trailing: Vec<u8>,
}

// (field, width) in account order, must sum to POOL_STATE_LEN
const POOL_STATE_FIELDS: &[(&str, usize)] = &[
    ("owner", PUBKEY_LEN),
    ("token_a_mint", PUBKEY_LEN),
    ("token_b_mint", PUBKEY_LEN),
    ("token_a_vault", PUBKEY_LEN),
    ("token_b_vault", PUBKEY_LEN),
    ("lp_token_a_mint", PUBKEY_LEN),
    ("lp_token_b_mint", PUBKEY_LEN),
    ("ratio_a_numerator", 8),
    ("ratio_b_denominator", 8),
    ("total_token_a_liquidity", 8),
    ("total_token_b_liquidity", 8),
    ("pool_authority_bump_seed", 1),
    ("token_a_vault_bump_seed", 1),
    ("token_b_vault_bump_seed", 1),
    ("lp_token_a_mint_bump_seed", 1),
    ("lp_token_b_mint_bump_seed", 1),
    ("flags", 1),
    ("contract_liquidity_fee", 8),
    ("swap_contract_fee", 8),
    ("collected_fees_token_a", 8),
    ("collected_fees_token_b", 8),
    ("total_fees_withdrawn_token_a", 8),
    ("total_fees_withdrawn_token_b", 8),
    ("collected_liquidity_fees", 8),
    ("collected_swap_contract_fees", 8),
    ("total_sol_fees_collected", 8),
    ("last_consolidation_timestamp", 8),
    ("total_consolidations", 8),
    ("total_fees_consolidated", 8),
];

/// First field of the layout that does not fit in `len` bytes
fn truncated_at(len: usize) -> FixedRatioError {
    let mut offset = 0;
    for &(field, width) in POOL_STATE_FIELDS {
        if offset + width > len {
            return FixedRatioError::TruncatedData {
                field,
                needed: width,
                remaining: len - offset,
            };
        }
        offset += width;
    }

    FixedRatioError::TruncatedData {
        field: "pool_state",
        needed: POOL_STATE_LEN,
        remaining: len,
    }
}

impl PoolRecord {
    /// Decode a pool state account.
    ///
    /// An empty or all-zero blob is reported as [`FixedRatioError::UninitializedAccount`]
    /// rather than as truncation. A short blob fails before any field is read.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.iter().all(|byte| *byte == 0) {
            return Err(FixedRatioError::UninitializedAccount);
        }
        if data.len() < POOL_STATE_LEN {
            return Err(truncated_at(data.len()));
        }

        let mut rest = data;
        let mut record = Self::deserialize(&mut rest)
            .map_err(|e| domain(format!("invalid pool state: {}", e)))?;
        record.trailing = rest.to_vec();

        Ok(record)
    }

    pub fn with_address(mut self, address: Pubkey) -> Self {
        self.address = address;
        self
    }

    /// Inverse of [`PoolRecord::decode`]; `address` is not part of the account data.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = borsh::to_vec(self)
            .map_err(|e| domain(format!("cannot serialize pool state: {}", e)))?;
        data.extend_from_slice(&self.trailing);
        Ok(data)
    }

    pub fn contains_mint(&self, mint: &Pubkey) -> bool {
        *mint == self.token_a_mint || *mint == self.token_b_mint
    }

    /// The pool's other mint, `None` if `mint` is not part of the pool
    pub fn counterpart_mint(&self, mint: &Pubkey) -> Option<Pubkey> {
        if *mint == self.token_a_mint {
            Some(self.token_b_mint)
        } else if *mint == self.token_b_mint {
            Some(self.token_a_mint)
        } else {
            None
        }
    }

    pub fn is_paused(&self) -> bool {
        self.flags.liquidity_paused() || self.flags.swaps_paused()
    }

    /// SOL fees collected but not yet consolidated into the treasury
    pub fn pending_sol_fees(&self) -> u64 {
        self.total_sol_fees_collected
            .saturating_sub(self.total_fees_consolidated)
    }

    /// (liquidity operations, swap operations) since the last consolidation
    pub fn operations_since_consolidation(&self) -> (u64, u64) {
        (
            self.collected_liquidity_fees / DEPOSIT_WITHDRAWAL_FEE,
            self.collected_swap_contract_fees / SWAP_CONTRACT_FEE,
        )
    }
}
