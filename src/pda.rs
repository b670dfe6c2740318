use solana_sdk::{
    bpf_loader_upgradeable,
    pubkey::{MAX_SEED_LEN, MAX_SEEDS, Pubkey},
};

use crate::{
    constants::*,
    error::{FixedRatioError, Result, domain},
    pool_state::PoolRecord,
};

/// A program derived address together with the bump seed that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Find the canonical program derived address for `seeds`.
///
/// Bumps are scanned from 255 downwards; the first hash that is off the ed25519
/// curve wins, exactly as the program does when it creates the account.
pub fn derive(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<DerivedAddress> {
    // one slot is reserved for the bump
    if seeds.len() >= MAX_SEEDS {
        return Err(domain(format!(
            "{} seeds given, at most {} allowed",
            seeds.len(),
            MAX_SEEDS - 1
        )));
    }
    if let Some(seed) = seeds.iter().find(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(domain(format!(
            "seed of {} bytes exceeds {} bytes",
            seed.len(),
            MAX_SEED_LEN
        )));
    }

    Pubkey::try_find_program_address(seeds, program_id)
        .map(|(address, bump)| DerivedAddress { address, bump })
        .ok_or(FixedRatioError::AddressDerivationExhausted {
            program_id: *program_id,
        })
}

/// Token pair in the order the program stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPair {
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub ratio_a_numerator: u64,
    pub ratio_b_denominator: u64,
    /// True when the caller's A/B labels were swapped
    pub swapped: bool,
}

/// Order the mints by their bytes. Ratios travel with their mint, so
/// `ratio_a_numerator` always prices `token_a_mint`.
pub fn normalize_pair(
    mint_a: Pubkey,
    mint_b: Pubkey,
    ratio_a: u64,
    ratio_b: u64,
) -> NormalizedPair {
    if mint_a <= mint_b {
        NormalizedPair {
            token_a_mint: mint_a,
            token_b_mint: mint_b,
            ratio_a_numerator: ratio_a,
            ratio_b_denominator: ratio_b,
            swapped: false,
        }
    } else {
        NormalizedPair {
            token_a_mint: mint_b,
            token_b_mint: mint_a,
            ratio_a_numerator: ratio_b,
            ratio_b_denominator: ratio_a,
            swapped: true,
        }
    }
}

pub fn pool_state_address(
    program_id: &Pubkey,
    pool_state_seed: &[u8],
    pair: &NormalizedPair,
) -> Result<DerivedAddress> {
    derive(
        program_id,
        &[
            pool_state_seed,
            pair.token_a_mint.as_ref(),
            pair.token_b_mint.as_ref(),
            &pair.ratio_a_numerator.to_le_bytes(),
            &pair.ratio_b_denominator.to_le_bytes(),
        ],
    )
}

pub fn token_a_vault_address(program_id: &Pubkey, pool_state: &Pubkey) -> Result<DerivedAddress> {
    derive(program_id, &[TOKEN_A_VAULT_SEED, pool_state.as_ref()])
}

pub fn token_b_vault_address(program_id: &Pubkey, pool_state: &Pubkey) -> Result<DerivedAddress> {
    derive(program_id, &[TOKEN_B_VAULT_SEED, pool_state.as_ref()])
}

pub fn lp_token_a_mint_address(program_id: &Pubkey, pool_state: &Pubkey) -> Result<DerivedAddress> {
    derive(program_id, &[LP_TOKEN_A_MINT_SEED, pool_state.as_ref()])
}

pub fn lp_token_b_mint_address(program_id: &Pubkey, pool_state: &Pubkey) -> Result<DerivedAddress> {
    derive(program_id, &[LP_TOKEN_B_MINT_SEED, pool_state.as_ref()])
}

pub fn main_treasury_address(program_id: &Pubkey) -> Result<DerivedAddress> {
    derive(program_id, &[MAIN_TREASURY_SEED])
}

pub fn system_state_address(program_id: &Pubkey) -> Result<DerivedAddress> {
    derive(program_id, &[SYSTEM_STATE_SEED])
}

/// Program data account of the upgradeable loader, holds the upgrade authority
pub fn program_data_address(program_id: &Pubkey) -> Result<DerivedAddress> {
    derive(&bpf_loader_upgradeable::id(), &[program_id.as_ref()])
}

/// Associated token account of `owner` for an SPL token `mint`
pub fn user_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        owner,
        mint,
        &spl_token::ID,
    )
}

/// Every derived account of one pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolAddresses {
    pub pair: NormalizedPair,
    pub pool_state: DerivedAddress,
    pub token_a_vault: DerivedAddress,
    pub token_b_vault: DerivedAddress,
    pub lp_token_a_mint: DerivedAddress,
    pub lp_token_b_mint: DerivedAddress,
    pub system_state: DerivedAddress,
    pub main_treasury: DerivedAddress,
}

impl PoolAddresses {
    /// Derive all pool accounts. Mint order does not matter, see [`normalize_pair`].
    pub fn derive(
        program_id: &Pubkey,
        pool_state_seed: &[u8],
        mint_a: Pubkey,
        mint_b: Pubkey,
        ratio_a: u64,
        ratio_b: u64,
    ) -> Result<Self> {
        let pair = normalize_pair(mint_a, mint_b, ratio_a, ratio_b);
        let pool_state = pool_state_address(program_id, pool_state_seed, &pair)?;

        Ok(Self {
            pair,
            token_a_vault: token_a_vault_address(program_id, &pool_state.address)?,
            token_b_vault: token_b_vault_address(program_id, &pool_state.address)?,
            lp_token_a_mint: lp_token_a_mint_address(program_id, &pool_state.address)?,
            lp_token_b_mint: lp_token_b_mint_address(program_id, &pool_state.address)?,
            system_state: system_state_address(program_id)?,
            main_treasury: main_treasury_address(program_id)?,
            pool_state,
        })
    }

    /// Re-derive the addresses of an already decoded pool
    pub fn for_record(
        program_id: &Pubkey,
        pool_state_seed: &[u8],
        record: &PoolRecord,
    ) -> Result<Self> {
        Self::derive(
            program_id,
            pool_state_seed,
            record.token_a_mint,
            record.token_b_mint,
            record.ratio_a_numerator,
            record.ratio_b_denominator,
        )
    }

    /// True when the record's stored accounts and bumps agree with these derivations
    pub fn matches_record(&self, record: &PoolRecord) -> bool {
        let address_matches =
            record.address == Pubkey::default() || record.address == self.pool_state.address;

        address_matches
            && record.token_a_vault == self.token_a_vault.address
            && record.token_b_vault == self.token_b_vault.address
            && record.lp_token_a_mint == self.lp_token_a_mint.address
            && record.lp_token_b_mint == self.lp_token_b_mint.address
            && record.bumps.pool_authority == self.pool_state.bump
            && record.bumps.token_a_vault == self.token_a_vault.bump
            && record.bumps.token_b_vault == self.token_b_vault.bump
            && record.bumps.lp_token_a_mint == self.lp_token_a_mint.bump
            && record.bumps.lp_token_b_mint == self.lp_token_b_mint.bump
    }
}
