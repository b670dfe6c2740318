use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    conversion::{AssetPrecision, format_display},
    error::{Result, domain},
    pool_state::PoolRecord,
    swap::get_ratio_type,
};

/// Flattened pool view for offline storage and display.
///
/// Keys are base58 strings and integers are decimal strings so the JSON survives
/// consumers that parse numbers as doubles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    #[serde(alias = "pool_address", alias = "poolAddress")]
    pub address: String,
    #[serde(alias = "token_a_mint")]
    pub token_a_mint: String,
    #[serde(alias = "token_b_mint")]
    pub token_b_mint: String,
    #[serde(alias = "token_a_decimals")]
    pub token_a_decimals: u8,
    #[serde(alias = "token_b_decimals")]
    pub token_b_decimals: u8,
    /// At least one side's decimals were assumed, not read from the mint
    #[serde(default, alias = "precision_fallback")]
    pub precision_fallback: bool,
    #[serde(alias = "ratio_a_numerator")]
    pub ratio_a_numerator: String,
    #[serde(alias = "ratio_b_denominator")]
    pub ratio_b_denominator: String,
    #[serde(alias = "ratio_a_display")]
    pub ratio_a_display: String,
    #[serde(alias = "ratio_b_display")]
    pub ratio_b_display: String,
    #[serde(alias = "ratio_type")]
    pub ratio_type: String,
    #[serde(default, alias = "one_to_many_ratio")]
    pub one_to_many_ratio: bool,
    #[serde(default, alias = "liquidity_paused")]
    pub liquidity_paused: bool,
    #[serde(default, alias = "swaps_paused")]
    pub swaps_paused: bool,
    #[serde(alias = "token_a_liquidity")]
    pub token_a_liquidity: String,
    #[serde(alias = "token_b_liquidity")]
    pub token_b_liquidity: String,
    #[serde(default, alias = "pending_sol_fees")]
    pub pending_sol_fees: String,
}

impl PoolSummary {
    pub fn from_record(
        record: &PoolRecord,
        precision_a: &AssetPrecision,
        precision_b: &AssetPrecision,
        max_display_decimals: u32,
    ) -> Result<Self> {
        if precision_a.mint != record.token_a_mint || precision_b.mint != record.token_b_mint {
            return Err(domain(format!(
                "precisions ({}, {}) do not belong to pool mints ({}, {})",
                precision_a.mint, precision_b.mint, record.token_a_mint, record.token_b_mint
            )));
        }

        let display_a = |amount| format_display(amount, precision_a.decimals, max_display_decimals);
        let display_b = |amount| format_display(amount, precision_b.decimals, max_display_decimals);

        Ok(Self {
            address: record.address.to_string(),
            token_a_mint: record.token_a_mint.to_string(),
            token_b_mint: record.token_b_mint.to_string(),
            token_a_decimals: precision_a.decimals,
            token_b_decimals: precision_b.decimals,
            precision_fallback: precision_a.is_fallback() || precision_b.is_fallback(),
            ratio_a_numerator: record.ratio_a_numerator.to_string(),
            ratio_b_denominator: record.ratio_b_denominator.to_string(),
            ratio_a_display: display_a(record.ratio_a_numerator)?,
            ratio_b_display: display_b(record.ratio_b_denominator)?,
            ratio_type: get_ratio_type(
                record.ratio_a_numerator,
                record.ratio_b_denominator,
                precision_a.decimals,
                precision_b.decimals,
            )?
            .short_name()
            .to_string(),
            one_to_many_ratio: record.flags.one_to_many_ratio(),
            liquidity_paused: record.flags.liquidity_paused(),
            swaps_paused: record.flags.swaps_paused(),
            token_a_liquidity: display_a(record.total_token_a_liquidity)?,
            token_b_liquidity: display_b(record.total_token_b_liquidity)?,
            pending_sol_fees: record.pending_sol_fees().to_string(),
        })
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("Failed to serialize pool summary")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let summary: Self =
            serde_json::from_str(json).context("Failed to parse stored pool summary")?;
        summary
            .pool_address()
            .context("Stored pool summary has an invalid address")?;
        Ok(summary)
    }

    pub fn pool_address(&self) -> Result<Pubkey> {
        parse_key(&self.address, "pool address")
    }

    pub fn mints(&self) -> Result<(Pubkey, Pubkey)> {
        Ok((
            parse_key(&self.token_a_mint, "token A mint")?,
            parse_key(&self.token_b_mint, "token B mint")?,
        ))
    }

    /// Exact ratio in base units
    pub fn ratio(&self) -> Result<(u64, u64)> {
        let parse = |value: &str, what: &str| {
            value
                .parse::<u64>()
                .map_err(|e| domain(format!("invalid {} `{}`: {}", what, value, e)))
        };
        Ok((
            parse(&self.ratio_a_numerator, "ratio A")?,
            parse(&self.ratio_b_denominator, "ratio B")?,
        ))
    }
}

fn parse_key(value: &str, what: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|e| domain(format!("invalid {} `{}`: {}", what, value, e)))
}
