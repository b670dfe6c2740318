use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use solana_sdk::pubkey::{MAX_SEED_LEN, Pubkey};

use crate::constants::{
    DEFAULT_FALLBACK_DECIMALS, DEFAULT_MAX_DISPLAY_DECIMALS, FIXED_RATIO_PROGRAM_ID,
    MAX_ASSET_DECIMALS, POOL_STATE_SEED,
};

/// Deployment settings, built once by the caller and handed to [`crate::FixedRatioSDK`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub program_id: Pubkey,
    /// Tag of the pool state seeds; some program builds use `pool_state_v2`
    pub pool_state_seed: Vec<u8>,
    /// Decimals assumed when a mint's precision is unknown
    pub fallback_decimals: u8,
    pub max_display_decimals: u32,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            program_id: FIXED_RATIO_PROGRAM_ID,
            pool_state_seed: POOL_STATE_SEED.to_vec(),
            fallback_decimals: DEFAULT_FALLBACK_DECIMALS,
            max_display_decimals: DEFAULT_MAX_DISPLAY_DECIMALS,
        }
    }
}

// wire shape of a JSON config, every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSdkConfig {
    program_id: Option<String>,
    pool_state_seed: Option<String>,
    fallback_decimals: Option<u8>,
    max_display_decimals: Option<u32>,
}

impl SdkConfig {
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_pool_state_seed(mut self, seed: &[u8]) -> Self {
        self.pool_state_seed = seed.to_vec();
        self
    }

    /// Load from JSON, e.g. `{"program_id": "...", "pool_state_seed": "pool_state_v2"}`.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSdkConfig =
            serde_json::from_str(json).context("Failed to parse SDK config JSON")?;

        let mut config = Self::default();
        if let Some(program_id) = raw.program_id {
            config.program_id = Pubkey::from_str(&program_id)
                .with_context(|| format!("Invalid program id `{}`", program_id))?;
        }
        if let Some(seed) = raw.pool_state_seed {
            config.pool_state_seed = seed.into_bytes();
        }
        if let Some(decimals) = raw.fallback_decimals {
            config.fallback_decimals = decimals;
        }
        if let Some(places) = raw.max_display_decimals {
            config.max_display_decimals = places;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_state_seed.is_empty() || self.pool_state_seed.len() > MAX_SEED_LEN {
            bail!(
                "Pool state seed must be 1..={} bytes, got {}",
                MAX_SEED_LEN,
                self.pool_state_seed.len()
            );
        }
        if self.fallback_decimals > MAX_ASSET_DECIMALS {
            bail!(
                "Fallback decimals must be at most {}, got {}",
                MAX_ASSET_DECIMALS,
                self.fallback_decimals
            );
        }
        Ok(())
    }
}
