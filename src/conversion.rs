use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::MAX_ASSET_DECIMALS,
    error::{Result, domain},
};

/// Where a precision value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionSource {
    /// Read from the mint account by the caller
    Verified,
    /// Assumed because the mint could not be read; amounts may be off by powers of ten
    Fallback,
}

/// Decimal places of one mint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPrecision {
    pub mint: Pubkey,
    pub decimals: u8,
    pub source: PrecisionSource,
}

impl AssetPrecision {
    pub fn verified(mint: Pubkey, decimals: u8) -> Result<Self> {
        check_precision(decimals)?;
        Ok(Self {
            mint,
            decimals,
            source: PrecisionSource::Verified,
        })
    }

    /// Precision assumed for a mint whose decimals are unknown.
    ///
    /// The result is flagged as [`PrecisionSource::Fallback`] so callers can warn
    /// the user instead of presenting the amounts as exact.
    pub fn fallback(mint: Pubkey, decimals: u8) -> Result<Self> {
        check_precision(decimals)?;
        log::warn!(
            "Decimals unknown for mint {}, assuming {} (fallback)",
            mint,
            decimals
        );
        Ok(Self {
            mint,
            decimals,
            source: PrecisionSource::Fallback,
        })
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PrecisionSource::Fallback
    }

    pub fn to_basis_points(&self, display: Decimal) -> Result<u64> {
        to_basis_points(display, self.decimals)
    }

    pub fn to_display(&self, basis_points: u64) -> Result<Decimal> {
        to_display(basis_points, self.decimals)
    }
}

pub(crate) fn check_precision(precision: u8) -> Result<()> {
    if precision > MAX_ASSET_DECIMALS {
        return Err(domain(format!(
            "precision {} is outside 0..={}",
            precision, MAX_ASSET_DECIMALS
        )));
    }
    Ok(())
}

pub(crate) fn scale_factor(precision: u8) -> u64 {
    10u64.pow(u32::from(precision))
}

/// Convert a display amount into the asset's smallest unit.
///
/// Rounds half away from zero: `0.0000005` at 6 decimals becomes `1`.
pub fn to_basis_points(display: Decimal, precision: u8) -> Result<u64> {
    check_precision(precision)?;
    if display.is_sign_negative() && !display.is_zero() {
        return Err(domain(format!("amount {} is negative", display)));
    }

    let scaled = display
        .checked_mul(Decimal::from(scale_factor(precision)))
        .ok_or_else(|| domain(format!("amount {} overflows at {} decimals", display, precision)))?;

    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or_else(|| domain(format!("amount {} does not fit in u64 base units", display)))
}

/// Convert smallest-unit amount into an exact display amount.
pub fn to_display(basis_points: u64, precision: u8) -> Result<Decimal> {
    check_precision(precision)?;
    Decimal::try_from_i128_with_scale(i128::from(basis_points), u32::from(precision))
        .map_err(|e| domain(format!("cannot represent {}: {}", basis_points, e)))
}

/// Human readable amount, truncated to `min(precision, max_display_decimals)` places.
pub fn format_display(basis_points: u64, precision: u8, max_display_decimals: u32) -> Result<String> {
    let exact = to_display(basis_points, precision)?;
    let places = u32::from(precision).min(max_display_decimals);
    Ok(exact
        .round_dp_with_strategy(places, RoundingStrategy::ToZero)
        .normalize()
        .to_string())
}
