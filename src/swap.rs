use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

use crate::{
    conversion::{check_precision, scale_factor, to_basis_points, to_display},
    error::{Result, domain},
    pool_state::PoolRecord,
};

pub fn floor_div(amount: u128, numerator: u128, denominator: u128) -> Option<u128> {
    amount.checked_mul(numerator)?.checked_div(denominator)
}

/// `floor(amount_in * numerator / denominator)` with a 128-bit intermediate
pub fn quote_basis_points(amount_in: u64, numerator: u64, denominator: u64) -> Result<u64> {
    if denominator == 0 {
        return Err(domain("ratio denominator is zero"));
    }

    let out = floor_div(
        u128::from(amount_in),
        u128::from(numerator),
        u128::from(denominator),
    )
    .ok_or_else(|| domain("swap output overflows"))?;

    u64::try_from(out).map_err(|_| domain(format!("swap output {} does not fit in u64", out)))
}

/// Preview a swap in display units.
///
/// The input is rounded into base units, the output is floored like the program
/// floors it, then shown exactly.
pub fn quote(
    input_display: Decimal,
    input_precision: u8,
    output_precision: u8,
    numerator: u64,
    denominator: u64,
) -> Result<Decimal> {
    let amount_in = to_basis_points(input_display, input_precision)?;
    let amount_out = quote_basis_points(amount_in, numerator, denominator)?;
    to_display(amount_out, output_precision)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    AToB,
    BToA,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    pub direction: SwapDirection,
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
}

impl PoolRecord {
    pub fn swap_direction(&self, input_mint: &Pubkey) -> Result<SwapDirection> {
        if *input_mint == self.token_a_mint {
            Ok(SwapDirection::AToB)
        } else if *input_mint == self.token_b_mint {
            Ok(SwapDirection::BToA)
        } else {
            Err(domain(format!(
                "mint {} is not part of pool {}",
                input_mint, self.address
            )))
        }
    }

    /// Output of swapping `amount_in` base units of `input_mint` at the pool's fixed ratio
    pub fn quote_swap(&self, input_mint: &Pubkey, amount_in: u64) -> Result<SwapQuote> {
        let direction = self.swap_direction(input_mint)?;
        if self.ratio_a_numerator == 0 || self.ratio_b_denominator == 0 {
            return Err(domain(format!("pool {} has a zero ratio side", self.address)));
        }

        // A -> B: in * ratio_b / ratio_a, B -> A: in * ratio_a / ratio_b
        let (output_mint, amount_out) = match direction {
            SwapDirection::AToB => (
                self.token_b_mint,
                quote_basis_points(amount_in, self.ratio_b_denominator, self.ratio_a_numerator)?,
            ),
            SwapDirection::BToA => (
                self.token_a_mint,
                quote_basis_points(amount_in, self.ratio_a_numerator, self.ratio_b_denominator)?,
            ),
        };

        Ok(SwapQuote {
            direction,
            input_mint: *input_mint,
            output_mint,
            amount_in,
            amount_out,
        })
    }

    /// Stored ratio in display units, `(token A side, token B side)`
    pub fn normalized_ratio(
        &self,
        token_a_decimals: u8,
        token_b_decimals: u8,
    ) -> Result<(Decimal, Decimal)> {
        Ok((
            to_display(self.ratio_a_numerator, token_a_decimals)?,
            to_display(self.ratio_b_denominator, token_b_decimals)?,
        ))
    }

    /// Display units of token B paid for one whole token A
    pub fn exchange_rate_display(&self, token_a_decimals: u8, token_b_decimals: u8) -> Result<Decimal> {
        let (a, b) = self.normalized_ratio(token_a_decimals, token_b_decimals)?;
        b.checked_div(a)
            .ok_or_else(|| domain(format!("pool {} has a zero ratio side", self.address)))
    }
}

/// Predicts whether the program sets the one-to-many flag for a pool created
/// with this display ratio. Display only, never an authorization check.
pub fn validate_one_to_many_pattern(ratio_a_display: Decimal, ratio_b_display: Decimal) -> bool {
    let positive = ratio_a_display > Decimal::ZERO && ratio_b_display > Decimal::ZERO;
    let whole = ratio_a_display.fract().is_zero() && ratio_b_display.fract().is_zero();
    let has_one = ratio_a_display == Decimal::ONE || ratio_b_display == Decimal::ONE;

    positive && whole && has_one
}

/// Same rule as [`validate_one_to_many_pattern`] for ratios stored in base units
pub fn expected_one_to_many_flag(
    ratio_a_basis_points: u64,
    ratio_b_basis_points: u64,
    token_a_decimals: u8,
    token_b_decimals: u8,
) -> Result<bool> {
    Ok(validate_one_to_many_pattern(
        to_display(ratio_a_basis_points, token_a_decimals)?,
        to_display(ratio_b_basis_points, token_b_decimals)?,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioType {
    /// Both sides whole, one of them exactly 1: 1:2, 1:100, 1000:1
    SimpleRatio,
    /// One side has a whole part of 1, some side fractional: 1:100.25, 1.5:240
    DecimalRatio,
    /// No side with a whole part of 1: 2.5:3.7, 223.34984:10.2345
    EngineeringRatio,
}

impl RatioType {
    pub fn description(&self) -> &'static str {
        match self {
            RatioType::SimpleRatio => "Simple one-to-many ratio with whole numbers",
            RatioType::DecimalRatio => "Ratio with one side equal to 1 and decimals allowed",
            RatioType::EngineeringRatio => "Complex ratio with arbitrary decimal values",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            RatioType::SimpleRatio => "Simple",
            RatioType::DecimalRatio => "Decimal",
            RatioType::EngineeringRatio => "Engineering",
        }
    }
}

impl std::fmt::Display for RatioType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.short_name(), self.description())
    }
}

/// Ratio expressed as `(value, 10^decimals)` the way the program reads it.
///
/// Values below one whole token that are not already whole are taken as
/// display units from older clients and scaled up.
fn program_units(ratio_basis_points: u64, decimals: u8) -> Result<(u64, u64)> {
    check_precision(decimals)?;
    let factor = scale_factor(decimals);
    let ratio = if factor > 1 && ratio_basis_points < factor && ratio_basis_points % factor != 0 {
        ratio_basis_points.saturating_mul(factor)
    } else {
        ratio_basis_points
    };
    Ok((ratio, factor))
}

/// Classifies a pool ratio with the program's integer arithmetic.
///
/// A side counts as one when its whole-token part is exactly 1, so `1.5:240`
/// is [`RatioType::DecimalRatio`] even though neither side is exactly one.
pub fn get_ratio_type(
    ratio_a_basis_points: u64,
    ratio_b_basis_points: u64,
    token_a_decimals: u8,
    token_b_decimals: u8,
) -> Result<RatioType> {
    let (a, factor_a) = program_units(ratio_a_basis_points, token_a_decimals)?;
    let (b, factor_b) = program_units(ratio_b_basis_points, token_b_decimals)?;

    let whole = a % factor_a == 0 && b % factor_b == 0;
    let has_one = a / factor_a == 1 || b / factor_b == 1;

    Ok(match (has_one, whole) {
        (true, true) => RatioType::SimpleRatio,
        (true, false) => RatioType::DecimalRatio,
        (false, _) => RatioType::EngineeringRatio,
    })
}
