use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedRatioError {
    /// Fewer bytes remain than the next field of the layout requires
    #[error("Truncated account data: field `{field}` needs {needed} bytes, {remaining} remaining")]
    TruncatedData {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// The account exists but every byte is zero
    #[error("Account is not initialized (all bytes are zero)")]
    UninitializedAccount,

    #[error("Value out of domain: {0}")]
    Domain(String),

    #[error("No valid bump seed found for program {program_id}")]
    AddressDerivationExhausted { program_id: Pubkey },

    #[error("Invalid instruction: {0}")]
    EncodingValidation(String),
}

pub type Result<T> = std::result::Result<T, FixedRatioError>;

pub(crate) fn domain(message: impl Into<String>) -> FixedRatioError {
    FixedRatioError::Domain(message.into())
}

pub(crate) fn invalid(message: impl Into<String>) -> FixedRatioError {
    FixedRatioError::EncodingValidation(message.into())
}
