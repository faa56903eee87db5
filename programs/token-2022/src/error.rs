use {
    crate::state::{extension::ExtensionType, AccountType},
    solana_program_error::ProgramError,
    thiserror::Error,
};

/// Errors returned while decoding or encoding Token-2022 account data.
///
/// Every error is deterministic: decoding the same bytes again reproduces
/// the same error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TokenCodecError {
    /// Fewer bytes remain than the field being decoded requires.
    #[error("buffer too short: needed {needed} bytes, {remaining} remaining")]
    BufferTooShort { needed: usize, remaining: usize },

    /// The account data is shorter than the base record, or has a length that
    /// cannot hold an account-type tag.
    #[error("invalid account size: {0} bytes")]
    InvalidAccountSize(usize),

    /// A TLV entry declares more value bytes than remain in the buffer.
    #[error("truncated extension data: type {extension_type} declares {declared} bytes, {remaining} remaining")]
    TruncatedExtensionData {
        extension_type: u16,
        declared: usize,
        remaining: usize,
    },

    /// The account-type tag is zero.
    #[error("account is not initialized")]
    AccountNotInitialized,

    /// The account-type tag is valid but belongs to the other base state.
    #[error("account type mismatch: expected {expected:?}, found {found}")]
    AccountTypeMismatch { expected: AccountType, found: u8 },

    /// The padding between the mint base record and the account-type tag
    /// is not zeroed.
    #[error("mint padding is not zeroed")]
    InvalidPadding,

    /// The account is not owned by the declared program.
    #[error("account is not owned by the declared token program")]
    InvalidAccountOwner,

    /// A C-option discriminant is neither 0 nor 1.
    #[error("invalid option discriminant: {0}")]
    InvalidOptionDiscriminant(u32),

    /// A boolean byte is neither 0 nor 1.
    #[error("invalid boolean value: {0}")]
    InvalidBool(u8),

    /// An account state byte is not a known `AccountState`.
    #[error("invalid account state: {0}")]
    InvalidAccountState(u8),

    /// A length-prefixed string is not valid UTF-8.
    #[error("invalid utf-8 string")]
    InvalidUtf8,

    /// A known extension's TLV length does not match its layout.
    #[error("invalid length for {extension_type:?}: expected {expected}, found {found}")]
    InvalidExtensionLength {
        extension_type: ExtensionType,
        expected: usize,
        found: usize,
    },

    /// An encoded extension value does not fit the 2-byte TLV length field.
    #[error("extension value of {0} bytes exceeds the TLV length limit")]
    ExtensionTooLarge(usize),

    /// Type 0 is reserved for padding and cannot be encoded as an entry.
    #[error("extension type 0 is reserved")]
    ReservedExtensionType,

    /// The extension belongs to the other base state.
    #[error("{extension_type:?} is not valid for a {account_type:?} account")]
    InvalidExtensionAccountType {
        extension_type: ExtensionType,
        account_type: AccountType,
    },

    /// A size was requested by type for a variable-size extension.
    #[error("{0:?} has a variable size")]
    VariableSizeExtension(ExtensionType),

    /// The requested extension is not present in the account data.
    #[error("extension not found")]
    ExtensionNotFound,

    /// A required field of an extension record is missing.
    #[error("{extension_type:?} is missing field `{field}`")]
    MissingExtensionField {
        extension_type: ExtensionType,
        field: String,
    },

    /// A time interval used by an amount transform is negative.
    #[error("invalid timespan: end time before start time")]
    InvalidTimespan,

    /// A UI amount string could not be parsed for the mint's decimals.
    #[error("invalid ui amount: {0}")]
    InvalidUiAmount(String),

    /// A converted amount does not fit in a `u64`.
    #[error("amount overflow")]
    AmountOverflow,

    /// A UI amount cannot be converted back with a zero multiplier.
    #[error("scaled ui amount multiplier is zero")]
    ZeroMultiplier,

    /// A raw `Unparsed` record carries the type of a known extension, so its
    /// bytes would not decode back to the same record.
    #[error("unparsed record uses known extension type {0:?}")]
    UnparsedKnownExtensionType(ExtensionType),
}

impl TokenCodecError {
    /// Stable numeric code used when the error crosses into a
    /// [`ProgramError`].
    pub const fn code(&self) -> u32 {
        match self {
            Self::BufferTooShort { .. } => 0,
            Self::InvalidAccountSize(_) => 1,
            Self::TruncatedExtensionData { .. } => 2,
            Self::AccountNotInitialized => 3,
            Self::AccountTypeMismatch { .. } => 4,
            Self::InvalidPadding => 5,
            Self::InvalidAccountOwner => 6,
            Self::InvalidOptionDiscriminant(_) => 7,
            Self::InvalidBool(_) => 8,
            Self::InvalidAccountState(_) => 9,
            Self::InvalidUtf8 => 10,
            Self::InvalidExtensionLength { .. } => 11,
            Self::ExtensionTooLarge(_) => 12,
            Self::ReservedExtensionType => 13,
            Self::InvalidExtensionAccountType { .. } => 14,
            Self::VariableSizeExtension(_) => 15,
            Self::ExtensionNotFound => 16,
            Self::MissingExtensionField { .. } => 17,
            Self::InvalidTimespan => 18,
            Self::InvalidUiAmount(_) => 19,
            Self::AmountOverflow => 20,
            Self::ZeroMultiplier => 21,
            Self::UnparsedKnownExtensionType(_) => 22,
        }
    }
}

impl From<TokenCodecError> for ProgramError {
    fn from(error: TokenCodecError) -> Self {
        match error {
            TokenCodecError::InvalidAccountOwner => ProgramError::InvalidAccountOwner,
            TokenCodecError::AccountNotInitialized => ProgramError::UninitializedAccount,
            error => ProgramError::Custom(error.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_and_initialization_map_to_builtin_program_errors() {
        assert_eq!(
            ProgramError::from(TokenCodecError::InvalidAccountOwner),
            ProgramError::InvalidAccountOwner
        );
        assert_eq!(
            ProgramError::from(TokenCodecError::AccountNotInitialized),
            ProgramError::UninitializedAccount
        );
    }

    #[test]
    fn codec_errors_map_to_custom_codes() {
        assert_eq!(
            ProgramError::from(TokenCodecError::InvalidTimespan),
            ProgramError::Custom(18)
        );
        assert_eq!(
            ProgramError::from(TokenCodecError::BufferTooShort {
                needed: 8,
                remaining: 2
            }),
            ProgramError::Custom(0)
        );
    }
}
