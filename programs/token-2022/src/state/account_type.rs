/// Different kinds of accounts. Note that `Mint`, `TokenAccount`, and `Multisig`
/// types are determined exclusively by the size of the account, and are not
/// included in the account data. `AccountType` is only included if extensions
/// have been initialized.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccountType {
    /// Marker for 0 data
    Uninitialized,
    /// Mint account with additional extensions
    Mint,
    /// Token holding account with additional extensions
    Account,
}

impl TryFrom<u8> for AccountType {
    type Error = u8;

    /// Returns the unknown byte back on failure so callers can report it.
    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountType::Uninitialized),
            1 => Ok(AccountType::Mint),
            2 => Ok(AccountType::Account),
            _ => Err(value),
        }
    }
}

impl From<AccountType> for u8 {
    fn from(value: AccountType) -> Self {
        value as u8
    }
}
