use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Pausable extension data for mints (33 bytes).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PausableConfig {
    /// Authority that can pause or resume activity on the mint
    pub authority: Option<Address>,
    /// Whether minting / transferring / burning tokens is paused
    pub paused: bool,
}

/// Indicates that the tokens from this account belong to a pausable mint
/// (no data).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PausableAccount;

impl ExtensionValue for PausableConfig {
    const TYPE: ExtensionType = ExtensionType::Pausable;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            paused: reader.read_bool()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_bool(self.paused);
    }
}

impl ExtensionValue for PausableAccount {
    const TYPE: ExtensionType = ExtensionType::PausableAccount;

    #[inline(always)]
    fn read(_reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self)
    }

    #[inline(always)]
    fn write(&self, _dst: &mut Vec<u8>) {}
}
