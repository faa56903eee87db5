use {
    super::{ExtensionType, ExtensionValue},
    crate::{codec::ByteReader, error::TokenCodecError},
};

/// Indicates that the tokens from this mint can't be transferred (no data).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonTransferable;

/// Indicates that the tokens from this account belong to a non-transferable
/// mint (no data).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonTransferableAccount;

impl ExtensionValue for NonTransferable {
    const TYPE: ExtensionType = ExtensionType::NonTransferable;

    #[inline(always)]
    fn read(_reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self)
    }

    #[inline(always)]
    fn write(&self, _dst: &mut Vec<u8>) {}
}

impl ExtensionValue for NonTransferableAccount {
    const TYPE: ExtensionType = ExtensionType::NonTransferableAccount;

    #[inline(always)]
    fn read(_reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self)
    }

    #[inline(always)]
    fn write(&self, _dst: &mut Vec<u8>) {}
}
