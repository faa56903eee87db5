use {
    super::{ExtensionType, ExtensionValue},
    crate::{codec::ByteReader, error::TokenCodecError},
};

/// Indicates that the account owner cannot be changed (no data).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImmutableOwner;

impl ExtensionValue for ImmutableOwner {
    const TYPE: ExtensionType = ExtensionType::ImmutableOwner;

    #[inline(always)]
    fn read(_reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self)
    }

    #[inline(always)]
    fn write(&self, _dst: &mut Vec<u8>) {}
}
