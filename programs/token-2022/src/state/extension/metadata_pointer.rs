use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Metadata pointer extension data for mints (64 bytes).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MetadataPointer {
    /// Authority that can set the metadata address
    pub authority: Option<Address>,
    /// Account address that holds the metadata
    pub metadata_address: Option<Address>,
}

impl ExtensionValue for MetadataPointer {
    const TYPE: ExtensionType = ExtensionType::MetadataPointer;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            metadata_address: reader.read_optional_nonzero_address()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_optional_nonzero_address(self.metadata_address.as_ref());
    }
}
