use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Group member pointer extension data for mints (64 bytes).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GroupMemberPointer {
    /// Authority that can set the group member configurations address
    pub authority: Option<Address>,
    /// Account address that holds the group member configurations
    pub member_address: Option<Address>,
}

impl ExtensionValue for GroupMemberPointer {
    const TYPE: ExtensionType = ExtensionType::GroupMemberPointer;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            member_address: reader.read_optional_nonzero_address()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_optional_nonzero_address(self.member_address.as_ref());
    }
}
