use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Group pointer extension data for mints (64 bytes).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GroupPointer {
    /// Authority that can set the group configurations address
    pub authority: Option<Address>,
    /// Account address that holds the group configurations
    pub group_address: Option<Address>,
}

impl ExtensionValue for GroupPointer {
    const TYPE: ExtensionType = ExtensionType::GroupPointer;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            group_address: reader.read_optional_nonzero_address()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_optional_nonzero_address(self.group_address.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn zeroed_half_decodes_as_none() {
        let mut data = [0u8; 64];
        data[32..].copy_from_slice(&[8u8; 32]);

        let pointer = unpack_value::<GroupPointer>(&data).unwrap();
        assert_eq!(pointer.authority, None);
        assert_eq!(
            pointer.group_address,
            Some(Address::new_from_array([8u8; 32]))
        );

        let mut encoded = Vec::new();
        pointer.write(&mut encoded);
        assert_eq!(encoded, data);
    }
}
