use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Permanent delegate extension data for mints (32 bytes).
///
/// The delegate may transfer or burn tokens from any account of the mint.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PermanentDelegate {
    pub delegate: Option<Address>,
}

impl ExtensionValue for PermanentDelegate {
    const TYPE: ExtensionType = ExtensionType::PermanentDelegate;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            delegate: reader.read_optional_nonzero_address()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.delegate.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn zeroed_delegate_is_none() {
        let delegate = unpack_value::<PermanentDelegate>(&[0u8; 32]).unwrap();
        assert_eq!(delegate.delegate, None);

        let delegate = unpack_value::<PermanentDelegate>(&[3u8; 32]).unwrap();
        assert_eq!(delegate.delegate, Some(Address::new_from_array([3u8; 32])));
    }
}
