use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Indicates that the tokens from this mint require permissioned burn
/// (32 bytes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PermissionedBurnConfig {
    /// Authority that is required for burning
    pub authority: Address,
}

/// Indicates that the tokens from this account belong to a permissioned
/// burn mint (no data).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermissionedBurnAccount;

impl ExtensionValue for PermissionedBurnConfig {
    const TYPE: ExtensionType = ExtensionType::PermissionedBurn;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_address()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_address(&self.authority);
    }
}

impl ExtensionValue for PermissionedBurnAccount {
    const TYPE: ExtensionType = ExtensionType::PermissionedBurnAccount;

    #[inline(always)]
    fn read(_reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self)
    }

    #[inline(always)]
    fn write(&self, _dst: &mut Vec<u8>) {}
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn zero_authority_is_kept_as_address() {
        let config = unpack_value::<PermissionedBurnConfig>(&[0u8; 32]).unwrap();
        assert_eq!(config.authority, Address::new_from_array([0u8; 32]));
    }

    #[test]
    fn account_marker_has_no_payload() {
        assert!(unpack_value::<PermissionedBurnAccount>(&[]).is_ok());
        assert!(matches!(
            unpack_value::<PermissionedBurnAccount>(&[0]),
            Err(TokenCodecError::InvalidExtensionLength { found: 1, .. })
        ));
    }
}
