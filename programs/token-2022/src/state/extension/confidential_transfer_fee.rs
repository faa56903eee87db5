use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, PodElGamalCiphertext, PodElGamalPubkey, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Confidential transfer fee extension data for mints (129 bytes).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ConfidentialTransferFeeConfig {
    /// Optional authority to set the withdraw withheld authority ElGamal key
    pub authority: Option<Address>,
    /// Withheld fees from accounts must be encrypted with this ElGamal key
    pub withdraw_withheld_authority_elgamal_pubkey: PodElGamalPubkey,
    /// If `false`, the harvest of withheld tokens to mint is rejected
    pub harvest_to_mint_enabled: bool,
    /// Withheld confidential transfer fee tokens that have been moved to the
    /// mint for withdrawal
    pub withheld_amount: PodElGamalCiphertext,
}

impl ExtensionValue for ConfidentialTransferFeeConfig {
    const TYPE: ExtensionType = ExtensionType::ConfidentialTransferFeeConfig;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            withdraw_withheld_authority_elgamal_pubkey: PodElGamalPubkey::read(reader)?,
            harvest_to_mint_enabled: reader.read_bool()?,
            withheld_amount: PodElGamalCiphertext::read(reader)?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        self.withdraw_withheld_authority_elgamal_pubkey.write(dst);
        dst.put_bool(self.harvest_to_mint_enabled);
        self.withheld_amount.write(dst);
    }
}

/// Confidential transfer fee extension data for accounts (64 bytes).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ConfidentialTransferFeeAmount {
    /// Amount withheld during confidential transfers, to be harvest to the
    /// mint
    pub withheld_amount: PodElGamalCiphertext,
}

impl ExtensionValue for ConfidentialTransferFeeAmount {
    const TYPE: ExtensionType = ExtensionType::ConfidentialTransferFeeAmount;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            withheld_amount: PodElGamalCiphertext::read(reader)?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        self.withheld_amount.write(dst);
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn fee_config_layout() {
        let config = ConfidentialTransferFeeConfig {
            authority: Some(Address::new_from_array([1u8; 32])),
            withdraw_withheld_authority_elgamal_pubkey: PodElGamalPubkey::new([2u8; 32]),
            harvest_to_mint_enabled: true,
            withheld_amount: PodElGamalCiphertext::new([3u8; 64]),
        };
        let mut data = Vec::new();
        config.write(&mut data);

        assert_eq!(data.len(), 129);
        assert_eq!(&data[32..64], &[2u8; 32]);
        assert_eq!(data[64], 1);
        assert_eq!(&data[65..], &[3u8; 64]);
        assert_eq!(
            unpack_value::<ConfidentialTransferFeeConfig>(&data).unwrap(),
            config
        );
    }

    #[test]
    fn fee_amount_is_opaque_ciphertext() {
        let data = [7u8; 64];

        assert_eq!(
            unpack_value::<ConfidentialTransferFeeAmount>(&data)
                .unwrap()
                .withheld_amount,
            PodElGamalCiphertext::new(data)
        );
        assert!(matches!(
            unpack_value::<ConfidentialTransferFeeAmount>(&data[..63]),
            Err(TokenCodecError::InvalidExtensionLength { found: 63, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ciphertext_serializes_as_base64() {
        use crate::state::extension::Extension;

        let amount = ConfidentialTransferFeeAmount::default();
        let json = serde_json::to_value(amount).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "withheldAmount": "A".repeat(86) + "==" })
        );

        let extension = Extension::ConfidentialTransferFeeAmount(amount);
        let encoded = serde_json::to_string(&extension).unwrap();
        assert_eq!(
            serde_json::from_str::<Extension>(&encoded).unwrap(),
            extension
        );
    }
}
