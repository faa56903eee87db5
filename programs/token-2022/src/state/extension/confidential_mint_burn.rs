use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, PodAeCiphertext, PodElGamalCiphertext, PodElGamalPubkey},
        error::TokenCodecError,
    },
};

/// Confidential mint-burn extension data for mints (196 bytes).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ConfidentialMintBurn {
    /// The confidential supply of the mint (encrypted by `supply_elgamal_pubkey`)
    pub confidential_supply: PodElGamalCiphertext,
    /// The decryptable confidential supply of the mint
    pub decryptable_supply: PodAeCiphertext,
    /// The ElGamal pubkey used to encrypt the confidential supply
    pub supply_elgamal_pubkey: PodElGamalPubkey,
    /// The amount of burn amounts not yet aggregated into the confidential
    /// supply
    pub pending_burn: PodElGamalCiphertext,
}

impl ExtensionValue for ConfidentialMintBurn {
    const TYPE: ExtensionType = ExtensionType::ConfidentialMintBurn;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            confidential_supply: PodElGamalCiphertext::read(reader)?,
            decryptable_supply: PodAeCiphertext::read(reader)?,
            supply_elgamal_pubkey: PodElGamalPubkey::read(reader)?,
            pending_burn: PodElGamalCiphertext::read(reader)?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        self.confidential_supply.write(dst);
        self.decryptable_supply.write(dst);
        self.supply_elgamal_pubkey.write(dst);
        self.pending_burn.write(dst);
    }
}
