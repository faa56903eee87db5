use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{
            put_optional_nonzero_elgamal_pubkey, ByteReader, PodAeCiphertext,
            PodElGamalCiphertext, PodElGamalPubkey, WriteBytes,
        },
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Confidential transfer mint configuration (65 bytes).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ConfidentialTransferMint {
    /// Authority to modify the `ConfidentialTransferMint` configuration and to
    /// approve new accounts
    pub authority: Option<Address>,
    /// Whether new accounts are approved automatically
    pub auto_approve_new_accounts: bool,
    /// Authority to decode any transfer amount in a confidential transfer
    pub auditor_elgamal_pubkey: Option<PodElGamalPubkey>,
}

impl ExtensionValue for ConfidentialTransferMint {
    const TYPE: ExtensionType = ExtensionType::ConfidentialTransferMint;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            auto_approve_new_accounts: reader.read_bool()?,
            auditor_elgamal_pubkey: reader.read_optional_nonzero_elgamal_pubkey()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_bool(self.auto_approve_new_accounts);
        put_optional_nonzero_elgamal_pubkey(dst, self.auditor_elgamal_pubkey.as_ref());
    }
}

/// Confidential account state (295 bytes).
///
/// Ciphertexts are kept as opaque bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ConfidentialTransferAccount {
    /// `true` if this account has been approved for use
    pub approved: bool,
    /// The public key associated with ElGamal encryption
    pub elgamal_pubkey: PodElGamalPubkey,
    /// The low 16 bits of the pending balance (encrypted by `elgamal_pubkey`)
    pub pending_balance_lo: PodElGamalCiphertext,
    /// The high 48 bits of the pending balance (encrypted by `elgamal_pubkey`)
    pub pending_balance_hi: PodElGamalCiphertext,
    /// The available balance (encrypted by `elgamal_pubkey`)
    pub available_balance: PodElGamalCiphertext,
    /// The decryptable available balance
    pub decryptable_available_balance: PodAeCiphertext,
    /// If `false`, the extended account rejects any incoming confidential
    /// transfers
    pub allow_confidential_credits: bool,
    /// If `false`, the base account rejects any incoming transfers
    pub allow_non_confidential_credits: bool,
    /// The total number of `Deposit` and `Transfer` instructions that have
    /// credited `pending_balance`
    pub pending_balance_credit_counter: u64,
    /// The maximum number of `Deposit` and `Transfer` instructions that can
    /// credit `pending_balance` before the `ApplyPendingBalance` instruction
    /// is executed
    pub maximum_pending_balance_credit_counter: u64,
    /// The `expected_pending_balance_credit_counter` value that was included
    /// in the last `ApplyPendingBalance` instruction
    pub expected_pending_balance_credit_counter: u64,
    /// The actual `pending_balance_credit_counter` when the last
    /// `ApplyPendingBalance` instruction was executed
    pub actual_pending_balance_credit_counter: u64,
}

impl ConfidentialTransferAccount {
    /// Whether the pending balance can still be credited.
    #[inline]
    pub fn pending_balance_credits_available(&self) -> bool {
        self.pending_balance_credit_counter < self.maximum_pending_balance_credit_counter
    }

    /// Whether both pending balance ciphertexts are all zeroes.
    #[inline]
    pub fn pending_balance_is_zeroed(&self) -> bool {
        self.pending_balance_lo.is_zeroed() && self.pending_balance_hi.is_zeroed()
    }
}

impl ExtensionValue for ConfidentialTransferAccount {
    const TYPE: ExtensionType = ExtensionType::ConfidentialTransferAccount;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            approved: reader.read_bool()?,
            elgamal_pubkey: PodElGamalPubkey::read(reader)?,
            pending_balance_lo: PodElGamalCiphertext::read(reader)?,
            pending_balance_hi: PodElGamalCiphertext::read(reader)?,
            available_balance: PodElGamalCiphertext::read(reader)?,
            decryptable_available_balance: PodAeCiphertext::read(reader)?,
            allow_confidential_credits: reader.read_bool()?,
            allow_non_confidential_credits: reader.read_bool()?,
            pending_balance_credit_counter: reader.read_u64()?,
            maximum_pending_balance_credit_counter: reader.read_u64()?,
            expected_pending_balance_credit_counter: reader.read_u64()?,
            actual_pending_balance_credit_counter: reader.read_u64()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_bool(self.approved);
        self.elgamal_pubkey.write(dst);
        self.pending_balance_lo.write(dst);
        self.pending_balance_hi.write(dst);
        self.available_balance.write(dst);
        self.decryptable_available_balance.write(dst);
        dst.put_bool(self.allow_confidential_credits);
        dst.put_bool(self.allow_non_confidential_credits);
        dst.put_u64(self.pending_balance_credit_counter);
        dst.put_u64(self.maximum_pending_balance_credit_counter);
        dst.put_u64(self.expected_pending_balance_credit_counter);
        dst.put_u64(self.actual_pending_balance_credit_counter);
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn mint_auditor_key_of_zeroes_is_none() {
        let mut data = vec![0u8; 65];
        data[32] = 1;

        let mint = unpack_value::<ConfidentialTransferMint>(&data).unwrap();
        assert_eq!(mint.authority, None);
        assert!(mint.auto_approve_new_accounts);
        assert_eq!(mint.auditor_elgamal_pubkey, None);

        let mut encoded = Vec::new();
        mint.write(&mut encoded);
        assert_eq!(encoded, data);
    }

    #[test]
    fn mint_rejects_invalid_bool() {
        let mut data = vec![0u8; 65];
        data[32] = 2;

        assert_eq!(
            unpack_value::<ConfidentialTransferMint>(&data),
            Err(TokenCodecError::InvalidBool(2))
        );
    }

    #[test]
    fn account_layout() {
        let account = ConfidentialTransferAccount {
            approved: true,
            elgamal_pubkey: PodElGamalPubkey::new([1u8; 32]),
            pending_balance_lo: PodElGamalCiphertext::new([2u8; 64]),
            pending_balance_hi: PodElGamalCiphertext::new([3u8; 64]),
            available_balance: PodElGamalCiphertext::new([4u8; 64]),
            decryptable_available_balance: PodAeCiphertext::new([5u8; 36]),
            allow_confidential_credits: true,
            allow_non_confidential_credits: false,
            pending_balance_credit_counter: 6,
            maximum_pending_balance_credit_counter: 65_536,
            expected_pending_balance_credit_counter: 7,
            actual_pending_balance_credit_counter: 8,
        };
        let mut data = Vec::new();
        account.write(&mut data);

        assert_eq!(data.len(), 295);
        assert_eq!(data[0], 1);
        assert_eq!(&data[33..97], &[2u8; 64]);
        assert_eq!(&data[225..261], &[5u8; 36]);
        assert_eq!(&data[261..263], &[1, 0]);
        assert_eq!(&data[271..279], &65_536u64.to_le_bytes());
        assert_eq!(
            unpack_value::<ConfidentialTransferAccount>(&data).unwrap(),
            account
        );
        assert!(account.pending_balance_credits_available());
        assert!(!account.pending_balance_is_zeroed());
    }
}
