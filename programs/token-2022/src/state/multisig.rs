use {
    crate::{codec::ByteReader, error::TokenCodecError},
    solana_address::Address,
};

/// Maximum number of multisignature signers.
pub const MAX_MULTISIG_SIGNERS: usize = 11;

/// Multisignature data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Multisig {
    /// Number of signers required
    pub m: u8,
    /// Number of valid signers
    pub n: u8,
    /// Is `true` if this structure has been initialized
    pub is_initialized: bool,
    /// Signer public keys
    pub signers: Vec<Address>,
}

impl Multisig {
    /// The length of the `Multisig` account data.
    ///
    /// An extended account is never allowed to have this length, otherwise it
    /// could be mistaken for a multisig.
    pub const LEN: usize = 3 + MAX_MULTISIG_SIGNERS * 32;

    /// Decodes a multisig, keeping only the `n` valid signers.
    pub fn unpack(data: &[u8]) -> Result<Self, TokenCodecError> {
        if data.len() != Self::LEN {
            return Err(TokenCodecError::InvalidAccountSize(data.len()));
        }
        let mut reader = ByteReader::new(data);
        let m = reader.read_u8()?;
        let n = reader.read_u8()?;
        let is_initialized = reader.read_bool()?;
        let signers = (0..usize::from(n).min(MAX_MULTISIG_SIGNERS))
            .map(|_| reader.read_address())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            m,
            n,
            is_initialized,
            signers,
        })
    }
}
