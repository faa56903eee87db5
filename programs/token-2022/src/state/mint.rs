use {
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Mint data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Mint {
    /// Optional authority used to mint new tokens. The mint authority may only
    /// be provided during mint creation. If no mint authority is present
    /// then the mint has a fixed supply and no further tokens may be minted.
    pub mint_authority: Option<Address>,

    /// Total supply of tokens.
    pub supply: u64,

    /// Number of base 10 digits to the right of the decimal place.
    pub decimals: u8,

    /// Is `true` if this structure has been initialized.
    pub is_initialized: bool,

    /// Optional authority to freeze token accounts.
    pub freeze_authority: Option<Address>,
}

impl Mint {
    /// The length of the `Mint` base record.
    pub const BASE_LEN: usize = 82;

    /// Decodes the base record from the first [`Mint::BASE_LEN`] bytes of
    /// `data`. Trailing bytes are ignored.
    pub fn unpack(data: &[u8]) -> Result<Self, TokenCodecError> {
        if data.len() < Self::BASE_LEN {
            return Err(TokenCodecError::InvalidAccountSize(data.len()));
        }
        let mut reader = ByteReader::new(&data[..Self::BASE_LEN]);

        Ok(Self {
            mint_authority: reader.read_fixed_coption_address()?,
            supply: reader.read_u64()?,
            decimals: reader.read_u8()?,
            is_initialized: reader.read_bool()?,
            freeze_authority: reader.read_fixed_coption_address()?,
        })
    }

    /// Appends the encoded base record to `dst`.
    pub fn write(&self, dst: &mut Vec<u8>) {
        dst.put_fixed_coption_address(self.mint_authority.as_ref());
        dst.put_u64(self.supply);
        dst.put_u8(self.decimals);
        dst.put_bool(self.is_initialized);
        dst.put_fixed_coption_address(self.freeze_authority.as_ref());
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::BASE_LEN);
        self.write(&mut data);
        data
    }
}
