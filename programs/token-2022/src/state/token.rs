use {
    super::AccountState,
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Token account data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TokenAccount {
    /// The mint associated with this account
    pub mint: Address,

    /// The owner of this account.
    pub owner: Address,

    /// The amount of tokens this account holds.
    pub amount: u64,

    /// If `delegate` is `Some` then `delegated_amount` represents
    /// the amount authorized by the delegate.
    pub delegate: Option<Address>,

    /// The account's state.
    pub state: AccountState,

    /// If `is_native` is `Some`, this is a native token, and the value logs the
    /// rent-exempt reserve. An account is required to be rent-exempt, so
    /// the value is used by the processor to ensure that wrapped SOL
    /// accounts do not drop below this threshold.
    pub is_native: Option<u64>,

    /// The amount delegated.
    pub delegated_amount: u64,

    /// Optional authority to close the account.
    pub close_authority: Option<Address>,
}

impl TokenAccount {
    /// The length of the `TokenAccount` base record.
    pub const BASE_LEN: usize = 165;

    pub fn unpack(data: &[u8]) -> Result<Self, TokenCodecError> {
        if data.len() < Self::BASE_LEN {
            return Err(TokenCodecError::InvalidAccountSize(data.len()));
        }
        let mut reader = ByteReader::new(&data[..Self::BASE_LEN]);

        Ok(Self {
            mint: reader.read_address()?,
            owner: reader.read_address()?,
            amount: reader.read_u64()?,
            delegate: reader.read_fixed_coption_address()?,
            state: AccountState::try_from(reader.read_u8()?)?,
            is_native: reader.read_fixed_coption_u64()?,
            delegated_amount: reader.read_u64()?,
            close_authority: reader.read_fixed_coption_address()?,
        })
    }

    pub fn write(&self, dst: &mut Vec<u8>) {
        dst.put_address(&self.mint);
        dst.put_address(&self.owner);
        dst.put_u64(self.amount);
        dst.put_fixed_coption_address(self.delegate.as_ref());
        dst.put_u8(self.state.into());
        dst.put_fixed_coption_u64(self.is_native);
        dst.put_u64(self.delegated_amount);
        dst.put_fixed_coption_address(self.close_authority.as_ref());
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::BASE_LEN);
        self.write(&mut data);
        data
    }

    #[inline(always)]
    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }

    #[inline(always)]
    pub fn is_native(&self) -> bool {
        self.is_native.is_some()
    }
}
