use {
    super::{
        adjust_len_for_multisig, compute_account_len, tlv, validate_extension_account_type,
        BaseState, Extension, ExtensionType, ExtensionValue, BASE_ACCOUNT_LEN,
        TLV_START_INDEX,
    },
    crate::{
        error::TokenCodecError,
        state::{Mint, Multisig, TokenAccount},
    },
    solana_address::Address,
};

/// A Token-2022 mint with its decoded extensions.
pub type MintWithExtensions = StateWithExtensionsOwned<Mint>;

/// A Token-2022 token account with its decoded extensions.
pub type TokenAccountWithExtensions = StateWithExtensionsOwned<TokenAccount>;

#[inline]
fn validate_state_with_extensions_data<B: BaseState>(data: &[u8]) -> Result<(), TokenCodecError> {
    if data.len() < B::BASE_LEN {
        return Err(TokenCodecError::InvalidAccountSize(data.len()));
    }
    if data.len() == Multisig::LEN {
        return Err(TokenCodecError::InvalidAccountSize(data.len()));
    }
    if data.len() == B::BASE_LEN {
        return Ok(());
    }

    B::validate_extensions_data(data)
}

/// Find the value bytes of the first `target` entry in raw account data
/// without decoding the other entries.
pub fn get_extension_bytes<B: BaseState>(
    data: &[u8],
    target: ExtensionType,
) -> Result<&[u8], TokenCodecError> {
    validate_extension_account_type(target, B::ACCOUNT_TYPE)?;
    validate_state_with_extensions_data::<B>(data)?;

    if data.len() == B::BASE_LEN {
        return Err(TokenCodecError::ExtensionNotFound);
    }
    tlv::get_extension_bytes_from_tlv(&data[TLV_START_INDEX..], target)
}

/// A base state together with its TLV extensions, decoded into owned values.
///
/// `extensions` is `None` when the account data ends with the base record,
/// and `Some` (possibly empty) when the account carries an account-type tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StateWithExtensionsOwned<B: BaseState> {
    pub base: B,
    pub extensions: Option<Vec<Extension>>,
}

impl<B: BaseState> StateWithExtensionsOwned<B> {
    #[inline]
    pub fn new(base: B, extensions: Option<Vec<Extension>>) -> Self {
        Self { base, extensions }
    }

    /// Decodes account data.
    pub fn unpack(data: &[u8]) -> Result<Self, TokenCodecError> {
        validate_state_with_extensions_data::<B>(data)?;

        let base = B::unpack_base(data)?;
        let extensions = if data.len() == B::BASE_LEN {
            None
        } else {
            Some(tlv::unpack_tlv(&data[TLV_START_INDEX..])?)
        };

        Ok(Self { base, extensions })
    }

    /// Decodes account data after checking that the account is owned by
    /// `program_id`.
    pub fn unpack_for_program(
        program_id: &Address,
        owner: &Address,
        data: &[u8],
    ) -> Result<Self, TokenCodecError> {
        if owner != program_id {
            return Err(TokenCodecError::InvalidAccountOwner);
        }
        Self::unpack(data)
    }

    /// Encodes the account data.
    ///
    /// The output is exactly [`StateWithExtensionsOwned::packed_len`] bytes.
    pub fn pack(&self) -> Result<Vec<u8>, TokenCodecError> {
        let mut data = Vec::with_capacity(self.packed_len());
        self.base.write_base(&mut data);

        if let Some(extensions) = &self.extensions {
            data.resize(BASE_ACCOUNT_LEN, 0);
            data.push(B::ACCOUNT_TYPE as u8);
            tlv::pack_tlv(extensions, &mut data)?;
            data.resize(adjust_len_for_multisig(data.len()), 0);
        }

        Ok(data)
    }

    /// Length of the encoded account data.
    #[inline]
    pub fn packed_len(&self) -> usize {
        compute_account_len::<B>(self.extensions.as_deref())
    }

    /// Decoded extensions in encounter order; empty when there are none.
    #[inline]
    pub fn extensions(&self) -> &[Extension] {
        self.extensions.as_deref().unwrap_or_default()
    }

    /// Returns the first extension of type `V`.
    pub fn get_extension<V: ExtensionValue>(&self) -> Result<&V, TokenCodecError> {
        validate_extension_account_type(V::TYPE, B::ACCOUNT_TYPE)?;
        self.extensions()
            .iter()
            .find_map(V::from_extension)
            .ok_or(TokenCodecError::ExtensionNotFound)
    }

    /// Returns the first extension of type `V` for in-place updates before
    /// re-encoding.
    pub fn get_extension_mut<V: ExtensionValue>(&mut self) -> Result<&mut V, TokenCodecError> {
        validate_extension_account_type(V::TYPE, B::ACCOUNT_TYPE)?;
        self.extensions
            .as_mut()
            .and_then(|extensions| extensions.iter_mut().find_map(V::from_extension_mut))
            .ok_or(TokenCodecError::ExtensionNotFound)
    }

    /// Appends an extension, creating the TLV region if the account had none.
    pub fn add_extension<V: ExtensionValue>(&mut self, value: V) -> Result<(), TokenCodecError> {
        validate_extension_account_type(V::TYPE, B::ACCOUNT_TYPE)?;
        self.extensions
            .get_or_insert_with(Vec::new)
            .push(value.into_extension());
        Ok(())
    }

    /// Known extension types in encounter order. Entries of unknown types
    /// are skipped.
    pub fn get_extension_types(&self) -> Vec<ExtensionType> {
        self.extensions()
            .iter()
            .filter_map(Extension::extension_type)
            .collect()
    }
}
