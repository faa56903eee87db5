pub mod confidential_mint_burn;
pub mod confidential_transfer;
pub mod confidential_transfer_fee;
pub mod cpi_guard;
pub mod default_account_state;
pub mod group_member_pointer;
pub mod group_pointer;
pub mod immutable_owner;
pub mod interest_bearing_mint;
pub mod memo_transfer;
pub mod metadata_pointer;
pub mod mint_close_authority;
pub mod non_transferable;
pub mod pausable;
pub mod permanent_delegate;
pub mod permissioned_burn;
pub mod scaled_ui_amount;
mod state;
mod tlv;
pub mod token_group;
pub mod token_metadata;
pub mod transfer_fee;
pub mod transfer_hook;
pub mod transfer_hook_account;

use {
    super::{AccountType, Mint, Multisig, TokenAccount},
    crate::{codec::ByteReader, error::TokenCodecError},
};
pub use {
    confidential_mint_burn::ConfidentialMintBurn,
    confidential_transfer::{ConfidentialTransferAccount, ConfidentialTransferMint},
    confidential_transfer_fee::{ConfidentialTransferFeeAmount, ConfidentialTransferFeeConfig},
    cpi_guard::CpiGuard,
    default_account_state::DefaultAccountState,
    group_member_pointer::GroupMemberPointer,
    group_pointer::GroupPointer,
    immutable_owner::ImmutableOwner,
    interest_bearing_mint::InterestBearingConfig,
    memo_transfer::MemoTransfer,
    metadata_pointer::MetadataPointer,
    mint_close_authority::MintCloseAuthority,
    non_transferable::{NonTransferable, NonTransferableAccount},
    pausable::{PausableAccount, PausableConfig},
    permanent_delegate::PermanentDelegate,
    permissioned_burn::{PermissionedBurnAccount, PermissionedBurnConfig},
    scaled_ui_amount::ScaledUiAmountConfig,
    state::{
        get_extension_bytes, MintWithExtensions, StateWithExtensionsOwned,
        TokenAccountWithExtensions,
    },
    tlv::{get_extension_bytes_from_tlv, pack_tlv, unpack_tlv},
    token_group::{TokenGroup, TokenGroupMember},
    token_metadata::{Field, TokenMetadata},
    transfer_fee::{TransferFee, TransferFeeAmount, TransferFeeConfig},
    transfer_hook::TransferHook,
    transfer_hook_account::TransferHookAccount,
};

/// Maximum number of distinct extension types (excluding `Uninitialized`).
pub const MAX_EXTENSIONS: usize = 29;

/// Length of the token account base record, which is also where the
/// account-type tag sits for both mints and token accounts.
pub const BASE_ACCOUNT_LEN: usize = TokenAccount::BASE_LEN;
const MINT_PADDING_LEN: usize = BASE_ACCOUNT_LEN - Mint::BASE_LEN;
const ZERO_MINT_PADDING: [u8; MINT_PADDING_LEN] = [0u8; MINT_PADDING_LEN];
pub const ACCOUNT_TYPE_INDEX: usize = BASE_ACCOUNT_LEN;
pub const TLV_START_INDEX: usize = ACCOUNT_TYPE_INDEX + 1;
pub const TLV_HEADER_LEN: usize = 4;

#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtensionType {
    Uninitialized = 0,
    TransferFeeConfig = 1,
    TransferFeeAmount = 2,
    MintCloseAuthority = 3,
    ConfidentialTransferMint = 4,
    ConfidentialTransferAccount = 5,
    DefaultAccountState = 6,
    ImmutableOwner = 7,
    MemoTransfer = 8,
    NonTransferable = 9,
    InterestBearingConfig = 10,
    CpiGuard = 11,
    PermanentDelegate = 12,
    NonTransferableAccount = 13,
    TransferHook = 14,
    TransferHookAccount = 15,
    ConfidentialTransferFeeConfig = 16,
    ConfidentialTransferFeeAmount = 17,
    MetadataPointer = 18,
    TokenMetadata = 19,
    GroupPointer = 20,
    TokenGroup = 21,
    GroupMemberPointer = 22,
    TokenGroupMember = 23,
    ConfidentialMintBurn = 24,
    ScaledUiAmount = 25,
    Pausable = 26,
    PausableAccount = 27,
    PermissionedBurn = 28,
    PermissionedBurnAccount = 29,
}

impl TryFrom<u16> for ExtensionType {
    type Error = u16;

    /// Returns the unknown discriminant back on failure.
    #[inline]
    fn try_from(extension_type: u16) -> Result<Self, Self::Error> {
        Ok(match extension_type {
            0 => ExtensionType::Uninitialized,
            1 => ExtensionType::TransferFeeConfig,
            2 => ExtensionType::TransferFeeAmount,
            3 => ExtensionType::MintCloseAuthority,
            4 => ExtensionType::ConfidentialTransferMint,
            5 => ExtensionType::ConfidentialTransferAccount,
            6 => ExtensionType::DefaultAccountState,
            7 => ExtensionType::ImmutableOwner,
            8 => ExtensionType::MemoTransfer,
            9 => ExtensionType::NonTransferable,
            10 => ExtensionType::InterestBearingConfig,
            11 => ExtensionType::CpiGuard,
            12 => ExtensionType::PermanentDelegate,
            13 => ExtensionType::NonTransferableAccount,
            14 => ExtensionType::TransferHook,
            15 => ExtensionType::TransferHookAccount,
            16 => ExtensionType::ConfidentialTransferFeeConfig,
            17 => ExtensionType::ConfidentialTransferFeeAmount,
            18 => ExtensionType::MetadataPointer,
            19 => ExtensionType::TokenMetadata,
            20 => ExtensionType::GroupPointer,
            21 => ExtensionType::TokenGroup,
            22 => ExtensionType::GroupMemberPointer,
            23 => ExtensionType::TokenGroupMember,
            24 => ExtensionType::ConfidentialMintBurn,
            25 => ExtensionType::ScaledUiAmount,
            26 => ExtensionType::Pausable,
            27 => ExtensionType::PausableAccount,
            28 => ExtensionType::PermissionedBurn,
            29 => ExtensionType::PermissionedBurnAccount,
            _ => return Err(extension_type),
        })
    }
}

impl From<ExtensionType> for u16 {
    #[inline(always)]
    fn from(extension_type: ExtensionType) -> Self {
        extension_type as u16
    }
}

/// Size of an extension value payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtensionLen {
    /// The payload always has this many bytes.
    Fixed(usize),
    /// The payload size depends on its content.
    Variable,
}

impl ExtensionLen {
    #[inline(always)]
    pub const fn fixed(self) -> Option<usize> {
        match self {
            ExtensionLen::Fixed(len) => Some(len),
            ExtensionLen::Variable => None,
        }
    }
}

impl ExtensionType {
    /// Returns the byte length of the extension's value payload.
    pub const fn value_len(self) -> ExtensionLen {
        use ExtensionLen::{Fixed, Variable};

        match self {
            ExtensionType::Uninitialized
            | ExtensionType::ImmutableOwner
            | ExtensionType::NonTransferable
            | ExtensionType::NonTransferableAccount
            | ExtensionType::PausableAccount
            | ExtensionType::PermissionedBurnAccount => Fixed(0),
            ExtensionType::DefaultAccountState
            | ExtensionType::MemoTransfer
            | ExtensionType::CpiGuard
            | ExtensionType::TransferHookAccount => Fixed(1),
            ExtensionType::TransferFeeAmount => Fixed(8),
            ExtensionType::MintCloseAuthority
            | ExtensionType::PermanentDelegate
            | ExtensionType::PermissionedBurn => Fixed(32),
            ExtensionType::Pausable => Fixed(33),
            ExtensionType::InterestBearingConfig => Fixed(52),
            ExtensionType::ScaledUiAmount => Fixed(56),
            ExtensionType::TransferHook
            | ExtensionType::ConfidentialTransferFeeAmount
            | ExtensionType::MetadataPointer
            | ExtensionType::GroupPointer
            | ExtensionType::GroupMemberPointer => Fixed(64),
            ExtensionType::ConfidentialTransferMint => Fixed(65),
            ExtensionType::TokenGroupMember => Fixed(72),
            ExtensionType::TokenGroup => Fixed(80),
            ExtensionType::TransferFeeConfig => Fixed(108),
            ExtensionType::ConfidentialTransferFeeConfig => Fixed(129),
            ExtensionType::ConfidentialMintBurn => Fixed(196),
            ExtensionType::ConfidentialTransferAccount => Fixed(295),
            ExtensionType::TokenMetadata => Variable,
        }
    }

    /// Returns the base state the extension belongs to.
    pub const fn account_type(self) -> AccountType {
        match self {
            ExtensionType::Uninitialized => AccountType::Uninitialized,
            ExtensionType::TransferFeeConfig
            | ExtensionType::MintCloseAuthority
            | ExtensionType::ConfidentialTransferMint
            | ExtensionType::DefaultAccountState
            | ExtensionType::NonTransferable
            | ExtensionType::InterestBearingConfig
            | ExtensionType::PermanentDelegate
            | ExtensionType::TransferHook
            | ExtensionType::ConfidentialTransferFeeConfig
            | ExtensionType::MetadataPointer
            | ExtensionType::TokenMetadata
            | ExtensionType::GroupPointer
            | ExtensionType::TokenGroup
            | ExtensionType::GroupMemberPointer
            | ExtensionType::TokenGroupMember
            | ExtensionType::ConfidentialMintBurn
            | ExtensionType::ScaledUiAmount
            | ExtensionType::Pausable
            | ExtensionType::PermissionedBurn => AccountType::Mint,
            ExtensionType::TransferFeeAmount
            | ExtensionType::ConfidentialTransferAccount
            | ExtensionType::ImmutableOwner
            | ExtensionType::MemoTransfer
            | ExtensionType::CpiGuard
            | ExtensionType::NonTransferableAccount
            | ExtensionType::TransferHookAccount
            | ExtensionType::ConfidentialTransferFeeAmount
            | ExtensionType::PausableAccount
            | ExtensionType::PermissionedBurnAccount => AccountType::Account,
        }
    }

    /// Returns the account extensions a token account of a mint carrying
    /// `mint_extension_types` must be initialized with.
    pub fn get_required_init_account_extensions(
        mint_extension_types: &[ExtensionType],
    ) -> Vec<ExtensionType> {
        let mut account_extension_types = Vec::new();
        for extension_type in mint_extension_types {
            let required = match extension_type {
                ExtensionType::TransferFeeConfig => ExtensionType::TransferFeeAmount,
                ExtensionType::NonTransferable => ExtensionType::NonTransferableAccount,
                ExtensionType::TransferHook => ExtensionType::TransferHookAccount,
                ExtensionType::Pausable => ExtensionType::PausableAccount,
                ExtensionType::PermissionedBurn => ExtensionType::PermissionedBurnAccount,
                _ => continue,
            };
            if !account_extension_types.contains(&required) {
                account_extension_types.push(required);
            }
        }
        account_extension_types
    }
}

/// Typed extension values that can be decoded from and encoded into a TLV
/// entry.
pub trait ExtensionValue: ExtensionVariant + Sized {
    const TYPE: ExtensionType;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError>;

    fn write(&self, dst: &mut Vec<u8>);

    /// Number of bytes [`ExtensionValue::write`] appends.
    fn packed_len(&self) -> usize {
        match Self::TYPE.value_len() {
            ExtensionLen::Fixed(len) => len,
            ExtensionLen::Variable => {
                let mut data = Vec::new();
                self.write(&mut data);
                data.len()
            }
        }
    }
}

/// Conversion between a typed value and its [`Extension`] variant.
pub trait ExtensionVariant: Sized {
    fn from_extension(extension: &Extension) -> Option<&Self>;

    fn from_extension_mut(extension: &mut Extension) -> Option<&mut Self>;

    fn into_extension(self) -> Extension;
}

/// Decodes a single extension value, requiring the payload to be consumed
/// exactly.
pub fn unpack_value<V: ExtensionValue>(data: &[u8]) -> Result<V, TokenCodecError> {
    if let ExtensionLen::Fixed(expected) = V::TYPE.value_len() {
        if data.len() != expected {
            return Err(TokenCodecError::InvalidExtensionLength {
                extension_type: V::TYPE,
                expected,
                found: data.len(),
            });
        }
    }

    let mut reader = ByteReader::new(data);
    let value = V::read(&mut reader)?;
    if !reader.is_empty() {
        return Err(TokenCodecError::InvalidExtensionLength {
            extension_type: V::TYPE,
            expected: reader.offset(),
            found: data.len(),
        });
    }

    Ok(value)
}

macro_rules! extensions {
    ($($variant:ident($value:ty),)*) => {
        /// A decoded TLV entry.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(rename_all = "camelCase")
        )]
        pub enum Extension {
            $($variant($value),)*
            /// Entry of a type this crate does not know about, kept verbatim.
            #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
            Unparsed { extension_type: u16, data: Vec<u8> },
        }

        impl Extension {
            /// Decodes the value of a TLV entry of type `extension_type`.
            ///
            /// Unknown types are preserved as [`Extension::Unparsed`].
            pub fn unpack(extension_type: u16, data: &[u8]) -> Result<Self, TokenCodecError> {
                match ExtensionType::try_from(extension_type) {
                    $(Ok(ExtensionType::$variant) => unpack_value::<$value>(data).map(Self::$variant),)*
                    Ok(ExtensionType::Uninitialized) | Err(_) => {
                        log::debug!(
                            "preserving unknown extension type {extension_type} ({} bytes)",
                            data.len()
                        );
                        Ok(Self::Unparsed {
                            extension_type,
                            data: data.to_vec(),
                        })
                    }
                }
            }

            /// The TLV type written for this entry.
            pub fn type_code(&self) -> u16 {
                match self {
                    $(Self::$variant(_) => ExtensionType::$variant as u16,)*
                    Self::Unparsed { extension_type, .. } => *extension_type,
                }
            }

            /// The known extension type of this entry, if any.
            #[inline]
            pub fn extension_type(&self) -> Option<ExtensionType> {
                ExtensionType::try_from(self.type_code()).ok()
            }

            /// Number of value bytes (excluding the TLV header).
            pub fn packed_len(&self) -> usize {
                match self {
                    $(Self::$variant(value) => value.packed_len(),)*
                    Self::Unparsed { data, .. } => data.len(),
                }
            }

            /// Appends the value bytes (excluding the TLV header) to `dst`.
            pub fn write_value(&self, dst: &mut Vec<u8>) {
                match self {
                    $(Self::$variant(value) => value.write(dst),)*
                    Self::Unparsed { data, .. } => dst.extend_from_slice(data),
                }
            }
        }

        $(
            impl ExtensionVariant for $value {
                #[inline]
                fn from_extension(extension: &Extension) -> Option<&Self> {
                    match extension {
                        Extension::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                #[inline]
                fn from_extension_mut(extension: &mut Extension) -> Option<&mut Self> {
                    match extension {
                        Extension::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                #[inline]
                fn into_extension(self) -> Extension {
                    Extension::$variant(self)
                }
            }

            impl From<$value> for Extension {
                #[inline]
                fn from(value: $value) -> Self {
                    Extension::$variant(value)
                }
            }
        )*
    };
}

extensions! {
    TransferFeeConfig(TransferFeeConfig),
    TransferFeeAmount(TransferFeeAmount),
    MintCloseAuthority(MintCloseAuthority),
    ConfidentialTransferMint(ConfidentialTransferMint),
    ConfidentialTransferAccount(ConfidentialTransferAccount),
    DefaultAccountState(DefaultAccountState),
    ImmutableOwner(ImmutableOwner),
    MemoTransfer(MemoTransfer),
    NonTransferable(NonTransferable),
    InterestBearingConfig(InterestBearingConfig),
    CpiGuard(CpiGuard),
    PermanentDelegate(PermanentDelegate),
    NonTransferableAccount(NonTransferableAccount),
    TransferHook(TransferHook),
    TransferHookAccount(TransferHookAccount),
    ConfidentialTransferFeeConfig(ConfidentialTransferFeeConfig),
    ConfidentialTransferFeeAmount(ConfidentialTransferFeeAmount),
    MetadataPointer(MetadataPointer),
    TokenMetadata(TokenMetadata),
    GroupPointer(GroupPointer),
    TokenGroup(TokenGroup),
    GroupMemberPointer(GroupMemberPointer),
    TokenGroupMember(TokenGroupMember),
    ConfidentialMintBurn(ConfidentialMintBurn),
    ScaledUiAmount(ScaledUiAmountConfig),
    Pausable(PausableConfig),
    PausableAccount(PausableAccount),
    PermissionedBurn(PermissionedBurnConfig),
    PermissionedBurnAccount(PermissionedBurnAccount),
}

/// Trait for supported token-2022 base account types that can host TLV
/// extensions.
pub trait BaseState: Sized {
    const BASE_LEN: usize;
    const ACCOUNT_TYPE: AccountType;

    /// Decodes the base record from the start of `data`.
    fn unpack_base(data: &[u8]) -> Result<Self, TokenCodecError>;

    /// Appends the encoded base record to `dst`.
    fn write_base(&self, dst: &mut Vec<u8>);

    /// Validates the bytes between the base record and the TLV region,
    /// including the account-type tag.
    fn validate_extensions_data(data: &[u8]) -> Result<(), TokenCodecError>;
}

impl BaseState for Mint {
    const BASE_LEN: usize = Mint::BASE_LEN;
    const ACCOUNT_TYPE: AccountType = AccountType::Mint;

    #[inline(always)]
    fn unpack_base(data: &[u8]) -> Result<Self, TokenCodecError> {
        Mint::unpack(data)
    }

    #[inline(always)]
    fn write_base(&self, dst: &mut Vec<u8>) {
        self.write(dst)
    }

    #[inline]
    fn validate_extensions_data(data: &[u8]) -> Result<(), TokenCodecError> {
        validate_account_type(data, AccountType::Mint)?;

        if data[Mint::BASE_LEN..BASE_ACCOUNT_LEN] != ZERO_MINT_PADDING {
            return Err(TokenCodecError::InvalidPadding);
        }

        Ok(())
    }
}

impl BaseState for TokenAccount {
    const BASE_LEN: usize = TokenAccount::BASE_LEN;
    const ACCOUNT_TYPE: AccountType = AccountType::Account;

    #[inline(always)]
    fn unpack_base(data: &[u8]) -> Result<Self, TokenCodecError> {
        TokenAccount::unpack(data)
    }

    #[inline(always)]
    fn write_base(&self, dst: &mut Vec<u8>) {
        self.write(dst)
    }

    #[inline]
    fn validate_extensions_data(data: &[u8]) -> Result<(), TokenCodecError> {
        validate_account_type(data, AccountType::Account)
    }
}

#[inline]
fn validate_account_type(data: &[u8], expected: AccountType) -> Result<(), TokenCodecError> {
    if data.len() <= ACCOUNT_TYPE_INDEX {
        return Err(TokenCodecError::InvalidAccountSize(data.len()));
    }

    match data[ACCOUNT_TYPE_INDEX] {
        tag if tag == AccountType::Uninitialized as u8 => Err(TokenCodecError::AccountNotInitialized),
        tag if tag == expected as u8 => Ok(()),
        found => Err(TokenCodecError::AccountTypeMismatch { expected, found }),
    }
}

#[inline(always)]
fn validate_extension_account_type(
    extension_type: ExtensionType,
    account_type: AccountType,
) -> Result<(), TokenCodecError> {
    if extension_type.account_type() != account_type {
        return Err(TokenCodecError::InvalidExtensionAccountType {
            extension_type,
            account_type,
        });
    }

    Ok(())
}

/// An extended account can never be [`Multisig::LEN`] bytes long, so a
/// collision is resolved by growing the account by the size of an extension
/// type.
#[inline(always)]
pub const fn adjust_len_for_multisig(account_len: usize) -> usize {
    if account_len == Multisig::LEN {
        account_len.saturating_add(core::mem::size_of::<ExtensionType>())
    } else {
        account_len
    }
}

/// Account length needed by a base state carrying `extensions`.
///
/// `None` means the account has no TLV region at all, while an empty list
/// still reserves the account-type tag.
pub fn compute_account_len<B: BaseState>(extensions: Option<&[Extension]>) -> usize {
    match extensions {
        None => B::BASE_LEN,
        Some(extensions) => adjust_len_for_multisig(
            extensions
                .iter()
                .fold(TLV_START_INDEX, |len, extension| {
                    len + TLV_HEADER_LEN + extension.packed_len()
                }),
        ),
    }
}

/// Account length of a mint carrying `extensions`.
#[inline]
pub fn compute_mint_size(extensions: Option<&[Extension]>) -> usize {
    compute_account_len::<Mint>(extensions)
}

/// Account length of a token account carrying `extensions`.
#[inline]
pub fn compute_token_size(extensions: Option<&[Extension]>) -> usize {
    compute_account_len::<TokenAccount>(extensions)
}

/// Account length of a base state carrying one entry of each of the given
/// fixed-size extension types.
///
/// Repeated types are only counted once.
pub fn try_calculate_account_len<B: BaseState>(
    extension_types: &[ExtensionType],
) -> Result<usize, TokenCodecError> {
    if extension_types.is_empty() {
        return Ok(B::BASE_LEN);
    }

    let mut total_len = TLV_START_INDEX;

    for (i, extension_type) in extension_types.iter().enumerate() {
        validate_extension_account_type(*extension_type, B::ACCOUNT_TYPE)?;

        if extension_types[..i].contains(extension_type) {
            continue;
        }

        let value_len = extension_type
            .value_len()
            .fixed()
            .ok_or(TokenCodecError::VariableSizeExtension(*extension_type))?;

        total_len += TLV_HEADER_LEN + value_len;
    }

    Ok(adjust_len_for_multisig(total_len))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::state::AccountState,
        solana_address::Address,
        std::collections::HashSet,
        strum::IntoEnumIterator,
    };

    #[test]
    fn extension_type_discriminants_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for extension_type in ExtensionType::iter() {
            let code = u16::from(extension_type);
            assert!(seen.insert(code));
            assert_eq!(ExtensionType::try_from(code), Ok(extension_type));
        }
        assert_eq!(seen.len(), MAX_EXTENSIONS + 1);
        assert_eq!(ExtensionType::try_from(30), Err(30));
    }

    #[test]
    fn every_known_type_decodes_zeroed_payload_with_agreeing_size() {
        for extension_type in ExtensionType::iter().skip(1) {
            let len = match extension_type.value_len() {
                ExtensionLen::Fixed(len) => len,
                // update authority, mint and four empty length prefixes
                ExtensionLen::Variable => 32 + 32 + 4 * 4,
            };
            let data = vec![0u8; len];

            let extension = Extension::unpack(extension_type.into(), &data).unwrap();
            assert_eq!(extension.extension_type(), Some(extension_type));
            assert_eq!(extension.packed_len(), len, "{extension_type:?}");

            let mut encoded = Vec::new();
            extension.write_value(&mut encoded);
            assert_eq!(encoded, data, "{extension_type:?}");
        }
    }

    /// A payload with every byte set, so optional addresses decode to `Some`
    /// and flags to `true`.
    fn non_zero_payload(extension_type: ExtensionType) -> Vec<u8> {
        match extension_type.value_len() {
            ExtensionLen::Fixed(len) => vec![1u8; len],
            ExtensionLen::Variable => {
                let metadata = TokenMetadata {
                    update_authority: Some(Address::new_from_array([1u8; 32])),
                    mint: Address::new_from_array([2u8; 32]),
                    name: "Name".to_string(),
                    symbol: "SYM".to_string(),
                    uri: "https://example.com".to_string(),
                    additional_metadata: vec![("key".to_string(), "value".to_string())],
                };
                let mut data = Vec::new();
                metadata.write(&mut data);
                data
            }
        }
    }

    fn non_zero_extensions(account_type: AccountType) -> Vec<Extension> {
        ExtensionType::iter()
            .filter(|extension_type| extension_type.account_type() == account_type)
            .map(|extension_type| {
                Extension::unpack(extension_type.into(), &non_zero_payload(extension_type))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn every_known_type_round_trips_non_zero_payload() {
        for extension_type in ExtensionType::iter().skip(1) {
            let data = non_zero_payload(extension_type);

            let extension = Extension::unpack(extension_type.into(), &data).unwrap();
            assert_eq!(extension.packed_len(), data.len(), "{extension_type:?}");

            let mut encoded = Vec::new();
            extension.write_value(&mut encoded);
            assert_eq!(encoded, data, "{extension_type:?}");
            assert_eq!(
                Extension::unpack(extension_type.into(), &encoded).unwrap(),
                extension
            );
        }
    }

    #[test]
    fn non_zero_optional_fields_decode_as_present() {
        let extensions = non_zero_extensions(AccountType::Mint);

        let find = |extension_type| {
            extensions
                .iter()
                .find(|extension| extension.extension_type() == Some(extension_type))
                .unwrap()
        };
        assert!(matches!(
            find(ExtensionType::GroupPointer),
            Extension::GroupPointer(GroupPointer {
                authority: Some(_),
                group_address: Some(_),
            })
        ));
        assert!(matches!(
            find(ExtensionType::MintCloseAuthority),
            Extension::MintCloseAuthority(MintCloseAuthority {
                close_authority: Some(_),
            })
        ));
        assert_eq!(
            find(ExtensionType::PermissionedBurn),
            &Extension::PermissionedBurn(PermissionedBurnConfig {
                authority: Address::new_from_array([1u8; 32]),
            })
        );
    }

    #[test]
    fn mint_with_every_mint_extension_round_trips() {
        let mut extensions = non_zero_extensions(AccountType::Mint);
        extensions.push(Extension::Unparsed {
            extension_type: 999,
            data: vec![9u8; 5],
        });
        let mint = MintWithExtensions::new(
            Mint {
                mint_authority: Some(Address::new_from_array([3u8; 32])),
                supply: 1_000,
                decimals: 6,
                is_initialized: true,
                freeze_authority: None,
            },
            Some(extensions),
        );

        let data = mint.pack().unwrap();
        assert_eq!(data.len(), compute_mint_size(mint.extensions.as_deref()));
        assert_eq!(MintWithExtensions::unpack(&data).unwrap(), mint);
    }

    #[test]
    fn token_account_with_every_account_extension_round_trips() {
        let mut extensions = non_zero_extensions(AccountType::Account);
        extensions.push(Extension::Unparsed {
            extension_type: 999,
            data: vec![9u8; 5],
        });
        let token = TokenAccountWithExtensions::new(
            TokenAccount {
                mint: Address::new_from_array([4u8; 32]),
                owner: Address::new_from_array([5u8; 32]),
                amount: 10,
                delegate: None,
                state: AccountState::Initialized,
                is_native: None,
                delegated_amount: 0,
                close_authority: Some(Address::new_from_array([6u8; 32])),
            },
            Some(extensions),
        );

        let data = token.pack().unwrap();
        assert_eq!(data.len(), compute_token_size(token.extensions.as_deref()));
        assert_eq!(TokenAccountWithExtensions::unpack(&data).unwrap(), token);
    }

    #[test]
    fn known_type_with_wrong_length_is_rejected() {
        assert_eq!(
            Extension::unpack(ExtensionType::MintCloseAuthority.into(), &[0u8; 31]),
            Err(TokenCodecError::InvalidExtensionLength {
                extension_type: ExtensionType::MintCloseAuthority,
                expected: 32,
                found: 31,
            })
        );
    }

    #[test]
    fn unknown_type_is_preserved_verbatim() {
        let extension = Extension::unpack(0xbeef, &[1, 2, 3]).unwrap();

        assert_eq!(
            extension,
            Extension::Unparsed {
                extension_type: 0xbeef,
                data: vec![1, 2, 3]
            }
        );
        assert_eq!(extension.type_code(), 0xbeef);
        assert_eq!(extension.extension_type(), None);
        assert_eq!(extension.packed_len(), 3);
    }

    #[test]
    fn every_type_except_uninitialized_has_a_base_state() {
        for extension_type in ExtensionType::iter() {
            let account_type = extension_type.account_type();
            if extension_type == ExtensionType::Uninitialized {
                assert_eq!(account_type, AccountType::Uninitialized);
            } else {
                assert_ne!(account_type, AccountType::Uninitialized);
            }
        }
        assert_eq!(
            ExtensionType::PermissionedBurn.account_type(),
            AccountType::Mint
        );
        assert_eq!(
            ExtensionType::PermissionedBurnAccount.account_type(),
            AccountType::Account
        );
    }

    #[test]
    fn required_account_extensions_follow_mint_extensions() {
        let required = ExtensionType::get_required_init_account_extensions(&[
            ExtensionType::TransferFeeConfig,
            ExtensionType::MintCloseAuthority,
            ExtensionType::TransferHook,
            ExtensionType::TransferFeeConfig,
            ExtensionType::Pausable,
            ExtensionType::NonTransferable,
            ExtensionType::PermissionedBurn,
        ]);

        assert_eq!(
            required,
            vec![
                ExtensionType::TransferFeeAmount,
                ExtensionType::TransferHookAccount,
                ExtensionType::PausableAccount,
                ExtensionType::NonTransferableAccount,
                ExtensionType::PermissionedBurnAccount,
            ]
        );
        for extension_type in required {
            assert_eq!(extension_type.account_type(), AccountType::Account);
        }
    }

    #[test]
    fn mint_size_distinguishes_absent_from_empty_extensions() {
        assert_eq!(compute_mint_size(None), 82);
        assert_eq!(compute_mint_size(Some(&[])), 166);
        assert_eq!(compute_token_size(None), 165);
        assert_eq!(compute_token_size(Some(&[])), 166);
    }

    #[test]
    fn mint_size_adds_header_and_value_per_extension() {
        let extensions = [
            Extension::MintCloseAuthority(MintCloseAuthority {
                close_authority: Some(Address::new_from_array([1u8; 32])),
            }),
            Extension::NonTransferable(NonTransferable),
            Extension::Unparsed {
                extension_type: 500,
                data: vec![0u8; 10],
            },
        ];

        assert_eq!(compute_mint_size(Some(&extensions)), 166 + 36 + 4 + 14);
    }

    #[test]
    fn size_avoids_multisig_len() {
        // 166 + 4 + 185 lands exactly on the multisig length
        let extensions = [Extension::Unparsed {
            extension_type: 500,
            data: vec![0u8; 185],
        }];

        assert_eq!(compute_token_size(Some(&extensions)), Multisig::LEN + 2);
        assert_eq!(adjust_len_for_multisig(Multisig::LEN), 357);
        assert_eq!(adjust_len_for_multisig(356), 356);
    }

    #[test]
    fn try_calculate_account_len_counts_each_type_once() {
        assert_eq!(try_calculate_account_len::<Mint>(&[]), Ok(Mint::BASE_LEN));
        assert_eq!(
            try_calculate_account_len::<Mint>(&[
                ExtensionType::TransferFeeConfig,
                ExtensionType::TransferFeeConfig,
                ExtensionType::NonTransferable,
            ]),
            Ok(TLV_START_INDEX + 4 + 108 + 4)
        );
        assert_eq!(
            try_calculate_account_len::<TokenAccount>(&[ExtensionType::ImmutableOwner]),
            Ok(TLV_START_INDEX + 4)
        );
    }

    #[test]
    fn try_calculate_account_len_rejects_foreign_and_variable_types() {
        assert_eq!(
            try_calculate_account_len::<Mint>(&[ExtensionType::ImmutableOwner]),
            Err(TokenCodecError::InvalidExtensionAccountType {
                extension_type: ExtensionType::ImmutableOwner,
                account_type: AccountType::Mint,
            })
        );
        assert_eq!(
            try_calculate_account_len::<Mint>(&[ExtensionType::TokenMetadata]),
            Err(TokenCodecError::VariableSizeExtension(
                ExtensionType::TokenMetadata
            ))
        );
    }

    #[test]
    fn validate_mint_extensions_data_rejects_non_zero_padding() {
        let mut data = [0u8; TLV_START_INDEX];
        data[ACCOUNT_TYPE_INDEX] = AccountType::Mint as u8;
        data[Mint::BASE_LEN] = 1;

        assert_eq!(
            Mint::validate_extensions_data(&data),
            Err(TokenCodecError::InvalidPadding)
        );
    }

    #[test]
    fn validate_token_extensions_data_requires_account_type() {
        let mut data = [0u8; TLV_START_INDEX];

        assert_eq!(
            TokenAccount::validate_extensions_data(&data),
            Err(TokenCodecError::AccountNotInitialized)
        );

        data[ACCOUNT_TYPE_INDEX] = AccountType::Mint as u8;
        assert_eq!(
            TokenAccount::validate_extensions_data(&data),
            Err(TokenCodecError::AccountTypeMismatch {
                expected: AccountType::Account,
                found: AccountType::Mint as u8,
            })
        );

        data[ACCOUNT_TYPE_INDEX] = AccountType::Account as u8;
        assert_eq!(TokenAccount::validate_extensions_data(&data), Ok(()));
    }
}
