use {
    super::{Extension, ExtensionType, TLV_HEADER_LEN},
    crate::{codec::WriteBytes, error::TokenCodecError},
};

#[inline(always)]
fn read_header(tlv_data: &[u8], offset: usize) -> (u16, usize) {
    let extension_type = u16::from_le_bytes([tlv_data[offset], tlv_data[offset + 1]]);
    let length = u16::from_le_bytes([tlv_data[offset + 2], tlv_data[offset + 3]]) as usize;
    (extension_type, length)
}

/// Decodes every TLV entry in `tlv_data`, in encounter order.
///
/// Decoding stops at the first entry of type `Uninitialized` or when fewer
/// bytes than a TLV header remain; the rest of the buffer is padding.
pub fn unpack_tlv(tlv_data: &[u8]) -> Result<Vec<Extension>, TokenCodecError> {
    let mut extensions = Vec::new();
    let mut offset = 0;

    while offset + TLV_HEADER_LEN <= tlv_data.len() {
        let (extension_type, length) = read_header(tlv_data, offset);

        if extension_type == ExtensionType::Uninitialized as u16 {
            log::trace!("uninitialized entry at offset {offset}, treating the rest as padding");
            return Ok(extensions);
        }

        let value_start = offset + TLV_HEADER_LEN;
        let remaining = tlv_data.len() - value_start;
        if length > remaining {
            return Err(TokenCodecError::TruncatedExtensionData {
                extension_type,
                declared: length,
                remaining,
            });
        }

        let value_end = value_start + length;
        extensions.push(Extension::unpack(
            extension_type,
            &tlv_data[value_start..value_end],
        )?);
        offset = value_end;
    }

    if offset < tlv_data.len() {
        log::trace!("{} trailing bytes of padding", tlv_data.len() - offset);
    }

    Ok(extensions)
}

/// Appends one TLV entry per extension to `dst`, in order.
///
/// Duplicate types are written as separate entries. No padding is added.
/// Every entry is validated before anything is written, so `dst` is left
/// untouched on error.
pub fn pack_tlv(extensions: &[Extension], dst: &mut Vec<u8>) -> Result<(), TokenCodecError> {
    let lengths = extensions
        .iter()
        .map(validate_entry)
        .collect::<Result<Vec<_>, _>>()?;

    dst.reserve(
        lengths
            .iter()
            .map(|length| TLV_HEADER_LEN + usize::from(*length))
            .sum(),
    );
    for (extension, length) in extensions.iter().zip(lengths) {
        dst.put_u16(extension.type_code());
        dst.put_u16(length);
        extension.write_value(dst);
    }

    Ok(())
}

/// Returns the TLV length of `extension` if it can be encoded and decoded back
/// to the same record.
fn validate_entry(extension: &Extension) -> Result<u16, TokenCodecError> {
    match (extension, ExtensionType::try_from(extension.type_code())) {
        (_, Ok(ExtensionType::Uninitialized)) => {
            return Err(TokenCodecError::ReservedExtensionType);
        }
        (Extension::Unparsed { .. }, Ok(known)) => {
            return Err(TokenCodecError::UnparsedKnownExtensionType(known));
        }
        _ => {}
    }

    let length = extension.packed_len();
    u16::try_from(length).map_err(|_| TokenCodecError::ExtensionTooLarge(length))
}

/// Find the value bytes for a given extension type via linear TLV walk.
///
/// Returns the first entry when the type appears more than once.
#[inline]
pub fn get_extension_bytes_from_tlv(
    tlv_data: &[u8],
    target: ExtensionType,
) -> Result<&[u8], TokenCodecError> {
    let target_val = target as u16;
    let mut offset = 0;

    while offset + TLV_HEADER_LEN <= tlv_data.len() {
        let (extension_type, length) = read_header(tlv_data, offset);

        if extension_type == ExtensionType::Uninitialized as u16 {
            return Err(TokenCodecError::ExtensionNotFound);
        }

        let value_start = offset + TLV_HEADER_LEN;
        let value_end = value_start + length;

        if value_end > tlv_data.len() {
            return Err(TokenCodecError::TruncatedExtensionData {
                extension_type,
                declared: length,
                remaining: tlv_data.len() - value_start,
            });
        }

        if extension_type == target_val {
            return Ok(&tlv_data[value_start..value_end]);
        }

        offset = value_end;
    }

    Err(TokenCodecError::ExtensionNotFound)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::state::{
            extension::{
                DefaultAccountState, ImmutableOwner, MemoTransfer, PermanentDelegate, TokenMetadata,
            },
            AccountState,
        },
        solana_address::Address,
    };

    fn push_tlv_entry(buffer: &mut Vec<u8>, extension_type: u16, value: &[u8]) {
        buffer.extend_from_slice(&extension_type.to_le_bytes());
        buffer.extend_from_slice(&(value.len() as u16).to_le_bytes());
        buffer.extend_from_slice(value);
    }

    #[test]
    fn unpack_tlv_decodes_entries_in_order() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(
            &mut tlv_data,
            ExtensionType::PermanentDelegate as u16,
            &[9u8; 32],
        );
        push_tlv_entry(
            &mut tlv_data,
            ExtensionType::DefaultAccountState as u16,
            &[AccountState::Frozen as u8],
        );

        assert_eq!(
            unpack_tlv(&tlv_data).unwrap(),
            vec![
                Extension::PermanentDelegate(PermanentDelegate {
                    delegate: Some(Address::new_from_array([9u8; 32])),
                }),
                Extension::DefaultAccountState(DefaultAccountState {
                    state: AccountState::Frozen,
                }),
            ]
        );
    }

    #[test]
    fn unpack_tlv_treats_short_tail_as_padding() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(&mut tlv_data, ExtensionType::ImmutableOwner as u16, &[]);
        tlv_data.extend_from_slice(&[0u8; 3]);

        assert_eq!(
            unpack_tlv(&tlv_data).unwrap(),
            vec![Extension::ImmutableOwner(ImmutableOwner)]
        );
    }

    #[test]
    fn unpack_tlv_stops_at_uninitialized_entry() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(&mut tlv_data, ExtensionType::MemoTransfer as u16, &[1]);
        push_tlv_entry(&mut tlv_data, ExtensionType::Uninitialized as u16, &[]);
        push_tlv_entry(&mut tlv_data, ExtensionType::ImmutableOwner as u16, &[]);

        assert_eq!(
            unpack_tlv(&tlv_data).unwrap(),
            vec![Extension::MemoTransfer(MemoTransfer {
                require_incoming_transfer_memos: true,
            })]
        );
    }

    #[test]
    fn unpack_tlv_rejects_truncated_value() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(&mut tlv_data, ExtensionType::ImmutableOwner as u16, &[]);
        tlv_data.extend_from_slice(&(ExtensionType::PermanentDelegate as u16).to_le_bytes());
        tlv_data.extend_from_slice(&32u16.to_le_bytes());
        tlv_data.extend_from_slice(&[1u8; 20]);

        assert_eq!(
            unpack_tlv(&tlv_data),
            Err(TokenCodecError::TruncatedExtensionData {
                extension_type: ExtensionType::PermanentDelegate as u16,
                declared: 32,
                remaining: 20,
            })
        );
    }

    #[test]
    fn unknown_entry_round_trips_byte_for_byte() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(&mut tlv_data, 777, &[5, 4, 3, 2, 1]);
        push_tlv_entry(&mut tlv_data, ExtensionType::ImmutableOwner as u16, &[]);

        let extensions = unpack_tlv(&tlv_data).unwrap();
        assert_eq!(
            extensions[0],
            Extension::Unparsed {
                extension_type: 777,
                data: vec![5, 4, 3, 2, 1],
            }
        );

        let mut encoded = Vec::new();
        pack_tlv(&extensions, &mut encoded).unwrap();
        assert_eq!(encoded, tlv_data);
    }

    #[test]
    fn pack_tlv_keeps_duplicates() {
        let extensions = vec![
            Extension::MemoTransfer(MemoTransfer {
                require_incoming_transfer_memos: false,
            }),
            Extension::MemoTransfer(MemoTransfer {
                require_incoming_transfer_memos: true,
            }),
        ];

        let mut encoded = Vec::new();
        pack_tlv(&extensions, &mut encoded).unwrap();

        assert_eq!(encoded, vec![8, 0, 1, 0, 0, 8, 0, 1, 0, 1]);
        assert_eq!(unpack_tlv(&encoded).unwrap(), extensions);
    }

    #[test]
    fn pack_tlv_rejects_reserved_type() {
        let extensions = [Extension::Unparsed {
            extension_type: 0,
            data: vec![],
        }];

        assert_eq!(
            pack_tlv(&extensions, &mut Vec::new()),
            Err(TokenCodecError::ReservedExtensionType)
        );
    }

    #[test]
    fn pack_tlv_rejects_unparsed_record_with_known_type() {
        let extensions = [Extension::Unparsed {
            extension_type: ExtensionType::MintCloseAuthority as u16,
            data: vec![1, 2],
        }];

        assert_eq!(
            pack_tlv(&extensions, &mut Vec::new()),
            Err(TokenCodecError::UnparsedKnownExtensionType(
                ExtensionType::MintCloseAuthority
            ))
        );
    }

    #[test]
    fn pack_tlv_leaves_buffer_untouched_on_error() {
        let extensions = [
            Extension::MemoTransfer(MemoTransfer {
                require_incoming_transfer_memos: true,
            }),
            Extension::Unparsed {
                extension_type: 0,
                data: vec![7],
            },
        ];
        let mut dst = vec![0xaa, 0xbb];

        assert_eq!(
            pack_tlv(&extensions, &mut dst),
            Err(TokenCodecError::ReservedExtensionType)
        );
        assert_eq!(dst, vec![0xaa, 0xbb]);
    }

    #[test]
    fn pack_tlv_appends_after_existing_bytes() {
        let extensions = [Extension::ImmutableOwner(ImmutableOwner)];
        let mut dst = vec![0xaa];

        pack_tlv(&extensions, &mut dst).unwrap();
        assert_eq!(dst, vec![0xaa, 7, 0, 0, 0]);
    }

    #[test]
    fn pack_tlv_rejects_oversized_value() {
        let metadata = TokenMetadata {
            update_authority: None,
            mint: Address::new_from_array([1u8; 32]),
            name: "a".repeat(u16::MAX as usize),
            symbol: String::new(),
            uri: String::new(),
            additional_metadata: Vec::new(),
        };
        let len = 32 + 32 + 4 + u16::MAX as usize + 4 + 4 + 4;

        assert_eq!(
            pack_tlv(&[Extension::TokenMetadata(metadata)], &mut Vec::new()),
            Err(TokenCodecError::ExtensionTooLarge(len))
        );
    }

    #[test]
    fn get_extension_bytes_from_tlv_finds_middle_entry() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(
            &mut tlv_data,
            ExtensionType::PermanentDelegate as u16,
            &[9u8; 32],
        );
        push_tlv_entry(
            &mut tlv_data,
            ExtensionType::DefaultAccountState as u16,
            &[AccountState::Frozen as u8],
        );
        push_tlv_entry(&mut tlv_data, ExtensionType::TransferHook as u16, &[5u8; 64]);

        let bytes =
            get_extension_bytes_from_tlv(&tlv_data, ExtensionType::DefaultAccountState).unwrap();
        assert_eq!(bytes, [AccountState::Frozen as u8]);
    }

    #[test]
    fn get_extension_bytes_from_tlv_returns_first_duplicate_entry() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(
            &mut tlv_data,
            ExtensionType::DefaultAccountState as u16,
            &[AccountState::Initialized as u8],
        );
        push_tlv_entry(
            &mut tlv_data,
            ExtensionType::DefaultAccountState as u16,
            &[AccountState::Frozen as u8],
        );

        let bytes =
            get_extension_bytes_from_tlv(&tlv_data, ExtensionType::DefaultAccountState).unwrap();
        assert_eq!(bytes, [AccountState::Initialized as u8]);
    }

    #[test]
    fn get_extension_bytes_from_tlv_stops_at_uninitialized_entry() {
        let mut tlv_data = Vec::new();
        push_tlv_entry(&mut tlv_data, ExtensionType::Uninitialized as u16, &[]);
        push_tlv_entry(&mut tlv_data, ExtensionType::TransferHookAccount as u16, &[1u8]);

        assert_eq!(
            get_extension_bytes_from_tlv(&tlv_data, ExtensionType::TransferHookAccount),
            Err(TokenCodecError::ExtensionNotFound)
        );
    }

    #[test]
    fn get_extension_bytes_from_tlv_rejects_overflow() {
        let mut tlv = [0u8; 6];
        tlv[..2].copy_from_slice(&(ExtensionType::DefaultAccountState as u16).to_le_bytes());
        tlv[2..4].copy_from_slice(&5u16.to_le_bytes());

        assert!(matches!(
            get_extension_bytes_from_tlv(&tlv, ExtensionType::DefaultAccountState),
            Err(TokenCodecError::TruncatedExtensionData { declared: 5, .. })
        ));
    }
}
