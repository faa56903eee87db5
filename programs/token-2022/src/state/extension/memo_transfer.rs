use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
};

/// Memo transfer extension data for accounts (1 byte).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MemoTransfer {
    /// Require transfers into this account to be accompanied by a memo
    pub require_incoming_transfer_memos: bool,
}

impl ExtensionValue for MemoTransfer {
    const TYPE: ExtensionType = ExtensionType::MemoTransfer;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            require_incoming_transfer_memos: reader.read_bool()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_bool(self.require_incoming_transfer_memos);
    }
}
