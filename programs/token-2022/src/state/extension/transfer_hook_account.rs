use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
};

/// Transfer hook extension data for token accounts (1 byte).
///
/// Indicates whether the account is currently in the middle of a transfer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransferHookAccount {
    /// Flag to indicate that the account is in the middle of a transfer
    pub transferring: bool,
}

impl ExtensionValue for TransferHookAccount {
    const TYPE: ExtensionType = ExtensionType::TransferHookAccount;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            transferring: reader.read_bool()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_bool(self.transferring);
    }
}
