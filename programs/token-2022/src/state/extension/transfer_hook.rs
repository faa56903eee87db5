use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Transfer hook extension data for mints (64 bytes).
///
/// Configures a custom program to execute additional logic on every
/// transfer involving this mint.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransferHook {
    /// Authority that can set the transfer hook program id
    pub authority: Option<Address>,
    /// Program that authorizes the transfer
    pub program_id: Option<Address>,
}

impl ExtensionValue for TransferHook {
    const TYPE: ExtensionType = ExtensionType::TransferHook;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            program_id: reader.read_optional_nonzero_address()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_optional_nonzero_address(self.program_id.as_ref());
    }
}
