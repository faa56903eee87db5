use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
};

/// CPI guard extension data for accounts (1 byte).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CpiGuard {
    /// Lock privileged token operations from happening via CPI
    pub lock_cpi: bool,
}

impl ExtensionValue for CpiGuard {
    const TYPE: ExtensionType = ExtensionType::CpiGuard;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            lock_cpi: reader.read_bool()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_bool(self.lock_cpi);
    }
}
