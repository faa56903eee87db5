use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
        state::AccountState,
    },
};

/// Default account state extension data (1 byte).
///
/// When set on a mint, all new token accounts are initialized
/// with this state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DefaultAccountState {
    pub state: AccountState,
}

impl ExtensionValue for DefaultAccountState {
    const TYPE: ExtensionType = ExtensionType::DefaultAccountState;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            state: AccountState::try_from(reader.read_u8()?)?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_u8(self.state.into());
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn default_account_state_requires_exact_fixed_length() {
        let oversized = [AccountState::Initialized as u8, AccountState::Frozen as u8];

        assert_eq!(
            unpack_value::<DefaultAccountState>(&oversized),
            Err(TokenCodecError::InvalidExtensionLength {
                extension_type: ExtensionType::DefaultAccountState,
                expected: 1,
                found: 2,
            })
        );

        let extension = unpack_value::<DefaultAccountState>(&[AccountState::Frozen as u8]).unwrap();
        assert_eq!(extension.state, AccountState::Frozen);
    }

    #[test]
    fn default_account_state_rejects_invalid_state() {
        assert_eq!(
            unpack_value::<DefaultAccountState>(&[3u8]),
            Err(TokenCodecError::InvalidAccountState(3))
        );
    }
}
