use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Data struct for a `TokenGroup` (80 bytes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TokenGroup {
    /// The authority that can sign to update the group
    pub update_authority: Option<Address>,
    /// The associated mint, used to counter spoofing to be sure that group
    /// belongs to a particular mint
    pub mint: Address,
    /// The current number of group members
    pub size: u64,
    /// The maximum number of group members
    pub max_size: u64,
}

impl TokenGroup {
    /// Returns the number the next member would get, or `None` once the group
    /// is full.
    pub fn next_member_number(&self) -> Option<u64> {
        let next = self.size.checked_add(1)?;
        (next <= self.max_size).then_some(next)
    }
}

impl ExtensionValue for TokenGroup {
    const TYPE: ExtensionType = ExtensionType::TokenGroup;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            update_authority: reader.read_optional_nonzero_address()?,
            mint: reader.read_address()?,
            size: reader.read_u64()?,
            max_size: reader.read_u64()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.update_authority.as_ref());
        dst.put_address(&self.mint);
        dst.put_u64(self.size);
        dst.put_u64(self.max_size);
    }
}

/// Data struct for a `TokenGroupMember` (72 bytes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TokenGroupMember {
    /// The associated mint, used to counter spoofing to be sure that member
    /// belongs to a particular mint
    pub mint: Address,
    /// The pubkey of the `TokenGroup`
    pub group: Address,
    /// The member number
    pub member_number: u64,
}

impl ExtensionValue for TokenGroupMember {
    const TYPE: ExtensionType = ExtensionType::TokenGroupMember;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            mint: reader.read_address()?,
            group: reader.read_address()?,
            member_number: reader.read_u64()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_address(&self.mint);
        dst.put_address(&self.group);
        dst.put_u64(self.member_number);
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    #[test]
    fn token_group_layout() {
        let group = TokenGroup {
            update_authority: None,
            mint: Address::new_from_array([2u8; 32]),
            size: 3,
            max_size: 10,
        };
        let mut data = Vec::new();
        group.write(&mut data);

        assert_eq!(data.len(), 80);
        assert_eq!(&data[64..72], &3u64.to_le_bytes());
        assert_eq!(&data[72..], &10u64.to_le_bytes());
        assert_eq!(unpack_value::<TokenGroup>(&data).unwrap(), group);
    }

    #[test]
    fn next_member_number_respects_max_size() {
        let mut group = TokenGroup {
            update_authority: None,
            mint: Address::new_from_array([2u8; 32]),
            size: 1,
            max_size: 2,
        };
        assert_eq!(group.next_member_number(), Some(2));

        group.size = 2;
        assert_eq!(group.next_member_number(), None);
    }

    #[test]
    fn token_group_member_layout() {
        let member = TokenGroupMember {
            mint: Address::new_from_array([1u8; 32]),
            group: Address::new_from_array([2u8; 32]),
            member_number: 9,
        };
        let mut data = Vec::new();
        member.write(&mut data);

        assert_eq!(data.len(), 72);
        assert_eq!(unpack_value::<TokenGroupMember>(&data).unwrap(), member);
    }
}
