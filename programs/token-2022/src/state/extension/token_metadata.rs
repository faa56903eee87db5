use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{string_len, ByteReader, WriteBytes, ADDRESS_LEN},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Fields in the metadata account, used for updating.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Field {
    /// The name field, corresponding to `TokenMetadata.name`
    Name,
    /// The symbol field, corresponding to `TokenMetadata.symbol`
    Symbol,
    /// The uri field, corresponding to `TokenMetadata.uri`
    Uri,
    /// A user field, whose key is given by the associated string
    Key(String),
}

/// Data struct for all token-metadata, stored in a TLV entry.
///
/// The payload has a variable size: strings are `u32` length-prefixed and the
/// additional metadata is a `u32` count followed by key / value pairs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TokenMetadata {
    /// The authority that can sign to update the metadata
    pub update_authority: Option<Address>,
    /// The associated mint, used to counter spoofing to be sure that metadata
    /// belongs to a particular mint
    pub mint: Address,
    /// The longer name of the token
    pub name: String,
    /// The shortened symbol for the token
    pub symbol: String,
    /// The URI pointing to richer metadata
    pub uri: String,
    /// Any additional metadata about the token as key-value pairs. The program
    /// must avoid storing the same key twice.
    pub additional_metadata: Vec<(String, String)>,
}

impl TokenMetadata {
    /// Update a field, overwriting the existing value. A new key is appended
    /// after the existing ones.
    pub fn update(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Symbol => self.symbol = value,
            Field::Uri => self.uri = value,
            Field::Key(key) => self.set_key_value(key, value),
        }
    }

    fn set_key_value(&mut self, new_key: String, new_value: String) {
        match self
            .additional_metadata
            .iter_mut()
            .find(|(key, _)| *key == new_key)
        {
            Some((_, value)) => *value = new_value,
            None => self.additional_metadata.push((new_key, new_value)),
        }
    }

    /// Removes the key-value pair given by the provided key.
    pub fn remove_key(&mut self, key: &str) -> Result<(), TokenCodecError> {
        let len = self.additional_metadata.len();
        self.additional_metadata.retain(|(k, _)| k != key);

        if self.additional_metadata.len() == len {
            return Err(TokenCodecError::MissingExtensionField {
                extension_type: ExtensionType::TokenMetadata,
                field: key.to_string(),
            });
        }
        Ok(())
    }

    /// Value stored under `key` in the additional metadata.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.additional_metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

impl ExtensionValue for TokenMetadata {
    const TYPE: ExtensionType = ExtensionType::TokenMetadata;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        let update_authority = reader.read_optional_nonzero_address()?;
        let mint = reader.read_address()?;
        let name = reader.read_string()?;
        let symbol = reader.read_string()?;
        let uri = reader.read_string()?;

        let count = reader.read_u32()? as usize;
        // each pair needs at least its two length prefixes
        let mut additional_metadata = Vec::with_capacity(count.min(reader.remaining() / 8));
        for _ in 0..count {
            let key = reader.read_string()?;
            let value = reader.read_string()?;
            additional_metadata.push((key, value));
        }

        Ok(Self {
            update_authority,
            mint,
            name,
            symbol,
            uri,
            additional_metadata,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.update_authority.as_ref());
        dst.put_address(&self.mint);
        dst.put_string(&self.name);
        dst.put_string(&self.symbol);
        dst.put_string(&self.uri);
        dst.put_u32(self.additional_metadata.len() as u32);
        for (key, value) in &self.additional_metadata {
            dst.put_string(key);
            dst.put_string(value);
        }
    }

    fn packed_len(&self) -> usize {
        ADDRESS_LEN
            + ADDRESS_LEN
            + string_len(&self.name)
            + string_len(&self.symbol)
            + string_len(&self.uri)
            + 4
            + self
                .additional_metadata
                .iter()
                .map(|(key, value)| string_len(key) + string_len(value))
                .sum::<usize>()
    }
}
