//! Fixed-width primitives shared by the base records and the extension
//! values.
//!
//! All multi-byte integers are little-endian. Two optional encodings exist on
//! the wire:
//!
//! - the 1-byte C-option (`0` absent, `1` followed by the value), whose width
//!   depends on presence;
//! - the fixed C-option used by the base records, a 4-byte tag followed by
//!   the value slot, which is zero-filled when absent.
//!
//! Extension values instead encode optional addresses as a plain 32-byte
//! address where all zeroes means "none".

use {crate::error::TokenCodecError, solana_address::Address};

/// Length of an encoded address.
pub const ADDRESS_LEN: usize = 32;

/// Length of a fixed C-option tag in the base records.
pub const COPTION_TAG_LEN: usize = 4;

/// Length of an ElGamal public key.
pub const ELGAMAL_PUBKEY_LEN: usize = 32;

/// Length of an ElGamal ciphertext.
pub const ELGAMAL_CIPHERTEXT_LEN: usize = 64;

/// Length of an authenticated-encryption ciphertext.
pub const AE_CIPHERTEXT_LEN: usize = 36;

/// Cursor over a borrowed byte slice.
///
/// Every read either consumes exactly the bytes of the value or fails with
/// [`TokenCodecError::BufferTooShort`] without advancing.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    #[inline(always)]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], TokenCodecError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(TokenCodecError::BufferTooShort {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], TokenCodecError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, TokenCodecError> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, TokenCodecError> {
        self.read_array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, TokenCodecError> {
        self.read_array().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, TokenCodecError> {
        self.read_array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, TokenCodecError> {
        self.read_array().map(u64::from_le_bytes)
    }

    #[inline]
    pub fn read_i64(&mut self) -> Result<i64, TokenCodecError> {
        self.read_array().map(i64::from_le_bytes)
    }

    #[inline]
    pub fn read_f64(&mut self) -> Result<f64, TokenCodecError> {
        self.read_array().map(f64::from_le_bytes)
    }

    pub fn read_bool(&mut self) -> Result<bool, TokenCodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(TokenCodecError::InvalidBool(value)),
        }
    }

    #[inline]
    pub fn read_address(&mut self) -> Result<Address, TokenCodecError> {
        self.read_array::<ADDRESS_LEN>().map(Address::new_from_array)
    }

    /// Reads a 32-byte address where all zeroes decodes to `None`.
    pub fn read_optional_nonzero_address(&mut self) -> Result<Option<Address>, TokenCodecError> {
        let bytes = self.read_array::<ADDRESS_LEN>()?;
        Ok((bytes != [0u8; ADDRESS_LEN]).then(|| Address::new_from_array(bytes)))
    }

    /// Reads a 1-byte-tag C-option address.
    pub fn read_coption_address(&mut self) -> Result<Option<Address>, TokenCodecError> {
        let start = self.offset;
        let tag = self.read_u8()?;
        self.read_coption_value(start, u32::from(tag), Self::read_address)
    }

    /// Reads a 1-byte-tag C-option `u64`.
    pub fn read_coption_u64(&mut self) -> Result<Option<u64>, TokenCodecError> {
        let start = self.offset;
        let tag = self.read_u8()?;
        self.read_coption_value(start, u32::from(tag), Self::read_u64)
    }

    /// Reads a base-record C-option address (4-byte tag, fixed 36 bytes).
    pub fn read_fixed_coption_address(&mut self) -> Result<Option<Address>, TokenCodecError> {
        let start = self.offset;
        let tag = self.read_u32()?;
        let value = self.read_address();
        self.fixed_coption(start, tag, value)
    }

    /// Reads a base-record C-option `u64` (4-byte tag, fixed 12 bytes).
    pub fn read_fixed_coption_u64(&mut self) -> Result<Option<u64>, TokenCodecError> {
        let start = self.offset;
        let tag = self.read_u32()?;
        let value = self.read_u64();
        self.fixed_coption(start, tag, value)
    }

    /// Reads a `u32` length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String, TokenCodecError> {
        let start = self.offset;
        let len = self.read_u32()? as usize;
        let bytes = self.read_bytes(len).inspect_err(|_| self.offset = start)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| TokenCodecError::InvalidUtf8)
    }

    fn read_coption_value<T>(
        &mut self,
        start: usize,
        tag: u32,
        read: impl FnOnce(&mut Self) -> Result<T, TokenCodecError>,
    ) -> Result<Option<T>, TokenCodecError> {
        match tag {
            0 => Ok(None),
            1 => read(self).map(Some).inspect_err(|_| self.offset = start),
            tag => {
                self.offset = start;
                Err(TokenCodecError::InvalidOptionDiscriminant(tag))
            }
        }
    }

    fn fixed_coption<T>(
        &mut self,
        start: usize,
        tag: u32,
        value: Result<T, TokenCodecError>,
    ) -> Result<Option<T>, TokenCodecError> {
        let result = match (tag, value) {
            (_, Err(error)) => Err(error),
            (0, Ok(_)) => Ok(None),
            (1, Ok(value)) => Ok(Some(value)),
            (tag, Ok(_)) => Err(TokenCodecError::InvalidOptionDiscriminant(tag)),
        };
        if result.is_err() {
            self.offset = start;
        }
        result
    }
}

/// Little-endian writers over a growable buffer.
pub trait WriteBytes {
    fn put_bytes(&mut self, bytes: &[u8]);

    #[inline(always)]
    fn put_u8(&mut self, value: u8) {
        self.put_bytes(&[value]);
    }

    #[inline(always)]
    fn put_u16(&mut self, value: u16) {
        self.put_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    fn put_i16(&mut self, value: i16) {
        self.put_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    fn put_u32(&mut self, value: u32) {
        self.put_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    fn put_u64(&mut self, value: u64) {
        self.put_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    fn put_i64(&mut self, value: i64) {
        self.put_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    fn put_f64(&mut self, value: f64) {
        self.put_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    fn put_bool(&mut self, value: bool) {
        self.put_u8(value as u8);
    }

    #[inline(always)]
    fn put_address(&mut self, address: &Address) {
        self.put_bytes(address.as_ref());
    }

    fn put_optional_nonzero_address(&mut self, address: Option<&Address>) {
        match address {
            Some(address) => self.put_address(address),
            None => self.put_bytes(&[0u8; ADDRESS_LEN]),
        }
    }

    fn put_coption_address(&mut self, address: Option<&Address>) {
        match address {
            Some(address) => {
                self.put_u8(1);
                self.put_address(address);
            }
            None => self.put_u8(0),
        }
    }

    fn put_coption_u64(&mut self, value: Option<u64>) {
        match value {
            Some(value) => {
                self.put_u8(1);
                self.put_u64(value);
            }
            None => self.put_u8(0),
        }
    }

    fn put_fixed_coption_address(&mut self, address: Option<&Address>) {
        match address {
            Some(address) => {
                self.put_u32(1);
                self.put_address(address);
            }
            None => {
                self.put_u32(0);
                self.put_bytes(&[0u8; ADDRESS_LEN]);
            }
        }
    }

    fn put_fixed_coption_u64(&mut self, value: Option<u64>) {
        self.put_u32(value.is_some() as u32);
        self.put_u64(value.unwrap_or_default());
    }

    fn put_string(&mut self, value: &str) {
        self.put_u32(value.len() as u32);
        self.put_bytes(value.as_bytes());
    }
}

impl WriteBytes for Vec<u8> {
    #[inline(always)]
    fn put_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Encoded length of a `u32` length-prefixed string.
#[inline(always)]
pub fn string_len(value: &str) -> usize {
    4 + value.len()
}

/// Decodes a 1-byte-tag C-option address, returning the value and the number
/// of bytes consumed (1 when absent, 33 when present).
pub fn decode_coption_address(data: &[u8]) -> Result<(Option<Address>, usize), TokenCodecError> {
    let mut reader = ByteReader::new(data);
    let value = reader.read_coption_address()?;
    Ok((value, reader.offset()))
}

/// Decodes a 1-byte-tag C-option `u64`, returning the value and the number
/// of bytes consumed (1 when absent, 9 when present).
pub fn decode_coption_u64(data: &[u8]) -> Result<(Option<u64>, usize), TokenCodecError> {
    let mut reader = ByteReader::new(data);
    let value = reader.read_coption_u64()?;
    Ok((value, reader.offset()))
}

pub fn encode_coption_address(address: Option<&Address>) -> Vec<u8> {
    let mut data = Vec::with_capacity(1 + ADDRESS_LEN);
    data.put_coption_address(address);
    data
}

pub fn encode_coption_u64(value: Option<u64>) -> Vec<u8> {
    let mut data = Vec::with_capacity(9);
    data.put_coption_u64(value);
    data
}

macro_rules! opaque_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            #[inline(always)]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            #[inline(always)]
            pub fn is_zeroed(&self) -> bool {
                self.0 == [0u8; $len]
            }

            #[inline(always)]
            pub(crate) fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
                reader.read_array().map(Self)
            }

            #[inline(always)]
            pub(crate) fn write(&self, dst: &mut Vec<u8>) {
                dst.put_bytes(&self.0);
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self([0u8; $len])
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde_base64::serialize(&self.0, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                serde_base64::deserialize(deserializer).map(Self)
            }
        }
    };
}

opaque_bytes!(
    /// ElGamal public key, carried as opaque bytes.
    PodElGamalPubkey,
    ELGAMAL_PUBKEY_LEN
);

opaque_bytes!(
    /// ElGamal ciphertext, carried as opaque bytes.
    PodElGamalCiphertext,
    ELGAMAL_CIPHERTEXT_LEN
);

opaque_bytes!(
    /// Authenticated-encryption ciphertext, carried as opaque bytes.
    PodAeCiphertext,
    AE_CIPHERTEXT_LEN
);

impl ByteReader<'_> {
    /// Reads an ElGamal public key where all zeroes decodes to `None`.
    pub fn read_optional_nonzero_elgamal_pubkey(
        &mut self,
    ) -> Result<Option<PodElGamalPubkey>, TokenCodecError> {
        let key = PodElGamalPubkey::read(self)?;
        Ok((!key.is_zeroed()).then_some(key))
    }
}

pub(crate) fn put_optional_nonzero_elgamal_pubkey(
    dst: &mut Vec<u8>,
    key: Option<&PodElGamalPubkey>,
) {
    key.copied().unwrap_or_default().write(dst);
}

#[cfg(feature = "serde")]
mod serde_base64 {
    use {
        base64::{engine::general_purpose::STANDARD, Engine},
        serde::{de::Error, Deserialize, Deserializer, Serializer},
    };

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let decoded = STANDARD.decode(encoded).map_err(D::Error::custom)?;
        decoded
            .try_into()
            .map_err(|bytes: Vec<u8>| D::Error::invalid_length(bytes.len(), &"fixed-size bytes"))
    }
}
