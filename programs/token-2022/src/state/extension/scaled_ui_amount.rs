use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
        ui_amount::{format_ui_amount, parse_ui_amount, scaled_amount_to_u64},
    },
    solana_address::Address,
};

/// Scaled UI amount extension data for mints (56 bytes).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScaledUiAmountConfig {
    /// Authority that can set the scaling amount and authority
    pub authority: Option<Address>,
    /// Amount to multiply raw amounts by, outside of the decimal
    pub multiplier: f64,
    /// Unix timestamp at which `new_multiplier` comes into effective
    pub new_multiplier_effective_timestamp: i64,
    /// Next multiplier, once `new_multiplier_effective_timestamp` is reached
    pub new_multiplier: f64,
}

impl ScaledUiAmountConfig {
    /// Multiplier in effect at `unix_timestamp`.
    pub fn current_multiplier(&self, unix_timestamp: i64) -> f64 {
        if unix_timestamp >= self.new_multiplier_effective_timestamp {
            self.new_multiplier
        } else {
            self.multiplier
        }
    }

    /// Convert a raw amount to its UI representation using the multiplier in
    /// effect at `unix_timestamp`.
    pub fn amount_to_ui_amount(&self, amount: u64, decimals: u8, unix_timestamp: i64) -> String {
        let scaled_amount = (amount as f64 * self.current_multiplier(unix_timestamp)).trunc();
        format_ui_amount(scaled_amount, decimals)
    }

    /// Try to convert a UI representation of a token amount to its raw amount
    /// using the multiplier in effect at `unix_timestamp`.
    pub fn try_ui_amount_into_amount(
        &self,
        ui_amount: &str,
        decimals: u8,
        unix_timestamp: i64,
    ) -> Result<u64, TokenCodecError> {
        let multiplier = self.current_multiplier(unix_timestamp);
        if multiplier == 0.0 {
            return Err(TokenCodecError::ZeroMultiplier);
        }

        let raw_amount = parse_ui_amount(ui_amount)? * 10f64.powi(i32::from(decimals));
        scaled_amount_to_u64(raw_amount / multiplier)
    }
}

impl ExtensionValue for ScaledUiAmountConfig {
    const TYPE: ExtensionType = ExtensionType::ScaledUiAmount;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            authority: reader.read_optional_nonzero_address()?,
            multiplier: reader.read_f64()?,
            new_multiplier_effective_timestamp: reader.read_i64()?,
            new_multiplier: reader.read_f64()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.authority.as_ref());
        dst.put_f64(self.multiplier);
        dst.put_i64(self.new_multiplier_effective_timestamp);
        dst.put_f64(self.new_multiplier);
    }
}
