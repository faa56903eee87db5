use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
        ui_amount::{format_ui_amount, parse_ui_amount, scaled_amount_to_u64},
    },
    solana_address::Address,
};

/// Annual interest rate, expressed as basis points
pub type BasisPoints = i16;

const ONE_IN_BASIS_POINTS: f64 = 10_000.;
const SECONDS_PER_YEAR: f64 = 60. * 60. * 24. * 365.24;

/// Interest-bearing extension data for mints (52 bytes).
///
/// Tokens accrue interest at an annual rate expressed by `current_rate`,
/// compounded continuously, so APY will be higher than the published
/// interest rate.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct InterestBearingConfig {
    /// Authority that can set the interest rate and authority
    pub rate_authority: Option<Address>,
    /// Timestamp of initialization, from which to base interest calculations
    pub initialization_timestamp: i64,
    /// Average rate from initialization until the last time it was updated
    pub pre_update_average_rate: BasisPoints,
    /// Timestamp of the last update, used to calculate the total amount accrued
    pub last_update_timestamp: i64,
    /// Current rate, since the last update
    pub current_rate: BasisPoints,
}

/// `exp(rate * (end - start) / (seconds per year * 10_000))`.
fn calculate_exponent_for_times_and_rate(
    start: i64,
    end: i64,
    rate: BasisPoints,
) -> Result<f64, TokenCodecError> {
    let timespan = end
        .checked_sub(start)
        .filter(|timespan| *timespan >= 0)
        .ok_or(TokenCodecError::InvalidTimespan)?;

    let exponent = (f64::from(rate) * timespan as f64) / (SECONDS_PER_YEAR * ONE_IN_BASIS_POINTS);
    Ok(exponent.exp())
}

impl InterestBearingConfig {
    /// Total multiplicative scale at `unix_timestamp`: the pre-update average
    /// rate applied from initialization to the last update, times the current
    /// rate applied from the last update to `unix_timestamp`.
    pub fn total_scale(&self, unix_timestamp: i64) -> Result<f64, TokenCodecError> {
        let pre_update_exp = calculate_exponent_for_times_and_rate(
            self.initialization_timestamp,
            self.last_update_timestamp,
            self.pre_update_average_rate,
        )?;
        let post_update_exp = calculate_exponent_for_times_and_rate(
            self.last_update_timestamp,
            unix_timestamp,
            self.current_rate,
        )?;

        Ok(pre_update_exp * post_update_exp)
    }

    /// Convert a raw amount to its UI representation including accrued
    /// interest at `unix_timestamp`.
    pub fn amount_to_ui_amount(
        &self,
        amount: u64,
        decimals: u8,
        unix_timestamp: i64,
    ) -> Result<String, TokenCodecError> {
        let scaled_amount = (amount as f64 * self.total_scale(unix_timestamp)?).trunc();
        Ok(format_ui_amount(scaled_amount, decimals))
    }

    /// Try to convert a UI representation of a token amount (principal plus
    /// interest) back to the principal raw amount.
    pub fn try_ui_amount_into_amount(
        &self,
        ui_amount: &str,
        decimals: u8,
        unix_timestamp: i64,
    ) -> Result<u64, TokenCodecError> {
        let scaled_amount = parse_ui_amount(ui_amount)? * 10f64.powi(i32::from(decimals));
        scaled_amount_to_u64(scaled_amount / self.total_scale(unix_timestamp)?)
    }
}

impl ExtensionValue for InterestBearingConfig {
    const TYPE: ExtensionType = ExtensionType::InterestBearingConfig;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            rate_authority: reader.read_optional_nonzero_address()?,
            initialization_timestamp: reader.read_i64()?,
            pre_update_average_rate: reader.read_i16()?,
            last_update_timestamp: reader.read_i64()?,
            current_rate: reader.read_i16()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.rate_authority.as_ref());
        dst.put_i64(self.initialization_timestamp);
        dst.put_i16(self.pre_update_average_rate);
        dst.put_i64(self.last_update_timestamp);
        dst.put_i16(self.current_rate);
    }
}
