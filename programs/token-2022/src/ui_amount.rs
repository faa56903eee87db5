//! Conversions between raw token amounts and their UI representation.
//!
//! Mints without an amount-transforming extension use an exact decimal
//! conversion. Interest-bearing and scaled-UI mints use floating-point
//! arithmetic, so their conversions do not always round-trip.

use {
    crate::{
        error::TokenCodecError,
        state::extension::{InterestBearingConfig, MintWithExtensions, ScaledUiAmountConfig},
    },
    core::num::IntErrorKind,
};

/// Renders an already-scaled raw amount with `decimals` decimal places.
#[inline]
pub(crate) fn format_ui_amount(scaled_amount: f64, decimals: u8) -> String {
    (scaled_amount / 10f64.powi(i32::from(decimals))).to_string()
}

#[inline]
pub(crate) fn parse_ui_amount(ui_amount: &str) -> Result<f64, TokenCodecError> {
    ui_amount
        .parse::<f64>()
        .map_err(|_| TokenCodecError::InvalidUiAmount(ui_amount.to_string()))
}

/// Truncates a floating-point raw amount into a `u64`.
pub(crate) fn scaled_amount_to_u64(amount: f64) -> Result<u64, TokenCodecError> {
    let amount = amount.trunc();
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if !amount.is_finite() || amount < 0.0 || amount >= u64::MAX as f64 {
        return Err(TokenCodecError::AmountOverflow);
    }
    Ok(amount as u64)
}

/// Convert a raw amount to its UI representation, keeping trailing zeros.
pub fn amount_to_ui_amount_string(amount: u64, decimals: u8) -> String {
    let decimals = decimals as usize;
    if decimals > 0 {
        // left-pad so there is always a digit before the decimal point
        let mut s = format!("{:01$}", amount, decimals + 1);
        s.insert(s.len() - decimals, '.');
        s
    } else {
        amount.to_string()
    }
}

/// Convert a raw amount to its UI representation, trimming trailing zeros
/// and a trailing decimal point.
pub fn amount_to_ui_amount_string_trimmed(amount: u64, decimals: u8) -> String {
    let s = amount_to_ui_amount_string(amount, decimals);
    if decimals > 0 {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Try to convert a UI representation of a token amount to its raw amount
/// using the given decimals field.
///
/// The conversion is exact: more fractional digits than `decimals` (after
/// trimming trailing zeros) is an error.
pub fn try_ui_amount_into_amount(ui_amount: &str, decimals: u8) -> Result<u64, TokenCodecError> {
    let invalid = || TokenCodecError::InvalidUiAmount(ui_amount.to_string());

    let decimals = decimals as usize;
    let mut parts = ui_amount.split('.');
    let mut amount_str = parts.next().unwrap_or_default().to_string();
    let after_decimal = parts.next().unwrap_or_default().trim_end_matches('0');

    if (amount_str.is_empty() && after_decimal.is_empty())
        || parts.next().is_some()
        || after_decimal.len() > decimals
    {
        return Err(invalid());
    }

    amount_str.push_str(after_decimal);
    for _ in 0..decimals.saturating_sub(after_decimal.len()) {
        amount_str.push('0');
    }

    amount_str.parse::<u64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => TokenCodecError::AmountOverflow,
        _ => invalid(),
    })
}

/// Convert a raw amount to its UI representation for `mint` at
/// `unix_timestamp`.
///
/// An interest-bearing configuration takes precedence over a scaled-UI one.
pub fn amount_to_ui_amount(
    mint: &MintWithExtensions,
    amount: u64,
    unix_timestamp: i64,
) -> Result<String, TokenCodecError> {
    let decimals = mint.base.decimals;

    if let Ok(config) = mint.get_extension::<InterestBearingConfig>() {
        log::trace!("interest-bearing conversion at {unix_timestamp}");
        return config.amount_to_ui_amount(amount, decimals, unix_timestamp);
    }

    if let Ok(config) = mint.get_extension::<ScaledUiAmountConfig>() {
        log::trace!("scaled ui amount conversion at {unix_timestamp}");
        return Ok(config.amount_to_ui_amount(amount, decimals, unix_timestamp));
    }

    Ok(amount_to_ui_amount_string_trimmed(amount, decimals))
}

/// Convert a UI representation back to a raw amount for `mint` at
/// `unix_timestamp`.
pub fn ui_amount_to_amount(
    mint: &MintWithExtensions,
    ui_amount: &str,
    unix_timestamp: i64,
) -> Result<u64, TokenCodecError> {
    let decimals = mint.base.decimals;

    if let Ok(config) = mint.get_extension::<InterestBearingConfig>() {
        return config.try_ui_amount_into_amount(ui_amount, decimals, unix_timestamp);
    }

    if let Ok(config) = mint.get_extension::<ScaledUiAmountConfig>() {
        return config.try_ui_amount_into_amount(ui_amount, decimals, unix_timestamp);
    }

    try_ui_amount_into_amount(ui_amount, decimals)
}
