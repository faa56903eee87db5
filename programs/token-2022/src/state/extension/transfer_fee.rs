use {
    super::{ExtensionType, ExtensionValue},
    crate::{
        codec::{ByteReader, WriteBytes},
        error::TokenCodecError,
    },
    solana_address::Address,
};

/// Maximum possible fee in basis points is `100%`, aka 10_000 basis points.
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;

const ONE_IN_BASIS_POINTS: u128 = MAX_FEE_BASIS_POINTS as u128;

/// Transfer fee information (18 bytes).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransferFee {
    /// First epoch where the transfer fee takes effect
    pub epoch: u64,
    /// Maximum fee assessed on transfers, expressed as an amount of tokens
    pub maximum_fee: u64,
    /// Amount of transfer collected as fees, expressed as basis points of
    /// the transfer amount, ie. increments of 0.01%
    pub transfer_fee_basis_points: u16,
}

impl TransferFee {
    pub const LEN: usize = 18;

    /// Calculate ceiling-division
    ///
    /// Ceiling-division `ceil[ numerator / denominator ]` can be represented
    /// as a floor-division `floor[ (numerator + denominator - 1) /
    /// denominator ]`
    fn ceil_div(numerator: u128, denominator: u128) -> Option<u128> {
        numerator
            .checked_add(denominator)?
            .checked_sub(1)?
            .checked_div(denominator)
    }

    /// Calculate the transfer fee
    pub fn calculate_fee(&self, pre_fee_amount: u64) -> Option<u64> {
        let transfer_fee_basis_points = u128::from(self.transfer_fee_basis_points);
        if transfer_fee_basis_points == 0 || pre_fee_amount == 0 {
            return Some(0);
        }

        let numerator = u128::from(pre_fee_amount).checked_mul(transfer_fee_basis_points)?;
        let raw_fee: u64 = Self::ceil_div(numerator, ONE_IN_BASIS_POINTS)?
            .try_into()
            .ok()?;

        Some(raw_fee.min(self.maximum_fee))
    }

    /// Calculate the gross transfer amount after deducting fees
    pub fn calculate_post_fee_amount(&self, pre_fee_amount: u64) -> Option<u64> {
        pre_fee_amount.checked_sub(self.calculate_fee(pre_fee_amount)?)
    }

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            epoch: reader.read_u64()?,
            maximum_fee: reader.read_u64()?,
            transfer_fee_basis_points: reader.read_u16()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_u64(self.epoch);
        dst.put_u64(self.maximum_fee);
        dst.put_u16(self.transfer_fee_basis_points);
    }
}

/// Transfer fee extension data for mints (108 bytes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransferFeeConfig {
    /// Optional authority to set the fee
    pub transfer_fee_config_authority: Option<Address>,
    /// Withdraw from mint instructions must be signed by this key
    pub withdraw_withheld_authority: Option<Address>,
    /// Withheld transfer fee tokens that have been moved to the mint for
    /// withdrawal
    pub withheld_amount: u64,
    /// Older transfer fee, used if the current epoch < new_transfer_fee.epoch
    pub older_transfer_fee: TransferFee,
    /// Newer transfer fee, used if the current epoch >= new_transfer_fee.epoch
    pub newer_transfer_fee: TransferFee,
}

impl TransferFeeConfig {
    /// Get the fee for the given epoch
    pub fn get_epoch_fee(&self, epoch: u64) -> &TransferFee {
        if epoch >= self.newer_transfer_fee.epoch {
            &self.newer_transfer_fee
        } else {
            &self.older_transfer_fee
        }
    }

    /// Calculate the fee for the given epoch and input amount
    pub fn calculate_epoch_fee(&self, epoch: u64, pre_fee_amount: u64) -> Option<u64> {
        self.get_epoch_fee(epoch).calculate_fee(pre_fee_amount)
    }
}

impl ExtensionValue for TransferFeeConfig {
    const TYPE: ExtensionType = ExtensionType::TransferFeeConfig;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            transfer_fee_config_authority: reader.read_optional_nonzero_address()?,
            withdraw_withheld_authority: reader.read_optional_nonzero_address()?,
            withheld_amount: reader.read_u64()?,
            older_transfer_fee: TransferFee::read(reader)?,
            newer_transfer_fee: TransferFee::read(reader)?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_optional_nonzero_address(self.transfer_fee_config_authority.as_ref());
        dst.put_optional_nonzero_address(self.withdraw_withheld_authority.as_ref());
        dst.put_u64(self.withheld_amount);
        self.older_transfer_fee.write(dst);
        self.newer_transfer_fee.write(dst);
    }
}

/// Transfer fee extension data for accounts (8 bytes).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransferFeeAmount {
    /// Amount withheld during transfers, to be harvested to the mint
    pub withheld_amount: u64,
}

impl ExtensionValue for TransferFeeAmount {
    const TYPE: ExtensionType = ExtensionType::TransferFeeAmount;

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, TokenCodecError> {
        Ok(Self {
            withheld_amount: reader.read_u64()?,
        })
    }

    fn write(&self, dst: &mut Vec<u8>) {
        dst.put_u64(self.withheld_amount);
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::state::extension::unpack_value};

    const NEWER_EPOCH: u64 = 10;

    fn transfer_fee_config() -> TransferFeeConfig {
        TransferFeeConfig {
            transfer_fee_config_authority: Some(Address::new_from_array([1u8; 32])),
            withdraw_withheld_authority: None,
            withheld_amount: 1_000,
            older_transfer_fee: TransferFee {
                epoch: 0,
                maximum_fee: 100,
                transfer_fee_basis_points: 50,
            },
            newer_transfer_fee: TransferFee {
                epoch: NEWER_EPOCH,
                maximum_fee: u64::MAX,
                transfer_fee_basis_points: MAX_FEE_BASIS_POINTS,
            },
        }
    }

    #[test]
    fn transfer_fee_config_layout() {
        let config = transfer_fee_config();
        let mut data = Vec::new();
        config.write(&mut data);

        assert_eq!(data.len(), 108);
        assert_eq!(&data[32..64], &[0u8; 32]);
        assert_eq!(&data[64..72], &1_000u64.to_le_bytes());
        assert_eq!(&data[88..90], &50u16.to_le_bytes());
        assert_eq!(&data[90..98], &NEWER_EPOCH.to_le_bytes());
        assert_eq!(unpack_value::<TransferFeeConfig>(&data).unwrap(), config);
    }

    #[test]
    fn calculate_fee_rounds_up() {
        let fee = TransferFee {
            epoch: 0,
            maximum_fee: u64::MAX,
            transfer_fee_basis_points: 1,
        };

        assert_eq!(fee.calculate_fee(1), Some(1));
        assert_eq!(fee.calculate_fee(10_000), Some(1));
        assert_eq!(fee.calculate_fee(10_001), Some(2));
        assert_eq!(fee.calculate_post_fee_amount(10_001), Some(9_999));
    }

    #[test]
    fn calculate_fee_is_capped_at_maximum() {
        let fee = TransferFee {
            epoch: 0,
            maximum_fee: 5,
            transfer_fee_basis_points: 100,
        };

        assert_eq!(fee.calculate_fee(100), Some(1));
        assert_eq!(fee.calculate_fee(1_000_000), Some(5));
    }

    #[test]
    fn calculate_fee_is_zero_without_rate_or_amount() {
        let fee = TransferFee {
            epoch: 0,
            maximum_fee: 5,
            transfer_fee_basis_points: 0,
        };
        assert_eq!(fee.calculate_fee(u64::MAX), Some(0));

        let fee = TransferFee {
            transfer_fee_basis_points: 10,
            ..fee
        };
        assert_eq!(fee.calculate_fee(0), Some(0));
    }

    #[test]
    fn full_rate_on_max_amount_does_not_overflow() {
        let fee = TransferFee {
            epoch: 0,
            maximum_fee: u64::MAX,
            transfer_fee_basis_points: MAX_FEE_BASIS_POINTS,
        };

        assert_eq!(fee.calculate_fee(u64::MAX), Some(u64::MAX));
        assert_eq!(fee.calculate_post_fee_amount(u64::MAX), Some(0));
    }

    #[test]
    fn epoch_fee_switches_at_newer_epoch() {
        let config = transfer_fee_config();

        assert_eq!(config.get_epoch_fee(NEWER_EPOCH - 1), &config.older_transfer_fee);
        assert_eq!(config.get_epoch_fee(NEWER_EPOCH), &config.newer_transfer_fee);
        assert_eq!(config.calculate_epoch_fee(0, 1_000), Some(5));
        assert_eq!(config.calculate_epoch_fee(NEWER_EPOCH, 1_000), Some(1_000));
    }

    #[test]
    fn transfer_fee_amount_layout() {
        let amount = TransferFeeAmount {
            withheld_amount: 77,
        };
        let mut data = Vec::new();
        amount.write(&mut data);

        assert_eq!(data, 77u64.to_le_bytes());
        assert_eq!(unpack_value::<TransferFeeAmount>(&data).unwrap(), amount);
    }
}
