//! `xTokens.transfer` call

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use xbridge_core::WeightLimit;

use crate::location::VersionedLocation;

/// Arguments of `xTokens.transfer(currency_id, amount, dest, dest_weight_limit)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCall {
    /// ORML currency index (0 for the native token)
    pub currency_id: u32,
    /// Smallest units, carried as a decimal string
    #[serde(with = "amount_string")]
    pub amount: u128,
    pub dest: VersionedLocation,
    pub dest_weight_limit: WeightLimit,
}

impl TransferCall {
    pub const PALLET: &'static str = "xTokens";
    pub const METHOD: &'static str = "transfer";

    pub fn new(
        currency_id: u32,
        amount: u128,
        dest: VersionedLocation,
        dest_weight_limit: WeightLimit,
    ) -> Self {
        Self {
            currency_id,
            amount,
            dest,
            dest_weight_limit,
        }
    }
}

mod amount_string {
    use super::*;

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
