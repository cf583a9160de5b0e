//! Turing ledger layout and address policy

use bridge_adapter::{AddressCheck, BalanceFamily, RawLedger};
use chain_source::{StorageQuery, StorageValue};
use xbridge_core::address;
use xbridge_core::AssetId;

/// ORML `tokens` family with strict SS58 addresses.
///
/// Ethereum-style addresses are a foreign family and are skipped; anything
/// else that is not valid SS58 is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct OakFamily;

impl BalanceFamily for OakFamily {
    fn check_address(&self, address: &str) -> AddressCheck {
        if address::is_substrate_address(address) {
            AddressCheck::Valid
        } else if address::is_ethereum_address(address) {
            AddressCheck::NotApplicable
        } else {
            AddressCheck::Invalid
        }
    }

    fn asset_query(&self, asset: AssetId, address: &str) -> Option<StorageQuery> {
        match asset {
            AssetId::Currency(currency_id) => {
                Some(StorageQuery::tokens_accounts(address, currency_id))
            }
            AssetId::Native | AssetId::Asset(_) => None,
        }
    }

    fn asset_ledger(&self, value: &StorageValue) -> RawLedger {
        RawLedger {
            free: value.free.unwrap_or(0),
            reserved: value.reserved.unwrap_or(0),
            frozen: value.frozen.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_policy() {
        let family = OakFamily;
        assert_eq!(
            family.check_address("6AwtFW6sYcQ8RcuAJeXdDKuFtUVXj4xW57ghjYQ5xyciT1yd"),
            AddressCheck::Valid
        );
        assert_eq!(
            family.check_address("0x742d35Cc6634C0532925a3b844Bc9e7595f2bD08"),
            AddressCheck::NotApplicable
        );
        assert_eq!(family.check_address("not-an-address"), AddressCheck::Invalid);
        assert_eq!(family.check_address(""), AddressCheck::Invalid);
    }

    #[test]
    fn test_asset_query_shape() {
        let query = OakFamily
            .asset_query(AssetId::Currency(1), "alice")
            .unwrap();
        assert_eq!(query, StorageQuery::tokens_accounts("alice", 1));
        assert!(OakFamily.asset_query(AssetId::Asset(1), "alice").is_none());
    }
}
