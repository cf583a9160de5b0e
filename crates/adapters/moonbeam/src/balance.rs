//! Moonbeam ledger layout and address policy

use bridge_adapter::{AddressCheck, BalanceFamily, RawLedger};
use chain_source::{StorageQuery, StorageValue};
use xbridge_core::address;
use xbridge_core::AssetId;

/// `assets` pallet family with 20-byte EVM accounts.
///
/// Any non-EVM address is treated as belonging to another family.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonbeamFamily;

impl BalanceFamily for MoonbeamFamily {
    fn check_address(&self, address: &str) -> AddressCheck {
        if address::is_ethereum_address(address) {
            AddressCheck::Valid
        } else {
            AddressCheck::NotApplicable
        }
    }

    fn asset_query(&self, asset: AssetId, address: &str) -> Option<StorageQuery> {
        match asset {
            AssetId::Asset(asset_id) => Some(StorageQuery::assets_account(asset_id, address)),
            AssetId::Native | AssetId::Currency(_) => None,
        }
    }

    // Asset accounts carry a single balance, nothing reserved or frozen
    fn asset_ledger(&self, value: &StorageValue) -> RawLedger {
        RawLedger {
            free: value.balance.unwrap_or(0),
            ..RawLedger::default()
        }
    }
}
