use crate::{
    constants::DEFAULT_CURVE_BAND_WIDTH, storage::ONE_DAY_LEDGERS, types::ReserveConfig,
    ReserveEngine, ReserveEngineClient,
};
use soroban_sdk::{
    testutils::{Ledger as _, LedgerInfo},
    token::StellarAssetClient,
    vec, Address, Env,
};

/// Register the reserve engine contract
pub fn register_reserve_engine(e: &Env) -> Address {
    e.register(ReserveEngine {}, ())
}

/// Deploy a Stellar asset contract administered by `admin`
///
/// ### Returns
/// * `(Address, StellarAssetClient)` - The asset address and an admin client for minting
pub fn create_asset<'a>(e: &Env, admin: &Address) -> (Address, StellarAssetClient<'a>) {
    let asset = e.register_stellar_asset_contract_v2(admin.clone()).address();
    let client = StellarAssetClient::new(e, &asset);
    (asset, client)
}

/// The reserve configuration used across tests
///
/// base rate 2%, curve [5%, 10%, 20%, 40%] over 25% bands, reserve factor 10%,
/// insurance factor 5%, 9 decimals
pub fn default_config(e: &Env) -> ReserveConfig {
    ReserveConfig {
        base_borrow_rate: 200,
        utilization_curve: vec![e, 500, 1000, 2000, 4000],
        curve_band_width: DEFAULT_CURVE_BAND_WIDTH,
        reserve_factor: 1000,
        insurance_factor: 500,
        decimals: 9,
    }
}

/// Register the engine and initialize a reserve for `owner` with the default config
pub fn create_reserve_engine<'a>(
    e: &Env,
    owner: &Address,
    asset: &Address,
    insurance_fund: &Address,
) -> ReserveEngineClient<'a> {
    let address = register_reserve_engine(e);
    let client = ReserveEngineClient::new(e, &address);
    client.initialize(owner, asset, insurance_fund, &default_config(e));
    client
}

pub trait EnvTestUtils {
    /// Jump the env by the given amount of seconds. Increments the sequence by 1.
    fn jump_time(&self, seconds: u64);

    /// Set the ledger to the default LedgerInfo
    ///
    /// Time -> 1441065600 (Sept 1st, 2015 12:00:00 AM UTC)
    /// Sequence -> 100
    fn set_default_info(&self);
}

impl EnvTestUtils for Env {
    fn jump_time(&self, seconds: u64) {
        self.ledger().set(LedgerInfo {
            timestamp: self.ledger().timestamp().saturating_add(seconds),
            protocol_version: 22,
            sequence_number: self.ledger().sequence().saturating_add(1),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 30 * ONE_DAY_LEDGERS,
            min_persistent_entry_ttl: 30 * ONE_DAY_LEDGERS,
            max_entry_ttl: 365 * ONE_DAY_LEDGERS,
        });
    }

    fn set_default_info(&self) {
        self.ledger().set(LedgerInfo {
            timestamp: 1441065600, // Sept 1st, 2015 12:00:00 AM UTC
            protocol_version: 22,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 30 * ONE_DAY_LEDGERS,
            min_persistent_entry_ttl: 30 * ONE_DAY_LEDGERS,
            max_entry_ttl: 365 * ONE_DAY_LEDGERS,
        });
    }
}
