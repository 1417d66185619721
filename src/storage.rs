use soroban_sdk::{contracttype, Address, Env};

use crate::reserve::ReserveState;

//********** Storage Keys **********//

#[derive(Clone)]
#[contracttype]
pub struct CertificateKey {
    pub owner: Address,
    pub depositor: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum ReserveDataKey {
    // The reserve administered by an owner
    Reserve(Address),
    // A depositor's certificate balance within an owner's reserve
    Certificates(CertificateKey),
}

//********** Storage Utils **********//

pub const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5 seconds per ledger on average

const LEDGER_BUMP_SHARED: u32 = 31 * ONE_DAY_LEDGERS;
const LEDGER_THRESHOLD_SHARED: u32 = LEDGER_BUMP_SHARED - ONE_DAY_LEDGERS;

const LEDGER_BUMP_USER: u32 = 120 * ONE_DAY_LEDGERS;
const LEDGER_THRESHOLD_USER: u32 = LEDGER_BUMP_USER - 20 * ONE_DAY_LEDGERS;

/// Bump the instance lifetime by the defined amount
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Persistent **********/

/// Check if a reserve exists for the owner
pub fn has_reserve(e: &Env, owner: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&ReserveDataKey::Reserve(owner.clone()))
}

/// Get the reserve administered by the owner
pub fn get_reserve(e: &Env, owner: &Address) -> Option<ReserveState> {
    let key = ReserveDataKey::Reserve(owner.clone());
    let result = e
        .storage()
        .persistent()
        .get::<ReserveDataKey, ReserveState>(&key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    }
    result
}

/// Set the reserve administered by the owner
pub fn set_reserve(e: &Env, reserve: &ReserveState) {
    let key = ReserveDataKey::Reserve(reserve.owner.clone());
    e.storage()
        .persistent()
        .set::<ReserveDataKey, ReserveState>(&key, reserve);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Get a depositor's certificate balance for a reserve
pub fn get_certificates(e: &Env, owner: &Address, depositor: &Address) -> i128 {
    let key = ReserveDataKey::Certificates(CertificateKey {
        owner: owner.clone(),
        depositor: depositor.clone(),
    });
    let result = e.storage().persistent().get::<ReserveDataKey, i128>(&key);
    match result {
        Some(certificates) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
            certificates
        }
        None => 0,
    }
}

/// Set a depositor's certificate balance for a reserve
pub fn set_certificates(e: &Env, owner: &Address, depositor: &Address, certificates: i128) {
    let key = ReserveDataKey::Certificates(CertificateKey {
        owner: owner.clone(),
        depositor: depositor.clone(),
    });
    e.storage()
        .persistent()
        .set::<ReserveDataKey, i128>(&key, &certificates);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
