#![cfg(test)]

use crate::{
    testutils::{create_asset, create_reserve_engine, default_config, register_reserve_engine},
    ReserveEngineClient,
};
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events as _},
    vec, Address, Env, Error, IntoVal, Symbol,
};

#[test]
fn test_initialize_ok() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let asset = Address::generate(&e);
    let insurance_fund = Address::generate(&e);
    let config = default_config(&e);

    let engine_address = register_reserve_engine(&e);
    let engine = ReserveEngineClient::new(&e, &engine_address);
    let reserve = engine.initialize(&samwise, &asset, &insurance_fund, &config);

    assert_eq!(
        e.auths()[0],
        (
            samwise.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    engine_address.clone(),
                    Symbol::new(&e, "initialize"),
                    vec![
                        &e,
                        samwise.into_val(&e),
                        asset.into_val(&e),
                        insurance_fund.into_val(&e),
                        config.into_val(&e),
                    ]
                )),
                sub_invocations: std::vec![]
            }
        )
    );

    assert_eq!(reserve.owner, samwise);
    assert_eq!(reserve.asset, asset);
    assert_eq!(reserve.insurance_fund, insurance_fund);
    assert_eq!(engine.get_reserve(&samwise), reserve);
}

#[test]
fn test_initialize_twice() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let asset = Address::generate(&e);
    let engine = create_reserve_engine(&e, &samwise, &asset, &samwise);
    let pre_reserve = engine.get_reserve(&samwise);

    let mut config = default_config(&e);
    config.base_borrow_rate = 0;
    let result = engine.try_initialize(&samwise, &asset, &samwise, &config);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(101))));
    assert_eq!(engine.get_reserve(&samwise), pre_reserve);

    // a different owner gets its own reserve
    let frodo = Address::generate(&e);
    engine.initialize(&frodo, &asset, &frodo, &config);
    assert_eq!(engine.get_reserve(&frodo).config.base_borrow_rate, 0);
    assert_eq!(engine.get_reserve(&samwise).config.base_borrow_rate, 200);
}

#[test]
fn test_initialize_invalid_config() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let asset = Address::generate(&e);
    let engine = ReserveEngineClient::new(&e, &register_reserve_engine(&e));

    let mut config = default_config(&e);
    config.reserve_factor = 9_000;
    config.insurance_factor = 1_001;
    let result = engine.try_initialize(&samwise, &asset, &samwise, &config);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(103))));

    let mut config = default_config(&e);
    config.utilization_curve = vec![&e, 500, 1000, 2000];
    let result = engine.try_initialize(&samwise, &asset, &samwise, &config);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(103))));

    let mut config = default_config(&e);
    config.curve_band_width = 0;
    let result = engine.try_initialize(&samwise, &asset, &samwise, &config);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(103))));

    // nothing was created by the failed attempts
    let result = engine.try_get_reserve(&samwise);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(100))));
}

#[test]
fn test_missing_reserve() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let engine = ReserveEngineClient::new(&e, &register_reserve_engine(&e));

    let result = engine.try_get_borrow_rate(&samwise);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(100))));

    let result = engine.try_process_loan_activity(&samwise, &100, &false);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(100))));

    assert_eq!(engine.get_certificates(&samwise, &samwise), 0);
}

#[test]
fn test_process_loan_activity_auth() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let asset = Address::generate(&e);
    let engine = create_reserve_engine(&e, &samwise, &asset, &samwise);

    engine.process_loan_activity(&samwise, &100, &false);
    assert_eq!(
        e.auths()[0],
        (
            samwise.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    engine.address.clone(),
                    Symbol::new(&e, "process_loan_activity"),
                    vec![
                        &e,
                        samwise.into_val(&e),
                        100_i128.into_val(&e),
                        false.into_val(&e),
                    ]
                )),
                sub_invocations: std::vec![]
            }
        )
    );
}

#[test]
fn test_process_loan_activity_errors() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let asset = Address::generate(&e);
    let engine = create_reserve_engine(&e, &samwise, &asset, &samwise);
    engine.process_loan_activity(&samwise, &100, &false);
    let pre_reserve = engine.get_reserve(&samwise);

    let result = engine.try_process_loan_activity(&samwise, &101, &true);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(105))));

    let result = engine.try_process_loan_activity(&samwise, &0, &false);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(102))));

    let result = engine.try_process_loan_activity(&samwise, &-5, &true);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(102))));

    assert_eq!(engine.get_reserve(&samwise), pre_reserve);

    // repaying the exact outstanding amount is allowed
    let reserve = engine.process_loan_activity(&samwise, &100, &true);
    assert_eq!(reserve.total_borrows, 0);
}

#[test]
fn test_deposit_auth() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let frodo = Address::generate(&e);
    let (asset, asset_admin) = create_asset(&e, &samwise);
    asset_admin.mint(&frodo, &10_0000000);
    let engine = create_reserve_engine(&e, &samwise, &asset, &samwise);

    engine.deposit(&samwise, &frodo, &10_0000000);
    assert_eq!(
        e.auths()[0],
        (
            frodo.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    engine.address.clone(),
                    Symbol::new(&e, "deposit"),
                    vec![
                        &e,
                        samwise.into_val(&e),
                        frodo.into_val(&e),
                        10_0000000_i128.into_val(&e),
                    ]
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        asset.clone(),
                        Symbol::new(&e, "transfer"),
                        vec![
                            &e,
                            frodo.into_val(&e),
                            engine.address.into_val(&e),
                            10_0000000_i128.into_val(&e),
                        ]
                    )),
                    sub_invocations: std::vec![]
                }]
            }
        )
    );
}

#[test]
fn test_deposit_errors() {
    let e = Env::default();
    e.mock_all_auths();

    let samwise = Address::generate(&e);
    let frodo = Address::generate(&e);
    let (asset, asset_admin) = create_asset(&e, &samwise);
    asset_admin.mint(&frodo, &10_0000000);
    let engine = create_reserve_engine(&e, &samwise, &asset, &samwise);
    let pre_reserve = engine.get_reserve(&samwise);

    let result = engine.try_deposit(&samwise, &frodo, &0);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(102))));

    // frodo can't cover the transfer
    let result = engine.try_deposit(&samwise, &frodo, &10_0000001);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(104))));

    assert_eq!(engine.get_reserve(&samwise), pre_reserve);
    assert_eq!(engine.get_certificates(&samwise, &frodo), 0);

    let unknown_owner = Address::generate(&e);
    let result = engine.try_deposit(&unknown_owner, &frodo, &1_0000000);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(100))));
}

#[test]
fn test_process_fees_errors() {
    let e = Env::default();
    e.mock_all_auths_allowing_non_root_auth();

    let samwise = Address::generate(&e);
    let fee_source = Address::generate(&e);
    let (asset, asset_admin) = create_asset(&e, &samwise);
    asset_admin.mint(&fee_source, &5_0000000);
    let engine = create_reserve_engine(&e, &samwise, &asset, &samwise);
    let pre_reserve = engine.get_reserve(&samwise);

    let result = engine.try_process_fees(&samwise, &fee_source, &0);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(102))));

    // no partial earmarking when the fee can't be paid
    let result = engine.try_process_fees(&samwise, &fee_source, &5_0000001);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(104))));
    assert_eq!(engine.get_reserve(&samwise), pre_reserve);

    let reserve = engine.process_fees(&samwise, &fee_source, &5_0000000);
    // the token's transfer event comes first
    let events = e.events().all();
    assert_eq!(
        events.slice(events.len() - 1..),
        vec![
            &e,
            (
                engine.address.clone(),
                (
                    Symbol::new(&e, "fees_processed"),
                    samwise.clone(),
                    fee_source.clone()
                )
                    .into_val(&e),
                (5_0000000_i128, 2500000_i128, 5000000_i128).into_val(&e)
            )
        ]
    );
    assert_eq!(reserve.insurance_total, 2500000);
    assert_eq!(reserve.reserve_total, 5000000);
}
