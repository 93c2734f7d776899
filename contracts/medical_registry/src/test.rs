#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::Env;

const CID: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

fn setup() -> (Env, MedicalRegistryContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRegistryContract, ());
    let client = MedicalRegistryContractClient::new(&env, &contract_id);

    (env, client)
}

#[test]
fn test_initialize() {
    let (env, client) = setup();

    let admin = Address::generate(&env);
    client.initialize(&admin);

    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);
    assert!(!client.is_paused());
}

#[test]
fn test_initialize_twice_fails() {
    let (env, client) = setup();

    client.initialize(&Address::generate(&env));
    let result = client.try_initialize(&Address::generate(&env));

    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_get_admin_before_initialize() {
    let (_env, client) = setup();
    assert_eq!(client.try_get_admin(), Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_version() {
    let (_env, client) = setup();
    assert_eq!(client.version(), 1);
}

#[test]
fn test_registry_works_without_initialize() {
    let (env, client) = setup();

    let doctor = Address::generate(&env);
    let patient = Address::generate(&env);
    client.register_as_doctor(&doctor);
    client.register_patient(&doctor, &patient);

    assert_eq!(client.resolve_role(&patient), Role::Patient);
}

#[test]
fn test_roles_resolve_after_registration() {
    let (env, client) = setup();

    let doctor = Address::generate(&env);
    let patient = Address::generate(&env);
    let stranger = Address::generate(&env);

    client.register_as_doctor(&doctor);
    client.register_patient(&doctor, &patient);

    assert_eq!(client.resolve_role(&doctor), Role::Doctor);
    assert_eq!(client.resolve_role(&patient), Role::Patient);
    assert_eq!(client.resolve_role(&stranger), Role::Unregistered);
}

#[test]
fn test_append_record_stamps_ledger_time() {
    let (env, client) = setup();

    let doctor = Address::generate(&env);
    let patient = Address::generate(&env);
    client.register_as_doctor(&doctor);
    client.register_patient(&doctor, &patient);

    env.ledger().set_timestamp(1_700_000_000);
    let record = client.append_record(
        &doctor,
        &patient,
        &String::from_str(&env, CID),
        &String::from_str(&env, "x.pdf"),
    );

    assert_eq!(record.created_at, 1_700_000_000);
    assert_eq!(record.doctor, doctor);
    assert_eq!(record.patient, patient);
    assert_eq!(record.content_address, String::from_str(&env, CID));
    assert_eq!(record.display_name, String::from_str(&env, "x.pdf"));
    assert_eq!(client.record_total(), 1);
}

#[test]
fn test_created_at_never_goes_backwards() {
    let (env, client) = setup();

    let doctor = Address::generate(&env);
    let patient = Address::generate(&env);
    client.register_as_doctor(&doctor);
    client.register_patient(&doctor, &patient);

    let cid = String::from_str(&env, CID);
    let name = String::from_str(&env, "x.pdf");

    env.ledger().set_timestamp(2_000);
    client.append_record(&doctor, &patient, &cid, &name);
    env.ledger().set_timestamp(1_000);
    let second = client.append_record(&doctor, &patient, &cid, &name);

    assert_eq!(second.created_at, 2_001);
}

#[test]
fn test_same_second_appends_get_distinct_created_at() {
    let (env, client) = setup();

    let doctor = Address::generate(&env);
    let patient = Address::generate(&env);
    client.register_as_doctor(&doctor);
    client.register_patient(&doctor, &patient);

    let cid = String::from_str(&env, CID);
    let name = String::from_str(&env, "x.pdf");

    env.ledger().set_timestamp(5_000);
    let first = client.append_record(&doctor, &patient, &cid, &name);
    let second = client.append_record(&doctor, &patient, &cid, &name);
    let third = client.append_record(&doctor, &patient, &cid, &name);

    assert_eq!(first.created_at, 5_000);
    assert_eq!(second.created_at, 5_001);
    assert_eq!(third.created_at, 5_002);
    assert_ne!(first, second);
}

#[test]
fn test_pause_blocks_writes_but_not_reads() {
    let (env, client) = setup();

    let admin = Address::generate(&env);
    client.initialize(&admin);

    let doctor = Address::generate(&env);
    let patient = Address::generate(&env);
    client.register_as_doctor(&doctor);
    client.register_patient(&doctor, &patient);

    client.set_paused(&admin, &true);
    assert!(client.is_paused());

    let late_doctor = Address::generate(&env);
    assert_eq!(
        client.try_register_as_doctor(&late_doctor),
        Err(Ok(ContractError::Paused))
    );
    assert_eq!(
        client.try_append_record(
            &doctor,
            &patient,
            &String::from_str(&env, CID),
            &String::from_str(&env, "x.pdf"),
        ),
        Err(Ok(ContractError::Paused))
    );

    assert_eq!(client.list_records(&patient, &patient).len(), 0);
    assert_eq!(client.resolve_role(&late_doctor), Role::Unregistered);

    client.set_paused(&admin, &false);
    client.register_as_doctor(&late_doctor);
    assert_eq!(client.resolve_role(&late_doctor), Role::Doctor);
}
