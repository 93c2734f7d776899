use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Role held by an actor identifier. Every identifier holds exactly one.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Unregistered = 0,
    Doctor = 1,
    Patient = 2,
}

pub fn role_key(actor: &Address) -> (Symbol, Address) {
    (symbol_short!("ROLE"), actor.clone())
}

/// Resolves the role stored for `actor`.
///
/// Absence of an entry is a valid answer, not an error: identifiers that were
/// never granted a role resolve to [`Role::Unregistered`].
pub fn resolve_role(env: &Env, actor: &Address) -> Role {
    env.storage()
        .persistent()
        .get(&role_key(actor))
        .unwrap_or(Role::Unregistered)
}

/// Grants `role` to `actor` if and only if it currently holds none.
///
/// Roles are write-once: an existing entry is never overwritten.
pub fn grant_role_once(env: &Env, actor: &Address, role: Role) -> Result<(), ContractError> {
    if resolve_role(env, actor) != Role::Unregistered {
        return Err(ContractError::AlreadyRegistered);
    }

    let key = role_key(actor);
    env.storage().persistent().set(&key, &role);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    Ok(())
}

/// Fails with `Unauthorized` unless `actor` resolves to the doctor role.
pub fn require_doctor(env: &Env, actor: &Address) -> Result<(), ContractError> {
    match resolve_role(env, actor) {
        Role::Doctor => Ok(()),
        _ => Err(ContractError::Unauthorized),
    }
}

/// Fails with `UnknownPatient` unless `actor` resolves to the patient role.
pub fn require_patient(env: &Env, actor: &Address) -> Result<(), ContractError> {
    match resolve_role(env, actor) {
        Role::Patient => Ok(()),
        _ => Err(ContractError::UnknownPatient),
    }
}
