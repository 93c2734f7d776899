#![no_std]
//! Role-gated registry of content-addressed medical record references.
//!
//! Doctors register themselves and their patients; doctors append record
//! references to a patient's ledger; patients read only their own ledger.
//! Payload bytes never touch the contract: a record carries the address the
//! external content store returned for them.

pub mod errors;
pub mod events;
pub mod identity;
pub mod ledger;
pub mod roster;
pub mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use identity::Role;
pub use ledger::MedicalRecord;

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PAUSED: Symbol = symbol_short!("PAUSED");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if env.storage().instance().get(&PAUSED).unwrap_or(false) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

#[contract]
pub struct MedicalRegistryContract;

#[contractimpl]
impl MedicalRegistryContract {
    // ======================== Configuration ========================

    /// Initialize the registry with an admin address.
    /// The admin controls the write pause and nothing else: it cannot grant
    /// or change roles.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        extend_ttl_instance(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Pause or resume every state-changing operation. Reads are unaffected.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), ContractError> {
        caller.require_auth();

        let admin = Self::get_admin(env.clone())?;
        if caller != admin {
            return Err(ContractError::Unauthorized);
        }

        env.storage().instance().set(&PAUSED, &paused);
        extend_ttl_instance(&env);

        events::publish_pause_changed(&env, caller, paused);

        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    // ======================== Identity ========================

    /// Resolve the role held by `actor`. Never fails: identifiers that were
    /// never registered resolve to `Role::Unregistered`.
    pub fn resolve_role(env: Env, actor: Address) -> Role {
        identity::resolve_role(&env, &actor)
    }

    // ======================== Registration ========================

    /// Register the caller as a doctor.
    /// Fails with `AlreadyRegistered` if the caller holds any role.
    pub fn register_as_doctor(env: Env, caller: Address) -> Result<(), ContractError> {
        require_not_paused(&env)?;
        caller.require_auth();

        identity::grant_role_once(&env, &caller, Role::Doctor)?;

        events::publish_doctor_registered(&env, caller);

        Ok(())
    }

    /// Register `patient` under the calling doctor's roster.
    ///
    /// A patient is registered exactly once, by exactly one doctor; a second
    /// registration by any doctor fails with `AlreadyRegistered`.
    pub fn register_patient(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<(), ContractError> {
        require_not_paused(&env)?;
        caller.require_auth();

        identity::require_doctor(&env, &caller)?;
        identity::grant_role_once(&env, &patient, Role::Patient)?;
        roster::enroll(&env, &caller, &patient);

        events::publish_patient_registered(&env, caller, patient);

        Ok(())
    }

    // ======================== Queries ========================

    /// Check whether `target` is a registered patient.
    ///
    /// Doctors only. The check is global rather than roster-scoped so a doctor
    /// can search for a patient before deciding to register them.
    pub fn is_patient(env: Env, caller: Address, target: Address) -> Result<bool, ContractError> {
        caller.require_auth();
        identity::require_doctor(&env, &caller)?;

        Ok(identity::resolve_role(&env, &target) == Role::Patient)
    }

    /// List every record of `patient`, oldest first.
    ///
    /// Allowed for the patient themselves and for any doctor. An empty ledger
    /// is an empty vector, not an error.
    pub fn list_records(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<MedicalRecord>, ContractError> {
        caller.require_auth();

        if caller != patient {
            identity::require_doctor(&env, &caller)?;
        }

        Ok(ledger::load(&env, &patient))
    }

    /// List the patients registered by the calling doctor.
    pub fn list_roster(env: Env, caller: Address) -> Result<Vec<Address>, ContractError> {
        caller.require_auth();
        identity::require_doctor(&env, &caller)?;

        Ok(roster::load(&env, &caller))
    }

    /// Total number of records appended across all patients.
    pub fn record_total(env: Env) -> u64 {
        ledger::total(&env)
    }

    // ======================== Records ========================

    /// Append a record reference to `patient`'s ledger.
    ///
    /// The payload must already be in the content store; `content_address` is
    /// the address the store returned. Roles are checked against the state at
    /// the time of this call, not at the time the payload was stored.
    pub fn append_record(
        env: Env,
        caller: Address,
        patient: Address,
        content_address: String,
        display_name: String,
    ) -> Result<MedicalRecord, ContractError> {
        require_not_paused(&env)?;
        caller.require_auth();

        identity::require_doctor(&env, &caller)?;
        identity::require_patient(&env, &patient)?;

        validation::validate_content_address(&content_address)?;
        validation::validate_display_name(&display_name)?;

        let (record, position) =
            ledger::append(&env, &patient, &caller, content_address, display_name);
        extend_ttl_instance(&env);

        events::publish_record_appended(
            &env,
            patient,
            caller,
            record.content_address.clone(),
            position,
        );

        Ok(record)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

#[cfg(test)]
mod test;
