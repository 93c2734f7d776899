use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

pub fn roster_key(doctor: &Address) -> (Symbol, Address) {
    (symbol_short!("ROSTER"), doctor.clone())
}

/// Patients registered by `doctor`, in registration order.
pub fn load(env: &Env, doctor: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&roster_key(doctor))
        .unwrap_or(Vec::new(env))
}

/// Adds `patient` to `doctor`'s roster.
///
/// Callers must have granted the patient role in the same invocation; that
/// write-once grant is what keeps a patient under a single doctor.
pub fn enroll(env: &Env, doctor: &Address, patient: &Address) {
    let key = roster_key(doctor);
    let mut patients = load(env, doctor);
    patients.push_back(patient.clone());
    env.storage().persistent().set(&key, &patients);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
