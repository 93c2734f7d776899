use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

const RECORD_TOTAL: Symbol = symbol_short!("REC_CTR");

/// An immutable reference from a patient's ledger to a stored payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub content_address: String,
    pub display_name: String,
    pub patient: Address,
    pub doctor: Address,
    pub created_at: u64,
}

pub fn records_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("PAT_REC"), patient.clone())
}

/// Every record appended for `patient`, oldest first.
pub fn load(env: &Env, patient: &Address) -> Vec<MedicalRecord> {
    env.storage()
        .persistent()
        .get(&records_key(patient))
        .unwrap_or(Vec::new(env))
}

/// Appends a record to `patient`'s ledger and returns it with its position.
///
/// `created_at` strictly increases within one patient's sequence: an append
/// landing at or before the previous stamp takes the previous stamp plus one.
pub fn append(
    env: &Env,
    patient: &Address,
    doctor: &Address,
    content_address: String,
    display_name: String,
) -> (MedicalRecord, u32) {
    let key = records_key(patient);
    let mut records = load(env, patient);

    let now = env.ledger().timestamp();
    let created_at = match records.last() {
        Some(previous) if previous.created_at >= now => previous.created_at.saturating_add(1),
        _ => now,
    };

    let record = MedicalRecord {
        content_address,
        display_name,
        patient: patient.clone(),
        doctor: doctor.clone(),
        created_at,
    };

    let position = records.len();
    records.push_back(record.clone());
    env.storage().persistent().set(&key, &records);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let total: u64 = env
        .storage()
        .instance()
        .get(&RECORD_TOTAL)
        .unwrap_or(0u64)
        .saturating_add(1);
    env.storage().instance().set(&RECORD_TOTAL, &total);

    (record, position)
}

/// Number of records appended across all patients.
pub fn total(env: &Env) -> u64 {
    env.storage().instance().get(&RECORD_TOTAL).unwrap_or(0)
}
