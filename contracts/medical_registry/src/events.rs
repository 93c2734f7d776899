use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the registry is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when an actor registers itself as a doctor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorRegisteredEvent {
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a doctor registers a patient.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub doctor: Address,
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when a record reference is appended to a patient's ledger.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAppendedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub content_address: String,
    pub position: u32,
    pub timestamp: u64,
}

/// Event published when registry writes are paused or resumed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub paused: bool,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when an actor takes the doctor role.
pub fn publish_doctor_registered(env: &Env, doctor: Address) {
    let topics = (symbol_short!("DOC_REG"), doctor.clone());
    let data = DoctorRegisteredEvent {
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a patient is added to a doctor's roster.
pub fn publish_patient_registered(env: &Env, doctor: Address, patient: Address) {
    let topics = (symbol_short!("PAT_REG"), doctor.clone(), patient.clone());
    let data = PatientRegisteredEvent {
        doctor,
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a record reference is appended.
/// `position` is the zero-based index of the record in the patient's ledger.
pub fn publish_record_appended(
    env: &Env,
    patient: Address,
    doctor: Address,
    content_address: String,
    position: u32,
) {
    let topics = (symbol_short!("REC_ADD"), patient.clone(), doctor.clone());
    let data = RecordAppendedEvent {
        patient,
        doctor,
        content_address,
        position,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_pause_changed(env: &Env, admin: Address, paused: bool) {
    let topics = (symbol_short!("PAUSE"), admin.clone());
    let data = PauseChangedEvent {
        admin,
        paused,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
