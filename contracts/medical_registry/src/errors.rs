use soroban_sdk::contracttype;

/// Error categories for classifying registry failures
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Malformed input: empty addresses, oversized names
    Validation = 1,
    /// The caller's resolved role does not satisfy the operation
    Authorization = 2,
    /// The target identifier does not resolve to the expected role
    NotFound = 3,
    /// The target already holds a role
    StateConflict = 4,
    /// Contract-level conditions such as pausing or missing initialization
    System = 5,
}

/// Error severity levels indicating the impact of a failure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Stable error codes returned by every registry entry point.
///
/// Codes are part of the contract ABI and must never be renumbered.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AlreadyRegistered = 4,
    UnknownPatient = 5,
    InvalidInput = 6,
    Paused = 7,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidInput => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::UnknownPatient => ErrorCategory::NotFound,
            ContractError::AlreadyRegistered | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
            ContractError::NotInitialized | ContractError::Paused => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidInput
            | ContractError::UnknownPatient
            | ContractError::AlreadyRegistered
            | ContractError::AlreadyInitialized => ErrorSeverity::Low,
            ContractError::Unauthorized | ContractError::NotInitialized => ErrorSeverity::Medium,
            ContractError::Paused => ErrorSeverity::High,
        }
    }

    /// Returns whether resubmitting the same call can succeed without any
    /// other party changing registry state first.
    ///
    /// Only a pause is lifted from outside the caller's control; every other
    /// code is a terminal rejection of the request as submitted.
    pub fn retryable(&self) -> bool {
        matches!(self, ContractError::Paused)
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Registry has not been initialized",
            ContractError::AlreadyInitialized => "Registry is already initialized",
            ContractError::Unauthorized => "Caller's role does not permit this operation",
            ContractError::AlreadyRegistered => "Identifier already holds a role",
            ContractError::UnknownPatient => "Identifier is not a registered patient",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::Paused => "Registry writes are currently paused",
        }
    }
}
