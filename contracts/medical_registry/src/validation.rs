use soroban_sdk::String;

use crate::ContractError;

const MIN_NAME_LEN: u32 = 1;
const MAX_NAME_LEN: u32 = 128;

const MIN_ADDRESS_LEN: u32 = 32;
const MAX_ADDRESS_LEN: u32 = 64;

/// Validate a record's display name.
/// Names are opaque labels, typically the uploaded file name, so only length
/// and printable ASCII are enforced.
pub fn validate_display_name(name: &String) -> Result<(), ContractError> {
    let len = name.len();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(ContractError::InvalidInput);
    }

    let mut buf = [0u8; MAX_NAME_LEN as usize];
    name.copy_into_slice(&mut buf[..len as usize]);

    if buf[..len as usize].iter().any(|b| !(32..=126).contains(b)) {
        return Err(ContractError::InvalidInput);
    }

    Ok(())
}

/// Validate a content-store address.
/// Accepts IPFS CIDs (base58 / base32) and SHA-256 hex; restricted to
/// `[A-Za-z0-9_-]`.
pub fn validate_content_address(address: &String) -> Result<(), ContractError> {
    let len = address.len();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return Err(ContractError::InvalidInput);
    }

    let mut buf = [0u8; MAX_ADDRESS_LEN as usize];
    address.copy_into_slice(&mut buf[..len as usize]);

    let valid = buf[..len as usize]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
        return Err(ContractError::InvalidInput);
    }

    Ok(())
}
