pub mod validation;

use anchor_lang::prelude::*;

use crate::errors::RegistryError;

pub fn string_to_bytes<const N: usize>(input: &str) -> Result<[u8; N]> {
    require!(input.len() <= N, RegistryError::InvalidCharacters);

    let mut bytes = [0u8; N];
    bytes[..input.len()].copy_from_slice(input.as_bytes());
    Ok(bytes)
}

pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec())
        .unwrap_or_default()
        .trim_end_matches('\0')
        .to_string()
}

pub fn validate_string(input: &str) -> Result<()> {
    require!(
        input.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        RegistryError::InvalidCharacters
    );
    Ok(())
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(RegistryError::MathOverflow.into())
}

pub fn safe_mul(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(RegistryError::MathOverflow.into())
}
