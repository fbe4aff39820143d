use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RegistryError;
use crate::utils::validate_string;

pub fn validate_event_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), RegistryError::InvalidCharacters);
    require!(name.len() <= MAX_EVENT_NAME_LEN, RegistryError::NameTooLong);
    validate_string(name)
}

pub fn validate_event_symbol(symbol: &str) -> Result<()> {
    require!(!symbol.is_empty(), RegistryError::InvalidCharacters);
    require!(
        symbol.len() <= MAX_EVENT_SYMBOL_LEN,
        RegistryError::SymbolTooLong
    );
    validate_string(symbol)
}

pub fn validate_ticket_price(price: u64) -> Result<()> {
    require!(price > 0, RegistryError::InvalidPrice);
    Ok(())
}

pub fn validate_total_supply(supply: u64) -> Result<()> {
    require!(supply > 0, RegistryError::InvalidSupply);
    Ok(())
}

pub fn validate_mint_count(count: u64) -> Result<()> {
    require!(
        count > 0 && count <= MAX_BATCH_MINT,
        RegistryError::InvalidMintCount
    );
    Ok(())
}

/// Primary tickets sell through the marketplace in id order, starting from
/// the first organizer-held ticket. That order is only sound if every mint
/// goes to the organizer's own holding.
pub fn validate_mint_recipient(recipient: Pubkey, organizer: Pubkey) -> Result<()> {
    require_keys_eq!(recipient, organizer, RegistryError::InvalidRecipient);
    Ok(())
}
