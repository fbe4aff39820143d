use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::utils::safe_add;

#[account]
pub struct EventRegistry {
    pub organizer: Pubkey,          // 32 bytes - receives primary proceeds and commissions
    pub event_id: u64,              // 8 bytes - factory-assigned, part of the PDA seeds
    pub name: [u8; 32],             // 32 bytes - event name, zero-padded ASCII
    pub symbol: [u8; 8],            // 8 bytes - event symbol, zero-padded ASCII
    pub ticket_price: u64,          // 8 bytes - primary price, smallest payment unit
    pub total_supply: u64,          // 8 bytes - maximum tickets ever issuable
    pub tickets_minted: u64,        // 8 bytes - ids 1..=tickets_minted exist
    pub marketplace: Pubkey,        // 32 bytes - paired marketplace PDA
    pub bump: u8,                   // 1 byte - PDA bump seed
}

impl EventRegistry {
    pub const SIZE: usize = 32 +    // organizer
        8 +                         // event_id
        32 +                        // name
        8 +                         // symbol
        8 +                         // ticket_price
        8 +                         // total_supply
        8 +                         // tickets_minted
        32 +                        // marketplace
        1;                          // bump

    /// Checked mint-counter advance. Fails closed when the batch would push
    /// the issued count past total_supply.
    pub fn reserve_ids(&self, count: u64) -> Result<u64> {
        let new_total = safe_add(self.tickets_minted, count)?;
        require!(new_total <= self.total_supply, RegistryError::SupplyExceeded);
        Ok(new_total)
    }
}
