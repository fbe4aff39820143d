use anchor_lang::prelude::*;

pub mod registry;
pub mod ticket;

#[cfg(test)]
mod tests;

pub use registry::*;
pub use ticket::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeRegistryParams {
    pub event_id: u64,
    pub name: String,
    pub symbol: String,
    pub ticket_price: u64,
    pub total_supply: u64,
    pub marketplace: Pubkey,
}
