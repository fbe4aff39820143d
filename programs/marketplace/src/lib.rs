use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("BTNZP23sGbQsMwX1SBiyfTpDDqD8Sev7j78N45QBoYtv");

#[program]
pub mod marketplace {
    use super::*;

    pub fn initialize_marketplace(ctx: Context<InitializeMarketplace>) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(ctx)
    }

    pub fn purchase_ticket(ctx: Context<PurchaseTicket>) -> Result<()> {
        instructions::purchase_ticket::purchase_ticket(ctx)
    }

    pub fn secondary_purchase(ctx: Context<SecondaryPurchase>) -> Result<()> {
        instructions::secondary_purchase::secondary_purchase(ctx)
    }
}

#[cfg(test)]
mod tests;
