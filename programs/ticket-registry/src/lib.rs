use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::InitializeRegistryParams;

declare_id!("E7D92vNoSj2rqB1PnuZihFZ9hDstnbJMwCFkxx9TxQBL");

#[program]
pub mod ticket_registry {
    use super::*;

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        params: InitializeRegistryParams,
    ) -> Result<()> {
        instructions::initialize_registry::initialize_registry(ctx, params)
    }

    pub fn bulk_mint_tickets<'info>(
        ctx: Context<'_, '_, 'info, 'info, BulkMintTickets<'info>>,
        count: u64,
    ) -> Result<()> {
        instructions::bulk_mint_tickets::bulk_mint_tickets(ctx, count)
    }

    pub fn set_sale_details(
        ctx: Context<SetSaleDetails>,
        price: u64,
        delegate: Pubkey,
    ) -> Result<()> {
        instructions::set_sale_details::set_sale_details(ctx, price, delegate)
    }

    pub fn transfer_ownership(
        ctx: Context<TransferOwnership>,
        new_owner: Pubkey,
        new_last_price: u64,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner, new_last_price)
    }

    pub fn get_ticket_details(ctx: Context<GetTicketDetails>) -> Result<()> {
        instructions::get_ticket_details::get_ticket_details(ctx)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_id() {
        assert_eq!(
            super::ID.to_string(),
            "E7D92vNoSj2rqB1PnuZihFZ9hDstnbJMwCFkxx9TxQBL"
        );
    }
}
