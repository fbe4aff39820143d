use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{EventRegistry, Ticket};
use crate::utils::bytes_to_string;

#[derive(Accounts)]
pub struct GetTicketDetails<'info> {
    pub registry: Account<'info, EventRegistry>,

    #[account(
        constraint = ticket.registry == registry.key() @ RegistryError::TicketNotFound,
    )]
    pub ticket: Account<'info, Ticket>,
}

/// Read-only: logs the ticket's current owner and sale terms. State reads
/// normally happen off-chain by fetching the ticket PDA directly.
pub fn get_ticket_details(ctx: Context<GetTicketDetails>) -> Result<()> {
    let ticket = &ctx.accounts.ticket;
    let registry = &ctx.accounts.registry;

    msg!(
        "Ticket {} of {}: owner {}",
        ticket.ticket_id,
        bytes_to_string(&registry.name),
        ticket.owner
    );
    msg!("Last purchase price: {}", ticket.last_purchase_price);

    match ticket.authorized_resale_price {
        Some(price) => msg!("Listed for resale at {}", price),
        None => msg!("Not listed for resale"),
    }

    Ok(())
}
