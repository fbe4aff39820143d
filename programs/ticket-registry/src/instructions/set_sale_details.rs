use anchor_lang::prelude::*;

use crate::constants::TICKET_SEED;
use crate::errors::RegistryError;
use crate::state::{EventRegistry, Ticket};

#[derive(Accounts)]
pub struct SetSaleDetails<'info> {
    pub owner: Signer<'info>,

    #[account(
        constraint = registry.key() == ticket.registry @ RegistryError::TicketNotFound,
    )]
    pub registry: Account<'info, EventRegistry>,

    #[account(
        mut,
        seeds = [
            TICKET_SEED,
            ticket.registry.as_ref(),
            ticket.ticket_id.to_le_bytes().as_ref()
        ],
        bump = ticket.bump,
        constraint = ticket.owner == owner.key() @ RegistryError::NotOwner,
    )]
    pub ticket: Account<'info, Ticket>,
}

pub fn set_sale_details(ctx: Context<SetSaleDetails>, price: u64, delegate: Pubkey) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    ticket.authorize_sale(price, delegate)?;

    emit!(SaleAuthorized {
        registry: ticket.registry,
        ticket_id: ticket.ticket_id,
        owner: ticket.owner,
        price,
        delegate,
    });

    msg!(
        "Ticket {} listed at {} (cap {})",
        ticket.ticket_id,
        price,
        ticket.max_resale_price()
    );

    Ok(())
}

#[event]
pub struct SaleAuthorized {
    pub registry: Pubkey,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub price: u64,
    pub delegate: Pubkey,
}
