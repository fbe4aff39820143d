use anchor_lang::prelude::*;

use crate::constants::TICKET_SEED;
use crate::errors::RegistryError;
use crate::state::Ticket;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// The ticket's registered resale delegate; for settled sales this is the
    /// marketplace PDA signing via CPI.
    pub delegate: Signer<'info>,

    #[account(
        mut,
        seeds = [
            TICKET_SEED,
            ticket.registry.as_ref(),
            ticket.ticket_id.to_le_bytes().as_ref()
        ],
        bump = ticket.bump,
        constraint = ticket.resale_delegate == Some(delegate.key()) @ RegistryError::Unauthorized,
    )]
    pub ticket: Account<'info, Ticket>,
}

pub fn transfer_ownership(
    ctx: Context<TransferOwnership>,
    new_owner: Pubkey,
    new_last_price: u64,
) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    let previous_owner = ticket.owner;

    ticket.settle_sale(new_owner, new_last_price);

    emit!(OwnershipTransferred {
        registry: ticket.registry,
        ticket_id: ticket.ticket_id,
        previous_owner,
        new_owner,
        price: new_last_price,
    });

    msg!(
        "Ticket {} transferred from {} to {}",
        ticket.ticket_id,
        previous_owner,
        new_owner
    );

    Ok(())
}

#[event]
pub struct OwnershipTransferred {
    pub registry: Pubkey,
    pub ticket_id: u64,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub price: u64,
}
