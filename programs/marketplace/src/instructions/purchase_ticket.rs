use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use ticket_registry::cpi::accounts::TransferOwnership;
use ticket_registry::program::TicketRegistry;
use ticket_registry::state::{EventRegistry, Ticket};

use crate::constants::{MARKETPLACE_SEED, REENTRANCY_SEED};
use crate::errors::MarketplaceError;
use crate::state::Marketplace;
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::{check_delegated_funds, safe_add};

#[derive(Accounts)]
pub struct PurchaseTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED, marketplace.registry.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    // Sold-out is decided from the counters alone, before the ticket account
    // resolves: once every minted ticket is sold, no valid next-ticket PDA
    // exists to pass the ticket constraints below
    #[account(
        constraint = registry.key() == marketplace.registry
            @ MarketplaceError::InvalidRegistry,
        constraint = marketplace.has_unsold(registry.tickets_minted)
            @ MarketplaceError::SoldOut,
    )]
    pub registry: Account<'info, EventRegistry>,

    /// The next unsold ticket, in ascending id order (FIFO over the
    /// organizer's initial holding).
    #[account(
        mut,
        constraint = ticket.registry == registry.key()
            @ MarketplaceError::InvalidRegistry,
        constraint = ticket.ticket_id == marketplace.next_primary_ticket()
            @ MarketplaceError::TicketNotForSale,
        constraint = ticket.owner == registry.organizer
            @ MarketplaceError::TicketNotForSale,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        constraint = buyer_token.owner == buyer.key()
            @ MarketplaceError::InvalidPaymentAccount,
        constraint = buyer_token.mint == marketplace.payment_mint
            @ MarketplaceError::InvalidPaymentAccount,
    )]
    pub buyer_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = organizer_token.owner == registry.organizer
            @ MarketplaceError::InvalidPaymentAccount,
        constraint = organizer_token.mint == marketplace.payment_mint
            @ MarketplaceError::InvalidPaymentAccount,
    )]
    pub organizer_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [REENTRANCY_SEED, marketplace.key().as_ref()],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub token_program: Program<'info, Token>,
    pub registry_program: Program<'info, TicketRegistry>,
}

pub fn purchase_ticket(ctx: Context<PurchaseTicket>) -> Result<()> {
    ctx.accounts.reentrancy_guard.lock()?;

    let price = ctx.accounts.registry.ticket_price;

    // Fail closed before any leg runs
    check_delegated_funds(
        &ctx.accounts.buyer_token,
        &ctx.accounts.marketplace.key(),
        price,
    )?;

    let registry_key = ctx.accounts.marketplace.registry;
    let bump = ctx.accounts.marketplace.bump;
    let signer_seeds: &[&[u8]] = &[MARKETPLACE_SEED, registry_key.as_ref(), &[bump]];
    let signer = &[signer_seeds];

    // Pull exactly the ticket price from the buyer to the organizer
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_token.to_account_info(),
                to: ctx.accounts.organizer_token.to_account_info(),
                authority: ctx.accounts.marketplace.to_account_info(),
            },
            signer,
        ),
        price,
    )?;

    // Ownership leg; the transaction rolls both legs back on any failure
    ticket_registry::cpi::transfer_ownership(
        CpiContext::new_with_signer(
            ctx.accounts.registry_program.to_account_info(),
            TransferOwnership {
                delegate: ctx.accounts.marketplace.to_account_info(),
                ticket: ctx.accounts.ticket.to_account_info(),
            },
            signer,
        ),
        ctx.accounts.buyer.key(),
        price,
    )?;

    let ticket_id = ctx.accounts.ticket.ticket_id;
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.primary_sales += 1;
    marketplace.total_sales += 1;
    marketplace.total_volume = safe_add(marketplace.total_volume, price)?;

    emit!(TicketPurchased {
        marketplace: marketplace.key(),
        ticket_id,
        buyer: ctx.accounts.buyer.key(),
        price,
    });

    msg!(
        "Primary sale: ticket {} to {} for {}",
        ticket_id,
        ctx.accounts.buyer.key(),
        price
    );

    ctx.accounts.reentrancy_guard.unlock()?;

    Ok(())
}

#[event]
pub struct TicketPurchased {
    pub marketplace: Pubkey,
    pub ticket_id: u64,
    pub buyer: Pubkey,
    pub price: u64,
}
