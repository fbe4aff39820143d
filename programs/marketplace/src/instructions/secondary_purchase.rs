use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use ticket_registry::cpi::accounts::TransferOwnership;
use ticket_registry::program::TicketRegistry;
use ticket_registry::state::{EventRegistry, Ticket};

use crate::constants::{MARKETPLACE_SEED, REENTRANCY_SEED};
use crate::errors::MarketplaceError;
use crate::state::Marketplace;
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::{check_delegated_funds, safe_add, split_proceeds};

#[derive(Accounts)]
pub struct SecondaryPurchase<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED, marketplace.registry.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        constraint = registry.key() == marketplace.registry
            @ MarketplaceError::InvalidRegistry,
    )]
    pub registry: Account<'info, EventRegistry>,

    // Listed through this marketplace: terms set and the marketplace PDA
    // recorded as the resale delegate
    #[account(
        mut,
        constraint = ticket.registry == registry.key()
            @ MarketplaceError::InvalidRegistry,
        constraint = ticket.resale_delegate == Some(marketplace.key())
            @ MarketplaceError::NotListed,
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: Receives the seller proceeds; must be the ticket's current owner
    #[account(
        constraint = seller.key() == ticket.owner @ MarketplaceError::InvalidSeller,
    )]
    pub seller: UncheckedAccount<'info>,

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
        constraint = seller_token.owner == seller.key()
            @ MarketplaceError::InvalidPaymentAccount,
        constraint = seller_token.mint == marketplace.payment_mint
            @ MarketplaceError::InvalidPaymentAccount,
    )]
    pub seller_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = organizer_token.owner == marketplace.organizer
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

pub fn secondary_purchase(ctx: Context<SecondaryPurchase>) -> Result<()> {
    ctx.accounts.reentrancy_guard.lock()?;

    let price = ctx
        .accounts
        .ticket
        .authorized_resale_price
        .ok_or(MarketplaceError::NotListed)?;

    let (seller_proceeds, commission) = split_proceeds(price)?;

    // The full price is pulled from the buyer across both legs; validate the
    // delegation up front so no leg runs on a shortfall
    check_delegated_funds(
        &ctx.accounts.buyer_token,
        &ctx.accounts.marketplace.key(),
        price,
    )?;

    let registry_key = ctx.accounts.marketplace.registry;
    let bump = ctx.accounts.marketplace.bump;
    let signer_seeds: &[&[u8]] = &[MARKETPLACE_SEED, registry_key.as_ref(), &[bump]];
    let signer = &[signer_seeds];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_token.to_account_info(),
                to: ctx.accounts.seller_token.to_account_info(),
                authority: ctx.accounts.marketplace.to_account_info(),
            },
            signer,
        ),
        seller_proceeds,
    )?;

    if commission > 0 {
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
            commission,
        )?;
    }

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
    let seller = ctx.accounts.seller.key();
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.total_sales += 1;
    marketplace.total_volume = safe_add(marketplace.total_volume, price)?;

    emit!(TicketResold {
        marketplace: marketplace.key(),
        ticket_id,
        seller,
        buyer: ctx.accounts.buyer.key(),
        price,
        seller_proceeds,
        commission,
    });

    msg!(
        "Secondary sale: ticket {} from {} to {} for {} ({} commission)",
        ticket_id,
        seller,
        ctx.accounts.buyer.key(),
        price,
        commission
    );

    ctx.accounts.reentrancy_guard.unlock()?;

    Ok(())
}

#[event]
pub struct TicketResold {
    pub marketplace: Pubkey,
    pub ticket_id: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    pub seller_proceeds: u64,
    pub commission: u64,
}
