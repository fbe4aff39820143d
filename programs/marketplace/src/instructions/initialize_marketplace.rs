use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use ticket_registry::state::EventRegistry;

use crate::constants::{MARKETPLACE_SEED, REENTRANCY_SEED};
use crate::errors::MarketplaceError;
use crate::state::Marketplace;
use crate::utils::reentrancy::ReentrancyGuard;

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub registry: Account<'info, EventRegistry>,

    #[account(
        init,
        payer = payer,
        seeds = [MARKETPLACE_SEED, registry.key().as_ref()],
        bump,
        space = 8 + Marketplace::SIZE,
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub payment_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        seeds = [REENTRANCY_SEED, marketplace.key().as_ref()],
        bump,
        space = 8 + ReentrancyGuard::INIT_SPACE,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(ctx: Context<InitializeMarketplace>) -> Result<()> {
    // The registry records its paired marketplace at creation; requiring the
    // reverse binding ties the pair together both ways
    require_keys_eq!(
        ctx.accounts.registry.marketplace,
        ctx.accounts.marketplace.key(),
        MarketplaceError::InvalidRegistry
    );

    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.registry = ctx.accounts.registry.key();
    marketplace.organizer = ctx.accounts.registry.organizer;
    marketplace.payment_mint = ctx.accounts.payment_mint.key();
    marketplace.primary_sales = 0;
    marketplace.total_sales = 0;
    marketplace.total_volume = 0;
    marketplace.bump = ctx.bumps.marketplace;

    let reentrancy_guard = &mut ctx.accounts.reentrancy_guard;
    reentrancy_guard.is_locked = false;
    reentrancy_guard.bump = ctx.bumps.reentrancy_guard;

    emit!(MarketplaceInitialized {
        marketplace: marketplace.key(),
        registry: marketplace.registry,
        organizer: marketplace.organizer,
        payment_mint: marketplace.payment_mint,
    });

    msg!(
        "Marketplace initialized for registry {}",
        marketplace.registry
    );

    Ok(())
}

#[event]
pub struct MarketplaceInitialized {
    pub marketplace: Pubkey,
    pub registry: Pubkey,
    pub organizer: Pubkey,
    pub payment_mint: Pubkey,
}
