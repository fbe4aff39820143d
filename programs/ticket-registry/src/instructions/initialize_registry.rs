use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::{EventRegistry, InitializeRegistryParams};
use crate::utils::string_to_bytes;
use crate::utils::validation::*;

#[derive(Accounts)]
#[instruction(params: InitializeRegistryParams)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,

    #[account(
        init,
        payer = organizer,
        seeds = [
            REGISTRY_SEED,
            organizer.key().as_ref(),
            params.event_id.to_le_bytes().as_ref()
        ],
        bump,
        space = 8 + EventRegistry::SIZE,
    )]
    pub registry: Account<'info, EventRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    params: InitializeRegistryParams,
) -> Result<()> {
    validate_event_name(&params.name)?;
    validate_event_symbol(&params.symbol)?;
    validate_ticket_price(params.ticket_price)?;
    validate_total_supply(params.total_supply)?;

    let registry = &mut ctx.accounts.registry;
    registry.organizer = ctx.accounts.organizer.key();
    registry.event_id = params.event_id;
    registry.name = string_to_bytes(&params.name)?;
    registry.symbol = string_to_bytes(&params.symbol)?;
    registry.ticket_price = params.ticket_price;
    registry.total_supply = params.total_supply;
    registry.tickets_minted = 0;
    registry.marketplace = params.marketplace;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        registry: registry.key(),
        organizer: registry.organizer,
        event_id: params.event_id,
        ticket_price: params.ticket_price,
        total_supply: params.total_supply,
        marketplace: params.marketplace,
    });

    msg!(
        "Registry initialized: {} tickets at {} per ticket",
        params.total_supply,
        params.ticket_price
    );

    Ok(())
}

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub organizer: Pubkey,
    pub event_id: u64,
    pub ticket_price: u64,
    pub total_supply: u64,
    pub marketplace: Pubkey,
}
