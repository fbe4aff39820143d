use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};

use crate::constants::{REGISTRY_SEED, TICKET_SEED};
use crate::errors::RegistryError;
use crate::state::{EventRegistry, Ticket};
use crate::utils::validation::{validate_mint_count, validate_mint_recipient};

#[derive(Accounts)]
pub struct BulkMintTickets<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,

    /// CHECK: Initial holder of the minted tickets. Must be the organizer,
    /// enforced in the handler before any ticket account is created.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            REGISTRY_SEED,
            registry.organizer.as_ref(),
            registry.event_id.to_le_bytes().as_ref()
        ],
        bump = registry.bump,
        constraint = registry.organizer == organizer.key() @ RegistryError::Unauthorized,
    )]
    pub registry: Account<'info, EventRegistry>,

    pub system_program: Program<'info, System>,
    // remaining_accounts: one uninitialized ticket PDA per minted ticket,
    // in ascending id order starting at tickets_minted + 1
}

pub fn bulk_mint_tickets<'info>(
    ctx: Context<'_, '_, 'info, 'info, BulkMintTickets<'info>>,
    count: u64,
) -> Result<()> {
    validate_mint_count(count)?;
    validate_mint_recipient(
        ctx.accounts.recipient.key(),
        ctx.accounts.registry.organizer,
    )?;

    let registry_key = ctx.accounts.registry.key();
    let recipient = ctx.accounts.recipient.key();
    let ticket_price = ctx.accounts.registry.ticket_price;
    let marketplace = ctx.accounts.registry.marketplace;

    // Supply check happens before any account is created
    let new_total = ctx.accounts.registry.reserve_ids(count)?;

    require!(
        ctx.remaining_accounts.len() == count as usize,
        RegistryError::InvalidTicketAccount
    );

    let first_id = ctx.accounts.registry.tickets_minted + 1;
    for (i, ticket_account) in ctx.remaining_accounts.iter().enumerate() {
        let ticket_id = first_id + i as u64;
        let id_bytes = ticket_id.to_le_bytes();

        let (expected, bump) = Pubkey::find_program_address(
            &[TICKET_SEED, registry_key.as_ref(), id_bytes.as_ref()],
            ctx.program_id,
        );
        require_keys_eq!(
            ticket_account.key(),
            expected,
            RegistryError::InvalidTicketAccount
        );
        require!(
            ticket_account.data_is_empty(),
            RegistryError::TicketAlreadyMinted
        );

        let space = 8 + Ticket::SIZE;
        let lamports = Rent::get()?.minimum_balance(space);
        let signer_seeds: &[&[u8]] = &[
            TICKET_SEED,
            registry_key.as_ref(),
            id_bytes.as_ref(),
            &[bump],
        ];

        create_account(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                CreateAccount {
                    from: ctx.accounts.organizer.to_account_info(),
                    to: ticket_account.clone(),
                },
                &[signer_seeds],
            ),
            lamports,
            space as u64,
            ctx.program_id,
        )?;

        let ticket = Ticket {
            registry: registry_key,
            ticket_id,
            owner: recipient,
            last_purchase_price: ticket_price,
            authorized_resale_price: None,
            // Minted tickets carry the organizer's blanket approval of the
            // paired marketplace, so primary sales can settle directly
            resale_delegate: Some(marketplace),
            bump,
        };

        let mut account_data = ticket_account.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut account_data;
        ticket.try_serialize(&mut writer)?;

        emit!(TicketMinted {
            registry: registry_key,
            ticket_id,
            owner: recipient,
            price: ticket_price,
        });
    }

    let registry = &mut ctx.accounts.registry;
    registry.tickets_minted = new_total;

    msg!(
        "Minted tickets {}..={} to {}",
        first_id,
        new_total,
        recipient
    );

    Ok(())
}

#[event]
pub struct TicketMinted {
    pub registry: Pubkey,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub price: u64,
}
