use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized: signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("Signer is not the current owner of this ticket")]
    NotOwner,

    #[msg("Ticket does not belong to this registry")]
    TicketNotFound,

    #[msg("Mint would exceed the total ticket supply")]
    SupplyExceeded,

    #[msg("Re-selling price is more than 110% of the last purchase price")]
    PriceCapExceeded,

    #[msg("Ticket account does not match the expected PDA")]
    InvalidTicketAccount,

    #[msg("Ticket account already exists")]
    TicketAlreadyMinted,

    #[msg("Mint count must be between 1 and the batch limit")]
    InvalidMintCount,

    #[msg("Primary tickets must be minted to the organizer")]
    InvalidRecipient,

    #[msg("Ticket price must be greater than zero")]
    InvalidPrice,

    #[msg("Total supply must be greater than zero")]
    InvalidSupply,

    #[msg("Event name exceeds maximum length")]
    NameTooLong,

    #[msg("Event symbol exceeds maximum length")]
    SymbolTooLong,

    #[msg("String contains non-printable characters")]
    InvalidCharacters,

    #[msg("Math overflow")]
    MathOverflow,
}
