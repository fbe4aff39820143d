use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("No organizer-held ticket remains for primary purchase")]
    SoldOut,

    #[msg("Ticket is not listed for resale through this marketplace")]
    NotListed,

    #[msg("Payment rejected: insufficient balance or delegated allowance")]
    PaymentFailed,

    #[msg("Registry account does not match this marketplace")]
    InvalidRegistry,

    #[msg("Seller account does not match the ticket owner")]
    InvalidSeller,

    #[msg("Token account has the wrong mint or owner")]
    InvalidPaymentAccount,

    #[msg("Ticket is not the next primary ticket or is no longer organizer-held")]
    TicketNotForSale,

    #[msg("Operation locked due to reentrancy")]
    ReentrancyLocked,

    #[msg("Math overflow")]
    MathOverflow,
}
