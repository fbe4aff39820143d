pub mod bulk_mint_tickets;
pub mod get_ticket_details;
pub mod initialize_registry;
pub mod set_sale_details;
pub mod transfer_ownership;

pub use bulk_mint_tickets::*;
pub use get_ticket_details::*;
pub use initialize_registry::*;
pub use set_sale_details::*;
pub use transfer_ownership::*;
