pub mod initialize_marketplace;
pub mod purchase_ticket;
pub mod secondary_purchase;

pub use initialize_marketplace::*;
pub use purchase_ticket::*;
pub use secondary_purchase::*;
