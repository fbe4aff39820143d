pub const REGISTRY_SEED: &[u8] = b"registry";
pub const TICKET_SEED: &[u8] = b"ticket";

/// Resale price ceiling, as a percentage of the last settled purchase price.
pub const RESALE_CAP_PCT: u64 = 110;

pub const MAX_EVENT_NAME_LEN: usize = 32;
pub const MAX_EVENT_SYMBOL_LEN: usize = 8;

/// Upper bound on one bulk_mint_tickets call; each ticket needs its own
/// account in remaining_accounts and the transaction has to stay under the
/// account limit.
pub const MAX_BATCH_MINT: u64 = 24;
