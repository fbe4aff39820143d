pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const REENTRANCY_SEED: &[u8] = b"reentrancy";

/// Organizer commission on secondary sales: 10% in basis points.
pub const COMMISSION_BPS: u64 = 1_000;
pub const BPS_DENOMINATOR: u64 = 10_000;
