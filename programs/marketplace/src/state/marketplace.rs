use anchor_lang::prelude::*;

#[account]
pub struct Marketplace {
    pub registry: Pubkey,           // 32 bytes - paired ticket registry PDA
    pub organizer: Pubkey,          // 32 bytes - receives proceeds and commissions
    pub payment_mint: Pubkey,       // 32 bytes - accepted payment token
    pub primary_sales: u64,         // 8 bytes - primary tickets settled so far
    pub total_sales: u64,           // 8 bytes - primary + secondary settlements
    pub total_volume: u64,          // 8 bytes - total payment volume moved
    pub bump: u8,                   // 1 byte - PDA bump seed
}

impl Marketplace {
    pub const SIZE: usize = 32 +    // registry
        32 +                        // organizer
        32 +                        // payment_mint
        8 +                         // primary_sales
        8 +                         // total_sales
        8 +                         // total_volume
        1;                          // bump

    /// Tickets are minted to the organizer in id order and only this
    /// marketplace settles primary sales, so the first organizer-held id is
    /// always one past the settled count.
    pub fn next_primary_ticket(&self) -> u64 {
        self.primary_sales + 1
    }

    pub fn has_unsold(&self, tickets_minted: u64) -> bool {
        self.primary_sales < tickets_minted
    }
}
