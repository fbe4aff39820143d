use anchor_lang::prelude::*;

use crate::constants::RESALE_CAP_PCT;
use crate::errors::RegistryError;

#[account]
pub struct Ticket {
    pub registry: Pubkey,                    // 32 bytes - parent registry PDA
    pub ticket_id: u64,                      // 8 bytes - sequential from 1, never reused
    pub owner: Pubkey,                       // 32 bytes - current holder
    pub last_purchase_price: u64,            // 8 bytes - mint price, then each settled price
    pub authorized_resale_price: Option<u64>,// 9 bytes - set by the owner, cleared on settle
    pub resale_delegate: Option<Pubkey>,     // 33 bytes - who may execute the sale
    pub bump: u8,                            // 1 byte - PDA bump seed
}

impl Ticket {
    pub const SIZE: usize = 32 +    // registry
        8 +                         // ticket_id
        32 +                        // owner
        8 +                         // last_purchase_price
        9 +                         // authorized_resale_price
        33 +                        // resale_delegate
        1;                          // bump

    /// Highest price the owner may ask on resale: 110% of the last settled
    /// purchase price, floor division. u128 intermediate so the multiply
    /// cannot overflow.
    pub fn max_resale_price(&self) -> u64 {
        let max = (self.last_purchase_price as u128)
            .saturating_mul(RESALE_CAP_PCT as u128)
            / 100;
        max.min(u64::MAX as u128) as u64
    }

    pub fn is_listed(&self) -> bool {
        self.authorized_resale_price.is_some() && self.resale_delegate.is_some()
    }

    /// Records resale terms. Fails with PriceCapExceeded above the ceiling and
    /// leaves the stored authorization untouched.
    pub fn authorize_sale(&mut self, price: u64, delegate: Pubkey) -> Result<()> {
        require!(
            price <= self.max_resale_price(),
            RegistryError::PriceCapExceeded
        );

        self.authorized_resale_price = Some(price);
        self.resale_delegate = Some(delegate);
        Ok(())
    }

    /// Applies a settled sale: new owner, new last price, and the resale
    /// authorization is cleared so the next sale must be re-authorized.
    pub fn settle_sale(&mut self, new_owner: Pubkey, price: u64) {
        self.owner = new_owner;
        self.last_purchase_price = price;
        self.authorized_resale_price = None;
        self.resale_delegate = None;
    }
}
