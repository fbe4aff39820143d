pub mod reentrancy;

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{BPS_DENOMINATOR, COMMISSION_BPS};
use crate::errors::MarketplaceError;

/// Approve-then-pull precondition: the buyer's token account must carry a
/// delegation to the marketplace PDA covering the amount, and the balance to
/// back it. Checked before any leg moves funds so a shortfall fails with
/// PaymentFailed and no side effects.
pub fn check_delegated_funds(
    token_account: &TokenAccount,
    delegate: &Pubkey,
    amount: u64,
) -> Result<()> {
    let delegated_to: Option<Pubkey> = token_account.delegate.into();
    require!(
        delegated_to == Some(*delegate),
        MarketplaceError::PaymentFailed
    );
    require!(
        token_account.delegated_amount >= amount,
        MarketplaceError::PaymentFailed
    );
    require!(token_account.amount >= amount, MarketplaceError::PaymentFailed);
    Ok(())
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(MarketplaceError::MathOverflow.into())
}

/// Organizer commission on a secondary sale: floor(price * 10%).
pub fn calculate_commission(price: u64) -> Result<u64> {
    let commission = (price as u128)
        .checked_mul(COMMISSION_BPS as u128)
        .ok_or(MarketplaceError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    Ok(commission as u64)
}

/// Splits a secondary sale price into (seller_proceeds, commission).
/// The seller absorbs the rounding remainder, so the parts always sum to
/// exactly the price paid.
pub fn split_proceeds(price: u64) -> Result<(u64, u64)> {
    let commission = calculate_commission(price)?;
    let seller_proceeds = price
        .checked_sub(commission)
        .ok_or(MarketplaceError::MathOverflow)?;
    Ok((seller_proceeds, commission))
}
