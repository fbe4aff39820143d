use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{EventRegistry, Ticket};
use crate::utils::*;

fn ticket(last_price: u64) -> Ticket {
    Ticket {
        registry: Pubkey::new_unique(),
        ticket_id: 1,
        owner: Pubkey::new_unique(),
        last_purchase_price: last_price,
        authorized_resale_price: None,
        resale_delegate: None,
        bump: 255,
    }
}

fn registry(total_supply: u64, minted: u64) -> EventRegistry {
    EventRegistry {
        organizer: Pubkey::new_unique(),
        event_id: 1,
        name: [0; 32],
        symbol: [0; 8],
        ticket_price: 10_000_000_000_000_000, // 0.01 of an 18-decimal token
        total_supply,
        tickets_minted: minted,
        marketplace: Pubkey::new_unique(),
        bump: 255,
    }
}

#[test]
fn test_registry_size() {
    assert_eq!(EventRegistry::SIZE, 137);
}

#[test]
fn test_ticket_size() {
    // Option<u64> is 1 + 8, Option<Pubkey> is 1 + 32 under borsh
    assert_eq!(Ticket::SIZE, 123);
}

#[test]
fn test_resale_cap_boundary() {
    let t = ticket(50_000_000_000);

    // 110% exactly
    assert_eq!(t.max_resale_price(), 55_000_000_000);

    let mut t = t;
    assert!(t.authorize_sale(55_000_000_000, Pubkey::new_unique()).is_ok());
    assert!(t
        .authorize_sale(55_000_000_001, Pubkey::new_unique())
        .is_err());
}

#[test]
fn test_resale_cap_floor_division() {
    // 110% of 15 is 16.5; floor division allows 16, rejects 17
    let mut t = ticket(15);
    assert_eq!(t.max_resale_price(), 16);
    assert!(t.authorize_sale(16, Pubkey::new_unique()).is_ok());
    assert!(t.authorize_sale(17, Pubkey::new_unique()).is_err());
}

#[test]
fn test_failed_authorization_leaves_terms_unchanged() {
    let mut t = ticket(100);
    let delegate = Pubkey::new_unique();
    t.authorize_sale(105, delegate).unwrap();

    // 200% of the last price, well over the cap
    let err = t.authorize_sale(200, Pubkey::new_unique()).unwrap_err();
    match err {
        anchor_lang::error::Error::AnchorError(e) => assert_eq!(
            e.error_code_number,
            anchor_lang::error::ERROR_CODE_OFFSET + RegistryError::PriceCapExceeded as u32
        ),
        other => panic!("expected PriceCapExceeded, got {:?}", other),
    }

    // Prior authorization survives the rejected call
    assert_eq!(t.authorized_resale_price, Some(105));
    assert_eq!(t.resale_delegate, Some(delegate));
}

#[test]
fn test_settle_sale_clears_authorization() {
    let mut t = ticket(100);
    let marketplace = Pubkey::new_unique();
    t.authorize_sale(110, marketplace).unwrap();
    assert!(t.is_listed());

    let buyer = Pubkey::new_unique();
    t.settle_sale(buyer, 110);

    assert_eq!(t.owner, buyer);
    assert_eq!(t.last_purchase_price, 110);
    assert!(!t.is_listed());
    assert_eq!(t.authorized_resale_price, None);
    assert_eq!(t.resale_delegate, None);
}

#[test]
fn test_cap_follows_most_recent_settled_price() {
    // After a settled resale the cap is based on the new purchase price,
    // not the mint price
    let mut t = ticket(100);
    t.authorize_sale(110, Pubkey::new_unique()).unwrap();
    t.settle_sale(Pubkey::new_unique(), 110);

    assert_eq!(t.max_resale_price(), 121);
    assert!(t.authorize_sale(121, Pubkey::new_unique()).is_ok());
    assert!(t.authorize_sale(122, Pubkey::new_unique()).is_err());
}

#[test]
fn test_supply_reservation() {
    let r = registry(100, 95);

    assert_eq!(r.reserve_ids(5).unwrap(), 100);
    assert!(r.reserve_ids(6).is_err());

    let full = registry(100, 100);
    assert!(full.reserve_ids(1).is_err());
}

#[test]
fn test_string_conversions() {
    let name: [u8; 32] = string_to_bytes("TestFest").unwrap();
    assert_eq!(bytes_to_string(&name), "TestFest");
    assert_eq!(name[8], 0);

    let symbol: [u8; 8] = string_to_bytes("TFEST").unwrap();
    assert_eq!(bytes_to_string(&symbol), "TFEST");

    // Too long for the field
    assert!(string_to_bytes::<8>("LONGERTHAN8").is_err());
}

#[test]
fn test_string_validation() {
    assert!(validate_string("TestFest 2026").is_ok());
    assert!(validate_string("Fete🎉").is_err());
}
