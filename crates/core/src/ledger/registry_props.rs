//! Property-based tests for the ledger registry.
//!
//! - Account numbers are unique and strictly increasing from 1
//! - Every account is owned by exactly one registered client
//! - Duplicate registrations never alter the stored client

use chrono::NaiveDate;
use proptest::prelude::*;

use super::client::NewClient;
use super::error::LedgerError;
use super::registry::Ledger;
use crate::account::{Account, AccountNumber};

/// One registry request in a generated scenario.
#[derive(Debug, Clone)]
enum Request {
    Register(u8),
    Open(u8),
}

/// Strategy over a small identity space so duplicates and misses are common.
fn request_strategy() -> impl Strategy<Value = Request> {
    prop_oneof![
        (0u8..6).prop_map(Request::Register),
        (0u8..8).prop_map(Request::Open),
    ]
}

fn client(id: u8, name: &str) -> NewClient {
    NewClient {
        identity: format!("{id:011}"),
        name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
        address: "Av. Brasil, 100".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* sequence of requests, opened accounts are numbered 1..=n
    /// in creation order and each appears in exactly one client's list.
    #[test]
    fn prop_numbering_and_ownership(requests in prop::collection::vec(request_strategy(), 0..50)) {
        let mut ledger = Ledger::default();
        let mut opened = 0u64;

        for request in &requests {
            match request {
                Request::Register(id) => {
                    let _ = ledger.register_client(client(*id, "first"));
                }
                Request::Open(id) => {
                    let identity = format!("{id:011}");
                    match ledger.open_account(&identity) {
                        Ok(account) => {
                            opened += 1;
                            prop_assert_eq!(account.number(), AccountNumber(opened));
                        }
                        Err(err) => {
                            prop_assert_eq!(err, LedgerError::UnknownClient(identity));
                        }
                    }
                }
            }
        }

        let numbers: Vec<u64> = ledger.accounts().map(|a| a.number().into_inner()).collect();
        prop_assert_eq!(numbers, (1..=opened).collect::<Vec<_>>());

        let owned: usize = ledger.clients().map(|c| c.accounts().len()).sum();
        prop_assert_eq!(owned as u64, opened);
        for account in ledger.accounts() {
            let owner = ledger.owner_of(account.number());
            prop_assert!(owner.is_some());
            let owner = owner.unwrap();
            prop_assert!(owner.accounts().contains(&account.number()));
            let listed: Vec<AccountNumber> = ledger
                .accounts_of(owner.identity())
                .map(Account::number)
                .collect();
            prop_assert_eq!(listed.as_slice(), owner.accounts());
        }
    }

    /// *For any* identity registered twice, the second attempt fails and the
    /// stored record still carries the first registration's data.
    #[test]
    fn prop_duplicate_registration_preserves_client(id in 0u8..50) {
        let mut ledger = Ledger::default();
        ledger.register_client(client(id, "first")).unwrap();

        let err = ledger.register_client(client(id, "second")).unwrap_err();
        prop_assert_eq!(err, LedgerError::DuplicateIdentity(format!("{id:011}")));

        let stored = ledger.find_client(&format!("{id:011}")).unwrap();
        prop_assert_eq!(stored.name(), "first");
        prop_assert_eq!(ledger.clients().count(), 1);
    }
}
