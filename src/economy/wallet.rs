//! Currency store: the single authoritative coin balance

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{KeyValueStore, keys, persist_raw, read_raw};

/// Persisted, non-negative coin balance
///
/// Every call re-reads the stored value, so two wallets over the same store
/// always agree. `debit` is the only way coins leave the balance and it never
/// drives it below zero.
#[derive(Clone)]
pub struct Wallet {
    store: Arc<dyn KeyValueStore>,
    default_balance: u64,
}

impl Wallet {
    pub fn new(store: Arc<dyn KeyValueStore>, default_balance: u64) -> Self {
        Self {
            store,
            default_balance,
        }
    }

    /// Current balance, or the default when nothing usable is stored.
    ///
    /// A stored value that is not a non-negative integer is replaced by the
    /// default.
    pub fn read(&self) -> u64 {
        let Some(raw) = read_raw(self.store.as_ref(), keys::COINS) else {
            return self.default_balance;
        };

        match raw.trim().parse::<u64>() {
            Ok(balance) => balance,
            Err(e) => {
                warn!("Resetting malformed balance '{}': {}", raw, e);
                self.save(self.default_balance);
                self.default_balance
            }
        }
    }

    /// Add coins and return the new balance.
    pub fn credit(&self, amount: u64) -> u64 {
        let balance = self.read().saturating_add(amount);
        self.save(balance);
        debug!("Credited {} coins, balance {}", amount, balance);
        balance
    }

    /// Spend coins if the balance covers `amount`.
    ///
    /// Returns false and leaves the balance untouched otherwise.
    pub fn debit(&self, amount: u64) -> bool {
        let balance = self.read();
        if balance < amount {
            debug!("Rejected debit of {} coins, balance {}", amount, balance);
            return false;
        }

        self.save(balance - amount);
        debug!("Debited {} coins, balance {}", amount, balance - amount);
        true
    }

    fn save(&self, balance: u64) {
        persist_raw(self.store.as_ref(), keys::COINS, &balance.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UnavailableStore};

    fn wallet() -> (Arc<MemoryStore>, Wallet) {
        let store = Arc::new(MemoryStore::new());
        let wallet = Wallet::new(store.clone(), 100);
        (store, wallet)
    }

    #[test]
    fn test_fresh_store_reads_default() {
        let (store, wallet) = wallet();
        assert_eq!(wallet.read(), 100);
        // Reading alone does not persist anything
        assert!(store.is_empty());
    }

    #[test]
    fn test_debit_scenario() {
        let (_, wallet) = wallet();
        assert!(wallet.debit(10));
        assert_eq!(wallet.read(), 90);

        assert!(!wallet.debit(200));
        assert_eq!(wallet.read(), 90);
    }

    #[test]
    fn test_debit_exact_balance_reaches_zero() {
        let (_, wallet) = wallet();
        assert!(wallet.debit(100));
        assert_eq!(wallet.read(), 0);
        assert!(!wallet.debit(1));
        assert!(wallet.debit(0));
        assert_eq!(wallet.read(), 0);
    }

    #[test]
    fn test_credit_persists() {
        let (store, wallet) = wallet();
        assert_eq!(wallet.credit(25), 125);
        assert_eq!(store.get(keys::COINS).unwrap().as_deref(), Some("125"));

        let other = Wallet::new(store, 100);
        assert_eq!(other.read(), 125);
    }

    #[test]
    fn test_balance_never_negative_over_mixed_sequence() {
        let (_, wallet) = wallet();
        let ops: [(bool, u64); 10] = [
            (false, 30),
            (false, 80),
            (true, 5),
            (false, 60),
            (false, 200),
            (true, 40),
            (false, 45),
            (false, 1),
            (true, 0),
            (false, 0),
        ];

        let mut expected: u64 = 100;
        for (is_credit, amount) in ops {
            if is_credit {
                expected += amount;
                assert_eq!(wallet.credit(amount), expected);
            } else if amount <= expected {
                assert!(wallet.debit(amount));
                expected -= amount;
            } else {
                assert!(!wallet.debit(amount));
            }
            assert_eq!(wallet.read(), expected);
        }
    }

    #[test]
    fn test_malformed_balance_resets_to_default() {
        let (store, wallet) = wallet();
        store.set(keys::COINS, "-40").unwrap();
        assert_eq!(wallet.read(), 100);
        assert_eq!(store.get(keys::COINS).unwrap().as_deref(), Some("100"));
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let wallet = Wallet::new(Arc::new(UnavailableStore), 100);
        assert_eq!(wallet.read(), 100);
        assert_eq!(wallet.credit(5), 105);
        assert!(wallet.debit(10));
        assert!(!wallet.debit(101));
        assert_eq!(wallet.read(), 100);
    }
}
