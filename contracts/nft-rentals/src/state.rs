use crate::errors::RentalError;
use crate::events::RentalEvent;
use crate::types::{Rental, Reputation};
use near_sdk::store::{LookupMap, Vector};
use near_sdk::{env, near, AccountId, BorshStorageKey};
use semver::Version;

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Rentals,
    Reputations,
}

/// Ledger storage. Rentals live in an append-only table and a rental's id is
/// its index, so ids start at 0 and are never reused.
#[near]
pub struct RentalLedger {
    pub version: String,
    pub admin: AccountId,
    pub rentals: Vector<Rental>,
    pub reputations: LookupMap<AccountId, Reputation>,
}

impl RentalLedger {
    pub fn new(admin: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            admin,
            rentals: Vector::new(StorageKey::Rentals),
            reputations: LookupMap::new(StorageKey::Reputations),
        }
    }

    pub fn is_admin(&self, account_id: &AccountId) -> bool {
        &self.admin == account_id
    }

    pub fn require_admin(&self, account_id: &AccountId) -> Result<(), RentalError> {
        if !self.is_admin(account_id) {
            return Err(RentalError::OwnerOnly);
        }
        Ok(())
    }

    pub fn rental_count(&self) -> u64 {
        u64::from(self.rentals.len())
    }

    pub fn rental(&self, rental_id: u64) -> Result<&Rental, RentalError> {
        let index = u32::try_from(rental_id).map_err(|_| RentalError::NotFound)?;
        self.rentals.get(index).ok_or(RentalError::NotFound)
    }

    pub fn rental_mut(&mut self, rental_id: u64) -> Result<&mut Rental, RentalError> {
        let index = u32::try_from(rental_id).map_err(|_| RentalError::NotFound)?;
        self.rentals.get_mut(index).ok_or(RentalError::NotFound)
    }

    /// Appends a listing and returns its id.
    pub fn push_rental(&mut self, build: impl FnOnce(u64) -> Rental) -> u64 {
        let rental_id = self.rental_count();
        self.rentals.push(build(rental_id));
        rental_id
    }

    pub fn reputation(&self, account_id: &AccountId) -> Reputation {
        self.reputations.get(account_id).cloned().unwrap_or_default()
    }

    pub fn record_rating(&mut self, account_id: &AccountId, score: u8) {
        let mut reputation = self.reputation(account_id);
        reputation.record(score);
        self.reputations.insert(account_id.clone(), reputation);
    }

    pub fn set_admin(
        &mut self,
        caller: &AccountId,
        new_admin: AccountId,
    ) -> Result<(), RentalError> {
        self.require_admin(caller)?;
        let old_admin = std::mem::replace(&mut self.admin, new_admin.clone());
        RentalEvent::AdminChanged {
            old_admin,
            new_admin,
        }
        .emit();
        Ok(())
    }

    pub fn migrate() -> Self {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
        let current_version = Version::parse(CURRENT_VERSION)
            .unwrap_or_else(|_| env::panic_str("Invalid current version in Cargo.toml"));

        let mut state: Self = env::state_read()
            .unwrap_or_else(|| env::panic_str("No prior state found, nothing to migrate"));

        let state_version = Version::parse(&state.version)
            .unwrap_or_else(|_| env::panic_str("Stored state carries an unknown version"));

        if state_version >= current_version {
            env::log_str("State is already at latest version");
            return state;
        }

        env::log_str(&format!("Migrating from state version {}", state.version));
        let old_version = std::mem::replace(&mut state.version, CURRENT_VERSION.to_string());
        RentalEvent::StateMigrated {
            old_version,
            new_version: CURRENT_VERSION.to_string(),
        }
        .emit();
        state
    }
}
