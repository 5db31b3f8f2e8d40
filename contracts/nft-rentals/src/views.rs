use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::types::{Rental, Reputation};
use crate::*;
use near_sdk::json_types::U128;

#[near]
impl NftRentalsContract {
    pub fn get_admin(&self) -> AccountId {
        self.state.admin.clone()
    }

    pub fn get_version(&self) -> String {
        self.state.version.clone()
    }

    pub fn get_rental(&self, rental_id: u64) -> Option<Rental> {
        self.state.rental(rental_id).ok().cloned()
    }

    /// Next id to be assigned, which is also the number of listings created.
    pub fn get_rental_count(&self) -> u64 {
        self.state.rental_count()
    }

    pub fn get_rentals(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Rental> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
        let end = start.saturating_add(limit).min(self.state.rental_count());
        (start..end)
            .filter_map(|rental_id| self.state.rental(rental_id).ok().cloned())
            .collect()
    }

    pub fn get_effective_price(&self, rental_id: u64) -> Option<U128> {
        self.state
            .rental(rental_id)
            .ok()
            .map(|rental| U128(rental.effective_price()))
    }

    pub fn is_rental_expired(&self, rental_id: u64) -> bool {
        self.state
            .rental(rental_id)
            .is_ok_and(|rental| rental.is_expired(env::block_height()))
    }

    pub fn get_reputation(&self, account_id: AccountId) -> Reputation {
        self.state.reputation(&account_id)
    }
}
