//! NFT rentals: administrator-curated listings, block-height leases, disputes, emergency returns and mutual ratings.

pub use crate::errors::RentalError;
use crate::constants::MAX_MIGRATE_GAS;
use crate::events::RentalEvent;
use crate::state::RentalLedger;
use near_sdk::json_types::U128;
use near_sdk::{env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise};

mod admin;
pub mod constants;
pub mod errors;
mod events;
mod lifecycle;
mod ratings;
pub mod state;
pub mod types;
mod views;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct NftRentalsContract {
    state: RentalLedger,
}

#[near]
impl NftRentalsContract {
    #[init]
    pub fn new(admin: AccountId) -> Self {
        Self {
            state: RentalLedger::new(admin),
        }
    }

    // --- Administrator ---

    #[handle_result]
    pub fn create_rental(
        &mut self,
        nft_id: u64,
        duration: u64,
        price: U128,
    ) -> Result<u64, RentalError> {
        admin::create_rental(
            &mut self.state,
            &env::predecessor_account_id(),
            env::block_height(),
            nft_id,
            duration,
            price,
        )
    }

    #[handle_result]
    pub fn update_rental_price(
        &mut self,
        rental_id: u64,
        new_price: U128,
    ) -> Result<bool, RentalError> {
        admin::update_rental_price(
            &mut self.state,
            &env::predecessor_account_id(),
            rental_id,
            new_price,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn offer_rental_discount(
        &mut self,
        rental_id: u64,
        discount_bps: u32,
    ) -> Result<bool, RentalError> {
        admin::offer_rental_discount(
            &mut self.state,
            &env::predecessor_account_id(),
            rental_id,
            discount_bps,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn emergency_return_nft(&mut self, rental_id: u64) -> Result<bool, RentalError> {
        admin::emergency_return_nft(
            &mut self.state,
            &env::predecessor_account_id(),
            env::block_height(),
            rental_id,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn set_admin(&mut self, new_admin: AccountId) -> Result<(), RentalError> {
        self.state.set_admin(&env::predecessor_account_id(), new_admin)
    }

    // --- Renters and parties ---

    #[payable]
    #[handle_result]
    pub fn rent_nft(&mut self, rental_id: u64) -> Result<bool, RentalError> {
        lifecycle::rent_nft(
            &mut self.state,
            &env::predecessor_account_id(),
            env::block_height(),
            env::attached_deposit(),
            rental_id,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn end_rental(&mut self, rental_id: u64) -> Result<bool, RentalError> {
        lifecycle::end_rental(
            &mut self.state,
            &env::predecessor_account_id(),
            env::block_height(),
            rental_id,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn extend_rental(
        &mut self,
        rental_id: u64,
        extra_duration: u64,
    ) -> Result<bool, RentalError> {
        lifecycle::extend_rental(
            &mut self.state,
            &env::predecessor_account_id(),
            rental_id,
            extra_duration,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn file_rental_dispute(
        &mut self,
        rental_id: u64,
        reason: String,
    ) -> Result<bool, RentalError> {
        lifecycle::file_rental_dispute(
            &mut self.state,
            &env::predecessor_account_id(),
            rental_id,
            reason,
        )?;
        Ok(true)
    }

    #[handle_result]
    pub fn rate_rental(
        &mut self,
        rental_id: u64,
        rating_owner: bool,
        score: u32,
        comment: Option<String>,
    ) -> Result<bool, RentalError> {
        ratings::rate_rental(
            &mut self.state,
            &env::predecessor_account_id(),
            env::block_height(),
            rental_id,
            rating_owner,
            score,
            comment,
        )?;
        Ok(true)
    }

    // --- Upgrade ---

    #[handle_result]
    pub fn update_contract(&mut self, migrate_gas: u64) -> Result<Promise, RentalError> {
        let caller = env::predecessor_account_id();
        self.state.require_admin(&caller)?;
        if migrate_gas > MAX_MIGRATE_GAS.as_gas() {
            return Err(RentalError::InvalidInput(format!(
                "Migrate gas exceeds {} TGas",
                MAX_MIGRATE_GAS.as_tgas()
            )));
        }
        let code = env::input()
            .ok_or_else(|| RentalError::invalid_input("Missing contract code"))?
            .to_vec();
        RentalEvent::ContractUpgraded {
            manager: caller,
            timestamp: env::block_timestamp_ms(),
        }
        .emit();
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_yoctonear(0),
                Gas::from_gas(migrate_gas),
            ))
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: RentalLedger::migrate(),
        }
    }
}
