//! Ledger-wide limits.

use near_sdk::Gas;

/// Basis points denominator (10,000 = 100%)
pub const BASIS_POINTS: u16 = 10_000;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Maximum dispute reason length in bytes
pub const MAX_REASON_LEN: usize = 256;

/// Maximum rating comment length in bytes
pub const MAX_COMMENT_LEN: usize = 256;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Upper bound for the `migrate` call scheduled by `update_contract`
pub const MAX_MIGRATE_GAS: Gas = Gas::from_tgas(50);
