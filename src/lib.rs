// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! # Store Account
//!
//! This library models a customer account at a small store: cumulative
//! purchase history plus a revolving store-credit ("charge") balance,
//! with validation rules governing purchases, charges, payments, and
//! credit eligibility.
//!
//! ## Core Components
//!
//! - [`Account`]: the account entity with guarded state transitions
//! - [`AccountError`]: error kinds for rejected operations
//!
//! All monetary values are integer pennies (minor currency units);
//! floating point is never used for money.
//!
//! ## Example
//!
//! ```
//! use store_account_rs::{Account, AccountError};
//!
//! let mut account = Account::new("Jane Doe", "123 Main St", "01-02-2024");
//! account.post_purchase(10_000).unwrap();
//! account.set_charge_limit(5_000).unwrap();
//! account.post_charge(2_000).unwrap();
//! assert_eq!(account.charge_balance(), 2_000);
//!
//! // A return may not drive total purchases negative.
//! assert_eq!(
//!     account.post_purchase(-20_000),
//!     Err(AccountError::InvalidReturn)
//! );
//! ```
//!
//! ## Thread Safety
//!
//! The account is a plain single-threaded value. Hosts that share one
//! across threads must wrap it in their own lock; no internal
//! synchronization is provided.

pub mod account;
pub mod error;

pub use account::Account;
pub use error::AccountError;
