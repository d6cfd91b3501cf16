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

//! Account management.
//!
//! A customer account at a small store: cumulative purchase history
//! plus a revolving store-credit ("charge") balance. All monetary
//! amounts are integer pennies.
//!
//! # Example
//!
//! ```
//! use store_account_rs::Account;
//!
//! let mut account = Account::with_default_open_date("Ada Lovelace", "12 Gower St\nLondon");
//! account.post_purchase(2_500).unwrap();
//! assert_eq!(account.total_purchases(), 2_500);
//! ```

use crate::error::AccountError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Customer store account.
///
/// State is only reachable through guarded mutators: a rejected
/// operation returns an [`AccountError`] and leaves every field
/// untouched.
#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    address: String,
    /// Immutable after construction.
    open_date: String,
    /// Cumulative net purchase value in pennies. Never negative.
    total_purchases: i64,
    /// Maximum charge balance while the account is open, in pennies.
    charge_limit: i64,
    /// Amount owed on store credit, in pennies. Negative values mean
    /// the store owes the customer credit.
    charge_balance: i64,
    open: bool,
}

impl Account {
    /// Cumulative purchases (in pennies) required, alongside open
    /// status, before the account qualifies for a non-zero charge
    /// limit.
    pub const CHARGE_ELIGIBILITY_THRESHOLD: i64 = 50_000;

    /// Open date used by [`Account::with_default_open_date`].
    pub const DEFAULT_OPEN_DATE: &'static str = "12-12-2023";

    /// Creates an open account with zeroed purchase and charge state.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        open_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            open_date: open_date.into(),
            total_purchases: 0,
            charge_limit: 0,
            charge_balance: 0,
            open: true,
        }
    }

    /// Creates an account opened on [`Account::DEFAULT_OPEN_DATE`].
    pub fn with_default_open_date(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, address, Self::DEFAULT_OPEN_DATE)
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.total_purchases >= 0,
            "Invariant violated: total purchases went negative: {}",
            self.total_purchases
        );
        debug_assert!(
            self.charge_limit >= 0,
            "Invariant violated: charge limit went negative: {}",
            self.charge_limit
        );
    }

    /// Posts a purchase to the account.
    ///
    /// Purchases may be positive or negative (indicating returns).
    /// Returns may not bring total purchases below zero.
    pub fn post_purchase(&mut self, amount: i64) -> Result<(), AccountError> {
        if self.total_purchases + amount < 0 {
            return Err(AccountError::InvalidReturn);
        }
        self.total_purchases += amount;
        self.assert_invariants();
        Ok(())
    }

    /// Posts a charge against store credit.
    ///
    /// Charges may not be negative and may not push the balance past
    /// the effective charge limit, which is zero while the account is
    /// closed.
    pub fn post_charge(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount < 0 {
            return Err(AccountError::InvalidArgument);
        }
        if amount + self.charge_balance > self.charge_limit() {
            return Err(AccountError::LimitExceeded);
        }
        self.charge_balance += amount;
        self.assert_invariants();
        Ok(())
    }

    /// Posts a payment against the charge balance.
    ///
    /// Paying more than the outstanding balance drives it negative,
    /// indicating store credit. The paid-down portion of the balance
    /// counts as purchases: the full amount when it fits within the
    /// balance, otherwise exactly the balance being cleared.
    pub fn post_payment(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount < 0 {
            return Err(AccountError::InvalidArgument);
        }
        if amount <= self.charge_balance {
            self.post_purchase(amount)?;
        } else {
            // Balance is completely paid off; convert all of it to
            // purchases. With an already-negative balance the purchase
            // guard can reject this, leaving the balance untouched.
            self.post_purchase(self.charge_balance)?;
        }
        self.charge_balance -= amount;
        self.assert_invariants();
        Ok(())
    }

    /// Whether the account qualifies for a non-zero charge limit.
    ///
    /// True when the account is open and at least
    /// [`Account::CHARGE_ELIGIBILITY_THRESHOLD`] in purchases has been
    /// posted.
    pub fn is_eligible_for_charge(&self) -> bool {
        self.open && self.total_purchases >= Self::CHARGE_ELIGIBILITY_THRESHOLD
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Replaces the charge limit. Negative limits are rejected.
    ///
    /// An existing balance above the new limit stays as-is; only
    /// future charges are checked against it.
    pub fn set_charge_limit(&mut self, new_limit: i64) -> Result<(), AccountError> {
        if new_limit < 0 {
            return Err(AccountError::InvalidArgument);
        }
        self.charge_limit = new_limit;
        self.assert_invariants();
        Ok(())
    }

    /// Opens or closes the account.
    ///
    /// Closing does not touch the stored charge limit, but the
    /// effective limit reports zero until the account reopens.
    pub fn set_account_status(&mut self, open: bool) {
        self.open = open;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn open_date(&self) -> &str {
        &self.open_date
    }

    /// Cumulative net purchases in pennies.
    pub fn total_purchases(&self) -> i64 {
        self.total_purchases
    }

    /// Effective charge limit: zero while the account is closed,
    /// otherwise the stored limit.
    pub fn charge_limit(&self) -> i64 {
        if self.open { self.charge_limit } else { 0 }
    }

    /// Current charge balance in pennies. Positive values mean the
    /// customer owes money on the account.
    pub fn charge_balance(&self) -> i64 {
        self.charge_balance
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Information")?;
        writeln!(f, "\t{}", self.name)?;
        writeln!(f, "\t{}", self.address.replace('\n', "\n\t"))?;
        writeln!(f, "\tAccount Open Date: {}", self.open_date)?;
        writeln!(f, "\tTotal Purchases:   {}", self.total_purchases)?;
        // The stored limit, not the effective one.
        writeln!(f, "\tCharge Limit:      {}", self.charge_limit)?;
        writeln!(f, "\tCurrent Tab:       {}", self.charge_balance)?;
        write!(
            f,
            "\tAccount Status:    {}",
            if self.open { "Open" } else { "Closed" }
        )
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Account", 7)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("open_date", &self.open_date)?;
        state.serialize_field("total_purchases", &self.total_purchases)?;
        // Effective limit, agreeing with the public getter.
        state.serialize_field("charge_limit", &self.charge_limit())?;
        state.serialize_field("charge_balance", &self.charge_balance)?;
        state.serialize_field("open", &self.open)?;
        state.end()
    }
}
