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

//! Error types for account operations.

use thiserror::Error;

/// Account operation errors.
///
/// Every failed operation leaves the account unchanged; callers match
/// on the variant to distinguish failure kinds programmatically.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    /// A return (negative purchase) would bring total purchases below zero
    #[error("return would bring total purchases below zero")]
    InvalidReturn,

    /// A charge would push the balance past the effective charge limit
    #[error("charge exceeds the effective charge limit")]
    LimitExceeded,

    /// Negative charge, payment, or charge-limit amount
    #[error("negative amounts are not allowed")]
    InvalidArgument,
}
