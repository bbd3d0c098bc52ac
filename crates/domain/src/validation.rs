// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// The most sections a single request may create for one offering.
pub const MAX_QUANTITY: u32 = 100;

/// A validated, strictly positive number of sections to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Validates a numeric quantity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `value` is zero, negative,
    /// or above [`MAX_QUANTITY`].
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidQuantity {
                input: value.to_string(),
                reason: "must be a positive integer",
            });
        }
        match u32::try_from(value) {
            Ok(quantity) if quantity <= MAX_QUANTITY => Ok(Self(quantity)),
            _ => Err(DomainError::InvalidQuantity {
                input: value.to_string(),
                reason: "is too large",
            }),
        }
    }

    /// Parses a quantity from raw user input.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the input is not numeric,
    /// is not strictly positive, or is above [`MAX_QUANTITY`].
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidQuantity {
                input: input.to_string(),
                reason: "must be a number",
            })?;
        Self::new(value)
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}
