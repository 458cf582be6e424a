//! Stable diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Naming-convention findings, prefixed with `N`.
    Naming,
    /// Practices-and-improvements findings, prefixed with `P`.
    Practice,
    /// Hard errors in the exported model itself, prefixed with `E`.
    Error,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Naming => 'N',
            Category::Practice => 'P',
            Category::Error => 'E',
        }
    }
}

/// A diagnostic code: category prefix plus a zero-padded 3-digit number.
///
/// Codes are stable across releases so `deny`/`allow` lists and suppression
/// comments keep working; displayed as `N001`, `P102`, ...
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
