//! Subscription plan input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fallback display name when a plan has none configured.
pub const DEFAULT_PLAN_NAME: &str = "Plano VIP";

/// Plan is the loosely-typed plan record coming from the bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Display name; optional, defaulted at reporting time.
    pub name: Option<String>,
    /// Price in major currency units (e.g. 29.90 BRL).
    #[serde(default)]
    pub value: Decimal,
}

impl Plan {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        debug_assert!(
            !value.is_sign_negative(),
            "plan value must be non-negative"
        );
        Self {
            name: Some(name.into()),
            value,
        }
    }

    /// Returns the display name, falling back to the default.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PLAN_NAME)
    }
}
