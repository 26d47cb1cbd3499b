//! UTMify reporting configuration.

use serde::Deserialize;

/// UTMify order reporting settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UtmifyConfig {
    /// Whether order reporting is active.
    #[serde(default)]
    pub enabled: bool,
    /// API token (loaded from UTMIFY_API_TOKEN env var).
    #[serde(skip)]
    pub api_token: String,
    /// Platform label sent with every order (default: "NGKPay").
    pub platform_name: Option<String>,
    /// Orders endpoint override, mainly for staging.
    pub base_url: Option<String>,
}
