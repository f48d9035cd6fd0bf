//! Cart configuration shared by the store, the view model and the client.

/// Session storage key holding the serialized cart.
pub const DEFAULT_STORAGE_KEY: &str = "session-cart";
/// Prefix rendered in front of prices and totals.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
/// How long the "item added" notification stays visible.
pub const DEFAULT_NOTIFICATION_MS: u32 = 2000;
/// How long an add button shows its "Added!" feedback.
pub const DEFAULT_BUTTON_FEEDBACK_MS: u32 = 1500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartConfig {
    pub storage_key: String,
    pub currency_symbol: String,
    pub notification_ms: u32,
    pub button_feedback_ms: u32,
}

impl CartConfig {
    /// Same defaults, different storage key. Lets two widgets on one page
    /// keep separate carts.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Format an amount string with the configured currency prefix.
    #[must_use]
    pub fn money(&self, amount: &str) -> String {
        format!("{}{amount}", self.currency_symbol)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            button_feedback_ms: DEFAULT_BUTTON_FEEDBACK_MS,
        }
    }
}
