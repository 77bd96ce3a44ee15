use ordertx_core::PriceMatching;
use serde::{Deserialize, Serialize};

/// Options for order registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOptions {
    /// How looked-up prices are paired with submitted items
    #[serde(default)]
    pub price_matching: PriceMatching,
}

impl RegistrationOptions {
    pub fn with_price_matching(mut self, price_matching: PriceMatching) -> Self {
        self.price_matching = price_matching;
        self
    }
}
