//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current shop configuration.
///
/// ## When Used
/// - Console startup (to configure the UI)
/// - Receipt printing (store name, tagline, width)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes_camel_case() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["storeName"], "ShopZen");
        assert_eq!(json["receiptWidth"], 42);
        assert_eq!(json["posTaxRate"], "10");
    }
}
