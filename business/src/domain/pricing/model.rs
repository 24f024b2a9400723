use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::errors::PricingError;

/// Global pricing parameters for the shop, kept as a single settings
/// document: premium packaging surcharge, shipping cost per region and
/// default card price per rarity tier.
#[derive(Debug, Clone)]
pub struct PricingSettings {
    pub premium_pack_price: f64,
    pub shipping_prices: HashMap<String, f64>,
    pub rarity_prices: HashMap<String, f64>,
    pub last_updated: DateTime<Utc>,
}

pub struct NewPricingSettingsProps {
    pub premium_pack_price: f64,
    pub shipping_prices: HashMap<String, f64>,
    pub rarity_prices: HashMap<String, f64>,
}

impl PricingSettings {
    pub fn new(props: NewPricingSettingsProps) -> Result<Self, PricingError> {
        if props.premium_pack_price < 0.0
            || props.shipping_prices.values().any(|price| *price < 0.0)
            || props.rarity_prices.values().any(|price| *price < 0.0)
        {
            return Err(PricingError::NegativeAmount);
        }

        Ok(Self {
            premium_pack_price: props.premium_pack_price,
            shipping_prices: props.shipping_prices,
            rarity_prices: props.rarity_prices,
            last_updated: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        premium_pack_price: f64,
        shipping_prices: HashMap<String, f64>,
        rarity_prices: HashMap<String, f64>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            premium_pack_price,
            shipping_prices,
            rarity_prices,
            last_updated,
        }
    }

    /// Settings seeded on first startup when no document exists yet.
    pub fn defaults() -> Self {
        let shipping_prices = HashMap::from([
            ("GTA".to_string(), 5.99),
            ("Southern Ontario".to_string(), 7.99),
            ("Northern Ontario".to_string(), 9.99),
            ("Canada Wide".to_string(), 12.99),
            ("International".to_string(), 24.99),
        ]);
        let rarity_prices = HashMap::from([
            ("Common".to_string(), 0.99),
            ("Uncommon".to_string(), 1.99),
            ("Rare".to_string(), 4.99),
            ("Super Rare".to_string(), 9.99),
            ("Legendary".to_string(), 24.99),
        ]);

        Self {
            premium_pack_price: 19.99,
            shipping_prices,
            rarity_prices,
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_settings_when_amounts_non_negative() {
        let result = PricingSettings::new(NewPricingSettingsProps {
            premium_pack_price: 19.99,
            shipping_prices: HashMap::from([("GTA".to_string(), 5.99)]),
            rarity_prices: HashMap::from([("Common".to_string(), 0.99)]),
        });

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert_eq!(settings.premium_pack_price, 19.99);
        assert_eq!(settings.shipping_prices.get("GTA"), Some(&5.99));
    }

    #[test]
    fn should_reject_negative_premium_pack_price() {
        let result = PricingSettings::new(NewPricingSettingsProps {
            premium_pack_price: -1.0,
            shipping_prices: HashMap::new(),
            rarity_prices: HashMap::new(),
        });

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PricingError::NegativeAmount));
    }

    #[test]
    fn should_reject_negative_shipping_price() {
        let result = PricingSettings::new(NewPricingSettingsProps {
            premium_pack_price: 19.99,
            shipping_prices: HashMap::from([("GTA".to_string(), -5.99)]),
            rarity_prices: HashMap::new(),
        });

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PricingError::NegativeAmount));
    }

    #[test]
    fn should_reject_negative_rarity_price() {
        let result = PricingSettings::new(NewPricingSettingsProps {
            premium_pack_price: 19.99,
            shipping_prices: HashMap::new(),
            rarity_prices: HashMap::from([("Legendary".to_string(), -24.99)]),
        });

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PricingError::NegativeAmount));
    }

    #[test]
    fn should_seed_expected_default_values() {
        let defaults = PricingSettings::defaults();

        assert_eq!(defaults.premium_pack_price, 19.99);
        assert_eq!(defaults.shipping_prices.len(), 5);
        assert_eq!(defaults.shipping_prices.get("GTA"), Some(&5.99));
        assert_eq!(defaults.shipping_prices.get("International"), Some(&24.99));
        assert_eq!(defaults.rarity_prices.len(), 5);
        assert_eq!(defaults.rarity_prices.get("Common"), Some(&0.99));
        assert_eq!(defaults.rarity_prices.get("Legendary"), Some(&24.99));
    }
}
