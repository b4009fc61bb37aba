// Payment info - what supporters can buy and who to contact.
//
// Prices are opaque display strings ("$4.99/month"); the bot never handles
// money, it only tells people where to go.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSettings {
    #[serde(default)]
    pub tiers: Vec<SubscriptionTier>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub qr_url: Option<String>,
}

/// Parse `Name=Price;Name=Price` keeping the order given.
/// Blank segments are skipped; a segment without `=` yields `None`.
pub fn parse_tiers(raw: &str) -> Option<Vec<SubscriptionTier>> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (name, price) = segment.split_once('=')?;
            let (name, price) = (name.trim(), price.trim());
            if name.is_empty() || price.is_empty() {
                return None;
            }
            Some(SubscriptionTier {
                name: name.to_string(),
                price: price.to_string(),
            })
        })
        .collect()
}

pub struct PaymentService {
    settings: PaymentSettings,
}

impl PaymentService {
    pub fn new(settings: PaymentSettings) -> Self {
        Self { settings }
    }

    pub fn contact(&self) -> &str {
        self.settings
            .contact
            .as_deref()
            .unwrap_or("a server administrator")
    }

    pub fn qr_url(&self) -> Option<&str> {
        self.settings.qr_url.as_deref()
    }

    /// One markdown line per tier, or a placeholder when nothing is configured.
    pub fn tier_lines(&self) -> Vec<String> {
        if self.settings.tiers.is_empty() {
            return vec!["No subscription tiers are available right now.".to_string()];
        }

        self.settings
            .tiers
            .iter()
            .map(|tier| format!("• **{}** — {}", tier.name, tier.price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers_keeps_order() {
        let tiers = parse_tiers("Supporter=$2.99; Pro = $9.99 ;Basic=$4.99").unwrap();
        let names: Vec<_> = tiers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Supporter", "Pro", "Basic"]);
        assert_eq!(tiers[1].price, "$9.99");
    }

    #[test]
    fn test_parse_tiers_rejects_malformed() {
        assert!(parse_tiers("Basic").is_none());
        assert!(parse_tiers("Basic=").is_none());
        assert_eq!(parse_tiers(" ; ").unwrap().len(), 0);
    }

    #[test]
    fn test_tier_lines() {
        let service = PaymentService::new(PaymentSettings {
            tiers: parse_tiers("Basic=$4.99").unwrap(),
            contact: Some("billing@example.com".to_string()),
            qr_url: None,
        });
        assert_eq!(service.tier_lines(), vec!["• **Basic** — $4.99"]);
        assert_eq!(service.contact(), "billing@example.com");
    }

    #[test]
    fn test_empty_settings_fallbacks() {
        let service = PaymentService::new(PaymentSettings::default());
        assert_eq!(service.tier_lines().len(), 1);
        assert_eq!(service.contact(), "a server administrator");
        assert!(service.qr_url().is_none());
    }
}
