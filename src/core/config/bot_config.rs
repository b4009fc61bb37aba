// Bot configuration, read once at startup.
//
// Values come from the environment (a `.env` file is loaded in `main`), with
// an optional JSON file for the payment catalog. Env values win over the file.

use crate::core::errors::TruncationLimits;
use crate::core::payments::{parse_tiers, PaymentSettings};
use chrono_tz::Tz;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to read payments file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse payments file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub command_prefix: String,
    pub telemetry_channel_id: Option<u64>,
    pub suggestion_channel_id: Option<u64>,
    pub dev_guild_id: Option<u64>,
    pub display_timezone: Tz,
    pub payments: PaymentSettings,
    pub limits: TruncationLimits,
    /// Module names to unload right after startup registration.
    pub disabled_modules: Vec<String>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` is the production path;
    /// tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let command_prefix = get("COMMAND_PREFIX").unwrap_or_else(|| "!".to_string());

        let display_timezone = match get("DISPLAY_TIMEZONE") {
            Some(name) => Tz::from_str(&name).map_err(|e| ConfigError::Invalid {
                key: "DISPLAY_TIMEZONE",
                value: name.clone(),
                reason: e.to_string(),
            })?,
            None => chrono_tz::UTC,
        };

        let mut payments = match get("PAYMENTS_FILE") {
            Some(path) => load_payments_file(Path::new(&path))?,
            None => PaymentSettings::default(),
        };
        if let Some(raw) = get("SUBSCRIPTION_TIERS") {
            payments.tiers = parse_tiers(&raw).ok_or_else(|| ConfigError::Invalid {
                key: "SUBSCRIPTION_TIERS",
                value: raw.clone(),
                reason: "expected `Name=Price;Name=Price`".to_string(),
            })?;
        }
        if let Some(contact) = get("CONTACT_EMAIL") {
            payments.contact = Some(contact);
        }
        if let Some(url) = get("PAYMENT_QR_URL") {
            payments.qr_url = Some(url);
        }

        let defaults = TruncationLimits::default();
        let limits = TruncationLimits {
            title: parse_or("ERROR_TITLE_LIMIT", get("ERROR_TITLE_LIMIT"), defaults.title)?,
            details: parse_or(
                "ERROR_DETAILS_LIMIT",
                get("ERROR_DETAILS_LIMIT"),
                defaults.details,
            )?,
            context: parse_or(
                "ERROR_CONTEXT_LIMIT",
                get("ERROR_CONTEXT_LIMIT"),
                defaults.context,
            )?,
            args: parse_or("ERROR_ARGS_LIMIT", get("ERROR_ARGS_LIMIT"), defaults.args)?,
        };

        let disabled_modules = get("DISABLED_MODULES")
            .map(|raw| {
                raw.split(',')
                    .map(|name| name.trim().to_lowercase())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            discord_token,
            command_prefix,
            telemetry_channel_id: parse_id("ERROR_CHANNEL_ID", get("ERROR_CHANNEL_ID"))?,
            suggestion_channel_id: parse_id("SUGGESTION_CHANNEL_ID", get("SUGGESTION_CHANNEL_ID"))?,
            dev_guild_id: parse_id("DEV_GUILD_ID", get("DEV_GUILD_ID"))?,
            display_timezone,
            payments,
            limits,
            disabled_modules,
        })
    }
}

fn load_payments_file(path: &Path) -> Result<PaymentSettings, ConfigError> {
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

fn parse_id(key: &'static str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    raw.map(|value| {
        value.parse::<u64>().map_err(|e| ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        })
    })
    .transpose()
}

fn parse_or(key: &'static str, raw: Option<String>, default: usize) -> Result<usize, ConfigError> {
    match raw {
        Some(value) => match value.parse::<usize>() {
            Ok(0) => Err(ConfigError::Invalid {
                key,
                value,
                reason: "must be greater than zero".to_string(),
            }),
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                key,
                value: value.clone(),
                reason: e.to_string(),
            }),
        },
        None => Ok(default),
    }
}
