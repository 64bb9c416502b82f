use std::collections::HashMap;

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;

use crate::ct_log::DEFAULT_CT_LOG_URL;

/// Noisy hostnames excluded on top of the CT log list
pub const DEFAULT_CUSTOM_HOSTNAMES: [&str; 2] = [
    // gaming forum
    "gamebombfak3pwnh.onion",
    // search engine
    "metagerv65pwclop2rsfzg4jwowpavpwd6grhhlvdgsswvo6ii4akgyd.onion",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ct_log: CtLogConfig,
    pub blacklist: BlacklistConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CtLogConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlacklistConfig {
    #[serde(default)]
    pub custom_hostnames: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("ct_log.url", DEFAULT_CT_LOG_URL)?
            .set_default(
                "blacklist.custom_hostnames",
                DEFAULT_CUSTOM_HOSTNAMES.to_vec(),
            )?
            .add_source(File::with_name("config/settings").required(false));

        // Explicit overrides replace the process environment, which keeps
        // tests independent of each other
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = if key == "blacklist.custom_hostnames" {
                    builder.set_override(&key, split_list(&value))?
                } else {
                    builder.set_override(&key, value)?
                };
            }
        } else {
            // APP_CT_LOG__URL, APP_BLACKLIST__CUSTOM_HOSTNAMES=a.onion,b.onion
            builder = builder.add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("blacklist.custom_hostnames")
                    .try_parsing(true),
            );
        }

        builder.build()?.try_deserialize()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
