use std::collections::BTreeSet;
use std::env::vars;

use anyhow::Context;
use serde::Deserialize;

use crate::{Density, PagePolicy, PageSize, UserField, UserStatus};

/// Prefix of the environment variables read by [`TableConfig::init`].
pub const ENV_PREFIX: &str = "ROSTER_";

/// Environment as read, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    page_size: Option<usize>,
    search_field: Option<String>,
    /// Comma separated statuses.
    status_filter: Option<String>,
    page_policy: Option<PagePolicy>,
    density: Option<Density>,
    dark_mode: Option<bool>,
}

/// Initial settings of the roster table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub page_size: PageSize,
    pub search_field: UserField,
    pub status_filter: BTreeSet<UserStatus>,
    pub page_policy: PagePolicy,
    pub density: Density,
    pub dark_mode: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            search_field: UserField::FirstName,
            status_filter: BTreeSet::new(),
            page_policy: PagePolicy::default(),
            density: Density::default(),
            dark_mode: false,
        }
    }
}

impl TableConfig {
    /// Reads `ROSTER_*` environment variables and applies defaults.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading table configuration from {ENV_PREFIX}* environment variables");
        Self::from_vars(vars())
    }

    /// Same as [`Self::init`] over an explicit set of variables. Variables
    /// without the prefix are ignored.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_owned(), value.into()))
            })
            .collect();
        let raw: RawConfig =
            serde_env::from_iter(scoped).context("Invalid roster table configuration")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            page_size,
            search_field,
            status_filter,
            page_policy,
            density,
            dark_mode,
        } = raw;
        let defaults = Self::default();

        let page_size = match page_size {
            Some(size) => {
                PageSize::try_from(size).with_context(|| format!("{ENV_PREFIX}PAGE_SIZE={size}"))?
            }
            None => defaults.page_size,
        };

        let search_field = match search_field {
            Some(key) => key
                .parse::<UserField>()
                .with_context(|| format!("{ENV_PREFIX}SEARCH_FIELD={key}"))?,
            None => defaults.search_field,
        };

        let status_filter = match status_filter {
            Some(list) => list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse::<UserStatus>)
                .collect::<Result<BTreeSet<_>, _>>()
                .with_context(|| format!("{ENV_PREFIX}STATUS_FILTER={list}"))?,
            None => defaults.status_filter,
        };

        let config = Self {
            page_size,
            search_field,
            status_filter,
            page_policy: page_policy.unwrap_or(defaults.page_policy),
            density: density.unwrap_or(defaults.density),
            dark_mode: dark_mode.unwrap_or(defaults.dark_mode),
        };
        log::info!("Table configuration: {config:?}");
        Ok(config)
    }
}
