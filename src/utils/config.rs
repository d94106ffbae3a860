/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Environment lookups used by [`crate::application::config::Config`]
//!
//! Values are trimmed and blank values count as unset, so an empty
//! `LIFELINE_PASSWORD=` line in a `.env` file behaves like a missing one.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses `name` from the environment, falling back to `default`
///
/// A value that fails to parse is logged and replaced by `default`.
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Some(raw) = read_var(name) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring {}={:?}: {:?}", name, raw, e);
            default
        }
    }
}

/// Parses `name` from the environment; `None` when unset, blank or invalid
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_var(name).and_then(|raw| raw.parse::<T>().ok())
}

/// Strips surrounding whitespace and every trailing `/` from a base URL
#[must_use]
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Base URL from `name`, normalized with [`normalize_base_url`]
pub fn get_env_url_or_default(name: &str, default: &str) -> String {
    normalize_base_url(read_var(name).as_deref().unwrap_or(default))
}
