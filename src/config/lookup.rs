// src/config/lookup.rs

//! Name resolution helpers shared by every reference check.
//!
//! Collections are small and human-authored, so lookups are a plain
//! linear scan with exact, case-sensitive comparison.

use crate::config::model::{
    BackendPool, CustomHttpsConfig, FrontendEndpoint, HealthProbeSettings,
    LoadBalancingSettings,
};

/// A configuration block that other blocks refer to by name.
pub trait Named {
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_named!(
    FrontendEndpoint,
    BackendPool,
    LoadBalancingSettings,
    HealthProbeSettings,
);

/// First item in `items` whose name is exactly `name`.
pub fn find_by_name<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

/// Whether `name` resolves in `items`.
pub fn contains_name<T: Named>(items: &[T], name: &str) -> bool {
    find_by_name(items, name).is_some()
}

/// How many of the key-vault fields must be populated for
/// [`CustomHttpsConfig::has_key_vault_values`] to return `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVaultMatch {
    All,
    Any,
}

impl CustomHttpsConfig {
    /// The three key-vault certificate fields, in declaration order.
    pub fn key_vault_fields(&self) -> [Option<&str>; 3] {
        [
            self.azure_key_vault_certificate_secret_name.as_deref(),
            self.azure_key_vault_certificate_secret_version.as_deref(),
            self.azure_key_vault_certificate_vault_id.as_deref(),
        ]
    }

    /// Whether the key-vault fields are populated.
    ///
    /// Absent and whitespace-only values count as empty.
    pub fn has_key_vault_values(&self, mode: KeyVaultMatch) -> bool {
        let mut populated = self.key_vault_fields().into_iter().map(is_populated);
        match mode {
            KeyVaultMatch::All => populated.all(|p| p),
            KeyVaultMatch::Any => populated.any(|p| p),
        }
    }
}

fn is_populated(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
