use std::collections::HashMap;

/// Source of configuration values keyed by environment variable name.
///
/// The service only ever reads through this trait so tests can hand in fixed
/// values instead of mutating the real process environment.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of values, mostly useful in tests and local tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    vars: HashMap<String, String>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for StaticProvider {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticProvider
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
