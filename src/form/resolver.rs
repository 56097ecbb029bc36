use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use crate::config::{ConfigProvider, EnvProvider};
use crate::form::model::{DEFAULT_TITLE, FieldSpec, FormConfig};

/// Full JSON form configuration that replaces the default wholesale.
pub const ENV_APP_CONFIG: &str = "APP_CONFIG";
/// Webhook target used by the default configuration.
pub const ENV_GAS_URL: &str = "GAS_URL";

/// Keys an override may use for the webhook target, in lookup order.
const WEBHOOK_KEYS: [&str; 3] = ["gas_url", "webhook_url", "webhookUrl"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Override,
    Default,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Override => "environment override",
            ConfigSource::Default => "built-in default",
        }
    }
}

/// Snapshot of the active form configuration.
///
/// An override is kept exactly as the operator wrote it so that
/// `GET /api/config` can hand it back untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedConfig {
    Override(Value),
    Default(FormConfig),
}

impl ResolvedConfig {
    pub fn source(&self) -> ConfigSource {
        match self {
            ResolvedConfig::Override(_) => ConfigSource::Override,
            ResolvedConfig::Default(_) => ConfigSource::Default,
        }
    }

    /// Configured webhook target, if any.
    ///
    /// Only an absent or empty value counts as unset. Anything else is taken
    /// as written and fails at the client if it is not a usable URL.
    pub fn webhook_url(&self) -> Option<Cow<'_, str>> {
        match self {
            ResolvedConfig::Default(form) => {
                Some(Cow::Borrowed(form.gas_url.as_str())).filter(|url| !url.is_empty())
            }
            ResolvedConfig::Override(raw) => WEBHOOK_KEYS
                .iter()
                .filter_map(|key| raw.get(*key))
                .find(|value| is_set(value))
                .map(|value| match value {
                    Value::String(url) => Cow::Borrowed(url.as_str()),
                    other => Cow::Owned(other.to_string()),
                }),
        }
    }

    /// Typed view used to render the form.
    ///
    /// Overrides are not validated, so this is lenient: a missing title falls
    /// back to the default one, fields that do not deserialize are skipped and
    /// only the first field with a given id is kept.
    pub fn form(&self) -> FormConfig {
        match self {
            ResolvedConfig::Default(form) => form.clone(),
            ResolvedConfig::Override(raw) => {
                let title = raw
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_TITLE)
                    .to_string();

                let mut seen = HashSet::new();
                let fields: Vec<FieldSpec> = raw
                    .get("fields")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| FieldSpec::deserialize(item).ok())
                            .filter(|field| !field.id.is_empty() && seen.insert(field.id.clone()))
                            .collect()
                    })
                    .unwrap_or_default();

                FormConfig {
                    title,
                    gas_url: self
                        .webhook_url()
                        .map(Cow::into_owned)
                        .unwrap_or_default(),
                    fields,
                }
            }
        }
    }
}

/// `null`, `false`, zero and empty strings or collections leave the webhook unset.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Works out the active form configuration from the environment.
///
/// Nothing is cached; every call reads the provider again.
#[derive(Clone)]
pub struct ConfigResolver {
    provider: Arc<dyn ConfigProvider>,
}

impl ConfigResolver {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvProvider))
    }

    pub fn resolve(&self) -> ResolvedConfig {
        if let Some(blob) = self.provider.var(ENV_APP_CONFIG).filter(|b| !b.is_empty()) {
            match serde_json::from_str::<Value>(&blob) {
                Ok(raw) => return ResolvedConfig::Override(raw),
                Err(error) => warn!(
                    %error,
                    "{} is not valid JSON, using the default form configuration", ENV_APP_CONFIG
                ),
            }
        }

        let gas_url = self.provider.var(ENV_GAS_URL).unwrap_or_default();
        ResolvedConfig::Default(FormConfig::default_with_url(gas_url))
    }
}
