//! # Database Configuration
//!
//! Connection settings read from `conf/db.properties`:
//!
//! ```text
//! db.prefix=mongodb+srv://
//! db.user=app
//! db.pwd=secret
//! db.dbUrl=@cluster0.example.mongodb.net/
//! db.params=?retryWrites=true&w=majority
//! db.name=school
//! ```
//!
//! The connection string is `prefix + user + ":" + pwd + dbUrl + params`,
//! with the credentials percent-encoded.

use std::fmt;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::{ConfigError, ConfigResult};
use super::properties::Properties;

/// Characters `encodeURIComponent` leaves alone, removed from the escape set
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Database connection settings
#[derive(Clone, Deserialize)]
pub struct DbConfig {
    /// Scheme prefix, e.g. `mongodb+srv://`
    #[serde(rename = "db.prefix")]
    pub prefix: String,

    #[serde(rename = "db.user", default)]
    pub user: Option<String>,

    #[serde(rename = "db.pwd", default)]
    pub password: Option<String>,

    /// Host part, starting with `@` when credentials are present
    #[serde(rename = "db.dbUrl")]
    pub url: String,

    /// Query string appended verbatim
    #[serde(rename = "db.params", default)]
    pub params: String,

    /// Database holding the collections
    #[serde(rename = "db.name")]
    pub name: String,
}

impl DbConfig {
    /// Load from a properties file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        Self::from_properties(&Properties::load(path)?)
    }

    /// Build from parsed properties. Unknown keys are ignored.
    pub fn from_properties(props: &Properties) -> ConfigResult<Self> {
        let map: Map<String, Value> = props
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();

        let config: DbConfig = serde_json::from_value(Value::Object(map))
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        for (key, value) in [
            ("db.prefix", &self.prefix),
            ("db.dbUrl", &self.url),
            ("db.name", &self.name),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Ready-to-use connection string
    pub fn connection_uri(&self) -> String {
        self.build_uri(false)
    }

    /// Connection string with the password masked, safe to log
    pub fn redacted_uri(&self) -> String {
        self.build_uri(true)
    }

    fn build_uri(&self, redact: bool) -> String {
        let mut uri = self.prefix.clone();

        if self.user.is_some() || self.password.is_some() {
            let user = self.user.as_deref().unwrap_or_default();
            uri.push_str(&utf8_percent_encode(user, COMPONENT).to_string());
            uri.push(':');
            match (&self.password, redact) {
                (Some(_), true) => uri.push_str("****"),
                (Some(pwd), false) => uri.push_str(&utf8_percent_encode(pwd, COMPONENT).to_string()),
                (None, _) => {}
            }
        }

        uri.push_str(&self.url);
        uri.push_str(&self.params);
        uri
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("prefix", &self.prefix)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .field("url", &self.url)
            .field("params", &self.params)
            .field("name", &self.name)
            .finish()
    }
}
