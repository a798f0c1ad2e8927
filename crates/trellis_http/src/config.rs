//! I define the recognized configuration of the access control
//! boundary, and its loading from files and the environment.
//!

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use trellis_space::resource::uri::{InvalidResourceUri, ResourceUri};

use crate::challenge::Challenge;

/// Configuration of the access control boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessControlConfig {
    /// Authentication challenge configuration.
    pub auth: AuthConfig,

    /// Web access control configuration.
    pub webac: WebAcConfig,

    /// Data namespace configuration.
    pub data: DataConfig,
}

/// Authentication challenge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Scheme names of the `WWW-Authenticate` challenges emitted
    /// on `401 Unauthorized` responses.
    pub challenges: Vec<String>,

    /// Realm string embedded in challenges.
    pub realm: String,

    /// Optional scope string embedded in challenges.
    pub scope: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            challenges: Vec::new(),
            realm: "trellis".to_owned(),
            scope: None,
        }
    }
}

/// Web access control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebAcConfig {
    /// Extra http methods that map to the read mode.
    pub readable_methods: Vec<String>,

    /// Extra http methods that map to the write mode.
    pub writable_methods: Vec<String>,

    /// Extra http methods that map to the append mode.
    pub appendable_methods: Vec<String>,

    /// Maximum number of authorization cache entries. Zero
    /// disables caching.
    pub cache_size: u64,

    /// Time in seconds for which a cache entry stays fresh.
    pub cache_expire_seconds: u64,

    /// Whether write access to containers may be co-governed by
    /// the acl of their membership resource.
    pub membership_check: bool,
}

impl Default for WebAcConfig {
    fn default() -> Self {
        Self {
            readable_methods: Vec::new(),
            writable_methods: Vec::new(),
            appendable_methods: Vec::new(),
            cache_size: 1000,
            cache_expire_seconds: 10,
            membership_check: true,
        }
    }
}

/// Data namespace configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Iri prefix prepended to request paths to form target
    /// uris. Doubles as the uri of the storage root resource.
    pub prefix: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            prefix: "trellis:data/".to_owned(),
        }
    }
}

impl AccessControlConfig {
    /// Load the configuration from given optional toml file,
    /// overlaid with `TRELLIS`-prefixed environment variables.
    pub fn load(file_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file_path) = file_path {
            builder = builder.add_source(File::from(file_path));
        }

        builder
            .add_source(Environment::with_prefix("TRELLIS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Get the uri of the storage root resource.
    pub fn root_uri(&self) -> Result<ResourceUri, InvalidResourceUri> {
        ResourceUri::try_new_from(&self.data.prefix)
    }

    /// Get the configured authentication challenges.
    pub fn challenges(&self) -> Vec<Challenge> {
        self.auth
            .challenges
            .iter()
            .map(|scheme| Challenge {
                scheme: scheme.clone(),
                realm: self.auth.realm.clone(),
                scope: self.auth.scope.clone(),
            })
            .collect()
    }
}
