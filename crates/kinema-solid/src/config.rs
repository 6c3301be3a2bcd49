// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Kernel configuration and its storage port.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kinema_math::{codec::DEFAULT_PRECISION, Scalar, TextCodec};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::ConfigError;
use crate::integrator::Integrator;

/// Key under which [`ConfigService::load_kernel`] stores the kernel config.
pub const KERNEL_CONFIG_KEY: &str = "kernel";

// Beyond this `f64` formatting only appends zeros.
const MAX_PRECISION: usize = 40;

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Process-local store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| ConfigError::Other("config store lock poisoned".into()))?;
        blobs.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| ConfigError::Other("config store lock poisoned".into()))?;
        blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

/// Store configs as `<key>.json` files under a base directory.
#[derive(Debug)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at `base`, creating the directory if needed.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

/// Stepping and persistence settings.
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Step size in seconds.
    pub time_step: f64,
    /// Update ordering used by [`crate::Solid::step`].
    pub integrator: Integrator,
    /// Mantissa digits written by the text codec.
    pub codec_precision: usize,
}

impl KernelConfig {
    /// Step size converted to the simulation scalar.
    pub fn dt<S: Scalar>(&self) -> S {
        S::from_f64(self.time_step)
    }

    /// Text codec with the configured precision.
    pub fn codec(&self) -> TextCodec {
        TextCodec::with_precision(self.codec_precision)
    }

    /// Rejects non-positive or non-finite steps and absurd precisions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }
        if self.codec_precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "codec_precision must be at most {MAX_PRECISION}, got {}",
                self.codec_precision
            )));
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0e-4,
            integrator: Integrator::default(),
            codec_precision: DEFAULT_PRECISION,
        }
    }
}

/// Thin service that serializes config values and delegates storage to a `ConfigStore`.
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// The stored kernel config, or the defaults when none is stored.
    pub fn load_kernel(&self) -> Result<KernelConfig, ConfigError> {
        let config = self
            .load::<KernelConfig>(KERNEL_CONFIG_KEY)?
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Validates and persists `config`.
    pub fn save_kernel(&self, config: &KernelConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.save(KERNEL_CONFIG_KEY, config)
    }
}
