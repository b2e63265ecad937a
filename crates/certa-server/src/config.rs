use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 120;

const APP_DIR: &str = "com.certa.server";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Where the audit trail lives. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Catalog JSON to use instead of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub auto_apply_suggestions: bool,
    /// A document analysis still running after this long fails as unavailable.
    #[serde(default = "default_analysis_timeout_secs")]
    pub analysis_timeout_secs: u64,
    /// Document analysis is disabled without a model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrock: Option<BedrockConfig>,
    /// Mirror the audit trail to S3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Config>,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedrockConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub model_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub bucket: String,
    #[serde(default = "default_trail_key")]
    pub key: String,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_analysis_timeout_secs() -> u64 {
    DEFAULT_ANALYSIS_TIMEOUT_SECS
}

fn default_trail_key() -> String {
    certa_core::s3_keys::AUDIT_TRAIL.to_string()
}

impl Default for CertaConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            listen_addr: default_listen_addr(),
            data_dir: None,
            catalog_path: None,
            auto_apply_suggestions: false,
            analysis_timeout_secs: DEFAULT_ANALYSIS_TIMEOUT_SECS,
            bedrock: None,
            s3: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl CertaConfig {
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs.max(1))
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join(APP_DIR))
            }
        }
    }

    /// Apply `CERTA_*` environment overrides on top of the file values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(addr) = lookup("CERTA_LISTEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Some(dir) = lookup("CERTA_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(model_id) = lookup("CERTA_BEDROCK_MODEL") {
            match &mut self.bedrock {
                Some(bedrock) => bedrock.model_id = model_id,
                None => {
                    self.bedrock = Some(BedrockConfig {
                        region: None,
                        model_id,
                    })
                }
            }
        }
        if let Some(secs) = lookup("CERTA_ANALYSIS_TIMEOUT_SECS") {
            match secs.trim().parse() {
                Ok(secs) => self.analysis_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %secs, "CERTA_ANALYSIS_TIMEOUT_SECS is not a number, ignored"),
            }
        }
        if let Some(region) = lookup("CERTA_BEDROCK_REGION") {
            match &mut self.bedrock {
                Some(bedrock) => bedrock.region = Some(region),
                None => tracing::warn!("CERTA_BEDROCK_REGION set without a model, ignored"),
            }
        }
        if let Some(bucket) = lookup("CERTA_S3_BUCKET") {
            match &mut self.s3 {
                Some(s3) => s3.bucket = bucket,
                None => {
                    self.s3 = Some(S3Config {
                        region: None,
                        bucket,
                        key: default_trail_key(),
                    })
                }
            }
        }
    }
}

/// `CERTA_CONFIG`, or `config.json` in the platform config directory.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var("CERTA_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

/// Load the config at `path`. A missing file yields defaults.
pub fn load_config(path: &Path) -> eyre::Result<CertaConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(CertaConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CertaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Certa."
        ));
    }

    // v0 → v1: flat bedrock_model_id / bedrock_region / trail_bucket become
    // the nested `bedrock` and `s3` sections.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let region = obj.remove("bedrock_region");
        if let Some(model_id) = obj.remove("bedrock_model_id") {
            let mut bedrock = serde_json::Map::new();
            bedrock.insert("model_id".to_string(), model_id);
            if let Some(region) = region {
                bedrock.insert("region".to_string(), region);
            }
            obj.entry("bedrock")
                .or_insert(serde_json::Value::Object(bedrock));
        }

        if let Some(bucket) = obj.remove("trail_bucket") {
            let mut s3 = serde_json::Map::new();
            s3.insert("bucket".to_string(), bucket);
            obj.entry("s3").or_insert(serde_json::Value::Object(s3));
        }

        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested bedrock and s3 sections)");
    }

    Ok(json)
}

/// Write the config atomically (tmp + rename), readable only by the owner.
pub fn save_config(path: &Path, config: &CertaConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
