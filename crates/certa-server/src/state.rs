use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use aws_sdk_bedrockruntime::Client as BedrockClient;
use certa_audit::desk::ReviewDesk;
use certa_audit::persistence::TrailPersistence;
use certa_audit::session::AuditSession;
use certa_catalog::Catalog;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::CertaConfig;

/// Bedrock model used for document analysis.
#[derive(Clone)]
pub struct BedrockTarget {
    pub client: BedrockClient,
    pub model_id: String,
    pub timeout: Duration,
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub desk: Arc<Mutex<ReviewDesk>>,
    pub bedrock: Option<BedrockTarget>,
    pub analysis: AnalysisSlot,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, desk: ReviewDesk, bedrock: Option<BedrockTarget>) -> Self {
        Self {
            catalog,
            desk: Arc::new(Mutex::new(desk)),
            bedrock,
            analysis: AnalysisSlot::default(),
        }
    }

    /// Build the catalog, trail persistence and AWS clients from config.
    pub async fn from_config(config: &CertaConfig) -> eyre::Result<Self> {
        let catalog = Arc::new(load_catalog(config.catalog_path.as_deref()));

        let trail_path = config.data_dir()?.join("trail.json");
        let mut persistence = TrailPersistence::local(&trail_path);
        if let Some(s3) = &config.s3 {
            let client = certa_storage::client::build_client(s3.region.as_deref()).await;
            persistence = persistence.with_s3(client, &s3.bucket, &s3.key);
            tracing::info!(bucket = %s3.bucket, key = %s3.key, "trail mirrored to S3");
        }

        let bedrock = match &config.bedrock {
            Some(b) => {
                let client = certa_bedrock::client::build_client(b.region.as_deref()).await;
                tracing::info!(
                    model = %b.model_id,
                    timeout_secs = config.analysis_timeout_secs,
                    "document analysis enabled"
                );
                Some(BedrockTarget {
                    client,
                    model_id: b.model_id.clone(),
                    timeout: config.analysis_timeout(),
                })
            }
            None => {
                tracing::warn!("no bedrock model configured, document analysis disabled");
                None
            }
        };

        let session = AuditSession::new(catalog.clone()).with_auto_apply(config.auto_apply_suggestions);
        let desk = ReviewDesk::open(session, persistence).await;
        tracing::info!(path = %trail_path.display(), "review desk open");

        Ok(Self::new(catalog, desk, bedrock))
    }
}

/// Load a catalog file, falling back to the built-in catalog when the file
/// is missing or invalid.
pub fn load_catalog(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        return builtin_catalog();
    };
    let loaded = std::fs::read(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| Catalog::from_json(&bytes).map_err(|e| e.to_string()));
    match loaded {
        Ok(catalog) => {
            tracing::info!(
                path = %path.display(),
                version = %catalog.version,
                diseases = catalog.len(),
                "catalog loaded"
            );
            catalog
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "catalog file rejected, using built-in catalog");
            builtin_catalog()
        }
    }
}

fn builtin_catalog() -> Catalog {
    let catalog = Catalog::jiangxi().clone();
    for issue in catalog.validate() {
        tracing::warn!(%issue, "built-in catalog issue");
    }
    catalog
}

/// The one in-flight analysis task, if any.
#[derive(Clone, Default)]
pub struct AnalysisSlot {
    handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AnalysisSlot {
    /// Track a new task, aborting the one it replaces.
    pub async fn replace(&self, handle: JoinHandle<()>) {
        if let Some(previous) = self.handle.lock().await.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the running task. Its result would be discarded anyway.
    pub async fn cancel(&self) {
        if let Some(previous) = self.handle.lock().await.take() {
            previous.abort();
        }
    }
}
