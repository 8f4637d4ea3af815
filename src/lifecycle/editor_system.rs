use crate::api::OrderApi;
use crate::clients::EditorClient;
use crate::editor_actor::EditorContext;
use crate::lifecycle::EditorConfig;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

/// The runtime orchestrator for the order editor.
///
/// `EditorSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the session actor
/// - **Dependency Wiring**: injecting the order service, the config and the
///   optional refresh signal into every session
///
/// # Example
///
/// ```ignore
/// let api = Arc::new(InMemoryOrderApi::new(catalog));
/// let (system, mut refresh) = EditorSystem::with_refresh(api, EditorConfig::default());
///
/// let session = system.editor_client.open(order).await?;
/// system.editor_client.search(session, "tea").await?;
/// system.editor_client.select_suggestion(session, 0).await?;
/// system.editor_client.add_selected(session).await?;
/// system.editor_client.submit(session).await?;
/// refresh.changed().await?;
///
/// system.shutdown().await?;
/// ```
pub struct EditorSystem {
    /// Client for driving edit sessions
    pub editor_client: EditorClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl EditorSystem {
    /// Starts the session actor with no refresh signal.
    pub fn new(api: Arc<dyn OrderApi>, config: EditorConfig) -> Self {
        Self::start(api, config, None)
    }

    /// Starts the session actor and returns a receiver whose value flips after
    /// every confirmed order update.
    pub fn with_refresh(api: Arc<dyn OrderApi>, config: EditorConfig) -> (Self, watch::Receiver<bool>) {
        let (refresh, receiver) = watch::channel(false);
        (Self::start(api, config, Some(refresh)), receiver)
    }

    fn start(api: Arc<dyn OrderApi>, config: EditorConfig, refresh: Option<watch::Sender<bool>>) -> Self {
        let (editor_actor, editor_client) = crate::editor_actor::new(config.channel_capacity, api.clone());

        let context = EditorContext {
            api,
            config,
            refresh,
        };
        let editor_handle = tokio::spawn(editor_actor.run(context));

        Self {
            editor_client,
            handles: vec![editor_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the request channel; the actor drains what is
    /// queued and exits. Clones of the client handed out earlier keep the
    /// channel open, so they must be dropped first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.editor_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
