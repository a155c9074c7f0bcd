use std::future::Future;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tubegrab_logging::{grab_info, grab_warn};

use crate::service::{ArtifactService, MetadataService, ReqwestServiceClient};
use crate::{
    ArtifactQuery, EngineEvent, FailureKind, RequestSeq, ServiceError, ServiceSettings,
};

enum EngineCommand {
    Resolve { seq: RequestSeq, locator: String },
    Retrieve { seq: RequestSeq, query: ArtifactQuery },
}

struct Services {
    metadata: Arc<dyn MetadataService>,
    artifact: Arc<dyn ArtifactService>,
    deadline: Duration,
}

/// Runs service calls on a background tokio runtime.
///
/// Every command yields exactly one completion event, success or failure,
/// so callers never wait on a request that silently vanished. Commands run
/// concurrently; ordering of completions is not guaranteed.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Engine backed by the HTTP services named in `settings`.
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        let client = Arc::new(ReqwestServiceClient::new(settings)?);
        Self::new(client.clone(), client, settings.response_deadline)
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))
    }

    pub fn new(
        metadata: Arc<dyn MetadataService>,
        artifact: Arc<dyn ArtifactService>,
        deadline: Duration,
    ) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let services = Arc::new(Services {
            metadata,
            artifact,
            deadline,
        });

        thread::Builder::new()
            .name("tubegrab-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let services = services.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event = handle_command(&services, command).await;
                        let _ = event_tx.send(event);
                    });
                }
                // Let in-flight calls finish reporting before the runtime goes away.
                runtime.shutdown_timeout(Duration::from_secs(1));
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn resolve(&self, seq: RequestSeq, locator: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Resolve {
            seq,
            locator: locator.into(),
        });
    }

    pub fn retrieve(&self, seq: RequestSeq, query: ArtifactQuery) {
        let _ = self.cmd_tx.send(EngineCommand::Retrieve { seq, query });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(services: &Services, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Resolve { seq, locator } => {
            let result =
                with_deadline(services.deadline, services.metadata.resolve(&locator)).await;
            match &result {
                Ok(info) => grab_info!("Resolve #{} ok: id={}", seq, info.video_id),
                Err(err) => grab_warn!("Resolve #{} failed: {}", seq, err),
            }
            EngineEvent::ResolveCompleted { seq, result }
        }
        EngineCommand::Retrieve { seq, query } => {
            let result =
                with_deadline(services.deadline, services.artifact.retrieve(&query)).await;
            match &result {
                Ok(ticket) => grab_info!("Retrieve #{} ok: size={}", seq, ticket.file_size),
                Err(err) => grab_warn!("Retrieve #{} failed: {}", seq, err),
            }
            EngineEvent::RetrieveCompleted { seq, result }
        }
    }
}

async fn with_deadline<T>(
    deadline: Duration,
    call: impl Future<Output = Result<T, ServiceError>>,
) -> Result<T, ServiceError> {
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => Err(ServiceError::new(
            FailureKind::Timeout,
            format!("no response within {}ms", deadline.as_millis()),
        )),
    }
}
