use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ClientSettings, ParseClient, ReqwestParseClient};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        content: String,
    },
}

/// Owns a background tokio runtime that runs parse requests. Each submitted
/// request becomes an independent task: overlapping submits are allowed and
/// never cancelled, so completions arrive in whatever order the endpoint
/// produces them.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestParseClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request_id: RequestId, content: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request_id,
            content: content.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ParseClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            content,
        } => {
            let result = client.parse(request_id, &content).await;
            let _ = event_tx.send(EngineEvent::ParseCompleted { request_id, result });
        }
    }
}
