use tokio::sync::mpsc;
use uuid::Uuid;

use crate::types::Intent;

/// A finished reply to deliver to the visitor.
#[derive(Debug, Clone)]
pub struct OutputMessage {
    pub content: String,
    /// Id of the query this answers.
    pub query_id: Uuid,
    pub intent: Option<Intent>,
}

impl OutputMessage {
    pub fn reply(query_id: Uuid, content: impl Into<String>, intent: Option<Intent>) -> Self {
        Self {
            content: content.into(),
            query_id,
            intent,
        }
    }
}

/// Output channel sender. The chat runtime pushes replies here.
pub type OutputSender = mpsc::Sender<OutputMessage>;
/// Output channel receiver. Front-ends consume from here.
pub type OutputReceiver = mpsc::Receiver<OutputMessage>;

/// Create an output channel with the given buffer size.
pub fn channel(buffer: usize) -> (OutputSender, OutputReceiver) {
    mpsc::channel(buffer)
}
