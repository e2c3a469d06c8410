use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// One visitor query waiting to be answered.
#[derive(Debug, Clone)]
pub struct ChatQuery {
    pub id: Uuid,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl ChatQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            received_at: Utc::now(),
        }
    }
}

/// Input channel sender. Front-ends push queries here.
pub type InputSender = mpsc::Sender<ChatQuery>;
/// Input channel receiver. The chat runtime consumes from here.
pub type InputReceiver = mpsc::Receiver<ChatQuery>;

/// Create an input channel with the given buffer size.
pub fn channel(buffer: usize) -> (InputSender, InputReceiver) {
    mpsc::channel(buffer)
}

/// Wrap `text` in a fresh query and send it. Returns the query id so the
/// caller can match the reply.
pub async fn submit_text(
    tx: &InputSender,
    text: impl Into<String>,
) -> Result<Uuid, mpsc::error::SendError<ChatQuery>> {
    let query = ChatQuery::new(text);
    let id = query.id;
    tx.send(query).await?;
    Ok(id)
}
