use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::shutdown::ShutdownGuard;
use crate::chatbot::Chatbot;
use crate::config::ChatbotCfg;
use crate::io::input::{self, ChatQuery, InputReceiver, InputSender};
use crate::io::output::{self, OutputMessage, OutputReceiver, OutputSender};
use crate::types::BotStatus;

/// Drives one chat session: queries in, replies out, status broadcast.
pub struct ChatRuntime {
    chatbot: Chatbot,
    shutdown: ShutdownGuard,
    input_rx: InputReceiver,
    output_tx: OutputSender,
    status: BotStatus,
    /// Snapshot after every reply, for the status bar.
    status_tx: watch::Sender<BotStatus>,
}

impl ChatRuntime {
    /// Returns (runtime, query sender, reply receiver, status receiver).
    pub fn new(
        cfg: &ChatbotCfg,
        chatbot: Chatbot,
    ) -> (Self, InputSender, OutputReceiver, watch::Receiver<BotStatus>) {
        let (input_tx, input_rx) = input::channel(cfg.input_buffer);
        let (output_tx, output_rx) = output::channel(cfg.output_buffer);
        let (status_tx, status_rx) = watch::channel(BotStatus::default());
        let runtime = Self {
            chatbot,
            shutdown: ShutdownGuard::new(),
            input_rx,
            output_tx,
            status: BotStatus::default(),
            status_tx,
        };
        (runtime, input_tx, output_rx, status_rx)
    }

    /// Answer queries until cancelled, the input side closes, or the
    /// output side is dropped.
    pub async fn run(&mut self) {
        self.shutdown.spawn_signal_listener();
        let token = self.shutdown.token();

        tracing::info!(sections = self.chatbot.knowledge().len(), "chat runtime started");

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!(answered = self.status.answered, "shutdown signal received, exiting chat loop");
                    break;
                },
                query = self.input_rx.recv() => {
                    let Some(query) = query else {
                        tracing::info!("input channel closed");
                        break;
                    };
                    if !self.answer(query).await {
                        break;
                    }
                },
            }
        }

        tracing::info!(
            answered = self.status.answered,
            fallbacks = self.status.fallbacks,
            "chat runtime stopped"
        );
    }

    /// Returns the cancellation token for stopping the loop from outside.
    pub fn token(&self) -> CancellationToken {
        self.shutdown.token()
    }

    pub fn status(&self) -> BotStatus {
        self.status
    }

    /// Returns false once nobody is listening for replies.
    async fn answer(&mut self, query: ChatQuery) -> bool {
        let reply = {
            let _span = tracing::debug_span!("query", id = %query.id).entered();
            self.chatbot.reply(&query.text)
        };

        self.status.answered += 1;
        if reply.fell_back {
            self.status.fallbacks += 1;
        }
        self.status.last_intent = reply.intent;
        self.status.last_matches = reply.matches;
        // only fails when every receiver is gone
        let _ = self.status_tx.send(self.status);

        let msg = OutputMessage::reply(query.id, reply.text, reply.intent);
        if self.output_tx.send(msg).await.is_err() {
            tracing::warn!("output receiver dropped, stopping chat loop");
            return false;
        }
        true
    }
}
