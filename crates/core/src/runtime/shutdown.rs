use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Owns the session's cancellation token and cancels it on SIGTERM or Ctrl+C.
#[derive(Debug, Default)]
pub struct ShutdownGuard {
    token: CancellationToken,
}

impl ShutdownGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Spawn a task that cancels the token on the first termination signal.
    /// The task exits quietly if the token is cancelled some other way.
    pub fn spawn_signal_listener(&self) {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                signal = wait_for_signal() => {
                    tracing::info!(signal, "termination signal received");
                },
            }
            token.cancel();
        });
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> &'static str {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = sigterm.recv() => "SIGTERM",
                _ = signal::ctrl_c() => "SIGINT",
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to register SIGTERM handler");
            let _ = signal::ctrl_c().await;
            "SIGINT"
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> &'static str {
    let _ = signal::ctrl_c().await;
    "Ctrl+C"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_share_cancellation() {
        let guard = ShutdownGuard::new();
        let a = guard.token();
        let b = guard.token();
        guard.cancel();
        assert!(a.is_cancelled());
        assert!(b.is_cancelled());
    }

    #[tokio::test]
    async fn listener_exits_after_manual_cancel() {
        let guard = ShutdownGuard::new();
        guard.spawn_signal_listener();
        guard.cancel();
        guard.token().cancelled().await;
    }
}
