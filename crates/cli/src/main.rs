mod commands;
mod event;
mod plain;
mod tui;
mod widgets;

use knsoft_core::config::ChatbotCfg;
use knsoft_core::runtime::ChatRuntime;
use knsoft_core::Chatbot;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const WELCOME: &str = "Welcome to KNSOFT Technologies! Ask about our services, offices, \
technology or careers. Commands: /jobs, /job <slug>, /quit";

const DB_CONNECT_TIMEOUT_SECS: u64 = 3;
const LOG_PATH: &str = "/tmp/knsoft-chat.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let plain_mode = std::env::args().skip(1).any(|a| a == "--plain");

    if !plain_mode {
        // restore the terminal even when a panic unwinds out of raw mode
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
            default_hook(info);
        }));
    }

    // raw mode garbles stderr, so logs only go to a file and only on request
    if std::env::var("RUST_LOG").is_ok() {
        let file = std::fs::File::create(LOG_PATH)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_target(true).with_writer(file))
            .init();
    }

    let (pool, startup_notice) = connect_database().await;

    let cfg = match &pool {
        Some(pool) => ChatbotCfg::load(pool).await?,
        None => ChatbotCfg::default(),
    };

    let chatbot = Chatbot::new(&cfg);
    let (mut runtime, query_tx, reply_rx, status_rx) = ChatRuntime::new(&cfg, chatbot);
    let token = runtime.token();

    // Both futures share this task. Whichever finishes first cancels the
    // other, and the other is then driven to completion for cleanup.
    let runtime_fut = runtime.run();
    let front_fut = async {
        if plain_mode {
            plain::run_repl(query_tx, reply_rx, pool, token.clone(), startup_notice).await
        } else {
            tui::run_app(query_tx, reply_rx, status_rx, pool, token.clone(), startup_notice).await
        }
    };
    tokio::pin!(runtime_fut);
    tokio::pin!(front_fut);

    tokio::select! {
        _ = &mut runtime_fut => {
            token.cancel();
            (&mut front_fut).await
        }
        result = &mut front_fut => {
            token.cancel();
            (&mut runtime_fut).await;
            result
        }
    }
}

/// Optional Postgres for config and job listings. Any failure degrades to
/// defaults with a notice instead of aborting.
async fn connect_database() -> (Option<sqlx::PgPool>, Option<String>) {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        tracing::info!("DATABASE_URL not set, using default config without job listings");
        return (None, None);
    };

    let connect = tokio::time::timeout(
        std::time::Duration::from_secs(DB_CONNECT_TIMEOUT_SECS),
        sqlx::postgres::PgPoolOptions::new()
            .max_connections(4)
            .connect(&url),
    )
    .await;

    let reason = match connect {
        Ok(Ok(pool)) => match sqlx::migrate!("../../migrations").run(&pool).await {
            Ok(()) => {
                tracing::info!("database connected and migrations applied");
                return (Some(pool), None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "database migration failed");
                "database migration failed".to_owned()
            }
        },
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "failed to connect DATABASE_URL");
            "could not connect to DATABASE_URL".to_owned()
        }
        Err(_) => {
            tracing::warn!(timeout_secs = DB_CONNECT_TIMEOUT_SECS, "database connect timed out");
            format!("database connection timed out after {DB_CONNECT_TIMEOUT_SECS}s")
        }
    };
    let notice = format!("Note: {reason}. Using default settings; job listings are unavailable.");
    (None, Some(notice))
}
