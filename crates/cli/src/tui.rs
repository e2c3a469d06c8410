use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sqlx::PgPool;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use knsoft_core::io::input::{self, InputSender};
use knsoft_core::io::output::OutputReceiver;
use knsoft_core::runtime::BotStatus;

use crate::commands::{self, Command};
use crate::event::AppEvent;
use crate::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Visitor,
    Bot,
    Notice,
}

pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// TUI application state.
pub struct App {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Byte offset into `input`.
    pub cursor: usize,
    pub scroll_offset: u16,
    /// Queries sent but not yet answered.
    pub pending: usize,
    pub anim_frame: usize,
    pub status: BotStatus,
    pub should_exit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor: 0,
            scroll_offset: 0,
            pending: 0,
            anim_frame: 0,
            status: BotStatus::default(),
            should_exit: false,
        }
    }

    pub fn thinking(&self) -> bool {
        self.pending > 0
    }

    fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
        self.scroll_offset = 0;
    }

    /// Take the input line, echo it, and return what it asks for.
    fn take_input(&mut self) -> Option<Command> {
        let cmd = commands::parse(&self.input)?;
        let echoed = self.input.trim().to_owned();
        self.input.clear();
        self.cursor = 0;
        self.push(Role::Visitor, echoed);
        Some(cmd)
    }

    fn insert_str(&mut self, s: &str) {
        // pasted newlines would submit mid-paste in a single-line editor
        let s = s.replace(['\r', '\n'], " ");
        self.input.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.input[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.input.len())
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.input.drain(prev..self.cursor);
        self.cursor = prev;
    }
}

/// Run the chat TUI until the visitor quits or `token` is cancelled.
pub async fn run_app(
    query_tx: InputSender,
    mut reply_rx: OutputReceiver,
    mut status_rx: watch::Receiver<BotStatus>,
    pool: Option<PgPool>,
    token: CancellationToken,
    startup_notice: Option<String>,
) -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let stop = Arc::new(AtomicBool::new(false));
    let mut event_rx = crate::event::spawn(stop.clone());

    let mut app = App::new();
    app.push(Role::Notice, crate::WELCOME);
    if let Some(notice) = startup_notice {
        app.push(Role::Notice, notice);
    }
    let mut anim_interval = tokio::time::interval(std::time::Duration::from_millis(80));
    anim_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    terminal.draw(|f| widgets::draw(f, &app))?;

    while !app.should_exit {
        tokio::select! {
            _ = token.cancelled() => break,
            evt = event_rx.recv() => {
                let Some(evt) = evt else { break };
                match evt {
                    AppEvent::Key(key) => {
                        if let Some(cmd) = handle_key(&mut app, key) {
                            run_command(&mut app, cmd, &query_tx, pool.as_ref()).await;
                        }
                    }
                    AppEvent::Paste(text) => app.insert_str(&text),
                    AppEvent::Resize => {}
                }
            }
            msg = reply_rx.recv() => {
                let Some(msg) = msg else { break };
                app.pending = app.pending.saturating_sub(1);
                app.push(Role::Bot, msg.content);
            }
            Ok(()) = status_rx.changed() => {
                app.status = *status_rx.borrow_and_update();
            }
            _ = anim_interval.tick(), if app.thinking() => {
                app.anim_frame = app.anim_frame.wrapping_add(1);
            }
        }
        terminal.draw(|f| widgets::draw(f, &app))?;
    }

    stop.store(true, Ordering::Relaxed);
    terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

async fn run_command(app: &mut App, cmd: Command, query_tx: &InputSender, pool: Option<&PgPool>) {
    match cmd {
        Command::Quit => app.should_exit = true,
        Command::Jobs => {
            let text = commands::list_jobs(pool).await;
            app.push(Role::Bot, text);
        }
        Command::Job(slug) => {
            let text = commands::show_job(pool, &slug).await;
            app.push(Role::Bot, text);
        }
        Command::Ask(text) => {
            if input::submit_text(query_tx, text).await.is_ok() {
                app.pending += 1;
            } else {
                app.push(Role::Notice, "The assistant has stopped. Press Ctrl+C to leave.");
            }
        }
    }
}

/// Edit the input line. Returns a command when Enter submits one.
fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> Option<Command> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_exit = true,
        (_, KeyCode::Enter) => return app.take_input(),
        (_, KeyCode::Backspace) => app.backspace(),
        (_, KeyCode::Left) => app.cursor = app.prev_boundary(),
        (_, KeyCode::Right) => app.cursor = app.next_boundary(),
        (_, KeyCode::Up) => app.scroll_offset = app.scroll_offset.saturating_add(1),
        (_, KeyCode::Down) => app.scroll_offset = app.scroll_offset.saturating_sub(1),
        (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::End) => app.cursor = app.input.len(),
        (_, KeyCode::Char(c)) => {
            let mut buf = [0u8; 4];
            app.insert_str(c.encode_utf8(&mut buf));
        }
        _ => {}
    }
    None
}
