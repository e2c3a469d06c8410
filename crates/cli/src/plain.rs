//! Line-mode front-end for terminals without TUI support (`--plain`).

use std::io::{self, Write};
use std::time::Duration;

use rustyline::error::ReadlineError;
use sqlx::PgPool;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use knsoft_core::io::input::{self, InputSender};
use knsoft_core::io::output::OutputReceiver;

use crate::commands::{self, Command};

const SPINNER: [&str; 4] = ["-", "\\", "|", "/"];

enum LineEvent {
    Line(String),
    Interrupted,
    Eof,
    Error(String),
}

pub async fn run_repl(
    query_tx: InputSender,
    mut reply_rx: OutputReceiver,
    pool: Option<PgPool>,
    token: CancellationToken,
    startup_notice: Option<String>,
) -> anyhow::Result<()> {
    println!("{}", crate::WELCOME);
    if let Some(notice) = startup_notice {
        println!("{notice}");
    }

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<LineEvent>();
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<()>();
    spawn_readline_thread(line_tx, ready_rx);
    let _ = ready_tx.send(());

    let mut waiting = false;
    let mut frame = 0usize;
    let mut spinner = tokio::time::interval(Duration::from_millis(100));
    spinner.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = spinner.tick(), if waiting => {
                frame = (frame + 1) % SPINNER.len();
                print!("\rtyping... {}", SPINNER[frame]);
                io::stdout().flush()?;
            }
            event = line_rx.recv() => {
                let Some(event) = event else { break };
                let line = match event {
                    LineEvent::Line(line) => line,
                    LineEvent::Interrupted | LineEvent::Eof => break,
                    LineEvent::Error(err) => {
                        eprintln!("input error: {err}");
                        break;
                    }
                };
                match commands::parse(&line) {
                    None => {
                        let _ = ready_tx.send(());
                    }
                    Some(Command::Quit) => break,
                    Some(Command::Jobs) => {
                        println!("{}\n", commands::list_jobs(pool.as_ref()).await);
                        let _ = ready_tx.send(());
                    }
                    Some(Command::Job(slug)) => {
                        println!("{}\n", commands::show_job(pool.as_ref(), &slug).await);
                        let _ = ready_tx.send(());
                    }
                    Some(Command::Ask(text)) => {
                        if input::submit_text(&query_tx, text).await.is_err() {
                            break;
                        }
                        waiting = true;
                    }
                }
            }
            msg = reply_rx.recv() => {
                let Some(msg) = msg else { break };
                if waiting {
                    waiting = false;
                    clear_line()?;
                }
                println!("KNSOFT> {}\n", msg.content);
                let _ = ready_tx.send(());
            }
        }
    }
    drop(ready_tx);

    if waiting {
        clear_line()?;
    }
    println!();
    Ok(())
}

fn clear_line() -> anyhow::Result<()> {
    print!("\r\x1b[2K");
    io::stdout().flush()?;
    Ok(())
}

/// rustyline blocks, so it lives on its own thread and only prompts after
/// the previous reply has been printed.
fn spawn_readline_thread(
    line_tx: mpsc::UnboundedSender<LineEvent>,
    ready_rx: std::sync::mpsc::Receiver<()>,
) {
    std::thread::spawn(move || {
        let mut editor = match rustyline::DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                let _ = line_tx.send(LineEvent::Error(e.to_string()));
                return;
            }
        };

        while ready_rx.recv().is_ok() {
            let event = match editor.readline("You> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    LineEvent::Line(line)
                }
                Err(ReadlineError::Interrupted) => LineEvent::Interrupted,
                Err(ReadlineError::Eof) => LineEvent::Eof,
                Err(e) => LineEvent::Error(e.to_string()),
            };
            let stop = !matches!(event, LineEvent::Line(_));
            if line_tx.send(event).is_err() || stop {
                break;
            }
        }
    });
}
