use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::{App, Role};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const PROMPT: &str = "You> ";

/// Render bot Markdown. tui-markdown emits ratatui-core types, which are
/// converted to this crate's ratatui version span by span.
fn markdown_lines(content: &str) -> Vec<Line<'static>> {
    tui_markdown::from_str(content)
        .lines
        .into_iter()
        .map(|line| {
            line.spans
                .into_iter()
                .map(|s| Span::styled(s.content.into_owned(), core_style(s.style)))
                .collect::<Vec<_>>()
                .into()
        })
        .collect()
}

fn core_style(s: ratatui_core::style::Style) -> Style {
    Style {
        fg: s.fg.map(core_color),
        bg: s.bg.map(core_color),
        add_modifier: Modifier::from_bits_truncate(s.add_modifier.bits()),
        sub_modifier: Modifier::from_bits_truncate(s.sub_modifier.bits()),
        ..Style::default()
    }
}

/// Both crates print colors as names, `#rrggbb` or an index, and parse the same forms back.
fn core_color(c: ratatui_core::style::Color) -> Color {
    c.to_string().parse().unwrap_or(Color::Reset)
}

pub fn draw(f: &mut Frame, app: &App) {
    let [chat, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(f.area());
    draw_chat(f, app, chat);
    draw_status(f, app, status);
}

fn status_text(app: &App) -> String {
    let s = &app.status;
    let intent = s.last_intent.map(|i| i.as_str()).unwrap_or("-");
    format!(
        " intent {intent} ({} matches)  |  answered {}  |  fallbacks {}  |  /jobs  /job <slug>  /quit",
        s.last_matches, s.answered, s.fallbacks
    )
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let para = Paragraph::new(Line::from(Span::styled(
        status_text(app),
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(para, area);
}

fn draw_chat(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        match msg.role {
            Role::Visitor => lines.push(Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(Color::Cyan)),
                Span::raw(msg.content.as_str()),
            ])),
            Role::Bot => {
                lines.push(Line::from(Span::styled("KNSOFT", Style::default().bold().fg(Color::Green))));
                lines.extend(markdown_lines(&msg.content));
            }
            Role::Notice => lines.extend(
                msg.content
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_owned(), Style::default().dim()))),
            ),
        }
    }
    if app.thinking() {
        let frame = SPINNER[app.anim_frame % SPINNER.len()];
        lines.push(Line::from(Span::styled(format!("{frame} typing..."), Style::default().dim())));
    }

    if !lines.is_empty() {
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Cyan)),
        Span::raw(app.input.as_str()),
    ]));

    let inner_w = area.width.saturating_sub(2) as usize;
    let total_rows: u16 = lines.iter().map(|l| line_rows(l, inner_w)).sum();
    let visible = area.height.saturating_sub(2);
    let scroll = total_rows
        .saturating_sub(visible)
        .saturating_sub(app.scroll_offset);

    let block = Block::default().borders(Borders::ALL).title(" KNSOFT Assistant ");
    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, area);

    // cursor sits on the last (input) line, which may itself wrap
    let Some(width) = std::num::NonZeroUsize::new(inner_w) else {
        return;
    };
    let cursor_w = PROMPT.width() + app.input[..app.cursor].width();
    let input_rows = wrap_rows(&format!("{PROMPT}{}", app.input), inner_w);
    let input_top = total_rows.saturating_sub(input_rows);
    let row = (input_top + (cursor_w / width) as u16).saturating_sub(scroll);
    f.set_cursor_position(Position::new(
        area.x + 1 + (cursor_w % width) as u16,
        area.y + 1 + row,
    ));
}

/// Rows a line takes when wrapped to `width` columns.
fn line_rows(line: &Line, width: usize) -> u16 {
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    text.split('\n').map(|seg| wrap_rows(seg, width)).sum()
}

/// Character-level greedy wrap. Approximates ratatui's word wrap closely
/// enough to keep the newest line in view.
fn wrap_rows(s: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    let mut rows = 1u16;
    let mut col = 0usize;
    for cw in s.chars().filter_map(UnicodeWidthChar::width).filter(|w| *w > 0) {
        if col + cw > width {
            rows += 1;
            col = cw;
        } else {
            col += cw;
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use knsoft_core::types::{BotStatus, Intent};

    #[test]
    fn wrap_counts_rows() {
        assert_eq!(wrap_rows("", 10), 1);
        assert_eq!(wrap_rows("abcde", 5), 1);
        assert_eq!(wrap_rows("abcdef", 5), 2);
        // wide chars take two columns
        assert_eq!(wrap_rows("😊😊😊", 4), 2);
    }

    #[test]
    fn markdown_bold_becomes_styled_span() {
        let lines = markdown_lines("**KNSOFT** rocks");
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "KNSOFT")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn colors_convert_by_name() {
        use ratatui_core::style::Color as C;
        assert_eq!(core_color(C::LightBlue), Color::LightBlue);
        assert_eq!(core_color(C::Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
        assert_eq!(core_color(C::Indexed(42)), Color::Indexed(42));
    }

    #[test]
    fn status_shows_last_intent() {
        let mut app = App::new();
        app.status = BotStatus {
            answered: 3,
            fallbacks: 1,
            last_intent: Some(Intent::Location),
            last_matches: 2,
        };
        let text = status_text(&app);
        assert!(text.contains("intent location (2 matches)"));
        assert!(text.contains("answered 3"));
        assert!(text.contains("fallbacks 1"));
    }
}
