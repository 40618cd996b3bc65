//! The UI renders the application state into something visible and scrollable.
//!
//! The page body fills the terminal and the header is drawn over its top rows, the way a fixed
//! header sits over a web page. Section jumps account for that overlap. The header gets out
//! of the way while reading downwards and comes back on the way up.

use crate::app_state::AppState;
use crate::page::{LineKind, PageLine};
use crate::section::SectionId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const ACCENT: Color = Color::Cyan;

/// Renders the page, or the error panel if composition failed.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    if let Some(error) = app.boundary.error() {
        draw_error_panel(f, chunks[0], error);
    } else {
        draw_body(f, chunks[0], app);
        if app.is_header_shown() {
            draw_header(f, chunks[0], app);
        }
        if app.commander.is_past_threshold() {
            draw_back_to_top(f, chunks[0]);
        }
    }
    draw_help(f, chunks[1], app);
}

fn line_style(line: &PageLine, revealed: bool) -> Style {
    if !revealed {
        return Style::default().fg(Color::DarkGray);
    }
    match line.kind {
        LineKind::Name => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        LineKind::Headline => Style::default().add_modifier(Modifier::ITALIC),
        LineKind::SectionHeading => Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineKind::BlockHeading => Style::default().add_modifier(Modifier::BOLD),
        LineKind::Meta => Style::default().fg(Color::Gray),
        LineKind::Tags => Style::default().fg(Color::Yellow),
        LineKind::Avatar | LineKind::Body | LineKind::Blank => Style::default(),
    }
}

fn draw_body(f: &mut Frame, area: Rect, app: &AppState) {
    let first = app.first_visible_row();
    let lines: Vec<Line> = app
        .page
        .lines
        .iter()
        .skip(first)
        .take(usize::from(area.height))
        .map(|line| {
            let revealed = line.block.is_none_or(|b| app.is_block_revealed(b));
            Line::styled(format!(" {}", line.text), line_style(line, revealed))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn nav_span(id: SectionId, index: usize, active: bool) -> Span<'static> {
    let text = format!(" {} {} ", index + 1, id.label());
    if active {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(text)
    }
}

fn progress_line(progress: f64, width: u16) -> Line<'static> {
    // Progress is clamped to [0, 1] by the commander.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (progress * f64::from(width)).round() as usize;
    Line::styled("━".repeat(filled), Style::default().fg(ACCENT))
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    // The configured height is clamped to the rows the header actually uses.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = app.config.header_height.clamp(2.0, 3.0) as u16;
    let header = Rect {
        height: rows.min(area.height),
        ..area
    };
    f.render_widget(Clear, header);

    let active = app.nav.highlighted();
    let mut spans = vec![Span::styled(
        format!(" {} ", app.profile.name),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if app.responsive.is_mobile() {
        spans.push(Span::raw(" | "));
        if let Some(id) = active {
            let index = app.nav.items().iter().position(|&s| s == id).unwrap_or(0);
            spans.push(nav_span(id, index, true));
        }
        spans.push(Span::styled(" m: menu", Style::default().fg(Color::Gray)));
    } else {
        spans.push(Span::raw(" |"));
        for (i, &id) in app.nav.items().iter().enumerate() {
            spans.push(nav_span(id, i, active == Some(id)));
        }
    }

    let text = vec![Line::from(spans), progress_line(app.commander.progress(), header.width)];
    let border = if app.commander.is_scrolled() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::BOTTOM).border_style(border);
    f.render_widget(Paragraph::new(text).block(block), header);

    if app.responsive.is_mobile() && app.nav.is_menu_open() {
        draw_menu(f, area, header.height, app);
    }
}

fn draw_menu(f: &mut Frame, area: Rect, top: u16, app: &AppState) {
    let items: Vec<ListItem> = app
        .nav
        .items()
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let style = if app.nav.highlighted() == Some(id) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", i + 1, id.label())).style(style)
        })
        .collect();
    let height = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(2);
    let menu = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width.min(24),
        height: height.min(area.height.saturating_sub(top)),
    };
    f.render_widget(Clear, menu);
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Sections")),
        menu,
    );
}

fn draw_back_to_top(f: &mut Frame, area: Rect) {
    let label = " ↑ top (t) ";
    let width = u16::try_from(label.width()).unwrap_or(0);
    if area.width < width || area.height == 0 {
        return;
    }
    let hint = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - 1,
        width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(label).style(Style::default().fg(Color::Black).bg(ACCENT)),
        hint,
    );
}

fn draw_error_panel(f: &mut Frame, area: Rect, error: &str) {
    let width = area.width.min(60);
    let height = area.height.min(8);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    let text = vec![
        Line::styled(
            "Something went wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(error.to_string(), Style::default().fg(Color::Gray)),
        Line::raw(""),
        Line::raw("r: retry  R: reload  q: quit"),
    ];
    f.render_widget(Clear, panel);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        panel,
    );
}

fn draw_help(f: &mut Frame, area: Rect, app: &AppState) {
    let help = if app.is_searching() {
        format!("Search projects: {}▏ | Enter: done | Esc: clear", app.filter.search())
    } else if let Some(msg) = &app.message {
        msg.clone()
    } else if app.boundary.is_tripped() {
        "r: retry | R: reload | q: quit".to_string()
    } else if app.filter.is_active() {
        format!(
            "Projects: {} | f: next category | /: search | Esc: show all",
            app.filter.label()
        )
    } else {
        "↑↓/jk: scroll | Tab: next section | 1-9: jump | f /: filter projects | t: top | q: quit"
            .to_string()
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::Gray)),
        area,
    );
}
