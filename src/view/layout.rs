//! Layout rendering (header, status line, bottom navigation)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{AppModel, Screen};
use super::utils::ACCENT;

fn header_subtitle(model: &AppModel) -> String {
    let session = &model.session;
    match session.screen() {
        Screen::Home => "Choose a service to search for music".to_string(),
        Screen::Search => match session.service() {
            Some(service) => service.display_name().to_string(),
            None => "No service selected".to_string(),
        },
        Screen::Results => format!("Found {} tracks", session.results().len()),
        Screen::Player => match session.current_track().and_then(|t| t.service) {
            Some(service) => format!("via {}", service.display_name()),
            None => String::new(),
        },
        Screen::Favorites => format!("{} tracks", session.favorites().len()),
        Screen::Downloads => format!("{} tracks offline", session.downloads().len()),
        Screen::History => format!("Last {} plays", session.history().len()),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, model: &AppModel) {
    let screen = model.session.screen();
    let back_hint = match screen.back_link() {
        Some(previous) => format!(" ← {} (Esc) ", previous.title()),
        None => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(
            screen.title(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(header_subtitle(model), Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(back_hint).right_aligned())
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(header, area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, model: &AppModel) {
    let text = match &model.ui_state.status_message {
        Some(message) => Span::styled(format!(" {}", message), Style::default().fg(Color::Green)),
        None => Span::styled(" ? help · Ctrl+Q quit", Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

fn nav_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        other => other.title(),
    }
}

pub fn render_bottom_nav(frame: &mut Frame, area: Rect, current: Screen) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = Screen::BOTTOM_NAV.len();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, entries as u32); entries])
        .split(inner);

    for (i, screen) in Screen::BOTTOM_NAV.iter().enumerate() {
        let style = if *screen == current {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = Paragraph::new(Line::from(format!("F{} {}", i + 1, nav_label(*screen))).centered())
            .style(style);
        frame.render_widget(label, chunks[i]);
    }
}
