//! Screen bodies (home, search, result and collection lists)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{AppModel, POPULAR_QUERIES, SearchFocus, Service, Track};
use super::utils::{ACCENT, TrackMarkers, render_scrollable_list, screen_block, track_row};

pub fn render_home(frame: &mut Frame, area: Rect, model: &AppModel) {
    let items: Vec<ListItem> = Service::ALL
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let selected = i == model.ui_state.service_selected;
            let name_style = if selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let pointer = if selected { "▸ " } else { "  " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(pointer, Style::default().fg(ACCENT)),
                    Span::styled(service.display_name(), name_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", service.tagline()),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    render_scrollable_list(
        frame,
        area,
        items,
        model.ui_state.service_selected,
        screen_block(" Services (↑↓ Enter) "),
    );
}

pub fn render_search(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Length(4), // Popular queries
            Constraint::Min(0),
        ])
        .split(area);

    let focus = model.search_focus();
    let query = model.session.query();
    let input_style = if focus == SearchFocus::Input {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };

    let input_text = if query.is_empty() {
        Span::styled("Track title or artist...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(format!("{}▏", query))
    };

    let input = Paragraph::new(Line::from(input_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search (Enter to find music) ")
            .padding(Padding::horizontal(1))
            .border_style(input_style),
    );
    frame.render_widget(input, chunks[0]);

    if !model.suggestions_visible() {
        return;
    }

    let mut chips = Vec::new();
    for (i, suggestion) in POPULAR_QUERIES.iter().enumerate() {
        let selected = focus == SearchFocus::Suggestions && i == model.ui_state.suggestion_selected;
        let style = if selected {
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        chips.push(Span::styled(format!(" {} ", suggestion), style));
        chips.push(Span::raw("  "));
    }

    let suggestions = Paragraph::new(Line::from(chips)).block(
        Block::default()
            .title(" Popular queries (↓ ←→ Enter) ")
            .padding(Padding::new(1, 1, 1, 0))
            .title_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(suggestions, chunks[1]);
}

fn render_track_list(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    title: &str,
    tracks: &[Track],
    selected_index: usize,
    show_duration: bool,
) {
    let content_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let markers = TrackMarkers {
                favorite: model.session.is_favorite(&track.id),
                offline: track.offline || model.session.is_downloaded(&track.id),
                show_duration,
            };
            track_row(track, i == selected_index, markers, content_width)
        })
        .collect();

    render_scrollable_list(frame, area, items, selected_index, screen_block(title));
}

fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let empty = Paragraph::new(vec![Line::from(""), Line::from(message.to_string()).centered()])
        .style(Style::default().fg(Color::DarkGray))
        .block(screen_block(title));
    frame.render_widget(empty, area);
}

pub fn render_results(frame: &mut Frame, area: Rect, model: &AppModel) {
    let session = &model.session;
    if session.results().is_empty() {
        render_empty(frame, area, " Results ", "Nothing found");
        return;
    }
    render_track_list(
        frame,
        area,
        model,
        " Results (Enter play · f favorite · d download) ",
        session.results(),
        model.ui_state.results_selected,
        true,
    );
}

pub fn render_favorites(frame: &mut Frame, area: Rect, model: &AppModel) {
    let session = &model.session;
    if session.favorites().is_empty() {
        render_empty(frame, area, " Favorites ", "Add tracks to your favorites");
        return;
    }
    render_track_list(
        frame,
        area,
        model,
        " Favorites (Enter play · f remove) ",
        session.favorites(),
        model.ui_state.favorites_selected,
        false,
    );
}

pub fn render_downloads(frame: &mut Frame, area: Rect, model: &AppModel) {
    let session = &model.session;
    if session.downloads().is_empty() {
        render_empty(frame, area, " Downloads ", "Download tracks to listen offline");
        return;
    }
    render_track_list(
        frame,
        area,
        model,
        " Downloads (Enter play) ",
        session.downloads(),
        model.ui_state.downloads_selected,
        false,
    );
}

pub fn render_history(frame: &mut Frame, area: Rect, model: &AppModel) {
    let session = &model.session;
    if session.history().is_empty() {
        render_empty(frame, area, " History ", "History is empty");
        return;
    }
    render_track_list(
        frame,
        area,
        model,
        " History (Enter play again) ",
        session.history(),
        model.ui_state.history_selected,
        true,
    );
}
