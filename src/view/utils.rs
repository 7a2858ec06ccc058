//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
    Frame,
};

use crate::model::Track;

pub const ACCENT: Color = Color::Magenta;

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn screen_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(ACCENT))
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Which markers a track row carries on the right-hand side
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackMarkers {
    pub favorite: bool,
    pub offline: bool,
    pub show_duration: bool,
}

/// One list row: `title  artist  [duration]  ♥  ⬇`, with the selected row highlighted
pub fn track_row(track: &Track, selected: bool, markers: TrackMarkers, width: usize) -> ListItem<'static> {
    let duration_width = if markers.show_duration { 7 } else { 0 };
    let marker_width = 4;
    let remaining = width.saturating_sub(duration_width + marker_width + 2);
    let title_width = (remaining * 55) / 100;
    let artist_width = remaining.saturating_sub(title_width);

    let base = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(truncate_string(&track.title, title_width), base),
        Span::raw(" "),
        Span::styled(
            truncate_string(&track.artist, artist_width),
            base.fg(if selected { ACCENT } else { Color::Gray }),
        ),
    ];

    if markers.show_duration {
        spans.push(Span::styled(format!(" {:>6}", track.duration), Style::default().fg(Color::DarkGray)));
    }

    spans.push(Span::styled(
        if markers.favorite { " ♥" } else { " ♡" },
        if markers.favorite {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        },
    ));
    spans.push(Span::styled(
        if markers.offline { " ⬇" } else { "  " },
        Style::default().fg(Color::Green),
    ));

    ListItem::new(Line::from(spans))
}
