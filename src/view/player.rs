//! Player screen: track info, progress, transport controls and volume

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::model::Session;
use super::utils::{ACCENT, screen_block};

pub fn render_player(frame: &mut Frame, area: Rect, session: &Session) {
    // Nothing is drawn without a loaded track, whatever the screen says
    let Some(track) = session.current_track() else {
        frame.render_widget(screen_block(" Player "), area);
        return;
    };
    let playback = session.playback();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Title, artist, favorite, offline
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Transport controls
            Constraint::Length(3), // Volume
            Constraint::Min(0),
        ])
        .split(area);

    let favorite = if session.is_favorite(&track.id) {
        Span::styled("♥ favorite", Style::default().fg(ACCENT))
    } else {
        Span::styled("♡ f to favorite", Style::default().fg(Color::DarkGray))
    };
    let mut info_lines = vec![
        Line::from(Span::styled(
            track.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(track.artist.clone(), Style::default().fg(Color::Gray))).centered(),
        Line::from(favorite).centered(),
    ];
    if track.offline || session.is_downloaded(&track.id) {
        info_lines.push(Line::from(Span::styled("⬇ offline", Style::default().fg(Color::Green))).centered());
    }
    frame.render_widget(Paragraph::new(info_lines).block(screen_block(" Now Playing ")), chunks[0]);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" ←/→ seek "))
        .gauge_style(Style::default().fg(ACCENT))
        .percent(u16::from(playback.progress()))
        .label(playback.time_label().unwrap_or_default());
    frame.render_widget(progress, chunks[1]);

    let play_pause = if playback.is_playing { "⏸ Pause" } else { "▶ Play" };
    let controls = Paragraph::new(
        Line::from(vec![
            Span::styled("⤮   ⏮   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("[ {} ]", play_pause),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ⏭   ⟳", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    )
    .block(Block::default().borders(Borders::ALL).title(" Space play/pause "));
    frame.render_widget(controls, chunks[2]);

    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Volume (+/-) "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(playback.volume()))
        .label(format!("{}", playback.volume()));
    frame.render_widget(volume, chunks[3]);
}
