//! Playback view-state. Nothing here produces sound.

use super::content::Track;

pub const DEFAULT_VOLUME_PERCENT: u8 = 75;
pub const DEFAULT_PROGRESS_PERCENT: u8 = 30;
const MAX_PERCENT: u8 = 100;

/// What the player screen reflects back to the user
#[derive(Clone, Debug)]
pub struct PlaybackState {
    pub track: Option<Track>,
    pub is_playing: bool,
    progress: u8,
    volume: u8,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME_PERCENT, DEFAULT_PROGRESS_PERCENT)
    }
}

impl PlaybackState {
    pub fn new(volume: u8, progress: u8) -> Self {
        Self {
            track: None,
            is_playing: false,
            progress: progress.min(MAX_PERCENT),
            volume: volume.min(MAX_PERCENT),
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(MAX_PERCENT);
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_PERCENT);
    }

    /// `elapsed / total` label for the progress bar
    pub fn time_label(&self) -> Option<String> {
        self.track.as_ref().map(|track| {
            format!(
                "{} / {}",
                elapsed_label(self.progress, &track.duration),
                track.duration
            )
        })
    }
}

/// Parses an `m:ss` display duration into seconds
pub fn parse_duration(duration: &str) -> Option<u32> {
    let (minutes, seconds) = duration.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

pub fn format_duration(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Position `progress` percent into a track of the given display duration
pub fn elapsed_label(progress: u8, duration: &str) -> String {
    let total = parse_duration(duration).unwrap_or(0);
    let elapsed = total * u32::from(progress.min(MAX_PERCENT)) / u32::from(MAX_PERCENT);
    format_duration(elapsed)
}
