//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Screen, SearchFocus};
use super::AppController;

fn bottom_nav_target(code: KeyCode, allow_digits: bool) -> Option<Screen> {
    match code {
        KeyCode::F(n @ 1..=5) => Screen::BOTTOM_NAV.get(usize::from(n) - 1).copied(),
        KeyCode::Char(c @ '1'..='5') if allow_digits => {
            Screen::BOTTOM_NAV.get(c as usize - '1' as usize).copied()
        }
        _ => None,
    }
}

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            model.set_should_quit(true);
            return Ok(());
        }

        // Handle error message first (blocks all other interactions)
        if model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error();
            }
            return Ok(());
        }

        // Handle help popup
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h')) {
                model.hide_help_popup();
            }
            return Ok(());
        }

        let screen = model.session.screen();
        let typing = screen == Screen::Search && model.search_focus() == SearchFocus::Input;

        if let Some(target) = bottom_nav_target(key.code, !typing) {
            drop(model);
            self.jump_to(target).await;
            return Ok(());
        }

        match screen {
            Screen::Home => match key.code {
                KeyCode::Up => model.move_selection_up(),
                KeyCode::Down => model.move_selection_down(),
                KeyCode::Enter => {
                    let service = model.selected_service();
                    drop(model);
                    self.select_service(service).await;
                    return Ok(());
                }
                _ => {}
            },
            Screen::Search if typing => {
                match key.code {
                    KeyCode::Enter => {
                        drop(model);
                        self.search_current_query().await;
                    }
                    KeyCode::Esc => {
                        drop(model);
                        self.go_back().await;
                    }
                    KeyCode::Backspace => model.session.pop_query_char(),
                    KeyCode::Down | KeyCode::Tab => model.focus_suggestions(),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        model.session.push_query_char(c)
                    }
                    _ => {}
                }
                return Ok(());
            }
            Screen::Search => {
                match key.code {
                    KeyCode::Left => model.move_suggestion(false),
                    KeyCode::Right | KeyCode::Tab => model.move_suggestion(true),
                    KeyCode::Up | KeyCode::BackTab => model.focus_search_input(),
                    KeyCode::Enter => {
                        let suggestion = model.selected_suggestion();
                        drop(model);
                        self.apply_suggestion(suggestion).await;
                    }
                    KeyCode::Esc => {
                        drop(model);
                        self.go_back().await;
                    }
                    _ => {}
                }
                return Ok(());
            }
            Screen::Results => match key.code {
                KeyCode::Up => model.move_selection_up(),
                KeyCode::Down => model.move_selection_down(),
                KeyCode::Enter => {
                    drop(model);
                    self.play_selected().await;
                    return Ok(());
                }
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    drop(model);
                    self.toggle_favorite_selected().await;
                    return Ok(());
                }
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    drop(model);
                    self.download_selected().await;
                    return Ok(());
                }
                _ => {}
            },
            Screen::Player => {
                match key.code {
                    KeyCode::Char(' ') => {
                        drop(model);
                        self.toggle_playback().await;
                        return Ok(());
                    }
                    KeyCode::Left => {
                        drop(model);
                        self.seek_backward().await;
                        return Ok(());
                    }
                    KeyCode::Right => {
                        drop(model);
                        self.seek_forward().await;
                        return Ok(());
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        drop(model);
                        self.volume_up().await;
                        return Ok(());
                    }
                    KeyCode::Char('-') => {
                        drop(model);
                        self.volume_down().await;
                        return Ok(());
                    }
                    KeyCode::Char('f') | KeyCode::Char('F') => {
                        drop(model);
                        self.toggle_favorite_selected().await;
                        return Ok(());
                    }
                    _ => {}
                }
            }
            Screen::Favorites => match key.code {
                KeyCode::Up => model.move_selection_up(),
                KeyCode::Down => model.move_selection_down(),
                KeyCode::Enter => {
                    drop(model);
                    self.play_selected().await;
                    return Ok(());
                }
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    drop(model);
                    self.toggle_favorite_selected().await;
                    return Ok(());
                }
                _ => {}
            },
            Screen::Downloads | Screen::History => match key.code {
                KeyCode::Up => model.move_selection_up(),
                KeyCode::Down => model.move_selection_down(),
                KeyCode::Enter => {
                    drop(model);
                    self.play_selected().await;
                    return Ok(());
                }
                _ => {}
            },
        }

        // Keys shared by every screen without a text input
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                drop(model);
                self.go_back().await;
            }
            KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
            }
            _ => {}
        }
        Ok(())
    }
}
