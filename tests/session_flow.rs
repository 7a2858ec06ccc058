use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::Mutex;

use music_hub::catalog::{MockCatalog, MusicCatalog, mock_tracks};
use music_hub::controller::AppController;
use music_hub::model::{AppModel, Screen, Service, Session, Track};
use music_hub::view::AppView;

fn track_by_id(tracks: &[Track], id: &str) -> Track {
    tracks
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .expect("mock track present")
}

fn render(model: &AppModel) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| AppView::render(frame, model)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn select_search_play_and_favorite() {
    let catalog = MockCatalog;
    let mut session = Session::new();
    assert_eq!(session.screen(), Screen::Home);

    session.select_service(Service::Yandex);
    assert_eq!(session.screen(), Screen::Search);
    assert_eq!(session.service(), Some(Service::Yandex));

    let results = catalog.search(session.service(), "Zivert").await.unwrap();
    assert!(session.search("Zivert", results));
    assert_eq!(session.screen(), Screen::Results);
    assert_eq!(session.results().len(), 5);

    let track = track_by_id(session.results(), "5");
    session.play_track(track.clone());
    assert_eq!(session.screen(), Screen::Player);
    assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("5"));
    assert!(session.is_playing());

    session.toggle_favorite(&track);
    let favorite_ids: Vec<&str> = session.favorites().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(favorite_ids, ["5"]);

    session.toggle_favorite(&track);
    assert!(session.favorites().is_empty());
}

#[test]
fn downloads_hold_one_offline_copy_per_id() {
    let mut session = Session::new();
    let tracks = mock_tracks(Some(Service::Vk));
    session.search("Cream Soda", tracks.clone());

    for track in tracks.iter().chain(tracks.iter()) {
        session.download(track);
    }

    assert_eq!(session.downloads().len(), 5);
    assert!(session.downloads().iter().all(|t| t.offline));
    assert!(session.results().iter().all(|t| !t.offline));
}

#[test]
fn back_links_and_bottom_nav() {
    let mut session = Session::new();
    session.select_service(Service::Mts);
    session.search("Miyagi", mock_tracks(Some(Service::Mts)));
    session.play_track(track_by_id(session.results(), "4"));

    let mut trail = vec![session.screen()];
    while session.go_back() {
        trail.push(session.screen());
    }
    assert_eq!(trail, [Screen::Player, Screen::Results, Screen::Search, Screen::Home]);

    for target in [Screen::Favorites, Screen::Downloads] {
        session.jump_to(target);
        session.go_back();
        assert_eq!(session.screen(), Screen::Home);
    }
}

#[test]
fn screens_render_their_content() {
    let mut model = AppModel::default();
    let home = render(&model);
    assert!(home.contains("Yandex Music"));
    assert!(home.contains("80+ million tracks"));
    assert!(home.contains("F4 Downloads"));

    model.session.select_service(Service::Vk);
    model.session.set_query("Ziv");
    let search = render(&model);
    assert!(search.contains("VK"));
    assert!(search.contains("Zivert"));
    assert!(search.contains("Cream Soda"));

    model.session.search("Ziv", mock_tracks(Some(Service::Vk)));
    let results = render(&model);
    assert!(results.contains("Found 5 tracks"));
    assert!(results.contains("Последний танец"));

    model.session.jump_to(Screen::Favorites);
    assert!(render(&model).contains("Add tracks to your favorites"));

    model.session.jump_to(Screen::Downloads);
    assert!(render(&model).contains("Download tracks to listen offline"));
}

#[test]
fn player_header_names_the_track_origin() {
    let mut model = AppModel::default();
    model.session.select_service(Service::Yandex);
    model.session.search("Zivert", mock_tracks(Some(Service::Yandex)));
    let track = track_by_id(model.session.results(), "5");
    model.session.toggle_favorite(&track);

    model.session.select_service(Service::Vk);
    model.session.jump_to(Screen::Favorites);
    let favorite = model.session.favorites()[0].clone();
    model.session.play_track(favorite);

    let player = render(&model);
    assert!(player.contains("via Yandex Music"));
    assert!(!player.contains("via VK"));
}

#[test]
fn history_screen_lists_recent_plays() {
    let mut model = AppModel::default();
    model.session.jump_to(Screen::History);
    assert!(render(&model).contains("History is empty"));

    let tracks = mock_tracks(Some(Service::Mts));
    model.session.play_track(tracks[0].clone());
    model.session.play_track(tracks[4].clone());
    model.session.jump_to(Screen::History);

    let history = render(&model);
    assert!(history.contains("Last 2 plays"));
    assert!(history.contains("F5 History"));
    assert!(history.contains("Лети"));
    assert!(history.contains("Последний танец"));
}

#[tokio::test]
async fn controller_drives_shared_model() {
    let model = Arc::new(Mutex::new(AppModel::default()));
    let controller = AppController::new(model.clone(), Arc::new(MockCatalog), 5);

    for code in [KeyCode::Enter, KeyCode::Char('Z'), KeyCode::Enter, KeyCode::Char('d')] {
        controller
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .await
            .unwrap();
    }

    let model = model.lock().await;
    assert_eq!(model.session.service(), Some(Service::Yandex));
    assert_eq!(model.session.screen(), Screen::Results);
    assert_eq!(model.session.downloads().len(), 1);
    assert!(render(&model).contains("Saved offline: Последний танец"));
}
