//! Session loop tests on a paused tokio clock
mod common;

use castdeck_core::AlbumKey;
use castdeck_playback::{PlayOutcome, PlaybackState};
use castdeck_receiver::{
    loader, ReceiverConfig, Session, SessionEnd, SimulationSettings, StartRequest,
};
use common::fixtures;
use std::time::Duration;

fn config(loop_enabled: bool) -> ReceiverConfig {
    let mut config = ReceiverConfig::default();
    config.playback.loop_enabled = loop_enabled;
    config.simulation = SimulationSettings {
        track_seconds: 1.0,
        tick_ms: 250,
        speed: 1.0,
    };
    config
}

fn session(loop_enabled: bool) -> (Session, Option<AlbumKey>) {
    let mut session = Session::new(&config(loop_enabled));
    let mut albums = loader::parse_albums(fixtures::GAPPED_ALBUM, "mp3-128").unwrap();
    albums.extend(loader::parse_albums(fixtures::TWO_ALBUMS, "mp3-128").unwrap());
    let first = session.register_all(albums);
    (session, first)
}

#[tokio::test(start_paused = true)]
async fn test_plays_album_to_end_without_loop() {
    let (mut session, first) = session(false);
    session
        .start(&StartRequest::default(), first.as_ref())
        .unwrap();

    let summary = session.run(std::future::pending()).await.unwrap();

    assert_eq!(summary.end, SessionEnd::EndOfAlbum);
    // Opening, then Closing; the track without a file is skipped
    assert_eq!(summary.sources_loaded, 2);
    assert_eq!(
        session.simulation().loaded().as_deref(),
        Some("https://cdn.example/c.mp3")
    );
    assert_eq!(session.controller().current_track_index(), Some(2));
    assert_eq!(session.controller().state(), PlaybackState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_looping_session_runs_until_shutdown() {
    let (mut session, first) = session(true);
    session
        .start(&StartRequest::default(), first.as_ref())
        .unwrap();

    let summary = session
        .run(tokio::time::sleep(Duration::from_secs(10)))
        .await
        .unwrap();

    assert_eq!(summary.end, SessionEnd::Shutdown);
    // Each source takes a metadata tick plus four playing ticks
    assert!(summary.sources_loaded > 4);
    assert_eq!(session.controller().state(), PlaybackState::Paused);
    assert!(!session.simulation().is_playing());
}

#[tokio::test(start_paused = true)]
async fn test_start_on_requested_album_and_track() {
    let (mut session, first) = session(false);
    let request = StartRequest {
        album: Some(AlbumKey::new("2", "20")),
        track: Some(1),
    };

    let outcome = session.start(&request, first.as_ref()).unwrap();
    assert_eq!(outcome, PlayOutcome::Loaded { index: 1 });

    let summary = session.run(std::future::pending()).await.unwrap();

    assert_eq!(summary.end, SessionEnd::EndOfAlbum);
    assert_eq!(summary.sources_loaded, 1);
    assert!(session.controller().album().is_same_album("2", "20"));
}

#[test]
fn test_step_publishes_time() {
    let (mut session, first) = session(true);
    session
        .start(&StartRequest::default(), first.as_ref())
        .unwrap();

    // Metadata arrives, then two playing ticks
    for _ in 0..3 {
        assert!(!session.step().unwrap());
    }

    let controller = session.controller();
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(controller.elapsed_seconds(), 0.5);
    assert_eq!(controller.total_seconds(), 1.0);
    assert_eq!(controller.position_percent(), 50.0);
    assert_eq!(controller.total_display(), "00:01");
}
