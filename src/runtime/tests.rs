use std::io::Cursor;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::config::PlaybackSettings;
use crate::library::Track;
use crate::player::RecordingLauncher;
use crate::playlist::RepeatMode;

fn abc() -> Playlist {
    let mut pl = Playlist::with_rng("/music", StdRng::seed_from_u64(3));
    for n in ["a.mp3", "b.wav", "c.mp3"] {
        pl.append(Track::new(n));
    }
    pl
}

fn drive(playlist: &mut Playlist, launcher: &mut RecordingLauncher, keys: &str) -> String {
    let mut input = Cursor::new(keys.as_bytes().to_vec());
    let mut output: Vec<u8> = Vec::new();
    event_loop::run(playlist, launcher, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn menu_walks_to_the_end_without_repeat() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "3\n3\n3\n7\n");
    assert!(out.contains(" Playing: b.wav\n"));
    assert!(out.contains(" Playing: c.mp3\n"));
    assert!(out.contains("End of playlist.\n"));
    assert!(out.ends_with("Chill mode end! -_-\n"));
    assert_eq!(pl.cursor(), Some(2));
    assert_eq!(
        launcher.launched,
        vec![PathBuf::from("/music/b.wav"), PathBuf::from("/music/c.mp3")]
    );
}

#[test]
fn menu_cycles_repeat_and_wraps() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "6\n6\n4\n2\n7\n");
    assert!(out.contains("Repeat mode: ONE\n"));
    assert!(out.contains("Repeat mode: ALL\n"));
    assert_eq!(pl.repeat_mode(), RepeatMode::All);
    assert_eq!(pl.cursor(), Some(2));
    assert_eq!(launcher.names(), vec!["c.mp3", "c.mp3"]);
}

#[test]
fn menu_view_prints_listing_with_marker() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "1\n7\n");
    assert!(out.contains("Playlist (3 songs)\n  1. a.mp3  <-- current\n  2. b.wav\n"));
    assert!(launcher.launched.is_empty());
}

#[test]
fn menu_reports_invalid_choices_and_reprompts() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "9\nfoo\n\n7\n");
    assert_eq!(out.matches("Invalid choice.").count(), 3);
    assert_eq!(out.matches("Choose: ").count(), 4);
}

#[test]
fn menu_shuffle_resets_cursor_and_reports() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "3\n5\n7\n");
    assert!(out.contains("Playlist shuffled!\n"));
    assert_eq!(pl.cursor(), Some(0));
    assert_eq!(pl.len(), 3);

    let mut single = Playlist::with_rng("/music", StdRng::seed_from_u64(3));
    single.append(Track::new("solo.mp3"));
    let out = drive(&mut single, &mut launcher, "5\n7\n");
    assert!(out.contains("Not enough songs to shuffle.\n"));
}

#[test]
fn menu_reports_launch_failures_and_keeps_going() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::failing();

    let out = drive(&mut pl, &mut launcher, "3\n7\n");
    assert!(out.contains("Could not open /music/b.wav with the default player\n"));
    assert!(out.ends_with("Chill mode end! -_-\n"));
    assert_eq!(pl.cursor(), Some(1));
}

#[test]
fn menu_exits_cleanly_when_input_ends() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "3\n");
    assert!(out.contains(" Playing: b.wav\n"));
    assert!(!out.contains("Chill mode end!"));
}

#[test]
fn menu_on_empty_playlist_reports_no_selection() {
    let mut pl = Playlist::with_rng("/music", StdRng::seed_from_u64(3));
    let mut launcher = RecordingLauncher::default();

    let out = drive(&mut pl, &mut launcher, "1\n2\n3\n4\n7\n");
    assert!(out.contains("[Empty playlist]"));
    assert_eq!(out.matches("No song selected.").count(), 3);
    assert!(launcher.launched.is_empty());
}

#[test]
fn prompt_folder_strips_the_line_ending() {
    let mut input = Cursor::new(b"/home/me/Music\r\n".to_vec());
    let mut output: Vec<u8> = Vec::new();

    let folder = prompt_folder(&mut input, &mut output).unwrap();
    assert_eq!(folder, PathBuf::from("/home/me/Music"));
    assert_eq!(String::from_utf8(output).unwrap(), "Enter music folder path : ");
}

#[test]
fn load_reports_count_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.mp3"), b"").unwrap();

    let mut pl = Playlist::with_rng(dir.path(), StdRng::seed_from_u64(3));
    let mut output: Vec<u8> = Vec::new();
    assert!(load(&mut pl, &LibrarySettings::default(), &mut output).unwrap());

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Scanning folder: "));
    assert!(out.contains("Loaded 1 songs."));
}

#[test]
fn load_of_unreadable_folder_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let mut pl = Playlist::with_rng(&missing, StdRng::seed_from_u64(3));
    let mut output: Vec<u8> = Vec::new();
    assert!(!load(&mut pl, &LibrarySettings::default(), &mut output).unwrap());

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains(&format!("Cannot open folder: {}", missing.display())));
    assert!(out.ends_with("No songs found. Exiting.\n"));
}

#[test]
fn load_of_folder_without_audio_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

    let mut pl = Playlist::with_rng(dir.path(), StdRng::seed_from_u64(3));
    let mut output: Vec<u8> = Vec::new();
    assert!(!load(&mut pl, &LibrarySettings::default(), &mut output).unwrap());
    assert!(String::from_utf8(output).unwrap().contains("Loaded 0 songs."));
}

#[test]
fn playback_defaults_come_from_config_unless_overridden() {
    let mut pl = abc();
    let playback = PlaybackSettings {
        repeat: RepeatModeSetting::All,
        shuffle_on_load: false,
    };

    startup::apply_playback_defaults(&mut pl, &playback, &Options::default());
    assert_eq!(pl.repeat_mode(), RepeatMode::All);

    let options = Options {
        repeat: Some(RepeatModeSetting::One),
        ..Options::default()
    };
    startup::apply_playback_defaults(&mut pl, &playback, &options);
    assert_eq!(pl.repeat_mode(), RepeatMode::One);
}

#[test]
fn shuffle_on_load_keeps_every_track_and_resets_cursor() {
    let mut pl = abc();
    let mut launcher = RecordingLauncher::default();
    pl.next(&mut launcher).unwrap();

    let playback = PlaybackSettings {
        repeat: RepeatModeSetting::None,
        shuffle_on_load: true,
    };
    startup::apply_playback_defaults(&mut pl, &playback, &Options::default());
    assert_eq!(pl.cursor(), Some(0));

    let mut names: Vec<String> = pl.tracks().iter().map(|t| t.filename().into_owned()).collect();
    names.sort();
    assert_eq!(names, vec!["a.mp3", "b.wav", "c.mp3"]);
}
