//! End-to-end checks: load a USFM directory from disk, then drive the
//! cache, section scanning, and navigation against it the way the viewer
//! does.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use lectern::core::action::{Action, Effect, update};
use lectern::core::display::ContextViewMode;
use lectern::core::navigation::Navigator;
use lectern::core::state::App;
use lectern::core::verse_key::VerseKey;
use lectern::core::versification::Versification;
use lectern::resource::{BibleResource, UsfmResource};

const GENESIS: &str = "\\id GEN Integration fixture
\\c 1
\\s1 The Creation
\\p
\\v 1 In the beginning God created the heaven and the earth.
\\v 2 And the earth was without form, and void.
\\v 3 And God said, Let there be light: and there was light.
\\s1 The First Day
\\p
\\v 4 And God saw the light, that it was good.
\\v 5 And God called the light Day.
\\c 2
\\s1 The Seventh Day
\\p
\\v 1 Thus the heavens and the earth were finished.
\\v 2-3 And on the seventh day God ended his work; and he rested.
\\v 4 These are the generations of the heavens.
";

const EXODUS: &str = "\\id EXO Integration fixture
\\c 1
\\s1 Israel in Egypt
\\p
\\v 1 Now these are the names of the children of Israel.
\\v 2 Reuben, Simeon, Levi, and Judah.
";

/// Writes the fixture books into a fresh temp directory.
fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lectern-it-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("GEN.usfm"), GENESIS).unwrap();
    fs::write(dir.join("EXO.usfm"), EXODUS).unwrap();
    dir
}

fn load(name: &str) -> (UsfmResource, PathBuf) {
    let dir = fixture_dir(name);
    let resource = UsfmResource::load(&dir).unwrap();
    (resource, dir)
}

#[test]
fn test_load_directory_in_canonical_order() {
    let (resource, dir) = load("order");
    assert_eq!(resource.book_codes(), ["GEN", "EXO"]);
    assert_eq!(resource.num_chapters("GEN"), 2);
    assert_eq!(resource.num_verses("GEN", 1), Some(5));
    // The 2-3 bridge counts toward the total but has no data at verse 3.
    assert_eq!(resource.num_verses("GEN", 2), Some(4));
    assert!(
        resource
            .context_verse_data(&VerseKey::new("GEN", 2, 3))
            .is_none()
    );
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_navigation_rolls_across_loaded_books() {
    let (resource, dir) = load("nav");
    let mut nav = Navigator::new(VerseKey::new("GEN", 2, 4));
    nav.next_verse(&resource);
    assert_eq!(nav.current(), &VerseKey::new("EXO", 0, 0));
    nav.previous_verse(&resource);
    assert_eq!(nav.current(), &VerseKey::new("GEN", 2, 4));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_sections_follow_the_headings_on_disk() {
    let (resource, dir) = load("sections");
    let mut nav = Navigator::new(VerseKey::new("GEN", 1, 2));

    let bounds = nav.current_section(&resource);
    assert_eq!(bounds.start, VerseKey::new("GEN", 1, 1));
    assert_eq!(bounds.end, VerseKey::new("GEN", 1, 3));

    nav.next_section(&resource);
    assert_eq!(nav.current(), &VerseKey::new("GEN", 1, 4));
    nav.next_section(&resource);
    assert_eq!(nav.current(), &VerseKey::new("GEN", 2, 1));

    nav.previous_section(&resource);
    assert_eq!(nav.current(), &VerseKey::new("GEN", 1, 4));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_update_drives_goto_and_view_modes() {
    let (resource, dir) = load("update");
    let mut app = App::new(
        Arc::new(resource),
        VerseKey::new("GEN", 1, 1),
        ContextViewMode::ByChapter,
    );

    let verses = app.display_verses();
    assert_eq!(verses.len(), 5);
    assert!(verses[0].is_current);

    let effect = update(&mut app, Action::GotoReference(VerseKey::new("EXO", 1, 2)));
    assert_eq!(effect, Effect::SaveState);
    assert_eq!(app.current_reference(), "EXO 1:2");

    let verses = app.display_verses();
    assert_eq!(verses.len(), 2);
    assert!(verses[1].is_current);

    // Unknown books never move the position.
    update(&mut app, Action::GotoReference(VerseKey::new("REV", 1, 1)));
    assert_eq!(app.current_reference(), "EXO 1:2");
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_cache_warms_while_browsing() {
    let (resource, dir) = load("cache");
    let mut app = App::new(
        Arc::new(resource),
        VerseKey::new("GEN", 1, 1),
        ContextViewMode::BySection,
    );

    app.display_verses();
    let cold = app.navigator.cache_stats();
    assert!(cold.misses > 0);

    app.display_verses();
    let warm = app.navigator.cache_stats();
    assert_eq!(warm.misses, cold.misses);
    assert!(warm.hits > cold.hits);
    fs::remove_dir_all(dir).unwrap();
}
