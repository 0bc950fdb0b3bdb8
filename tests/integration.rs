// SPDX-License-Identifier: MPL-2.0
use iced_sorter::config::Config;
use iced_sorter::directory_scanner;
use iced_sorter::error::Error;
use iced_sorter::i18n::fluent::I18n;
use iced_sorter::image_queue::ImageQueue;
use iced_sorter::routing::{unique_path, RoutingMode};
use iced_sorter::session::{Session, Showing};
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn write_png(dir: &Path, name: &str, shade: u8) {
    RgbaImage::from_pixel(4, 3, Rgba([shade, shade, shade, 255]))
        .save_with_format(dir.join(name), image_rs::ImageFormat::Png)
        .expect("failed to write png");
}

/// Source folder with three images, a text file and a subfolder.
fn populated_source() -> TempDir {
    let dir = tempdir().expect("failed to create source dir");
    write_png(dir.path(), "c.png", 30);
    write_png(dir.path(), "a.png", 10);
    write_png(dir.path(), "B.PNG", 20);
    fs::write(dir.path().join("notes.txt"), b"not an image").expect("write txt");
    fs::create_dir(dir.path().join("nested.jpg")).expect("create subdir");
    dir
}

#[test]
fn queue_holds_matching_files_in_lexicographic_order() {
    let source = populated_source();

    let mut queue = ImageQueue::new();
    queue.load(directory_scanner::list_images(source.path()).expect("list images"));

    let names: Vec<&str> = queue.iter().collect();
    assert_eq!(names, vec!["B.PNG", "a.png", "c.png"]);
    assert_eq!(queue.current(), Some("B.PNG"));
}

#[test]
fn copy_leaves_identical_bytes_and_keeps_source() {
    let source = populated_source();
    let dest = tempdir().expect("dest dir");
    let mut session = Session::default();
    session.load_source(source.path().to_path_buf()).expect("load");
    session.add_destination(dest.path().to_path_buf()).expect("add");
    session.set_mode(RoutingMode::Copy);

    let routed = session.route_current(0).expect("route").expect("routed");

    assert_eq!(routed.filename, "B.PNG");
    assert_eq!(
        fs::read(&routed.target).expect("read copy"),
        fs::read(source.path().join("B.PNG")).expect("read original")
    );
    assert_eq!(fs::read_dir(dest.path()).expect("read dest").count(), 1);
    assert_eq!(session.queue().map(ImageQueue::len), Some(2));
}

#[test]
fn move_removes_source_file() {
    let source = populated_source();
    let dest = tempdir().expect("dest dir");
    let original = fs::read(source.path().join("B.PNG")).expect("read original");
    let mut session = Session::default();
    session.load_source(source.path().to_path_buf()).expect("load");
    session.add_destination(dest.path().to_path_buf()).expect("add");

    let routed = session.route_current(0).expect("route").expect("routed");

    assert!(!source.path().join("B.PNG").exists());
    assert_eq!(fs::read(&routed.target).expect("read moved"), original);
}

#[test]
fn collision_gets_next_free_suffix() {
    let source = tempdir().expect("source dir");
    let dest = tempdir().expect("dest dir");
    write_png(source.path(), "a.png", 99);
    fs::write(dest.path().join("a.png"), b"first").expect("write");
    fs::write(dest.path().join("a (2).png"), b"second").expect("write");

    assert_eq!(
        unique_path::resolve(dest.path(), "a.png").expect("resolve"),
        dest.path().join("a (3).png")
    );

    let mut session = Session::default();
    session.load_source(source.path().to_path_buf()).expect("load");
    session.add_destination(dest.path().to_path_buf()).expect("add");
    let routed = session.route_current(0).expect("route").expect("routed");

    assert_eq!(routed.target, dest.path().join("a (3).png"));
    assert_eq!(fs::read(dest.path().join("a.png")).expect("read"), b"first");
}

#[test]
fn sixth_destination_is_rejected() {
    let mut session = Session::default();
    let dirs: Vec<TempDir> = (0..6).map(|_| tempdir().expect("dest dir")).collect();

    for dir in &dirs[..5] {
        session.add_destination(dir.path().to_path_buf()).expect("add");
    }
    let result = session.add_destination(dirs[5].path().to_path_buf());

    assert!(matches!(result, Err(Error::TooManyDestinations { max: 5 })));
    assert_eq!(session.destinations().len(), 5);
}

#[test]
fn sorting_a_whole_folder_ends_finished() {
    let source = populated_source();
    let keep = tempdir().expect("keep dir");
    let trash = tempdir().expect("trash dir");
    let mut session = Session::default();
    session.load_source(source.path().to_path_buf()).expect("load");
    session.add_destination(keep.path().to_path_buf()).expect("add");
    session.add_destination(trash.path().to_path_buf()).expect("add");

    let mut routed = 0;
    while session.has_current() {
        assert!(session.prepare_current().is_empty());
        session.route_current(routed % 2).expect("route");
        routed += 1;
    }

    assert_eq!(routed, 3);
    assert!(matches!(session.showing(), Showing::Finished));
    assert_eq!(fs::read_dir(keep.path()).expect("keep").count(), 2);
    assert_eq!(fs::read_dir(trash.path()).expect("trash").count(), 1);
}

#[test]
fn advancing_at_last_image_is_idempotent() {
    let source = populated_source();
    let mut session = Session::default();
    session.load_source(source.path().to_path_buf()).expect("load");

    while session.next() {}
    let at_end = session.progress().map(|p| p.position);
    assert!(!session.next());
    assert!(!session.next());

    assert_eq!(session.progress().map(|p| p.position), at_end);
    assert_eq!(at_end, Some(3));
}

#[test]
fn language_follows_config() {
    let english = I18n::new(&Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    });
    let indonesian = I18n::new(&Config {
        language: Some("id".to_string()),
        ..Config::default()
    });

    assert_eq!(english.tr("mode-move"), "MOVE");
    assert_eq!(indonesian.tr("mode-move"), "PINDAH");
    assert_eq!(indonesian.current_locale().to_string(), "id");
}
