mod common;

use std::path::PathBuf;

use easycrop_core::consts::DEFAULT_IMAGE_EXTENSIONS;
use easycrop_core::image_list::{Direction, ImageList};

fn extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn three() -> ImageList {
    ImageList::new(
        vec![PathBuf::from("a.png"), PathBuf::from("b.png"), PathBuf::from("c.png")],
        0,
    )
}

#[test]
fn test_previous_at_start_is_noop() {
    let mut list = three();
    assert_eq!(list.step(Direction::Previous), None);
    assert_eq!(list.index(), 0);
}

#[test]
fn test_next_at_end_is_noop() {
    let mut list = three();
    list.set_index(2);
    assert_eq!(list.step(Direction::Next), None);
    assert_eq!(list.index(), 2);
}

#[test]
fn test_step_through() {
    let mut list = three();
    assert_eq!(list.step(Direction::Next), Some(PathBuf::from("b.png").as_path()));
    assert_eq!(list.step(Direction::Next), Some(PathBuf::from("c.png").as_path()));
    assert_eq!(list.step(Direction::Previous), Some(PathBuf::from("b.png").as_path()));
    assert_eq!(list.index(), 1);
}

#[test]
fn test_empty_list() {
    let mut list = ImageList::default();
    assert!(list.is_empty());
    assert_eq!(list.current(), None);
    assert_eq!(list.step(Direction::Next), None);
    assert_eq!(list.step(Direction::Previous), None);
    assert_eq!(list.index(), 0);
}

#[test]
fn test_single_entry_cannot_move() {
    let mut list = ImageList::new(vec![PathBuf::from("only.png")], 0);
    assert_eq!(list.peek(Direction::Next), None);
    assert_eq!(list.peek(Direction::Previous), None);
    assert_eq!(list.step(Direction::Next), None);
}

#[test]
fn test_from_directory_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let c = common::write_png(dir.path(), "c.png", 4, 4);
    common::write_png(dir.path(), "a.PNG", 4, 4);
    common::write_jpeg(dir.path(), "b.jpg", 4, 4);
    std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
    std::fs::create_dir(dir.path().join("sub.png")).unwrap();

    let list = ImageList::from_directory_of(&c, &extensions()).unwrap();

    let names: Vec<_> = list
        .paths()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.PNG", "b.jpg", "c.png"]);
    assert_eq!(list.index(), 2);
    assert_eq!(list.current(), Some(c.as_path()));
}

#[test]
fn test_from_directory_keeps_unlisted_file() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "a.png", 4, 4);
    let odd = common::write_png(dir.path(), "scan.raw", 4, 4);

    let list = ImageList::from_directory_of(&odd, &extensions()).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.current(), Some(odd.as_path()));
}
