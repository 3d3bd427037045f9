use std::fs::{File, create_dir};

use art_file_finder::discovery::{filter_by_extension, scan_directory};
use art_file_finder::prelude::*;
use tempfile::tempdir;

#[test]
fn test_documented_scenario() {
    // Directory enumerated as cat.jpg, dog.png, bird.jpg
    let enumerated = vec![
        "cat.jpg".to_string(),
        "dog.png".to_string(),
        "bird.jpg".to_string(),
    ];

    let images = filter_by_extension(enumerated, ".jpg");

    assert_eq!(format_array(&images), "{\n\"cat.jpg\",\n\"bird.jpg\"\n}\n");
}

#[test]
fn test_list_assets_follows_scan_order() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    for name in ["z.jpg", "m.txt", "a.jpg", "q.jpg"] {
        File::create(temp_dir.path().join(name)).expect("Failed to create file");
    }

    let scanned = scan_directory(temp_dir.path()).unwrap();
    let expected: Vec<String> = scanned
        .into_iter()
        .filter(|name| name.ends_with(".jpg"))
        .collect();

    let listed = list_assets(&Settings::new(temp_dir.path(), false)).unwrap();

    assert_eq!(listed, expected);
}

#[test]
fn test_directory_named_like_an_image_is_listed() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_dir(temp_dir.path().join("gallery.jpg")).expect("Failed to create directory");
    create_dir(temp_dir.path().join("thumbs")).expect("Failed to create directory");

    let listed = list_assets(&Settings::new(temp_dir.path(), true)).unwrap();

    assert_eq!(listed, vec!["gallery.jpg"]);
}

#[test]
fn test_commas_on_every_entry_but_the_last() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    for index in 0..25 {
        File::create(temp_dir.path().join(format!("image_{index:02}.jpg")))
            .expect("Failed to create file");
    }

    let mut buffer = Vec::new();
    let count = run(&Settings::new(temp_dir.path(), true), &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(count, 25);
    assert_eq!(lines.len(), 27);
    assert_eq!(lines[1], "\"image_00.jpg\",");
    assert_eq!(lines[25], "\"image_24.jpg\"");
    assert_eq!(output.matches(',').count(), 24);
    assert!(lines[1..26].iter().all(|line| line.starts_with('"')));
}

#[test]
fn test_unreadable_directory_is_a_file_system_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let file = temp_dir.path().join("plain.jpg");
    File::create(&file).expect("Failed to create file");

    let error = list_assets(&Settings::new(&file, false)).unwrap_err();

    assert!(matches!(error, Error::FileSystem { .. }));
}
