use snack_importer::{ImportError, SoundsDirectory};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, SoundsDirectory) {
    let temp = TempDir::new().unwrap();
    let dir = SoundsDirectory::new(temp.path().join("Sounds"));
    dir.initialize().unwrap();
    (temp, dir)
}

#[test]
fn test_copy_in_keeps_bytes_and_renames() {
    let (temp, dir) = setup();
    let source = temp.path().join("clip.wav");
    let bytes: Vec<u8> = (0..=255).collect();
    fs::write(&source, &bytes).unwrap();

    let copied = dir.copy_in(&source).unwrap();

    assert_ne!(copied.file_name, "clip.wav");
    assert!(copied.file_name.ends_with(".wav"));
    assert_eq!(copied.path.parent(), Some(dir.root()));
    assert_eq!(dir.read(&copied.file_name).unwrap(), bytes);
}

#[test]
fn test_same_source_twice_gets_two_files() {
    let (temp, dir) = setup();
    let source = temp.path().join("boo.mp3");
    fs::write(&source, b"boo").unwrap();

    let first = dir.copy_in(&source).unwrap();
    let second = dir.copy_in(&source).unwrap();

    assert_ne!(first.file_name, second.file_name);
    assert!(dir.contains(&first.file_name));
    assert!(dir.contains(&second.file_name));
}

#[test]
fn test_unsupported_extension_copies_nothing() {
    let (temp, dir) = setup();
    let source = temp.path().join("track.ogg");
    fs::write(&source, b"ogg").unwrap();

    let result = dir.copy_in(&source);

    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    assert_eq!(fs::read_dir(dir.root()).unwrap().count(), 0);
}

#[test]
fn test_remove_is_best_effort() {
    let (temp, dir) = setup();
    let source = temp.path().join("hit.m4a");
    fs::write(&source, b"m4a").unwrap();
    let copied = dir.copy_in(&source).unwrap();

    assert!(dir.remove(&copied.file_name).unwrap());
    assert!(!dir.contains(&copied.file_name));
    // Second removal finds nothing and is not an error
    assert!(!dir.remove(&copied.file_name).unwrap());
}

#[test]
fn test_read_missing_file() {
    let (_temp, dir) = setup();
    assert!(matches!(
        dir.read("nothing.wav"),
        Err(ImportError::FileNotFound(_))
    ));
}
