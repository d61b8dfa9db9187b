use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use walkdir::WalkDir;

use imageset::{export_split_layout, DatasetLayout};

fn seed_collection(data_dir: &Path) {
    for (class, train_files, test_files) in [
        ("cirrus", vec!["wisp.jpg", "curl.jpg"], vec!["held.jpg"]),
        ("cumulus", vec!["puff.jpg"], vec![]),
        ("stratus", vec![], vec![]),
    ] {
        let dir = data_dir.join(class);
        fs::create_dir_all(&dir).unwrap();
        if !test_files.is_empty() {
            fs::create_dir_all(dir.join("test")).unwrap();
        }
        for name in train_files {
            fs::write(dir.join(name), name.as_bytes()).unwrap();
        }
        for name in test_files {
            fs::write(dir.join("test").join(name), name.as_bytes()).unwrap();
        }
    }
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (rel, fs::read(entry.path()).unwrap())
        })
        .collect()
}

#[test]
fn layout_export_flattens_into_split_first_directories() {
    let temp = tempdir().unwrap();
    let data_dir = temp.path().join("clouds-images");
    fs::create_dir(&data_dir).unwrap();
    seed_collection(&data_dir);

    let layout = DatasetLayout::new(&data_dir);
    let index = export_split_layout(&layout).unwrap();
    assert_eq!(index.num_classes(), 3);

    let train_dir = layout.train_dir();
    let test_dir = layout.test_dir();
    assert!(train_dir.join("cirrus").join("wisp.jpg").is_file());
    assert!(train_dir.join("cirrus").join("curl.jpg").is_file());
    assert!(train_dir.join("cumulus").join("puff.jpg").is_file());
    assert!(test_dir.join("cirrus").join("held.jpg").is_file());
    assert_eq!(
        fs::read(test_dir.join("cirrus").join("held.jpg")).unwrap(),
        b"held.jpg"
    );

    // Classes without files in a split still get their directory.
    assert!(train_dir.join("stratus").is_dir());
    assert!(test_dir.join("stratus").is_dir());
    assert!(test_dir.join("cumulus").is_dir());
}

#[test]
fn repeating_the_export_changes_nothing() {
    let temp = tempdir().unwrap();
    let data_dir = temp.path().join("clouds-images");
    fs::create_dir(&data_dir).unwrap();
    seed_collection(&data_dir);

    let layout = DatasetLayout::new(&data_dir);
    export_split_layout(&layout).unwrap();
    let first_train = snapshot(&layout.train_dir());
    let first_test = snapshot(&layout.test_dir());
    assert!(!first_train.is_empty());

    export_split_layout(&layout).unwrap();
    assert_eq!(snapshot(&layout.train_dir()), first_train);
    assert_eq!(snapshot(&layout.test_dir()), first_test);
}
