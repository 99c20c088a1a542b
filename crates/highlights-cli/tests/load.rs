//! Offline load cycles over local CSV exports.

use std::fs;

use highlights_cli::load::{SheetOrigin, file_spec, load_collection, read_local_sheets};
use highlights_model::{LoadState, SheetRole};

#[test]
fn file_stem_names_the_sheet() {
    let spec = file_spec(std::path::Path::new("exports/Book Highlights.csv"));
    assert_eq!(spec.name, "Book Highlights");
    assert_eq!(spec.role, SheetRole::Combined);
}

#[test]
fn unreadable_file_becomes_a_failed_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("books.csv");
    fs::write(&good, "book_id,title\n1,Dune\n").unwrap();
    let missing = dir.path().join("highlights.csv");

    let sheets = read_local_sheets(&[good, missing]);
    assert_eq!(sheets.len(), 2);
    assert!(!sheets[0].is_failed());
    assert_eq!(sheets[0].rows, vec![vec!["1".to_string(), "Dune".to_string()]]);
    assert!(sheets[1].is_failed());
    assert!(
        sheets[1]
            .error
            .as_deref()
            .unwrap()
            .starts_with("Failed to load sheet 'highlights'")
    );
}

#[tokio::test]
async fn local_cycle_commits_a_ready_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Book Highlights.csv");
    fs::write(
        &path,
        "book_id,title,highlight\n1,Dune,\"Fear, the mind-killer\"\n,Orphan,lost\n",
    )
    .unwrap();

    let state = load_collection(&SheetOrigin::Files(vec![path])).await;
    let LoadState::Ready(collection) = state else {
        panic!("local load did not produce a collection");
    };
    assert_eq!(collection.books.len(), 1);
    assert_eq!(collection.highlights_for("1")[0].highlight, "Fear, the mind-killer");
    assert!(collection.highlights_for("").is_empty());
}
