//! End-to-end catalog scenarios driven through the interactive session

use library_catalog::{Library, LibraryInterface, LibraryManager, Session};
use patterns_log::{Level, MemoryLogger};
use proptest::prelude::*;
use std::rc::Rc;

/// Run a scripted session and return the informational lines it logged
fn run_script(script: &str) -> (Vec<String>, Library) {
    let log = Rc::new(MemoryLogger::new());
    let manager = LibraryManager::new(Library::new(log.clone()), log.clone());
    let mut session = Session::new(script.as_bytes(), Vec::new(), manager, log.clone());
    session.run().expect("session failed");

    let (manager, _) = session.into_parts();
    let info = log
        .records()
        .into_iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, message)| message)
        .collect();
    (info, manager.into_inner())
}

#[test]
fn test_duplicate_title_then_show() {
    let (info, library) = run_script("add\nDune\nHerbert\n1965\nadd\nDune\nX\n1999\nshow\nexit\n");

    assert_eq!(
        info,
        vec![
            "Book 'Dune' added",
            "Book 'Dune' already exists",
            "Books in library:",
            "Title: Dune, Author: Herbert, Year: 1965",
        ]
    );
    assert_eq!(library.len(), 1);
}

#[test]
fn test_remove_missing_on_empty_catalog() {
    let (info, library) = run_script("remove\nNonexistent\nexit\n");

    assert_eq!(info, vec!["Book 'Nonexistent' not found"]);
    assert!(library.is_empty());
}

#[test]
fn test_commands_are_case_insensitive() {
    let (info, _) = run_script("  ADD \nEmma\nAusten\n1815\nRemove\nEmma\n Show\nEXIT\n");

    assert_eq!(
        info,
        vec!["Book 'Emma' added", "Book 'Emma' removed", "Library is empty"]
    );
}

#[test]
fn test_end_of_input_acts_as_exit() {
    let (info, library) = run_script("add\nDune\nHerbert\n1965\n");

    assert_eq!(info, vec!["Book 'Dune' added"]);
    assert_eq!(library.get_books()[0].author(), "Herbert");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// **Property: catalog keeps one book per title, first wins**
    /// *For any* sequence of adds, the catalog holds each distinct title once,
    /// in first-seen order, with the author of its first add.
    #[test]
    fn prop_first_add_wins(entries in prop::collection::vec(("[a-c]", "[a-z]{1,4}"), 0..12)) {
        let script: String = entries
            .iter()
            .map(|(title, author)| format!("add\n{}\n{}\n2000\n", title, author))
            .chain(std::iter::once("exit\n".to_string()))
            .collect();

        let (_, library) = run_script(&script);

        let mut expected: Vec<(String, String)> = Vec::new();
        for (title, author) in &entries {
            if !expected.iter().any(|(t, _)| t == title) {
                expected.push((title.clone(), author.clone()));
            }
        }
        let actual: Vec<(String, String)> = library
            .get_books()
            .iter()
            .map(|b| (b.title().to_string(), b.author().to_string()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
