//! Behavioural tests for the public suffix index API.

use sufidx::index::suffix_array::{Cursor, IndexConfig, IndexError, SuffixIndex};

fn collect(index: &SuffixIndex, pattern: &str) -> Vec<String> {
    index
        .search(pattern)
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .collect()
}

/// Every suffix of `text` starting with `pattern`, sorted
fn naive_matches(text: &str, pattern: &str) -> Vec<String> {
    let mut matches: Vec<String> = (0..text.len())
        .map(|i| text[i..].to_string())
        .filter(|s| s.starts_with(pattern))
        .collect();
    matches.sort();
    matches
}

#[test]
fn construct_keeps_text_and_counts_suffixes() {
    for text in ["", "a", "Szoveg Szoveg", "mississippi"] {
        let index = SuffixIndex::from(text);
        assert_eq!(index.text(), text.as_bytes());
        assert_eq!(index.suffix_count(), text.len());
    }
}

#[test]
fn copy_and_assign_are_independent() {
    let source = SuffixIndex::from("Szoveg Szoveg");

    let copy = source.clone();
    let mut assigned = SuffixIndex::from("");
    assigned.assign(&source);

    assert_eq!(collect(&copy, "oveg"), collect(&source, "oveg"));
    assert_eq!(collect(&assigned, "oveg"), collect(&source, "oveg"));

    assigned += &SuffixIndex::from(" oveg");
    assert_eq!(collect(&assigned, "oveg").len(), 3);
    assert_eq!(collect(&source, "oveg").len(), 2);
    assert_eq!(source.text(), b"Szoveg Szoveg");
}

#[test]
fn concatenation() {
    let mut a = SuffixIndex::from("Szoveg Szoveg");
    let b = SuffixIndex::from(" Szoveg");

    let joined = &a + &b;
    assert_eq!(joined.text(), b"Szoveg Szoveg Szoveg");
    assert_eq!(a.text(), b"Szoveg Szoveg");
    assert_eq!(b.text(), b" Szoveg");

    a += &b;
    assert_eq!(a.text(), b"Szoveg Szoveg Szoveg");
    assert_eq!(collect(&a, "Sz"), naive_matches("Szoveg Szoveg Szoveg", "Sz"));
}

#[test]
fn concatenation_by_value() {
    let tail = SuffixIndex::from("cd");
    let joined = SuffixIndex::from("ab") + &tail;
    assert_eq!(joined.text(), b"abcd");
    assert_eq!(joined, SuffixIndex::from("abcd"));
    assert_eq!(collect(&joined, "c"), vec!["cd"]);
    assert_eq!(tail.text(), b"cd");
}

#[test]
fn search_string_forms_agree() {
    let index = SuffixIndex::from("Szoveg Szoveg");
    let owned = String::from("oveg");
    assert_eq!(index.search("oveg"), index.search(&owned));
    assert_eq!(index.search(&b"oveg"[..]), index.search(owned));

    let index = SuffixIndex::from("asdasdasd");
    assert_eq!(index.search('d'), index.search("d"));
    assert_eq!(index.search(b'd'), index.search("d"));
}

#[test]
fn search_enumerates_in_lexicographic_order() {
    let index = SuffixIndex::from("Szoveg Szoveg");
    assert_eq!(collect(&index, "oveg"), vec!["oveg", "oveg Szoveg"]);
}

#[test]
fn search_single_char() {
    let index = SuffixIndex::from("asdasdasd");
    let mut it = index.search('d');
    assert_eq!(it.get(), Ok(&b"d"[..]));
    it.advance().unwrap();
    assert_eq!(it.get(), Ok(&b"dasd"[..]));
    it.advance().unwrap();
    assert_eq!(it.get(), Ok(&b"dasdasd"[..]));
    it.advance().unwrap();
    assert_eq!(it, index.end());
}

#[test]
fn search_in_empty_text() {
    let index = SuffixIndex::from("");
    assert_eq!(index.search("Hello"), index.end());
}

#[test]
fn search_matches_naive_enumeration() {
    let texts = ["mississippi", "abracadabra", "aaaaaa", "Hello World!"];
    let patterns = ["a", "ab", "abra", "ss", "i", "aa", "l", "o W", "zz", "!"];
    for text in texts {
        let index = SuffixIndex::from(text);
        for pattern in patterns {
            let expected = naive_matches(text, pattern);
            assert_eq!(collect(&index, pattern), expected, "{pattern:?} in {text:?}");
            assert_eq!(index.search(pattern).is_end(), expected.is_empty());
        }
    }
}

#[test]
fn iterator_terminus_and_errors() {
    let index = SuffixIndex::from("Szoveg Szoveg");
    let mut it = index.search("oveg");
    assert!(matches!(it.cursor(), Cursor::Active { .. }));

    let before = it.post_advance().unwrap();
    assert_ne!(before, it);
    assert_eq!(before.get(), Ok(&b"oveg"[..]));
    assert_eq!(it.get(), Ok(&b"oveg Szoveg"[..]));
    it.advance().unwrap();
    assert_eq!(it.cursor(), Cursor::Exhausted);
    assert_eq!(it, index.end());

    assert_eq!(it.advance().map(|_| ()), Err(IndexError::OutOfRange));
    assert_eq!(it.get(), Err(IndexError::OutOfRange));
}

#[test]
fn longest_common_substring() {
    let a = SuffixIndex::from("Hello World!");
    let b = SuffixIndex::from("xyzHelloxyzWorld!xzy");
    assert_eq!(&a & &b, b"World!");
    assert_eq!(&b & &a, b"World!");

    let a = SuffixIndex::from("asd");
    let b = SuffixIndex::from("xyz");
    assert!((&a & &b).is_empty());

    let a = SuffixIndex::from("asdfghjklmnopqrst");
    let b = SuffixIndex::from("sdflmnopdasdf");
    assert_eq!(&a & &b, b"lmnop");
    assert_eq!(&b & &a, b"lmnop");
}

#[test]
fn case_insensitive_index() {
    let config = IndexConfig {
        case_insensitive: true,
        ..Default::default()
    };
    let index = SuffixIndex::with_config("Szoveg SZOVEG", config);
    assert_eq!(index.text(), b"Szoveg SZOVEG");
    assert_eq!(collect(&index, "oveg"), vec!["OVEG", "oveg SZOVEG"]);
}
