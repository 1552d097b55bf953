use crate::error::QueryError;
use crate::location::{LocationStore, MemoryLocation};
use crate::query::QueryMap;

#[test]
fn new_accepts_relative_path() {
    let location = MemoryLocation::new("/search?q=rust#results").unwrap();

    assert_eq!(location.path(), "/search");
    assert_eq!(location.search(), "?q=rust");
    assert_eq!(location.fragment().as_deref(), Some("results"));
    assert_eq!(location.href(), "/search?q=rust#results");
    assert_eq!(location.history_len(), 1);
}

#[test]
fn new_accepts_absolute_url() {
    let location = MemoryLocation::new("https://example.com/a/b?x=1").unwrap();

    assert_eq!(location.href(), "/a/b?x=1");
}

#[test]
fn new_rejects_invalid_url() {
    let err = MemoryLocation::new("http://[::1").unwrap_err();

    assert!(matches!(err, QueryError::InvalidUrl { ref href, .. } if href == "http://[::1"));
}

#[test]
fn read_parses_current_query() {
    let location = MemoryLocation::new("/?a=1&b=two+words").unwrap();
    let query = location.read().unwrap();

    assert_eq!(query.get("a"), Some("1"));
    assert_eq!(query.get("b"), Some("two words"));
}

#[test]
fn read_without_query_is_empty() {
    let location = MemoryLocation::new("/page").unwrap();

    assert!(location.read().unwrap().is_empty());
}

#[test]
fn replace_keeps_path_and_fragment() {
    let location = MemoryLocation::new("/docs/intro?old=1#top").unwrap();
    let query = QueryMap::parse("new=2");

    location.replace(&query).unwrap();

    assert_eq!(location.href(), "/docs/intro?new=2#top");
    assert_eq!(location.replace_count(), 1);
}

#[test]
fn replace_with_empty_map_drops_question_mark() {
    let location = MemoryLocation::new("/docs?old=1").unwrap();

    location.replace(&QueryMap::new()).unwrap();

    assert_eq!(location.href(), "/docs");
    assert_eq!(location.search(), "");
}

#[test]
fn replace_does_not_grow_history() {
    let location = MemoryLocation::new("/").unwrap();

    for n in 0..5 {
        let query: QueryMap = [("n", n.to_string())].into_iter().collect();
        location.replace(&query).unwrap();
    }

    assert_eq!(location.history_len(), 1);
    assert_eq!(location.replace_count(), 5);
}

#[test]
fn push_grows_history() {
    let location = MemoryLocation::new("/a").unwrap();

    location.push("/b?x=1").unwrap();

    assert_eq!(location.href(), "/b?x=1");
    assert_eq!(location.history_len(), 2);
}

#[test]
fn set_search_simulates_external_writer() {
    let location = MemoryLocation::new("/list?page=2").unwrap();

    location.set_search("?page=3&sort=name");

    assert_eq!(location.search(), "?page=3&sort=name");
    assert_eq!(location.history_len(), 1);
    assert_eq!(location.replace_count(), 0);
}
