//! Turning a sorted word list into a follows graph of its characters.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::AlphabetError;
use crate::graph::Graph;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\p{Alphabetic}+").unwrap();
}

/// Split raw input into words: runs of letters, separated by anything else.
pub fn words(input: &str) -> Vec<&str> {
    WORD.find_iter(input).map(|word| word.as_str()).collect()
}

/// The first pair of characters at which `prev` and `curr` differ, scanning
/// both from the start. `None` if one is a prefix of the other.
pub fn first_difference(prev: &str, curr: &str) -> Option<(char, char)> {
    prev.chars().zip(curr.chars()).find(|(p, c)| p != c)
}

fn insert_vertices(graph: &mut Graph<char>, word: &str) {
    word.chars().for_each(|c| graph.add_vertex(c));
}

/// Build the follows graph for a list of words sorted in the unknown
/// alphabet. Every character of every word becomes a vertex; each adjacent
/// pair of words contributes at most one edge, from the later word's
/// differing character to the earlier word's.
pub fn build_follows_graph<S: AsRef<str>>(words: &[S]) -> Result<Graph<char>, AlphabetError> {
    let (first, rest) = words.split_first().ok_or(AlphabetError::EmptyInput)?;

    let mut graph = Graph::new();
    let mut prev = first.as_ref();
    insert_vertices(&mut graph, prev);

    for curr in rest.iter().map(AsRef::as_ref) {
        insert_vertices(&mut graph, curr);

        match first_difference(prev, curr) {
            Some((earlier, later)) => {
                trace!(prev, curr, %earlier, %later, "ordering constraint");
                graph.add_edge(later, earlier)?;
            }
            None => trace!(prev, curr, "no differing character; pair skipped"),
        }

        prev = curr;
    }

    Ok(graph)
}
