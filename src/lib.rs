//! Given words known to be sorted according to some unknown alphabet, find one
//! ordering of that alphabet consistent with them.
//!
//! ```
//! let inference = alien_alphabet::infer(&["ba", "ab"]).unwrap();
//! assert_eq!(inference.ordering, vec!['b', 'a']);
//! ```

pub mod error;
pub mod graph;
pub mod relations;

use tracing::debug;

pub use crate::error::{AlphabetError, MissingVertex};
pub use crate::graph::Graph;
pub use crate::relations::{build_follows_graph, words};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    /// Every distinct character of the input, exactly once.
    pub ordering: Vec<char>,

    /// Constraints from the word list that `ordering` breaks, as
    /// `(earlier, later)` pairs. Only non-empty when the words contradict
    /// each other.
    pub contradictions: Vec<(char, char)>,
}

impl Inference {
    pub fn is_consistent(&self) -> bool {
        self.contradictions.is_empty()
    }

    /// The ordering, or an error naming the first broken constraint.
    pub fn strict(self) -> Result<Vec<char>, AlphabetError> {
        match self.contradictions.first() {
            None => Ok(self.ordering),
            Some(&(earlier, later)) => Err(AlphabetError::Contradiction { earlier, later }),
        }
    }
}

/// Infer an alphabet ordering from `words`. Contradictory input still
/// produces an ordering; check [`Inference::contradictions`] or use
/// [`Inference::strict`] to reject it.
pub fn infer<S: AsRef<str>>(words: &[S]) -> Result<Inference, AlphabetError> {
    let graph = build_follows_graph(words)?;
    debug!(%graph, "follows graph");

    let ordering = graph.topological_sort();
    let contradictions = graph
        .violations(&ordering)
        .into_iter()
        .map(|(later, earlier)| (earlier, later))
        .collect();

    Ok(Inference {
        ordering,
        contradictions,
    })
}
