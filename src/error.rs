use std::fmt::Debug;

use thiserror::Error;

/// An edge was requested out of a vertex the graph has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex {0:?} is not in the graph")]
pub struct MissingVertex<V: Debug>(pub V);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("no words given; at least one word is needed to infer an alphabet")]
    EmptyInput,

    /// The word list disagrees with itself: it says `earlier` comes before
    /// `later`, but some other pair of words says the opposite.
    #[error("contradictory ordering: '{earlier}' must come before '{later}', but it doesn't")]
    Contradiction { earlier: char, later: char },

    #[error(transparent)]
    MissingVertex(#[from] MissingVertex<char>),
}
