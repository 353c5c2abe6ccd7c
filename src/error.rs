use thiserror::Error;

/// Returned when peeking at or popping from an empty [`ChainedList`].
///
/// `op` names the operation that failed (`"front"`, `"pop_back"`, ...).
///
/// [`ChainedList`]: crate::chained_list::ChainedList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{op} called on an empty list")]
pub struct UnderflowError {
    pub op: &'static str,
}

impl UnderflowError {
    pub(crate) const fn new(op: &'static str) -> Self {
        Self { op }
    }
}
