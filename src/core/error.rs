use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("adding edge {src:?} -> {dst:?} failed: {kind}")]
pub struct AddEdgeError<T: fmt::Debug> {
    pub src: T,
    pub dst: T,
    pub kind: AddEdgeErrorKind,
}

impl<T: fmt::Debug> AddEdgeError<T> {
    pub fn new(src: T, dst: T, kind: AddEdgeErrorKind) -> Self {
        Self { src, dst, kind }
    }

    /// Gives the rejected endpoints back.
    pub fn into_endpoints(self) -> (T, T) {
        (self.src, self.dst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
        };
        f.write_str(reason)
    }
}
