/// Traversal status of a vertex.
///
/// Within a single traversal run, a vertex only ever moves forward through
/// `White`, `Gray` and `Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,

    /// Discovered, but some successors may not have been explored.
    Gray,

    /// All successors have been explored.
    Black,
}

impl Color {
    pub fn is_white(&self) -> bool {
        matches!(self, Color::White)
    }

    pub fn is_gray(&self) -> bool {
        matches!(self, Color::Gray)
    }

    pub fn is_black(&self) -> bool {
        matches!(self, Color::Black)
    }
}
