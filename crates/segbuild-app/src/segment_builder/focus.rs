//! Keyboard focus ring for the segment modal

/// Focusable element of the segment modal
///
/// Ring order: name, each selected row, add chooser, add link, save, cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderFocus {
    /// Segment name input
    #[default]
    Name,
    /// Selected schema row (in-place editor)
    Row(usize),
    /// "Add schema to segment" chooser
    AddChooser,
    /// "+ Add new schema" link
    AddLink,
    /// "Save the Segment" button
    Save,
    /// "Cancel" button
    Cancel,
}

impl BuilderFocus {
    /// Next element in the ring, given the number of selected rows
    pub fn next(self, rows: usize) -> Self {
        match self {
            BuilderFocus::Name if rows > 0 => BuilderFocus::Row(0),
            BuilderFocus::Name => BuilderFocus::AddChooser,
            BuilderFocus::Row(i) if i + 1 < rows => BuilderFocus::Row(i + 1),
            BuilderFocus::Row(_) => BuilderFocus::AddChooser,
            BuilderFocus::AddChooser => BuilderFocus::AddLink,
            BuilderFocus::AddLink => BuilderFocus::Save,
            BuilderFocus::Save => BuilderFocus::Cancel,
            BuilderFocus::Cancel => BuilderFocus::Name,
        }
    }

    /// Previous element in the ring, given the number of selected rows
    pub fn previous(self, rows: usize) -> Self {
        match self {
            BuilderFocus::Name => BuilderFocus::Cancel,
            BuilderFocus::Row(0) => BuilderFocus::Name,
            BuilderFocus::Row(i) => BuilderFocus::Row((i - 1).min(rows.saturating_sub(1))),
            BuilderFocus::AddChooser if rows > 0 => BuilderFocus::Row(rows - 1),
            BuilderFocus::AddChooser => BuilderFocus::Name,
            BuilderFocus::AddLink => BuilderFocus::AddChooser,
            BuilderFocus::Save => BuilderFocus::AddLink,
            BuilderFocus::Cancel => BuilderFocus::Save,
        }
    }

    /// Keep a row focus pointing at an existing row after removals
    pub fn clamped(self, rows: usize) -> Self {
        match self {
            BuilderFocus::Row(_) if rows == 0 => BuilderFocus::AddChooser,
            BuilderFocus::Row(i) if i >= rows => BuilderFocus::Row(rows - 1),
            other => other,
        }
    }

    pub fn row(self) -> Option<usize> {
        match self {
            BuilderFocus::Row(i) => Some(i),
            _ => None,
        }
    }
}
