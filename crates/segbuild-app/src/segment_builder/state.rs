//! Segment builder state: the draft, the pending choice and the selection rules.

use segbuild_core::prelude::*;
use segbuild_core::{find_field, SchemaField, SubmissionPayload, SCHEMA_CATALOG};

use super::focus::BuilderFocus;

/// Identity of one opened builder
///
/// A new id is handed out every time the modal opens, so a late delivery
/// result can tell whether the draft it belongs to still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuilderId(pub u64);

impl std::fmt::Display for BuilderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "builder-{}", self.0)
    }
}

/// Unsaved segment: a name plus ordered, duplicate-free catalog fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentDraft {
    pub name: String,
    pub selection: Vec<&'static SchemaField>,
}

impl SegmentDraft {
    pub fn contains(&self, key: &str) -> bool {
        self.selection.iter().any(|field| field.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.selection.iter().position(|field| field.key == key)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.selection.iter().map(|field| field.key).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.selection.is_empty()
    }
}

/// Form state owned by one open segment modal
#[derive(Debug, Clone)]
pub struct SegmentBuilderState {
    id: BuilderId,
    draft: SegmentDraft,
    /// Chosen in the "add schema" chooser but not yet added
    pending: Option<&'static SchemaField>,
    /// Set while a delivery is in flight
    submitting: bool,
    pub focus: BuilderFocus,
}

impl SegmentBuilderState {
    pub fn new(id: BuilderId) -> Self {
        Self {
            id,
            draft: SegmentDraft::default(),
            pending: None,
            submitting: false,
            focus: BuilderFocus::default(),
        }
    }

    pub fn id(&self) -> BuilderId {
        self.id
    }

    pub fn draft(&self) -> &SegmentDraft {
        &self.draft
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn selection(&self) -> &[&'static SchemaField] {
        &self.draft.selection
    }

    pub fn selected_keys(&self) -> Vec<&'static str> {
        self.draft.keys()
    }

    pub fn pending(&self) -> Option<&'static SchemaField> {
        self.pending
    }

    /// Pending key, `""` meaning no pending choice
    pub fn pending_key(&self) -> &'static str {
        self.pending.map(|field| field.key).unwrap_or("")
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ─────────────────────────────────────────────────────────
    // Name
    // ─────────────────────────────────────────────────────────

    /// Replace the name verbatim
    pub fn set_name(&mut self, text: impl Into<String>) {
        self.draft.name = text.into();
    }

    pub fn input_char(&mut self, c: char) {
        self.draft.name.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.name.pop();
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Set the pending choice. `""` clears it.
    ///
    /// Only catalog keys that are not already selected are accepted.
    pub fn select_pending(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            self.pending = None;
            return Ok(());
        }
        let field = find_field(key).ok_or_else(|| Error::unknown_schema(key))?;
        if self.draft.contains(key) {
            return Err(Error::duplicate_schema(key));
        }
        self.pending = Some(field);
        Ok(())
    }

    /// Append the pending choice and clear it.
    ///
    /// Returns `false` (and changes nothing) when there is no pending choice
    /// or it is already selected.
    pub fn commit_pending(&mut self) -> bool {
        match self.pending {
            Some(field) if !self.draft.contains(field.key) => {
                self.draft.selection.push(field);
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Replace the field at `index` in place.
    ///
    /// `key` may be the field already at `index`; otherwise it must not be
    /// selected anywhere else.
    pub fn edit_at(&mut self, index: usize, key: &str) -> Result<()> {
        let len = self.draft.selection.len();
        if index >= len {
            return Err(Error::selection_index(index, len));
        }
        let field = find_field(key).ok_or_else(|| Error::unknown_schema(key))?;
        if let Some(existing) = self.draft.position(key) {
            if existing != index {
                return Err(Error::duplicate_schema(key));
            }
        }
        self.draft.selection[index] = field;

        // The pending choice must stay outside the selection.
        if self.pending.is_some_and(|p| p.key == field.key) {
            self.pending = None;
        }
        Ok(())
    }

    /// Remove the field at `index`, if any
    pub fn remove_at(&mut self, index: usize) -> Option<&'static SchemaField> {
        if index >= self.draft.selection.len() {
            return None;
        }
        let removed = self.draft.selection.remove(index);
        self.focus = self.focus.clamped(self.draft.selection.len());
        Some(removed)
    }

    /// Remove the field with `key`, returning whether it was selected
    pub fn remove_by_key(&mut self, key: &str) -> bool {
        match self.draft.position(key) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Catalog fields not yet selected, in catalog order.
    ///
    /// Recomputed from the current selection on every call.
    pub fn available_choices(&self) -> impl Iterator<Item = &'static SchemaField> + '_ {
        SCHEMA_CATALOG
            .iter()
            .filter(move |field| !self.draft.contains(field.key))
    }

    /// Choices for the in-place editor of row `index`: everything not
    /// selected plus the field currently at `index`.
    pub fn choices_for_editing(
        &self,
        index: usize,
    ) -> impl Iterator<Item = &'static SchemaField> + '_ {
        let current = self.draft.selection.get(index).map(|field| field.key);
        SCHEMA_CATALOG.iter().filter(move |field| {
            Some(field.key) == current || !self.draft.contains(field.key)
        })
    }

    /// Step the pending chooser through `""` followed by the available choices
    pub fn cycle_pending(&mut self, forward: bool) {
        let mut options: Vec<&'static str> = vec![""];
        options.extend(self.available_choices().map(|field| field.key));

        let current = options
            .iter()
            .position(|key| *key == self.pending_key())
            .unwrap_or(0);
        let next = step(current, options.len(), forward);

        // Every option comes from the available set, so this cannot fail.
        if let Err(e) = self.select_pending(options[next]) {
            warn!("pending chooser produced an invalid key: {}", e);
        }
    }

    /// Step row `index` through its editing choices
    pub fn cycle_row(&mut self, index: usize, forward: bool) -> Result<()> {
        let current = self
            .draft
            .selection
            .get(index)
            .map(|field| field.key)
            .ok_or_else(|| Error::selection_index(index, self.draft.selection.len()))?;
        let options: Vec<&'static str> = self
            .choices_for_editing(index)
            .map(|field| field.key)
            .collect();
        let position = options.iter().position(|key| *key == current).unwrap_or(0);
        let next = step(position, options.len(), forward);
        self.edit_at(index, options[next])
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Whether the draft is complete enough to save
    pub fn can_submit(&self) -> bool {
        !self.draft.name.trim().is_empty() && !self.draft.selection.is_empty()
    }

    /// Payload for the current draft, or `None` when it cannot be submitted
    pub fn submission(&self) -> Option<SubmissionPayload> {
        self.can_submit().then(|| {
            SubmissionPayload::from_selection(
                self.draft.name.clone(),
                self.draft.selection.iter().copied(),
            )
        })
    }

    /// Start a submission.
    ///
    /// Returns the payload to send and marks the builder busy, or `None`
    /// when the draft is incomplete or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.submitting {
            return None;
        }
        let payload = self.submission()?;
        self.submitting = true;
        Some(payload)
    }

    /// Finish the in-flight submission; a successful one clears the draft
    pub fn complete_submit(&mut self, delivered: bool) {
        self.submitting = false;
        if delivered {
            self.reset();
        }
    }

    /// Clear name, selection and pending choice
    pub fn reset(&mut self) {
        self.draft = SegmentDraft::default();
        self.pending = None;
        self.focus = BuilderFocus::Name;
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
