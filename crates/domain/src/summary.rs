// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order summary assembly and the summary working copy.

use crate::types::{ItemUpdate, ItemsByCategory, LineItemKey, OrderLineItem};

/// Flattens every category's lines into the order summary.
///
/// Categories are visited in first-insertion order and lines keep their
/// order within a category. Only lines with a positive quantity are kept.
#[must_use]
pub fn assemble_summary(items: &ItemsByCategory) -> Vec<OrderLineItem> {
    items
        .values()
        .flatten()
        .filter(|item| item.quantity > 0)
        .cloned()
        .collect()
}

/// A detached working copy of the order summary.
///
/// Edits and removals apply to the copy only. Nothing here writes back to
/// the order store; the copy is what an export or submission consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryDraft {
    lines: Vec<OrderLineItem>,
}

impl SummaryDraft {
    /// Creates a draft from the current summary of `items`.
    #[must_use]
    pub fn from_items(items: &ItemsByCategory) -> Self {
        Self {
            lines: assemble_summary(items),
        }
    }

    /// Creates a draft from lines the caller already holds.
    #[must_use]
    pub const fn from_lines(lines: Vec<OrderLineItem>) -> Self {
        Self { lines }
    }

    /// Returns the draft lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLineItem] {
        &self.lines
    }

    /// Applies a single-field edit to the line with `key`.
    ///
    /// Returns `false` if the draft has no such line.
    pub fn edit(&mut self, key: &LineItemKey, update: ItemUpdate) -> bool {
        match self.lines.iter_mut().find(|line| &line.id == key) {
            Some(line) => {
                line.apply_update(update);
                true
            }
            None => false,
        }
    }

    /// Removes the line with `key`.
    ///
    /// Returns `false` if the draft has no such line.
    pub fn remove(&mut self, key: &LineItemKey) -> bool {
        let before: usize = self.lines.len();
        self.lines.retain(|line| &line.id != key);
        self.lines.len() != before
    }

    /// Returns the lines that would be exported: those with a positive quantity.
    #[must_use]
    pub fn ordered_lines(&self) -> Vec<OrderLineItem> {
        self.lines
            .iter()
            .filter(|line| line.quantity > 0)
            .cloned()
            .collect()
    }

    /// Returns whether the draft has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the draft, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<OrderLineItem> {
        self.lines
    }
}
