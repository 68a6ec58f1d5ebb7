//! Selection round trip against the host's selection manager.
//!
//! The click handler emits a [`SelectRequest`]; the host answers, possibly
//! much later and possibly out of request order, with a [`SelectResponse`]
//! carrying its current ordered selection set. The repaint applies whichever
//! response arrives last — no request is cancelled, so a stale response may
//! still apply before the next one lands.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::host::SelectionId;
use crate::layout::DIMMED_OPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectRequest {
    pub identity: SelectionId,
    /// Always multi-select toggle; the host resolves modifier semantics.
    pub allow_multi: bool,
}

impl SelectRequest {
    #[must_use]
    pub const fn multi_toggle(identity: SelectionId) -> Self {
        Self {
            identity,
            allow_multi: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectResponse {
    pub selected: IndexSet<SelectionId>,
}

impl SelectResponse {
    #[must_use]
    pub fn new(selected: IndexSet<SelectionId>) -> Self {
        Self { selected }
    }

    /// The empty response, which restores full opacity everywhere.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Opacity a bar renders at under the given selection set.
///
/// A non-empty set dims every non-member; an empty set restores full
/// opacity for all bars.
#[must_use]
pub fn selection_opacity(identity: SelectionId, selected: &IndexSet<SelectionId>) -> f64 {
    if selected.is_empty() || selected.contains(&identity) {
        1.0
    } else {
        DIMMED_OPACITY
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use super::selection_opacity;
    use crate::host::SelectionId;

    #[test]
    fn empty_selection_restores_full_opacity() {
        let selected = IndexSet::new();
        assert_eq!(selection_opacity(SelectionId::from_raw(1), &selected), 1.0);
    }

    #[test]
    fn members_are_full_and_non_members_dimmed() {
        let selected: IndexSet<_> = [SelectionId::from_raw(1)].into_iter().collect();
        assert_eq!(selection_opacity(SelectionId::from_raw(1), &selected), 1.0);
        assert_eq!(selection_opacity(SelectionId::from_raw(2), &selected), 0.5);
    }
}
