use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::data_view::ColumnMetadata;

/// Opaque selection token correlating a rendered bar with a host data row.
///
/// The core only compares these and passes them back to the host; it never
/// interprets the raw key. Equality is structural: two tokens are equal iff
/// the issuing factory derived them from the same column source and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionId {
    raw: u64,
}

impl SelectionId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self { raw }
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.raw
    }
}

/// Host capability that issues selection identities for category rows.
pub trait IdentityFactory {
    fn identity_for_row(&self, column: &ColumnMetadata, row: usize) -> SelectionId;
}

/// Default factory hashing `(query_name, row)`.
///
/// Stable within a process, which is all the single-cycle view-model
/// lifetime needs; hosts with durable selection state supply their own
/// factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRowIdentityFactory;

impl IdentityFactory for CategoryRowIdentityFactory {
    fn identity_for_row(&self, column: &ColumnMetadata, row: usize) -> SelectionId {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        column.query_name.hash(&mut hasher);
        row.hash(&mut hasher);
        SelectionId::from_raw(hasher.finish())
    }
}
