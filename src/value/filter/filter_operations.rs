use super::filter_operation::*;
use super::super::blend::*;

use smallvec::*;
use serde::{Serialize, Deserialize};

use std::iter::FromIterator;

///
/// An ordered list of filter operations, applied one after the other
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct FilterOperations {
    operations: SmallVec<[FilterOperation; 2]>
}

impl FromIterator<FilterOperation> for FilterOperations {
    fn from_iter<T: IntoIterator<Item=FilterOperation>>(iter: T) -> FilterOperations {
        FilterOperations {
            operations: iter.into_iter().collect()
        }
    }
}

impl FilterOperations {
    ///
    /// Creates an empty list of filters
    ///
    pub fn new() -> FilterOperations {
        FilterOperations {
            operations: smallvec![]
        }
    }

    pub fn operations(&self) -> &[FilterOperation] {
        &self.operations
    }

    #[inline] pub fn len(&self) -> usize { self.operations.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.operations.is_empty() }

    pub fn append(&mut self, operation: FilterOperation) {
        self.operations.push(operation);
    }

    ///
    /// True if any of the filters in this list can move pixels (and so make the area the layer covers larger)
    ///
    pub fn has_filter_that_moves_pixels(&self) -> bool {
        self.operations.iter().any(|operation| operation.moves_pixels())
    }

    ///
    /// True if any of the filters in this list can change the transparency of the layer
    ///
    pub fn has_filter_that_affects_opacity(&self) -> bool {
        self.operations.iter().any(|operation| operation.affects_opacity())
    }
}

impl Blend for FilterOperations {
    ///
    /// Blends from another list of filters to this one
    ///
    /// The operations the two lists have in common must be of the same kind, or this list is returned unchanged.
    /// Operations that only one list has are blended against their no-op.
    ///
    fn blend(&self, from: &FilterOperations, progress: f64) -> FilterOperations {
        let shorter_len = usize::min(self.len(), from.len());
        let longer_len  = usize::max(self.len(), from.len());

        let kinds_match = self.operations[0..shorter_len].iter()
            .zip(from.operations[0..shorter_len].iter())
            .all(|(to, from)| to.is_same_kind(from));

        if !kinds_match {
            return self.clone();
        }

        (0..longer_len)
            .filter_map(|idx| FilterOperation::blend_operations(from.operations.get(idx), self.operations.get(idx), progress))
            .collect()
    }
}
