//! The two-level "data tree" container carried by node sockets.
//!
//! A tree is an ordered list of branches, each branch an ordered list of
//! items. Socket payloads arrive from the host as a scalar, a flat list or a
//! list of lists; [`DataTree::from_value`] normalises all three into the
//! explicit container and rejects anything deeper or mixed.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use treecast_api_core::Value;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("value is neither a scalar nor a two-level nested list (found {found})")]
pub struct ShapeError {
    pub found: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTree<T> {
    branches: Vec<Vec<T>>,
}

impl<T> Default for DataTree<T> {
    fn default() -> Self {
        DataTree {
            branches: Vec::new(),
        }
    }
}

impl<T> DataTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_branches(branches: Vec<Vec<T>>) -> Self {
        DataTree { branches }
    }

    /// One branch holding the given items.
    pub fn from_items(items: Vec<T>) -> Self {
        DataTree {
            branches: vec![items],
        }
    }

    /// One branch holding one item.
    pub fn single(item: T) -> Self {
        DataTree {
            branches: vec![vec![item]],
        }
    }

    pub fn push_branch(&mut self, branch: Vec<T>) {
        self.branches.push(branch);
    }

    pub fn branches(&self) -> &[Vec<T>] {
        &self.branches
    }

    pub fn branch(&self, index: usize) -> Option<&[T]> {
        self.branches.get(index).map(Vec::as_slice)
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// True when the tree holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.branches.iter().all(Vec::is_empty)
    }

    /// Total number of items across all branches.
    pub fn len_items(&self) -> usize {
        self.branches.iter().map(Vec::len).sum()
    }

    pub fn iter_items(&self) -> impl Iterator<Item = &T> {
        self.branches.iter().flatten()
    }

    /// Coerce every item through `f`, preserving the branch structure.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<DataTree<U>, E> {
        let mut branches = Vec::with_capacity(self.branches.len());
        for branch in &self.branches {
            let mut mapped = Vec::with_capacity(branch.len());
            for item in branch {
                mapped.push(f(item)?);
            }
            branches.push(mapped);
        }
        Ok(DataTree { branches })
    }
}

impl DataTree<Value> {
    /// Normalise a raw socket payload into a tree.
    ///
    /// A scalar becomes a single-item tree, a flat list becomes one branch,
    /// and a list whose entries are all lists becomes the branches directly.
    /// An empty list holds no branches at all, so it broadcasts to zero rows
    /// under either access mode. A list mixing nested and plain entries has
    /// no defensible alignment and fails before any row is produced.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        match value {
            Value::List(items) => {
                if items.is_empty() {
                    return Ok(DataTree::new());
                }
                let nested = items.iter().filter(|v| matches!(v, Value::List(_))).count();
                if nested == 0 {
                    Ok(DataTree::from_items(items))
                } else if nested == items.len() {
                    let branches = items
                        .into_iter()
                        .map(|item| match item {
                            Value::List(inner) => inner,
                            _ => unreachable!(),
                        })
                        .collect();
                    Ok(DataTree::from_branches(branches))
                } else {
                    Err(ShapeError {
                        found: "a list mixing nested lists and plain items".to_string(),
                    })
                }
            }
            scalar => Ok(DataTree::single(scalar)),
        }
    }
}
