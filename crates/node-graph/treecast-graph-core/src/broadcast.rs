//! Longest-list-with-repetition alignment of input columns.
//!
//! Grasshopper-style broadcasting: the branch dimension is aligned first,
//! then the item dimension inside each aligned branch, and in both cases a
//! shorter list repeats its **last** element to reach the longest length.
//! Mismatched lengths are never an error; alignment always succeeds once the
//! columns have passed the shape check in [`DataTree::from_value`].

use treecast_api_core::Value;

use crate::schema::Access;
use crate::tree::DataTree;

/// A coerced input column paired with its declared access mode.
#[derive(Clone, Debug)]
pub struct BoundColumn {
    pub access: Access,
    pub tree: DataTree<Value>,
}

impl BoundColumn {
    pub fn item(tree: DataTree<Value>) -> Self {
        BoundColumn {
            access: Access::Item,
            tree,
        }
    }

    pub fn list(tree: DataTree<Value>) -> Self {
        BoundColumn {
            access: Access::List,
            tree,
        }
    }
}

/// One fully aligned combination of per-input values, consumed by exactly
/// one invocation of the compute hook.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Lazily yield every aligned row across `columns`.
///
/// The iterator is pure: all state lives in the branch/item cursor, so the
/// consumer may do arbitrarily expensive work between calls to `next`.
pub fn broadcast_rows(columns: &[BoundColumn]) -> Rows<'_> {
    let outer_len = if columns.is_empty()
        || columns.iter().any(|c| c.tree.branch_count() == 0)
    {
        0
    } else {
        columns
            .iter()
            .map(|c| c.tree.branch_count())
            .max()
            .unwrap_or(0)
    };

    Rows {
        columns,
        outer_len,
        branch_idx: 0,
        item_idx: 0,
        inner_len: None,
    }
}

pub struct Rows<'a> {
    columns: &'a [BoundColumn],
    outer_len: usize,
    branch_idx: usize,
    item_idx: usize,
    /// Item count of the current branch position, computed on entry.
    inner_len: Option<usize>,
}

impl<'a> Rows<'a> {
    /// Branch selected for `column` at the current outer position, reusing
    /// the last branch when the column is shorter.
    fn selected_branch(&self, column: &'a BoundColumn) -> &'a [Value] {
        let count = column.tree.branch_count();
        let idx = self.branch_idx.min(count - 1);
        column.tree.branch(idx).unwrap_or(&[])
    }

    /// Row count for the current outer position: the longest item list among
    /// item-access columns. List-access columns contribute a single entry per
    /// branch, so they count as length one. An item-access column with an
    /// empty branch has no last item to repeat, which makes the position
    /// yield nothing.
    fn current_inner_len(&self) -> usize {
        let mut len = 1usize;
        for column in self.columns {
            if column.access != Access::Item {
                continue;
            }
            let branch = self.selected_branch(column);
            if branch.is_empty() {
                return 0;
            }
            len = len.max(branch.len());
        }
        len
    }

    fn build_row(&self) -> Row {
        let values = self
            .columns
            .iter()
            .map(|column| {
                let branch = self.selected_branch(column);
                match column.access {
                    Access::Item => branch[self.item_idx.min(branch.len() - 1)].clone(),
                    Access::List => Value::List(branch.to_vec()),
                }
            })
            .collect();
        Row { values }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        while self.branch_idx < self.outer_len {
            let inner = match self.inner_len {
                Some(len) => len,
                None => {
                    let len = self.current_inner_len();
                    self.inner_len = Some(len);
                    len
                }
            };
            if self.item_idx < inner {
                let row = self.build_row();
                self.item_idx += 1;
                return Some(row);
            }
            self.branch_idx += 1;
            self.item_idx = 0;
            self.inner_len = None;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[f64]) -> Vec<Value> {
        values.iter().map(|v| Value::f(*v)).collect()
    }

    #[test]
    fn shorter_item_list_repeats_its_last_item() {
        let a = BoundColumn::item(DataTree::from_items(items(&[1.0, 2.0])));
        let b = BoundColumn::item(DataTree::from_items(items(&[10.0])));
        let rows: Vec<Row> = broadcast_rows(&[a, b]).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values(), &[Value::f(1.0), Value::f(10.0)]);
        assert_eq!(rows[1].values(), &[Value::f(2.0), Value::f(10.0)]);
    }

    #[test]
    fn shorter_column_repeats_its_last_branch() {
        let a = BoundColumn::item(DataTree::from_branches(vec![
            items(&[1.0]),
            items(&[2.0]),
        ]));
        let b = BoundColumn::item(DataTree::from_items(items(&[5.0])));
        let rows: Vec<Row> = broadcast_rows(&[a, b]).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values(), &[Value::f(1.0), Value::f(5.0)]);
        assert_eq!(rows[1].values(), &[Value::f(2.0), Value::f(5.0)]);
    }

    #[test]
    fn list_access_hands_over_the_whole_branch() {
        let a = BoundColumn::item(DataTree::from_items(items(&[1.0, 2.0])));
        let b = BoundColumn::list(DataTree::from_items(items(&[7.0, 8.0, 9.0])));
        let rows: Vec<Row> = broadcast_rows(&[a, b]).collect();
        assert_eq!(rows.len(), 2);
        let expected = Value::List(items(&[7.0, 8.0, 9.0]));
        assert_eq!(rows[0].get(1), Some(&expected));
        assert_eq!(rows[1].get(1), Some(&expected));
    }

    #[test]
    fn degenerate_single_items_make_one_row() {
        let cols: Vec<BoundColumn> = (0..3)
            .map(|i| BoundColumn::item(DataTree::single(Value::f(i as f64))))
            .collect();
        assert_eq!(broadcast_rows(&cols).count(), 1);
    }

    #[test]
    fn empty_columns_make_no_rows() {
        let a = BoundColumn::item(DataTree::new());
        let b = BoundColumn::item(DataTree::new());
        assert_eq!(broadcast_rows(&[a, b]).count(), 0);
    }

    #[test]
    fn an_empty_branch_yields_nothing_for_its_position() {
        let a = BoundColumn::item(DataTree::from_branches(vec![
            items(&[1.0]),
            Vec::new(),
            items(&[3.0]),
        ]));
        let rows: Vec<Row> = broadcast_rows(&[a]).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values(), &[Value::f(1.0)]);
        assert_eq!(rows[1].values(), &[Value::f(3.0)]);
    }

    #[test]
    fn branch_length_law_holds() {
        // Outer lengths 3 and 1: the short column's only branch must appear
        // at every position past its end.
        let long = BoundColumn::item(DataTree::from_branches(vec![
            items(&[1.0]),
            items(&[2.0]),
            items(&[3.0]),
        ]));
        let short = BoundColumn::item(DataTree::from_items(items(&[9.0])));
        let rows: Vec<Row> = broadcast_rows(&[long, short]).collect();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.get(1), Some(&Value::f(9.0)));
        }
    }
}
