//! Column binding, the broadcast loop and per-output accumulation.

use hashbrown::HashMap;
use treecast_api_core::{coerce, CoercionError, Value};

use crate::broadcast::{broadcast_rows, BoundColumn, Row};
use crate::error::GraphError;
use crate::eval::host::HostContext;
use crate::eval::record::ResultRecord;
use crate::schema::{Access, NodeSignature, PortSpec};
use crate::tree::DataTree;

/// Per-output accumulated results. Every appended row contributes a
/// one-item branch, so a socket's value is itself a data tree.
pub type OutputMap = HashMap<String, DataTree<Value>>;

/// Normalise and coerce one raw payload per input port into a broadcast
/// column. Any coercion failure aborts the whole node evaluation.
pub fn bind_columns(
    inputs: &[PortSpec],
    raw: &[Value],
) -> Result<Vec<BoundColumn>, GraphError> {
    if inputs.len() != raw.len() {
        return Err(GraphError::InputArity {
            expected: inputs.len(),
            got: raw.len(),
        });
    }

    let mut columns = Vec::with_capacity(inputs.len());
    for (port, payload) in inputs.iter().zip(raw) {
        let tree =
            DataTree::from_value(payload.clone()).map_err(|source| GraphError::UnsupportedShape {
                input: port.id.clone(),
                source,
            })?;
        let tree = match port.access {
            Access::Item => tree.try_map(|item| coerce_for_port(port, item))?,
            Access::List => coerce_list_branches(&tree, port)?,
        };
        columns.push(BoundColumn {
            access: port.access,
            tree,
        });
    }
    Ok(columns)
}

/// Coerce one raw item against its port. An `optional` input with no usable
/// value passes through as `Null` instead of raising the missing-value error
/// a required numeric input gets.
fn coerce_for_port(port: &PortSpec, item: &Value) -> Result<Value, CoercionError> {
    match coerce(item, port.tag, port.default.as_ref()) {
        Err(CoercionError::Missing { .. }) if port.optional => Ok(Value::Null),
        result => result,
    }
}

/// List-access coercion: items are coerced individually, and a branch whose
/// raw items are all absent collapses to the empty list.
fn coerce_list_branches(
    tree: &DataTree<Value>,
    port: &PortSpec,
) -> Result<DataTree<Value>, GraphError> {
    let mut branches = Vec::with_capacity(tree.branch_count());
    for branch in tree.branches() {
        if !branch.is_empty() && branch.iter().all(Value::is_absent) {
            branches.push(Vec::new());
            continue;
        }
        let mut coerced = Vec::with_capacity(branch.len());
        for item in branch {
            coerced.push(coerce_for_port(port, item)?);
        }
        branches.push(coerced);
    }
    Ok(DataTree::from_branches(branches))
}

/// Evaluate one node: bind the inputs, broadcast, invoke `hook` once per
/// aligned row and collect its record into per-output trees.
///
/// Outputs a hook never names stay as empty trees; outputs it names only on
/// some rows receive entries for those rows alone, with no placeholder for
/// the others. Record names matching no declared output are reported through
/// `ctx.warn` and dropped. The first error from coercion or the hook
/// propagates unchanged and no partial map is returned.
pub fn eval_node<H, F>(
    sig: &NodeSignature,
    raw: &[Value],
    ctx: &H,
    mut hook: F,
) -> Result<OutputMap, GraphError>
where
    H: HostContext + ?Sized,
    F: FnMut(&Row) -> Result<ResultRecord, GraphError>,
{
    let columns = bind_columns(&sig.inputs, raw)?;

    let mut outputs: OutputMap = OutputMap::with_capacity(sig.outputs.len());
    for output in &sig.outputs {
        outputs.insert(output.id.clone(), DataTree::new());
    }

    for row in broadcast_rows(&columns) {
        let record = hook(&row)?;
        for (name, value) in record {
            match outputs.get_mut(&name) {
                Some(tree) => tree.push_branch(vec![value]),
                None => ctx.warn(&format!(
                    "node '{}' produced undeclared output '{name}'",
                    sig.type_id
                )),
            }
        }
    }

    Ok(outputs)
}
