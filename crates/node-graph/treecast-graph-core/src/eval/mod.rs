//! Evaluation pipeline for treecast nodes.
//!
//! The `eval` module turns a [`NodeSignature`](crate::schema::NodeSignature)
//! plus raw socket payloads into per-output trees. The submodules keep the
//! concerns isolated:
//!
//! - [`record`] is the explicit per-row result record built by compute hooks.
//! - [`host`] is the seam through which adapters reach the host editor.
//! - [`run_node`] binds and coerces the input columns, drives the broadcast
//!   loop and accumulates results per output socket.
//!
//! Integration code should primarily interact with [`eval_node`].

mod host;
mod record;
mod run_node;

pub use host::{HostContext, LogHost};
pub use record::ResultRecord;
pub use run_node::{bind_columns, eval_node, OutputMap};
