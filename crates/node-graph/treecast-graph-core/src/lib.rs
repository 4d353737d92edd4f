pub mod broadcast;
pub mod error;
pub mod eval;
pub mod schema;
pub mod tree;

pub use broadcast::{broadcast_rows, BoundColumn, Row, Rows};
pub use error::GraphError;
pub use eval::{eval_node, HostContext, LogHost, OutputMap, ResultRecord};
pub use schema::{registry, Access, NodeSignature, OutputSpec, PortSpec, Registry};
pub use tree::{DataTree, ShapeError};
