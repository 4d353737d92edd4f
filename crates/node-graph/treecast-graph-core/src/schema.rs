//! Declarative node signatures.
//!
//! A signature describes a node's socket layout only: named, typed inputs
//! with defaults and access modes, plus named outputs. The computation behind
//! a signature is supplied by the host adapter as a compute hook, so a
//! catalog of signatures is plain data that hosts can export as JSON.

use serde::{Deserialize, Serialize};
use treecast_api_core::{TypeTag, Value};

/// How a row sees an input: one aligned item at a time, or the whole branch.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Item,
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub doc: String,
    pub tag: TypeTag,
    #[serde(default)]
    pub access: Access,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default)]
    pub optional: bool,
}

impl PortSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>, tag: TypeTag) -> Self {
        PortSpec {
            id: id.into(),
            label: label.into(),
            doc: String::new(),
            tag,
            access: Access::Item,
            default: None,
            optional: false,
        }
    }

    pub fn list(mut self) -> Self {
        self.access = Access::List;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub doc: String,
}

impl OutputSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        OutputSpec {
            id: id.into(),
            label: label.into(),
            doc: String::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSignature {
    pub type_id: String,
    pub name: String,
    pub category: String,
    pub inputs: Vec<PortSpec>,
    pub outputs: Vec<OutputSpec>,
}

impl NodeSignature {
    pub fn new(
        type_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        NodeSignature {
            type_id: type_id.into(),
            name: name.into(),
            category: category.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: PortSpec) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn input(&self, id: &str) -> Option<&PortSpec> {
        self.inputs.iter().find(|p| p.id == id)
    }

    pub fn output(&self, id: &str) -> Option<&OutputSpec> {
        self.outputs.iter().find(|o| o.id == id)
    }
}

/// A host-facing catalog of signatures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub version: String,
    pub nodes: Vec<NodeSignature>,
}

impl Registry {
    pub fn new(version: impl Into<String>) -> Self {
        Registry {
            version: version.into(),
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, signature: NodeSignature) {
        self.nodes.push(signature);
    }

    pub fn find(&self, type_id: &str) -> Option<&NodeSignature> {
        self.nodes.iter().find(|n| n.type_id == type_id)
    }
}

/// Built-in generic signatures shipped with the engine.
///
/// Domain nodes are data-driven and registered by host adapters on top of
/// this catalog; the utilities here need no external computation.
pub fn registry() -> Registry {
    let mut registry = Registry::new("1");

    registry.push(
        NodeSignature::new("util.passthrough", "Passthrough", "Util")
            .with_input(
                PortSpec::new("in", "In", TypeTag::Object)
                    .with_doc("Any value, forwarded unchanged"),
            )
            .with_output(OutputSpec::new("out", "Out")),
    );

    registry.push(
        NodeSignature::new("util.gate", "Gate", "Util")
            .with_input(PortSpec::new("value", "Value", TypeTag::Object))
            .with_input(
                PortSpec::new("open", "Open", TypeTag::Bool)
                    .with_default(Value::Bool(true))
                    .optional(),
            )
            .with_output(OutputSpec::new("out", "Out")),
    );

    registry.push(
        NodeSignature::new("util.merge", "Merge", "Util")
            .with_input(PortSpec::new("a", "A", TypeTag::Object).list())
            .with_input(PortSpec::new("b", "B", TypeTag::Object).list())
            .with_output(OutputSpec::new("out", "Out")),
    );

    registry
}
