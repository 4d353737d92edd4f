//! The explicit seam between the engine and the host node editor.
//!
//! The original system reached into an ambient, process-wide component
//! handle for warnings and re-scheduling. Adapters here receive a
//! [`HostContext`] instead, so there is no module-level singleton to leak
//! state between node instances.

/// Host-editor services a node adapter may need during evaluation.
pub trait HostContext {
    /// Surface a non-fatal warning on the node.
    fn warn(&self, message: &str);

    /// Show or hide the output socket at `index`.
    fn set_output_visibility(&self, index: usize, visible: bool);

    /// Ask the host to re-run this node on the next graph pass.
    fn reschedule(&self);
}

/// A headless host that routes warnings through the `log` facade and
/// ignores editor-only requests. Useful for batch runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHost;

impl HostContext for LogHost {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn set_output_visibility(&self, index: usize, visible: bool) {
        log::debug!("output {index} visibility -> {visible} (no editor attached)");
    }

    fn reschedule(&self) {
        log::debug!("reschedule requested (no editor attached)");
    }
}
