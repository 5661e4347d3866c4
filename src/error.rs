//! Error type for the chart pipeline.

use crate::surface::NodeId;

/// Errors surfaced by the rendering pipeline.
///
/// Unknown or ill-typed options are never reported here: they are dropped
/// during translation and only logged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The mount point (or another node handle) does not exist on the surface.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// A grid track template or placement could not be parsed.
    #[error("invalid track template {template:?}: {reason}")]
    Template { template: String, reason: String },

    /// The resolved option tree did not match the typed settings.
    #[error("resolved settings are malformed: {0}")]
    Settings(#[source] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Settings;
    use serde_json::json;
    use std::error::Error as _;

    #[test]
    fn settings_error_keeps_its_source() {
        let tree = json!({ "title": { "draw": true } });
        let err = Settings::from_tree(tree.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
        assert!(err.to_string().starts_with("resolved settings are malformed"));
        assert!(err.source().is_some());
    }
}
