use serde::Serialize;

/// Enablement of a build plugin by identifier. Plugins carry no parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginActivation {
    pub id: String,
}
