use serde::Serialize;

/// A named boolean build toggle such as `multiDexEnabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFlag {
    pub key: String,
    pub value: bool,
}
