use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) password: String,
}

/// Accepted as JSON, URL-encoded form, or XML. Absent fields decode as the
/// empty string.
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterData {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) password: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) name: String,
}
