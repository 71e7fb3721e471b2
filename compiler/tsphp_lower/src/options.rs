//! Lowering options.

/// Runtime library class the array hooks call into.
pub const DEFAULT_RUNTIME_NAMESPACE: &str = "Stdlib";

/// Options shared by every module lowered in one run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LowerOptions {
    /// Class prefixing runtime calls: `Stdlib::arrayMap(...)`.
    pub runtime_namespace: String,
    /// Treat non-empty interfaces and object type literals as arrays in
    /// array-type checks.
    pub array_like_objects: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        LowerOptions {
            runtime_namespace: DEFAULT_RUNTIME_NAMESPACE.to_owned(),
            array_like_objects: false,
        }
    }
}

impl LowerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_runtime_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.runtime_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_array_like_objects(mut self, enabled: bool) -> Self {
        self.array_like_objects = enabled;
        self
    }
}
