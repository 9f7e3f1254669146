use serde::{Deserialize, Serialize};

/// How numbers of different sub-kinds relate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Integers and doubles compare by mathematical value: `3 == 3.0`.
    #[default]
    CrossKind,
    /// Integers (signed or unsigned) never equal doubles. All integers order
    /// before all doubles.
    Strict,
}

/// Comparator configuration.
///
/// Deserializable so hosts can carry it in their own configuration files;
/// missing fields take their defaults.
///
/// ```
/// use docval::{CompareOptions, NumberPolicy};
///
/// let options: CompareOptions = serde_json::from_str(r#"{"number_policy": "strict"}"#).unwrap();
/// assert_eq!(options.number_policy, NumberPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub number_policy: NumberPolicy,
}

impl CompareOptions {
    pub fn with_number_policy(mut self, number_policy: NumberPolicy) -> Self {
        self.number_policy = number_policy;
        self
    }
}
