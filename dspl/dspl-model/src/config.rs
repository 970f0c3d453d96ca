use serde::{Deserialize, Serialize};

/// Switches for the optional document checks of [crate::validate].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report a dataset that declares no tables
    pub require_tables: bool,
    /// Report a slice without a table mapping
    pub require_slice_table: bool,
    /// Report a slice without a dimension drawn from the time dataset
    pub require_time_dimension: bool,
    /// Id of the dataset defining time concepts
    pub time_dataset_id: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_tables: true,
            require_slice_table: true,
            require_time_dimension: false,
            time_dataset_id: "time".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{ "require_time_dimension": true }"#).unwrap();

        assert_eq!(
            ValidationConfig {
                require_time_dimension: true,
                ..Default::default()
            },
            config
        );
    }
}
