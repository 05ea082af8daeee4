//! Options recognised by the process-id scalars filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::dataset::FieldAssociation;

/// Default name of the attached array.
pub const PROCESS_ID_ARRAY: &str = "ProcessId";

/// Whether the labels go on points or cells.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarMode {
    #[default]
    PointData,
    CellData,
}

impl ScalarMode {
    /// Field association targeted by this mode.
    pub fn association(self) -> FieldAssociation {
        match self {
            ScalarMode::PointData => FieldAssociation::Points,
            ScalarMode::CellData => FieldAssociation::Cells,
        }
    }
}

/// Filter configuration, fixed for the duration of one invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessIdScalarsConfig {
    /// Point or cell association of the generated array.
    pub scalar_mode: ScalarMode,
    /// Use one seeded random value in `[0, 1)` per piece instead of the index.
    pub random_mode: bool,
    /// Name the array is attached under.
    pub array_name: String,
}

impl Default for ProcessIdScalarsConfig {
    fn default() -> Self {
        Self {
            scalar_mode: ScalarMode::PointData,
            random_mode: false,
            array_name: PROCESS_ID_ARRAY.to_string(),
        }
    }
}

impl ProcessIdScalarsConfig {
    /// Label points (the default).
    pub fn point_data() -> Self {
        Self::default()
    }

    /// Label cells.
    pub fn cell_data() -> Self {
        Self::default().with_scalar_mode(ScalarMode::CellData)
    }

    /// Sets which elements get labelled.
    pub fn with_scalar_mode(mut self, scalar_mode: ScalarMode) -> Self {
        self.scalar_mode = scalar_mode;
        self
    }

    /// Chooses random labels over integer piece ids.
    pub fn with_random_mode(mut self, random_mode: bool) -> Self {
        self.random_mode = random_mode;
        self
    }

    /// Sets the name of the attached array.
    pub fn with_array_name(mut self, array_name: impl Into<String>) -> Self {
        self.array_name = array_name.into();
        self
    }
}

impl fmt::Display for ProcessIdScalarsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scalar Mode: {}", self.scalar_mode.association())?;
        writeln!(
            f,
            "Random Mode: {}",
            if self.random_mode { "On" } else { "Off" }
        )?;
        write!(f, "Array Name: {}", self.array_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_label_points_with_process_id() {
        let cfg = ProcessIdScalarsConfig::default();
        assert_eq!(cfg.scalar_mode, ScalarMode::PointData);
        assert!(!cfg.random_mode);
        assert_eq!(cfg.array_name, PROCESS_ID_ARRAY);
        assert_eq!(
            ProcessIdScalarsConfig::cell_data().scalar_mode.association(),
            FieldAssociation::Cells
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ProcessIdScalarsConfig =
            serde_json::from_str(r#"{ "scalar_mode": "cell_data", "random_mode": true }"#)
                .unwrap();
        assert_eq!(cfg.scalar_mode, ScalarMode::CellData);
        assert!(cfg.random_mode);
        assert_eq!(cfg.array_name, PROCESS_ID_ARRAY);
    }

    #[test]
    fn display_lists_options() {
        let text = ProcessIdScalarsConfig::cell_data()
            .with_random_mode(true)
            .to_string();
        assert!(text.contains("Scalar Mode: cell"));
        assert!(text.contains("Random Mode: On"));
        assert!(text.contains("Array Name: ProcessId"));
    }
}
