use serde::{Deserialize, Serialize};

/// One step of a deal pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    /// Close probability in percent
    pub probability: u8,
    /// Hex colour, `#RRGGBB`
    pub color: String,
}

/// A named pipeline whose stage order defines deal progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub name: String,
    pub stages: Vec<Stage>,
}

impl PipelineSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    /// Append a stage after the existing ones
    pub fn stage(mut self, name: impl Into<String>, probability: u8, color: impl Into<String>) -> Self {
        self.stages.push(Stage {
            name: name.into(),
            probability,
            color: color.into(),
        });
        self
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}
