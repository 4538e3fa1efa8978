use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use marbletree_core::{AttributeTest, Color, Size, Texture};

use crate::{CompiledScenario, ScenarioError};

const DEFAULT_SCENARIO_YAML: &str = include_str!("../config/marbles.default.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable scenario schema used for YAML IO and validation.
pub struct ScenarioSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// The fixed dataset a session starts from.
    pub items: Vec<ItemSpec>,
    /// The splitting questions offered to the player, in display order.
    pub questions: Vec<QuestionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A single dataset item declaration.
pub struct ItemSpec {
    pub id: u32,
    pub color: Color,
    pub size: Size,
    pub texture: Texture,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A named splitting question and its attribute test.
pub struct QuestionSpec {
    pub key: String,
    pub prompt: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub test: AttributeTest,
    /// Completed splits required before the question unlocks (defaults to 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_splits: Option<usize>,
}

impl ScenarioSpec {
    /// Parse a scenario from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScenarioError> {
        let spec: ScenarioSpec = serde_yaml::from_str(yaml)?;
        Ok(spec)
    }

    /// Return the canonical marble scenario included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SCENARIO_YAML
    }

    /// Parse the canonical marble scenario included with this crate.
    pub fn from_default_yaml() -> Result<Self, ScenarioError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Validate item ids, question keys, and prompts.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.items.is_empty() {
            return Err(ScenarioError::EmptyDataset);
        }

        // Item ids must be unique.
        let mut item_ids = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !item_ids.insert(item.id) {
                return Err(ScenarioError::DuplicateItemId { id: item.id });
            }
        }

        if self.questions.is_empty() {
            return Err(ScenarioError::NoQuestions);
        }

        // Question keys must be present, non-blank, and unique.
        let mut keys = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if question.key.trim().is_empty() {
                return Err(ScenarioError::BlankQuestionKey);
            }
            if question.prompt.trim().is_empty() {
                return Err(ScenarioError::BlankPrompt {
                    key: question.key.clone(),
                });
            }
            if !keys.insert(question.key.clone()) {
                return Err(ScenarioError::DuplicateQuestionKey {
                    key: question.key.clone(),
                });
            }
        }

        Ok(())
    }

    /// Compile this spec into the runtime dataset and question library.
    pub fn compile(&self) -> Result<CompiledScenario, ScenarioError> {
        CompiledScenario::from_spec(self)
    }
}
