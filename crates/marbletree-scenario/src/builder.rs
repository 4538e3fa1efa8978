use marbletree_core::{AttributeTest, Color, Size, Texture};

use crate::{CompiledScenario, ItemSpec, QuestionSpec, ScenarioError, ScenarioSpec};

#[derive(Debug, Clone, Default)]
/// Struct to build scenarios programmatically.
pub struct ScenarioBuilder {
    items: Vec<ItemSpec>,
    questions: Vec<QuestionSpec>,
}

impl ScenarioBuilder {
    /// Create a new ScenarioBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one dataset item.
    pub fn add_item(
        &mut self,
        id: u32,
        color: Color,
        size: Size,
        texture: Texture,
        weight: u32,
    ) -> &mut Self {
        self.items.push(ItemSpec {
            id,
            color,
            size,
            texture,
            weight,
        });
        self
    }

    /// Add a question offered from the start of a session.
    pub fn add_question(
        &mut self,
        key: impl Into<String>,
        prompt: impl Into<String>,
        test: AttributeTest,
    ) -> &mut Self {
        self.questions.push(QuestionSpec {
            key: key.into(),
            prompt: prompt.into(),
            test,
            min_splits: None,
        });
        self
    }

    /// Add a question locked until the tree holds `min_splits` completed splits.
    pub fn add_gated_question(
        &mut self,
        key: impl Into<String>,
        prompt: impl Into<String>,
        test: AttributeTest,
        min_splits: usize,
    ) -> &mut Self {
        self.questions.push(QuestionSpec {
            key: key.into(),
            prompt: prompt.into(),
            test,
            min_splits: Some(min_splits),
        });
        self
    }

    pub fn build_spec(self) -> Result<ScenarioSpec, ScenarioError> {
        let spec = ScenarioSpec {
            version: Some(1),
            items: self.items,
            questions: self.questions,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn compile(self) -> Result<CompiledScenario, ScenarioError> {
        let spec = self.build_spec()?;
        spec.compile()
    }
}
