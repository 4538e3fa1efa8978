use marbletree_core::{Item, ItemId, Question, QuestionLibrary, Session};

use crate::{ScenarioError, ScenarioSpec};

#[derive(Debug, Clone)]
/// Runtime form of a scenario: the dataset plus the compiled question library.
pub struct CompiledScenario {
    dataset: Vec<Item>,
    library: QuestionLibrary,
}

impl CompiledScenario {
    /// Compile and validate a spec into its runtime form.
    pub(crate) fn from_spec(spec: &ScenarioSpec) -> Result<Self, ScenarioError> {
        spec.validate()?;

        let dataset = spec
            .items
            .iter()
            .map(|item| {
                Item::new(
                    ItemId::from(item.id),
                    item.color,
                    item.size,
                    item.texture,
                    item.weight,
                )
            })
            .collect();

        let questions = spec
            .questions
            .iter()
            .map(|question| match question.min_splits {
                Some(min_splits) => Question::gated(
                    question.key.clone(),
                    question.prompt.clone(),
                    question.test,
                    min_splits,
                ),
                None => Question::new(
                    question.key.clone(),
                    question.prompt.clone(),
                    question.test,
                ),
            })
            .collect();

        Ok(CompiledScenario {
            dataset,
            library: QuestionLibrary::new(questions),
        })
    }

    /// Return the compiled dataset in declaration order.
    pub fn dataset(&self) -> &[Item] {
        &self.dataset
    }

    /// Return the compiled question library.
    pub fn library(&self) -> &QuestionLibrary {
        &self.library
    }

    pub fn item_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn question_count(&self) -> usize {
        self.library.len()
    }

    /// Start an interactive session over this scenario.
    pub fn session(&self) -> Session {
        Session::new(self.dataset.clone(), self.library.clone())
    }
}
