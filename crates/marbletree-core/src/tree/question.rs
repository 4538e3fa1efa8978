use serde::{Deserialize, Serialize};

use crate::tree::item::{Color, Item, Size, Texture};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Declarative boolean test over one item attribute.
pub enum AttributeTest {
    ColorIs(Color),
    SizeIs(Size),
    TextureIs(Texture),
    WeightAtLeast(u32),
}

impl AttributeTest {
    /// Evaluate the test against one item.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            AttributeTest::ColorIs(color) => item.color() == *color,
            AttributeTest::SizeIs(size) => item.size() == *size,
            AttributeTest::TextureIs(texture) => item.texture() == *texture,
            AttributeTest::WeightAtLeast(threshold) => item.weight() >= *threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A registered splitting question.
///
/// The `key` is the stable lookup symbol; the `prompt` is presentation text
/// only and never participates in resolution.
pub struct Question {
    key: String,
    prompt: String,
    test: AttributeTest,
    min_splits: usize,
}

impl Question {
    /// Create a question that is offered from the start of a session.
    pub fn new(key: impl Into<String>, prompt: impl Into<String>, test: AttributeTest) -> Self {
        Question {
            key: key.into(),
            prompt: prompt.into(),
            test,
            min_splits: 0,
        }
    }

    /// Create a question locked until the tree holds at least `min_splits`
    /// completed splits.
    pub fn gated(
        key: impl Into<String>,
        prompt: impl Into<String>,
        test: AttributeTest,
        min_splits: usize,
    ) -> Self {
        Question {
            key: key.into(),
            prompt: prompt.into(),
            test,
            min_splits,
        }
    }

    /// Return the stable lookup key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Return the display text shown to the player
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn test(&self) -> AttributeTest {
        self.test
    }

    pub fn min_splits(&self) -> usize {
        self.min_splits
    }

    /// Whether this question may be offered given the completed split count.
    pub fn available(&self, completed_splits: usize) -> bool {
        completed_splits >= self.min_splits
    }

    /// Evaluate this question's test against one item.
    pub fn check(&self, item: &Item) -> bool {
        self.test.matches(item)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fixed ordered collection of registered questions.
/// Order is preserved so the presentation layer can offer questions stably.
pub struct QuestionLibrary {
    questions: Vec<Question>,
}

impl QuestionLibrary {
    /// Create a library from the questions in display order.
    pub fn new(questions: Vec<Question>) -> Self {
        QuestionLibrary { questions }
    }

    /// Look up a question by its stable key.
    pub fn resolve(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.key() == key)
    }

    /// Return all registered questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
