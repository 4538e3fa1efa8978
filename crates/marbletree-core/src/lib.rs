mod tree;

pub use tree::error::SplitError;
pub use tree::history::History;
pub use tree::ids::{ItemId, NodeId, NodeIdAllocator};
pub use tree::impurity::{class_counts, gini};
pub use tree::item::{Color, Item, Size, Texture};
pub use tree::node::Node;
pub use tree::question::{AttributeTest, Question, QuestionLibrary};
pub use tree::session::{QuestionChoice, Session};
pub use tree::snapshot::{NodeSnapshot, TreeSnapshot};
pub use tree::split::apply_split;
