mod builder;
mod compiled;
mod error;
mod io;
mod spec;

pub use builder::ScenarioBuilder;
pub use compiled::CompiledScenario;
pub use error::ScenarioError;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use spec::{ItemSpec, QuestionSpec, ScenarioSpec};
