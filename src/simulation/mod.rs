pub mod compare;
pub mod driver;
pub mod feedback;

pub use compare::{compare, CompareConfig, Comparison};
pub use driver::{run_simulation, SimulationConfig, SimulationRun};
pub use feedback::{FeedbackSource, ScriptedFeedback, UniformFeedback};
