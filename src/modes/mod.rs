pub mod agent;
pub mod human;

pub use agent::{AgentConfig, AgentMode, EpisodeSummary, PolicyKind};
pub use human::HumanMode;
