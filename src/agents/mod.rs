//! Agent System
//!
//! Two role-bound agents turn a free-text task into a finished report:
//!
//! - **Researcher**: analyzes the submitted text
//! - **Writer**: turns the analysis into a publishable report
//!
//! ## Pipeline Overview
//!
//! ```text
//! Task text
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Researcher  │  → analysis step (text embedded in the prompt)
//! └─────────────┘
//!      │ analysis output
//!      ▼
//! ┌─────────────┐
//! │   Writer    │  → report step (analysis threaded in as context)
//! └─────────────┘
//!      │
//!      ▼
//!  Final report
//! ```

pub mod researcher;
pub mod writer;
pub mod pipeline;
pub mod crew;

pub use crew::{Crew, TaskRunner};
pub use pipeline::{CrewOutput, Pipeline, PipelineStep, StepKey, StepOutput};

/// Role-bound configuration used to frame every LLM call of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub allow_delegation: bool,
}

impl Agent {
    /// System prompt describing who the agent is
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {role}. {backstory}\nYour personal goal is: {goal}",
            role = self.role,
            backstory = self.backstory,
            goal = self.goal,
        )
    }
}

/// The two agents of the crew. Built once per process and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRoster {
    pub researcher: Agent,
    pub writer: Agent,
}

impl AgentRoster {
    pub fn new() -> Self {
        Self {
            researcher: researcher::researcher(),
            writer: writer::writer(),
        }
    }
}

impl Default for AgentRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_mentions_role_and_goal() {
        let roster = AgentRoster::new();
        let prompt = roster.researcher.system_prompt();
        assert!(prompt.starts_with("You are Senior Research Analyst."));
        assert!(prompt.contains(&roster.researcher.goal));
    }

    #[test]
    fn test_roster_is_deterministic() {
        assert_eq!(AgentRoster::new(), AgentRoster::default());
    }
}
