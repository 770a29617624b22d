//! Researcher Agent
//!
//! First member of the crew. Reads the submitted text and produces the
//! analysis the writer builds on.

use super::pipeline::{PipelineStep, StepKey};
use super::Agent;

pub const ROLE: &str = "Senior Research Analyst";

pub fn researcher() -> Agent {
    Agent {
        role: ROLE.to_string(),
        goal: "Uncover groundbreaking technologies and analyze complex topics.".to_string(),
        backstory: "You're a renowned Senior Research Analyst, known for your ability to demystify complex subjects \
            and identify emerging trends. You have a knack for finding the most relevant information and presenting it clearly."
            .to_string(),
        allow_delegation: false,
    }
}

/// Analysis step: the only step that sees the raw task text
pub fn analysis_step<'a>(agent: &'a Agent, text_input: &str) -> PipelineStep<'a> {
    PipelineStep {
        key: StepKey::Analysis,
        description: format!(
            "Analyze the following text and identify the key points, main topic, and sentiment. \
            Here is the text to analyze:\n\n---\n{}\n---",
            text_input
        ),
        expected_output: "A concise bullet-point summary of the key findings, topic, and sentiment."
            .to_string(),
        agent,
        context_from: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_researcher_definition() {
        let agent = researcher();
        assert_eq!(agent.role, "Senior Research Analyst");
        assert!(!agent.allow_delegation);
    }

    #[test]
    fn test_analysis_step_embeds_text() {
        let agent = researcher();
        let step = analysis_step(&agent, "This is a test.");
        assert_eq!(step.key, StepKey::Analysis);
        assert!(step.description.contains("This is a test."));
        assert_eq!(step.agent, &agent);
        assert!(step.context_from.is_none());
    }

    #[test]
    fn test_analysis_step_accepts_empty_text() {
        let agent = researcher();
        let step = analysis_step(&agent, "");
        assert!(step.description.ends_with("---\n\n---"));
    }
}
