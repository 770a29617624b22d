//! Writer Agent
//!
//! Final member of the crew. Compiles the researcher's analysis into a report.

use super::pipeline::{PipelineStep, StepKey};
use super::Agent;

pub const ROLE: &str = "Professional Content Writer";

pub fn writer() -> Agent {
    Agent {
        role: ROLE.to_string(),
        goal: "Craft compelling and easy-to-understand content from technical findings.".to_string(),
        backstory: "You are a professional writer with a talent for making complex topics accessible. \
            You can transform dense, technical information into engaging narratives that resonate with a broad audience."
            .to_string(),
        allow_delegation: true,
    }
}

/// Report step. Its description is fixed; the analysis arrives as context.
pub fn report_step(agent: &Agent) -> PipelineStep<'_> {
    PipelineStep {
        key: StepKey::Report,
        description: "Using the analysis provided by the researcher, compile a brief, easy-to-read report. \
            The report should be structured with a clear title, a summary of the analysis, and a concluding thought."
            .to_string(),
        expected_output: "A well-formatted report in Markdown that is ready for publication.".to_string(),
        agent,
        context_from: Some(StepKey::Analysis),
    }
}
