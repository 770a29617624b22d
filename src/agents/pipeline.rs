//! Sequential step execution
//!
//! Steps run strictly in declaration order. A step that needs an earlier
//! step's output says so through `context_from`; the executor threads that
//! output into its prompt. Nothing is shared between runs.

use super::Agent;
use crate::llm::LLM;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKey {
    Analysis,
    Report,
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKey::Analysis => write!(f, "analysis"),
            StepKey::Report => write!(f, "report"),
        }
    }
}

/// One unit of work bound to one agent
#[derive(Debug, Clone)]
pub struct PipelineStep<'a> {
    pub key: StepKey,
    pub description: String,
    pub expected_output: String,
    pub agent: &'a Agent,
    /// Step whose output this step consumes as context
    pub context_from: Option<StepKey>,
}

impl PipelineStep<'_> {
    /// User prompt for this step, with the upstream output when one is declared
    pub fn prompt(&self, context: Option<&str>) -> String {
        let mut prompt = self.description.clone();
        if let Some(context) = context {
            prompt.push_str("\n\nThis is the context you're working with:\n");
            prompt.push_str(context);
        }
        prompt.push_str("\n\nThis is the expected criteria for your final answer: ");
        prompt.push_str(&self.expected_output);
        prompt.push_str("\nYou MUST return the actual complete content as the final answer, not a summary.");
        prompt
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationSettings<'a> {
    pub model: &'a str,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub key: StepKey,
    pub agent_role: String,
    pub raw: String,
}

/// Result of a full run: the last step's text plus the per-step trace
#[derive(Debug, Clone, PartialEq)]
pub struct CrewOutput {
    pub raw: String,
    pub steps: Vec<StepOutput>,
}

#[derive(Debug)]
pub struct Pipeline<'a> {
    agents: Vec<&'a Agent>,
    steps: Vec<PipelineStep<'a>>,
}

impl<'a> Pipeline<'a> {
    /// Compose a sequential pipeline. Every declared context must come from a
    /// step placed earlier in the list.
    pub fn sequential(agents: Vec<&'a Agent>, steps: Vec<PipelineStep<'a>>) -> AppResult<Self> {
        if steps.is_empty() {
            return Err(AppError::Unexpected("Pipeline has no steps".to_string()));
        }

        for (index, step) in steps.iter().enumerate() {
            if let Some(required) = step.context_from {
                if !steps[..index].iter().any(|earlier| earlier.key == required) {
                    return Err(AppError::Unexpected(format!(
                        "Step '{}' needs the output of '{}', which does not run before it",
                        step.key, required
                    )));
                }
            }
            if !agents.iter().any(|agent| *agent == step.agent) {
                return Err(AppError::Unexpected(format!(
                    "Step '{}' is assigned to '{}', who is not part of the crew",
                    step.key, step.agent.role
                )));
            }
        }

        Ok(Self { agents, steps })
    }

    pub fn agents(&self) -> &[&'a Agent] {
        &self.agents
    }

    pub fn steps(&self) -> &[PipelineStep<'a>] {
        &self.steps
    }

    pub async fn execute(&self, llm: &LLM, settings: GenerationSettings<'_>) -> AppResult<CrewOutput> {
        let mut outputs: Vec<StepOutput> = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let context = match step.context_from {
                Some(required) => Some(
                    outputs
                        .iter()
                        .find(|output| output.key == required)
                        .map(|output| output.raw.as_str())
                        .ok_or_else(|| {
                            AppError::Unexpected(format!("Missing output of step '{}'", required))
                        })?,
                ),
                None => None,
            };

            info!(step = %step.key, agent = %step.agent.role, "Executing step");

            let request = LLMRequest {
                model: settings.model.to_string(),
                messages: vec![LLMMessage::user(step.prompt(context))],
                max_tokens: settings.max_tokens,
                temperature: settings.temperature,
                system_instruction: Some(step.agent.system_prompt()),
            };

            let response = llm.create_chat_completion(&request).await?;
            debug!(
                step = %step.key,
                output_len = response.content.len(),
                total_tokens = response.usage.total_tokens,
                "Step finished"
            );

            outputs.push(StepOutput {
                key: step.key,
                agent_role: step.agent.role.clone(),
                raw: response.content,
            });
        }

        let raw = outputs
            .last()
            .map(|output| output.raw.clone())
            .unwrap_or_default();

        Ok(CrewOutput { raw, steps: outputs })
    }
}
