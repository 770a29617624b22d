//! Crew runner
//!
//! Assembles the researcher/writer pipeline for one task and runs it to the
//! end. Failures inside the run are wrapped once into `AppError::Execution`;
//! configuration problems surface unchanged before any model call.

use super::pipeline::{CrewOutput, GenerationSettings, Pipeline};
use super::{researcher, writer, AgentRoster};
use crate::config::LLMConfig;
use crate::llm::LLM;
use crate::types::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Anything that can turn task text into a final result
#[async_trait]
pub trait TaskRunner: Send + Sync {
    async fn run(&self, text: &str) -> AppResult<String>;
}

#[derive(Debug, Clone)]
pub struct Crew {
    roster: Arc<AgentRoster>,
    llm: LLMConfig,
}

impl Crew {
    pub fn new(roster: Arc<AgentRoster>, llm: LLMConfig) -> Self {
        Self { roster, llm }
    }

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    /// Build the two-step pipeline for `text_input`
    pub fn create_pipeline<'a>(roster: &'a AgentRoster, text_input: &str) -> AppResult<Pipeline<'a>> {
        Pipeline::sequential(
            vec![&roster.researcher, &roster.writer],
            vec![
                researcher::analysis_step(&roster.researcher, text_input),
                writer::report_step(&roster.writer),
            ],
        )
    }

    pub async fn kickoff(&self, text_input: &str) -> AppResult<CrewOutput> {
        let llm = LLM::from_config(&self.llm)?;

        let preview: String = text_input.chars().take(50).collect();
        info!(provider = %llm.provider_name(), "Initializing crew to analyze text: '{}...'", preview);
        let pipeline = Self::create_pipeline(&self.roster, text_input)?;

        let settings = GenerationSettings {
            model: &self.llm.model,
            temperature: Some(self.llm.temperature),
            max_tokens: self.llm.max_tokens,
        };

        info!("Crew kickoff...");
        match pipeline.execute(&llm, settings).await {
            Ok(output) => {
                info!(result_len = output.raw.len(), "Crew execution finished.");
                Ok(output)
            }
            Err(e) => {
                error!(error = %e, "An error occurred during crew execution");
                Err(AppError::Execution(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl TaskRunner for Crew {
    async fn run(&self, text: &str) -> AppResult<String> {
        self.kickoff(text).await.map(|output| output.raw)
    }
}
