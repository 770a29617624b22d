use clap::Parser;
use crew_relay::agents::{AgentRoster, Crew};
use crew_relay::config::Config;
use crew_relay::utils::init_tracing;
use std::sync::Arc;
use tracing::info;

/// Run the research/report crew once on a piece of text
#[derive(Parser, Debug)]
#[command(name = "worker", version, about)]
struct Args {
    /// Text handed to the researcher
    #[arg(
        long,
        short,
        default_value = "The new open-interpreter library is showing great promise for local code execution in AI agent systems."
    )]
    text: String,

    /// Also print the output of every step
    #[arg(long)]
    steps: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("crew_relay=info,worker=info");
    let args = Args::parse();

    let config = Config::from_env()?;
    let crew = Crew::new(Arc::new(AgentRoster::new()), config.llm);

    info!("--- Running Standalone Worker ---");
    let output = crew.kickoff(&args.text).await?;

    if args.steps {
        for step in &output.steps {
            println!("\n--- {} ({}) ---", step.key, step.agent_role);
            println!("{}", step.raw);
        }
    }

    println!("\n--- Final Result ---");
    println!("{}", output.raw);
    println!("--- End of Run ---");

    Ok(())
}
