//! Whole-day ferry table as JSON on stdout.

use chrono::Local;

use ferry_planner::planner::{OutputMode, PlanError, Planner, PlannerConfig};
use ferry_planner::transport::{TransportClient, TransportConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    ferry_planner::logging::init("warn");

    let config = PlannerConfig::ferry_table();

    match run(&config).await {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(config: &PlannerConfig) -> Result<String, PlanError> {
    let transport = TransportClient::new(TransportConfig::default())?;
    Planner::new(&transport, config)
        .run(OutputMode::Table, Local::now().fixed_offset())
        .await
}
