use std::env;
use std::fs;

use qsim::{run_batch, BatchConfig, Scenario, ServiceQueue, TimeUnit};

const USAGE: &str = "usage:
  qsim '<durations json>' <stations>     evaluate one scenario, e.g. qsim '[2,2,3,3,4,4]' 2
  qsim --file <scenarios.json> [--parallel]
                                         evaluate a JSON list of {durations, stations}";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--file") => {
            let path = args.get(1).ok_or(USAGE)?;
            let body = fs::read_to_string(path)?;
            let scenarios: Vec<Scenario> = serde_json::from_str(&body)?;

            let config = if args.iter().any(|a| a == "--parallel") {
                BatchConfig::parallel()
            } else {
                BatchConfig::sequential()
            };

            for total in run_batch(&scenarios, &config)? {
                println!("{}", total);
            }
        }
        Some(durations_json) => {
            let stations: usize = args.get(1).ok_or(USAGE)?.parse()?;
            let durations: Vec<TimeUnit> = serde_json::from_str(durations_json)?;
            let scenario = Scenario::new(ServiceQueue::new(durations), stations);
            println!("{}", scenario.queue_time()?);
        }
        None => return Err(USAGE.into()),
    }

    Ok(())
}
