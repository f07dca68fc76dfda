use clap::Parser;
use wtr_core::{Config, Orchestrator, WtrError, config::API_KEY_ENV, service_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wtr",
    version,
    about = "wtr is a command-line weather application. \
             It shows the weather for the given locations."
)]
pub struct Cli {
    /// Location to get weather for.
    #[arg(required = true, num_args = 1..)]
    pub location: Vec<String>,

    /// Show the weather for the next week starting from today.
    #[arg(short, long)]
    pub week: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        let service = match service_from_config(&config) {
            Ok(service) => service,
            Err(WtrError::MissingApiKey) => {
                println!("{}", missing_key_notice());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let orchestrator = Orchestrator::new(service, self.week);
        let mut stdout = std::io::stdout().lock();
        orchestrator.run(&self.location, &mut stdout).await?;

        Ok(())
    }
}

fn missing_key_notice() -> String {
    match Config::config_file_path() {
        Ok(path) => format!(
            "No API key configured. Set {API_KEY_ENV} or add api_key to {}.",
            path.display()
        ),
        Err(_) => format!("No API key configured. Set {API_KEY_ENV}."),
    }
}
