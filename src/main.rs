use clap::Parser;
use emprega_admin::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings, &cli)?;

    execute_command(cli, settings, environment).await
}
