#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Apply pixel filters (vignette, clarendon, rotation, ...) to BMP images
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Transform(commands::transform::TransformCmd),
    Inspect(commands::inspect::InspectCmd),
    ListFilters(commands::list_filters::ListFiltersCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Transform(cmd) => {
            commands::transform::handle_transform_command(cmd)?;
        }
        Commands::Inspect(cmd) => {
            commands::inspect::handle_inspect_command(cmd)?;
        }
        Commands::ListFilters(cmd) => {
            commands::list_filters::handle_list_filters_command(cmd);
        }
    }

    Ok(())
}
