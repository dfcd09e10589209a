use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use checktree::ui::terminal::supports_unicode;
use cli::{Cli, Commands};
use commands::show::cmd_show;
use commands::toggle::cmd_toggle;
use commands::validate::cmd_validate;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let unicode = !cli.ascii && supports_unicode();

    match cli.command {
        Commands::Show { definition } => cmd_show(&definition, cli.json, unicode),
        Commands::Toggle {
            definition,
            initial,
            toggles,
        } => cmd_toggle(&definition, initial.as_deref(), &toggles, cli.json, unicode),
        Commands::Validate { definition } => cmd_validate(&definition, cli.json, unicode),
    }
}
