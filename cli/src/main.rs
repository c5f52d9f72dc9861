use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::serve::ServeOverrides;
use cli::commands::{call, host, list, serve};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Serve {
            config,
            host: bind_host,
            port,
            root,
        } => serve::serve(
            config.as_deref(),
            ServeOverrides {
                host: bind_host,
                port,
                root,
            },
        ),
        Commands::Host => host::run_host(),
        Commands::Call { name, args } => call::run_call(&name, &args),
        Commands::List => {
            list::run_list();
            Ok(())
        }
    }
}
