use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "numbridge")]
#[command(about = "numbridge CLI", long_about = None)]
pub struct Cli {
    /// Log filter (e.g. `debug`, `cli=trace`). Defaults to $RUST_LOG, then `info`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the index, presentation and static documents over HTTP
    Serve {
        /// TOML config file (defaults to ./numbridge.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding templates/, static/ and presentation.html
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Install the natives into an in-process host and evaluate calls from stdin
    Host,
    /// Invoke one native and print its JSON result
    Call {
        /// Exported name, e.g. `goFibonacci`
        name: String,
        /// Arguments as JSON values (`10`, `[1,2,3]`); anything else is passed as a string
        #[arg(allow_hyphen_values = true, num_args = 0..)]
        args: Vec<String>,
    },
    /// List exported natives and their arity
    List,
}
