use clap::Parser;
use std::path::PathBuf;

use load_status::application::dto::SinkKind;
use load_status::loading::policies::OverflowPolicy;

/// Load a resource and report its progress on the console
#[derive(Parser, Debug)]
#[command(name = "load-status")]
#[command(version)]
#[command(about = "Load a resource and report its progress on the console", long_about = None)]
pub struct Args {
    /// Resource to load; omit or pass '-' to read stdin
    pub path: Option<PathBuf>,

    /// Bytes read between progress messages
    #[arg(short, long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Label of the elapsed-time report
    #[arg(short, long)]
    pub label: Option<String>,

    /// Percentages above 100: pass-through or clamp
    #[arg(long, value_name = "POLICY")]
    pub overflow: Option<OverflowPolicy>,

    /// Where messages go: stderr or tracing
    #[arg(short, long)]
    pub sink: Option<SinkKind>,

    /// Config file path (defaults to ./load-status.config.yml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Path of the resource, `None` meaning stdin
    pub fn resource_path(&self) -> Option<&PathBuf> {
        self.path
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
