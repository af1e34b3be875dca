mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use load_status::adapters::outbound::filesystem::{FileResourceSource, StdinResourceSource};
use load_status::application::dto::{LoadRequest, SinkKind, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use load_status::application::factories::{CallbacksFactory, SinkFactory};
use load_status::application::use_cases::LoadResourceUseCase;
use load_status::loading::domain::DEFAULT_TIMER_LABEL;
use load_status::loading::policies::OverflowPolicy;
use load_status::loading::services::StatusReporter;
use load_status::logging;
use load_status::ports::inbound::LoadResourcePort;
use load_status::ports::outbound::ResourceSource;
use load_status::shared::error::{ExitCode, LoadStatusError};
use load_status::shared::Result;
use std::process;

/// Effective settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    label: String,
    chunk_size: usize,
    overflow: OverflowPolicy,
    sink: SinkKind,
    color: bool,
}

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            let code = e
                .downcast_ref::<LoadStatusError>()
                .map(LoadStatusError::exit_code)
                .unwrap_or(ExitCode::ApplicationError);
            process::exit(code.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)?.unwrap_or_default()
        }
    };
    let settings = resolve_settings(&args, &config)?;

    if settings.sink == SinkKind::Tracing {
        logging::init(settings.color)?;
    }

    let sink = SinkFactory::create(settings.sink, settings.color);
    let reporter = StatusReporter::new(sink)
        .with_label(settings.label.clone())
        .with_overflow_policy(settings.overflow);
    let callbacks = CallbacksFactory::create(reporter);

    let source: Box<dyn ResourceSource> = match args.resource_path() {
        Some(path) => Box::new(FileResourceSource::new(path.clone())),
        None => Box::new(StdinResourceSource::new()),
    };
    let use_case = LoadResourceUseCase::new(source, callbacks);

    match use_case.load(LoadRequest::new(settings.chunk_size)) {
        Ok(response) => {
            println!(
                "Loaded {} bytes from {}",
                response.bytes_loaded, response.resource
            );
            Ok(ExitCode::Success)
        }
        // Already reported through on_failure
        Err(e) => Ok(e
            .downcast_ref::<LoadStatusError>()
            .map(LoadStatusError::exit_code)
            .unwrap_or(ExitCode::ApplicationError)),
    }
}

fn resolve_settings(args: &Args, config: &ConfigFile) -> Result<Settings> {
    let label = args
        .label
        .clone()
        .or_else(|| config.label.clone())
        .unwrap_or_else(|| DEFAULT_TIMER_LABEL.to_string());
    if label.trim().is_empty() {
        return Err(LoadStatusError::InvalidConfig {
            message: "label must not be empty".to_string(),
            hint: "Use a short name such as \"initializer\"".to_string(),
        }
        .into());
    }

    let chunk_size = args
        .chunk_size
        .or(config.chunk_size)
        .unwrap_or(DEFAULT_CHUNK_SIZE);
    if chunk_size == 0 {
        return Err(LoadStatusError::InvalidConfig {
            message: "chunk size must be greater than 0".to_string(),
            hint: "Pass --chunk-size with a positive byte count".to_string(),
        }
        .into());
    }
    if chunk_size > MAX_CHUNK_SIZE {
        return Err(LoadStatusError::InvalidConfig {
            message: format!(
                "chunk size {} exceeds the maximum of {} bytes",
                chunk_size, MAX_CHUNK_SIZE
            ),
            hint: "Pass a smaller --chunk-size".to_string(),
        }
        .into());
    }

    Ok(Settings {
        label,
        chunk_size,
        overflow: match args.overflow {
            Some(policy) => policy,
            None => config.overflow_policy()?.unwrap_or_default(),
        },
        sink: match args.sink {
            Some(kind) => kind,
            None => config.sink_kind()?.unwrap_or_default(),
        },
        color: !args.no_color && config.color.unwrap_or(true),
    })
}
