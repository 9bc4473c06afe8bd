//! CLI entrypoint for hybridctl
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hybridctl_application::{
    CapabilityProbe, ConfirmPolicy, ConfirmationPort, ControlPorts, FixedCapabilityProbe,
    HybridModeControl, HybridModeControlFactory, HybridModeFeature,
};
use hybridctl_domain::{
    ControlKind, HybridModeState, TransitionOutcome, TransitionRequest, has_errors,
};
use hybridctl_infrastructure::{
    CommandRestart, ConfigLoader, FileConfig, JsonlTransitionLogger, SysfsCapabilityProbe,
    SysfsHybridModeFeature,
};
use hybridctl_presentation::{
    Cli, ConsolePresenter, InteractiveConfirmation, OutputConfig, ProbeProgress, StatusReport,
    TransitionReport,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if has_errors(&issues) {
        bail!("Configuration has errors; fix them or run with --no-config");
    }

    let output = OutputConfig::resolve(
        cli.output,
        cli.quiet,
        config.output.format,
        config.output.color,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    info!("Starting hybridctl");

    // === Dependency Injection ===
    let feature: Arc<dyn HybridModeFeature> =
        Arc::new(SysfsHybridModeFeature::from_config(&config.device));
    let ports = build_ports(&cli, &config, &output, feature.clone())?;
    let factory = HybridModeControlFactory::new(build_probe(&cli, &config));

    let progress = ProbeProgress::new(output.show_progress);
    progress.start();
    let control = match factory.create(ports).await {
        Ok(control) => {
            progress.finish(control.kind());
            control
        }
        Err(e) => {
            progress.fail();
            return Err(e).context("Could not select a hybrid mode control");
        }
    };

    match cli.state {
        None => show_status(&control, &output).await,
        Some(requested) => change_state(&control, feature.as_ref(), requested, &output).await,
    }
}

/// Stderr logging by verbosity, plus an optional plain-text log file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// `--capability` wins over `[device] capability`; `auto` means probe.
fn build_probe(cli: &Cli, config: &FileConfig) -> Arc<dyn CapabilityProbe> {
    let forced = match cli.capability {
        Some(arg) => arg.control_kind(),
        None => config.device.parse_capability().0,
    };
    match forced {
        Some(kind) => {
            info!("Capability forced to {}", kind);
            Arc::new(FixedCapabilityProbe::new(kind.capability()))
        }
        None => Arc::new(SysfsCapabilityProbe::from_config(&config.device)),
    }
}

fn build_ports(
    cli: &Cli,
    config: &FileConfig,
    output: &OutputConfig,
    feature: Arc<dyn HybridModeFeature>,
) -> Result<ControlPorts> {
    let policy = if cli.yes {
        ConfirmPolicy::Always
    } else if cli.no_restart {
        ConfirmPolicy::Never
    } else {
        config.restart.parse_confirm().0
    };
    let confirmation: Arc<dyn ConfirmationPort> = policy
        .fixed_port()
        .unwrap_or_else(|| Arc::new(InteractiveConfirmation::new()));

    let restart = CommandRestart::from_config(&config.restart)
        .context("restart.command must name a program")?;
    info!("Restart command: {}", restart.command_line());

    let mut ports = ControlPorts::new(
        feature,
        confirmation,
        Arc::new(restart),
        Arc::new(ConsolePresenter::new(output.format)),
    );

    if let Some(path) = config.logging.transition_log_path() {
        match JsonlTransitionLogger::new(&path) {
            Ok(logger) => {
                info!("Transition journal: {}", logger.path().display());
                ports = ports.with_transition_logger(Arc::new(logger));
            }
            Err(e) => warn!(
                "Transition journal disabled, cannot open {}: {}",
                path.display(),
                e
            ),
        }
    }

    Ok(ports)
}

async fn show_status(control: &HybridModeControl, output: &OutputConfig) -> Result<ExitCode> {
    let state = control
        .refresh()
        .await
        .context("Failed to read the hybrid mode")?;
    let report = StatusReport::new(control.kind(), state);
    println!("{}", output.formatter().format_status(&report));
    Ok(ExitCode::SUCCESS)
}

async fn change_state(
    control: &HybridModeControl,
    feature: &dyn HybridModeFeature,
    requested: HybridModeState,
    output: &OutputConfig,
) -> Result<ExitCode> {
    let old = feature
        .read_state()
        .await
        .context("Failed to read the current hybrid mode")?;

    let outcome = match requested_transition(control.kind(), old, requested) {
        Some(request) => control
            .change(request)
            .await
            .with_context(|| format!("Failed to switch hybrid mode to {}", requested))?,
        None => {
            info!("Hybrid mode is already {}", requested);
            TransitionOutcome::Ignored
        }
    };

    let report = TransitionReport::new(control.kind(), old, requested, outcome);
    println!("{}", output.formatter().format_transition(&report));

    Ok(match outcome {
        TransitionOutcome::Warned(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// The transition to run, or `None` when the machine is already in a state
/// this control offers. Unsupported requests still go through the control so
/// they fail the usual way.
fn requested_transition(
    kind: ControlKind,
    old: HybridModeState,
    requested: HybridModeState,
) -> Option<TransitionRequest> {
    let request = TransitionRequest::new(old, requested);
    if request.is_unchanged() && kind.supports(requested) {
        None
    } else {
        Some(request)
    }
}
