use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use vplanet_run::{LogDirLoader, Orchestrator, RunRequest, Simulator, SimulatorHelp, SystemLauncher};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "vplanet-run",
    version,
    about = "Run VPLanet once per input file and load its output"
)]
pub struct Cli {
    /// Simulator input file; output is written next to it
    #[arg(default_value = vplanet_run::model::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Pass -v to the simulator and log debug details
    #[arg(short, long)]
    pub verbose: bool,

    /// Pass -q to the simulator and only log warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Run even if the system's log file already exists
    #[arg(long)]
    pub clobber: bool,

    /// Use --units true or --units false to override
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub units: bool,

    /// Simulator executable
    #[arg(long, env = "VPLANET_BIN", default_value = vplanet_run::model::DEFAULT_PROGRAM)]
    pub binary: PathBuf,

    /// Print JSON result and exit
    #[arg(long)]
    pub json: bool,

    /// Print the simulator's own help text and exit
    #[arg(long, conflicts_with_all = ["json", "clobber"])]
    pub sim_help: bool,
}

/// Build a `RunRequest` from CLI arguments.
pub fn build_request(args: &Cli) -> RunRequest {
    RunRequest {
        input: args.input.clone(),
        verbose: args.verbose,
        quiet: args.quiet,
        clobber: args.clobber,
        units: args.units,
        simulator: Simulator::new(&args.binary),
    }
}

pub fn run(args: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    write_run(&args, &mut stdout.lock())
}

/// Run (or skip) and write the result in the mode `args` selects.
fn write_run<W: Write>(args: &Cli, out: &mut W) -> Result<()> {
    if args.sim_help {
        let help = SimulatorHelp::fetch(&SystemLauncher, &Simulator::new(&args.binary))
            .context("failed to get simulator help")?;
        write!(out, "{help}")?;
        return Ok(());
    }

    let req = build_request(args);
    let outcome = Orchestrator::new(SystemLauncher, LogDirLoader)
        .run(&req)
        .with_context(|| format!("run failed for {}", req.input.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&outcome)?;
        writeln!(out, "{json}")?;
    } else if !args.quiet {
        for line in crate::text_summary::build_text_summary(&outcome).lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
