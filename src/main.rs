//! ═══════════════════════════════════════════════════════════════════════════════
//! PREDICTOR AXIOMS — Entry Point
//! ═══════════════════════════════════════════════════════════════════════════════
//! Subcommand dispatch over the shipped reference predictors.
//! ═══════════════════════════════════════════════════════════════════════════════

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use predictor_axioms::{
    telemetry, Axiom, Bits, EchoCortex, PredictiveState, SlotCortex, Testbed, TestbedConfig,
    TransitionCortex,
};

/// Pattern type used by the command line
type Pattern = Bits<16>;

#[derive(Parser)]
#[command(name = "predictor-axioms")]
#[command(about = "Axiom testbed for predictive temporal-pattern models", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe capacity, then run every axiom until the first failure
    Run(RunArgs),

    /// Only probe the capacity of a fresh predictor
    Probe(RunArgs),

    /// Print the axiom catalogue
    List,
}

#[derive(Args)]
struct RunArgs {
    /// Reference predictor to test
    #[arg(short, long, value_enum, default_value = "transition")]
    predictor: PredictorKind,

    /// Bound standing in for unboundedly many attempts
    #[arg(long)]
    simulated_infinity: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PredictorKind {
    /// Predicts the last input again
    Echo,
    /// Transition memory with a plasticity budget
    Transition,
    /// Sixteen-slot transition memory without refractory masking
    Slots,
}

impl PredictorKind {
    fn label(self) -> &'static str {
        match self {
            PredictorKind::Echo => "echo",
            PredictorKind::Transition => "transition",
            PredictorKind::Slots => "slots",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match cli.command {
        Commands::Run(args) => dispatch(&args, false),
        Commands::Probe(args) => dispatch(&args, true),
        Commands::List => {
            for axiom in Axiom::ALL {
                println!("#{:<2} {:<20} {}", axiom.number(), axiom.name(), axiom.statement());
            }
            Ok(())
        }
    }
}

fn dispatch(args: &RunArgs, probe_only: bool) -> Result<()> {
    let mut config = TestbedConfig::from_env().context("reading environment overrides")?;
    if let Some(simulated_infinity) = args.simulated_infinity {
        config = config.with_simulated_infinity(simulated_infinity);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    match args.predictor {
        PredictorKind::Echo => execute::<EchoCortex<Pattern>>(config, args, probe_only),
        PredictorKind::Transition => execute::<TransitionCortex<Pattern>>(config, args, probe_only),
        PredictorKind::Slots => execute::<SlotCortex<Pattern, 16>>(config, args, probe_only),
    }
}

fn execute<C>(config: TestbedConfig, args: &RunArgs, probe_only: bool) -> Result<()>
where
    C: PredictiveState<Pattern>,
{
    let label = args.predictor.label();
    let mut testbed = Testbed::<C, Pattern>::new(config)?.with_label(label);

    if probe_only {
        let capacity = testbed.probe_capacity()?;
        if args.json {
            let probe = serde_json::json!({
                "predictor": label,
                "seed": testbed.seed(),
                "simulated_infinity": testbed.config().simulated_infinity,
                "capacity": capacity,
            });
            println!("{}", serde_json::to_string_pretty(&probe)?);
        } else {
            println!("{label}: capacity {capacity} (seed {})", testbed.seed());
        }
        return Ok(());
    }

    let report = testbed.run();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    let seed = report.seed;
    report
        .into_result()
        .with_context(|| format!("{label} failed the testbed (seed {seed})"))?;
    Ok(())
}
