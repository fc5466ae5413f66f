use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use loancompass::cli::evaluate::EvaluateRequest;
use loancompass::core::Priority;
use loancompass::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Monthly income left after expenses, may be negative
    #[arg(long, allow_hyphen_values = true)]
    income: f64,

    /// Current savings balance
    #[arg(long, default_value_t = 0.0)]
    savings: f64,

    /// Price of the item
    #[arg(long)]
    price: f64,

    /// High, Medium or Low
    #[arg(long, default_value = "Medium")]
    priority: Priority,

    /// Fixed monthly amount replacing the priority-weighted default
    #[arg(long)]
    manual: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl From<EvaluateArgs> for EvaluateRequest {
    fn from(args: EvaluateArgs) -> EvaluateRequest {
        EvaluateRequest {
            disposable_income: args.income,
            savings: args.savings,
            price: args.price,
            priority: args.priority,
            manual: args.manual,
            json: args.json,
        }
    }
}

impl From<Commands> for loancompass::AppCommand {
    fn from(cmd: Commands) -> loancompass::AppCommand {
        match cmd {
            Commands::Budget => loancompass::AppCommand::Budget,
            Commands::Plan => loancompass::AppCommand::Plan,
            Commands::Evaluate(args) => loancompass::AppCommand::Evaluate(args.into()),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display income, expenses and disposable income
    Budget,
    /// Display monthly allocations for every wishlist item
    Plan,
    /// Evaluate a single item without a configuration file
    Evaluate(EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => loancompass::cli::setup::setup(),
        Some(cmd) => loancompass::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
