use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "clinic-rbac")]
#[command(version, about = "Clinic access policy CLI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Policy table validation and inspection
    Policy {
        #[command(subcommand)]
        command: PolicyCommands,
    },
    /// Check whether a role may perform an action on a module
    Check {
        /// Role name (admin, dentist, staff, patient)
        role: String,
        /// Module name
        module: String,
        /// Action name
        action: String,
        /// Clinic configuration file (defaults to $CLINIC_RBAC_CONFIG, then built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the navigation menu a role sees
    Menu {
        /// Role name
        role: String,
        /// Clinic configuration file (defaults to $CLINIC_RBAC_CONFIG, then built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum PolicyCommands {
    /// Validate a policy table file (.toml, .yaml or .yml)
    Check {
        /// Path to the policy file
        file: PathBuf,
    },
    /// List every permission granted to a role
    Show {
        /// Role name
        role: String,
        /// Clinic configuration file (defaults to $CLINIC_RBAC_CONFIG, then built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Policy { command } => match command {
            PolicyCommands::Check { file } => {
                commands::policy::check(&file)?;
            }
            PolicyCommands::Show { role, config } => {
                commands::policy::show(&role, config.as_deref())?;
            }
        },
        Commands::Check {
            role,
            module,
            action,
            config,
        } => {
            commands::access::check(&role, &module, &action, config.as_deref())?;
        }
        Commands::Menu { role, config } => {
            commands::access::menu(&role, config.as_deref())?;
        }
    }

    Ok(())
}
