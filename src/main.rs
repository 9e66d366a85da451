use clap::{Parser, Subcommand};
use lode::AppError;

#[derive(Parser)]
#[command(name = "lode")]
#[command(version)]
#[command(
    about = "Install and remove executable shims that run lode modules as commands",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a module as a named command under ~/.lode/bin
    #[clap(visible_alias = "i")]
    Install {
        /// Name the command is installed as
        name: String,
        /// URL or path of the module the command runs
        module_specifier: String,
        /// Runtime flags baked into the shim, passed through verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        flags: Vec<String>,
    },
    /// Remove an installed command's shims
    #[clap(visible_alias = "rm")]
    Uninstall {
        /// Name of the installed command
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Install { name, module_specifier, flags } => {
            lode::install(&name, &module_specifier, &flags)
        }
        Commands::Uninstall { name } => lode::uninstall(&name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
