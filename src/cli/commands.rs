// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateOptions),

    /// Score the strength of a password (0-5)
    Score {
        /// Password to score
        #[arg(required = true, allow_hyphen_values = true)]
        password: String,
    },

    /// Adjust settings and regenerate interactively
    Interactive,

    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        address: Option<String>,

        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,
    },
}

impl CliCommand {
    /// Subcommand name, safe to log: never includes argument values.
    pub fn name(&self) -> &'static str {
        match self {
            CliCommand::Generate(_) => "generate",
            CliCommand::Score { .. } => "score",
            CliCommand::Interactive => "interactive",
            CliCommand::Serve { .. } => "serve",
        }
    }
}

/// Options for one-shot generation. Unset class flags fall back to the
/// configured defaults.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Password length, clamped to 6-30
    #[arg(long, short, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Include uppercase letters
    #[arg(long, conflicts_with = "no_uppercase")]
    pub uppercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Include numbers
    #[arg(long, conflicts_with = "no_digits")]
    pub digits: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_digits: bool,

    /// Include special characters
    #[arg(long, conflicts_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_symbols: bool,

    /// How many passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the last generated password to the clipboard
    #[arg(long)]
    pub copy: bool,
}
