use clap::{Parser, Subcommand};

use depot_cli::commands;
use depot_cli::prompt::TerminalPrompt;
use depot_core::credentials::DEFAULT_REGISTRY_URL;

#[derive(Parser)]
#[command(name = "depot", about = "depot registry client and manifest manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and store registry account credentials
    Configure {
        /// Registry account identifier
        account_id: String,
        /// Account email address
        email: String,
        /// Account password
        password: String,
        /// Registry API base URL
        #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
        registry_url: String,
    },
    /// Create a new project manifest in the current directory
    Init {
        /// Name of the new package
        name: String,
        /// Overwrite an existing manifest without prompting
        #[arg(short, long)]
        overwrite: bool,
    },
    /// Set a manifest key to a scalar value
    Set {
        /// Manifest key
        key: String,
        /// Value to store
        value: String,
    },
    /// Add a value to an array-valued manifest key
    Add {
        /// Manifest key
        key: String,
        /// Value to add
        value: String,
    },
    /// Remove a value from an array-valued manifest key
    Remove {
        /// Manifest key
        key: String,
        /// Value to remove
        value: String,
    },
    /// Install packages and record them in the dependency array
    Install {
        /// Packages to install, in order
        #[arg(required = true)]
        packages: Vec<String>,
        /// Continue with the next package if one fails
        #[arg(short, long)]
        ignore_errors: bool,
    },
    /// Uninstall packages and drop them from the dependency array
    Uninstall {
        /// Packages to uninstall, in order
        #[arg(required = true)]
        packages: Vec<String>,
        /// Continue with the next package if one fails
        #[arg(short, long)]
        ignore_errors: bool,
        /// Suppress the package manager's interactive prompts
        #[arg(short, long)]
        skip_prompts: bool,
    },
    /// Bump the manifest version
    Bump {
        /// Explicit version to store verbatim
        version: Option<String>,
        /// Bump the major component
        #[arg(long)]
        major: bool,
        /// Bump the minor component
        #[arg(long)]
        minor: bool,
    },
    /// Build distribution files for the current project
    Package {
        /// Skip the wheel format
        #[arg(long)]
        no_wheel: bool,
        /// Skip the sdist format
        #[arg(long)]
        no_sdist: bool,
    },
    /// Upload built distribution files to the registry
    Upload {
        /// Continue with the next file if one fails
        #[arg(short, long)]
        ignore_errors: bool,
    },
    /// Create an access token for a package/user pair
    CreateToken {
        /// Name of the package the token grants access to
        package: String,
        /// Email of the user the token is for
        email: String,
        /// Grant write access instead of read-only
        #[arg(short, long)]
        write_access: bool,
    },
    /// Delete the access token for a package/user pair
    DeleteToken {
        /// Name of the package the token grants access to
        package: String,
        /// Email of the user the token belongs to
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Configure {
            account_id,
            email,
            password,
            registry_url,
        } => {
            commands::configure::run_configure(&account_id, &email, &password, &registry_url)
                .await?;
        }
        Commands::Init { name, overwrite } => {
            commands::init::run_init(&name, overwrite, &TerminalPrompt)?;
        }
        Commands::Set { key, value } => {
            commands::values::run_set(&key, &value, &TerminalPrompt)?;
        }
        Commands::Add { key, value } => {
            commands::values::run_add(&key, &value)?;
        }
        Commands::Remove { key, value } => {
            commands::values::run_remove(&key, &value)?;
        }
        Commands::Install {
            packages,
            ignore_errors,
        } => {
            commands::install::run_install(&packages, ignore_errors).await?;
        }
        Commands::Uninstall {
            packages,
            ignore_errors,
            skip_prompts,
        } => {
            commands::install::run_uninstall(&packages, ignore_errors, skip_prompts)?;
        }
        Commands::Bump {
            version,
            major,
            minor,
        } => {
            commands::bump::run_bump(version.as_deref(), major, minor)?;
        }
        Commands::Package { no_wheel, no_sdist } => {
            commands::package::run_package(no_wheel, no_sdist)?;
        }
        Commands::Upload { ignore_errors } => {
            commands::upload::run_upload(ignore_errors).await?;
        }
        Commands::CreateToken {
            package,
            email,
            write_access,
        } => {
            commands::tokens::run_create_token(&package, &email, write_access).await?;
        }
        Commands::DeleteToken { package, email } => {
            commands::tokens::run_delete_token(&package, &email).await?;
        }
    }
    Ok(())
}
