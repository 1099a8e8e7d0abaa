//! ghorg - GitHub organization management CLI

use clap::{CommandFactory, Parser};
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod resolve;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::ListOrgs => cli::org::list(&opts).await,
        Commands::ListTeams => cli::team::list(&opts).await,
        Commands::ListRepos => cli::repo::list(&opts).await,
        Commands::ListMembers => cli::user::list(&opts).await,
        Commands::CreateTeam { team, description } => {
            cli::team::create(&opts, &team, &description).await
        }
        Commands::DeleteTeam { team, yes } => cli::team::delete(&opts, &team, yes).await,
        Commands::AddRepo {
            team,
            repo,
            permission,
        } => cli::team::add_repo(&opts, &team, &repo, permission).await,
        Commands::RemoveRepo { team, repo } => cli::team::remove_repo(&opts, &team, &repo).await,
        Commands::AddUser { team, user } => cli::team::add_user(&opts, &team, &user).await,
        Commands::RemoveUser { team, user } => cli::team::remove_user(&opts, &team, &user).await,
        Commands::CreateRepo {
            repo_name,
            repo_private,
            description,
        } => cli::repo::create(&opts, &repo_name, repo_private, &description).await,
        Commands::DeleteRepo { repo, yes } => cli::repo::delete(&opts, &repo, yes).await,
        Commands::UserAccess { user } => cli::access::user_access(&opts, &user).await,
        Commands::ListUsersAccess => cli::access::list_users_access(&opts).await,
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
