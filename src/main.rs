use clap::Parser;
use colored::*;
use std::process;

use hoteldesk::cli::{Args, Command};
use hoteldesk::config::Config;
use hoteldesk::resolver::SessionResolver;
use hoteldesk::session::FilesystemSessionStore;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env_and_args(&args);

    if config.verbose {
        eprintln!(
            "{}",
            format!("Auth endpoint: {}", config.login_endpoint).dimmed()
        );
    }

    let resolver = SessionResolver::new(FilesystemSessionStore::new(), config.login_endpoint);

    match args.command {
        Command::Login { username, password } => {
            match resolver.login(&username, &password).await {
                Ok(session) => {
                    println!(
                        "{}",
                        format!("Logged in as {} ({})", session.username(), session.user.role)
                            .green()
                    );
                    println!("Landing route: {}", resolver.landing_route());
                }
                Err(e) => {
                    eprintln!("{} {}", "Error:".red(), e);
                    process::exit(1);
                }
            }
        }
        Command::Logout => match resolver.logout() {
            Ok(()) => println!("{}", "Session cleared.".green()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        },
        Command::Whoami => match resolver.current_session() {
            Some(session) => {
                println!("{} ({})", session.username(), session.user.role);
                println!(
                    "Logged in since {}",
                    session.user.logged_in_at.format("%A, %B %d, %Y %H:%M")
                );
            }
            None => {
                println!("{}", "Not logged in.".yellow());
                process::exit(1);
            }
        },
        Command::Route => println!("{}", resolver.landing_route()),
    }
}
