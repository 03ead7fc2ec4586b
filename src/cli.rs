use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hoteldesk")]
#[command(about = "Sign-in and session tool for the hotel management dashboards", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:8080)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostics to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and persist the session
    Login { username: String, password: String },
    /// Remove the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Print the landing route for the current role
    Route,
}
