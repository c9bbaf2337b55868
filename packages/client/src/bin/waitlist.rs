//! Join the Netmingle waitlist from the command line.
//!
//! Validates the form locally and submits it once to `POST /api/waitlist`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin netmingle-waitlist -- \
//!     --full-name "Ada Lovelace" --email ada@example.com \
//!     --profession "Software Engineer" --location London \
//!     --interest Technology --interest Research
//! ```

use std::sync::Arc;

use clap::Parser;

use netmingle_client::{
    config::DEFAULT_SERVER,
    domain::{Interest, PROFESSIONS, WaitlistForm},
    endpoint::waitlist_url,
    infrastructure::gateway::HttpWaitlistGateway,
    ui::MessageFormatter,
    usecase::{SubmitWaitlistError, SubmitWaitlistUseCase, WAITLIST_SUCCESS_MESSAGE},
};
use netmingle_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "netmingle-waitlist")]
#[command(about = "Sign up for the Netmingle waitlist", long_about = None)]
struct Args {
    /// Server base address
    #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
    server: String,

    #[arg(long)]
    full_name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Usually one of `--list-professions`; other text is accepted
    #[arg(long)]
    profession: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// Interest tag; repeat for several (e.g. --interest Design --interest Arts)
    #[arg(long = "interest")]
    interests: Vec<Interest>,

    /// Print the suggested professions and exit
    #[arg(long)]
    list_professions: bool,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    if args.list_professions {
        for profession in PROFESSIONS {
            println!("{}", profession);
        }
        return;
    }

    let endpoint = match waitlist_url(&args.server) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let form = WaitlistForm {
        full_name: args.full_name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        profession: args.profession.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        interests: args.interests,
    };

    let gateway = Arc::new(HttpWaitlistGateway::new(reqwest::Client::new(), endpoint));
    let usecase = SubmitWaitlistUseCase::new(gateway);

    match usecase.execute(&form).await {
        Ok(()) => println!("{}", WAITLIST_SUCCESS_MESSAGE),
        Err(SubmitWaitlistError::Invalid(errors)) => {
            eprint!("{}", MessageFormatter::format_field_errors(&errors));
            std::process::exit(2);
        }
        Err(e) => {
            tracing::warn!("Waitlist submission failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
