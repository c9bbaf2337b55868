//! Terminal chat client for Netmingle rooms.
//!
//! Connects to the chat server over WebSocket, lists rooms, and lets the user
//! join, create and talk in them. Reconnects every 5 seconds when the
//! connection drops, until the user quits with `/quit`, Ctrl+C or Ctrl+D.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin netmingle-chat -- --username Alice
//! cargo run --bin netmingle-chat -- -s https://netmingle.example -u Bob --max-reconnects 10
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::{Mutex, mpsc};

use netmingle_client::{
    config::{ChatConfig, DEFAULT_RECONNECT_INTERVAL_SECS, DEFAULT_SERVER, ReconnectPolicy},
    connection::{SessionEvent, run_client},
    domain::{Username, UsernameStore},
    error::ClientError,
    infrastructure::storage::FileUsernameStore,
    ui::{HELP_TEXT, MessageFormatter, UserCommand, parse_command, prompt_for, redisplay_prompt},
    usecase::{ChatEvent, ChatState},
};
use netmingle_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "netmingle-chat")]
#[command(about = "Terminal client for Netmingle chat rooms", long_about = None)]
struct Args {
    /// Server base address (http, https, ws or wss)
    #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Display name; saved for next time
    #[arg(short = 'u', long)]
    username: Option<String>,

    /// File the username is remembered in (default: ~/.netmingle/username)
    #[arg(long)]
    username_file: Option<PathBuf>,

    /// Seconds to wait between reconnect attempts
    #[arg(long, default_value_t = DEFAULT_RECONNECT_INTERVAL_SECS)]
    reconnect_secs: u64,

    /// Give up after this many consecutive failed connection attempts
    #[arg(long)]
    max_reconnects: Option<u32>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let store = FileUsernameStore::new(
        args.username_file
            .clone()
            .unwrap_or_else(FileUsernameStore::default_path),
    );
    let username = resolve_username(args.username.as_deref(), &store)?;
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.\n",
        username
    );

    let config = ChatConfig {
        server: args.server,
        reconnect: ReconnectPolicy::new(
            Duration::from_secs(args.reconnect_secs),
            args.max_reconnects,
        ),
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel::<UserCommand>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<SessionEvent>();

    let name = username.as_str().to_string();
    let state = Arc::new(Mutex::new(ChatState::new(username)));

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_name = name.clone();
    let _readline_handle = std::thread::spawn(move || read_commands(&prompt_name, command_tx));

    let render_task = tokio::spawn(render_events(name, event_rx));

    let result = run_client(config, state, command_rx, event_tx).await;
    render_task.abort();
    result
}

/// `--username` wins, then the stored name, then an interactive prompt.
/// A newly given name is saved.
fn resolve_username(
    from_flag: Option<&str>,
    store: &FileUsernameStore,
) -> Result<Username, ClientError> {
    if let Some(name) = from_flag {
        let username = Username::new(name).map_err(|_| ClientError::UsernameRequired)?;
        store.save(username.as_str())?;
        return Ok(username);
    }

    if let Some(name) = store.load()?
        && let Ok(username) = Username::new(name)
    {
        tracing::debug!("Loaded username from {}", store.path().display());
        return Ok(username);
    }

    let mut rl = DefaultEditor::new().map_err(|_| ClientError::UsernameRequired)?;
    let entered = rl
        .readline("Enter your name: ")
        .map_err(|_| ClientError::UsernameRequired)?;
    let username = Username::new(entered).map_err(|_| ClientError::UsernameRequired)?;
    store.save(username.as_str())?;
    Ok(username)
}

/// Read prompt lines until EOF or interrupt; local commands are answered here.
fn read_commands(username: &str, commands: mpsc::UnboundedSender<UserCommand>) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize readline: {}", e);
            commands.send(UserCommand::Quit).ok();
            return;
        }
    };

    let prompt = prompt_for(username);

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line).ok();

                match parse_command(line) {
                    Ok(Some(command)) if command.is_local() => print_local(&command),
                    Ok(Some(command)) => {
                        let quit = command == UserCommand::Quit;
                        if commands.send(command).is_err() || quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => print!("{}", MessageFormatter::format_notice(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                tracing::info!("Interrupted");
                commands.send(UserCommand::Quit).ok();
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                tracing::info!("EOF");
                commands.send(UserCommand::Quit).ok();
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                commands.send(UserCommand::Quit).ok();
                break;
            }
        }
    }
}

/// Answer a command that needs no connection
fn print_local(command: &UserCommand) {
    match command {
        UserCommand::Help => println!("{}", HELP_TEXT),
        UserCommand::ShowInterests => print!("{}", MessageFormatter::format_interests()),
        _ => {}
    }
}

async fn render_events(username: String, mut events: mpsc::UnboundedReceiver<SessionEvent>) {
    while let Some(event) = events.recv().await {
        let output = match event {
            SessionEvent::State(state) => MessageFormatter::format_connection_state(state),
            SessionEvent::Notice(text) => MessageFormatter::format_notice(&text),
            SessionEvent::Chat(ChatEvent::RoomsListed(rooms)) => {
                MessageFormatter::format_rooms(&rooms)
            }
            SessionEvent::Chat(ChatEvent::RoomJoined(room)) => {
                MessageFormatter::format_room_joined(&room, &username)
            }
            SessionEvent::Chat(ChatEvent::MessageReceived(message)) => {
                MessageFormatter::format_chat_message(&message, &username)
            }
            SessionEvent::Chat(ChatEvent::ParticipantsUpdated(participants)) => {
                MessageFormatter::format_participants(&participants, &username)
            }
        };
        print!("{}", output);
        redisplay_prompt(&username);
    }
}
