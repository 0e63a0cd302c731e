use clap::{Parser, Subcommand};
use rondo::app::App;
use rondo::config;
use rondo::midi::{MidiOut, MockMidiOut};
use rondo::sys::{runtime, server};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "rondo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Send one control line to the running daemon, e.g. `down 1 540 1000`
    Send { line: Vec<String> },
    /// List output ports on the note sink
    Ports,
    /// Write the default config file if none exists and print its path
    Setup,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Send { line }) => send_command(&line.join(" ")),
        Some(Commands::Ports) => {
            for port in MockMidiOut::new(0).list_ports() {
                println!("{port}");
            }
            Ok(())
        }
        Some(Commands::Setup) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => run(),
    }
}

fn run() -> anyhow::Result<()> {
    let config = config::load_or_default();
    let midi = Box::new(MockMidiOut::new(config.midi.channel));
    let mut app = App::new(config, midi)?;

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx);

    log::info!("rondo listening on {}", server::SOCKET_PATH);

    while let Ok(event) = rx.recv_blocking() {
        if !app.update(event) {
            break;
        }
    }

    log::info!("Goodbye");
    Ok(())
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(server::SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to rondo daemon at {}: {}. Is rondo running?",
            server::SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{cmd}")?;
    Ok(())
}
