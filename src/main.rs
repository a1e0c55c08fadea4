use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use espman::app::App;
use espman::cli::{self, CliCommand};
use espman::device::DeviceClient;
use espman::event::EventHandler;
use espman::settings::{Settings, DEFAULT_SETTINGS_FILE};
use espman::util::log;
use espman::log_info;

fn command() -> Command {
    Command::new("espman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Configure, inspect and restart an ESP sensor module over its admin API")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("URL")
                .global(true)
                .help("Device address, e.g. http://192.168.4.1 (overrides ESPMAN_HOST)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .default_value(DEFAULT_SETTINGS_FILE)
                .help("Settings file"),
        )
        .arg(
            Arg::new("board")
                .long("board")
                .value_name("FILE")
                .global(true)
                .help("Board profile YAML (defaults to the built-in NodeMCU table)"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("tui").about("Interactive terminal UI (default)"))
        .subcommand(Command::new("get-config").about("Print the device config as JSON"))
        .subcommand(
            Command::new("set-config")
                .about("Validate a JSON config file and send it to the device")
                .arg(Arg::new("file").required(true).value_name("FILE")),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a JSON config file against the board profile")
                .arg(Arg::new("file").required(true).value_name("FILE")),
        )
        .subcommand(Command::new("files").about("List files and disk usage"))
        .subcommand(
            Command::new("rm")
                .about("Remove a file from the device")
                .arg(Arg::new("name").required(true).value_name("NAME")),
        )
        .subcommand(
            Command::new("upload")
                .about("Upload files to the device")
                .arg(Arg::new("paths").required(true).num_args(1..).value_name("PATH")),
        )
        .subcommand(Command::new("restart").about("Restart the device"))
        .subcommand(Command::new("board").about("Show the active board profile"))
}

fn load_settings(matches: &ArgMatches) -> color_eyre::Result<Settings> {
    let path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

    let mut settings = Settings::load(&path).wrap_err_with(|| format!("loading {}", path.display()))?;
    settings.apply_env();

    if let Some(host) = matches.get_one::<String>("host") {
        settings.host = host.clone();
    }
    if let Some(board) = matches.get_one::<String>("board") {
        settings.board_profile = Some(PathBuf::from(board));
    }
    if matches.get_flag("debug") {
        settings.debug = true;
    }
    Ok(settings)
}

fn cli_command(matches: &ArgMatches) -> Option<CliCommand> {
    let file = |m: &ArgMatches| PathBuf::from(m.get_one::<String>("file").cloned().unwrap_or_default());

    match matches.subcommand() {
        Some(("get-config", _)) => Some(CliCommand::GetConfig),
        Some(("set-config", m)) => Some(CliCommand::SetConfig(file(m))),
        Some(("check", m)) => Some(CliCommand::Check(file(m))),
        Some(("files", _)) => Some(CliCommand::Files),
        Some(("rm", m)) => Some(CliCommand::Remove(m.get_one::<String>("name").cloned().unwrap_or_default())),
        Some(("upload", m)) => Some(CliCommand::Upload(
            m.get_many::<String>("paths")
                .map(|paths| paths.map(PathBuf::from).collect())
                .unwrap_or_default(),
        )),
        Some(("restart", _)) => Some(CliCommand::Restart),
        Some(("board", _)) => Some(CliCommand::Board),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let matches = command().get_matches();
    let settings = load_settings(&matches)?;

    log::init(&settings.log_dir, settings.debug)
        .wrap_err_with(|| format!("creating log directory {}", settings.log_dir.display()))?;

    let profile = settings.board()?;
    let client = DeviceClient::new(&settings.base_url(), settings.timeout())?;

    if let Some(command) = cli_command(&matches) {
        // stdout is free, so tracing goes to stderr
        let level = if settings.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
            .with_writer(std::io::stderr)
            .init();

        let output = cli::run(command, &client, &profile).await?;
        println!("{}", output);
        return Ok(());
    }

    log_info!("Starting TUI against {} with board {}", client.base_url(), profile.name);
    let terminal = ratatui::init();
    let mut app = App::new(client, profile, EventHandler::new());
    app.start();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
