use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use transcode_core::config::default_config_path;
use transcode_core::logging::{self, LogTarget};
use transcode_core::{ConversionRequest, Direction, TranscodeError, Transcoder, TranscoderConfig};

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

#[derive(Parser, Debug)]
#[command(name = "transcode", about = "Convert text to and from Morse, binary, hex and Braille")]
struct Cli {
    /// Config file; defaults to the per-user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append log lines to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Raise the log level once per occurrence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert plain text into a scheme.
    Encode(ConvertArgs),
    /// Convert a scheme's symbols back into text.
    Decode(ConvertArgs),
    /// List the available schemes and sub-modes.
    Schemes {
        /// Print the listing as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Manage the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(ClapArgs, Debug)]
struct ConvertArgs {
    /// Scheme id, e.g. `morse` or `braille`.
    #[arg(long, short)]
    scheme: String,
    /// Sub-mode id. Defaults to `text`, or the scheme's first sub-mode.
    #[arg(long, short)]
    mode: Option<String>,
    /// Input text. Read from stdin when omitted.
    text: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a config file holding the defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn raise_level(base: LevelFilter, steps: u8) -> LevelFilter {
    let start = LEVELS.iter().position(|l| *l == base).unwrap_or(2);
    LEVELS[(start + steps as usize).min(LEVELS.len() - 1)]
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(default_config_path)
}

fn read_input(words: &[String]) -> io::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    // A trailing newline from a pipe is not part of the input.
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}

fn run_convert(engine: &Transcoder, direction: Direction, args: &ConvertArgs) -> ExitCode {
    let sub_mode = match &args.mode {
        Some(mode) => mode.clone(),
        None => match engine.registry().scheme(&args.scheme) {
            Ok(scheme) => scheme.default_sub_mode().map(|m| m.id().to_string()).unwrap_or_default(),
            Err(e) => return dispatch_failure(&e),
        },
    };
    let text = match read_input(&args.text) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: could not read stdin: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match engine.convert(&ConversionRequest::new(&args.scheme, sub_mode, direction, text)) {
        // Validation messages are the user-facing result.
        Ok(Ok(output)) => println!("{}", output),
        Ok(Err(invalid)) => println!("{}", invalid),
        Err(e) => return dispatch_failure(&e),
    }
    ExitCode::SUCCESS
}

fn dispatch_failure(e: &TranscodeError) -> ExitCode {
    log::error!("{}", e);
    eprintln!("error: {}", e);
    ExitCode::from(2)
}

fn print_schemes(engine: &Transcoder, json: bool) -> ExitCode {
    let schemes = engine.list_schemes();
    if json {
        match serde_json::to_string_pretty(&schemes) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }
    for scheme in schemes {
        println!("{} - {}", scheme.id, scheme.title);
        for mode in scheme.sub_modes {
            let decode = if mode.decodable { mode.decode_label } else { "encode only".to_string() };
            println!("    {:<24} {} / {}", mode.id, mode.encode_label, decode);
        }
    }
    ExitCode::SUCCESS
}

fn init_config(path: Option<PathBuf>, force: bool) -> ExitCode {
    let Some(path) = path else {
        eprintln!("error: no config directory on this platform; pass --config");
        return ExitCode::FAILURE;
    };
    if path.exists() && !force {
        eprintln!("error: {} already exists (use --force to overwrite)", path.display());
        return ExitCode::FAILURE;
    }
    match TranscoderConfig::default().save(&path) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let path = config_path(&cli);

    if let Command::Config(ConfigCommand::Init { force }) = cli.command {
        return init_config(path, force);
    }

    let config = match &path {
        Some(p) => TranscoderConfig::load_or_default(p),
        None => Ok(TranscoderConfig::default()),
    };
    let config = match config.and_then(|c| c.level_filter().map(|level| (c, level))) {
        Ok((config, level)) => {
            let target = cli.log_file.clone().map_or(LogTarget::Stderr, LogTarget::File);
            if let Err(e) = logging::init(target, raise_level(level, cli.verbose)) {
                eprintln!("warning: logging disabled: {}", e);
            }
            config
        }
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let engine = Transcoder::new(config);
    match &cli.command {
        Command::Encode(args) => run_convert(&engine, Direction::Encode, args),
        Command::Decode(args) => run_convert(&engine, Direction::Decode, args),
        Command::Schemes { json } => print_schemes(&engine, *json),
        Command::Config(_) => ExitCode::SUCCESS,
    }
}
