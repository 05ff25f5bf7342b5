use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, stdin, stdout, Write};
use transcode_core::config::default_config_path;
use transcode_core::logging::{self, LogTarget};
use transcode_core::{ConversionRequest, Direction, Transcoder, TranscoderConfig};

struct Session {
    scheme: String,
    sub_mode: String,
    direction: Direction,
    last: Option<(String, String)>,
    notice: Option<String>,
}

impl Session {
    fn new() -> Self {
        Self {
            scheme: "morse".to_string(),
            sub_mode: "text".to_string(),
            direction: Direction::Encode,
            last: None,
            notice: None,
        }
    }
}

fn load_config() -> TranscoderConfig {
    let Some(path) = default_config_path() else {
        return TranscoderConfig::default();
    };
    TranscoderConfig::load_or_default(&path).unwrap_or_else(|e| {
        eprintln!("[WARN] Ignoring config {}: {}", path.display(), e);
        TranscoderConfig::default()
    })
}

fn main() -> io::Result<()> {
    let config = load_config();
    if let Ok(level) = config.level_filter() {
        logging::init(LogTarget::Stderr, level)?;
    }
    let engine = Transcoder::new(config);
    let mut session = Session::new();

    loop {
        print_ui(&session, &engine)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\n', '\r']);
        session.notice = None;

        match line.trim() {
            "exit" => break,
            ":encode" => session.direction = Direction::Encode,
            ":decode" => {
                if engine.supports_decoding(&session.scheme, &session.sub_mode) {
                    session.direction = Direction::Decode;
                } else {
                    session.notice = Some(format!("{}:{} is one-way only", session.scheme, session.sub_mode));
                }
            }
            ":list" => {
                let listing = engine
                    .list_schemes()
                    .into_iter()
                    .map(|s| {
                        let modes: Vec<_> = s.sub_modes.into_iter().map(|m| m.id).collect();
                        format!("{} [{}]", s.id, modes.join(", "))
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                session.notice = Some(listing);
            }
            cmd if cmd.starts_with(":scheme") => {
                let id = cmd[":scheme".len()..].trim();
                match engine.registry().scheme(id) {
                    Ok(scheme) => {
                        session.scheme = id.to_string();
                        session.sub_mode = scheme.default_sub_mode().map(|m| m.id().to_string()).unwrap_or_default();
                        session.direction = Direction::Encode;
                    }
                    Err(e) => session.notice = Some(e.to_string()),
                }
            }
            cmd if cmd.starts_with(":mode") => {
                let id = cmd[":mode".len()..].trim();
                match engine.registry().get_converter(&session.scheme, id) {
                    Ok(_) => {
                        session.sub_mode = id.to_string();
                        if !engine.supports_decoding(&session.scheme, id) {
                            session.direction = Direction::Encode;
                        }
                    }
                    Err(e) => session.notice = Some(e.to_string()),
                }
            }
            _ => {
                let request =
                    ConversionRequest::new(&session.scheme, &session.sub_mode, session.direction, line);
                match engine.convert(&request) {
                    Ok(Ok(output)) => session.last = Some((line.to_string(), output)),
                    Ok(Err(invalid)) => session.notice = Some(invalid.to_string()),
                    Err(e) => session.notice = Some(e.to_string()),
                }
            }
        }
    }

    println!("\nBye.");
    Ok(())
}

fn print_ui(session: &Session, engine: &Transcoder) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", "Text Transcoder".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Commands: :scheme <id>  :mode <id>  :encode  :decode  :list  exit\n")?;

    let decodable = engine.supports_decoding(&session.scheme, &session.sub_mode);
    writeln!(
        out,
        "Scheme: {}  Mode: {}  Direction: {}  {}",
        session.scheme.as_str().cyan(),
        session.sub_mode.as_str().cyan(),
        session.direction.to_string().yellow(),
        if decodable { "(reversible)".green() } else { "(one-way only)".dark_grey() }
    )?;

    if let Some((input, output)) = &session.last {
        writeln!(out, "\nInput:  {}", input)?;
        writeln!(out, "Output: {}", output.as_str().bold())?;
    }
    if let Some(notice) = &session.notice {
        writeln!(out, "\n{}", notice.as_str().red())?;
    }
    write!(out, "\n> ")?;
    out.flush()
}
