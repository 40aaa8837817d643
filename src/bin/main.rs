use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use morse_core::{Translator, TranslationRecord};
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "morse_core=warn";

struct Ui {
    color: bool,
}

impl Ui {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn clear(&self, out: &mut impl Write) -> io::Result<()> {
        if self.color {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let ui = Ui {
        color: std::env::var_os("NO_COLOR").is_none(),
    };
    let mut translator = Translator::new();
    let mut out = stdout();

    ui.clear(&mut out)?;
    writeln!(out, "{}", ui.paint("Morse Translator. Type 'help' for commands, 'exit' to quit.", Color::Cyan))?;
    writeln!(out, "---------------------------------------------------------------")?;

    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "exit" | "quit" => break,
            "help" => print_help(&mut out)?,
            "encode" | "e" => {
                let morse = translator.encode(rest);
                writeln!(out, "{}", ui.paint(&morse, Color::Green))?;
            }
            "decode" | "d" => {
                let text = translator.decode(rest);
                writeln!(out, "{}", ui.paint(&text, Color::Green))?;
            }
            "set" => match rest.rsplit_once(char::is_whitespace) {
                Some((symbol, sequence)) => match parse_symbol(symbol.trim()) {
                    Some(symbol) => match translator.put_mapping(symbol, sequence) {
                        Ok(()) => writeln!(out, "Mapped {:?} to {}", symbol, sequence)?,
                        Err(e) => writeln!(out, "{}", ui.paint(&format!("[ERROR] {}", e), Color::Red))?,
                    },
                    None => writeln!(out, "Expected a single character or 'space'.")?,
                },
                None => writeln!(out, "Usage: set <char> <sequence>")?,
            },
            "remove" | "rm" => match parse_symbol(rest) {
                Some(symbol) => {
                    if translator.remove_mapping(symbol) {
                        writeln!(out, "Removed {:?}", symbol)?;
                    } else {
                        writeln!(out, "Nothing removed for {:?}", symbol)?;
                    }
                }
                None => writeln!(out, "Usage: remove <char>")?,
            },
            "lookup" => match parse_symbol(rest) {
                Some(symbol) => match translator.lookup(symbol) {
                    Some(sequence) => writeln!(out, "{:?} -> {}", symbol, sequence)?,
                    None => writeln!(out, "{:?} has no mapping", symbol)?,
                },
                None => writeln!(out, "Usage: lookup <char>")?,
            },
            "table" => print_table(&mut out, &translator.list_mappings())?,
            "history" if rest == "json" => {
                let json = serde_json::to_string_pretty(&translator.list_history())
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(out, "{}", json)?;
            }
            "history" => print_history(&mut out, &ui, &translator.list_history())?,
            "export" if !rest.is_empty() => match translator.export_history(Path::new(rest)) {
                Ok(()) => writeln!(out, "History exported to '{}'", rest)?,
                Err(e) => writeln!(out, "{}", ui.paint(&format!("[ERROR] Could not export history: {}", e), Color::Red))?,
            },
            "export" => writeln!(out, "Usage: export <path>")?,
            "clear" => {
                translator.clear_history();
                writeln!(out, "History cleared.")?;
            }
            "reset" => {
                translator.reset_mappings();
                writeln!(out, "Symbol table restored to defaults.")?;
            }
            other => writeln!(out, "Unknown command '{}'. Type 'help'.", other)?,
        }
    }

    writeln!(out, "\nGoodbye.")?;
    Ok(())
}

/// Accepts exactly one character, or the word "space".
fn parse_symbol(arg: &str) -> Option<char> {
    if arg.eq_ignore_ascii_case("space") {
        return Some(' ');
    }
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  encode <text>          text -> morse")?;
    writeln!(out, "  decode <morse>         morse -> text ('/' separates words)")?;
    writeln!(out, "  set <char> <seq>       add or update a mapping")?;
    writeln!(out, "  remove <char>          remove a mapping")?;
    writeln!(out, "  lookup <char>          show one mapping")?;
    writeln!(out, "  table                  show every mapping")?;
    writeln!(out, "  history [json]         show this session's translations")?;
    writeln!(out, "  export <path>          write the history to a JSON file")?;
    writeln!(out, "  clear                  clear the history")?;
    writeln!(out, "  reset                  restore the default table")?;
    writeln!(out, "  exit                   quit")
}

fn print_table(out: &mut impl Write, mappings: &[(char, String)]) -> io::Result<()> {
    for (symbol, sequence) in mappings {
        let label = if *symbol == ' ' { "SPACE".to_string() } else { symbol.to_string() };
        writeln!(out, "  {:<6} {}", label, sequence)?;
    }
    writeln!(out, "({} mappings)", mappings.len())
}

fn print_history(out: &mut impl Write, ui: &Ui, records: &[TranslationRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No translations yet.");
    }
    for (i, record) in records.iter().enumerate() {
        let mode = ui.paint(&format!("{:<6}", record.mode()), Color::Yellow);
        writeln!(
            out,
            "  {:>3}. [{}] {} {:?} -> {:?}",
            i + 1,
            format_time(record),
            mode,
            record.input(),
            record.output()
        )?;
    }
    Ok(())
}

/// UTC wall-clock time of day, HH:MM:SS.
fn format_time(record: &TranslationRecord) -> String {
    let secs = record
        .timestamp()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
