//! Command-line front end: reads a saved page (file or stdin), extracts the
//! video links and runs one action on them.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use video_links_extractor::bookmarklet::{bookmarklet_snippet, DEFAULT_APP_URL};
use video_links_extractor::encoding::decode_page;
use video_links_extractor::platform::{CommandShare, ShareTarget, SystemBrowser, SystemClipboard};
use video_links_extractor::session::MSG_EMPTY_INPUT;
use video_links_extractor::{Handoff, Notice, Options, Session};

const USAGE: &str = "\
Usage: video-links [--input FILE] [--note TEXT] <command> [args] [-- SHARE_CMD [ARG]...]

Commands:
  list                    Print the ordered links
  json                    Print the ordered records as JSON
  render                  Print the links as an HTML list
  open-all                Open every link in the default browser
  share                   Share the labeled list (clipboard when no share command)
  copy                    Copy the URLs to the clipboard
  export [FORMAT] [DIR]   Write video_links.txt or video_links.pdf (FORMAT: text|pdf)
  bookmarklet [APP_URL]   Print the page-capture bookmarklet

The page is read from FILE, or from standard input when --input is absent.
Everything after `--` is the share program and its arguments, passed as-is;
the labeled list is written to its standard input. On Linux, copy and the
clipboard share keep running until another application takes the clipboard.
Set RUST_LOG to control diagnostics (default: warn).";

struct Args {
    input: Option<PathBuf>,
    options: Options,
    command: String,
    rest: Vec<String>,
}

fn parse_args<I>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input = None;
    let mut options = Options::default();
    let mut command = None;
    let mut rest = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(String::new()),
            "--input" | "-i" => {
                input = Some(PathBuf::from(args.next().ok_or("--input needs a file")?));
            }
            "--note" => options.appended_note = Some(args.next().ok_or("--note needs text")?),
            "--" => {
                let argv: Vec<String> = args.by_ref().collect();
                if argv.is_empty() {
                    return Err("`--` needs a share program".to_string());
                }
                options.share_command = Some(argv);
            }
            _ if command.is_none() => command = Some(arg),
            _ => rest.push(arg),
        }
    }

    Ok(Args {
        input,
        options,
        command: command.ok_or("missing command")?,
        rest,
    })
}

fn read_page(input: Option<&PathBuf>) -> io::Result<String> {
    let bytes = match input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(decode_page(&bytes))
}

/// A clipboard that outlives this process's exit where the platform needs it.
fn holding_clipboard(announce: bool) -> SystemClipboard {
    let clipboard = SystemClipboard::holding();
    if announce && clipboard.holds_selection() {
        eprintln!("Serving the clipboard until another application takes it (Ctrl+C to stop).");
    }
    clipboard
}

fn report(notice: Option<Notice>) -> ExitCode {
    match notice {
        Some(notice) if notice.is_error() => {
            eprintln!("{}", notice.text);
            ExitCode::FAILURE
        }
        Some(notice) => {
            eprintln!("{}", notice.text);
            ExitCode::SUCCESS
        }
        None => ExitCode::SUCCESS,
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("error: {msg}\n");
            }
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = args.options.validate() {
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    if args.command == "bookmarklet" {
        let app_url = args.rest.first().map_or(DEFAULT_APP_URL, String::as_str);
        println!("{}", bookmarklet_snippet(app_url));
        return ExitCode::SUCCESS;
    }

    let page = match read_page(args.input.as_ref()) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("error: failed to read page: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::initialize(args.options, Handoff::captured(page));
    let extracted = session
        .notice()
        .cloned()
        .unwrap_or_else(|| Notice::error(MSG_EMPTY_INPUT));
    if extracted.is_error() {
        return report(Some(extracted));
    }

    match args.command.as_str() {
        "list" => {
            print!("{}", session.render_text());
            ExitCode::SUCCESS
        }
        "json" => match serde_json::to_string_pretty(session.videos()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        "render" => {
            print!("{}", session.render_html());
            ExitCode::SUCCESS
        }
        "open-all" => report(Some(session.open_all(&mut SystemBrowser))),
        "share" => {
            let mut native = CommandShare::new(session.options().share_command.clone());
            let mut clipboard = holding_clipboard(!native.is_available());
            report(session.share(&mut native, &mut clipboard))
        }
        "copy" => report(session.copy(&mut holding_clipboard(true))),
        "export" => {
            let format = args.rest.first().map_or("text", String::as_str);
            let dir = args.rest.get(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
            report(session.export(Some(format), &dir))
        }
        other => {
            eprintln!("error: unknown command {other:?}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_share_program_arguments_are_kept_whole() {
        let parsed = parse_args(argv(&["share", "--", "notify-send", "Video Links", "--urgency=low"]));
        let Ok(args) = parsed else {
            panic!("arguments rejected");
        };

        assert_eq!(args.command, "share");
        assert_eq!(
            args.options.share_command,
            Some(argv(&["notify-send", "Video Links", "--urgency=low"]))
        );
    }

    #[test]
    fn test_options_after_separator_belong_to_share_program() {
        let parsed = parse_args(argv(&["-i", "page.html", "share", "--", "mail", "--note", "x"]));
        let Ok(args) = parsed else {
            panic!("arguments rejected");
        };

        assert_eq!(args.input, Some(PathBuf::from("page.html")));
        assert!(args.options.appended_note.is_none());
        assert_eq!(args.options.share_command, Some(argv(&["mail", "--note", "x"])));
    }

    #[test]
    fn test_empty_separator_is_rejected() {
        assert!(parse_args(argv(&["share", "--"])).is_err());
        assert!(parse_args(argv(&["--"])).is_err());
    }
}
