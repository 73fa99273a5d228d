use directory_core::Msg;

pub const HELP: &str = "\
Commands:
  search <text>   filter by name, title, bio or skills (`search` alone clears)
  / <text>        same as search
  page <n>        go to page n
  next, n         next page
  prev, p         previous page
  show            print the current page again
  help, ?         this text
  quit, q         exit";

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Update(Msg),
    Show,
    Help,
    Quit,
    /// Input that could not be understood; carries the message to show.
    Usage(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(query) = search_text(line) {
        return Command::Update(Msg::QueryChanged(query.to_string()));
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Update(Msg::NoOp);
    };
    let rest: Vec<&str> = words.collect();

    match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("next" | "n", []) => Command::Update(Msg::NextPage),
        ("prev" | "previous" | "p", []) => Command::Update(Msg::PreviousPage),
        ("page", [number]) => match number.parse::<i64>() {
            Ok(page) => Command::Update(Msg::PageRequested(page)),
            Err(_) => Command::Usage(format!("Not a page number: {number}")),
        },
        ("page", _) => Command::Usage("Usage: page <n>".to_string()),
        ("show", []) => Command::Show,
        ("help" | "?", []) => Command::Help,
        ("quit" | "q" | "exit", []) => Command::Quit,
        _ => Command::Usage(format!("Unknown command: {}. Type `help`.", line.trim())),
    }
}

/// Query text of a `search` or `/` command, verbatim after the separating space.
fn search_text(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if let Some(rest) = line.strip_prefix('/') {
        return Some(rest.strip_prefix(' ').unwrap_or(rest));
    }
    let rest = line.strip_prefix("search")?;
    if rest.trim().is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ')
}
