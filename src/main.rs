// Line-oriented front end for the playlist editor.
//
// Each input line is one toolbar action or gesture; song positions are
// 1-based like the cards shown to the user.

use playlister::{EditorConfig, PlaylistSession, SessionError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  lists                       show playlists
  new <name>                  create a playlist
  load <n>                    edit playlist n
  rename <name>               rename the loaded playlist
  delete <n>                  delete playlist n (not undoable)
  close                       close the loaded playlist
  add                         append a new song
  rm <n>                      remove song n
  edit <n> <title>|<artist>|<youTubeId>
  mv <from> <to>              move song
  undo | redo
  show                        print the loaded playlist
  quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let config = match EditorConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            EditorConfig::default()
        }
    };
    let mut session = PlaylistSession::new(config);

    println!("=== Playlister ===");
    println!("{}\n", HELP);

    let stdin = io::stdin();
    loop {
        print!("{}> ", prompt(&session));
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match run(&mut session, line) {
            Ok(Some(message)) => println!("{}", message),
            Ok(None) => {}
            Err(e) => eprintln!("ERROR: {}", e),
        }
    }
}

fn prompt(session: &PlaylistSession) -> String {
    let name = session
        .current_list()
        .map(|list| list.name.clone())
        .unwrap_or_default();
    let undo = if session.can_undo() { "U" } else { "-" };
    let redo = if session.can_redo() { "R" } else { "-" };
    format!("[{}{}] {}", undo, redo, name)
}

fn run(session: &mut PlaylistSession, line: &str) -> Result<Option<String>, String> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "help" => Ok(Some(HELP.to_string())),
        "lists" => Ok(Some(
            session
                .library()
                .iter()
                .enumerate()
                .map(|(i, list)| format!("{:>3}. {} ({} songs)", i + 1, list.name, list.len()))
                .collect::<Vec<_>>()
                .join("\n"),
        )),
        "new" => {
            let name = if rest.is_empty() { "Untitled" } else { rest };
            let id = session.add_new_list(name, vec![]);
            session.load_list(id).map_err(err)?;
            Ok(None)
        }
        "load" => {
            let id = list_id(session, rest)?;
            session.load_list(id).map_err(err)?;
            Ok(None)
        }
        "rename" => session.rename_current_list(rest).map(|_| None).map_err(err),
        "delete" => {
            let id = list_id(session, rest)?;
            let removed = session.delete_list(id).map_err(err)?;
            Ok(Some(format!("Deleted '{}'", removed.name)))
        }
        "close" => {
            session.close_list();
            Ok(None)
        }
        "add" => session.add_create_song_transaction().map(|_| None).map_err(err),
        "rm" => {
            let index = position(rest)?;
            session.add_remove_song_transaction(index).map(|_| None).map_err(err)
        }
        "edit" => {
            let (index, fields) = rest
                .split_once(' ')
                .ok_or("usage: edit <n> <title>|<artist>|<id>")?;
            let mut parts = fields.splitn(3, '|').map(str::trim);
            let title = parts.next().unwrap_or_default();
            let artist = parts.next().unwrap_or_default();
            let you_tube_id = parts.next().unwrap_or_default();
            session
                .add_update_song_transaction(position(index)?, title, artist, you_tube_id)
                .map(|_| None)
                .map_err(err)
        }
        "mv" => {
            let (from, to) = rest.split_once(' ').ok_or("usage: mv <from> <to>")?;
            session
                .add_move_song_transaction(position(from)?, position(to)?)
                .map(|_| None)
                .map_err(err)
        }
        "undo" => Ok(Some(match session.undo().map_err(err)? {
            Some(description) => format!("Undo: {}", description),
            None => "Nothing to undo".to_string(),
        })),
        "redo" => Ok(Some(match session.redo().map_err(err)? {
            Some(description) => format!("Redo: {}", description),
            None => "Nothing to redo".to_string(),
        })),
        "show" => {
            let list = session.current_list().ok_or("No playlist is loaded")?;
            Ok(Some(
                list.songs()
                    .iter()
                    .enumerate()
                    .map(|(i, song)| format!("{:>3}. {} ({})", i + 1, song, song.you_tube_id))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ))
        }
        other => Err(format!("Unknown command '{}', try 'help'", other)),
    }
}

fn err(e: SessionError) -> String {
    e.to_string()
}

/// Parse a 1-based position into an index
fn position(text: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("'{}' is not a valid position", text.trim())),
    }
}

fn list_id(session: &PlaylistSession, text: &str) -> Result<playlister::ListId, String> {
    let index = position(text)?;
    session
        .library()
        .list(index)
        .map(|list| list.id)
        .ok_or_else(|| format!("No playlist number {}", index + 1))
}
