//! Filesystem side of the app: decklist uploads, JSON import/export and
//! writing a deck back out as text.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use cubedeck_core::{draft_uploaded_deck, render_deck_text, ColourInputs, Deck, NewDeck};

/// Split user-typed paths on whitespace; double quotes group a path with spaces.
pub fn split_paths(input: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in input.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(PathBuf::from(current));
    }
    paths
}

/// Expand directories to the `.txt` files directly inside them, sorted by name.
pub fn expand_deck_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)
                .wrap_err_with(|| format!("could not list {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "txt"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Read and parse every file, one deck per file, in order.
///
/// All or nothing: one unreadable file means no decks are returned.
pub fn read_deck_files(paths: &[PathBuf], colours: &ColourInputs) -> Result<Vec<NewDeck>> {
    let files = expand_deck_paths(paths)?;
    let now = now_millis();
    files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("could not read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(draft_uploaded_deck(&file_name, &text, colours, now))
        })
        .collect()
}

pub fn read_import(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))
}

pub fn write_export(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).wrap_err_with(|| format!("could not write {}", path.display()))
}

/// Decklist text for one deck, colour directive first so it survives re-upload
pub fn deck_text(deck: &Deck) -> String {
    let cards = render_deck_text(&deck.cards);
    if deck.colour.trim().is_empty() {
        cards
    } else {
        format!("COLOUR={}\n{}", deck.colour, cards)
    }
}

/// Write `deck` as `<dir>/<name>.txt` and return the path.
pub fn write_deck_text(dir: &Path, deck: &Deck) -> Result<PathBuf> {
    let stem: String = deck
        .name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    if stem.trim().is_empty() {
        return Err(eyre!("deck has no usable file name"));
    }
    let path = dir.join(format!("{}.txt", stem));
    fs::write(&path, deck_text(deck))
        .wrap_err_with(|| format!("could not write {}", path.display()))?;
    Ok(path)
}

/// Render an error with its causes for a one-line notice
pub fn describe(err: &color_eyre::Report) -> String {
    err.chain()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubedeck_core::{parse_deck_text, DeckCollection};

    #[test]
    fn test_split_paths() {
        assert_eq!(
            split_paths(r#"a.txt  "my deck.txt" b"#),
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("my deck.txt"),
                PathBuf::from("b")
            ]
        );
        assert!(split_paths("   ").is_empty());
    }

    #[test]
    fn test_read_deck_files_one_per_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("burn.txt"), "COLOUR=red\n4 Lightning Bolt").unwrap();
        fs::write(dir.path().join("empty.txt"), "sideboard only").unwrap();
        fs::write(dir.path().join("notes.md"), "4 Ignored").unwrap();

        let decks = read_deck_files(&[dir.path().to_path_buf()], &ColourInputs::default()).unwrap();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].name, "Lightning_Bolt");
        assert_eq!(decks[0].colour, "red");
        assert_eq!(decks[1].name, "empty");
        assert_eq!(decks[1].colour, "#ffffff");
    }

    #[test]
    fn test_read_deck_files_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "1 Bolt").unwrap();
        let missing = dir.path().join("missing.txt");

        let err = read_deck_files(&[good, missing], &ColourInputs::default()).unwrap_err();
        assert!(describe(&err).contains("missing.txt"));
    }

    #[test]
    fn test_deck_text_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut col = DeckCollection::new();
        let parsed = parse_deck_text("COLOUR=#ff0000 # primary\n2 Mountain\n4 Lightning Bolt");
        let id = col.add(NewDeck::new("Red/Burn", parsed.cards, parsed.colour));
        let deck = col.get(&id).unwrap();

        let path = write_deck_text(dir.path(), deck).unwrap();
        assert_eq!(path.file_name().unwrap(), "Red_Burn.txt");
        let reparsed = parse_deck_text(&fs::read_to_string(&path).unwrap());
        assert_eq!(reparsed.cards, deck.cards);
        assert_eq!(reparsed.colour, "#ff0000");
    }

    #[test]
    fn test_export_then_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.json");
        let mut col = DeckCollection::new();
        col.add(NewDeck::new("Burn", parse_deck_text("4 Bolt").cards, "red"));
        write_export(&path, &col.export_json().unwrap()).unwrap();

        let mut other = DeckCollection::new();
        other.import_json(&read_import(&path).unwrap()).unwrap();
        assert_eq!(other.decks()[0].name, "Burn");
    }
}
