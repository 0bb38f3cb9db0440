use std::fs::File;
use std::io::Read;
use std::path::Path;

use dbgen_core::columns::CLIENT_CODE_ALIASES;
use dbgen_core::{ClientId, Error};

use crate::errors::GenerationError;

/// Reads client codes from a client dataset CSV.
///
/// The code column is found by header (see [`CLIENT_CODE_ALIASES`]). Values
/// are trimmed and blanks skipped. Input that is not valid UTF-8 is decoded
/// as Latin-1.
pub fn read_client_ids<R: Read>(mut reader: R) -> Result<Vec<ClientId>, GenerationError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = decode(bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = csv_reader.headers()?.clone();
    let column = CLIENT_CODE_ALIASES
        .iter()
        .find_map(|alias| headers.iter().position(|header| header.trim() == *alias))
        .ok_or_else(|| {
            Error::config(format!(
                "client CSV must contain a '{}' column",
                CLIENT_CODE_ALIASES[0]
            ))
        })?;

    let mut ids = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let code = record.get(column).unwrap_or_default().trim();
        if !code.is_empty() {
            ids.push(ClientId::new(code));
        }
    }

    if ids.is_empty() {
        return Err(Error::config("no client codes found in client CSV").into());
    }
    Ok(ids)
}

pub fn read_client_ids_from_path(path: &Path) -> Result<Vec<ClientId>, GenerationError> {
    let file = File::open(path).map_err(|err| {
        Error::config(format!("cannot open client CSV {}: {err}", path.display()))
    })?;
    read_client_ids(file)
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}
