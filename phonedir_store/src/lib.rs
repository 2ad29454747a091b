#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Comma-separated file backend for the contact directory.
//!
//! The file starts with the fixed header `name,phone,group` followed by one
//! row per contact in insertion order. Fields containing commas, quotes or
//! line breaks are quoted.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use phonedir_core::{Contact, ContactStore, Error, HEADER, Result};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CsvContactStore {
    path: PathBuf,
}

impl CsvContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_err(&self, reason: impl ToString) -> Error {
        Error::store_write(&self.path, reason)
    }

    fn read_err(&self, reason: impl ToString) -> Error {
        Error::store_read(&self.path, reason)
    }

    fn write_rows<W: Write>(&self, out: W, contacts: &[Contact], header: bool) -> Result<W> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        if header {
            writer
                .write_record(HEADER)
                .map_err(|e| self.write_err(e))?;
        }
        for contact in contacts {
            writer.serialize(contact).map_err(|e| self.write_err(e))?;
        }
        writer.into_inner().map_err(|e| self.write_err(e.error()))
    }
}

impl ContactStore for CsvContactStore {
    fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            debug!("Contact store already exists at {}", self.path.display());
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }
        let file = File::create(&self.path).map_err(|e| self.write_err(e))?;
        self.write_rows(file, &[], true)?;

        info!("Created contact store at {}", self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Contact>> {
        let file = File::open(&self.path).map_err(|e| self.read_err(e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| self.read_err(e))?.clone();
        if headers.is_empty() {
            return Err(self.read_err("missing header"));
        }
        if headers.iter().ne(HEADER) {
            return Err(self.read_err(format!(
                "unexpected header {:?}, expected {}",
                headers.iter().collect::<Vec<_>>(),
                HEADER.join(",")
            )));
        }

        let mut contacts = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| self.read_err(e))?;
            let line = record.position().map_or(0, csv::Position::line);
            let [name, phone, group] = [0, 1, 2].map(|i| record.get(i));
            match (name, phone, group, record.len()) {
                (Some(name), Some(phone), Some(group), 3) => {
                    contacts.push(Contact::new(name, phone, group));
                }
                (.., len) => {
                    return Err(self.read_err(format!(
                        "line {line}: expected 3 fields, found {len}"
                    )));
                }
            }
        }

        debug!(
            "Loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    fn append(&self, contact: &Contact) -> Result<()> {
        self.initialize()?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_err(e))?;
        if !ends_with_newline(&mut file).map_err(|e| self.write_err(e))? {
            debug!("Terminating last line of {}", self.path.display());
            file.write_all(b"\n").map_err(|e| self.write_err(e))?;
        }
        let mut file = self.write_rows(file, std::slice::from_ref(contact), false)?;
        file.flush().map_err(|e| self.write_err(e))?;

        debug!("Appended {} to {}", contact.name, self.path.display());
        Ok(())
    }

    fn replace_all(&self, contacts: &[Contact]) -> Result<()> {
        let temp = self.temp_path();
        let file = File::create(&temp).map_err(|e| self.write_err(e))?;
        let file = self.write_rows(file, contacts, true)?;
        file.sync_all().map_err(|e| self.write_err(e))?;
        drop(file);

        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            self.write_err(e)
        })?;

        info!(
            "Rewrote {} with {} contacts",
            self.path.display(),
            contacts.len()
        );
        Ok(())
    }
}

/// Whether `file` is empty or its last byte is a line feed.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
