//! Hosts file snapshot and the three operations: list view, upsert, clear.
//!
//! Each invocation reads the file once into an ordered line snapshot and
//! performs at most one terminal write: a whole-file rewrite or a single
//! append. No locking; a concurrent writer loses (last writer wins).

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::entry::{self, HostEntry, RawLine};

/// In-memory snapshot of the hosts file.
#[derive(Debug)]
pub struct HostsFile {
    path: PathBuf,
    lines: Vec<RawLine>,
}

impl HostsFile {
    /// Read the whole file into an ordered line snapshot.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("read hosts file: {}", path.display()))?;
        let lines = content
            .lines()
            .enumerate()
            .map(|(index, text)| RawLine {
                text: text.to_string(),
                index,
            })
            .collect();
        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Valid entries in file order: non-comment, non-blank lines matching
    /// the entry pattern. Lines failing the pattern are skipped silently.
    pub fn entries(&self) -> Result<Vec<HostEntry>> {
        let mut entries = Vec::new();
        for line in &self.lines {
            if line.is_comment() || line.is_blank() {
                continue;
            }
            if let Some(e) = entry::parse_entry(line)? {
                entries.push(e);
            }
        }
        Ok(entries)
    }

    /// Update the first entry named `host` in place, or append a new entry
    /// if none exists. The address is written as given, unvalidated.
    pub fn upsert(&self, address: &str, host: &str) -> Result<()> {
        let entries = self.entries()?;
        match entries.iter().find(|e| e.name == host) {
            Some(existing) => {
                let lines = self.lines.iter().map(|line| {
                    if line.index == existing.index {
                        format!("{address} {host}")
                    } else {
                        line.text.clone()
                    }
                });
                self.rewrite(lines)
            }
            None => self.append(&format!("{address} {host}")),
        }
    }

    /// Drop every line whose raw text contains `host` as a substring,
    /// keeping comments and blank lines regardless. Substring, not exact
    /// name: coarser than upsert's lookup.
    pub fn clear(&self, host: &str) -> Result<()> {
        let lines = self
            .lines
            .iter()
            .filter(|line| line.is_comment() || line.is_blank() || !line.text.contains(host))
            .map(|line| line.text.clone());
        self.rewrite(lines)
    }

    /// Whole-file rewrite: every line, `\n`-terminated.
    fn rewrite(&self, lines: impl Iterator<Item = String>) -> Result<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(&line);
            content.push('\n');
        }
        fs::write(&self.path, content)
            .with_context(|| format!("write hosts file: {}", self.path.display()))
    }

    /// Append one line without rewriting the rest of the file.
    fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("append to hosts file: {}", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("append to hosts file: {}", self.path.display()))
    }
}
