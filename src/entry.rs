//! Line model for the hosts file: classification and entry parsing.

use std::net::Ipv4Addr;

use anyhow::{Context, Result};

/// One physical line of the hosts file, 0-indexed in file order.
#[derive(Debug, Clone)]
pub struct RawLine {
    pub text: String,
    pub index: usize,
}

/// A line that matched the entry pattern, linked back to its line index.
#[derive(Debug, Clone)]
pub struct HostEntry {
    pub address: Ipv4Addr,
    pub name: String,
    pub index: usize,
}

impl RawLine {
    /// Leading whitespace stripped, line starts with `#`.
    pub fn is_comment(&self) -> bool {
        self.text.trim_start().starts_with('#')
    }

    /// Empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Match a line against the entry pattern: optional leading whitespace, a
/// dotted-quad address, one-or-more whitespace, a single hostname token,
/// optional trailing whitespace and nothing else.
///
/// Returns the address and hostname tokens. Octets are not range-checked
/// here; `999.1.2.3` matches the pattern.
pub fn match_entry(text: &str) -> Option<(&str, &str)> {
    let rest = text.trim_start();
    let addr_end = rest.find(char::is_whitespace)?;
    let (address, rest) = rest.split_at(addr_end);
    if !is_dotted_quad(address) {
        return None;
    }
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }
    let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_end);
    if !rest.trim_start().is_empty() {
        return None;
    }
    Some((address, name))
}

/// Four groups of 1-3 ASCII digits separated by dots.
fn is_dotted_quad(token: &str) -> bool {
    let mut groups = 0;
    for group in token.split('.') {
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// Parse a line into a [`HostEntry`] if it matches the entry pattern.
///
/// A non-matching line is `None` and simply not part of the valid view. A
/// matching line whose address token does not parse as IPv4 is an error,
/// not a skip.
pub fn parse_entry(line: &RawLine) -> Result<Option<HostEntry>> {
    let Some((address, name)) = match_entry(&line.text) else {
        return Ok(None);
    };
    let address: Ipv4Addr = address
        .parse()
        .with_context(|| format!("invalid address {address:?} on line {}", line.index + 1))?;
    Ok(Some(HostEntry {
        address,
        name: name.to_string(),
        index: line.index,
    }))
}
