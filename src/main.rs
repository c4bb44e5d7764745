//! Contact Directory - import entry point
//!
//! Reads a JSON array of contacts from stdin, adds each one to a fresh
//! directory, and writes a JSON report of what was accepted and rejected to
//! stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_directory::{Config, Contact, ContactDirectory, ContactDraft};
use serde::Serialize;
use std::io::{self, Read};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct Rejection {
    index: usize,
    error: String,
}

#[derive(Debug, Serialize)]
struct ImportReport {
    added: usize,
    rejected: Vec<Rejection>,
    contacts: Vec<Contact>,
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let drafts: Vec<Option<ContactDraft>> =
        serde_json::from_str(&input).context("Expected a JSON array of contacts")?;

    let report = import(drafts, config.initial_capacity);
    info!(
        added = report.added,
        rejected = report.rejected.len(),
        "Import finished"
    );

    serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
    println!();
    Ok(())
}

fn import(drafts: Vec<Option<ContactDraft>>, capacity: usize) -> ImportReport {
    let mut directory = ContactDirectory::with_capacity(capacity);
    let mut rejected = Vec::new();

    for (index, draft) in drafts.into_iter().enumerate() {
        let result = draft
            .map(Contact::try_from)
            .transpose()
            .and_then(|contact| directory.add(contact));

        if let Err(e) = result {
            warn!(index, error = %e, "Rejected contact");
            rejected.push(Rejection {
                index,
                error: e.to_string(),
            });
        }
    }

    let mut contacts: Vec<Contact> = directory.iter().cloned().collect();
    contacts.sort_by(|a, b| a.id().cmp(b.id()));

    ImportReport {
        added: directory.len(),
        rejected,
        contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_reports_rejections_by_index() {
        let drafts: Vec<Option<ContactDraft>> = serde_json::from_str(
            r#"[
                {"id":"ID1","first_name":"Alice","last_name":"Smith","phone":"1112223333","address":"1 Apple Rd"},
                null,
                {"id":"ID1","first_name":"Charlie","last_name":"Brown","phone":"7778889999","address":"3 Cherry Ln"},
                {"id":"ID2","first_name":"Bob","last_name":"Johnson","phone":"444-555-6666","address":"2 Banana Ct"}
            ]"#,
        )
        .unwrap();

        let report = import(drafts, 4);

        assert_eq!(report.added, 1);
        let indexes: Vec<usize> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert_eq!(report.rejected[0].error, "Contact cannot be null");
        assert_eq!(report.contacts[0].first_name(), "Alice");
    }
}
