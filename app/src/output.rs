//! Rendering of contact listings on stdout.

use std::io::{self, Write};

use phonedir_core::{Contact, SearchOutcome};
use serde::Serialize;

const NAME_HEADING: &str = "Name";
const PHONE_HEADING: &str = "Phone Number";
const NO_RESULTS_ROW: &str = "No contacts found";

#[derive(Serialize)]
struct NoResults {
    no_results: bool,
}

pub fn print_contacts(contacts: &[&Contact], json: bool) -> anyhow::Result<()> {
    write_contacts(&mut io::stdout().lock(), contacts, json)
}

pub fn print_search(outcome: &SearchOutcome<'_>, json: bool) -> anyhow::Result<()> {
    write_search(&mut io::stdout().lock(), outcome, json)
}

pub fn write_contacts<W: Write>(out: &mut W, contacts: &[&Contact], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, contacts)?;
        writeln!(out)?;
    } else {
        write_table(out, contacts)?;
    }
    Ok(())
}

pub fn write_search<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome<'_>,
    json: bool,
) -> anyhow::Result<()> {
    match outcome {
        SearchOutcome::Matches(found) => write_contacts(out, found, json),
        SearchOutcome::NoResults if json => {
            serde_json::to_writer_pretty(&mut *out, &NoResults { no_results: true })?;
            writeln!(out)?;
            Ok(())
        }
        SearchOutcome::NoResults => Ok(write_no_results(out)?),
    }
}

/// Two left-aligned columns sized to the widest cell.
pub fn write_table<W: Write>(out: &mut W, contacts: &[&Contact]) -> io::Result<()> {
    let width = contacts
        .iter()
        .map(|c| c.name.chars().count())
        .chain(std::iter::once(NAME_HEADING.len()))
        .max()
        .unwrap_or_default();

    writeln!(out, "{NAME_HEADING:<width$}  {PHONE_HEADING}")?;
    for contact in contacts {
        writeln!(out, "{:<width$}  {}", contact.name, contact.phone)?;
    }
    Ok(())
}

pub fn write_no_results<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NAME_HEADING}  {PHONE_HEADING}")?;
    writeln!(out, "{NO_RESULTS_ROW}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(contacts: &[&Contact]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, contacts).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_pads_names_to_widest() {
        let alice = Contact::new("Alice Rahman", "100", "Desk");
        let bob = Contact::new("Bob", "200", "Fm");
        let text = render(&[&alice, &bob]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name          Phone Number");
        assert_eq!(lines[1], "Alice Rahman  100");
        assert_eq!(lines[2], "Bob           200");
    }

    #[test]
    fn empty_table_is_header_only() {
        let text = render(&[]);
        assert_eq!(text, "Name  Phone Number\n");
    }

    fn render_search(outcome: &SearchOutcome<'_>, json: bool) -> String {
        let mut buf = Vec::new();
        write_search(&mut buf, outcome, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_no_results_is_a_marker_object() {
        let text = render_search(&SearchOutcome::NoResults, true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({ "no_results": true }));
    }

    #[test]
    fn json_matches_are_a_contact_array() {
        let alice = Contact::new("Alice", "100", "Desk");
        let text = render_search(&SearchOutcome::Matches(vec![&alice]), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "name": "Alice", "phone": "100", "group": "Desk" }])
        );
    }

    #[test]
    fn json_empty_group_listing_is_an_empty_array() {
        let mut buf = Vec::new();
        write_contacts(&mut buf, &[], true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn table_no_results_shows_placeholder_row() {
        let text = render_search(&SearchOutcome::NoResults, false);
        assert_eq!(text, "Name  Phone Number\nNo contacts found\n");
    }

    #[test]
    fn no_results_row_is_distinct_from_empty_table() {
        let mut buf = Vec::new();
        write_no_results(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("No contacts found\n"));
        assert_ne!(text, render(&[]));
    }
}
