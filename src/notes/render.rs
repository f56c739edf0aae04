//! Markdown and HTML renderers for grouped release notes.
//!
//! Both write straight to the output stream; there is no intermediate
//! document value and nothing touches disk.

use std::io::{self, Write};

use crate::issues::group::IssueGroups;

/// "User story" pluralizes irregularly; every other type name takes a
/// literal "s", even where that spelling is wrong ("Query" -> "Querys").
fn type_heading(type_name: &str) -> String {
    if type_name == "User story" {
        "User stories".to_string()
    } else {
        format!("{type_name}s")
    }
}

/// Render markdown release notes.
///
/// Issues without a summary fall back to the browse URL so the reader can
/// follow the key by hand.
pub fn render_markdown<W: Write>(
    out: &mut W,
    groups: &IssueGroups,
    tracker_url: &str,
) -> io::Result<()> {
    for (type_name, records) in groups.iter() {
        writeln!(out)?;
        writeln!(out, "### {}", type_heading(type_name))?;
        for record in records {
            match &record.summary {
                Some(summary) => {
                    writeln!(out, "- {} - {}", record.key.to_uppercase(), summary)?;
                }
                None => {
                    writeln!(
                        out,
                        "- {} - {}/browse/{}",
                        record.key.to_uppercase(),
                        tracker_url,
                        record.key
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Render HTML release notes.
///
/// Every item links to the issue's browse URL. Items without a summary show
/// the bare key as captured, not upper-cased.
pub fn render_html<W: Write>(
    out: &mut W,
    groups: &IssueGroups,
    tracker_url: &str,
) -> io::Result<()> {
    for (type_name, records) in groups.iter() {
        writeln!(out)?;
        writeln!(out, "<h2>{}</h2>", type_heading(type_name))?;
        writeln!(out, "<ul>")?;
        for record in records {
            let href = format!("{}/browse/{}", tracker_url, record.key);
            match &record.summary {
                Some(summary) => {
                    writeln!(
                        out,
                        "    <li>[<a href='{}'>{}</a>] - {}</li>",
                        href,
                        record.key.to_uppercase(),
                        summary
                    )?;
                }
                None => {
                    writeln!(out, "    <li>[<a href='{}'>{}</a>]</li>", href, record.key)?;
                }
            }
        }
        writeln!(out, "</ul>")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_story_pluralizes_irregularly() {
        assert_eq!(type_heading("User story"), "User stories");
    }

    #[test]
    fn test_other_types_take_literal_s() {
        assert_eq!(type_heading("Bug"), "Bugs");
        assert_eq!(type_heading("Sub-task"), "Sub-tasks");
        // Wrong spelling preserved on purpose.
        assert_eq!(type_heading("Query"), "Querys");
    }
}
