// description.md sidecar parsing

use crate::error::{Result, SiteError};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;

pub const DESCRIPTION_FILE: &str = "description.md";

const OVERVIEW_HEADING: &str = "Overview";
const MAX_LOCATION_LEN: usize = 100;
const LOCATION_NOISE: [&str; 4] = ["[", "Year", "Category", "Notes"];
const TEMPLATE_MARKERS: [&str; 2] = ["[Add a brief", "[Describe"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDetails {
    pub description: String,
    pub location: Option<String>,
    pub year: Option<String>,
}

/// True when a description is missing or still holds template text.
pub fn is_template(description: &str) -> bool {
    description.trim().is_empty() || TEMPLATE_MARKERS.iter().any(|marker| description.contains(marker))
}

pub fn parse(markdown: &str) -> ProjectDetails {
    let mut details = ProjectDetails::default();
    let mut overview = Vec::new();

    let mut heading: Option<(HeadingLevel, String)> = None;
    let mut in_overview = false;
    let mut overview_done = false;
    let mut paragraph: Option<String> = None;
    // One buffer per open list item; nested items get their own.
    let mut items: Vec<String> = Vec::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => heading = Some((level, String::new())),
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = heading.take() {
                    if level == HeadingLevel::H1 {
                        continue;
                    }
                    if in_overview {
                        in_overview = false;
                        overview_done = true;
                    } else if !overview_done
                        && level == HeadingLevel::H2
                        && text.trim().starts_with(OVERVIEW_HEADING)
                    {
                        in_overview = true;
                    }
                }
            }
            Event::Start(Tag::Paragraph) if items.is_empty() => paragraph = Some(String::new()),
            Event::End(TagEnd::Paragraph) if items.is_empty() => {
                if let Some(text) = paragraph.take() {
                    let text = text.trim();
                    if in_overview && !text.is_empty() && !text.starts_with('[') {
                        overview.push(text.to_string());
                    }
                }
            }
            Event::Start(Tag::Item) => items.push(String::new()),
            Event::End(TagEnd::Item) => {
                if let Some(text) = items.pop() {
                    read_list_field(text.trim(), &mut details);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buffer)) = heading.as_mut() {
                    buffer.push_str(&text);
                } else if let Some(buffer) = items.last_mut() {
                    buffer.push_str(&text);
                } else if let Some(buffer) = paragraph.as_mut() {
                    buffer.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(buffer) = items.last_mut() {
                    buffer.push(' ');
                } else if let Some(buffer) = paragraph.as_mut() {
                    buffer.push(' ');
                }
            }
            _ => {}
        }
    }

    details.description = overview.join(" ");
    details
}

pub fn read(dir: &Path) -> Result<Option<ProjectDetails>> {
    let path = dir.join(DESCRIPTION_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path).map_err(|e| SiteError::io(&path, e))?;
    Ok(Some(parse(&text)))
}

fn read_list_field(text: &str, details: &mut ProjectDetails) {
    if let Some(value) = text.strip_prefix("Location:") {
        if details.location.is_none() {
            details.location = clean_location(value.trim());
        }
        return;
    }

    let value = text
        .strip_prefix("Year of Commission:")
        .or_else(|| text.strip_prefix("Year:"));
    if let (Some(value), None) = (value, &details.year) {
        details.year = leading_year(value.trim());
    }
}

fn clean_location(value: &str) -> Option<String> {
    let contaminated =
        value.len() > MAX_LOCATION_LEN || LOCATION_NOISE.iter().any(|noise| value.contains(noise));

    let value = if contaminated {
        let end = value
            .find(|c: char| !(c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '.' | '-')))
            .unwrap_or(value.len());
        value[..end].trim()
    } else {
        value
    };

    (!value.is_empty()).then(|| value.to_string())
}

fn leading_year(value: &str) -> Option<String> {
    let value = value.strip_prefix('[').unwrap_or(value);
    let digits: String = value.chars().take(4).collect();
    (digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit())).then_some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL: &str = "# Sea Villa

## Overview

A weekend house on the Konkan coast.
Built around a courtyard.

[Add images below]

- not part of the text

## Details

- **Location:** Alibaug, India
- **Year of Commission:** 2022
- **Category:** Residential
";

    #[test]
    fn test_parse_full_document() {
        let details = parse(FULL);
        assert_eq!(
            details.description,
            "A weekend house on the Konkan coast. Built around a courtyard."
        );
        assert_eq!(details.location.as_deref(), Some("Alibaug, India"));
        assert_eq!(details.year.as_deref(), Some("2022"));
    }

    #[test]
    fn test_placeholders_are_ignored() {
        let details = parse(
            "## Overview\n\n[Add a brief description]\n\n- **Location:** [Location]\n- **Year:** [YYYY]\n",
        );
        assert_eq!(details.description, "");
        assert_eq!(details.location, None);
        assert_eq!(details.year, None);
    }

    #[test]
    fn test_bracketed_year() {
        let details = parse("- **Year:** [2019]\n");
        assert_eq!(details.year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_contaminated_location_is_trimmed() {
        let details = parse("- **Location:** Milan, Italy [check]\n");
        assert_eq!(details.location.as_deref(), Some("Milan, Italy"));
    }

    #[test]
    fn test_overview_stops_at_next_heading() {
        let details = parse("## Overview\n\nFirst.\n\n### Notes\n\nLater.\n");
        assert_eq!(details.description, "First.");
    }

    #[test]
    fn test_is_template() {
        assert!(is_template(""));
        assert!(is_template("[Describe the project]"));
        assert!(is_template("Intro [Add a brief summary]"));
        assert!(!is_template("A quiet house."));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read(dir.path()).unwrap(), None);

        std::fs::write(dir.path().join(DESCRIPTION_FILE), FULL).unwrap();
        let details = read(dir.path()).unwrap().unwrap();
        assert_eq!(details.year.as_deref(), Some("2022"));
    }
}
