// Category folder names to display names, categories and descriptions

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Upper-case service title.
    pub display_name: String,
    /// Category string stored on projects and used as the service filter.
    pub category: String,
    pub description: String,
}

const COMMERCIAL: (&str, &str, &str) = (
    "COMMERCIAL DESIGN",
    "Commercial Design",
    "Functional, inspiring environments for businesses to thrive. We design spaces that embody brand identity.",
);
const RESIDENTIAL: (&str, &str, &str) = (
    "RESIDENTIAL DESIGN",
    "Residential Design",
    "Custom homes that reflect your lifestyle and aspirations. We blend modern aesthetics with functional living spaces.",
);
const MIXED_USE: (&str, &str, &str) = (
    "MIXED-USE DESIGN",
    "Mixed-use Design",
    "Integrated developments combining multiple uses into cohesive urban experiences that enhance community living.",
);
const MASTER_PLANNING: (&str, &str, &str) = (
    "MASTER PLANNING",
    "Master Planning",
    "Comprehensive master planning projects that create sustainable and integrated community developments.",
);
const EXPLORATIONS: (&str, &str, &str) = (
    "EXPLORATIONS",
    "Explorations",
    "Conceptual studies and experimental designs that push the boundaries of architectural innovation.",
);

/// Lower-case, hyphen-separated form of a folder name.
pub fn folder_key(folder: &str) -> String {
    let mut key = String::with_capacity(folder.len());
    let mut in_space = false;
    for c in folder.chars() {
        if c.is_whitespace() {
            if !in_space {
                key.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c == '_' {
            key.push('-');
        } else {
            key.extend(c.to_lowercase());
        }
    }
    key
}

pub fn category_info(folder: &str) -> CategoryInfo {
    let known = match folder_key(folder).as_str() {
        "commercial" | "commercial-design" => Some(COMMERCIAL),
        "residential" | "residential-design" => Some(RESIDENTIAL),
        "mixed-use" | "mixed-use-design" => Some(MIXED_USE),
        "master-planning" => Some(MASTER_PLANNING),
        "explorations" => Some(EXPLORATIONS),
        _ => None,
    };

    if let Some((display_name, category, description)) = known {
        return CategoryInfo {
            display_name: display_name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        };
    }

    let category = folder
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    CategoryInfo {
        display_name: folder.to_uppercase().replace('-', " "),
        category,
        description: format!("Projects in {folder} category."),
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// camelCase identifier from a folder key, e.g. `mixed-use-design` to `mixedUseDesign`.
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_word = false;

    for (index, c) in key.chars().enumerate() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_word {
            if index == 0 {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else if c != '-' && !c.is_whitespace() {
            out.push(c);
        }
        prev_word = is_word;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_folders() {
        for folder in ["commercial", "Commercial Design", "commercial_design"] {
            let info = category_info(folder);
            assert_eq!(info.category, "Commercial Design", "{folder}");
            assert_eq!(info.display_name, "COMMERCIAL DESIGN");
        }
        assert_eq!(category_info("mixed-use").category, "Mixed-use Design");
        assert_eq!(category_info("Master Planning").display_name, "MASTER PLANNING");
        assert_eq!(category_info("explorations").category, "Explorations");
    }

    #[test]
    fn test_unknown_folder_is_title_cased() {
        let info = category_info("hospitality-and_RESORTS");
        assert_eq!(info.category, "Hospitality And Resorts");
        assert_eq!(info.display_name, "HOSPITALITY AND_RESORTS");
        assert_eq!(info.description, "Projects in hospitality-and_RESORTS category.");
    }

    #[test]
    fn test_folder_key() {
        assert_eq!(folder_key("Mixed  Use_Design"), "mixed-use-design");
        assert_eq!(folder_key("explorations"), "explorations");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("mixed-use-design"), "mixedUseDesign");
        assert_eq!(camel_case("master-planning"), "masterPlanning");
        assert_eq!(camel_case("explorations"), "explorations");
        assert_eq!(camel_case("phase-2-works"), "phase2Works");
    }
}
