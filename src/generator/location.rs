// Fallback location and year derived from a project folder name

const DEFAULT_COUNTRY: &str = "India";

/// Place names recognised anywhere in a title, checked in order.
const KNOWN_PLACES: &[(&str, &str)] = &[
    ("Mumbai", "Mumbai, India"),
    ("Guwahati", "Guwahati, India"),
    ("Vrindavan", "Vrindavan, India"),
    ("Maldives", "Maldives"),
    ("UAQ", "Umm Al Quwain, UAE"),
    ("Umm Al Quwain", "Umm Al Quwain, UAE"),
    ("Cambridge", "West Cambridge, UK"),
    ("Bresso", "Bresso, Italy"),
    ("Kelavali", "India"),
    ("Raheja", "Mumbai, India"),
];

pub fn location_from_title(title: &str) -> String {
    if let Some((_, place)) = KNOWN_PLACES.iter().find(|(needle, _)| title.contains(needle)) {
        return place.to_string();
    }

    let suffix = title
        .rsplit_once(',')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
        .or_else(|| title.rsplit_once('—').map(|(_, rest)| rest))
        .map(str::trim)
        .filter(|rest| !rest.is_empty());

    match suffix {
        Some(place) if place.contains(',') => place.to_string(),
        Some(place) => format!("{place}, {DEFAULT_COUNTRY}"),
        None => DEFAULT_COUNTRY.to_string(),
    }
}

/// True for template placeholders left in a description file.
pub fn is_placeholder(location: &str) -> bool {
    let location = location.trim();
    location.is_empty() || location == "[Location]" || location.eq_ignore_ascii_case("location")
}

/// First standalone `20xx` token in a folder name, else `current_year`.
pub fn year_from_folder(name: &str, current_year: i32) -> String {
    let bytes = name.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    for start in 0..bytes.len().saturating_sub(3) {
        let token = &bytes[start..start + 4];
        if !(token[0] == b'2' && token[1] == b'0' && token[2].is_ascii_digit() && token[3].is_ascii_digit()) {
            continue;
        }
        let open = start == 0 || !is_word(bytes[start - 1]);
        let close = start + 4 == bytes.len() || !is_word(bytes[start + 4]);
        if open && close {
            return String::from_utf8_lossy(token).into_owned();
        }
    }
    current_year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_places() {
        assert_eq!(location_from_title("Sea Villa, Mumbai"), "Mumbai, India");
        assert_eq!(location_from_title("UAQ Marina"), "Umm Al Quwain, UAE");
        assert_eq!(location_from_title("West Cambridge Labs"), "West Cambridge, UK");
        assert_eq!(location_from_title("Kelavali Farmhouse"), "India");
        assert_eq!(location_from_title("Raheja Towers"), "Mumbai, India");
    }

    #[test]
    fn test_suffix_extraction() {
        assert_eq!(location_from_title("Hill House, Pune"), "Pune, India");
        assert_eq!(location_from_title("Lake Pavilion — Nashik"), "Nashik, India");
        assert_eq!(location_from_title("Untitled Study"), "India");
        assert_eq!(location_from_title("Trailing comma,"), "India");
    }

    #[test]
    fn test_placeholders() {
        assert!(is_placeholder("[Location]"));
        assert!(is_placeholder("Location"));
        assert!(is_placeholder("  "));
        assert!(!is_placeholder("Milan, Italy"));
    }

    #[test]
    fn test_year_from_folder() {
        assert_eq!(year_from_folder("Pavilion 2019", 2026), "2019");
        assert_eq!(year_from_folder("2021-tower", 2026), "2021");
        assert_eq!(year_from_folder("Block A20235", 2026), "2026");
        assert_eq!(year_from_folder("House_2020", 2026), "2026");
        assert_eq!(year_from_folder("abc", 2026), "2026");
    }
}
