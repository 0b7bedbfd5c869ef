//! City name normalization for weather lookups

/// Common misspellings of Indian city names and their canonical forms.
/// Matched against the already-capitalized name, exact match only.
pub const CITY_CORRECTIONS: &[(&str, &str)] = &[
    ("Banglore", "Bangalore"),
    ("Dilli", "Delhi"),
    ("Bombay", "Mumbai"),
    ("Calcuta", "Kolkata"),
    ("Calcutta", "Kolkata"),
    ("Madras", "Chennai"),
    ("Poone", "Pune"),
    ("Hydrabad", "Hyderabad"),
];

/// Normalize a free-text city name.
///
/// Trims, lowercases, capitalizes each word, then applies the spelling
/// correction table. Returns an empty string for blank input. Idempotent.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let normalized = trimmed
        .to_lowercase()
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    for (misspelled, canonical) in CITY_CORRECTIONS {
        if normalized == *misspelled {
            return (*canonical).to_string();
        }
    }

    normalized
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
