use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for the target-language selector
///
/// This module owns the fixed list of languages offered by the UI dropdown
/// and provides helpers for validating, normalizing, and resolving them
/// against ISO 639 codes.
/// Supported target languages, paired with their ISO 639-1 codes.
///
/// The order is the display order of the dropdown.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 16] = [
    ("German", "de"),
    ("French", "fr"),
    ("Chinese", "zh"),
    ("Japanese", "ja"),
    ("Spanish", "es"),
    ("Italian", "it"),
    ("Russian", "ru"),
    ("Portuguese", "pt"),
    ("Dutch", "nl"),
    ("Korean", "ko"),
    ("Arabic", "ar"),
    ("Turkish", "tr"),
    ("Hindi", "hi"),
    ("Swedish", "sv"),
    ("Norwegian", "no"),
    ("Danish", "da"),
];

/// Get the display names of all supported target languages, in dropdown order
pub fn supported_language_names() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|(name, _)| *name).collect()
}

/// Check whether a language name is in the supported list
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn is_supported_language(name: &str) -> bool {
    let normalized = name.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .any(|(lang, _)| lang.eq_ignore_ascii_case(normalized))
}

/// Resolve a supported language name to its canonical display form
///
/// Returns the exact casing used by the dropdown, so that prompts always
/// carry the same language label regardless of how the client spelled it.
pub fn canonical_language_name(name: &str) -> Result<&'static str> {
    let normalized = name.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(normalized))
        .map(|(lang, _)| *lang)
        .ok_or_else(|| anyhow!("Unsupported target language: {}", name))
}

/// Get the ISO 639-1 code for a supported language name
pub fn language_code(name: &str) -> Result<&'static str> {
    let normalized = name.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(normalized))
        .map(|(_, code)| *code)
        .ok_or_else(|| anyhow!("Unsupported target language: {}", name))
}

/// Validate that a supported language's code resolves against ISO 639-1
///
/// The dropdown list is fixed, so this mostly guards against table drift;
/// it also rejects names outside the list.
pub fn validate_language_name(name: &str) -> Result<()> {
    let code = language_code(name)?;
    Language::from_639_1(code)
        .ok_or_else(|| anyhow!("Language code does not resolve to an ISO 639-1 language: {}", code))?;
    Ok(())
}

/// Get the language name from an ISO 639-1 code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();
    let lang = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
