// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;

/// Only lowercase letters and decimal digits survive into a slug.
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Ll}\p{Nd}]+").expect("word pattern is valid"));
static MARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{M}+").expect("mark pattern is valid"));

/// Lower-cased word runs joined by hyphens; punctuation and underscores are
/// dropped, not replaced. Combining marks are stripped so accents written in
/// decomposed form do not split a word.
#[derive(Default, Clone)]
pub struct KebabSlugGenerator;

impl SlugGenerator for KebabSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let unmarked = MARKS.replace_all(&lowered, "");
        WORD.find_iter(&unmarked)
            .map(|word| word.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}
