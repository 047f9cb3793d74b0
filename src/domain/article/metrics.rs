// src/domain/article/metrics.rs
//! Word counting over mixed HTML/Markdown article bodies.

/// Average adult silent-reading speed.
pub const WORDS_PER_MINUTE: u64 = 183;

const MARKUP_PREFIXES: [char; 5] = ['#', '-', '=', '>', '*'];

/// Count readable words. Everything inside `<figure>…</figure>` is skipped
/// (the first closing tag ends the skip), `<div>` blocks are skipped by depth,
/// and tokens opening with a heading, list, rule or quote marker are ignored.
pub fn count_words(text: &str) -> u64 {
    let mut words = 0;
    let mut in_figure = false;
    let mut div_depth: usize = 0;

    for token in text.split_whitespace() {
        if in_figure {
            if token.contains("</figure>") {
                in_figure = false;
            }
            continue;
        }
        if token.starts_with("<figure") {
            in_figure = !token.contains("</figure>");
            continue;
        }

        let opens_div = token.starts_with("<div");
        if opens_div || div_depth > 0 {
            if opens_div {
                div_depth += 1;
            }
            div_depth = div_depth.saturating_sub(token.matches("</div>").count());
            continue;
        }

        if token.starts_with(MARKUP_PREFIXES) {
            continue;
        }
        words += 1;
    }

    words
}

/// Whole minutes needed to read `text`, rounded up. Markup-only input is 0.
pub fn estimate_read_minutes(text: &str) -> u32 {
    let words = count_words(text);
    let seconds = (words * 60).div_ceil(WORDS_PER_MINUTE);
    u32::try_from(seconds.div_ceil(60)).unwrap_or(u32::MAX)
}
