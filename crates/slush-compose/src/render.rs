//! Query letter rendering.
//!
//! The letter is assembled paragraph by paragraph from the manuscript
//! intake. Required fields (title, genre, word count, summary, author
//! name) abort composition when absent; optional paragraphs are skipped
//! with a warning instead. The summary is lightly filtered so the plot
//! paragraph does not repeat what the pitch line already says.

use serde::{Deserialize, Serialize};
use slush_core::entities::Manuscript;

use crate::error::ComposeError;
use crate::guidance::missing_compose_fields;

/// Comps beyond this count are dropped from the appeal line.
const MAX_COMPS: usize = 3;

const SALUTATION: &str = "Dear Acquisitions Team,";
const CLOSING: &str =
    "Thank you for your time and consideration. The full manuscript is available upon request.";

/// A rendered letter plus warnings about optional paragraphs that were
/// skipped for lack of intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposedLetter {
    pub body: String,
    pub warnings: Vec<String>,
}

/// The composer's required fields, borrowed out of a manuscript after
/// validation.
struct RequiredFields<'a> {
    title: &'a str,
    genre: &'a str,
    word_count: i64,
    summary: &'a str,
    author_name: &'a str,
}

fn required_fields(manuscript: &Manuscript) -> Result<RequiredFields<'_>, ComposeError> {
    match (
        manuscript.title.as_deref(),
        manuscript.genre.as_deref(),
        manuscript.word_count.filter(|n| *n > 0),
        manuscript.summary.as_deref(),
        manuscript.author_name.as_deref(),
    ) {
        (Some(title), Some(genre), Some(word_count), Some(summary), Some(author_name)) => {
            Ok(RequiredFields {
                title,
                genre,
                word_count,
                summary,
                author_name,
            })
        }
        _ => Err(ComposeError::MissingFields(missing_compose_fields(Some(
            manuscript,
        )))),
    }
}

/// Render a complete query letter from recorded intake.
///
/// # Errors
///
/// Returns `ComposeError::MissingFields` when any required field is
/// absent, listing exactly the missing ones.
pub fn compose_letter(manuscript: &Manuscript) -> Result<ComposedLetter, ComposeError> {
    let req = required_fields(manuscript)?;
    let word_count = format_word_count(req.word_count);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    paragraphs.push(SALUTATION.to_string());

    match manuscript.personalization_notes.as_deref() {
        Some(notes) => paragraphs.push(notes.to_string()),
        None => warnings
            .push("no personalization notes; skipping the personalization paragraph".to_string()),
    }

    paragraphs.push(format!(
        "I'm hoping you will consider my {} novel, {}, complete at {} words.",
        req.genre, req.title, word_count
    ));

    let plot = filter_summary(req.summary, req.title, &word_count);
    if plot.is_empty() {
        warnings.push("summary filtered to empty; letter has no plot paragraph".to_string());
    } else {
        paragraphs.push(plot);
    }

    match manuscript.detail_summary.as_deref() {
        Some(detail) => paragraphs.push(detail.to_string()),
        None => warnings.push("no detail summary; skipping the detail paragraph".to_string()),
    }

    match join_comps(&manuscript.comparative_titles) {
        Some(comps) => paragraphs.push(format!(
            "{} will appeal to readers of {} because of its shared genre and tonal style.",
            req.title, comps
        )),
        None => warnings.push("no comparative titles; skipping the comps line".to_string()),
    }

    match manuscript.author_bio.as_deref() {
        Some(bio) => paragraphs.push(bio.to_string()),
        None => warnings.push("no author bio; skipping the bio paragraph".to_string()),
    }

    paragraphs.push(CLOSING.to_string());
    paragraphs.push(format!(
        "{},\n{}",
        manuscript.tone.signoff(),
        req.author_name
    ));

    Ok(ComposedLetter {
        body: paragraphs.join("\n\n"),
        warnings,
    })
}

/// Format a word count with thousands separators: `96000` -> `"96,000"`.
#[must_use]
pub fn format_word_count(n: i64) -> String {
    let raw = n.to_string();
    let (sign, digits) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |d| ("-", d));

    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Join items as natural English: `A`, `A and B`, `A, B, and C`.
pub(crate) fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => (*one).to_string(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Clean and join comparative titles, or `None` when none survive.
fn join_comps(comps: &[String]) -> Option<String> {
    let cleaned: Vec<&str> = comps
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .take(MAX_COMPS)
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(join_natural(&cleaned))
    }
}

/// Drop summary sentences that repeat the pitch line (title or word
/// count) and a leading seeking-representation preamble.
fn filter_summary(summary: &str, title: &str, word_count: &str) -> String {
    let plain_count = word_count.replace(',', "");
    let mut kept = Vec::new();
    for (i, sentence) in split_sentences(summary).into_iter().enumerate() {
        let is_preamble = i == 0
            && (sentence.starts_with("I'm hoping you will consider")
                || sentence.starts_with("I am seeking representation"));
        let repeats_pitch = sentence.contains(title)
            || sentence.contains(word_count)
            || sentence.contains(&plain_count);
        if !(is_preamble || repeats_pitch) {
            kept.push(sentence);
        }
    }
    kept.join(" ")
}

/// Naive sentence splitter: breaks after `.`/`!`/`?` followed by
/// whitespace or end of input.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?')
            && chars.peek().is_none_or(|next| next.is_whitespace())
        {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trailing = current.trim();
    if !trailing.is_empty() {
        sentences.push(trailing.to_string());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::IntakeField;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use slush_core::enums::LetterTone;

    fn full_manuscript() -> Manuscript {
        let mut m = Manuscript::empty("prj-t1", Utc::now());
        m.title = Some("The Glass Orchard".to_string());
        m.genre = Some("literary fantasy".to_string());
        m.word_count = Some(96_000);
        m.summary = Some(
            "I'm hoping you will consider my novel. When a glassblower's apprentice \
             discovers her breath turns sand into living trees, she must choose between \
             the guild that raised her and the orchard that calls her name. \
             The Glass Orchard is a story of belonging. It runs 96,000 words."
                .to_string(),
        );
        m.comparative_titles = vec!["Piranesi".to_string(), "The Starless Sea".to_string()];
        m.author_name = Some("Mara Voss".to_string());
        m.author_bio =
            Some("Mara Voss is a debut novelist and former glass artist from Leeds.".to_string());
        m.personalization_notes = Some(
            "I loved your recent list, especially its attention to quiet fantasy.".to_string(),
        );
        m.tone = LetterTone::WarmProfessional;
        m
    }

    #[test]
    fn compose_full_letter_golden() {
        let letter = compose_letter(&full_manuscript()).unwrap();

        let expected = "Dear Acquisitions Team,\n\n\
            I loved your recent list, especially its attention to quiet fantasy.\n\n\
            I'm hoping you will consider my literary fantasy novel, The Glass Orchard, \
            complete at 96,000 words.\n\n\
            When a glassblower's apprentice discovers her breath turns sand into living \
            trees, she must choose between the guild that raised her and the orchard \
            that calls her name.\n\n\
            The Glass Orchard will appeal to readers of Piranesi and The Starless Sea \
            because of its shared genre and tonal style.\n\n\
            Mara Voss is a debut novelist and former glass artist from Leeds.\n\n\
            Thank you for your time and consideration. The full manuscript is available \
            upon request.\n\n\
            Warmly,\nMara Voss";
        assert_eq!(letter.body, expected);

        // Only the detail paragraph was skipped
        assert_eq!(
            letter.warnings,
            vec!["no detail summary; skipping the detail paragraph"]
        );
    }

    #[test]
    fn compose_minimal_letter_warns_per_skipped_paragraph() {
        let mut m = Manuscript::empty("prj-t1", Utc::now());
        m.title = Some("Ash and Salt".to_string());
        m.genre = Some("horror".to_string());
        m.word_count = Some(71_500);
        m.summary = Some("A lighthouse keeper hears her own voice on the radio.".to_string());
        m.author_name = Some("J. Okafor".to_string());

        let letter = compose_letter(&m).unwrap();
        assert!(letter.body.starts_with("Dear Acquisitions Team,"));
        assert!(letter.body.contains(
            "I'm hoping you will consider my horror novel, Ash and Salt, \
             complete at 71,500 words."
        ));
        assert!(letter.body.ends_with("Sincerely,\nJ. Okafor"));
        assert_eq!(letter.warnings.len(), 4);
    }

    #[test]
    fn compose_missing_fields_lists_exactly_them() {
        let mut m = Manuscript::empty("prj-t1", Utc::now());
        m.title = Some("Ash and Salt".to_string());
        m.genre = Some("horror".to_string());

        let err = compose_letter(&m).unwrap_err();
        let ComposeError::MissingFields(fields) = err;
        assert_eq!(
            fields,
            vec![
                IntakeField::WordCount,
                IntakeField::Summary,
                IntakeField::AuthorName
            ]
        );
    }

    #[test]
    fn signoff_follows_tone() {
        let mut m = full_manuscript();
        m.tone = LetterTone::Professional;
        assert!(
            compose_letter(&m)
                .unwrap()
                .body
                .ends_with("Sincerely,\nMara Voss")
        );

        m.tone = LetterTone::LiteraryProfessional;
        assert!(
            compose_letter(&m)
                .unwrap()
                .body
                .ends_with("Sincerely,\nMara Voss")
        );

        m.tone = LetterTone::WarmProfessional;
        assert!(
            compose_letter(&m)
                .unwrap()
                .body
                .ends_with("Warmly,\nMara Voss")
        );
    }

    #[test]
    fn comps_trimmed_capped_and_joined() {
        let mut m = full_manuscript();
        m.comparative_titles = vec![
            "  Piranesi  ".to_string(),
            String::new(),
            "The Starless Sea".to_string(),
            "The Night Circus".to_string(),
            "A Fourth Comp".to_string(),
        ];

        let letter = compose_letter(&m).unwrap();
        assert!(letter.body.contains(
            "readers of Piranesi, The Starless Sea, and The Night Circus because"
        ));
        assert!(!letter.body.contains("A Fourth Comp"));
    }

    #[test]
    fn summary_filtered_to_empty_warns() {
        let mut m = full_manuscript();
        m.summary = Some("The Glass Orchard is about an orchard of glass.".to_string());

        let letter = compose_letter(&m).unwrap();
        assert!(
            letter
                .warnings
                .iter()
                .any(|w| w.contains("summary filtered to empty"))
        );
    }

    #[test]
    fn format_word_count_groups() {
        assert_eq!(format_word_count(0), "0");
        assert_eq!(format_word_count(950), "950");
        assert_eq!(format_word_count(1_000), "1,000");
        assert_eq!(format_word_count(71_500), "71,500");
        assert_eq!(format_word_count(96_000), "96,000");
        assert_eq!(format_word_count(1_250_000), "1,250,000");
    }

    #[test]
    fn join_natural_forms() {
        assert_eq!(join_natural(&[]), "");
        assert_eq!(join_natural(&["A"]), "A");
        assert_eq!(join_natural(&["A", "B"]), "A and B");
        assert_eq!(join_natural(&["A", "B", "C"]), "A, B, and C");
    }

    #[test]
    fn split_sentences_handles_terminators() {
        let sentences = split_sentences("One. Two! Three? Four");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn preamble_only_dropped_when_leading() {
        let filtered = filter_summary(
            "I am seeking representation for my book. She sails north. \
             Critics say I am seeking representation in vain.",
            "Unrelated Title",
            "96,000",
        );
        assert_eq!(
            filtered,
            "She sails north. Critics say I am seeking representation in vain."
        );
    }
}
