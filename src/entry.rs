use crate::candidate::BookCandidate;

const ISBN_LINK_TEMPLATE: &str = "https://isbnsearch.org/isbn/";

/// Display names for the language property. English and anything
/// outside this table omit the LANGUAGE line.
fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "ru" => Some("Russian"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "pl" => Some("Polish"),
        "el" => Some("Greek"),
        "la" => Some("Latin"),
        _ => None,
    }
}

fn category_tag(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Renders the textual block appended to the library file: a heading
/// line with the tag set, a property drawer in fixed key order, and a
/// blank separator line. The property order is part of the on-disk
/// contract.
pub fn format_entry(candidate: &BookCandidate) -> String {
    let physical = candidate.physical.unwrap_or(false);

    let mut tags: Vec<String> = Vec::new();
    if physical {
        tags.push("physical".to_string());
    }
    tags.extend(candidate.categories.iter().map(|c| category_tag(c)));

    let mut out = String::new();
    out.push_str("* ");
    out.push_str(&candidate.title);
    if !tags.is_empty() {
        out.push_str(&format!(" :{}:", tags.join(":")));
    }
    out.push('\n');

    out.push_str(":PROPERTIES:\n");
    out.push_str(&format!(
        ":ID: {}\n",
        uuid::Uuid::new_v4().to_string().to_uppercase()
    ));
    if !candidate.author.is_empty() {
        out.push_str(&format!(":AUTHOR: {}\n", candidate.author));
    }
    out.push_str(&format!(
        ":ADDED: {}\n",
        chrono::Local::now().format("%Y-%m-%d")
    ));
    if !candidate.isbn.is_empty() {
        out.push_str(&format!(
            ":ISBN-LINK: {}{}\n",
            ISBN_LINK_TEMPLATE, candidate.isbn
        ));
        out.push_str(&format!(":ISBN: {}\n", candidate.isbn));
    }
    if physical {
        out.push_str(":PHYSICAL: true\n");
    }
    if let Some(format) = &candidate.format {
        out.push_str(&format!(":FORMAT: {}\n", format));
    }
    if let Some(name) = language_name(&candidate.language) {
        out.push_str(&format!(":LANGUAGE: {}\n", name));
    }
    if let Some(path) = &candidate.file_path {
        out.push_str(&format!(":link: [[file:{}]]\n", path));
    }
    out.push_str(":END:\n\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> BookCandidate {
        BookCandidate {
            title: "Crime and Punishment".to_string(),
            author: "Fyodor Dostoevsky".to_string(),
            isbn: "9780140449136".to_string(),
            categories: vec!["Fiction".to_string()],
            language: "ru".to_string(),
            physical: Some(true),
            file_path: None,
            format: None,
        }
    }

    #[test]
    fn physical_tag_precedes_category_tags() {
        let entry = format_entry(&candidate());
        assert!(entry.starts_with("* Crime and Punishment :physical:fiction:\n"));
    }

    #[test]
    fn property_lines_in_fixed_order() {
        let entry = format_entry(&candidate());
        let lines: Vec<&str> = entry.lines().collect();

        assert_eq!(lines[1], ":PROPERTIES:");
        assert!(lines[2].starts_with(":ID: "));
        assert_eq!(lines[3], ":AUTHOR: Fyodor Dostoevsky");
        assert!(lines[4].starts_with(":ADDED: "));
        assert_eq!(
            lines[5],
            ":ISBN-LINK: https://isbnsearch.org/isbn/9780140449136"
        );
        assert_eq!(lines[6], ":ISBN: 9780140449136");
        assert_eq!(lines[7], ":PHYSICAL: true");
        assert_eq!(lines[8], ":LANGUAGE: Russian");
        assert_eq!(lines[9], ":END:");
        assert!(entry.ends_with(":END:\n\n"));
    }

    #[test]
    fn id_is_uppercase_uuid() {
        let entry = format_entry(&candidate());
        let id_line = entry.lines().find(|l| l.starts_with(":ID: ")).unwrap();
        let id = id_line.trim_start_matches(":ID: ");
        assert_eq!(id.len(), 36);
        assert_eq!(id, id.to_uppercase());
    }

    #[test]
    fn empty_isbn_omits_isbn_lines() {
        let mut c = candidate();
        c.isbn.clear();
        let entry = format_entry(&c);
        assert!(!entry.contains(":ISBN"));
    }

    #[test]
    fn english_and_unknown_languages_omit_language_line() {
        let mut c = candidate();
        c.language = "en".to_string();
        assert!(!format_entry(&c).contains(":LANGUAGE:"));
        c.language = "xx".to_string();
        assert!(!format_entry(&c).contains(":LANGUAGE:"));
    }

    #[test]
    fn digital_with_file_gets_format_and_link() {
        let mut c = candidate();
        c.physical = Some(false);
        c.set_file("~/books/crime.epub");
        let entry = format_entry(&c);
        assert!(!entry.contains(":PHYSICAL:"));
        assert!(entry.contains(":FORMAT: EPUB\n"));
        assert!(entry.contains(":link: [[file:~/books/crime.epub]]\n"));
        // No physical tag on the heading either.
        assert!(entry.starts_with("* Crime and Punishment :fiction:\n"));
    }

    #[test]
    fn multi_word_categories_become_underscored_tags() {
        let mut c = candidate();
        c.categories = vec!["Literary Criticism".to_string(), "History".to_string()];
        let entry = format_entry(&c);
        assert!(entry.starts_with("* Crime and Punishment :physical:literary_criticism:history:\n"));
    }

    #[test]
    fn no_tags_means_bare_heading() {
        let mut c = candidate();
        c.physical = Some(false);
        c.categories.clear();
        let entry = format_entry(&c);
        assert!(entry.starts_with("* Crime and Punishment\n"));
    }
}
