use colored::Colorize;
use snipz::api::{CmdMessage, LanguageCount, MessageLevel};
use snipz::config::SnipzConfig;
use snipz::model::Snippet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const LANGUAGE_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_snippets(snippets: &[Snippet]) {
    if snippets.is_empty() {
        println!("No snippets found.");
        return;
    }

    for snippet in snippets {
        let id_str = format!("{:>width$}. ", snippet.id, width = ID_WIDTH - 2);
        let language = truncate_to_width(&snippet.language, LANGUAGE_WIDTH);
        let language_pad = LANGUAGE_WIDTH.saturating_sub(language.width());

        let available = LINE_WIDTH.saturating_sub(ID_WIDTH + LANGUAGE_WIDTH + 1);
        let title_tags = if snippet.tags.is_empty() {
            snippet.title.clone()
        } else {
            format!("{} {}", snippet.title, format_tags(&snippet.tags))
        };
        let title_display = truncate_to_width(&title_tags, available);
        // Keep the tag part dimmed when it survived truncation
        let (title_part, tag_part) = match title_display.strip_prefix(snippet.title.as_str()) {
            Some(rest) => (snippet.title.clone(), rest.to_string()),
            None => (title_display.clone(), String::new()),
        };

        println!(
            "{}{}{} {}{}",
            id_str.yellow(),
            language.cyan(),
            " ".repeat(language_pad),
            title_part.bold(),
            tag_part.dimmed()
        );
    }
}

pub(super) fn print_full_snippets(snippets: &[Snippet]) {
    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("#{}", snippet.id).yellow(),
            snippet.title.bold()
        );
        let subtitle = if snippet.tags.is_empty() {
            snippet.language.clone()
        } else {
            format!("{} | {}", snippet.language, format_tags(&snippet.tags))
        };
        println!("{}", subtitle.dimmed());
        println!("--------------------------------");
        println!("{}", snippet.code);
    }
}

pub(super) fn print_languages(languages: &[LanguageCount]) {
    for entry in languages {
        println!(
            "  {} {}",
            entry.language.cyan(),
            format!("({})", entry.count).dimmed()
        );
    }
}

pub(super) fn print_config(config: &SnipzConfig) {
    for key in SnipzConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
