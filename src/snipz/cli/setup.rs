use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version)]
#[command(about = "Personal code-snippet manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snippet data file (overrides SNIPZ_FILE and the config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List snippets, optionally for one language
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Language to show ("all" for every snippet)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List languages with snippet counts
    #[command(alias = "langs", display_order = 2)]
    Languages,

    /// Search titles, languages and tags
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Restrict results to this language
        #[arg(short, long)]
        language: Option<String>,

        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show one or more snippets in full
    #[command(alias = "view", display_order = 10)]
    Show {
        /// Snippet ids
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        ids: Vec<i64>,
    },

    /// Add a snippet (code is read from stdin when --code is omitted)
    #[command(alias = "n", display_order = 11)]
    Add {
        /// Title
        #[arg(short, long)]
        title: Option<String>,

        /// Language (stored lowercase)
        #[arg(short, long)]
        language: Option<String>,

        /// Comma separated tags (e.g. "docker, deploy")
        #[arg(long)]
        tags: Option<String>,

        /// Code body
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Change fields of a snippet
    #[command(alias = "e", display_order = 12)]
    Edit {
        /// Snippet id
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New language
        #[arg(short, long)]
        language: Option<String>,

        /// New code body ("-" reads stdin)
        #[arg(short, long)]
        code: Option<String>,

        /// Replace tags with this comma separated list
        #[arg(long, conflicts_with = "clear_tags")]
        tags: Option<String>,

        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete one or more snippets
    #[command(alias = "rm", display_order = 13)]
    Delete {
        /// Snippet ids
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        ids: Vec<i64>,
    },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (data-file, default-language)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_words_and_language() {
        let cli = Cli::try_parse_from(["snipz", "search", "-l", "bash", "http", "server"]).unwrap();
        match cli.command {
            Some(Commands::Search { language, query }) => {
                assert_eq!(language.as_deref(), Some("bash"));
                assert_eq!(query, vec!["http", "server"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["snipz", "ls", "--file", "x.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn tags_conflict_with_clear_tags() {
        let parsed =
            Cli::try_parse_from(["snipz", "edit", "1", "--tags", "a", "--clear-tags"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn negative_ids_parse_as_values() {
        let cli = Cli::try_parse_from(["snipz", "show", "-1", "4"]).unwrap();
        match cli.command {
            Some(Commands::Show { ids }) => assert_eq!(ids, vec![-1, 4]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
