use super::render::{
    print_config, print_full_snippets, print_languages, print_messages, print_snippets,
};
use super::setup::{Cli, Commands};
use snipz::api::{config, parse_tags, ConfigAction, SnipzApi, SnipzPaths};
use snipz::error::{Result, SnipzError};
use snipz::init::{config_dir, initialize};
use snipz::model::{NewSnippet, SnippetPatch};
use snipz::store::fs::JsonFileBackend;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

struct AppContext {
    api: SnipzApi<JsonFileBackend>,
    default_language: String,
}

pub fn run(cli: Cli) -> Result<()> {
    // Config edits must work without touching the data file
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(key, value);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { language }) => handle_list(&ctx, language),
        Some(Commands::Languages) => handle_languages(&ctx),
        Some(Commands::Search { language, query }) => handle_search(&ctx, query, language),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::Add {
            title,
            language,
            tags,
            code,
        }) => handle_add(&mut ctx, title, language, tags, code),
        Some(Commands::Edit {
            id,
            title,
            language,
            code,
            tags,
            clear_tags,
        }) => handle_edit(&mut ctx, id, title, language, code, tags, clear_tags),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(&current_dir(), cli.file.clone())?;

    print_messages(&ctx.api.startup_messages());

    Ok(AppContext {
        api: ctx.api,
        default_language: ctx.config.default_language,
    })
}

fn handle_list(ctx: &AppContext, language: Option<String>) -> Result<()> {
    let language = language.unwrap_or_else(|| ctx.default_language.clone());
    let result = ctx.api.list_snippets(&language)?;
    print_snippets(&result.listed_snippets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_languages(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_languages()?;
    print_languages(&result.languages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: Vec<String>, language: Option<String>) -> Result<()> {
    let query = query.join(" ");
    let result = ctx.api.search_snippets(&query, language.as_deref())?;
    print_snippets(&result.listed_snippets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[i64]) -> Result<()> {
    let result = ctx.api.view_snippets(ids)?;
    print_full_snippets(&result.listed_snippets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    language: Option<String>,
    tags: Option<String>,
    code: Option<String>,
) -> Result<()> {
    let code = match code {
        Some(code) if code != "-" => code,
        _ => read_piped_stdin()?.unwrap_or_default(),
    };
    let fields = NewSnippet::new(
        title.unwrap_or_default(),
        language.unwrap_or_default(),
        code,
        tags.as_deref().map(parse_tags).unwrap_or_default(),
    );

    let result = ctx.api.add_snippet(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: i64,
    title: Option<String>,
    language: Option<String>,
    code: Option<String>,
    tags: Option<String>,
    clear_tags: bool,
) -> Result<()> {
    let code = if code.as_deref() == Some("-") {
        let piped = read_piped_stdin()?;
        Some(piped.ok_or_else(|| SnipzError::Api("--code - expects piped stdin".to_string()))?)
    } else {
        code
    };
    let tags = if clear_tags {
        Some(Vec::new())
    } else {
        tags.as_deref().map(parse_tags)
    };
    let patch = SnippetPatch {
        title,
        language,
        code,
        tags,
    };

    let result = ctx.api.update_snippet(id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[i64]) -> Result<()> {
    let result = ctx.api.delete_snippets(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let paths = SnipzPaths {
        config_dir: config_dir(&current_dir()),
    };
    let result = config(&paths, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Read all of stdin when it is piped. Returns None for an interactive terminal.
fn read_piped_stdin() -> Result<Option<String>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}
