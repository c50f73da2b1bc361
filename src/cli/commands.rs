//! Command dispatch

use std::collections::HashSet;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{check_alias_pattern, global_config_path, Settings};
use crate::domain::{CategoryId, LanguageId};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".to_string()));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Sort {
            file,
            root_parent_id,
            ignore_orphans,
        } => _sort(&container, file, *root_parent_id, *ignore_orphans),
        Commands::Tree {
            file,
            indent,
            language,
            no_alias,
            graph,
        } => _tree(&container, file, indent.as_deref(), *language, *no_alias, *graph),
        Commands::Path {
            file,
            id,
            language,
            separator,
            alias_pattern,
        } => _path(
            &container,
            file,
            *id,
            *language,
            separator.as_deref(),
            alias_pattern.as_deref(),
        ),
        Commands::Config { command } => _config(&container, command),
        Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(container))]
fn _sort(
    container: &ServiceContainer,
    file: &Path,
    root_parent_id: Option<CategoryId>,
    ignore_orphans: bool,
) -> CliResult<()> {
    let mut options = container.settings.sort_options();
    if let Some(root) = root_parent_id {
        options = options.root(root);
    }
    if ignore_orphans {
        options = options.ignore_orphans(true);
    }
    debug!("options: {:?}", options);

    let service = &container.categories;
    let categories = service.load(file)?;
    let order = service.tree_order(&categories, options)?;
    let unreached: HashSet<CategoryId> = order.unreached.iter().copied().collect();

    for category in &order.records {
        if unreached.contains(&category.id) {
            output::orphan_row(category.id, category.parent_id, &category.name);
        } else {
            output::row(category.id, category.parent_id, &category.name);
        }
    }
    let dropped = order.dropped(categories.len());
    if dropped > 0 {
        output::warning(&format!(
            "{} categories outside the tree of {} dropped",
            dropped, options.root_parent_id
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _tree(
    container: &ServiceContainer,
    file: &Path,
    indent: Option<&str>,
    language: Option<LanguageId>,
    no_alias: bool,
    graph: bool,
) -> CliResult<()> {
    let mut label = container.settings.label_options();
    if let Some(indent) = indent {
        label.indent_prefix = indent.to_string();
    }
    if language.is_some() {
        label.language_id = language;
    }
    if no_alias {
        label.with_alias = false;
    }

    let service = &container.categories;
    let categories = service.load(file)?;
    let sort = container.settings.sort_options();

    if graph {
        let tree = service.tree(&categories, sort)?;
        for rendered in tree.to_tree_strings(&label) {
            output::info(&rendered);
        }
        return Ok(());
    }

    for line in service.labels(&categories, sort, &label)? {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _path(
    container: &ServiceContainer,
    file: &Path,
    id: CategoryId,
    language: Option<LanguageId>,
    separator: Option<&str>,
    alias_pattern: Option<&str>,
) -> CliResult<()> {
    let mut options = container.settings.path_options();
    if language.is_some() {
        options.language_id = language;
    }
    if let Some(separator) = separator {
        options.separator = separator.to_string();
    }
    if let Some(pattern) = alias_pattern {
        check_alias_pattern(pattern).map_err(CliError::InvalidArgs)?;
        options.alias_pattern = Some(pattern.to_string());
    }

    let service = &container.categories;
    let categories = service.load(file)?;
    let path = service.breadcrumb(&categories, id, &options)?;
    if path.is_empty() {
        debug!("category {} not found", id);
    }
    output::info(&path);
    Ok(())
}

fn _config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("# effective settings");
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn shop_file() -> String {
        format!(
            "{}/tests/resources/categories/shop.toml",
            env!("CARGO_MANIFEST_DIR")
        )
    }

    #[test]
    fn given_flag_pattern_without_placeholder_when_path_then_invalid_args() {
        let file = shop_file();
        let cli = Cli::try_parse_from(["cattree", "path", &file, "4", "--alias-pattern", "[x]"])
            .unwrap();

        let result = execute_command(&cli);

        assert!(matches!(result, Err(CliError::InvalidArgs(_))));
        assert_eq!(result.unwrap_err().exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_config_pattern_without_placeholder_when_path_then_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("cattree.toml");
        std::fs::write(&config, "alias_pattern = \"[x]\"\n").unwrap();
        let file = shop_file();
        let cli = Cli::try_parse_from([
            "cattree",
            "-c",
            config.to_str().unwrap(),
            "path",
            &file,
            "4",
        ])
        .unwrap();

        let result = execute_command(&cli);

        assert_eq!(result.unwrap_err().exit_code(), crate::exitcode::CONFIG);
    }
}
