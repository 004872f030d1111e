use crate::core::{
    category::FileCategory,
    config::Config,
    error::Result,
    output::{print_category_section, print_info},
    state::StatusReport,
    status::StatusParser,
    StatusSource,
};
use std::path::PathBuf;

/// Flags accepted by `git-sift status`
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    pub path: Option<PathBuf>,
    /// Overrides the config's `show_full_path` when set
    pub full_path: Option<bool>,
    pub json: bool,
    pub category: Option<FileCategory>,
}

pub fn execute_status(options: &StatusOptions) -> Result<()> {
    let config = Config::load()?;
    let mut parser = StatusParser::from_config(&config, options.path.as_deref())?;
    if let Some(full_path) = options.full_path {
        parser = parser.with_full_paths(full_path);
    }
    log::debug!("Reading status for {}", parser.repo_path());

    // A single category is printed bare, one path per line, for use in pipelines
    if let Some(category) = options.category {
        for path in category_files(&parser, category)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let report = parser.report()?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn category_files<S: StatusSource>(
    parser: &StatusParser<S>,
    category: FileCategory,
) -> Result<Vec<PathBuf>> {
    match category {
        FileCategory::New => parser.new_files(),
        FileCategory::Modified => parser.modified_files(),
        FileCategory::Untracked => parser.untracked_files(),
    }
}

pub fn print_report(report: &StatusReport) {
    if report.is_clean() {
        print_info("Nothing new, modified or untracked");
        return;
    }

    println!();
    for category in FileCategory::ALL {
        print_category_section(category, report.files(category));
    }
}
