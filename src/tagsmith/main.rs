use clap::Parser;
use tagsmith::api::{ConfigAction, TagsmithApi};
use tagsmith::config::TagsmithConfig;
use tagsmith::error::Result;
use tagsmith::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_entries, print_messages, print_paths, print_tags};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    let result = match cli.command {
        Commands::Init => api.init()?,
        Commands::Import { file } => api.import(&file)?,
        Commands::Use { tag } => api.use_tag(&tag)?,
        Commands::Folder { path } => api.set_folder(&path)?,
        Commands::Tags => api.list_tags()?,
        Commands::Add { tag } => api.add_tag(&tag)?,
        Commands::Remove { tag, force } => api.remove_tag(&tag, force)?,
        Commands::Select { paths } => api.select(&paths)?,
        Commands::Tag { paths } => api.tag_files(&paths)?,
        Commands::Untag { paths } => api.untag_files(&paths)?,
        Commands::Show { tag } => api.show(tag.as_deref())?,
        Commands::Scan => api.scan()?,
        Commands::Prefix { new_prefix } => api.change_prefix(&new_prefix)?,
        Commands::Preview => api.preview()?,
        Commands::Export { output } => api.export(output)?,
        Commands::Config { key, value } => api.config(config_action(key, value))?,
    };

    if let Some(rendered) = &result.rendered {
        println!("{}", rendered);
    }
    print_tags(&result.listed_tags);
    print_paths(&result.listed_paths);
    print_entries(&result.listed_entries);
    print_messages(&result.messages);

    Ok(())
}

fn init_api(cli: &Cli) -> Result<TagsmithApi<FileStore>> {
    let config = TagsmithConfig::load(&cli.dir)?;
    let store = FileStore::new(cli.dir.clone());
    Ok(TagsmithApi::new(store, cli.dir.clone(), config))
}

fn config_action(key: Option<String>, value: Option<String>) -> ConfigAction {
    match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
        (Some(key), None) => ConfigAction::Get(key),
        (None, _) => ConfigAction::Show,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
