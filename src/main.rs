use clap::Parser;
use revision_rest::config::toml_config::{DeployConfig, TagStrategy};
use revision_rest::core::TagGenerator;
use revision_rest::utils::{logger, validation::Validate};
use revision_rest::{
    Cli, Command, FixedTag, GitShaTagger, LocalStorage, RevisionAdapter, RevisionError,
    TerminalReporter, TimestampTagger,
};

const EXIT_FAILED: i32 = 1;

fn tag_generator(config: &DeployConfig, explicit: Option<String>) -> Box<dyn TagGenerator> {
    if let Some(tag) = explicit {
        return Box::new(FixedTag(tag));
    }

    match &config.tagging {
        Some(tagging) => match tagging.strategy {
            TagStrategy::Git => Box::new(GitShaTagger::new(
                tagging.project.clone(),
                tagging.repo_dir.clone().unwrap_or_else(|| ".".to_string()),
            )),
            TagStrategy::Timestamp => Box::new(TimestampTagger::new(tagging.project.clone())),
        },
        None => {
            // 沒設定時用目前目錄名稱當 project
            let project = std::env::current_dir()
                .ok()
                .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().to_string()))
                .unwrap_or_else(|| "app".to_string());
            Box::new(GitShaTagger::new(project, "."))
        }
    }
}

fn exit_with_error(e: &RevisionError) -> ! {
    tracing::error!("❌ Setup failed: {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };
    if let Err(e) = config.validate() {
        exit_with_error(&e);
    }

    let reporter = TerminalReporter::new(cli.color_enabled(&config));
    let explicit_tag = match &cli.command {
        Command::Upload { tag, .. } => tag.clone(),
        _ => None,
    };
    let tags = tag_generator(&config, explicit_tag);

    let adapter = match RevisionAdapter::new(config.adapter_config(), tags, reporter) {
        Ok(adapter) => adapter,
        Err(e) => exit_with_error(&e),
    };

    let outcome = match cli.command {
        Command::Upload { dist_dir, file, .. } => {
            let storage = LocalStorage::new(dist_dir);
            adapter.upload_from(&storage, &file).await
        }
        Command::List => adapter.list().await,
        Command::Activate { revision } => adapter.activate(revision.as_deref()).await,
    };

    if outcome.is_failed() {
        std::process::exit(EXIT_FAILED);
    }
}
