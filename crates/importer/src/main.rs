use contracts::usecases::u501_import_policy_services::ImportRequest;
use importer::domain::a001_policy_service::template::write_template;
use importer::shared::config::{load_config, resolve_path};
use importer::shared::file_io::{LocalDir, LocalFile};
use importer::usecases::u501_import_policy_services::{
    ImportExecutor, ImportSession, PolicyApiClient,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    importer::system::tracing::initialize()?;

    let config = load_config()?;

    if config.template.write {
        let sink = LocalDir::new(resolve_path(&config.template.output_dir));
        write_template(&sink).await?;
    }

    let Some(file) = config
        .import
        .file
        .as_deref()
        .filter(|f| !f.trim().is_empty())
    else {
        tracing::info!("No import file configured, nothing to do");
        return Ok(());
    };

    if config.import.policy_id.trim().is_empty() {
        anyhow::bail!("import.policy_id is not set in config.toml");
    }

    let api = Arc::new(PolicyApiClient::new(&config.api)?);
    let executor =
        ImportExecutor::new(api).with_max_displayed_errors(config.import.max_displayed_errors);
    let mut session =
        ImportSession::new(Duration::from_millis(config.import.success_reset_delay_ms));

    let request = ImportRequest {
        policy_id: config.import.policy_id.clone(),
        default_category_id: config.import.default_category_id.clone(),
    };
    let source = LocalFile::new(resolve_path(file));

    match executor.run(&mut session, &source, &request).await {
        Ok(result) => {
            tracing::info!("{} (session {})", result.message, result.session_id);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}
