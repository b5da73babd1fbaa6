//! Generate command implementation

use crate::error::CliError;
use dbt_lookml::{GeneratorConfig, LookMLExporter, LookmlFile};
use std::path::{Path, PathBuf};
use tracing::info;

/// File extension LookML tooling expects on disk
const LOOKML_EXTENSION: &str = "lkml";

fn write_file(dir: &Path, file: &LookmlFile) -> Result<PathBuf, CliError> {
    let path = dir.join(format!("{}.{}", file.filename, LOOKML_EXTENSION));
    std::fs::write(&path, &file.contents).map_err(|source| CliError::FileWriteError {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn create_dir(dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::FileWriteError {
        path: dir.to_path_buf(),
        source,
    })
}

/// Handle the `generate` command
///
/// Writes `<output>/views/<model>.view.lkml` and `<output>/<model>.model.lkml`
/// for every loaded model. Returns the number of models exported.
pub fn handle_generate(config: &GeneratorConfig) -> Result<usize, CliError> {
    let project = config.loader().load()?;
    let exporter = LookMLExporter::new(project.adapter, &project.name);

    let views_dir = config.views_dir();
    create_dir(&views_dir)?;
    create_dir(&config.output_dir)?;

    for model in &project.models {
        let (view, explore) = exporter.export_model(model)?;
        let view_path = write_file(&views_dir, &view)?;
        let model_path = write_file(&config.output_dir, &explore)?;
        info!(
            "Wrote {} and {}",
            view_path.display(),
            model_path.display()
        );
    }

    Ok(project.models.len())
}
