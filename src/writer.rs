//! File emission driver.
//!
//! Takes the full model list, applies composition resolution, and writes
//! one rendered source file per non-empty model. The pipeline per model
//! is: render through the model binding -> `format_code` ->
//! `format_indentation` -> write to `<output_dir>/<name>.<extension>`.
//! Writes are awaited one at a time in input order; the first failure
//! aborts the batch.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use crate::format::{Indent, format_code, format_indentation};
use crate::model::Model;
use crate::resolver::apply_compositions;
use crate::templates::Templates;

/// Output configuration for a generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Directory the generated files land in. Created if absent.
    pub output_dir: PathBuf,
    /// Package/namespace qualifier passed through to the template.
    pub package_name: String,
    /// File extension of the generated sources.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Indentation style applied to the rendered output.
    #[serde(default)]
    pub indent: Indent,
}

fn default_extension() -> String {
    "kt".to_string()
}

impl WriteOptions {
    /// Options with the default extension and indentation.
    pub fn new(output_dir: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            package_name: package_name.into(),
            extension: default_extension(),
            indent: Indent::default(),
        }
    }
}

/// Flag models that other models inherit from through an anonymous
/// reference property. Only the first anonymous property of each model is
/// consulted; names with no matching model are ignored. Templates use the
/// flag to emit an open base type.
pub fn mark_all_of_references(models: &mut [Model]) {
    let referenced: HashSet<String> = models
        .iter()
        .filter_map(|model| model.properties.iter().find(|prop| prop.name.is_empty()))
        .map(|prop| prop.type_name.clone())
        .collect();

    for model in models.iter_mut() {
        if referenced.contains(&model.name) {
            model.referenced_as_all_of = true;
        }
    }
}

/// Resolve compositions and write one source file per non-empty model.
pub async fn write_models(
    mut models: Vec<Model>,
    templates: &Templates,
    options: &WriteOptions,
) -> Result<(), String> {
    mark_all_of_references(&mut models);
    apply_compositions(&mut models)?;

    fs::create_dir_all(&options.output_dir)
        .await
        .map_err(|err| {
            format!(
                "Failed to create output directory {}: {err}",
                options.output_dir.display()
            )
        })?;

    let mut written = 0usize;
    for model in &models {
        if model.item_count() == 0 {
            debug!(model = %model.name, "Skipping model with no renderable items.");
            continue;
        }

        let rendered = templates.render_model(model, &options.package_name)?;
        let content = format_indentation(&format_code(&rendered), options.indent);
        let path = options
            .output_dir
            .join(format!("{}.{}", model.name, options.extension));
        fs::write(&path, content)
            .await
            .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
        debug!(path = %path.display(), "Model written.");
        written += 1;
    }

    info!(written, total = models.len(), "Model generation complete.");
    Ok(())
}
