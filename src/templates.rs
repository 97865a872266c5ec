//! Template bindings for model rendering.
//!
//! The template engine is an external collaborator: a `Templates` value
//! holds named tera bindings, and `render_model` feeds a model-shaped
//! context (every model field plus a `package_name` entry) through the
//! `model.tera` binding. Template syntax and rendering internals stay on
//! the tera side.

use std::fmt;
use std::path::Path;

use tera::{Context, Tera};

use crate::model::Model;

/// Name of the binding used to render a single model.
const MODEL_TEMPLATE: &str = "model.tera";

/// Loaded template bindings.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// The bundled Kotlin model binding.
    pub fn builtin() -> Result<Self, String> {
        let mut tera = Tera::default();
        tera.add_raw_template(MODEL_TEMPLATE, include_str!("../templates/model.tera"))
            .map_err(|err| format!("Failed to register builtin model template: {err}"))?;
        Ok(Self { tera })
    }

    /// Load `*.tera` bindings from a directory. The directory must provide
    /// a `model.tera` binding.
    pub fn from_dir(dir: &Path) -> Result<Self, String> {
        let pattern = format!("{}/**/*.tera", dir.display());
        let tera = Tera::new(&pattern)
            .map_err(|err| format!("Failed to load templates from {}: {err}", dir.display()))?;
        if !tera.get_template_names().any(|name| name == MODEL_TEMPLATE) {
            return Err(format!(
                "No {MODEL_TEMPLATE} binding found in {}",
                dir.display()
            ));
        }
        Ok(Self { tera })
    }

    /// Render a model through the model binding. The context carries every
    /// model field plus the target package name.
    pub fn render_model(&self, model: &Model, package_name: &str) -> Result<String, String> {
        let mut context = Context::from_serialize(model).map_err(|err| {
            format!("Failed to build template context for {}: {err}", model.name)
        })?;
        context.insert("package_name", package_name);
        self.tera
            .render(MODEL_TEMPLATE, &context)
            .map_err(|err| format!("Failed to render model {}: {err}", model.name))
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates")
            .field(
                "bindings",
                &self.tera.get_template_names().collect::<Vec<_>>(),
            )
            .finish()
    }
}
