//! Composition resolution for `all-of` models.
//!
//! A composition model is defined as the union of fields contributed by
//! other models and inline sub-structures. This module flattens such a
//! model into a direct property list and enum-entry list with no remaining
//! indirection through composition or reference:
//! - an anonymous `reference` property pulls in the referenced model's
//!   flattened fields (single inheritance via a base type),
//! - a nested `all-of` property is flattened recursively,
//! - an inline anonymous sub-object or sub-enum contributes its fields or
//!   entries directly and re-tags the whole model with its own kind.
//!
//! `resolve` is pure: it never touches the shared model set. The one
//! mutation point is `apply_compositions`, which overwrites each
//! composition model with its flattened form in a single pass.

use std::collections::HashMap;

use crate::model::{EnumEntry, ExportKind, Model};

/// Name -> model lookup index over the full input set.
#[derive(Debug)]
pub struct ModelIndex<'a> {
    by_name: HashMap<&'a str, &'a Model>,
}

impl<'a> ModelIndex<'a> {
    /// Build an index over the input set. The first definition wins when
    /// two models share a name.
    pub fn new(models: &'a [Model]) -> Self {
        let mut by_name = HashMap::with_capacity(models.len());
        for model in models {
            by_name.entry(model.name.as_str()).or_insert(model);
        }
        Self { by_name }
    }

    /// Look up a model by name.
    pub fn get(&self, name: &str) -> Option<&'a Model> {
        self.by_name.get(name).copied()
    }
}

/// The flattened form of a composition model.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Direct properties, in pre-order depth-first concatenation order.
    pub properties: Vec<Model>,
    /// Enum entries, starting with the target's own entries.
    pub enum_entries: Vec<EnumEntry>,
    /// The export kind the flattened model should report. Defaults to the
    /// target's own kind; an inline anonymous sub-object or sub-enum
    /// overwrites it, last match wins.
    pub effective_kind: ExportKind,
}

/// Flatten one composition model against the full model set.
///
/// A reference to a name with no match in the index contributes nothing;
/// this mirrors the upstream parser's behavior and is deliberately not a
/// failure. A reference chain that revisits a model name is an error.
pub fn resolve(index: &ModelIndex<'_>, target: &Model) -> Result<Resolved, String> {
    let mut chain = vec![target.name.clone()];
    resolve_inner(index, target, &mut chain)
}

fn resolve_inner(
    index: &ModelIndex<'_>,
    target: &Model,
    chain: &mut Vec<String>,
) -> Result<Resolved, String> {
    let mut properties = Vec::new();
    let mut enum_entries = target.enum_entries.clone();
    let mut effective_kind = target.export;

    for prop in &target.properties {
        if prop.name.is_empty() && prop.export == ExportKind::Reference {
            // Inheritance through a referenced base model. Unknown names
            // contribute nothing.
            let Some(base) = index.get(&prop.type_name) else {
                continue;
            };
            if chain.iter().any(|seen| seen == &base.name) {
                return Err(format!(
                    "Cyclic composition: {} -> {}",
                    chain.join(" -> "),
                    base.name
                ));
            }
            chain.push(base.name.clone());
            let flattened = resolve_inner(index, base, chain)?;
            chain.pop();
            properties.extend(flattened.properties);
            enum_entries.extend(flattened.enum_entries);
        } else if prop.export == ExportKind::AllOf {
            // Nested composition, flattened in place.
            let flattened = resolve_inner(index, prop, chain)?;
            properties.extend(flattened.properties);
            enum_entries.extend(flattened.enum_entries);
        } else if prop.name.is_empty() && !prop.properties.is_empty() {
            // Inline anonymous sub-object: contributes its fields one level
            // deep and re-tags the whole model.
            effective_kind = prop.export;
            properties.extend(prop.properties.iter().cloned());
        } else if prop.export == ExportKind::Enum && !prop.enum_entries.is_empty() {
            // Inline anonymous enum.
            effective_kind = prop.export;
            enum_entries.extend(prop.enum_entries.iter().cloned());
        } else {
            properties.push(prop.clone());
        }
    }

    Ok(Resolved {
        properties,
        enum_entries,
        effective_kind,
    })
}

/// Flatten every `all-of` model in the set, overwriting its properties,
/// enum entries, and export kind with the resolved form.
///
/// Results are computed for all targets against the original set before
/// any model is overwritten; since flattening a non-composition model is
/// the identity, the outcome does not depend on input order.
pub fn apply_compositions(models: &mut [Model]) -> Result<(), String> {
    let resolved = {
        let index = ModelIndex::new(models);
        let mut out = Vec::new();
        for (position, model) in models.iter().enumerate() {
            if model.export == ExportKind::AllOf {
                out.push((position, resolve(&index, model)?));
            }
        }
        out
    };

    for (position, flat) in resolved {
        let model = &mut models[position];
        model.properties = flat.properties;
        model.enum_entries = flat.enum_entries;
        model.export = flat.effective_kind;
    }
    Ok(())
}
