//! View file generation

use super::dimension::{ColumnClassification, lookml_dimension_groups, lookml_dimensions};
use super::measure::lookml_measures;
use super::{ExportResult, LookmlFile};
use crate::lookml::{self, Block};
use crate::models::{DbtAdapter, DbtModel};
use tracing::debug;

/// Build the `view:` block of a model
pub fn lookml_view(model: &DbtModel, adapter: DbtAdapter) -> ExportResult<Block> {
    let classification = ColumnClassification::of(model, adapter);
    let dimension_groups = lookml_dimension_groups(&classification);
    let dimensions = lookml_dimensions(&classification);
    let measures = lookml_measures(model)?;

    debug!(
        "View {}: {} dimension groups, {} dimensions, {} measures, {} unsupported columns",
        model.name,
        dimension_groups.len(),
        dimensions.len(),
        measures.len(),
        classification.unsupported.len()
    );

    Ok(Block::named(&model.name)
        .sql("sql_table_name", model.relation_name())
        .blocks(
            "dimension_group",
            dimension_groups.iter().map(|g| g.to_block()),
        )
        .blocks("dimension", dimensions.iter().map(|d| d.to_block()))
        .blocks("measure", measures.iter().map(|m| m.to_block())))
}

/// Generate `<model>.view` for a model
///
/// Fails only when a measure filter references a column the model does not have.
pub fn generate_view(model: &DbtModel, adapter: DbtAdapter) -> ExportResult<LookmlFile> {
    let view = lookml_view(model, adapter)?;
    Ok(LookmlFile {
        filename: format!("{}.view", model.name),
        contents: lookml::dump(&Block::document().block("view", view)),
    })
}
