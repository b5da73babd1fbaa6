//! Model (explore) file generation

use super::LookmlFile;
use crate::lookml::{self, Block};
use crate::models::{DbtModel, LookerJoin};

/// Include glob pointing the model file at the generated views
pub const VIEWS_INCLUDE: &str = "/views/*";

/// `${left.left_on} = ${right.right_on}` join predicate
pub fn lookml_join_on_sql(left: &str, right: &str, left_on: &str, right_on: &str) -> String {
    format!("${{{}.{}}} = ${{{}.{}}}", left, left_on, right, right_on)
}

fn lookml_join(model: &DbtModel, target: &str, join: &LookerJoin) -> Block {
    Block::named(target)
        .literal("type", join.join_type.as_str())
        .literal("relationship", join.relationship.as_str())
        .sql(
            "sql_on",
            lookml_join_on_sql(&model.name, target, &join.left_on, &join.right_on),
        )
}

/// Build the `explore:` block of a model, one join per declared join
///
/// View names are assumed to equal model names.
pub fn lookml_explore(model: &DbtModel) -> Block {
    Block::named(&model.name)
        .quoted_opt("description", model.description.as_deref())
        .blocks(
            "join",
            model
                .joins()
                .iter()
                .map(|(target, join)| lookml_join(model, target, join)),
        )
}

/// Generate `<model>.model` for a model
pub fn generate_explore(model: &DbtModel, project_name: &str) -> LookmlFile {
    let document = Block::document()
        .quoted("connection", project_name)
        .quoted("include", VIEWS_INCLUDE)
        .block("explore", lookml_explore(model));
    LookmlFile {
        filename: format!("{}.model", model.name),
        contents: lookml::dump(&document),
    }
}
