use indexmap::IndexMap;

use crate::parser::Markers;

/// Does `expression` only copy `name` through from the prior state?
pub fn is_redundant(name: &str, expression: &str, markers: &Markers) -> bool {
    expression.trim() == markers.prior_field(name)
}

/// Drop assignments like `newState.name = state.name;`. The builder call
/// inherits every field it is not given, so these carry no information.
/// Survivors keep their order. Returns how many entries were dropped.
pub fn drop_redundant(fields: &mut IndexMap<String, String>, markers: &Markers) -> usize {
    let before = fields.len();
    fields.retain(|name, expression| !is_redundant(name, expression, markers));
    before - fields.len()
}
