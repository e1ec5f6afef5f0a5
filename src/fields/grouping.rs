use super::selector::SelectorPath;
use crate::spec::FieldModel;
use std::collections::HashMap;
use tracing::trace;

/// Fields sharing one oneof identifier, in first-seen order.
///
/// Only lives for a single render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OneofGroup<'a> {
    pub id: &'a str,
    pub items: Vec<&'a FieldModel>,
}

impl<'a> OneofGroup<'a> {
    /// The member a one-member group collapses to
    pub fn single(&self) -> Option<&'a FieldModel> {
        match self.items.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// First member; its name stands for the whole group during selection
    fn representative(&self) -> Option<&'a FieldModel> {
        self.items.first().copied()
    }
}

/// One rendering unit of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldItem<'a> {
    Field(&'a FieldModel),
    Oneof(OneofGroup<'a>),
}

impl<'a> FieldItem<'a> {
    /// The field this item renders as on its own: a standalone field or a
    /// group with exactly one member.
    pub fn as_single_field(&self) -> Option<&'a FieldModel> {
        match self {
            FieldItem::Field(field) => Some(*field),
            FieldItem::Oneof(group) => group.single(),
        }
    }
}

/// Read/write visibility filter applied before grouping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFilter {
    pub skip_read_only: bool,
    pub skip_write_only: bool,
}

impl FieldFilter {
    pub fn keeps(&self, field: &FieldModel) -> bool {
        !((self.skip_read_only && field.is_read_only())
            || (self.skip_write_only && field.is_write_only()))
    }
}

/// Partition `fields` into standalone fields and oneof groups.
///
/// Filtering happens first. Groups sit at the position of their first member.
/// With a selector, a group whose representative matches the first segment
/// drops later alternatives, and a later member matching the segment replaces
/// the accumulated members. Every group holds at least one member.
pub fn group_fields<'a>(
    fields: &'a [FieldModel],
    filter: FieldFilter,
    selector: Option<SelectorPath<'_>>,
) -> Vec<FieldItem<'a>> {
    let mut items: Vec<FieldItem<'a>> = Vec::with_capacity(fields.len());
    let mut group_index: HashMap<&'a str, usize> = HashMap::new();

    for field in fields.iter().filter(|f| filter.keeps(f)) {
        let Some(id) = field.oneof() else {
            items.push(FieldItem::Field(field));
            continue;
        };

        let Some(&idx) = group_index.get(id) else {
            group_index.insert(id, items.len());
            items.push(FieldItem::Oneof(OneofGroup {
                id,
                items: vec![field],
            }));
            continue;
        };

        let FieldItem::Oneof(group) = &mut items[idx] else {
            continue;
        };

        match selector {
            Some(sel) => {
                let selected = group
                    .representative()
                    .map(|rep| sel.matches(&rep.name))
                    .unwrap_or(false);
                if selected {
                    trace!(group = id, field = %field.name, "dropping non-selected alternative");
                } else if sel.matches(&field.name) {
                    trace!(group = id, field = %field.name, "selector narrowed oneof");
                    group.items = vec![field];
                } else {
                    group.items.push(field);
                }
            }
            None => group.items.push(field),
        }
    }

    items
}

/// Flatten grouped items back into a field sequence, group members in place.
pub fn flatten<'a>(items: &[FieldItem<'a>]) -> Vec<&'a FieldModel> {
    let mut out = Vec::new();
    for item in items {
        match item {
            FieldItem::Field(field) => out.push(*field),
            FieldItem::Oneof(group) => out.extend(group.items.iter().copied()),
        }
    }
    out
}

/// Inputs to the default expansion decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionPolicy {
    /// Expand when the object has exactly one item to show
    pub expand_single_schema_field: bool,
    /// Expand every level up to and including this one
    pub schema_expansion_level: u32,
}

/// Whether fields at `level` start expanded, given how many grouped items the
/// object shows.
pub fn expand_by_default(item_count: usize, level: u32, policy: ExpansionPolicy) -> bool {
    (policy.expand_single_schema_field && item_count == 1) || policy.schema_expansion_level >= level
}
