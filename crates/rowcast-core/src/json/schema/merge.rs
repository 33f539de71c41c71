//! Union construction and schema merging
//!
//! Candidate types fold left into a member list: the first occurrence
//! of a type anchors its position, records merge by name, all arrays
//! share one slot with their item lists unioned, and duplicate
//! primitives drop. Record merging is Avro-compatible in both
//! directions: a field absent from the other side becomes nullable
//! with a `null` default before the field lists combine.

use tracing::warn;

use super::node::{FieldType, RecordType, SchemaType};

/// Folds candidate union members into the minimal member list,
/// preserving first-occurrence order.
pub(crate) fn union_merge(candidates: Vec<SchemaType>) -> Vec<SchemaType> {
    let mut merged: Vec<SchemaType> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        merge_into(&mut merged, candidate);
    }
    merged
}

fn merge_into(merged: &mut Vec<SchemaType>, candidate: SchemaType) {
    match candidate {
        SchemaType::Union(members) => {
            for member in members {
                merge_into(merged, member);
            }
        }
        // Placeholder left by an aborted parse, nothing to keep.
        SchemaType::Record(record) if record.name.is_empty() && record.fields.is_empty() => {}
        SchemaType::Record(record) => {
            let slot = merged.iter_mut().find_map(|existing| match existing {
                SchemaType::Record(prior) if prior.name == record.name => Some(prior),
                _ => None,
            });
            match slot {
                Some(prior) => merge_records(prior, record),
                None => merged.push(SchemaType::Record(record)),
            }
        }
        SchemaType::Array(array) => {
            let slot = merged.iter_mut().find_map(|existing| match existing {
                SchemaType::Array(prior) => Some(prior),
                _ => None,
            });
            match slot {
                Some(prior) => {
                    let mut items = std::mem::take(&mut prior.items);
                    items.extend(array.items);
                    prior.items = union_merge(items);
                }
                None => merged.push(SchemaType::Array(array)),
            }
        }
        primitive => {
            if !merged.iter().any(|existing| existing == &primitive) {
                merged.push(primitive);
            }
        }
    }
}

/// Merges `incoming` into `anchor`. Fields present on only one side
/// become nullable, shared fields keep the anchor's position and union
/// their types, and fields new to the anchor append in incoming order.
pub(crate) fn merge_records(anchor: &mut RecordType, mut incoming: RecordType) {
    mark_missing_nullable(&mut anchor.fields, &incoming.fields);
    mark_missing_nullable(&mut incoming.fields, &anchor.fields);
    for field in incoming.fields {
        match anchor
            .fields
            .iter_mut()
            .find(|prior| prior.name == field.name)
        {
            Some(prior) => {
                prior.default_null |= field.default_null;
                let existing = std::mem::replace(&mut prior.ty, SchemaType::Null);
                prior.ty = merge_field_types(existing, field.ty);
            }
            None => anchor.fields.push(field),
        }
    }
}

fn mark_missing_nullable(fields: &mut [FieldType], other: &[FieldType]) {
    for field in fields {
        if !other.iter().any(|candidate| candidate.name == field.name) {
            make_nullable(field);
        }
    }
}

fn make_nullable(field: &mut FieldType) {
    field.default_null = true;
    match &mut field.ty {
        SchemaType::Union(members) => {
            if !members.contains(&SchemaType::Null) {
                members.push(SchemaType::Null);
            }
        }
        SchemaType::Null => {}
        other => {
            let prior = std::mem::replace(other, SchemaType::Null);
            *other = SchemaType::Union(vec![SchemaType::Null, prior]);
        }
    }
}

/// Combines two observed types for one field. A structural observation
/// displaces a scalar one rather than forming a mixed union; anything
/// else folds into a union anchored on the existing type.
pub(crate) fn merge_field_types(existing: SchemaType, incoming: SchemaType) -> SchemaType {
    if existing == incoming {
        return existing;
    }
    if existing.is_primitive() && incoming.is_structural() {
        warn!(
            prior = existing.kind_name(),
            replacement = incoming.kind_name(),
            "replacing scalar field type with structural type"
        );
        return incoming;
    }
    if existing.is_structural() && incoming.is_primitive() {
        warn!(
            kept = existing.kind_name(),
            dropped = incoming.kind_name(),
            "dropping scalar observation for structural field"
        );
        return existing;
    }
    let mut members = Vec::new();
    merge_into(&mut members, existing);
    merge_into(&mut members, incoming);
    if members.len() == 1 {
        members.swap_remove(0)
    } else {
        SchemaType::Union(members)
    }
}

/// Normalizes a schema in place: merges duplicate union members and
/// duplicate record fields at every depth, and unwraps single-member
/// unions.
pub(crate) fn normalize(ty: &mut SchemaType) {
    match ty {
        SchemaType::Record(record) => {
            for field in &mut record.fields {
                normalize(&mut field.ty);
            }
            dedupe_fields(&mut record.fields);
        }
        SchemaType::Array(array) => {
            let items = std::mem::take(&mut array.items);
            array.items = union_merge(items);
            for item in &mut array.items {
                normalize(item);
            }
        }
        SchemaType::Union(members) => {
            let mut merged = union_merge(std::mem::take(members));
            for member in &mut merged {
                normalize(member);
            }
            *ty = if merged.len() == 1 {
                merged.swap_remove(0)
            } else {
                SchemaType::Union(merged)
            };
        }
        _ => {}
    }
}

fn dedupe_fields(fields: &mut Vec<FieldType>) {
    let mut deduped: Vec<FieldType> = Vec::with_capacity(fields.len());
    for field in fields.drain(..) {
        match deduped.iter_mut().find(|prior| prior.name == field.name) {
            Some(prior) => {
                prior.default_null |= field.default_null;
                let existing = std::mem::replace(&mut prior.ty, SchemaType::Null);
                prior.ty = merge_field_types(existing, field.ty);
            }
            None => deduped.push(field),
        }
    }
    *fields = deduped;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::schema::node::ArrayType;

    fn record(name: &str, fields: Vec<FieldType>) -> SchemaType {
        SchemaType::Record(RecordType {
            name: name.to_owned(),
            fields,
        })
    }

    fn field(name: &str, ty: SchemaType) -> FieldType {
        FieldType {
            name: name.to_owned(),
            ty,
            default_null: false,
        }
    }

    #[test]
    fn test_primitives_keep_first_occurrence() {
        let merged = union_merge(vec![
            SchemaType::Int,
            SchemaType::String,
            SchemaType::Int,
            SchemaType::Boolean,
        ]);
        assert_eq!(
            merged,
            vec![SchemaType::Int, SchemaType::String, SchemaType::Boolean]
        );
    }

    #[test]
    fn test_nested_unions_flatten() {
        let merged = union_merge(vec![
            SchemaType::Union(vec![SchemaType::Null, SchemaType::String]),
            SchemaType::String,
        ]);
        assert_eq!(merged, vec![SchemaType::Null, SchemaType::String]);
    }

    #[test]
    fn test_empty_anonymous_record_is_dropped() {
        let merged = union_merge(vec![
            record("", Vec::new()),
            SchemaType::Int,
            SchemaType::Array(ArrayType { items: Vec::new() }),
        ]);
        assert_eq!(
            merged,
            vec![
                SchemaType::Int,
                SchemaType::Array(ArrayType { items: Vec::new() }),
            ]
        );
    }

    #[test]
    fn test_arrays_share_one_slot() {
        let merged = union_merge(vec![
            SchemaType::Array(ArrayType {
                items: vec![SchemaType::Int],
            }),
            SchemaType::Array(ArrayType {
                items: vec![SchemaType::String, SchemaType::Int],
            }),
        ]);
        assert_eq!(
            merged,
            vec![SchemaType::Array(ArrayType {
                items: vec![SchemaType::Int, SchemaType::String],
            })]
        );
    }

    #[test]
    fn test_records_merge_by_name_with_nullable_fields() {
        let merged = union_merge(vec![
            record("root_item", vec![field("a", SchemaType::String)]),
            record(
                "root_item",
                vec![field("a", SchemaType::String), field("b", SchemaType::Int)],
            ),
        ]);
        assert_eq!(
            merged,
            vec![record(
                "root_item",
                vec![
                    field("a", SchemaType::String),
                    FieldType {
                        name: "b".to_owned(),
                        ty: SchemaType::Union(vec![SchemaType::Null, SchemaType::Int]),
                        default_null: true,
                    },
                ],
            )]
        );
    }

    #[test]
    fn test_nullable_union_appends_null_last() {
        let merged = union_merge(vec![
            record(
                "root",
                vec![field(
                    "age",
                    SchemaType::Union(vec![SchemaType::Int, SchemaType::String]),
                )],
            ),
            record("root", Vec::new()),
        ]);
        assert_eq!(
            merged,
            vec![record(
                "root",
                vec![FieldType {
                    name: "age".to_owned(),
                    ty: SchemaType::Union(vec![
                        SchemaType::Int,
                        SchemaType::String,
                        SchemaType::Null,
                    ]),
                    default_null: true,
                }],
            )]
        );
    }

    #[test]
    fn test_structural_type_displaces_scalar() {
        let nested = record("root_a", vec![field("x", SchemaType::Int)]);
        assert_eq!(
            merge_field_types(SchemaType::String, nested.clone()),
            nested
        );
        assert_eq!(
            merge_field_types(nested.clone(), SchemaType::String),
            nested
        );
    }

    #[test]
    fn test_differing_scalars_form_a_union() {
        assert_eq!(
            merge_field_types(SchemaType::Int, SchemaType::String),
            SchemaType::Union(vec![SchemaType::Int, SchemaType::String])
        );
    }

    #[test]
    fn test_normalize_unwraps_singleton_union() {
        let mut ty = SchemaType::Union(vec![SchemaType::String, SchemaType::String]);
        normalize(&mut ty);
        assert_eq!(ty, SchemaType::String);
    }

    #[test]
    fn test_normalize_merges_duplicate_fields() {
        let mut ty = record(
            "root",
            vec![field("a", SchemaType::Int), field("a", SchemaType::String)],
        );
        normalize(&mut ty);
        assert_eq!(
            ty,
            record(
                "root",
                vec![field(
                    "a",
                    SchemaType::Union(vec![SchemaType::Int, SchemaType::String]),
                )],
            )
        );
    }

    #[test]
    fn test_normalize_merges_array_items_at_depth() {
        let mut ty = SchemaType::Array(ArrayType {
            items: vec![
                SchemaType::Array(ArrayType {
                    items: vec![SchemaType::Int],
                }),
                SchemaType::Array(ArrayType {
                    items: vec![SchemaType::String],
                }),
            ],
        });
        normalize(&mut ty);
        assert_eq!(
            ty,
            SchemaType::Array(ArrayType {
                items: vec![SchemaType::Array(ArrayType {
                    items: vec![SchemaType::Int, SchemaType::String],
                })],
            })
        );
    }
}
