use txj_types::{DecodedFields, FieldName, Schema, SchemaRegistry, TypeError};
use txj_wire::locate;

/// Choose the schema for `json` from its `type` field.
///
/// `type` is decoded like any unsigned integer, so `126`, `"126"`, and
/// `"0x7e"` all select the deposit schema.
///
/// # Errors
///
/// - [`TypeError::InvalidField`] when `type` is present but malformed.
/// - [`TypeError::MissingDiscriminant`] when `type` is absent or `null`.
/// - [`TypeError::UnknownSchema`] when no schema is registered for it.
pub fn dispatch<'r>(json: &str, registry: &'r SchemaRegistry) -> Result<&'r Schema, TypeError> {
    let mut fields = DecodedFields::new();
    record_discriminant(json, &mut fields)?;
    select(&fields, registry)
}

/// Locate and decode `type` into `fields`.
pub(crate) fn record_discriminant(json: &str, fields: &mut DecodedFields) -> Result<(), TypeError> {
    fields.record(FieldName::Type, locate(json, FieldName::Type.key()))
}

/// Resolve the already-decoded discriminant in `fields`.
pub(crate) fn select<'r>(
    fields: &DecodedFields,
    registry: &'r SchemaRegistry,
) -> Result<&'r Schema, TypeError> {
    let tag = fields.tx_type().ok_or(TypeError::MissingDiscriminant)?;
    let schema = registry.resolve(tag)?;
    tracing::debug!(tag, schema = schema.name(), "selected schema");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use txj_wire::WireError;

    #[test]
    fn bare_decimal_tag() {
        let registry = SchemaRegistry::default();
        let schema = dispatch(r#"{"type":126}"#, &registry).unwrap();
        assert_eq!(schema.name(), "deposit");
    }

    #[test]
    fn quoted_hex_tag() {
        let registry = SchemaRegistry::default();
        let schema = dispatch(r#"{"type":"0x7e"}"#, &registry).unwrap();
        assert_eq!(schema.tag(), 0x7e);
    }

    #[test]
    fn absent_tag() {
        let registry = SchemaRegistry::default();
        assert!(matches!(
            dispatch(r#"{"gas":"0x1"}"#, &registry),
            Err(TypeError::MissingDiscriminant)
        ));
    }

    #[test]
    fn null_tag_is_absent() {
        let registry = SchemaRegistry::default();
        assert!(matches!(
            dispatch(r#"{"type":null}"#, &registry),
            Err(TypeError::MissingDiscriminant)
        ));
    }

    #[test]
    fn unregistered_tag() {
        let registry = SchemaRegistry::default();
        assert!(matches!(
            dispatch(r#"{"type":2}"#, &registry),
            Err(TypeError::UnknownSchema { tag: 2 })
        ));
    }

    #[test]
    fn malformed_tag() {
        let registry = SchemaRegistry::default();
        assert!(matches!(
            dispatch(r#"{"type":"deposit"}"#, &registry),
            Err(TypeError::InvalidField {
                field: "type",
                source: WireError::NumberFormat { .. }
            })
        ));
    }
}
