use txj_types::{DecodedFields, Record, SchemaRegistry, TypeError};
use txj_wire::locate;

use crate::dispatch::{record_discriminant, select};

/// Turns one JSON object into a [`Record`] against a schema registry.
///
/// Building runs in three strictly ordered phases:
///
///   1. **Dispatch**: decode `type` and resolve its schema.
///   2. **Decode**: for every field the schema names, in
///      [`Schema::decode_order`], locate its token and run the field's
///      decoder into a fresh [`DecodedFields`]. A missing key never fails
///      here; a malformed present value stops the build immediately.
///   3. **Validate, then construct**: [`Schema::construct`] checks every
///      required slot and only then runs the schema's constructor.
///
/// ```text
///   per field:  Start ─▶ Located ──▶ Decoded
///                  │          └────▶ DecodeError ✗
///                  └──▶ AbsentKey ─▶ (slot stays empty)
///
///   per record: AllFieldsProcessed ─▶ Validated ─▶ Built ✓
///                          └────────▶ MissingFieldError ✗
/// ```
///
/// [`Schema::construct`]: txj_types::Schema::construct
/// [`Schema::decode_order`]: txj_types::Schema::decode_order
#[derive(Clone, Copy, Debug)]
pub struct RecordBuilder<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> RecordBuilder<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Run all three phases over `json`.
    ///
    /// # Errors
    ///
    /// The first [`TypeError`] encountered; see the phase list above.
    pub fn build(&self, json: &str) -> Result<Record, TypeError> {
        let mut fields = DecodedFields::new();
        record_discriminant(json, &mut fields)?;
        let schema = select(&fields, self.registry)?;

        for field in schema.decode_order() {
            fields.record(field, locate(json, field.key()))?;
            tracing::trace!(%field, present = fields.is_present(field), "decoded field");
        }

        let record = schema.construct(fields)?;
        tracing::debug!(schema = schema.name(), "built record");
        Ok(record)
    }
}
