use std::collections::BTreeMap;

use crate::decoded::{DecodedFields, ValidatedFields};
use crate::deposit::DepositTx;
use crate::error::TypeError;
use crate::field::{FieldKind, FieldName};
use crate::record::Record;

/// Constructor run once a schema's required fields are confirmed present.
pub type BuildFn = fn(ValidatedFields) -> Result<Record, TypeError>;

/// How to decode one transaction type.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────┐
/// │ Part     │ Meaning                                          │
/// ├──────────┼──────────────────────────────────────────────────┤
/// │ tag      │ value of `type` that selects this schema         │
/// │ name     │ short label for diagnostics and listings         │
/// │ required │ fields that must be present and non-null         │
/// │ optional │ fields decoded when present, defaulted otherwise │
/// │ build    │ ValidatedFields → Record                         │
/// └──────────┴──────────────────────────────────────────────────┘
/// ```
///
/// The constructor is private: the only way to run it is
/// [`construct`](Self::construct), which validates first.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    tag: u64,
    name: &'static str,
    required: &'static [FieldName],
    optional: &'static [FieldName],
    build: BuildFn,
}

impl Schema {
    pub const fn new(
        tag: u64,
        name: &'static str,
        required: &'static [FieldName],
        optional: &'static [FieldName],
        build: BuildFn,
    ) -> Self {
        Self {
            tag,
            name,
            required,
            optional,
            build,
        }
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn required(&self) -> &'static [FieldName] {
        self.required
    }

    pub fn optional(&self) -> &'static [FieldName] {
        self.optional
    }

    /// Required fields followed by optional ones, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + use<> {
        self.required.iter().chain(self.optional).copied()
    }

    /// The order the record builder decodes fields in: hashes, then
    /// addresses, then everything else, each group in declaration order.
    ///
    /// A malformed hash or address is reported ahead of any malformed
    /// quantity or payload.
    pub fn decode_order(&self) -> impl Iterator<Item = FieldName> + use<> {
        let hashes = self.fields().filter(|f| f.kind() == FieldKind::Hash);
        let addresses = self.fields().filter(|f| f.kind() == FieldKind::Address);
        let rest = self
            .fields()
            .filter(|f| !matches!(f.kind(), FieldKind::Hash | FieldKind::Address));
        hashes.chain(addresses).chain(rest)
    }

    /// Validate `fields` against this schema, then build the record.
    ///
    /// # Errors
    ///
    /// [`TypeError::MissingRequiredField`] from validation, or whatever the
    /// schema's constructor reports.
    pub fn construct(&self, fields: DecodedFields) -> Result<Record, TypeError> {
        let validated = fields.validate(self)?;
        (self.build)(validated)
    }
}

/// Tag → schema lookup table.
///
/// Built once and shared read-only. [`Default`] registers the deposit
/// schema and nothing else.
#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    schemas: BTreeMap<u64, Schema>,
}

impl SchemaRegistry {
    /// A registry with no schemas at all.
    pub fn empty() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Add `schema`, replacing and returning any schema with the same tag.
    pub fn register(&mut self, schema: Schema) -> Option<Schema> {
        self.schemas.insert(schema.tag(), schema)
    }

    pub fn get(&self, tag: u64) -> Option<&Schema> {
        self.schemas.get(&tag)
    }

    /// Look up `tag`, failing with [`TypeError::UnknownSchema`].
    ///
    /// # Errors
    ///
    /// [`TypeError::UnknownSchema`] when nothing is registered for `tag`.
    pub fn resolve(&self, tag: u64) -> Result<&Schema, TypeError> {
        self.get(tag).ok_or(TypeError::UnknownSchema { tag })
    }

    /// Registered schemas in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DepositTx::SCHEMA);
        registry
    }
}
