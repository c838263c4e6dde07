use num_bigint::BigUint;
use txj_wire::Token;
use txj_wire::hex::{decode_fixed_hex, decode_var_hex};
use txj_wire::scalar::{decode_big_uint, decode_bool, decode_uint};

use crate::error::TypeError;
use crate::field::FieldName;
use crate::primitives::{Address, Hash};
use crate::schema::Schema;

/// Intermediate holder: one optional slot per known field.
///
/// Slots start empty and are filled by [`record`](Self::record) as tokens
/// are decoded. An empty slot means the key was missing or `null`; a field
/// that decoded to zero is `Some(0)`, so the two never collapse.
///
/// The slots are private and there are no getters for them. The only way
/// to read a decoded value is through [`ValidatedFields`], which this type
/// hands out from [`validate`](Self::validate) once every field the schema
/// requires is known to be present.
///
/// ```text
///   DecodedFields ──record()×N──▶ DecodedFields ──validate()──▶ ValidatedFields
///                                                   │
///                                                   └─▶ MissingRequiredField
/// ```
#[derive(Debug, Default)]
pub struct DecodedFields {
    tx_type: Option<u64>,
    gas: Option<u64>,
    value: Option<BigUint>,
    data: Option<Vec<u8>>,
    from: Option<Address>,
    source_hash: Option<Hash>,
    mint: Option<BigUint>,
    is_system_tx: Option<bool>,
    to: Option<Address>,
}

impl DecodedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `token` with `field`'s designated decoder and store the result.
    ///
    /// A `None` token (key not found) or a `null` token leaves the slot
    /// empty and succeeds. Only a present, malformed token is an error.
    ///
    /// # Errors
    ///
    /// [`TypeError::InvalidField`] carrying the field's JSON key and the
    /// underlying wire error.
    pub fn record(&mut self, field: FieldName, token: Option<Token<'_>>) -> Result<(), TypeError> {
        let invalid = |source| TypeError::InvalidField {
            field: field.key(),
            source,
        };

        match field {
            FieldName::Type => self.tx_type = decode_uint(token).map_err(invalid)?,
            FieldName::Gas => self.gas = decode_uint(token).map_err(invalid)?,
            FieldName::Value => self.value = decode_big_uint(token).map_err(invalid)?,
            FieldName::Data => self.data = decode_var_hex(token).map_err(invalid)?,
            FieldName::From => {
                self.from = decode_fixed_hex(token).map_err(invalid)?.map(Address);
            }
            FieldName::SourceHash => {
                self.source_hash = decode_fixed_hex(token).map_err(invalid)?.map(Hash);
            }
            FieldName::Mint => self.mint = decode_big_uint(token).map_err(invalid)?,
            FieldName::IsSystemTx => self.is_system_tx = decode_bool(token).map_err(invalid)?,
            FieldName::To => self.to = decode_fixed_hex(token).map_err(invalid)?.map(Address),
        }
        Ok(())
    }

    /// Whether `field`'s slot holds a value.
    pub fn is_present(&self, field: FieldName) -> bool {
        match field {
            FieldName::Type => self.tx_type.is_some(),
            FieldName::Gas => self.gas.is_some(),
            FieldName::Value => self.value.is_some(),
            FieldName::Data => self.data.is_some(),
            FieldName::From => self.from.is_some(),
            FieldName::SourceHash => self.source_hash.is_some(),
            FieldName::Mint => self.mint.is_some(),
            FieldName::IsSystemTx => self.is_system_tx.is_some(),
            FieldName::To => self.to.is_some(),
        }
    }

    /// The discriminant, if one was decoded.
    ///
    /// This is the one slot readable before validation: the schema that
    /// validation runs against is chosen by it.
    pub fn tx_type(&self) -> Option<u64> {
        self.tx_type
    }

    /// Check every field `schema` requires, in declaration order.
    ///
    /// Consumes the holder either way, so a failed validation leaves no
    /// partially filled value behind.
    ///
    /// # Errors
    ///
    /// [`TypeError::MissingRequiredField`] for the first required field
    /// whose slot is empty.
    pub fn validate(self, schema: &Schema) -> Result<ValidatedFields, TypeError> {
        if let Some(missing) = schema
            .required()
            .iter()
            .find(|field| !self.is_present(**field))
        {
            return Err(TypeError::MissingRequiredField {
                field: missing.key(),
            });
        }
        Ok(ValidatedFields { fields: self })
    }
}

/// Decoded fields that passed [`DecodedFields::validate`].
///
/// Only `validate` can construct this type, so holding one proves every
/// required slot of the validating schema was filled. Each `take_*` moves a
/// slot's value out; a record constructor turns the `Option` of a required
/// field into a value with `ok_or`, which cannot fail after validation.
#[derive(Debug)]
pub struct ValidatedFields {
    fields: DecodedFields,
}

impl ValidatedFields {
    pub fn tx_type(&self) -> Option<u64> {
        self.fields.tx_type
    }

    pub fn take_gas(&mut self) -> Option<u64> {
        self.fields.gas.take()
    }

    pub fn take_value(&mut self) -> Option<BigUint> {
        self.fields.value.take()
    }

    pub fn take_data(&mut self) -> Option<Vec<u8>> {
        self.fields.data.take()
    }

    pub fn take_from(&mut self) -> Option<Address> {
        self.fields.from.take()
    }

    pub fn take_source_hash(&mut self) -> Option<Hash> {
        self.fields.source_hash.take()
    }

    pub fn take_mint(&mut self) -> Option<BigUint> {
        self.fields.mint.take()
    }

    pub fn take_is_system_tx(&mut self) -> Option<bool> {
        self.fields.is_system_tx.take()
    }

    pub fn take_to(&mut self) -> Option<Address> {
        self.fields.to.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::DepositTx;
    use txj_wire::{WireError, locate};

    const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
    const ONE_ADDR: &str = "0x0000000000000000000000000000000000000001";

    fn fill(json: &str) -> Result<DecodedFields, TypeError> {
        let mut fields = DecodedFields::new();
        for field in FieldName::ALL {
            fields.record(field, locate(json, field.key()))?;
        }
        Ok(fields)
    }

    fn complete_json() -> String {
        format!(
            r#"{{"type":126,"gas":"0x5208","value":1,"input":"0x6162","from":"{ONE_ADDR}","sourceHash":"{ZERO_HASH}"}}"#
        )
    }

    #[test]
    fn absent_and_null_leave_slot_empty() {
        let fields = fill(r#"{"mint":null}"#).unwrap();
        assert!(!fields.is_present(FieldName::Mint));
        assert!(!fields.is_present(FieldName::Gas));
    }

    #[test]
    fn zero_is_present() {
        let fields = fill(r#"{"mint":"0x0","gas":0}"#).unwrap();
        assert!(fields.is_present(FieldName::Mint));
        assert!(fields.is_present(FieldName::Gas));
    }

    #[test]
    fn malformed_present_field_names_its_key() {
        let result = fill(r#"{"input":"0xabc"}"#);
        assert!(matches!(
            result,
            Err(TypeError::InvalidField {
                field: "input",
                source: WireError::HexFormat { .. }
            })
        ));
    }

    #[test]
    fn validate_passes_with_all_required() {
        let fields = fill(&complete_json()).unwrap();
        let validated = fields.validate(&DepositTx::SCHEMA).unwrap();
        assert_eq!(validated.tx_type(), Some(126));
    }

    #[test]
    fn validate_reports_missing_gas() {
        let json = complete_json().replace(r#""gas":"0x5208","#, "");
        let fields = fill(&json).unwrap();
        let result = fields.validate(&DepositTx::SCHEMA);
        assert!(matches!(
            result,
            Err(TypeError::MissingRequiredField { field: "gas" })
        ));
    }

    #[test]
    fn validate_ignores_optional_fields() {
        let fields = fill(&complete_json()).unwrap();
        assert!(!fields.is_present(FieldName::To));
        assert!(fields.validate(&DepositTx::SCHEMA).is_ok());
    }

    #[test]
    fn take_moves_value_out_once() {
        let fields = fill(&complete_json()).unwrap();
        let mut validated = fields.validate(&DepositTx::SCHEMA).unwrap();
        assert_eq!(validated.take_gas(), Some(21000));
        assert_eq!(validated.take_gas(), None);
    }
}
