use num_bigint::BigUint;

use crate::decoded::ValidatedFields;
use crate::error::TypeError;
use crate::field::FieldName;
use crate::primitives::{Address, Hash};
use crate::record::Record;
use crate::schema::Schema;
use crate::tx_type::DEPOSIT_TX_TYPE;

/// A deposit transaction: a value transfer injected from L1.
///
/// Field layout in the JSON object:
///
/// ```text
/// ┌────────────┬──────────┬──────────┬─────────────────────────────┐
/// │ Key        │ Kind     │ Presence │ Record field                │
/// ├────────────┼──────────┼──────────┼─────────────────────────────┤
/// │ gas        │ Uint     │ required │ gas                         │
/// │ value      │ BigUint  │ required │ value                       │
/// │ input      │ Bytes    │ required │ data                        │
/// │ from       │ Address  │ required │ from                        │
/// │ sourceHash │ Hash     │ required │ source_hash                 │
/// │ mint       │ BigUint  │ optional │ mint (None if absent)       │
/// │ isSystemTx │ Bool     │ optional │ is_system_tx (false if abs) │
/// │ to         │ Address  │ optional │ to (None = contract create) │
/// └────────────┴──────────┴──────────┴─────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositTx {
    pub source_hash: Hash,
    pub from: Address,
    /// Recipient; `None` for contract creation.
    pub to: Option<Address>,
    /// Amount minted on L2. `Some(0)` and `None` are different values.
    pub mint: Option<BigUint>,
    pub value: BigUint,
    pub gas: u64,
    pub is_system_tx: bool,
    pub data: Vec<u8>,
}

impl DepositTx {
    pub const REQUIRED: &'static [FieldName] = &[
        FieldName::Gas,
        FieldName::Value,
        FieldName::Data,
        FieldName::From,
        FieldName::SourceHash,
    ];

    pub const OPTIONAL: &'static [FieldName] =
        &[FieldName::Mint, FieldName::IsSystemTx, FieldName::To];

    /// Schema registered for tag `0x7e` by default.
    pub const SCHEMA: Schema = Schema::new(
        DEPOSIT_TX_TYPE,
        "deposit",
        Self::REQUIRED,
        Self::OPTIONAL,
        build_record,
    );

    /// Move validated slots into a deposit.
    ///
    /// # Errors
    ///
    /// [`TypeError::MissingRequiredField`] if `fields` was validated against
    /// a schema that does not require every deposit field.
    pub fn from_validated(mut fields: ValidatedFields) -> Result<Self, TypeError> {
        Ok(Self {
            gas: fields.take_gas().ok_or(missing(FieldName::Gas))?,
            value: fields.take_value().ok_or(missing(FieldName::Value))?,
            data: fields.take_data().ok_or(missing(FieldName::Data))?,
            from: fields.take_from().ok_or(missing(FieldName::From))?,
            source_hash: fields
                .take_source_hash()
                .ok_or(missing(FieldName::SourceHash))?,
            mint: fields.take_mint(),
            is_system_tx: fields.take_is_system_tx().unwrap_or(false),
            to: fields.take_to(),
        })
    }
}

fn missing(field: FieldName) -> TypeError {
    TypeError::MissingRequiredField { field: field.key() }
}

fn build_record(fields: ValidatedFields) -> Result<Record, TypeError> {
    DepositTx::from_validated(fields).map(Record::Deposit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoded::DecodedFields;
    use txj_wire::locate;

    fn construct(json: &str) -> Result<Record, TypeError> {
        let mut fields = DecodedFields::new();
        for field in DepositTx::SCHEMA.fields() {
            fields.record(field, locate(json, field.key()))?;
        }
        DepositTx::SCHEMA.construct(fields)
    }

    fn base() -> String {
        format!(
            r#"{{"gas":"0x5208","value":"0x10","input":"0x","from":"0x{}","sourceHash":"0x{}""#,
            "11".repeat(20),
            "22".repeat(32)
        )
    }

    #[test]
    fn optional_defaults_apply() {
        let Record::Deposit(tx) = construct(&format!("{}}}", base())).unwrap();
        assert_eq!(tx.gas, 21000);
        assert_eq!(tx.value, BigUint::from(16u32));
        assert!(tx.data.is_empty());
        assert_eq!(tx.from, Address([0x11; 20]));
        assert_eq!(tx.source_hash, Hash([0x22; 32]));
        assert_eq!(tx.mint, None);
        assert!(!tx.is_system_tx);
        assert_eq!(tx.to, None);
    }

    #[test]
    fn optional_values_carried() {
        let json = format!(
            r#"{},"mint":"0x0","isSystemTx":true,"to":"0x{}"}}"#,
            base(),
            "33".repeat(20)
        );
        let Record::Deposit(tx) = construct(&json).unwrap();
        assert_eq!(tx.mint, Some(BigUint::from(0u32)));
        assert!(tx.is_system_tx);
        assert_eq!(tx.to, Some(Address([0x33; 20])));
    }

    #[test]
    fn missing_source_hash_rejected() {
        let json = format!(
            r#"{{"gas":1,"value":1,"input":"0x","from":"0x{}"}}"#,
            "11".repeat(20)
        );
        assert!(matches!(
            construct(&json),
            Err(TypeError::MissingRequiredField {
                field: "sourceHash"
            })
        ));
    }

    #[test]
    fn from_validated_guards_foreign_schema() {
        // A schema requiring only `gas` can validate fields that a deposit
        // cannot be built from; the constructor still refuses.
        let loose = Schema::new(0x7f, "loose", &[FieldName::Gas], &[], build_record);
        let mut fields = DecodedFields::new();
        fields
            .record(FieldName::Gas, locate(r#"{"gas":1}"#, "gas"))
            .unwrap();
        assert!(matches!(
            loose.construct(fields),
            Err(TypeError::MissingRequiredField { field: "value" })
        ));
    }
}
