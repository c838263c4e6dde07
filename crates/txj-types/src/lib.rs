#![warn(clippy::pedantic)]

pub mod error;
pub mod field;
pub mod primitives;
pub mod decoded;
pub mod tx_type;
pub mod deposit;
pub mod record;
pub mod schema;

pub use decoded::{DecodedFields, ValidatedFields};
pub use deposit::DepositTx;
pub use error::TypeError;
pub use field::{FieldKind, FieldName};
pub use primitives::{Address, Hash};
pub use record::Record;
pub use schema::{Schema, SchemaRegistry};
pub use tx_type::TxType;
