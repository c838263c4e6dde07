use crate::deposit::DepositTx;
use crate::tx_type::TxType;

/// A fully decoded, schema-validated transaction.
///
/// One variant per record shape a schema can build. The decoder only
/// produces records through
/// [`Schema::construct`](crate::schema::Schema::construct), so a decoded
/// `Record` always passed validation. The variants and their fields are
/// public, so callers can also assemble one by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Deposit(DepositTx),
}

impl Record {
    pub fn tx_type(&self) -> TxType {
        match self {
            Self::Deposit(_) => TxType::Deposit,
        }
    }

    pub fn as_deposit(&self) -> Option<&DepositTx> {
        match self {
            Self::Deposit(tx) => Some(tx),
        }
    }
}
