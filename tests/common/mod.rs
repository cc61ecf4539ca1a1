//! Shared fixture for the integration tests: a small transaction-ledger
//! message family built on top of the registry, the way an endpoint
//! implementation would define its own commands and notifications.

#![allow(dead_code)]

use jroute::{codec, Codec, CodecError, Message, Params, Registry};
use serde_json::{json, Map, Value};

/// Install a tracing subscriber once per test process. Repeated calls are
/// fine; only the first one wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A settled transfer between two accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub from: u64,
    pub to: u64,
    pub value: i64,
}

impl Codec for Transaction {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        let fields = codec::fields(value)?;
        let amount = codec::integer(fields, "value")?;
        if amount < 0 {
            return Err(CodecError::new("transaction value must be non-negative"));
        }
        Ok(Transaction {
            id: codec::unsigned(fields, "id")?,
            from: codec::unsigned(fields, "from")?,
            to: codec::unsigned(fields, "to")?,
            value: amount,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "from": self.from,
            "to": self.to,
            "value": self.value,
        })
    }
}

/// Command: record a new transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTransaction {
    pub from: u64,
    pub to: u64,
    pub value: i64,
    pub description: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl Codec for AddTransaction {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        let fields = codec::fields(value)?;
        let amount = codec::integer(fields, "value")?;
        if amount < 0 {
            return Err(CodecError::new("transaction value must be non-negative"));
        }
        Ok(AddTransaction {
            from: codec::unsigned(fields, "from")?,
            to: codec::unsigned(fields, "to")?,
            value: amount,
            description: codec::optional_string(fields, "description")?,
            metadata: codec::optional_object(fields, "metadata")?,
        })
    }

    fn encode(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("from".to_owned(), json!(self.from));
        fields.insert("to".to_owned(), json!(self.to));
        fields.insert("value".to_owned(), json!(self.value));
        if let Some(description) = &self.description {
            fields.insert("description".to_owned(), json!(description));
        }
        if let Some(metadata) = &self.metadata {
            fields.insert("metadata".to_owned(), Value::Object(metadata.clone()));
        }
        Value::Object(fields)
    }
}

/// Command: look up an account's balance. Answered with a bare integer.
#[derive(Debug, Clone, PartialEq)]
pub struct GetBalance {
    pub account: u64,
}

impl Codec for GetBalance {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        let fields = codec::fields(value)?;
        Ok(GetBalance {
            account: codec::unsigned(fields, "account")?,
        })
    }

    fn encode(&self) -> Value {
        json!({"account": self.account})
    }
}

/// The sealed command family of the ledger endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    AddTransaction(AddTransaction),
    GetBalance(GetBalance),
}

impl From<AddTransaction> for LedgerCommand {
    fn from(payload: AddTransaction) -> Self {
        LedgerCommand::AddTransaction(payload)
    }
}

impl From<GetBalance> for LedgerCommand {
    fn from(payload: GetBalance) -> Self {
        LedgerCommand::GetBalance(payload)
    }
}

impl Message for LedgerCommand {
    fn method(&self) -> &'static str {
        match self {
            LedgerCommand::AddTransaction(_) => "addTransaction",
            LedgerCommand::GetBalance(_) => "getBalance",
        }
    }

    fn params(&self) -> Params {
        let encoded = match self {
            LedgerCommand::AddTransaction(payload) => payload.encode(),
            LedgerCommand::GetBalance(payload) => payload.encode(),
        };
        Params::from_payload(encoded)
    }
}

/// Notification: a transfer was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionAdded {
    pub transaction: Transaction,
}

impl Codec for TransactionAdded {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        let fields = codec::fields(value)?;
        Ok(TransactionAdded {
            transaction: Transaction::decode(codec::require(fields, "transaction")?)?,
        })
    }

    fn encode(&self) -> Value {
        json!({"transaction": self.transaction.encode()})
    }
}

/// The sealed notification family of the ledger endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerNotification {
    TransactionAdded(TransactionAdded),
}

impl From<TransactionAdded> for LedgerNotification {
    fn from(payload: TransactionAdded) -> Self {
        LedgerNotification::TransactionAdded(payload)
    }
}

impl Message for LedgerNotification {
    fn method(&self) -> &'static str {
        match self {
            LedgerNotification::TransactionAdded(_) => "transactionAdded",
        }
    }

    fn params(&self) -> Params {
        let LedgerNotification::TransactionAdded(payload) = self;
        Params::from_payload(payload.encode())
    }
}

pub fn command_registry() -> Registry<LedgerCommand> {
    Registry::builder()
        .register::<AddTransaction>("addTransaction")
        .register::<GetBalance>("getBalance")
        .build()
        .expect("ledger command names are unique")
}

pub fn notification_registry() -> Registry<LedgerNotification> {
    Registry::builder()
        .register::<TransactionAdded>("transactionAdded")
        .build()
        .expect("ledger notification names are unique")
}
