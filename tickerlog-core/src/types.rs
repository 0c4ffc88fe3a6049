//! Re-export of foundational market types from `paft`.
// Consolidated re-exports so downstream crates can depend on `tickerlog-core` only

pub use crate::error::{FailureKind, TickerLogError};

pub use paft::domain::{AssetKind, IdentifierScheme, Instrument, Symbol};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use paft::Decimal;

pub use paft::fundamentals::statements::Calendar;

pub use paft::market::requests::history::{HistoryRequest, Interval, Range};
pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
