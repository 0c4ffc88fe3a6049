use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tickerlog_core::connector::{CalendarProvider, HistoryProvider, TickerConnector};
use tickerlog_core::{
    Calendar, HistoryRequest, HistoryResponse, Instrument, Symbol, TickerLogError,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(TickerLogError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<Symbol, MockBehavior<HistoryResponse>>,
    calendar_rules: HashMap<Symbol, MockBehavior<Calendar>>,
    calls: Vec<(&'static str, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<HistoryResponse>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `calendar` calls for a specific symbol.
    pub async fn set_calendar_behavior(&self, symbol: Symbol, behavior: MockBehavior<Calendar>) {
        let mut guard = self.state.lock().await;
        guard.calendar_rules.insert(symbol, behavior);
    }

    /// Return every call received so far as `(capability, symbol)` pairs, in order.
    pub async fn calls(&self) -> Vec<(&'static str, String)> {
        self.state.lock().await.calls.clone()
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Symbols without a rule answer `unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn TickerConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TickerConnector>, controller)
    }

    async fn resolve<T: Clone + Send>(
        &self,
        capability: &'static str,
        instrument: &Instrument,
        pick: impl Fn(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, TickerLogError> {
        // Record the call and snapshot the behavior without holding the lock across awaits
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .calls
                .push((capability, instrument.symbol_str().to_string()));
            pick(&*guard)
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(TickerLogError::unsupported(capability)),
        }
    }
}

impl TickerConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        Some(self as &dyn CalendarProvider)
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        instrument: &Instrument,
        _req: HistoryRequest,
    ) -> Result<HistoryResponse, TickerLogError> {
        let symbol = instrument.symbol();
        self.resolve("history", instrument, |s| {
            s.history_rules.get(symbol).cloned()
        })
        .await
    }
}

#[async_trait]
impl CalendarProvider for DynamicMockConnector {
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, TickerLogError> {
        let symbol = instrument.symbol();
        self.resolve("calendar", instrument, |s| {
            s.calendar_rules.get(symbol).cloned()
        })
        .await
    }
}
