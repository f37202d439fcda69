//! Stale-response tracking
//!
//! Every fetch is tagged with the query that spawned it. A response is
//! applied only if its query is still the current selection of the view;
//! anything else is dropped, not cancelled.

use analytics_spi::AnalyticsError;
use serde::Serialize;

/// Proof that a fetch was started for `query` at a given selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<Q> {
    generation: u64,
    query: Q,
}

impl<Q> Ticket<Q> {
    pub fn query(&self) -> &Q {
        &self.query
    }
}

/// What happened to a resolved fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The result became the view's state
    Applied,
    /// A newer selection superseded the fetch; the result was dropped
    Stale,
    /// The fetch failed; the view kept its last-known-good state if it had one
    Failed {
        error: AnalyticsError,
        kept_previous: bool,
    },
}

impl Resolution {
    pub fn is_applied(&self) -> bool {
        matches!(self, Resolution::Applied)
    }
}

/// Rendered state of a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    /// Nothing loaded yet, or the initial load failed
    Empty,
    Loaded(T),
}

impl<T> ViewState<T> {
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            ViewState::Empty => None,
        }
    }
}

/// One view: its current query, its state and the last transport error.
#[derive(Debug, Clone)]
pub struct ViewSlot<Q, T> {
    generation: u64,
    current: Option<Q>,
    state: ViewState<T>,
    last_error: Option<AnalyticsError>,
}

impl<Q, T> Default for ViewSlot<Q, T> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
            state: ViewState::Empty,
            last_error: None,
        }
    }
}

impl<Q: Clone + PartialEq, T> ViewSlot<Q, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `query` the current selection and return the ticket for its fetch.
    pub fn select(&mut self, query: Q) -> Ticket<Q> {
        self.generation += 1;
        self.current = Some(query.clone());
        Ticket {
            generation: self.generation,
            query,
        }
    }

    /// True when `ticket` belongs to the current selection.
    pub fn is_current(&self, ticket: &Ticket<Q>) -> bool {
        ticket.generation == self.generation && self.current.as_ref() == Some(&ticket.query)
    }

    /// Apply the outcome of a fetch, unless it has been superseded.
    pub fn resolve(
        &mut self,
        ticket: Ticket<Q>,
        outcome: Result<T, AnalyticsError>,
    ) -> Resolution {
        if !self.is_current(&ticket) {
            return Resolution::Stale;
        }
        match outcome {
            Ok(value) => {
                self.state = ViewState::Loaded(value);
                self.last_error = None;
                Resolution::Applied
            }
            Err(error) => {
                let kept_previous = matches!(self.state, ViewState::Loaded(_));
                self.last_error = Some(error.clone());
                Resolution::Failed {
                    error,
                    kept_previous,
                }
            }
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn current_query(&self) -> Option<&Q> {
        self.current.as_ref()
    }

    /// Error of the latest current fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&AnalyticsError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline() -> AnalyticsError {
        AnalyticsError::RequestFailed("offline".to_string())
    }

    #[test]
    fn test_current_response_applied() {
        let mut slot: ViewSlot<&str, u32> = ViewSlot::new();
        let ticket = slot.select("East US");

        assert_eq!(slot.resolve(ticket, Ok(7)), Resolution::Applied);
        assert_eq!(slot.state(), &ViewState::Loaded(7));
    }

    #[test]
    fn test_superseded_response_dropped() {
        let mut slot: ViewSlot<&str, u32> = ViewSlot::new();
        let first = slot.select("East US");
        let second = slot.select("West US");

        // the newer request resolves first, the older one arrives late
        assert!(slot.resolve(second, Ok(2)).is_applied());
        assert_eq!(slot.resolve(first, Ok(1)), Resolution::Stale);
        assert_eq!(slot.state(), &ViewState::Loaded(2));
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut slot: ViewSlot<&str, u32> = ViewSlot::new();
        let first = slot.select("A");
        let _second = slot.select("B");

        assert_eq!(slot.resolve(first, Err(offline())), Resolution::Stale);
        assert!(slot.last_error().is_none());
    }

    #[test]
    fn test_reselecting_same_query_invalidates_older_ticket() {
        let mut slot: ViewSlot<&str, u32> = ViewSlot::new();
        let first = slot.select("A");
        let second = slot.select("A");

        assert!(!slot.is_current(&first));
        assert!(slot.is_current(&second));
    }

    #[test]
    fn test_failure_keeps_last_known_good() {
        let mut slot: ViewSlot<&str, u32> = ViewSlot::new();
        let ticket = slot.select("A");
        slot.resolve(ticket, Ok(5));

        let ticket = slot.select("B");
        let resolution = slot.resolve(ticket, Err(offline()));

        assert_eq!(
            resolution,
            Resolution::Failed {
                error: offline(),
                kept_previous: true
            }
        );
        assert_eq!(slot.state(), &ViewState::Loaded(5));
        assert_eq!(slot.last_error(), Some(&offline()));
    }

    #[test]
    fn test_initial_failure_is_empty() {
        let mut slot: ViewSlot<(), u32> = ViewSlot::new();
        let ticket = slot.select(());
        let resolution = slot.resolve(ticket, Err(offline()));

        assert!(matches!(
            resolution,
            Resolution::Failed {
                kept_previous: false,
                ..
            }
        ));
        assert_eq!(slot.state(), &ViewState::Empty);
    }

    #[test]
    fn test_success_clears_error() {
        let mut slot: ViewSlot<(), u32> = ViewSlot::new();
        let ticket = slot.select(());
        slot.resolve(ticket, Err(offline()));
        let ticket = slot.select(());
        slot.resolve(ticket, Ok(1));
        assert!(slot.last_error().is_none());
    }
}
