//! Request lifecycle for the single display slot: Idle → Loading → {Success | Failed}.
//!
//! The controller owns the state explicitly. Every submission gets a [`Ticket`]; a
//! completion is applied only if its ticket is still the latest one, so a slow earlier
//! request can never overwrite the outcome of a newer one.

use crate::api::RemoteData;
use crate::currency::{self, TARGET_CURRENCY};
use crate::error::FetchError;
use crate::models::{
    ExchangeResult, Indicator, IndicatorResult, Metric, Observation, Payload, Query,
};
use crate::view::View;

/// Snapshot of one request. Never holds both an error and a result; while loading it
/// holds neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestState {
    loading: bool,
    error: Option<FetchError>,
    result: Option<Payload>,
}

impl RequestState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn from_outcome(outcome: Result<Payload, FetchError>) -> Self {
        match outcome {
            Ok(payload) => Self {
                result: Some(payload),
                ..Self::default()
            },
            Err(err) => Self {
                error: Some(err),
                ..Self::default()
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&Payload> {
        self.result.as_ref()
    }
}

/// Sequence token handed out by [`RequestController::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestController {
    state: RequestState,
    view: View,
    latest: u64,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Start a submission: lock in the view, reset to loading and issue a new ticket.
    pub fn begin(&mut self, query: &Query) -> Ticket {
        self.latest += 1;
        self.view = View::for_metric(query.metric());
        self.state = RequestState::loading();
        log::debug!(
            "request #{} started: {} {} {}",
            self.latest,
            query.country(),
            query.metric().code(),
            query.year()
        );
        Ticket(self.latest)
    }

    /// Apply the outcome of `ticket`. Returns `false` (and changes nothing) when a newer
    /// submission has started since.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<Payload, FetchError>) -> bool {
        if ticket.0 != self.latest {
            log::debug!(
                "dropping stale completion #{} (latest is #{})",
                ticket.0,
                self.latest
            );
            return false;
        }
        if let Err(err) = &outcome {
            log::warn!("request #{} failed: {}", ticket.0, err);
        }
        self.state = RequestState::from_outcome(outcome);
        true
    }

    /// Run a whole submission synchronously against `source`.
    pub fn submit<R: RemoteData + ?Sized>(&mut self, source: &R, query: &Query) -> &RequestState {
        let ticket = self.begin(query);
        let outcome = resolve(source, query);
        self.complete(ticket, outcome);
        &self.state
    }
}

/// Perform the lookup `query` describes. Exchange pre-checks (year, currency) fail
/// before anything is asked of `source`.
pub fn resolve<R: RemoteData + ?Sized>(source: &R, query: &Query) -> Result<Payload, FetchError> {
    match query.metric() {
        Metric::ExchangeRate => resolve_exchange(source, query).map(Payload::Exchange),
        Metric::Indicator(indicator) => {
            resolve_indicator(source, query, indicator).map(Payload::Indicator)
        }
    }
}

fn resolve_exchange<R: RemoteData + ?Sized>(
    source: &R,
    query: &Query,
) -> Result<ExchangeResult, FetchError> {
    let min = Metric::ExchangeRate.min_year();
    if query.year() < min {
        return Err(FetchError::YearUnsupported {
            year: query.year(),
            min,
        });
    }
    let currency =
        currency::lookup(query.country()).ok_or_else(|| FetchError::CurrencyNotFound {
            country: query.country().to_string(),
        })?;

    let rates = source
        .rates(currency)
        .map_err(|e| FetchError::transport(&e))?;
    let rate = rates
        .conversion_rates
        .get(TARGET_CURRENCY)
        .copied()
        .ok_or_else(|| {
            FetchError::Transport(format!(
                "response for base {} has no {} rate",
                currency, TARGET_CURRENCY
            ))
        })?;

    Ok(ExchangeResult {
        rate,
        currency: currency.to_string(),
        target: TARGET_CURRENCY.to_string(),
        year: query.year(),
    })
}

fn resolve_indicator<R: RemoteData + ?Sized>(
    source: &R,
    query: &Query,
    indicator: Indicator,
) -> Result<IndicatorResult, FetchError> {
    let rows = source
        .observations(query.country(), indicator, query.year())
        .map_err(|e| FetchError::transport(&e))?;

    // First row wins; a null value counts as missing data.
    match rows.into_iter().next() {
        Some(Observation {
            value: Some(value),
            date,
        }) => Ok(IndicatorResult {
            country: query.country().to_string(),
            indicator,
            value,
            year: date,
        }),
        _ => Err(FetchError::NoDataForIndicator {
            country: query.country().to_string(),
            indicator,
            year: query.year(),
        }),
    }
}
