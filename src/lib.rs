//! wbfx_rs
//!
//! Look up one socio-economic indicator (World Bank) or an exchange rate for a country
//! and year, and turn the raw number into a readable, classified result. Pairs with the
//! `wbfx` CLI and the `wbfx-gui` desktop client.
//!
//! ### Features
//! - Life expectancy, population, poverty rate and GDP from the World Bank API
//! - Exchange rate of the country's currency into BRL from ExchangeRate-API
//! - Magnitude formatting (`US$ 1.6 trillion`, `214.3 million inhabitants`) and
//!   Low/Medium/High style classification
//! - A request controller that keeps only the latest submission's outcome
//!
//! ### Example
//! ```no_run
//! use wbfx_rs::{Config, Metric, Query, RequestController, Sources, view::Card};
//!
//! let sources = Sources::new(&Config::from_env()?)?;
//! let query = Query::new("BRA", "gdp".parse::<Metric>()?, 2020)?;
//! let mut controller = RequestController::new();
//! controller.submit(&sources, &query);
//! let card = Card::from_state(controller.view(), controller.state(), Some("Brazil"));
//! println!("{card}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod countries;
pub mod currency;
pub mod error;
pub mod format;
pub mod models;
pub mod view;

pub use api::{Client, ExchangeClient, RemoteData, Sources};
pub use config::Config;
pub use controller::{RequestController, RequestState, Ticket};
pub use error::FetchError;
pub use models::{Indicator, Metric, Payload, Query};
