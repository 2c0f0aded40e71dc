//! Client core for the physician (médico) registry.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), renders physician records as
//! table rows, and drives the registration, list and update pages through
//! host-provided `Transport` and `Ui` seams.
//!
//! # Design
//! - `MedicoClient` is stateless and holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Page state comes in through `FormSource` values; nothing reads global
//!   page state.
//! - Confirmations and alerts go through the `Ui` trait, so every flow runs
//!   in tests without a browser.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod http;
pub mod navigation;
pub mod table;
pub mod types;
pub mod validation;

pub use client::MedicoClient;
pub use config::{ClientConfig, Pages};
pub use error::{ApiError, TransportError};
pub use flow::{FlowOutcome, Navigation, PageFlow, Ui};
pub use form::{collect, FormField, FormSource, MedicoForm, NamedInputs, PositionalInputs};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use navigation::{edit_href, parse_edit_href, NavigationError};
pub use table::{HtmlTableBody, RowAction, TableBody, TableLayout, TableRenderer, TableRow};
pub use types::{Medico, MedicoId, NovoMedico};
pub use validation::{is_valid, validate, validate_for_update, ValidationError};
