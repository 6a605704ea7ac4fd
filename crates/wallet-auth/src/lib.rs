//! Sign-in flow for the wallet web front-end.
//!
//! The crate owns the multi-step authentication state machine (identify the
//! account, enter the password, complete a second factor when the account is
//! configured for one) and its decision logic: second-factor resolution,
//! backend error classification and submission gating. Rendering, styling and
//! localization are the host UI's concern; it drives the flow through
//! [`signin::SigninClient`] and renders from [`signin::SigninSnapshot`].

pub mod signin;

pub(crate) mod api; // keep internal to crate

mod error;
mod settings;

pub use error::ApiError;
pub use settings::ClientSettings;
