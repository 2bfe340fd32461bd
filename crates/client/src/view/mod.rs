//! View state for the show list, detail card, and create form.
//!
//! Everything here is UI-framework agnostic: the types hold the state a
//! screen renders from and expose the transitions user actions trigger.
//! Network access goes through [`crate::api::ShowsGateway`].

pub mod card;
pub mod filter;
pub mod form;
pub mod list;
pub mod options;
pub mod stats;

pub use card::{CardMode, ShowCard};
pub use filter::ShowFilter;
pub use form::{CreateForm, ShowForm};
pub use list::{LoadState, ShowList};
pub use options::{genre_icon, type_icon, FilterOptions};
pub use stats::ShowStats;

#[cfg(test)]
pub(crate) mod test_support;
