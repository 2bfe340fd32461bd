//! WatchMe client: the REST gateway to the shows API and the view-state
//! logic behind the list, detail card, and create form.

pub mod api;
pub mod view;
