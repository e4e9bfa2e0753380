//! Form presenter adapters

mod json_form_presenter;

pub use json_form_presenter::JsonFormPresenter;
