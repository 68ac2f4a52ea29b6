//! Product detail overlay.

mod presenter;

pub use presenter::{SelectionDetail, SelectionEvent, SelectionPresenter};
