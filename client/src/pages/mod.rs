//! One module per visible page; the app dispatches on the nav machine.

pub mod customize;
pub mod selection;
pub mod share;
pub mod view;
