//! Chat core: the widget's session logic, independent of any browser API.

pub mod citation;
pub mod controller;
pub mod event_bus;
pub mod exchange;
pub mod ports;
pub mod selection;
pub mod store;
