//! Cart and order draft

pub mod entities;

pub use entities::{CartLine, CartLineId, OrderDraft};
