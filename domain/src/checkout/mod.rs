//! Checkout hand-off: the order message and the WhatsApp link carrying it

pub mod link;
pub mod message;

pub use link::WhatsAppLink;
pub use message::OrderMessage;
