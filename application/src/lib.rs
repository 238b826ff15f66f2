//! Application layer for whatsapp-menu
//!
//! This crate contains the state store, use cases, and port definitions.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use config::{SessionOptions, order_mode_from_url};
pub use ports::{
    catalog_source::{CatalogSource, CatalogSourceError},
    link_launcher::{LaunchError, LaunchOutcome, LinkLauncher},
    order_logger::{NoOrderLogger, OrderEvent, OrderLogger},
    state_observer::StateObserver,
};
pub use store::{ItemDetail, MenuAction, MenuState, MenuStore, StoreContext, ViewState};
pub use use_cases::checkout::{CheckoutError, CheckoutInput, CheckoutReceipt, CheckoutUseCase};
pub use use_cases::load_catalog::LoadCatalogUseCase;
