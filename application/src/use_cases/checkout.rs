//! Checkout use case
//!
//! Turns the current order into a WhatsApp deep link and hands it to a
//! [`LinkLauncher`]. The launch is fire-and-forget: a failure is logged
//! and reported in the receipt, never propagated as an error.

use crate::ports::link_launcher::{LaunchOutcome, LinkLauncher};
use crate::ports::order_logger::{NoOrderLogger, OrderEvent, OrderLogger};
use crate::store::MenuState;
use menu_domain::{
    BrandConfig, DomainError, Language, OrderDraft, OrderMessage, WhatsAppLink,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that prevent a checkout
#[derive(Error, Debug, PartialEq)]
pub enum CheckoutError {
    #[error("Ordering is not enabled for this session")]
    OrderModeDisabled,

    #[error("WhatsApp ordering is disabled")]
    WhatsAppOrderDisabled,

    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`CheckoutUseCase`]
#[derive(Debug, Clone)]
pub struct CheckoutInput {
    pub draft: OrderDraft,
    pub language: Language,
    pub branch_id: Option<String>,
    pub order_mode: bool,
}

impl CheckoutInput {
    pub fn from_state(state: &MenuState) -> Self {
        Self {
            draft: state.draft.clone(),
            language: state.language,
            branch_id: state.selected_branch.clone(),
            order_mode: state.order_mode,
        }
    }
}

/// Result of a checkout
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub link: WhatsAppLink,
    /// `None` when the launcher failed
    pub outcome: Option<LaunchOutcome>,
}

impl CheckoutReceipt {
    pub fn url(&self) -> String {
        self.link.url()
    }
}

pub struct CheckoutUseCase {
    config: Arc<BrandConfig>,
    launcher: Arc<dyn LinkLauncher>,
    order_logger: Arc<dyn OrderLogger>,
}

impl CheckoutUseCase {
    pub fn new(config: Arc<BrandConfig>, launcher: Arc<dyn LinkLauncher>) -> Self {
        Self {
            config,
            launcher,
            order_logger: Arc::new(NoOrderLogger),
        }
    }

    pub fn with_order_logger(mut self, logger: Arc<dyn OrderLogger>) -> Self {
        self.order_logger = logger;
        self
    }

    /// Compose the message and link without launching anything
    pub fn prepare(&self, input: &CheckoutInput) -> Result<WhatsAppLink, CheckoutError> {
        if !input.order_mode || !self.config.features.cart {
            return Err(CheckoutError::OrderModeDisabled);
        }
        if !self.config.features.whatsapp_order {
            return Err(CheckoutError::WhatsAppOrderDisabled);
        }
        if input.draft.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let branch = input
            .branch_id
            .as_deref()
            .and_then(|id| self.config.branch(id));
        let number = self.config.whatsapp_number_for(branch);
        let message = OrderMessage::compose(&input.draft, &self.config, branch, input.language);
        Ok(WhatsAppLink::for_message(number, &message)?)
    }

    pub fn execute(&self, input: CheckoutInput) -> Result<CheckoutReceipt, CheckoutError> {
        let link = self.prepare(&input)?;
        info!(
            lines = input.draft.lines().len(),
            total = input.draft.total_price(),
            phone = %link.phone(),
            "Dispatching order"
        );

        let url = link.url();
        let outcome = match self.launcher.launch(&url) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!("Failed to open WhatsApp link: {}", e);
                None
            }
        };

        self.order_logger.log(OrderEvent::new(
            "order_sent",
            json!({
                "branch": input.branch_id,
                "language": input.language.code(),
                "lines": input.draft.lines().iter().map(|l| json!({
                    "id": l.id.as_str(),
                    "quantity": l.quantity,
                    "unit_price": l.unit_price,
                    "line_total": l.line_total(),
                })).collect::<Vec<_>>(),
                "total_items": input.draft.total_items(),
                "total_price": input.draft.total_price(),
                "notes": input.draft.notes(),
                "launched": outcome.is_some(),
                "url": url,
            }),
        ));

        Ok(CheckoutReceipt { link, outcome })
    }
}
