//! Offer selection.
//!
//! Selection is modeled as an explicit command value handled by a pure
//! reducer, decoupling "what happened" from "how it is displayed". The
//! caller is notified synchronously with the full offer record. The
//! reference behavior surfaces a confirmation; a real booking flow is
//! expected to replace the confirmation without touching this module.

use crate::domain::FlightOffer;
use crate::search::RouteResolver;

use super::format_price;

/// A user-initiated command on the results surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The user picked an offer card by id.
    SelectOffer(String),
}

/// The synchronous outcome of a successful selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfirmed {
    /// The full selected offer record
    pub offer: FlightOffer,

    /// Confirmation summary, e.g.
    /// "Selected flight from AMS to TQO for $550.00"
    pub message: String,
}

/// Handle a command against the resolver's catalogs.
///
/// Returns `None` when the offer id is unknown; the caller degrades to
/// a guidance state rather than failing.
pub fn handle_command(resolver: &RouteResolver, command: &Command) -> Option<SelectionConfirmed> {
    match command {
        Command::SelectOffer(id) => {
            let offer = resolver.offer_by_id(id)?.clone();
            let message = format!(
                "Selected flight from {} to {} for {}",
                offer.from,
                offer.to,
                format_price(offer.price)
            );
            Some(SelectionConfirmed { offer, message })
        }
    }
}
