use serde::{Deserialize, Serialize};

use crate::geo::{Coordinates, ResolvedAddress};

/// Everything the user confirmed, persisted for the next session.
/// Field names follow the stored JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedAddress {
    pub base_address: String,
    pub number: String,
    pub complement: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub full_address: String,
}

/// `base` plus `, {number}` and ` - {complement}` when present. The
/// reference note never enters the composed address.
pub fn compose(base: &str, number: &str, complement: &str) -> String {
    let mut full = String::from(base);
    if !number.is_empty() {
        full.push_str(", ");
        full.push_str(number);
    }
    if !complement.is_empty() {
        full.push_str(" - ");
        full.push_str(complement);
    }
    full
}

/// State behind the confirmation screen: the resolved base address plus
/// the refinements typed so far, with the preview derived from them.
#[derive(Debug, Clone)]
pub struct ConfirmationForm {
    resolved: ResolvedAddress,
    pub number: String,
    pub complement: String,
    pub reference: String,
}

impl ConfirmationForm {
    pub fn new(resolved: ResolvedAddress) -> Self {
        Self {
            resolved,
            number: String::new(),
            complement: String::new(),
            reference: String::new(),
        }
    }

    pub fn base_address(&self) -> &str {
        &self.resolved.base
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.resolved.coordinates
    }

    pub fn preview(&self) -> String {
        compose(&self.resolved.base, &self.number, &self.complement)
    }

    /// The number is the one required refinement.
    pub fn can_confirm(&self) -> bool {
        !self.number.trim().is_empty()
    }

    /// `None` while the required number is missing.
    pub fn confirm(&self) -> Option<ConfirmedAddress> {
        if !self.can_confirm() {
            return None;
        }
        Some(ConfirmedAddress {
            base_address: self.resolved.base.clone(),
            number: self.number.clone(),
            complement: self.complement.clone(),
            reference: self.reference.clone(),
            coordinates: self.resolved.coordinates,
            full_address: self.preview(),
        })
    }
}
