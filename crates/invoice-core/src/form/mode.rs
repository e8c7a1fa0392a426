//! Tab selector for the invoice entry screen.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which section of the entry screen is visible.
///
/// Purely a visibility selector over one shared record: switching modes
/// never validates, clears or persists anything, and nothing outside the
/// rendering layer branches on it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FormMode {
    #[default]
    VendorDetails,
    InvoiceDetails,
    Comments,
}

impl FormMode {
    /// Tab caption.
    pub fn title(self) -> &'static str {
        match self {
            Self::VendorDetails => "Vendor Details",
            Self::InvoiceDetails => "Invoice Details",
            Self::Comments => "Comments",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_vendor_details() {
        assert_eq!(FormMode::default(), FormMode::VendorDetails);
    }

    #[test]
    fn test_parse_kebab_case() {
        assert_eq!(
            "invoice-details".parse::<FormMode>().unwrap(),
            FormMode::InvoiceDetails
        );
        assert_eq!(FormMode::Comments.to_string(), "comments");
    }
}
