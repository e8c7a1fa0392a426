//! Reference option rows.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A vendor that can be billed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: u32,
    pub name: String,
    pub address: String,
}

/// An open purchase order. The id (`PO-001`) is the stored field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub description: String,
}

/// A plain id/name option (departments, accounts, locations, payment terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub id: u32,
    pub name: String,
}

/// The option lists a provider exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ReferenceKind {
    Vendors,
    PurchaseOrders,
    PaymentTerms,
    Departments,
    Accounts,
    Locations,
}
