//! Reference data provider.

use super::model::{NamedOption, PurchaseOrder, ReferenceKind, Vendor};

/// Supplies the static option lists shown by the entry screen.
pub trait ReferenceData: Send + Sync {
    fn vendors(&self) -> &[Vendor];

    fn purchase_orders(&self) -> &[PurchaseOrder];

    fn payment_terms(&self) -> &[NamedOption];

    fn departments(&self) -> &[NamedOption];

    fn accounts(&self) -> &[NamedOption];

    fn locations(&self) -> &[NamedOption];

    /// Address printed under the vendor select for the chosen vendor name.
    fn vendor_address(&self, vendor_name: &str) -> Option<&str> {
        self.vendors()
            .iter()
            .find(|v| v.name == vendor_name)
            .map(|v| v.address.as_str())
    }

    /// `(stored value, display text)` pairs for a select input.
    fn options(&self, kind: ReferenceKind) -> Vec<(String, String)> {
        let named = |rows: &[NamedOption]| {
            rows.iter()
                .map(|o| (o.name.clone(), o.name.clone()))
                .collect::<Vec<_>>()
        };

        match kind {
            ReferenceKind::Vendors => self
                .vendors()
                .iter()
                .map(|v| (v.name.clone(), v.name.clone()))
                .collect(),
            ReferenceKind::PurchaseOrders => self
                .purchase_orders()
                .iter()
                .map(|po| (po.id.clone(), format!("{} - {}", po.id, po.description)))
                .collect(),
            ReferenceKind::PaymentTerms => named(self.payment_terms()),
            ReferenceKind::Departments => named(self.departments()),
            ReferenceKind::Accounts => named(self.accounts()),
            ReferenceKind::Locations => named(self.locations()),
        }
    }
}

/// Built-in option tables.
#[derive(Debug, Clone)]
pub struct StaticReferenceData {
    vendors: Vec<Vendor>,
    purchase_orders: Vec<PurchaseOrder>,
    payment_terms: Vec<NamedOption>,
    departments: Vec<NamedOption>,
    accounts: Vec<NamedOption>,
    locations: Vec<NamedOption>,
}

fn named(rows: &[&str]) -> Vec<NamedOption> {
    rows.iter()
        .zip(1u32..)
        .map(|(name, id)| NamedOption {
            id,
            name: (*name).to_string(),
        })
        .collect()
}

impl Default for StaticReferenceData {
    fn default() -> Self {
        let vendors = [
            ("A-1 Exterminators", "550 Main St., Lynn"),
            ("Office Supplies Co.", "123 Business Ave., Boston"),
            ("Tech Solutions Inc.", "456 Innovation Dr., Cambridge"),
        ]
        .into_iter()
        .zip(1u32..)
        .map(|((name, address), id)| Vendor {
            id,
            name: name.to_string(),
            address: address.to_string(),
        })
        .collect();

        let purchase_orders = [
            ("PO-001", "Office Supplies"),
            ("PO-002", "IT Equipment"),
            ("PO-003", "Maintenance Services"),
        ]
        .into_iter()
        .map(|(id, description)| PurchaseOrder {
            id: id.to_string(),
            description: description.to_string(),
        })
        .collect();

        Self {
            vendors,
            purchase_orders,
            payment_terms: named(&["Net 30", "Net 45", "Net 60", "Due on Receipt"]),
            departments: named(&[
                "Sales",
                "Marketing",
                "Finance",
                "Operations",
                "Human Resources",
            ]),
            accounts: named(&[
                "1000 - Cash",
                "2000 - Accounts Payable",
                "3000 - Revenue",
                "4000 - Expenses",
                "5000 - Payroll",
            ]),
            locations: named(&["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"]),
        }
    }
}

impl ReferenceData for StaticReferenceData {
    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    fn payment_terms(&self) -> &[NamedOption] {
        &self.payment_terms
    }

    fn departments(&self) -> &[NamedOption] {
        &self.departments
    }

    fn accounts(&self) -> &[NamedOption] {
        &self.accounts
    }

    fn locations(&self) -> &[NamedOption] {
        &self.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_address_lookup() {
        let data = StaticReferenceData::default();
        assert_eq!(
            data.vendor_address("Office Supplies Co."),
            Some("123 Business Ave., Boston")
        );
        assert_eq!(data.vendor_address("Unknown Vendor"), None);
    }

    #[test]
    fn test_purchase_order_options_store_the_id() {
        let data = StaticReferenceData::default();
        let options = data.options(ReferenceKind::PurchaseOrders);
        assert_eq!(
            options[1],
            ("PO-002".to_string(), "PO-002 - IT Equipment".to_string())
        );
    }

    #[test]
    fn test_named_tables_are_numbered_from_one() {
        let data = StaticReferenceData::default();
        assert_eq!(data.payment_terms().len(), 4);
        assert_eq!(data.departments()[0].id, 1);
        assert_eq!(data.locations()[4].name, "Phoenix");
    }
}
