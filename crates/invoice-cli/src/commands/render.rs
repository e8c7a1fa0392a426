//! Text rendering of the invoice entry screen.
//!
//! Which sections appear depends on the active tab; the underlying record
//! is the same in every tab.

use std::fmt;

use invoice_application::FormController;
use invoice_core::form::FormMode;
use invoice_core::invoice::{ExpenseField, InvoiceField, InvoiceRecord};
use invoice_core::reference::ReferenceData;
use strum::IntoEnumIterator;

const INVOICE_DETAIL_FIELDS: [InvoiceField; 8] = [
    InvoiceField::PurchaseOrderNumber,
    InvoiceField::InvoiceNumber,
    InvoiceField::InvoiceDate,
    InvoiceField::TotalAmount,
    InvoiceField::PaymentTerms,
    InvoiceField::InvoiceDueDate,
    InvoiceField::GlPostDate,
    InvoiceField::InvoiceDescription,
];

pub struct FormView<'a> {
    controller: &'a FormController,
    reference: &'a dyn ReferenceData,
}

impl<'a> FormView<'a> {
    pub fn new(controller: &'a FormController, reference: &'a dyn ReferenceData) -> Self {
        Self {
            controller,
            reference,
        }
    }

    fn tabs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.controller.mode();
        let tabs: Vec<String> = FormMode::iter()
            .map(|mode| {
                if mode == active {
                    format!("[{}]", mode.title())
                } else {
                    format!(" {} ", mode.title())
                }
            })
            .collect();
        writeln!(f, "Create New Invoice")?;
        writeln!(f, "{}", tabs.join(" "))?;
        writeln!(f)
    }

    fn vendor(&self, f: &mut fmt::Formatter<'_>, record: &InvoiceRecord) -> fmt::Result {
        writeln!(f, "== Vendor Details ==")?;
        field_line(f, InvoiceField::Vendor, record)?;
        if let Some(address) = self.reference.vendor_address(&record.vendor) {
            writeln!(f, "    {address}")?;
        }
        writeln!(f)
    }

    fn invoice_details(&self, f: &mut fmt::Formatter<'_>, record: &InvoiceRecord) -> fmt::Result {
        writeln!(f, "== Invoice Details ==")?;
        for field in INVOICE_DETAIL_FIELDS {
            field_line(f, field, record)?;
        }
        writeln!(f)?;
        writeln!(f, "-- Expense Details --")?;
        for (index, line) in record.expenses.iter().enumerate() {
            writeln!(f, "  Line {index}")?;
            for field in ExpenseField::iter() {
                writeln!(f, "    {:<20}* {}", field.label(), line.field(field))?;
            }
        }
        writeln!(f)
    }

    fn comments(&self, f: &mut fmt::Formatter<'_>, record: &InvoiceRecord) -> fmt::Result {
        writeln!(f, "== Comments ==")?;
        field_line(f, InvoiceField::Comments, record)
    }
}

fn field_line(
    f: &mut fmt::Formatter<'_>,
    field: InvoiceField,
    record: &InvoiceRecord,
) -> fmt::Result {
    let marker = if field.is_required() { "*" } else { " " };
    writeln!(f, "  {:<22}{} {}", field.label(), marker, record.field(field))
}

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.controller.record();
        self.tabs(f)?;
        match self.controller.mode() {
            FormMode::VendorDetails => {
                self.vendor(f, record)?;
                self.invoice_details(f, record)?;
                self.comments(f, record)
            }
            FormMode::InvoiceDetails => self.invoice_details(f, record),
            FormMode::Comments => self.comments(f, record),
        }
    }
}
