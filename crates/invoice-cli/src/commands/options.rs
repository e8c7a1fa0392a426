use invoice_application::InvoiceDesk;
use invoice_core::reference::ReferenceKind;

pub fn list(desk: &InvoiceDesk, kind: ReferenceKind) {
    for (value, label) in desk.reference().options(kind) {
        if value == label {
            println!("{value}");
        } else {
            println!("{value}\t{label}");
        }
    }
}
