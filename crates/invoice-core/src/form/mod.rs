//! Presentation state of the invoice entry screen.

mod mode;

pub use mode::FormMode;
