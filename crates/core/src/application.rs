//! Application status values.
//!
//! Status is free text set once at creation. Rows inserted without an
//! explicit status get the column default, [`STATUS_PENDING`]; applications
//! made through the student dashboard are written as [`STATUS_SUBMITTED`].

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_SUBMITTED: &str = "Submitted";
