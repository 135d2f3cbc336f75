//! Invoice tools: one file per tool plus the shared response shaper.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod shape;
pub mod update;

pub use create::{CreateInvoiceParams, CreateInvoiceTool};
pub use delete::{DeleteInvoiceParams, DeleteInvoiceTool};
pub use get::{GetInvoiceParams, GetInvoiceTool};
pub use list::{GetAllInvoicesParams, GetAllInvoicesTool};
pub use shape::{InvoiceListOutput, InvoiceOutput, NextSuggestion};
pub use update::{UpdateInvoiceParams, UpdateInvoiceTool};
