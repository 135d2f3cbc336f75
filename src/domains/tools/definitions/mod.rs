//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod invoices;

pub use invoices::{
    CreateInvoiceParams, CreateInvoiceTool, DeleteInvoiceParams, DeleteInvoiceTool,
    GetAllInvoicesParams, GetAllInvoicesTool, GetInvoiceParams, GetInvoiceTool,
    InvoiceListOutput, InvoiceOutput, NextSuggestion, UpdateInvoiceParams, UpdateInvoiceTool,
};
