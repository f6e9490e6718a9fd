//! Dialog-backed form for creating invoices.
//!
//! # Design
//! The create dialog is a two-state machine: closed or open. Field values
//! are plain public data, mirroring inputs bound to the form, while the
//! visibility flag only moves through `open`, `cancel`, and the submit
//! outcome methods, which is what guarantees fields reset whenever the
//! dialog closes.
//!
//! Submission follows the same host-does-IO split as `InvoiceClient`:
//! `submit` validates and hands back the create payload, the host performs
//! the call, and reports the outcome via `submit_succeeded` or
//! `submit_failed`. A failed create leaves the dialog open with the entered
//! values intact and a message to show; only a confirmed create closes it.

use crate::schema::{self, FieldError};
use crate::types::CreateInvoice;

/// State of the create-invoice dialog and its input fields.
///
/// Defaults are empty strings and a zero amount; a zero amount does not
/// validate, so an untouched form cannot be submitted.
#[derive(Debug, Default)]
pub struct InvoiceForm {
    open: bool,
    pub invoice_name: String,
    pub status: String,
    pub method: String,
    pub amount: f64,
    field_errors: Vec<FieldError>,
    submit_error: Option<String>,
}

impl InvoiceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger action: show the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Cancel action: hide the dialog without submitting. The open → closed
    /// transition resets every field, so the next open starts blank.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Validate the current fields and, if every rule passes, produce the
    /// create payload with form fields mapped to their wire names
    /// (`invoice_name` becomes `name`).
    ///
    /// Any violation records its field-level message and returns `None`,
    /// blocking submission. The dialog stays open either way.
    pub fn submit(&mut self) -> Option<CreateInvoice> {
        self.submit_error = None;
        let errors = self.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }
        self.field_errors.clear();
        Some(CreateInvoice {
            name: self.invoice_name.clone(),
            status: self.status.clone(),
            method: self.method.clone(),
            amount: self.amount,
        })
    }

    /// The host reports that the create call succeeded: the dialog closes,
    /// resetting the fields for the next open.
    pub fn submit_succeeded(&mut self) {
        self.close();
    }

    /// The host reports that the create call failed: the dialog stays open,
    /// entered values stay intact, and the message is retained for display.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
    }

    /// Field-level messages recorded by the last blocked submission.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Message retained from the last failed create call, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    fn close(&mut self) {
        self.open = false;
        self.invoice_name.clear();
        self.status.clear();
        self.method.clear();
        self.amount = 0.0;
        self.field_errors.clear();
        self.submit_error = None;
    }

    fn validate(&self) -> Vec<FieldError> {
        [
            schema::min_chars("invoice_name", "Name", &self.invoice_name, schema::MIN_TEXT_CHARS),
            schema::min_chars("status", "Status", &self.status, schema::MIN_TEXT_CHARS),
            schema::min_chars("method", "Method", &self.method, schema::MIN_TEXT_CHARS),
            schema::positive("amount", "Amount", self.amount),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
