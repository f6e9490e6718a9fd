//! Interactive invoice dashboard.
//!
//! # Design
//! The loop renders the invoice table from the last fetch, then waits for a
//! command: `a` opens the create dialog, `r` re-fetches the list, `q` quits.
//! A failed fetch renders as an error line in place of the table and the
//! loop keeps running, so a dead server never takes the dashboard down.
//!
//! The create dialog is `InvoiceForm` made visible: prompts fill the form's
//! fields, submission runs through its validation, and the outcome methods
//! decide whether the dialog stays open. All terminal I/O goes through
//! `BufRead`/`Write` parameters so tests can script a session.

use std::io::{self, BufRead, Write};

use invoice_core::{ApiError, Invoice, InvoiceClient, InvoiceForm};

use crate::api;

/// Run the dashboard until the user quits or input ends.
pub fn run(
    client: &InvoiceClient,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let agent = api::agent();
    let mut view = load_invoices(client, &agent);

    loop {
        render(&view, output)?;
        writeln!(output)?;
        writeln!(output, "[a]dd  [r]efresh  [q]uit")?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match line.trim() {
            // The table redraws from the last fetch; a new invoice shows up
            // on the next refresh.
            "a" => create_dialog(client, &agent, input, output)?,
            "r" => view = load_invoices(client, &agent),
            "q" => return Ok(()),
            "" => {}
            other => writeln!(output, "unknown command: {other}")?,
        }
    }
}

fn load_invoices(client: &InvoiceClient, agent: &ureq::Agent) -> Result<Vec<Invoice>, ApiError> {
    let req = client.build_list_invoices();
    let response = api::execute(agent, req)?;
    client.parse_list_invoices(response)
}

fn render(view: &Result<Vec<Invoice>, ApiError>, output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    match view {
        Ok(invoices) => write!(output, "{}", render_table(invoices))?,
        Err(e) => writeln!(output, "could not load invoices: {e}")?,
    }
    Ok(())
}

/// Format the invoice table with its caption.
fn render_table(invoices: &[Invoice]) -> String {
    let mut table = format!(
        "{:<36}  {:<20}  {:<8}  {:<8}  {:>10}\n",
        "ID", "NAME", "STATUS", "METHOD", "AMOUNT"
    );
    for invoice in invoices {
        table.push_str(&format!(
            "{:<36}  {:<20}  {:<8}  {:<8}  {:>10.2}\n",
            invoice.id, invoice.name, invoice.status, invoice.method, invoice.amount
        ));
    }
    table.push_str("A list of your recent invoices.\n");
    table
}

// ---------------------------------------------------------------------------
// Create dialog
// ---------------------------------------------------------------------------

/// Run the create dialog until it closes.
///
/// Each pass prompts every field (blank keeps the current value), then
/// submits. Validation failures print their messages and re-prompt with the
/// entered values. A failed create keeps the dialog open the same way; only
/// a confirmed create or a cancel closes it.
fn create_dialog(
    client: &InvoiceClient,
    agent: &ureq::Agent,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut form = InvoiceForm::new();
    form.open();
    writeln!(output, "Create invoice (blank keeps the current value, :q cancels)")?;

    while form.is_open() {
        let Some(value) = prompt(input, output, "Name", &form.invoice_name)? else {
            form.cancel();
            break;
        };
        if !value.is_empty() {
            form.invoice_name = value;
        }

        let Some(value) = prompt(input, output, "Status", &form.status)? else {
            form.cancel();
            break;
        };
        if !value.is_empty() {
            form.status = value;
        }

        let Some(value) = prompt(input, output, "Method", &form.method)? else {
            form.cancel();
            break;
        };
        if !value.is_empty() {
            form.method = value;
        }

        let Some(value) = prompt(input, output, "Amount", &form.amount.to_string())? else {
            form.cancel();
            break;
        };
        if !value.is_empty() {
            form.amount = parse_amount(&value);
        }

        let Some(payload) = form.submit() else {
            for err in form.field_errors() {
                writeln!(output, "  {}", err.message)?;
            }
            continue;
        };

        let created = client
            .build_create_invoice(&payload)
            .and_then(|req| api::execute(agent, req))
            .and_then(|response| client.parse_create_invoice(response));
        match created {
            Ok(invoice) => {
                writeln!(output, "created invoice {}", invoice.id)?;
                form.submit_succeeded();
            }
            Err(e) => {
                writeln!(output, "create failed: {e}")?;
                form.submit_failed(e.to_string());
            }
        }
    }
    Ok(())
}

/// Prompt for one field, showing the current value in brackets.
///
/// Returns `None` when the user cancels with `:q` or input ends.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label} [{current}]: ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    let line = line.trim();
    if line == ":q" {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Coerce amount input the way the form's number field does: anything that
/// does not parse counts as zero, which then fails validation.
fn parse_amount(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}
