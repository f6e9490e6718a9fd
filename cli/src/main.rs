//! Terminal front-end for the invoice API.
//!
//! Drives `invoice-core` the way any host does: build a request, execute it
//! over HTTP, hand the response back for parsing. The interactive loop and
//! the create dialog live in [`ui`], the ureq executor in [`api`].

mod api;
mod ui;

use invoice_core::InvoiceClient;

fn main() {
    // Matches the mock server's default port.
    let base_url = std::env::var("INVOICE_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = InvoiceClient::new(&base_url);

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    if let Err(e) = ui::run(&client, &mut input, &mut output) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
