use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub status: String,
    pub method: String,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct CreateInvoice {
    pub name: String,
    pub status: String,
    pub method: String,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct UpdateInvoice {
    pub name: Option<String>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub amount: Option<f64>,
}

pub type Db = Arc<RwLock<HashMap<String, Invoice>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_invoices(State(db): State<Db>) -> Json<Vec<Invoice>> {
    let invoices = db.read().await;
    Json(invoices.values().cloned().collect())
}

async fn create_invoice(
    State(db): State<Db>,
    Json(input): Json<CreateInvoice>,
) -> (StatusCode, Json<Invoice>) {
    let invoice = Invoice {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        status: input.status,
        method: input.method,
        amount: input.amount,
    };
    db.write().await.insert(invoice.id.clone(), invoice.clone());
    tracing::debug!(id = %invoice.id, "invoice created");
    (StatusCode::CREATED, Json(invoice))
}

async fn get_invoice(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, StatusCode> {
    let invoices = db.read().await;
    invoices.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_invoice(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateInvoice>,
) -> Result<Json<Invoice>, StatusCode> {
    let mut invoices = db.write().await;
    let invoice = invoices.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        invoice.name = name;
    }
    if let Some(status) = input.status {
        invoice.status = status;
    }
    if let Some(method) = input.method {
        invoice.method = method;
    }
    if let Some(amount) = input.amount {
        invoice.amount = amount;
    }
    Ok(Json(invoice.clone()))
}

async fn delete_invoice(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut invoices = db.write().await;
    match invoices.remove(&id) {
        Some(_) => {
            tracing::debug!(%id, "invoice deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}
