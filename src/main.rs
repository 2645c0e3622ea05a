mod models;
mod handlers;
mod storage;

use axum::{routing::{post, Router}};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

// share the output path with the handler
#[derive(Clone)]
pub struct AppState {
    pub output_path: PathBuf
}

pub fn app(state: AppState) -> Router {

    Router::new()
        .route("/v1/logs", post(handlers::ingest_logs))
        .with_state(state) // share the app state

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let output_path = std::env::var("LOG_OUTPUT_FILE")
        .unwrap_or_else(|_| "ingested_logs.jsonl".to_string());

    let host = std::env::var("INGESTION_HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string());

    let port: u16 = std::env::var("INGESTION_PORT")
        .unwrap_or_else(|_| "8093".to_string())
        .parse()
        .expect("INGESTION_PORT must be a valid port number");

    let state = AppState {
        output_path: PathBuf::from(&output_path)
    };

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("INGESTION_HOST must be a valid bind address");
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind listener address");

    println!("========================================");
    println!("Log Ingestion Test Server");
    println!("========================================");
    println!("Listening on: {}", listener.local_addr()
        .expect("Failed to get local address"));
    println!("Log file: {}", output_path);
    println!("========================================");

    axum::serve(listener, app(state)).await
        .expect("Server failed");

}
