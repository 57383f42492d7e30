use actix_cors::Cors;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;
use tracing::{error, info};

use crate::application::CsvTable;
use crate::domain::csv::OutputFormat;

pub struct HttpState {
    pub table: Arc<CsvTable>,
    /// Rendering served at `/`
    pub default_format: OutputFormat,
}

fn respond(table: &CsvTable, format: OutputFormat) -> HttpResponse {
    match table.render(format) {
        Ok(body) => HttpResponse::Ok()
            .content_type(format.content_type())
            .body(body),
        Err(e) => {
            error!(error = %e, format = %format, "render failed");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[get("/json")]
async fn render_json(data: web::Data<HttpState>) -> impl Responder {
    respond(&data.table, OutputFormat::Json)
}

#[get("/table")]
async fn render_table(data: web::Data<HttpState>) -> impl Responder {
    respond(&data.table, OutputFormat::Html)
}

#[get("/")]
async fn render_default(data: web::Data<HttpState>) -> impl Responder {
    respond(&data.table, data.default_format)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(render_json)
        .service(render_table)
        .service(render_default);
}

pub fn start_server(
    table: Arc<CsvTable>,
    default_format: OutputFormat,
    host: &str,
    port: u16,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState {
        table,
        default_format,
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Read-only local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run();

    info!(host = %host, port, "serving table over http");
    Ok(server)
}
