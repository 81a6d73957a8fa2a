use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};

use crate::aggregate::{CompositeSchedule, StaffDirectory, StaffProfile};

/// Read-only state: the structures are built once before the server starts
/// and served as-is.
pub struct AppState {
    pub directory: StaffDirectory,
    pub composite: CompositeSchedule,
}

// Staff directory endpoint, profiles in numeric id order
async fn get_staff(state: web::Data<AppState>) -> Result<HttpResponse> {
    let profiles: Vec<&StaffProfile> = state.directory.ordered();
    Ok(HttpResponse::Ok().json(profiles))
}

// Full composite schedule endpoint
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(&state.composite))
}

// Single-date endpoint
async fn get_schedule_for_date(
    date: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state.composite.get(date.as_str()) {
        Some(day) => Ok(HttpResponse::Ok().json(day)),
        None => Ok(HttpResponse::NotFound()
            .json(serde_json::json!({"error": format!("No schedule for date '{}'", date)}))),
    }
}

async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let dates: Vec<&String> = state.composite.keys().collect();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "dates": dates,
        "endpoints": ["/api/staff", "/api/schedule", "/api/schedule/{date}"],
    })))
}

pub async fn start_server(
    port: u16,
    directory: StaffDirectory,
    composite: CompositeSchedule,
) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        directory,
        composite,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(index))
            .route("/api/staff", web::get().to(get_staff))
            .route("/api/schedule", web::get().to(get_schedule))
            .service(web::resource("/api/schedule/{date}").route(web::get().to(get_schedule_for_date)))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
