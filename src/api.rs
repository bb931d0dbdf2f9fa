use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::{CatalogEntry, StationCatalog};
use crate::error::WeatherError;
use crate::models::CleanedReading;
use crate::query::QueryEngine;

#[derive(Clone)]
pub struct AppState {
    pub catalog: StationCatalog,
    pub engine: QueryEngine,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// One reading for one station on one date. Station and date echo the
/// request as given; `temperature` is null when no valid reading exists.
#[derive(Serialize)]
pub struct DailyTemperature {
    pub station: String,
    pub date: String,
    pub temperature: Option<f64>,
}

/// One element of a full or annual series.
#[derive(Serialize)]
pub struct SeriesEntry {
    pub date: NaiveDate,
    pub temperature: f64,
}

impl From<CleanedReading> for SeriesEntry {
    fn from(reading: CleanedReading) -> Self {
        Self {
            date: reading.date,
            temperature: reading.temperature,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/annual/{station}/{year}", get(annual_series))
        .route("/{station}", get(full_series))
        .route("/{station}/{date}", get(daily_temperature));

    Router::new()
        .route("/", get(home))
        .nest("/api/v1", api_routes)
        .with_state(state)
}

/// Map a core error onto an HTTP status, logging it at a matching level.
fn handle_error(err: WeatherError) -> StatusCode {
    let status = match err {
        WeatherError::InvalidStationId(_) | WeatherError::InvalidDate(_) => {
            StatusCode::BAD_REQUEST
        }
        WeatherError::StationNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("{err}");
    } else {
        warn!("{err}");
    }
    status
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[instrument(skip(state))]
async fn home(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let entries = state.catalog.list_stations().map_err(handle_error)?;
    info!("Rendered station listing with {} stations", entries.len());
    Ok(Html(render_station_page(&entries)))
}

#[instrument(skip(state))]
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogEntry>>, StatusCode> {
    let entries = state.catalog.list_stations().map_err(handle_error)?;
    info!("Retrieved {} catalog entries", entries.len());
    Ok(Json(entries))
}

#[instrument(skip(state), fields(station = %station, date = %date))]
async fn daily_temperature(
    State(state): State<AppState>,
    Path((station, date)): Path<(String, String)>,
) -> Result<Json<DailyTemperature>, StatusCode> {
    debug!("Fetching temperature for station {station} on {date}");
    let reading = state
        .engine
        .temperature_on(&station, &date)
        .map_err(handle_error)?;

    if reading.is_none() {
        info!("No reading for station {station} on {date}");
    }

    Ok(Json(DailyTemperature {
        temperature: reading.map(|r| r.temperature),
        station,
        date,
    }))
}

#[instrument(skip(state), fields(station = %station))]
async fn full_series(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Json<Vec<SeriesEntry>>, StatusCode> {
    debug!("Fetching all readings for station {station}");
    let records = state.engine.all_records(&station).map_err(handle_error)?;

    info!("Retrieved {} readings for station {station}", records.len());
    Ok(Json(records.into_iter().map(SeriesEntry::from).collect()))
}

#[instrument(skip(state), fields(station = %station, year = %year))]
async fn annual_series(
    State(state): State<AppState>,
    Path((station, year)): Path<(String, String)>,
) -> Result<Json<Vec<SeriesEntry>>, StatusCode> {
    debug!("Fetching year {year} readings for station {station}");
    let records = state
        .engine
        .annual_records(&station, &year)
        .map_err(handle_error)?;

    info!(
        "Retrieved {} readings for station {station} in year {year}",
        records.len()
    );
    Ok(Json(records.into_iter().map(SeriesEntry::from).collect()))
}

fn render_station_page(entries: &[CatalogEntry]) -> String {
    let mut rows = String::new();
    for entry in entries {
        match &entry.metadata {
            Some(m) => {
                let elevation = m.elevation.map_or_else(|| "-".to_string(), |e| e.to_string());
                rows.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.4}</td><td>{:.4}</td><td>{}</td></tr>\n",
                    entry.staid, m.name, m.country, m.latitude, m.longitude, elevation
                ));
            }
            None => {
                rows.push_str(&format!(
                    "<tr><td>{}</td><td colspan=\"5\">no metadata</td></tr>\n",
                    entry.staid
                ));
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Weather stations</title></head>\n<body>\n\
         <h1>Weather stations</h1>\n\
         <table border=\"1\">\n\
         <tr><th>STAID</th><th>Name</th><th>Country</th><th>Latitude</th>\
         <th>Longitude</th><th>Elevation (m)</th></tr>\n\
         {rows}</table>\n</body>\n</html>\n"
    )
}
