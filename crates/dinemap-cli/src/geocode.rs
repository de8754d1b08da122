//! `geocode` handler.
//!
//! Records that already carry coordinates are reported as-is; the rest are
//! resolved through the geocoder. One failed lookup never stops the batch.

use std::sync::Arc;
use std::time::Duration;

use dinemap_core::{browse, AppConfig, Record};
use dinemap_geocode::{
    GeocodeCache, GeocodeError, GeocodeRequest, Geocoder, NominatimClient, Resolution,
};

use crate::browse::FilterArgs;

pub(crate) fn build_geocoder(config: &AppConfig) -> anyhow::Result<Geocoder> {
    let client = NominatimClient::with_base_url(
        &config.geocoder_user_agent,
        config.geocoder_timeout_secs,
        &config.geocoder_base_url,
    )?;
    Ok(Geocoder::new(client, Arc::new(GeocodeCache::new()))
        .with_region_suffix(config.geocoder_region_suffix.clone())
        .with_min_interval(Duration::from_millis(config.geocoder_min_interval_ms)))
}

pub(crate) async fn run_geocode(
    records: &[Record],
    filters: &FilterArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let result = browse(records, &filters.filter_state(), filters.sort);
    let geocoder = build_geocoder(config)?;

    let mut requests = Vec::new();
    for record in &result.records {
        match record.coordinates() {
            Some(point) => println!("{}\t{}, {}\t(stored)", record.name, point.lat, point.lng),
            None => requests.push(GeocodeRequest {
                id: record.id.clone(),
                name: record.name.clone(),
                hints: record.location_hints(),
            }),
        }
    }

    let outcomes = geocoder
        .resolve_all(requests, config.geocoder_max_concurrent)
        .await;

    let mut failed = 0usize;
    for (request, outcome) in &outcomes {
        if let Err(e) = outcome {
            failed += 1;
            tracing::warn!(id = %request.id, name = %request.name, error = %e, "geocoding failed");
        }
        println!("{}", format_outcome(request, outcome));
    }

    tracing::info!(
        requested = outcomes.len(),
        failed,
        cached = geocoder.cache().len(),
        "geocoding finished"
    );
    Ok(())
}

fn format_outcome(request: &GeocodeRequest, outcome: &Result<Resolution, GeocodeError>) -> String {
    match outcome {
        Ok(Resolution::Found(c)) => format!("{}\t{}, {}", request.name, c.lat, c.lng),
        Ok(Resolution::NotFound) => format!("{}\tnot found", request.name),
        Err(_) => format!("{}\tlookup failed", request.name),
    }
}
