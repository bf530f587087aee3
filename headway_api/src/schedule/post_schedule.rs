use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
};
use headway_optimizer::{
    json::types::JsonScheduleEntry, parsers::arrivals_csv::parse_arrivals,
    problem::arrival_model::ArrivalModel, solver::solver::Solver,
};
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

const INPUT_FIELD: &str = "input";

/// Optimizes the uploaded arrivals and answers with the schedule entries, one per train in
/// departure order.
pub async fn post_schedule_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Vec<JsonScheduleEntry>>, ApiError> {
    let input = read_input_field(&mut multipart).await?;
    let samples = parse_arrivals(&input)?;
    info!("Received {} arrival samples", samples.len());

    let params = state.solver_params.clone();
    let timetable =
        tokio::task::spawn_blocking(move || Solver::new(ArrivalModel::new(samples), params).solve())
            .await??;

    match timetable.average_wait() {
        Some(average_wait) => info!("Average wait = {average_wait:.3} min"),
        None => warn!("Returning an infeasible schedule"),
    }

    Ok(Json(
        timetable
            .schedule
            .iter()
            .map(JsonScheduleEntry::from)
            .collect(),
    ))
}

async fn read_input_field(multipart: &mut Multipart) -> Result<String, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| ApiError::BadRequest(error.to_string()))?
    {
        if field.name() == Some(INPUT_FIELD) {
            return field
                .text()
                .await
                .map_err(|error| ApiError::BadRequest(error.to_string()));
        }
    }

    Err(ApiError::BadRequest(format!(
        "missing multipart field `{INPUT_FIELD}`"
    )))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use headway_optimizer::solver::solver_params::{SolverParams, Threads};
    use tower::ServiceExt;

    use crate::routes::app;

    use super::*;

    const BOUNDARY: &str = "headway-boundary";

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            solver_params: SolverParams {
                generations: 2,
                population_size: 6,
                evaluation_threads: Threads::Single,
                seed: Some(1),
                ..SolverParams::default()
            },
        })
    }

    fn multipart_request(field: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"arrivals.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );

        Request::builder()
            .method("POST")
            .uri("/schedule")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_schedule() {
        let response = app(test_state())
            .oneshot(multipart_request("input", "A,7:00,50\nB,7:20,10"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[0]["TrainNum"], 1);

        let offloaded: u64 = entries
            .iter()
            .map(|entry| entry["U_Offloading"].as_u64().unwrap())
            .sum();
        assert_eq!(offloaded, 60);
    }

    #[tokio::test]
    async fn test_post_schedule_rejects_bad_csv() {
        let response = app(test_state())
            .oneshot(multipart_request("input", "X,7:00,50"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_schedule_requires_input_field() {
        let response = app(test_state())
            .oneshot(multipart_request("file", "A,7:00,50"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
