//! End-to-end tests for the analytics stack
//!
//! Drives whole dashboard pages against a mock backend using only the
//! facade API.

use analytics_facade::{
    AnalyticsConfig, ForecastQuery, ModelHealth, PanelLine, Resolution, RiskLevel,
};
use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;

fn config_for(server: &mockito::Server) -> AnalyticsConfig {
    AnalyticsConfig {
        base_url: server.url(),
        ..Default::default()
    }
}

#[tokio::test]
async fn e2e_insights_page() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "comparison": [
            {"region": "East US", "cpu_before": 10.0, "cpu_after": 20.0, "storage_before": 100.0, "storage_after": 110.0},
            {"region": "East US", "cpu_before": 30.0, "cpu_after": 40.0, "storage_before": 300.0, "storage_after": 310.0}
        ],
        "top_regions_by_utilization": [{"region": "East US", "avg_utilization": 0.5}],
        "peak_usage_days": [{"date": "2024-01-15 00:00:00", "total_cpu": 980.0}],
        "monthly_cpu_trend": [{"month_num": "2024-01", "avg_cpu": 61.234}],
        "correlations": {
            "cpu": {"cpu": 1.0, "mem": 0.9, "usage_cpu": 0.4},
            "mem": {"cpu": 0.9, "mem": 1.0, "usage_cpu": 0.1},
            "usage_cpu": {"cpu": 0.4, "mem": 0.1, "usage_cpu": 1.0}
        },
        "chart_data": {
            "day_of_week_stats": [{"day_of_week": 1, "min": 10.0, "median": 15.0, "max": 20.0}],
            "seasonality": [
                {"month": "2024-01-01", "cpu_usage": 50.0},
                {"month": "2024-02-01", "cpu_usage": 70.0},
                {"month": "2024-03-01", "cpu_usage": 40.0}
            ],
            "time_series": [
                {"date": "2024-01-01", "region": "East US", "usage_cpu": 10},
                {"date": "2024-01-01", "region": "West US", "usage_cpu": null},
                {"date": "2024-01-02", "region": "West US", "usage_cpu": 5}
            ]
        },
        "backtest_summary": [{"model": "LSTM", "error": "file not found"}]
    });
    let mock = server
        .mock("GET", "/api/insights")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let session = config_for(&server).session().unwrap();
    assert_eq!(session.refresh_insights().await, Resolution::Applied);
    mock.assert();

    let state = session.insights().await;
    let view = state.as_loaded().unwrap();

    assert_eq!(view.heatmap.features, vec!["cpu", "mem", "usage_cpu"]);
    assert_eq!(view.heatmap.strong_pairs.len(), 1);
    assert_eq!(
        view.heatmap.summary,
        "Strong correlations detected between: cpu ↔ mem (0.90). These relationships may indicate redundancy or strong dependency between features."
    );

    let factors: Vec<&str> = view.impact.iter().map(|s| s.factor.as_str()).collect();
    assert_eq!(factors, vec!["cpu", "mem"]);
    assert_eq!(view.impact[0].score, Some(0.4));

    assert_eq!(view.day_of_week[0].day, "Mon");
    assert_eq!(view.comparison[0].cpu_before, 20.0);

    let summary = view.seasonality_summary.as_ref().unwrap();
    assert_eq!(summary.peak.month, "Feb");
    assert_eq!(summary.lowest.month, "Mar");

    assert_eq!(view.overlay.categories, vec!["East US", "West US"]);
    assert_eq!(view.overlay.points.len(), 2);

    assert_eq!(view.top_regions, vec![PanelLine::new("East US", "50.00%")]);
    assert_eq!(view.peak_days, vec![PanelLine::new("2024-01-15", "980.00")]);
    assert_eq!(view.monthly_trend, vec![PanelLine::new("2024-01", "61.23")]);
    assert_eq!(view.backtest[0].value, "error: file not found");
}

#[tokio::test]
async fn e2e_insights_page_survives_malformed_rows() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "correlations": {
            "cpu": {"cpu": 1.0, "mem": 0.9},
            "mem": {"cpu": 0.9, "mem": 1.0}
        },
        "peak_usage_days": [
            {"date": "2024-01-15", "total_cpu": 980.0},
            {"date": "2024-01-16", "total_cpu": "lots"}
        ],
        "chart_data": {
            "day_of_week_stats": [
                {"day_of_week": 2, "min": 1.0, "median": 2.0, "max": 3.0},
                {"day_of_week": 3, "min": "?", "median": 2.0, "max": 3.0}
            ],
            "seasonality": [
                {"month": "2024-01-01", "cpu_usage": 50.0},
                {"month": "n/a", "cpu_usage": 99.0},
                {"month": "2024-02-01", "cpu_usage": 70.0}
            ]
        }
    });
    let mock = server
        .mock("GET", "/api/insights")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let session = config_for(&server).session().unwrap();
    assert_eq!(session.refresh_insights().await, Resolution::Applied);
    mock.assert();

    let state = session.insights().await;
    let view = state.as_loaded().unwrap();
    assert_eq!(view.heatmap.strong_pairs.len(), 1);
    assert_eq!(view.peak_days, vec![PanelLine::new("2024-01-15", "980.00")]);
    assert_eq!(view.day_of_week.len(), 1);
    assert_eq!(view.day_of_week[0].day, "Tue");

    let months: Vec<&str> = view.seasonality.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, vec!["Jan", "Feb"]);
    let summary = view.seasonality_summary.as_ref().unwrap();
    assert_eq!(summary.peak.month, "Feb");
}

#[tokio::test]
async fn e2e_capacity_page() {
    let mut server = mockito::Server::new_async().await;
    let forecast = server
        .mock("GET", "/api/forecast")
        .match_query(Matcher::UrlEncoded("region".into(), "East US".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "forecast": [
                    {"date": "2024-01-02", "actual": null, "predicted": 110.0, "lower_bound": 100.0, "upper_bound": 120.0},
                    {"date": "2024-01-01", "actual": 95.0, "predicted": 96.0},
                    {"date": "not a date", "actual": 1.0}
                ],
                "metrics": {"MAE": 1.2}
            })
            .to_string(),
        )
        .create();
    let capacity = server
        .mock("GET", "/api/capacity-adjustment")
        .match_query(Matcher::UrlEncoded("model".into(), "xgboost".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "region": "East US",
                "service": "VM",
                "forecast_demand": 130.0,
                "available_capacity": 100.0,
                "recommended_adjustment": "+30 units"
            })
            .to_string(),
        )
        .create();

    let session = config_for(&server).session().unwrap();
    let resolution = session.refresh_capacity(ForecastQuery::default()).await;
    assert!(resolution.is_applied());
    forecast.assert();
    capacity.assert();

    let state = session.capacity().await;
    let panel = state.as_loaded().unwrap();
    assert_eq!(panel.capacity.risk, RiskLevel::Shortage);
    assert_eq!(panel.capacity.recommendation, "East US VM → +30 units");
    assert_eq!(panel.bands.historical.len(), 1);
    assert_eq!(
        panel.bands.boundary(),
        NaiveDate::from_ymd_opt(2024, 1, 2)
    );
}

#[tokio::test]
async fn e2e_monitoring_and_models() {
    let mut server = mockito::Server::new_async().await;
    let monitoring = server
        .mock("GET", "/api/monitoring")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "models": ["xgboost", "arima"],
                "metrics": {
                    "xgboost": {"MAPE": "8.5%", "RMSE": 3.1},
                    "arima": {"MAPE": 31.0, "RMSE": 9.4}
                },
                "error_drift": true,
                "drift_reason": "MAPE rose above 30%",
                "retraining_needed": true,
                "last_train_date": ""
            })
            .to_string(),
        )
        .create();
    let comparison_body = json!({
        "best_model": "xgboost",
        "metrics": [
            {"model": "xgboost", "type": "ml", "MAE": 1.0, "RMSE": 2.0, "MAPE": 5.0, "Bias": 0.1},
            {"model": "arima", "type": "statistical"}
        ]
    })
    .to_string();
    let comparison = server
        .mock("GET", "/api/model-comparison")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(comparison_body)
        .expect(1)
        .create();
    let train = server
        .mock("POST", "/api/model-comparison/train-all")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"message": "All models trained"}).to_string())
        .create();

    let session = config_for(&server).session().unwrap();

    assert!(session.refresh_monitoring().await.is_applied());
    monitoring.assert();
    let state = session.monitoring().await;
    let view = state.as_loaded().unwrap();
    assert_eq!(view.rows[0].health, ModelHealth::Stable);
    assert_eq!(view.rows[1].health, ModelHealth::RetrainNeeded);
    assert!(view.drift_detected);
    assert_eq!(view.last_retrain, "Unknown");

    let resolution = session.train_all_models().await.unwrap();
    assert!(resolution.is_applied());
    train.assert();
    comparison.assert();

    let state = session.models().await;
    let models = state.as_loaded().unwrap();
    assert_eq!(models.best_model.as_deref(), Some("xgboost"));
    assert!(models.rows[0].is_best);
    assert!(!models.rows[1].is_best);
    assert_eq!(models.rows[1].mae, "N/A");
}

#[tokio::test]
async fn e2e_failed_refresh_keeps_last_good_view() {
    let mut server = mockito::Server::new_async().await;
    let good = server
        .mock("GET", "/api/model-comparison")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"best_model": "arima", "metrics": [{"model": "arima"}]}).to_string())
        .create();

    let session = config_for(&server).session().unwrap();
    assert!(session.refresh_models().await.is_applied());
    good.assert();
    good.remove();

    server
        .mock("GET", "/api/model-comparison")
        .with_status(503)
        .with_body("unavailable")
        .create();

    match session.refresh_models().await {
        Resolution::Failed { kept_previous, .. } => assert!(kept_previous),
        other => panic!("expected failure, got {:?}", other),
    }
    let state = session.models().await;
    assert_eq!(state.as_loaded().unwrap().best_model.as_deref(), Some("arima"));
}
