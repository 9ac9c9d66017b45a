use axum::{body::Body, extract::Request, Router};
use hyper::StatusCode;
use rtrwh::{
    api::router,
    simulation::SimSignal,
    test::utils::set_app_state,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn test_estimate() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state);

    let body = json!({ "roofArea": "2000", "dwellers": "4", "openSpace": "500" });
    let (status, value) = call(&app, "POST", "/estimate", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["result"]["annualHarvestPotential"], 1445);
    assert_eq!(value["result"]["monthlyDemand"], 18000);
    assert_eq!(value["result"]["costEstimate"]["advanced"], 100000);
    assert_eq!(value["fallbacks"], json!([]));
}

#[tokio::test]
async fn test_estimate_reports_fallbacks() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state);

    let (status, value) = call(&app, "POST", "/estimate", Some(json!({ "dwellers": "0" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["result"]["annualHarvestPotential"], 1445);
    let fields: Vec<&str> = value["fallbacks"].as_array().unwrap().iter().map(|f| f["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["roofArea", "dwellers", "openSpace"]);
    assert_eq!(value["fallbacks"][1]["reason"], "zero");
}

#[tokio::test]
async fn test_session_walk() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state.clone());

    let (_, value) = call(&app, "GET", "/session", None).await;
    assert_eq!(value["view"], "landing");

    let (status, value) = call(&app, "POST", "/session/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["step"], 1);
    assert_eq!(value["stepLabel"], "Personal Info");

    let form = json!({
        "personalInfo": { "name": "Meera" },
        "locationInfo": { "city": "Bengaluru", "state": "Karnataka" },
        "propertyInfo": { "roofArea": "180", "dwellers": "3", "openSpace": "100" }
    });
    let (status, _) = call(&app, "PUT", "/session/form", Some(form)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, value) = call(&app, "POST", "/session/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["view"], "results");
    assert_eq!(value["report"]["applicant"], "Meera");
    assert_eq!(value["report"]["estimation"]["feasibilityScore"], 35);
    assert_eq!(value["report"]["estimation"]["feasibilityStatus"], "Fair");
    assert_eq!(value["report"]["localConditions"]["aquiferType"], "Alluvial");
}

#[tokio::test]
async fn test_session_rejects_bad_events() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state);

    let (status, value) = call(&app, "POST", "/session/next", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(value["error"].as_str().unwrap().contains("landing"));

    let (status, _) = call(&app, "POST", "/session/jump", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_simulation_setup() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state);

    let (_, value) = call(&app, "GET", "/simulation", None).await;
    assert_eq!(value["phase"], "selection");
    assert_eq!(value["flow"], Value::Null);

    let (status, value) = call(&app, "POST", "/simulation/property/township", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["phase"], "input");

    let (status, value) =
        call(&app, "POST", "/simulation/dimensions", Some(json!({ "length": "0", "location": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = value["fields"].as_array().unwrap().iter().map(|f| f["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["length", "location"]);
    assert_eq!(value["fields"][0]["message"], "Length must be greater than 0");

    let body = json!({ "length": "30", "width": "25", "height": "4", "location": "Hyderabad" });
    let (status, value) = call(&app, "POST", "/simulation/dimensions", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["phase"], "simulation");
    assert_eq!(value["stats"]["potentialCollection"], 53000);
    assert_eq!(value["flow"]["monthlyCollection"][6], 11000);
}

#[tokio::test]
async fn test_simulation_commands_are_queued() {
    let (app_state, mut rx) = set_app_state();
    let app = router(app_state);

    let (status, _) = call(&app, "POST", "/simulation/toggle", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let (status, _) = call(&app, "POST", "/simulation/reset", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(rx.recv().await, Some(SimSignal::Toggle));
    assert_eq!(rx.recv().await, Some(SimSignal::Reset));

    let (status, _) = call(&app, "POST", "/simulation/rewind", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_property_selection_only_once() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state);

    call(&app, "POST", "/simulation/property/individual", None).await;
    let (status, _) = call(&app, "POST", "/simulation/property/township", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = call(&app, "POST", "/simulation/property/castle", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exit_from_analysis() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state.clone());

    call(&app, "POST", "/simulation/property/individual", None).await;
    call(&app, "POST", "/simulation/dimensions", Some(json!({ "location": "Pune" }))).await;
    app_state.simulation.write().await.handle_signal(SimSignal::Analyze).unwrap();

    let (status, value) = call(&app, "POST", "/simulation/exit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["phase"], "selection");
    assert_eq!(value["data"]["propertyKind"], Value::Null);
    assert_eq!(value["data"]["location"], "");

    let (status, value) = call(&app, "POST", "/simulation/property/township", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["phase"], "input");
}

#[tokio::test]
async fn test_back_to_form_from_results() {
    let (app_state, _rx) = set_app_state();
    let app = router(app_state);

    call(&app, "POST", "/session/start", None).await;
    call(&app, "POST", "/session/submit", None).await;
    let (status, value) = call(&app, "POST", "/session/form", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["view"], "assessment");
    assert_eq!(value["step"], 1);
}
