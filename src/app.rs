use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{Auth, Settings};
use crate::handles::*;
use crate::middlewares::{TokenState, auth};
use crate::services::{
    AuthService, AutomationService, DeviceService, HouseService, RoomService, ScenarioService,
    SecurityService, TokenService, UserService,
};
use crate::store::{Store, bootstrap_store};

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let store = bootstrap_store(&settings.database).await;

    create_app_with_store(store, settings.auth.clone())
}

/// Assembles the router over an already-chosen storage backend. Tests use
/// this directly to pin the backend.
pub fn create_app_with_store(store: Arc<dyn Store>, auth_config: Auth) -> Router {
    let auth_service = Arc::new(AuthService::new());
    let token_service = Arc::new(TokenService::new(auth_config));

    let user_service = Arc::new(UserService::new(
        store.clone(),
        auth_service.clone(),
        token_service.clone(),
    ));
    let house_service = Arc::new(HouseService::new(store.clone()));
    let room_service = Arc::new(RoomService::new(store.clone()));
    let device_service = Arc::new(DeviceService::new(store.clone()));
    let automation_service = Arc::new(AutomationService::new(store.clone()));
    let scenario_service = Arc::new(ScenarioService::new(store.clone()));
    let security_service = Arc::new(SecurityService::new(store.clone()));

    let token_state = TokenState {
        token_service: token_service.clone(),
        store: store.clone(),
    };

    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/me",
            get(get_me).route_layer(middleware::from_fn_with_state(token_state.clone(), auth)),
        )
        .with_state(AuthState { user_service });

    let houses = Router::new()
        .route("/", get(get_houses).post(add_house))
        .route(
            "/:house_id",
            get(get_house).put(update_house).delete(remove_house),
        )
        .route("/:house_id/rooms", get(get_rooms).post(add_room_to_house))
        .route_layer(middleware::from_fn_with_state(token_state.clone(), auth))
        .with_state(HouseState {
            house_service,
            room_service: room_service.clone(),
        });

    let rooms = Router::new()
        .route(
            "/:room_id",
            get(get_room).put(update_room).delete(remove_room),
        )
        .route("/:room_id/temperature", put(set_room_temperature))
        .route("/:room_id/lighting", put(control_room_lighting))
        .route(
            "/:room_id/devices",
            get(get_devices).post(add_device_to_room),
        )
        .route_layer(middleware::from_fn_with_state(token_state.clone(), auth))
        .with_state(RoomState {
            room_service,
            device_service: device_service.clone(),
        });

    let devices = Router::new()
        .route("/available", get(get_available_devices))
        .route(
            "/:device_id",
            get(get_device).put(update_device).delete(remove_device),
        )
        .route("/:device_id/category", put(categorize_device))
        .route("/:device_id/status", get(get_device_status))
        .route("/:device_id/action", post(control_device))
        .route_layer(middleware::from_fn_with_state(token_state.clone(), auth))
        .with_state(DeviceState { device_service });

    let automations = Router::new()
        .route("/", get(get_automations).post(create_automation))
        .route(
            "/:automation_id",
            get(get_automation)
                .put(update_automation)
                .delete(delete_automation),
        )
        .route_layer(middleware::from_fn_with_state(token_state.clone(), auth))
        .with_state(AutomationState { automation_service });

    let scenarios = Router::new()
        .route("/", get(get_scenarios).post(create_scenario))
        .route(
            "/:scenario_id",
            get(get_scenario)
                .put(update_scenario)
                .delete(delete_scenario),
        )
        .route_layer(middleware::from_fn_with_state(token_state.clone(), auth))
        .with_state(ScenarioState { scenario_service });

    let security = Router::new()
        .route("/:device_id/state", put(control_security_system))
        .route_layer(middleware::from_fn_with_state(token_state.clone(), auth))
        .with_state(SecurityState { security_service });

    let api = Router::new()
        .nest("/auth", auth_routes)
        .nest("/houses", houses)
        .nest("/rooms", rooms)
        .nest("/devices", devices)
        .nest("/automations", automations)
        .nest("/scenarios", scenarios)
        .nest("/security", security);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
