mod auth_service;
mod automation_service;
mod device_service;
mod house_service;
mod room_service;
mod scenario_service;
mod security_service;
mod token_service;
mod user_service;

pub use auth_service::AuthService;
pub use automation_service::{AutomationService, CreateAutomationRequest, UpdateAutomationRequest};
pub use device_service::{
    AddDeviceRequest, DeviceService, DeviceStatusView, UpdateDeviceRequest,
};
pub use house_service::{HouseService, UpdateHouseRequest};
pub use room_service::{LightingRequest, RoomService, UpdateRoomRequest};
pub use scenario_service::{CreateScenarioRequest, ScenarioService, UpdateScenarioRequest};
pub use security_service::SecurityService;
pub use token_service::{TokenClaims, TokenService};
pub use user_service::{AuthPayload, LoginRequest, RegisterRequest, UserService};

use serde::Serialize;

/// Returned by every delete operation.
#[derive(Debug, Clone, Serialize)]
pub struct Removed {
    pub id: String,
    pub status: &'static str,
}

impl Removed {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: "removed",
        }
    }
}
