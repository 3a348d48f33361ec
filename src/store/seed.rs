use serde_json::json;
use time::OffsetDateTime;

use crate::models::{
    Automation, AvailableDevice, Device, DeviceCommand, DeviceType, House, Room, RoomSettings,
    Scenario, Trigger, TriggerKind, User,
};
use crate::services::AuthService;

use super::memory::MemData;

/// Builds the deterministic fixture set loaded whenever the process runs
/// without a persistent store.
pub fn demo_data() -> MemData {
    let now = OffsetDateTime::now_utc();
    // Fixture-only hashing; real registration goes through UserService.
    let password = AuthService::new()
        .hash("password123")
        .expect("hash fixture password");

    let users = vec![User {
        id: "user-1".to_string(),
        name: "Demo User".to_string(),
        email: "user@example.com".to_string(),
        password,
        houses: vec!["house-1".to_string()],
        created_at: now,
    }];

    let houses = vec![House {
        id: "house-1".to_string(),
        name: "Demo User's Home".to_string(),
        owner: "user-1".to_string(),
        rooms: vec!["room-1".to_string(), "room-2".to_string()],
        created_at: now,
    }];

    let rooms = vec![
        Room {
            id: "room-1".to_string(),
            name: "Living Room".to_string(),
            house: "house-1".to_string(),
            devices: vec![
                "device-1".to_string(),
                "device-2".to_string(),
                "device-4".to_string(),
            ],
            settings: RoomSettings {
                temperature: 21.0,
                lighting: 80,
            },
            created_at: now,
        },
        Room {
            id: "room-2".to_string(),
            name: "Bedroom".to_string(),
            house: "house-1".to_string(),
            devices: vec!["device-3".to_string()],
            settings: RoomSettings {
                temperature: 19.0,
                lighting: 0,
            },
            created_at: now,
        },
    ];

    let devices = vec![
        Device {
            id: "device-1".to_string(),
            name: "Living Room Lamp".to_string(),
            room: "room-1".to_string(),
            device_type: DeviceType::Light,
            category: "lighting".to_string(),
            status: json!({ "isOn": true, "brightness": 80 }),
            paired_from: None,
            created_at: now,
        },
        Device {
            id: "device-2".to_string(),
            name: "Main Thermostat".to_string(),
            room: "room-1".to_string(),
            device_type: DeviceType::Thermostat,
            category: "climate".to_string(),
            status: json!({ "isOn": true, "temperature": 21 }),
            paired_from: None,
            created_at: now,
        },
        Device {
            id: "device-3".to_string(),
            name: "Bedroom Light".to_string(),
            room: "room-2".to_string(),
            device_type: DeviceType::Light,
            category: "lighting".to_string(),
            status: json!({ "isOn": false, "brightness": 0 }),
            paired_from: None,
            created_at: now,
        },
        Device {
            id: "device-4".to_string(),
            name: "Front Door Lock".to_string(),
            room: "room-1".to_string(),
            device_type: DeviceType::Security,
            category: "security".to_string(),
            status: json!({ "isOn": true, "isLocked": true }),
            paired_from: None,
            created_at: now,
        },
    ];

    let available_devices = vec![
        AvailableDevice {
            id: "available-device-1".to_string(),
            owner: "user-1".to_string(),
            name: "Philips Hue White Smart".to_string(),
            device_type: DeviceType::Light,
            category: "lighting".to_string(),
            description: "Smart white light bulb, E27, 800 lumen".to_string(),
            status: json!({ "isOn": false, "brightness": 0 }),
        },
        AvailableDevice {
            id: "available-device-2".to_string(),
            owner: "user-1".to_string(),
            name: "Smart Plug Mini".to_string(),
            device_type: DeviceType::Outlet,
            category: "power".to_string(),
            description: "Compact smart plug with energy monitoring".to_string(),
            status: json!({ "isOn": false }),
        },
        AvailableDevice {
            id: "available-device-3".to_string(),
            owner: "user-1".to_string(),
            name: "Motion Sensor".to_string(),
            device_type: DeviceType::Sensor,
            category: "security".to_string(),
            description: "PIR motion sensor with Zigbee".to_string(),
            status: json!({ "motionDetected": false }),
        },
    ];

    let automations = vec![Automation {
        id: "auto-1".to_string(),
        name: "Evening Light Routine".to_string(),
        owner: "user-1".to_string(),
        trigger: Trigger {
            kind: TriggerKind::Time,
            value: "7:00 PM Daily".to_string(),
        },
        action: DeviceCommand {
            device_id: "device-1".to_string(),
            command: json!({ "isOn": true, "brightness": 70 }),
        },
        is_enabled: true,
        created_at: now,
    }];

    let scenarios = vec![Scenario {
        id: "scene-1".to_string(),
        name: "Morning Wake-Up".to_string(),
        owner: "user-1".to_string(),
        actions: vec![
            DeviceCommand {
                device_id: "device-3".to_string(),
                command: json!({ "isOn": true, "brightness": 50 }),
            },
            DeviceCommand {
                device_id: "device-2".to_string(),
                command: json!({ "temperature": 22 }),
            },
        ],
        created_at: now,
    }];

    MemData {
        users,
        houses,
        rooms,
        devices,
        available_devices,
        automations,
        scenarios,
    }
}
