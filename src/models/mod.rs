mod automation;
mod device;
mod house;
mod room;
mod scenario;
mod user;

pub use automation::{Automation, AutomationTable, Trigger, TriggerKind};
pub use device::{
    AvailableDevice, AvailableDeviceTable, Device, DeviceCommand, DeviceTable, DeviceType,
};
pub use house::{House, HouseTable};
pub use room::{Room, RoomSettings, RoomTable};
pub use scenario::{Scenario, ScenarioTable};
pub use user::{User, UserTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;
}
