use crate::models::{
    AutomationTable, AvailableDeviceTable, DeviceTable, HouseTable, RoomTable, ScenarioTable,
    Table, UserTable,
};

/// Holds the table set in dependency order: parents first on create,
/// reversed on dispose.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(tables: Vec<Box<dyn Table>>) -> Self {
        Self { tables }
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(UserTable),
            Box::new(HouseTable),
            Box::new(RoomTable),
            Box::new(DeviceTable),
            Box::new(AvailableDeviceTable),
            Box::new(AutomationTable),
            Box::new(ScenarioTable),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_statements_cover_all_tables() {
        let manager = SchemaManager::default();
        let create = manager.create_schema();

        assert_eq!(create.len(), 7);
        assert!(create[0].contains("users"));
        assert!(create.iter().any(|stmt| stmt.contains("available_devices")));
    }

    #[test]
    fn test_dispose_reverses_creation_order() {
        let manager = SchemaManager::default();
        let dispose = manager.dispose_schema();

        assert!(dispose.first().unwrap().contains("scenarios"));
        assert!(dispose.last().unwrap().contains("users"));
    }
}
