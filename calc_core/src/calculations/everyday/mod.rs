//! # Everyday Calculators

pub mod electricity_cost;
pub mod fuel_consumption;
pub mod speed_distance_time;

pub use electricity_cost::{ElectricityCostInput, ElectricityCostResult};
pub use fuel_consumption::{FuelConsumptionInput, FuelConsumptionResult};
pub use speed_distance_time::{SpeedDistanceTimeInput, SpeedDistanceTimeResult};
