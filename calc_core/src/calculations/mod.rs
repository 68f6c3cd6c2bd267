//! # Calculators
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, with `validate()`)
//! - `*Result` - Calculation results, including a human-readable `formula`
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! [`CalculationRequest`] wraps every input type in one enum tagged by the
//! calculator slug, so a single JSON body can name and parameterise any
//! calculator:
//!
//! ```rust
//! use calc_core::calculations::run_calculator;
//! use serde_json::json;
//!
//! let result = run_calculator("bmi", json!({ "weight": 70, "height": 175 })).unwrap();
//! assert_eq!(result["bmi"], 22.9);
//! assert_eq!(result["category"], "normal");
//! ```
//!
//! ## Categories
//!
//! - [`math`] - Geometry, percentages, statistics, equations
//! - [`converters`] - Unit conversion
//! - [`health`] - Body metrics, energy, pregnancy
//! - [`finance`] - Loans, interest, taxes
//! - [`datetime`] - Calendar arithmetic
//! - [`everyday`] - Fuel, travel, electricity

pub mod converters;
pub mod datetime;
pub mod everyday;
pub mod finance;
pub mod health;
pub mod math;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::CalculatorId;
use crate::errors::{CalcError, CalcResult};
use crate::validation::ensure_finite;

use converters::ConversionInput;

/// Enum wrapper for all calculator inputs, tagged by slug.
///
/// ```json
/// { "calculator": "loan", "principal": 100000, "annual_rate": 12, "term_months": 12 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationRequest {
    // Math
    Area(math::AreaInput),
    Volume(math::VolumeInput),
    Circle(math::CircleInput),
    Percent(math::PercentInput),
    Statistics(math::StatisticsInput),
    Equations(math::EquationInput),
    Fractions(math::FractionInput),
    GcdLcm(math::GcdLcmInput),
    PowerRoot(math::PowerRootInput),
    Proportion(math::ProportionInput),
    Pythagorean(math::PythagoreanInput),

    // Converters
    Length(ConversionInput),
    Mass(ConversionInput),
    VolumeUnits(ConversionInput),
    Temperature(ConversionInput),
    AreaUnits(ConversionInput),
    Speed(ConversionInput),
    Time(ConversionInput),
    DataStorage(ConversionInput),
    Pressure(ConversionInput),
    Energy(ConversionInput),

    // Health
    Bmi(health::BmiInput),
    Bmr(health::BmrInput),
    Calories(health::CaloriesInput),
    HeartRate(health::HeartRateInput),
    IdealWeight(health::IdealWeightInput),
    BodyFat(health::BodyFatInput),
    WaterIntake(health::WaterIntakeInput),
    Dose(health::DoseInput),
    Pregnancy(health::PregnancyInput),
    Ovulation(health::OvulationInput),

    // Finance
    Loan(finance::LoanInput),
    Mortgage(finance::MortgageInput),
    CompoundInterest(finance::CompoundInterestInput),
    SimpleInterest(finance::SimpleInterestInput),
    Vat(finance::VatInput),
    Discount(finance::DiscountInput),
    Tip(finance::TipInput),
    Roi(finance::RoiInput),
    ProfitMargin(finance::ProfitMarginInput),
    Inflation(finance::InflationInput),

    // Date & time
    Age(datetime::AgeInput),
    DateDifference(datetime::DateDifferenceInput),
    AddDays(datetime::AddDaysInput),

    // Everyday
    FuelConsumption(everyday::FuelConsumptionInput),
    SpeedDistanceTime(everyday::SpeedDistanceTimeInput),
    ElectricityCost(everyday::ElectricityCostInput),
}

fn to_json<T: Serialize>(result: CalcResult<T>) -> CalcResult<Value> {
    let result = result?;
    ensure_finite(&result)?;
    Ok(serde_json::to_value(result)?)
}

impl CalculationRequest {
    /// Parse a request body for `slug`. The body must be a JSON object (or
    /// null for calculators without inputs); its own `calculator` key, if
    /// any, is overwritten by `slug`.
    pub fn from_json(slug: &str, body: Value) -> CalcResult<Self> {
        let id = CalculatorId::from_slug(slug)
            .ok_or_else(|| CalcError::calculator_not_found(slug))?;

        let mut map = match body {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(CalcError::invalid_input(
                    "body",
                    other.to_string(),
                    "Request body must be a JSON object",
                ))
            }
        };
        map.insert("calculator".to_string(), Value::String(id.slug().to_string()));

        serde_json::from_value(Value::Object(map)).map_err(CalcError::from_body)
    }

    /// Catalogue id of the calculator this request targets
    pub fn id(&self) -> CalculatorId {
        use CalculationRequest as R;
        match self {
            R::Area(_) => CalculatorId::Area,
            R::Volume(_) => CalculatorId::Volume,
            R::Circle(_) => CalculatorId::Circle,
            R::Percent(_) => CalculatorId::Percent,
            R::Statistics(_) => CalculatorId::Statistics,
            R::Equations(_) => CalculatorId::Equations,
            R::Fractions(_) => CalculatorId::Fractions,
            R::GcdLcm(_) => CalculatorId::GcdLcm,
            R::PowerRoot(_) => CalculatorId::PowerRoot,
            R::Proportion(_) => CalculatorId::Proportion,
            R::Pythagorean(_) => CalculatorId::Pythagorean,
            R::Length(_) => CalculatorId::Length,
            R::Mass(_) => CalculatorId::Mass,
            R::VolumeUnits(_) => CalculatorId::VolumeUnits,
            R::Temperature(_) => CalculatorId::Temperature,
            R::AreaUnits(_) => CalculatorId::AreaUnits,
            R::Speed(_) => CalculatorId::Speed,
            R::Time(_) => CalculatorId::Time,
            R::DataStorage(_) => CalculatorId::DataStorage,
            R::Pressure(_) => CalculatorId::Pressure,
            R::Energy(_) => CalculatorId::Energy,
            R::Bmi(_) => CalculatorId::Bmi,
            R::Bmr(_) => CalculatorId::Bmr,
            R::Calories(_) => CalculatorId::Calories,
            R::HeartRate(_) => CalculatorId::HeartRate,
            R::IdealWeight(_) => CalculatorId::IdealWeight,
            R::BodyFat(_) => CalculatorId::BodyFat,
            R::WaterIntake(_) => CalculatorId::WaterIntake,
            R::Dose(_) => CalculatorId::Dose,
            R::Pregnancy(_) => CalculatorId::Pregnancy,
            R::Ovulation(_) => CalculatorId::Ovulation,
            R::Loan(_) => CalculatorId::Loan,
            R::Mortgage(_) => CalculatorId::Mortgage,
            R::CompoundInterest(_) => CalculatorId::CompoundInterest,
            R::SimpleInterest(_) => CalculatorId::SimpleInterest,
            R::Vat(_) => CalculatorId::Vat,
            R::Discount(_) => CalculatorId::Discount,
            R::Tip(_) => CalculatorId::Tip,
            R::Roi(_) => CalculatorId::Roi,
            R::ProfitMargin(_) => CalculatorId::ProfitMargin,
            R::Inflation(_) => CalculatorId::Inflation,
            R::Age(_) => CalculatorId::Age,
            R::DateDifference(_) => CalculatorId::DateDifference,
            R::AddDays(_) => CalculatorId::AddDays,
            R::FuelConsumption(_) => CalculatorId::FuelConsumption,
            R::SpeedDistanceTime(_) => CalculatorId::SpeedDistanceTime,
            R::ElectricityCost(_) => CalculatorId::ElectricityCost,
        }
    }

    /// Run the calculator and return its result as JSON.
    pub fn evaluate(&self) -> CalcResult<Value> {
        use CalculationRequest as R;
        match self {
            R::Area(i) => to_json(math::area::calculate(i)),
            R::Volume(i) => to_json(math::volume::calculate(i)),
            R::Circle(i) => to_json(math::circle::calculate(i)),
            R::Percent(i) => to_json(math::percent::calculate(i)),
            R::Statistics(i) => to_json(math::statistics::calculate(i)),
            R::Equations(i) => to_json(math::equations::solve(i)),
            R::Fractions(i) => to_json(math::fractions::calculate(i)),
            R::GcdLcm(i) => to_json(math::gcd_lcm::calculate(i)),
            R::PowerRoot(i) => to_json(math::power_root::calculate(i)),
            R::Proportion(i) => to_json(math::proportion::calculate(i)),
            R::Pythagorean(i) => to_json(math::pythagorean::calculate(i)),

            R::Length(i) => to_json(converters::length::convert(i)),
            R::Mass(i) => to_json(converters::mass::convert(i)),
            R::VolumeUnits(i) => to_json(converters::volume::convert(i)),
            R::Temperature(i) => to_json(converters::temperature::convert(i)),
            R::AreaUnits(i) => to_json(converters::area::convert(i)),
            R::Speed(i) => to_json(converters::speed::convert(i)),
            R::Time(i) => to_json(converters::time::convert(i)),
            R::DataStorage(i) => to_json(converters::data_storage::convert(i)),
            R::Pressure(i) => to_json(converters::pressure::convert(i)),
            R::Energy(i) => to_json(converters::energy::convert(i)),

            R::Bmi(i) => to_json(health::bmi::calculate(i)),
            R::Bmr(i) => to_json(health::bmr::calculate(i)),
            R::Calories(i) => to_json(health::calories::calculate(i)),
            R::HeartRate(i) => to_json(health::heart_rate::calculate(i)),
            R::IdealWeight(i) => to_json(health::ideal_weight::calculate(i)),
            R::BodyFat(i) => to_json(health::body_fat::calculate(i)),
            R::WaterIntake(i) => to_json(health::water_intake::calculate(i)),
            R::Dose(i) => to_json(health::dose::calculate(i)),
            R::Pregnancy(i) => to_json(health::pregnancy::calculate(i)),
            R::Ovulation(i) => to_json(health::ovulation::calculate(i)),

            R::Loan(i) => to_json(finance::loan::calculate(i)),
            R::Mortgage(i) => to_json(finance::mortgage::calculate(i)),
            R::CompoundInterest(i) => to_json(finance::compound_interest::calculate(i)),
            R::SimpleInterest(i) => to_json(finance::simple_interest::calculate(i)),
            R::Vat(i) => to_json(finance::vat::calculate(i)),
            R::Discount(i) => to_json(finance::discount::calculate(i)),
            R::Tip(i) => to_json(finance::tip::calculate(i)),
            R::Roi(i) => to_json(finance::roi::calculate(i)),
            R::ProfitMargin(i) => to_json(finance::profit_margin::calculate(i)),
            R::Inflation(i) => to_json(finance::inflation::calculate(i)),

            R::Age(i) => to_json(datetime::age::calculate(i)),
            R::DateDifference(i) => to_json(datetime::date_difference::calculate(i)),
            R::AddDays(i) => to_json(datetime::add_days::calculate(i)),

            R::FuelConsumption(i) => to_json(everyday::fuel_consumption::calculate(i)),
            R::SpeedDistanceTime(i) => to_json(everyday::speed_distance_time::calculate(i)),
            R::ElectricityCost(i) => to_json(everyday::electricity_cost::calculate(i)),
        }
    }

    /// Input fields as JSON, without the `calculator` tag
    pub fn input_json(&self) -> CalcResult<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.remove("calculator");
        }
        Ok(value)
    }
}

/// Parse `body` for the calculator `slug` and evaluate it.
pub fn run_calculator(slug: &str, body: Value) -> CalcResult<Value> {
    CalculationRequest::from_json(slug, body)?.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_catalog_entry_parses_as_request_tag() {
        for id in CalculatorId::ALL {
            let tagged = json!({ "calculator": id.slug() });
            let err = serde_json::from_value::<CalculationRequest>(tagged)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            assert!(
                !err.contains("unknown variant"),
                "slug {} has no request variant",
                id.slug()
            );
        }
    }

    #[test]
    fn test_run_area() {
        let result = run_calculator("area", json!({ "figure": "circle", "radius": 5 })).unwrap();
        assert_eq!(result["area"], 78.54);
    }

    #[test]
    fn test_run_volume_converter() {
        let body = json!({ "value": 1000, "from_unit": "liters", "to_unit": "m3" });
        let result = run_calculator("volume-units", body).unwrap();
        assert_eq!(result["value"], 1.0);
    }

    #[test]
    fn test_run_loan() {
        let body = json!({ "principal": 100000, "annual_rate": 12, "term_months": 12 });
        let result = run_calculator("loan", body).unwrap();
        assert_eq!(result["monthly_payment"], 8884.88);
    }

    #[test]
    fn test_overflowing_results_are_rejected() {
        let err = run_calculator("statistics", json!({ "values": [1e308, 1e308, -1e308] })).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.field().is_some());

        let err = run_calculator("area", json!({ "figure": "circle", "radius": 1e200 })).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let body = json!({ "principal": 1e308, "annual_rate": 50, "years": 10 });
        let err = run_calculator("simple-interest", body).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_tiny_conversion_stays_a_number() {
        let body = json!({ "value": 1e-300, "from_unit": "m", "to_unit": "km" });
        let result = run_calculator("length", body).unwrap();
        assert!(result["value"].is_f64());
        assert!(result["value"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_unknown_slug() {
        let err = run_calculator("horoscope", json!({})).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATOR_NOT_FOUND");
    }

    #[test]
    fn test_missing_field() {
        let err = run_calculator("bmi", json!({ "weight": 70 })).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_wrong_type_is_client_error() {
        let err = run_calculator("bmi", json!({ "weight": "heavy", "height": 175 })).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.is_client_error());

        let err = run_calculator("bmi", json!([70, 175])).unwrap_err();
        assert_eq!(err.field(), Some("body"));
    }

    #[test]
    fn test_request_round_trip_keeps_slug() {
        let request = CalculationRequest::from_json("tip", json!({ "bill": 50, "tip_percent": 10 })).unwrap();
        assert_eq!(request.id(), CalculatorId::Tip);
        let input = request.input_json().unwrap();
        assert!(input.get("calculator").is_none());
        assert_eq!(input["bill"], 50.0);
    }
}
