//! # Calculator Catalogue
//!
//! Central registry of every calculator: its slug, category, English name
//! and description, the formula it applies, and its input variables. Page
//! routing, the search index, the CLI listing and `CALCULATORS.md` all read
//! from here.
//!
//! ```rust
//! use calc_core::catalog::{CalculatorId, Category};
//!
//! let bmi = CalculatorId::from_slug("bmi").unwrap();
//! assert_eq!(bmi.category(), Category::Health);
//! assert!(bmi.metadata().formula_plain.contains("height"));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// Top-level grouping used in URLs (`/{locale}/{category}/{calculator}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Math,
    Converters,
    Health,
    Finance,
    Datetime,
    Everyday,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Math,
        Category::Converters,
        Category::Health,
        Category::Finance,
        Category::Datetime,
        Category::Everyday,
    ];

    /// URL segment
    pub fn slug(self) -> &'static str {
        match self {
            Category::Math => "math",
            Category::Converters => "converters",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Datetime => "datetime",
            Category::Everyday => "everyday",
        }
    }

    /// English display name
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Math => "Math",
            Category::Converters => "Unit Converters",
            Category::Health => "Health",
            Category::Finance => "Finance",
            Category::Datetime => "Date & Time",
            Category::Everyday => "Everyday",
        }
    }

    /// Sort order on the home page (lower = earlier)
    pub fn sort_order(self) -> u8 {
        match self {
            Category::Math => 1,
            Category::Converters => 2,
            Category::Health => 3,
            Category::Finance => 4,
            Category::Datetime => 5,
            Category::Everyday => 6,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    /// Calculators in this category, in catalogue order
    pub fn calculators(self) -> Vec<CalculatorId> {
        CalculatorId::in_category(self)
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// An input variable of a calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    /// JSON field name (e.g. "weight")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Units, or "-" when dimensionless
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Calculator Metadata
// ============================================================================

/// Everything the site needs to describe a calculator without running it.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorMetadata {
    pub slug: &'static str,
    /// English name, used when no translation exists
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Formula in plain text
    pub formula_plain: &'static str,
    pub variables: Vec<Variable>,
    /// English search keywords
    pub keywords: &'static [&'static str],
    /// Source module implementing the calculator
    pub source_module: &'static str,
}

// ============================================================================
// Calculator Enum
// ============================================================================

/// Every calculator on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorId {
    // Math
    Area,
    Volume,
    Circle,
    Percent,
    Statistics,
    Equations,
    Fractions,
    GcdLcm,
    PowerRoot,
    Proportion,
    Pythagorean,
    // Converters
    Length,
    Mass,
    VolumeUnits,
    Temperature,
    AreaUnits,
    Speed,
    Time,
    DataStorage,
    Pressure,
    Energy,
    // Health
    Bmi,
    Bmr,
    Calories,
    HeartRate,
    IdealWeight,
    BodyFat,
    WaterIntake,
    Dose,
    Pregnancy,
    Ovulation,
    // Finance
    Loan,
    Mortgage,
    CompoundInterest,
    SimpleInterest,
    Vat,
    Discount,
    Tip,
    Roi,
    ProfitMargin,
    Inflation,
    // Date & time
    Age,
    DateDifference,
    AddDays,
    // Everyday
    FuelConsumption,
    SpeedDistanceTime,
    ElectricityCost,
}

const CONVERTER_VARIABLES: [Variable; 3] = [
    Variable::new("value", "Quantity to convert", "-"),
    Variable::new("from_unit", "Unit of the value", "-"),
    Variable::new("to_unit", "Target unit", "-"),
];

fn converter(
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    formula_plain: &'static str,
    keywords: &'static [&'static str],
    source_module: &'static str,
) -> CalculatorMetadata {
    CalculatorMetadata {
        slug,
        name,
        description,
        category: Category::Converters,
        formula_plain,
        variables: CONVERTER_VARIABLES.to_vec(),
        keywords,
        source_module,
    }
}

impl CalculatorId {
    /// All calculators, grouped by category in display order
    pub const ALL: &'static [CalculatorId] = &[
        CalculatorId::Area,
        CalculatorId::Volume,
        CalculatorId::Circle,
        CalculatorId::Percent,
        CalculatorId::Statistics,
        CalculatorId::Equations,
        CalculatorId::Fractions,
        CalculatorId::GcdLcm,
        CalculatorId::PowerRoot,
        CalculatorId::Proportion,
        CalculatorId::Pythagorean,
        CalculatorId::Length,
        CalculatorId::Mass,
        CalculatorId::VolumeUnits,
        CalculatorId::Temperature,
        CalculatorId::AreaUnits,
        CalculatorId::Speed,
        CalculatorId::Time,
        CalculatorId::DataStorage,
        CalculatorId::Pressure,
        CalculatorId::Energy,
        CalculatorId::Bmi,
        CalculatorId::Bmr,
        CalculatorId::Calories,
        CalculatorId::HeartRate,
        CalculatorId::IdealWeight,
        CalculatorId::BodyFat,
        CalculatorId::WaterIntake,
        CalculatorId::Dose,
        CalculatorId::Pregnancy,
        CalculatorId::Ovulation,
        CalculatorId::Loan,
        CalculatorId::Mortgage,
        CalculatorId::CompoundInterest,
        CalculatorId::SimpleInterest,
        CalculatorId::Vat,
        CalculatorId::Discount,
        CalculatorId::Tip,
        CalculatorId::Roi,
        CalculatorId::ProfitMargin,
        CalculatorId::Inflation,
        CalculatorId::Age,
        CalculatorId::DateDifference,
        CalculatorId::AddDays,
        CalculatorId::FuelConsumption,
        CalculatorId::SpeedDistanceTime,
        CalculatorId::ElectricityCost,
    ];

    /// URL slug (`"gcd-lcm"`, `"bmi"`…)
    pub fn slug(self) -> &'static str {
        self.metadata().slug
    }

    pub fn from_slug(slug: &str) -> Option<CalculatorId> {
        CalculatorId::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    pub fn category(self) -> Category {
        self.metadata().category
    }

    /// Get all calculators in a given category
    pub fn in_category(category: Category) -> Vec<CalculatorId> {
        CalculatorId::ALL
            .iter()
            .filter(|c| c.category() == category)
            .copied()
            .collect()
    }

    /// Get the full metadata for this calculator
    pub fn metadata(self) -> CalculatorMetadata {
        use CalculatorId as C;
        match self {
            // ----------------------------------------------------------------
            // Math
            // ----------------------------------------------------------------
            C::Area => CalculatorMetadata {
                slug: "area",
                name: "Area Calculator",
                description: "Area and perimeter of common plane figures",
                category: Category::Math,
                formula_plain: "circle: A = πr²; rectangle: A = l × w; triangle: A = b × h / 2",
                variables: vec![
                    Variable::new("figure", "Figure type (circle, square, rectangle, triangle, ...)", "-"),
                    Variable::new("radius", "Radius", "length"),
                    Variable::new("base", "Base", "length"),
                    Variable::new("height", "Height", "length"),
                ],
                keywords: &["area", "perimeter", "circle", "rectangle", "triangle", "geometry"],
                source_module: "calculations/math/area.rs",
            },
            C::Volume => CalculatorMetadata {
                slug: "volume",
                name: "Volume Calculator",
                description: "Volume and surface area of common solids",
                category: Category::Math,
                formula_plain: "sphere: V = 4/3 πr³; cylinder: V = πr²h; cone: V = πr²h / 3",
                variables: vec![
                    Variable::new("shape", "Solid type (cube, sphere, cylinder, ...)", "-"),
                    Variable::new("radius", "Radius", "length"),
                    Variable::new("height", "Height", "length"),
                ],
                keywords: &["volume", "sphere", "cube", "cylinder", "cone", "solid"],
                source_module: "calculations/math/volume.rs",
            },
            C::Circle => CalculatorMetadata {
                slug: "circle",
                name: "Circle Calculator",
                description: "Radius, diameter, circumference and area from any one of them",
                category: Category::Math,
                formula_plain: "d = 2r; C = 2πr; A = πr²",
                variables: vec![
                    Variable::new("known", "Which quantity is given", "-"),
                    Variable::new("value", "Value of the known quantity", "-"),
                ],
                keywords: &["circle", "radius", "diameter", "circumference", "pi"],
                source_module: "calculations/math/circle.rs",
            },
            C::Percent => CalculatorMetadata {
                slug: "percent",
                name: "Percentage Calculator",
                description: "Percent of a number, percentage change, adding and subtracting percent",
                category: Category::Math,
                formula_plain: "p% of x = x × p / 100; change = (to − from) / from × 100",
                variables: vec![
                    Variable::new("operation", "of_number, what_percent, change, add, subtract", "-"),
                    Variable::new("number", "Base number", "-"),
                    Variable::new("percent", "Percentage", "%"),
                ],
                keywords: &["percent", "percentage", "increase", "decrease", "ratio"],
                source_module: "calculations/math/percent.rs",
            },
            C::Statistics => CalculatorMetadata {
                slug: "statistics",
                name: "Statistics Calculator",
                description: "Mean, median, mode, variance and standard deviation of a data set",
                category: Category::Math,
                formula_plain: "mean = Σx / n; σ² = Σ(x − mean)² / n; s² = Σ(x − mean)² / (n − 1)",
                variables: vec![Variable::new("values", "Data set", "-")],
                keywords: &["mean", "median", "mode", "average", "variance", "standard deviation"],
                source_module: "calculations/math/statistics.rs",
            },
            C::Equations => CalculatorMetadata {
                slug: "equations",
                name: "Equation Solver",
                description: "Linear and quadratic equations and 2×2 linear systems",
                category: Category::Math,
                formula_plain: "x = (−b ± √(b² − 4ac)) / 2a; Cramer's rule for systems",
                variables: vec![
                    Variable::new("kind", "linear, quadratic or system", "-"),
                    Variable::new("a", "Coefficient a", "-"),
                    Variable::new("b", "Coefficient b", "-"),
                    Variable::new("c", "Coefficient c", "-"),
                ],
                keywords: &["equation", "quadratic", "linear", "roots", "discriminant", "system"],
                source_module: "calculations/math/equations.rs",
            },
            C::Fractions => CalculatorMetadata {
                slug: "fractions",
                name: "Fraction Calculator",
                description: "Add, subtract, multiply and divide fractions with a reduced result",
                category: Category::Math,
                formula_plain: "a/b + c/d = (ad + cb) / bd, reduced by gcd",
                variables: vec![
                    Variable::new("first", "First fraction", "-"),
                    Variable::new("second", "Second fraction", "-"),
                    Variable::new("op", "add, subtract, multiply, divide", "-"),
                ],
                keywords: &["fraction", "numerator", "denominator", "simplify"],
                source_module: "calculations/math/fractions.rs",
            },
            C::GcdLcm => CalculatorMetadata {
                slug: "gcd-lcm",
                name: "GCD and LCM Calculator",
                description: "Greatest common divisor and least common multiple of integers",
                category: Category::Math,
                formula_plain: "gcd by Euclid's algorithm; lcm(a, b) = |a × b| / gcd(a, b)",
                variables: vec![Variable::new("numbers", "Integers (2 to 100)", "-")],
                keywords: &["gcd", "lcm", "divisor", "multiple", "hcf"],
                source_module: "calculations/math/gcd_lcm.rs",
            },
            C::PowerRoot => CalculatorMetadata {
                slug: "power-root",
                name: "Power and Root Calculator",
                description: "Raise a number to a power or take its n-th root",
                category: Category::Math,
                formula_plain: "x^n; ⁿ√x = x^(1/n)",
                variables: vec![
                    Variable::new("operation", "power or root", "-"),
                    Variable::new("base", "Base / radicand", "-"),
                    Variable::new("exponent", "Exponent / root degree", "-"),
                ],
                keywords: &["power", "exponent", "root", "square root", "cube root"],
                source_module: "calculations/math/power_root.rs",
            },
            C::Proportion => CalculatorMetadata {
                slug: "proportion",
                name: "Proportion Calculator",
                description: "Solve a / b = c / x (rule of three)",
                category: Category::Math,
                formula_plain: "x = b × c / a",
                variables: vec![
                    Variable::new("a", "First term", "-"),
                    Variable::new("b", "Second term", "-"),
                    Variable::new("c", "Third term", "-"),
                ],
                keywords: &["proportion", "rule of three", "ratio"],
                source_module: "calculations/math/proportion.rs",
            },
            C::Pythagorean => CalculatorMetadata {
                slug: "pythagorean",
                name: "Pythagorean Theorem Calculator",
                description: "Missing side of a right triangle",
                category: Category::Math,
                formula_plain: "a² + b² = c²",
                variables: vec![
                    Variable::new("a", "Leg a", "length"),
                    Variable::new("b", "Leg b", "length"),
                    Variable::new("c", "Hypotenuse", "length"),
                ],
                keywords: &["pythagorean", "hypotenuse", "right triangle", "leg"],
                source_module: "calculations/math/pythagorean.rs",
            },

            // ----------------------------------------------------------------
            // Converters
            // ----------------------------------------------------------------
            C::Length => converter(
                "length",
                "Length Converter",
                "Metric and imperial lengths: mm, cm, m, km, in, ft, yd, mi, nmi",
                "to = from × factor(from) / factor(to), base unit m",
                &["length", "distance", "meter", "feet", "inch", "mile"],
                "calculations/converters/length.rs",
            ),
            C::Mass => converter(
                "mass",
                "Weight and Mass Converter",
                "Grams, kilograms, tonnes, ounces, pounds, stones and carats",
                "to = from × factor(from) / factor(to), base unit kg",
                &["mass", "weight", "kilogram", "pound", "ounce", "gram"],
                "calculations/converters/mass.rs",
            ),
            C::VolumeUnits => converter(
                "volume-units",
                "Volume Converter",
                "Liters, cubic meters, gallons, quarts, pints, cups and fluid ounces",
                "to = from × factor(from) / factor(to), base unit L",
                &["volume", "liter", "gallon", "cup", "cubic meter"],
                "calculations/converters/volume.rs",
            ),
            C::Temperature => converter(
                "temperature",
                "Temperature Converter",
                "Celsius, Fahrenheit and Kelvin",
                "°F = °C × 9/5 + 32; K = °C + 273.15",
                &["temperature", "celsius", "fahrenheit", "kelvin"],
                "calculations/converters/temperature.rs",
            ),
            C::AreaUnits => converter(
                "area-units",
                "Area Converter",
                "Square meters, hectares, acres, square feet and more",
                "to = from × factor(from) / factor(to), base unit m²",
                &["area", "hectare", "acre", "square meter", "square feet"],
                "calculations/converters/area.rs",
            ),
            C::Speed => converter(
                "speed",
                "Speed Converter",
                "km/h, m/s, mph, knots and ft/s",
                "to = from × factor(from) / factor(to), base unit m/s",
                &["speed", "velocity", "mph", "kmh", "knots"],
                "calculations/converters/speed.rs",
            ),
            C::Time => converter(
                "time",
                "Time Converter",
                "Milliseconds to years",
                "to = from × factor(from) / factor(to), base unit s",
                &["time", "seconds", "minutes", "hours", "days"],
                "calculations/converters/time.rs",
            ),
            C::DataStorage => converter(
                "data-storage",
                "Data Storage Converter",
                "Bits and bytes with decimal (KB, MB) and binary (KiB, MiB) prefixes",
                "to = from × factor(from) / factor(to), base unit byte",
                &["data", "byte", "megabyte", "gigabyte", "storage"],
                "calculations/converters/data_storage.rs",
            ),
            C::Pressure => converter(
                "pressure",
                "Pressure Converter",
                "Pascal, bar, atmosphere, psi, mmHg and torr",
                "to = from × factor(from) / factor(to), base unit Pa",
                &["pressure", "bar", "psi", "atm", "pascal"],
                "calculations/converters/pressure.rs",
            ),
            C::Energy => converter(
                "energy",
                "Energy Converter",
                "Joules, calories, watt-hours, BTU and electronvolts",
                "to = from × factor(from) / factor(to), base unit J",
                &["energy", "joule", "calorie", "kwh", "btu"],
                "calculations/converters/energy.rs",
            ),

            // ----------------------------------------------------------------
            // Health
            // ----------------------------------------------------------------
            C::Bmi => CalculatorMetadata {
                slug: "bmi",
                name: "BMI Calculator",
                description: "Body mass index with WHO category and healthy weight range",
                category: Category::Health,
                formula_plain: "BMI = weight (kg) / height (m)²",
                variables: vec![
                    Variable::new("weight", "Body weight", "kg | lb"),
                    Variable::new("height", "Height", "cm | in"),
                    Variable::new("unit_system", "metric or imperial", "-"),
                ],
                keywords: &["bmi", "body mass index", "weight", "obesity", "overweight"],
                source_module: "calculations/health/bmi.rs",
            },
            C::Bmr => CalculatorMetadata {
                slug: "bmr",
                name: "BMR Calculator",
                description: "Basal metabolic rate by Mifflin–St Jeor or Harris–Benedict",
                category: Category::Health,
                formula_plain: "BMR = 10W + 6.25H − 5A + s (s = +5 male, −161 female)",
                variables: vec![
                    Variable::new("sex", "male or female", "-"),
                    Variable::new("age", "Age", "years"),
                    Variable::new("weight", "Body weight", "kg | lb"),
                    Variable::new("height", "Height", "cm | in"),
                ],
                keywords: &["bmr", "metabolism", "basal metabolic rate", "calories"],
                source_module: "calculations/health/bmr.rs",
            },
            C::Calories => CalculatorMetadata {
                slug: "calories",
                name: "Calorie Calculator",
                description: "Daily energy needs (TDEE), goal calories and macros",
                category: Category::Health,
                formula_plain: "TDEE = BMR × activity factor; target = TDEE ± 500",
                variables: vec![
                    Variable::new("sex", "male or female", "-"),
                    Variable::new("age", "Age", "years"),
                    Variable::new("weight", "Body weight", "kg | lb"),
                    Variable::new("height", "Height", "cm | in"),
                    Variable::new("activity", "sedentary … very_active", "-"),
                    Variable::new("goal", "maintain, lose or gain", "-"),
                ],
                keywords: &["calories", "tdee", "diet", "macros", "weight loss"],
                source_module: "calculations/health/calories.rs",
            },
            C::HeartRate => CalculatorMetadata {
                slug: "heart-rate",
                name: "Heart Rate Zone Calculator",
                description: "Maximum heart rate and five training zones",
                category: Category::Health,
                formula_plain: "HRmax = 220 − age; target = HRrest + (HRmax − HRrest) × intensity",
                variables: vec![
                    Variable::new("age", "Age", "years"),
                    Variable::new("resting_heart_rate", "Resting heart rate (optional)", "bpm"),
                ],
                keywords: &["heart rate", "pulse", "karvonen", "training zones", "cardio"],
                source_module: "calculations/health/heart_rate.rs",
            },
            C::IdealWeight => CalculatorMetadata {
                slug: "ideal-weight",
                name: "Ideal Weight Calculator",
                description: "Ideal body weight by the Devine, Robinson, Miller and Hamwi formulas",
                category: Category::Health,
                formula_plain: "Devine: 50 + 2.3 × (height in − 60) kg (male)",
                variables: vec![
                    Variable::new("sex", "male or female", "-"),
                    Variable::new("height", "Height", "cm | in"),
                ],
                keywords: &["ideal weight", "devine", "robinson", "healthy weight"],
                source_module: "calculations/health/ideal_weight.rs",
            },
            C::BodyFat => CalculatorMetadata {
                slug: "body-fat",
                name: "Body Fat Calculator",
                description: "Body fat percentage by the US Navy circumference method",
                category: Category::Health,
                formula_plain: "BF% = 495 / (1.0324 − 0.19077·log10(waist − neck) + 0.15456·log10(height)) − 450",
                variables: vec![
                    Variable::new("height", "Height", "cm | in"),
                    Variable::new("waist", "Waist circumference", "cm | in"),
                    Variable::new("neck", "Neck circumference", "cm | in"),
                    Variable::new("hip", "Hip circumference (women)", "cm | in"),
                ],
                keywords: &["body fat", "navy method", "fat percentage", "lean mass"],
                source_module: "calculations/health/body_fat.rs",
            },
            C::WaterIntake => CalculatorMetadata {
                slug: "water-intake",
                name: "Water Intake Calculator",
                description: "Recommended daily water intake from weight and exercise",
                category: Category::Health,
                formula_plain: "water = 30 ml × weight + 350 ml per 30 min exercise",
                variables: vec![
                    Variable::new("weight", "Body weight", "kg"),
                    Variable::new("exercise_minutes", "Daily exercise", "min"),
                ],
                keywords: &["water", "hydration", "drink", "intake"],
                source_module: "calculations/health/water_intake.rs",
            },
            C::Dose => CalculatorMetadata {
                slug: "dose",
                name: "Dosage Calculator",
                description: "Weight-based medication dose and liquid volume",
                category: Category::Health,
                formula_plain: "dose = weight × mg/kg; volume = dose / concentration",
                variables: vec![
                    Variable::new("weight_kg", "Body weight", "kg"),
                    Variable::new("dose_mg_per_kg", "Dose per kilogram", "mg/kg"),
                    Variable::new("concentration_mg_per_ml", "Concentration (optional)", "mg/ml"),
                ],
                keywords: &["dose", "dosage", "medication", "mg/kg"],
                source_module: "calculations/health/dose.rs",
            },
            C::Pregnancy => CalculatorMetadata {
                slug: "pregnancy",
                name: "Pregnancy Due Date Calculator",
                description: "Due date, gestational age and trimester",
                category: Category::Health,
                formula_plain: "due date = LMP + 280 days + (cycle − 28)",
                variables: vec![
                    Variable::new("method", "lmp or conception", "-"),
                    Variable::new("date", "LMP or conception date", "date"),
                    Variable::new("cycle_length", "Cycle length", "days"),
                ],
                keywords: &["pregnancy", "due date", "gestational age", "trimester"],
                source_module: "calculations/health/pregnancy.rs",
            },
            C::Ovulation => CalculatorMetadata {
                slug: "ovulation",
                name: "Ovulation Calculator",
                description: "Ovulation day, fertile window and next period",
                category: Category::Health,
                formula_plain: "ovulation = LMP + cycle − 14",
                variables: vec![
                    Variable::new("lmp", "First day of last period", "date"),
                    Variable::new("cycle_length", "Cycle length", "days"),
                ],
                keywords: &["ovulation", "fertile window", "cycle", "period"],
                source_module: "calculations/health/ovulation.rs",
            },

            // ----------------------------------------------------------------
            // Finance
            // ----------------------------------------------------------------
            C::Loan => CalculatorMetadata {
                slug: "loan",
                name: "Loan Calculator",
                description: "Monthly payment and amortization schedule, annuity or differentiated",
                category: Category::Finance,
                formula_plain: "A = P·r / (1 − (1 + r)^−n)",
                variables: vec![
                    Variable::new("principal", "Loan amount", "currency"),
                    Variable::new("annual_rate", "Annual interest rate", "%"),
                    Variable::new("term_months", "Term", "months"),
                ],
                keywords: &["loan", "credit", "annuity", "amortization", "payment"],
                source_module: "calculations/finance/loan.rs",
            },
            C::Mortgage => CalculatorMetadata {
                slug: "mortgage",
                name: "Mortgage Calculator",
                description: "Monthly mortgage payment including tax and insurance",
                category: Category::Finance,
                formula_plain: "M = L·r / (1 − (1 + r)^−n), L = price − down payment",
                variables: vec![
                    Variable::new("home_price", "Home price", "currency"),
                    Variable::new("down_payment", "Down payment", "currency"),
                    Variable::new("annual_rate", "Annual interest rate", "%"),
                    Variable::new("term_years", "Term", "years"),
                ],
                keywords: &["mortgage", "home loan", "house", "down payment"],
                source_module: "calculations/finance/mortgage.rs",
            },
            C::CompoundInterest => CalculatorMetadata {
                slug: "compound-interest",
                name: "Compound Interest Calculator",
                description: "Savings growth with compounding and monthly contributions",
                category: Category::Finance,
                formula_plain: "FV = P(1 + r/n)^(n·t)",
                variables: vec![
                    Variable::new("principal", "Initial deposit", "currency"),
                    Variable::new("annual_rate", "Annual rate", "%"),
                    Variable::new("years", "Duration", "years"),
                    Variable::new("compounds_per_year", "Compounding frequency", "1/year"),
                ],
                keywords: &["compound interest", "savings", "investment", "deposit"],
                source_module: "calculations/finance/compound_interest.rs",
            },
            C::SimpleInterest => CalculatorMetadata {
                slug: "simple-interest",
                name: "Simple Interest Calculator",
                description: "Interest without compounding",
                category: Category::Finance,
                formula_plain: "I = P × r × t",
                variables: vec![
                    Variable::new("principal", "Principal", "currency"),
                    Variable::new("annual_rate", "Annual rate", "%"),
                    Variable::new("years", "Duration", "years"),
                ],
                keywords: &["simple interest", "interest"],
                source_module: "calculations/finance/simple_interest.rs",
            },
            C::Vat => CalculatorMetadata {
                slug: "vat",
                name: "VAT Calculator",
                description: "Add VAT to a net price or extract it from a gross price",
                category: Category::Finance,
                formula_plain: "gross = net × (1 + rate); net = gross / (1 + rate)",
                variables: vec![
                    Variable::new("amount", "Amount", "currency"),
                    Variable::new("rate", "Tax rate", "%"),
                    Variable::new("mode", "add or extract", "-"),
                ],
                keywords: &["vat", "tax", "sales tax", "gross", "net"],
                source_module: "calculations/finance/vat.rs",
            },
            C::Discount => CalculatorMetadata {
                slug: "discount",
                name: "Discount Calculator",
                description: "Sale price and savings",
                category: Category::Finance,
                formula_plain: "final = price × (1 − discount / 100)",
                variables: vec![
                    Variable::new("price", "Original price", "currency"),
                    Variable::new("percent", "Discount", "%"),
                ],
                keywords: &["discount", "sale", "price", "savings"],
                source_module: "calculations/finance/discount.rs",
            },
            C::Tip => CalculatorMetadata {
                slug: "tip",
                name: "Tip Calculator",
                description: "Tip amount and split between people",
                category: Category::Finance,
                formula_plain: "tip = bill × percent / 100",
                variables: vec![
                    Variable::new("bill", "Bill amount", "currency"),
                    Variable::new("tip_percent", "Tip", "%"),
                    Variable::new("people", "Number of people", "-"),
                ],
                keywords: &["tip", "gratuity", "split bill", "restaurant"],
                source_module: "calculations/finance/tip.rs",
            },
            C::Roi => CalculatorMetadata {
                slug: "roi",
                name: "ROI Calculator",
                description: "Return on investment, total and annualised",
                category: Category::Finance,
                formula_plain: "ROI = (final − cost) / cost × 100",
                variables: vec![
                    Variable::new("cost", "Investment cost", "currency"),
                    Variable::new("final_value", "Final value", "currency"),
                    Variable::new("years", "Holding period (optional)", "years"),
                ],
                keywords: &["roi", "return on investment", "profit", "investment"],
                source_module: "calculations/finance/roi.rs",
            },
            C::ProfitMargin => CalculatorMetadata {
                slug: "profit-margin",
                name: "Profit Margin Calculator",
                description: "Profit, margin and markup from cost and revenue",
                category: Category::Finance,
                formula_plain: "margin = (revenue − cost) / revenue × 100",
                variables: vec![
                    Variable::new("cost", "Cost", "currency"),
                    Variable::new("revenue", "Revenue", "currency"),
                ],
                keywords: &["profit", "margin", "markup", "business"],
                source_module: "calculations/finance/profit_margin.rs",
            },
            C::Inflation => CalculatorMetadata {
                slug: "inflation",
                name: "Inflation Calculator",
                description: "Future cost and purchasing power under inflation",
                category: Category::Finance,
                formula_plain: "future = A × (1 + r)^t",
                variables: vec![
                    Variable::new("amount", "Amount", "currency"),
                    Variable::new("annual_rate", "Annual inflation", "%"),
                    Variable::new("years", "Duration", "years"),
                ],
                keywords: &["inflation", "purchasing power", "prices", "cpi"],
                source_module: "calculations/finance/inflation.rs",
            },

            // ----------------------------------------------------------------
            // Date & time
            // ----------------------------------------------------------------
            C::Age => CalculatorMetadata {
                slug: "age",
                name: "Age Calculator",
                description: "Exact age in years, months and days and the next birthday",
                category: Category::Datetime,
                formula_plain: "age = reference date − birth date",
                variables: vec![
                    Variable::new("birth_date", "Date of birth", "date"),
                    Variable::new("reference_date", "Date to measure at (optional)", "date"),
                ],
                keywords: &["age", "birthday", "born", "years old"],
                source_module: "calculations/datetime/age.rs",
            },
            C::DateDifference => CalculatorMetadata {
                slug: "date-difference",
                name: "Date Difference Calculator",
                description: "Days, weeks, months and business days between two dates",
                category: Category::Datetime,
                formula_plain: "days = end date − start date",
                variables: vec![
                    Variable::new("start_date", "Start date", "date"),
                    Variable::new("end_date", "End date", "date"),
                ],
                keywords: &["date difference", "days between", "business days", "duration"],
                source_module: "calculations/datetime/date_difference.rs",
            },
            C::AddDays => CalculatorMetadata {
                slug: "add-days",
                name: "Add Days to Date",
                description: "Add or subtract calendar or business days",
                category: Category::Datetime,
                formula_plain: "result = date ± N days",
                variables: vec![
                    Variable::new("date", "Start date", "date"),
                    Variable::new("days", "Days to add (negative to subtract)", "days"),
                    Variable::new("business_days", "Skip weekends", "-"),
                ],
                keywords: &["add days", "subtract days", "deadline", "business days"],
                source_module: "calculations/datetime/add_days.rs",
            },

            // ----------------------------------------------------------------
            // Everyday
            // ----------------------------------------------------------------
            C::FuelConsumption => CalculatorMetadata {
                slug: "fuel-consumption",
                name: "Fuel Consumption Calculator",
                description: "Litres per 100 km, mpg and trip cost",
                category: Category::Everyday,
                formula_plain: "L/100 km = fuel / distance × 100",
                variables: vec![
                    Variable::new("distance_km", "Distance", "km"),
                    Variable::new("fuel_liters", "Fuel used", "L"),
                    Variable::new("price_per_liter", "Fuel price (optional)", "currency/L"),
                ],
                keywords: &["fuel", "gas", "mpg", "consumption", "trip cost"],
                source_module: "calculations/everyday/fuel_consumption.rs",
            },
            C::SpeedDistanceTime => CalculatorMetadata {
                slug: "speed-distance-time",
                name: "Speed, Distance and Time Calculator",
                description: "Find speed, distance or travel time from the other two",
                category: Category::Everyday,
                formula_plain: "v = d / t",
                variables: vec![
                    Variable::new("speed_kmh", "Speed", "km/h"),
                    Variable::new("distance_km", "Distance", "km"),
                    Variable::new("time_hours", "Time", "h"),
                ],
                keywords: &["speed", "distance", "time", "travel", "pace"],
                source_module: "calculations/everyday/speed_distance_time.rs",
            },
            C::ElectricityCost => CalculatorMetadata {
                slug: "electricity-cost",
                name: "Electricity Cost Calculator",
                description: "Energy use and running cost of an appliance",
                category: Category::Everyday,
                formula_plain: "cost = W × h / 1000 × price",
                variables: vec![
                    Variable::new("power_watts", "Power", "W"),
                    Variable::new("hours_per_day", "Usage per day", "h"),
                    Variable::new("price_per_kwh", "Electricity price", "currency/kWh"),
                ],
                keywords: &["electricity", "power", "kwh", "energy bill", "appliance"],
                source_module: "calculations/everyday/electricity_cost.rs",
            },
        }
    }
}

/// Generate `CALCULATORS.md` from the catalogue.
///
/// ```rust
/// let markdown = calc_core::catalog::generate_catalog_markdown();
/// assert!(markdown.contains("## Health"));
/// assert!(markdown.contains("BMI Calculator"));
/// ```
pub fn generate_catalog_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Calcora Calculator Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-catalog`

Every calculator on the site, grouped by category, with the formula it applies
and the JSON fields it accepts. Run any of them with
`POST /api/calculate/{slug}` or `calc_cli run {slug} --input '{...}'`.

---

"#,
    );

    let mut categories = Category::ALL.to_vec();
    categories.sort_by_key(|c| c.sort_order());

    for category in &categories {
        let calculators = CalculatorId::in_category(*category);
        if calculators.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for id in calculators {
            let meta = id.metadata();
            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Slug:** `{}`\n\n", meta.slug));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Inputs:**\n\n");
                output.push_str("| Field | Description | Units |\n");
                output.push_str("|-------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| `{}` | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Source:** [`{}`](calc_core/src/{})\n\n",
                meta.source_module, meta.source_module
            ));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Calculators:** {}\n- **Categories:** {}\n",
        CalculatorId::ALL.len(),
        categories.len()
    ));

    output
}
