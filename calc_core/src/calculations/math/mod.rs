//! # Math Calculators
//!
//! Geometry, percentages, statistics, equation solving and number theory.

pub mod area;
pub mod circle;
pub mod equations;
pub mod fractions;
pub mod gcd_lcm;
pub mod percent;
pub mod power_root;
pub mod proportion;
pub mod pythagorean;
pub mod statistics;
pub mod volume;

pub use area::{AreaInput, AreaResult};
pub use circle::{CircleInput, CircleResult};
pub use equations::{EquationInput, EquationResult, Roots};
pub use fractions::{Fraction, FractionInput, FractionOp, FractionResult};
pub use gcd_lcm::{GcdLcmInput, GcdLcmResult};
pub use percent::{PercentInput, PercentResult};
pub use power_root::{PowerRootInput, PowerRootResult};
pub use proportion::{ProportionInput, ProportionResult};
pub use pythagorean::{PythagoreanInput, PythagoreanResult};
pub use statistics::{StatisticsInput, StatisticsResult};
pub use volume::{VolumeInput, VolumeResult};
