use uom::{
    si::{ISQ, Quantity, SI, f64::DiffusionCoefficient},
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
///
/// For humid air the reference mass is the dry-air mass.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// [`uom`] names this dimension after mass diffusivity.
pub type KinematicViscosity = DiffusionCoefficient;
