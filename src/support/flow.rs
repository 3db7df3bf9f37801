//! A fluid state bound to a flow rate.
//!
//! A [`Flow`] owns its fluid state and stores the mass flow rate; the
//! volumetric rate is derived from the fluid density. For humid air the
//! mass flow includes the water vapour, and [`Flow::dry_air_mass_flow`]
//! recovers the dry-air basis that process balances are written on.

mod builder;

pub use builder::FlowBuilder;

use uom::si::{
    f64::{MassRate, Power, VolumeRate},
    mass_rate::kilogram_per_second,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    thermo::{
        PropertyError,
        capability::{HasDensity, HasDryAirBasis, HasEnthalpy},
        fluid::{DryAir, HumidAir, LiquidWater, WaterVapour},
        limits::{MASS_FLOW_MAX, check_mass_flow, check_range},
    },
};

pub type FlowOfDryAir = Flow<DryAir>;
pub type FlowOfWaterVapour = Flow<WaterVapour>;
pub type FlowOfLiquidWater = Flow<LiquidWater>;
pub type FlowOfHumidAir = Flow<HumidAir>;

/// A fluid state moving at a non-negative mass flow rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flow<F> {
    fluid: F,
    mass_flow: Constrained<MassRate, NonNegative>,
}

impl<F: HasDensity> Flow<F> {
    /// Creates a flow from its mass flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if the rate is negative, not a
    /// number, or above [`MASS_FLOW_MAX`].
    pub fn from_mass_flow(fluid: F, mass_flow: MassRate) -> Result<Self, PropertyError> {
        let mass_flow = check_mass_flow("mass flow", mass_flow)?;
        Ok(Self {
            fluid,
            mass_flow: NonNegative::new(mass_flow)?,
        })
    }

    /// Creates a flow from its volumetric flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if the rate is negative or its
    /// mass equivalent exceeds [`MASS_FLOW_MAX`].
    pub fn from_volumetric_flow(
        fluid: F,
        volumetric_flow: VolumeRate,
    ) -> Result<Self, PropertyError> {
        let density = fluid.density();
        check_range(
            "volumetric flow",
            volumetric_flow.get::<cubic_meter_per_second>(),
            0.0,
            MASS_FLOW_MAX / density.get::<kilogram_per_cubic_meter>(),
            "m³/s",
        )?;
        Self::from_mass_flow(fluid, volumetric_flow * density)
    }

    #[must_use]
    pub fn builder() -> FlowBuilder<F> {
        FlowBuilder::default()
    }

    #[must_use]
    pub fn fluid(&self) -> &F {
        &self.fluid
    }

    #[must_use]
    pub fn into_fluid(self) -> F {
        self.fluid
    }

    #[must_use]
    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow.into_inner()
    }

    /// Returns `V̇ = ṁ / ρ`.
    #[must_use]
    pub fn volumetric_flow(&self) -> VolumeRate {
        self.mass_flow() / self.fluid.density()
    }

    /// Returns the same mass flow carrying a different fluid state.
    #[must_use]
    pub fn with_fluid(&self, fluid: F) -> Self {
        Self {
            fluid,
            mass_flow: self.mass_flow,
        }
    }

    /// Returns the same fluid state at a different mass flow rate.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Flow::from_mass_flow`].
    pub fn with_mass_flow(&self, mass_flow: MassRate) -> Result<Self, PropertyError>
    where
        F: Clone,
    {
        Self::from_mass_flow(self.fluid.clone(), mass_flow)
    }
}

impl<F: HasDensity + HasDryAirBasis> Flow<F> {
    /// Creates a flow from its dry-air mass flow, `ṁ = ṁ_da·(1 + x)`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if either rate is negative or
    /// above [`MASS_FLOW_MAX`], or [`PropertyError::InvalidState`] if the
    /// fluid holds no dry air.
    pub fn from_dry_air_mass_flow(
        fluid: F,
        dry_air_mass_flow: MassRate,
    ) -> Result<Self, PropertyError> {
        let dry_air_mass_flow = check_mass_flow("dry air mass flow", dry_air_mass_flow)?;
        let Some(mass_per_dry_air) = fluid.mass_per_dry_air() else {
            return Err(PropertyError::InvalidState {
                context: "fluid holds no dry air".to_owned(),
                value: dry_air_mass_flow.get::<kilogram_per_second>(),
                limit: 0.0,
            });
        };
        Self::from_mass_flow(fluid, dry_air_mass_flow * mass_per_dry_air.get::<ratio>())
    }
}

impl Flow<HumidAir> {
    /// Returns `ṁ_da = ṁ / (1 + x)`.
    #[must_use]
    pub fn dry_air_mass_flow(&self) -> MassRate {
        self.mass_flow() / (1.0 + self.fluid.humidity_ratio().get::<ratio>())
    }

    /// Returns `ṁ_v = ṁ_da·x`.
    #[must_use]
    pub fn water_vapour_mass_flow(&self) -> MassRate {
        self.dry_air_mass_flow() * self.fluid.humidity_ratio().get::<ratio>()
    }

    /// Returns the enthalpy carried by the stream, `ṁ_da·h`.
    #[must_use]
    pub fn enthalpy_flow(&self) -> Power {
        self.dry_air_mass_flow() * self.fluid.enthalpy()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;
    use uom::si::{
        f64::{Pressure, Ratio, ThermodynamicTemperature},
        mass_rate::kilogram_per_second,
        pressure::pascal,
        ratio::percent,
        thermodynamic_temperature::degree_celsius,
    };

    proptest! {
        #[test]
        fn construction_routes_agree(
            t in -40.0_f64..60.0,
            rh in 0.0_f64..100.0,
            m in 0.0_f64..1.0e4,
        ) {
            let air = HumidAir::from_relative_humidity(
                Pressure::new::<pascal>(101_325.0),
                ThermodynamicTemperature::new::<degree_celsius>(t),
                Ratio::new::<percent>(rh),
            ).unwrap();

            let by_mass = Flow::from_mass_flow(air, MassRate::new::<kilogram_per_second>(m)).unwrap();
            let by_volume = Flow::from_volumetric_flow(air, by_mass.volumetric_flow()).unwrap();
            let by_dry_air = Flow::from_dry_air_mass_flow(air, by_mass.dry_air_mass_flow()).unwrap();

            let tol = 1e-9 * m.max(1.0);
            prop_assert!((by_volume.mass_flow().get::<kilogram_per_second>() - m).abs() <= tol);
            prop_assert!((by_dry_air.mass_flow().get::<kilogram_per_second>() - m).abs() <= tol);
        }
    }
}
