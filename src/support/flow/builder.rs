use uom::si::f64::{MassRate, VolumeRate};

use crate::support::thermo::{
    PropertyError,
    capability::{HasDensity, HasDryAirBasis},
};

use super::Flow;

/// Collects a fluid state and exactly one flow rate before validation.
///
/// The rate may be given as a mass flow, a volumetric flow, or a dry-air mass
/// flow for fluids that carry dry air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowBuilder<F> {
    fluid: Option<F>,
    mass_flow: Option<MassRate>,
    volumetric_flow: Option<VolumeRate>,
    dry_air_mass_flow: Option<MassRate>,
}

impl<F> Default for FlowBuilder<F> {
    fn default() -> Self {
        Self {
            fluid: None,
            mass_flow: None,
            volumetric_flow: None,
            dry_air_mass_flow: None,
        }
    }
}

impl<F: HasDensity + HasDryAirBasis> FlowBuilder<F> {
    #[must_use]
    pub fn fluid(mut self, fluid: F) -> Self {
        self.fluid = Some(fluid);
        self
    }

    #[must_use]
    pub fn mass_flow(mut self, mass_flow: MassRate) -> Self {
        self.mass_flow = Some(mass_flow);
        self
    }

    #[must_use]
    pub fn volumetric_flow(mut self, volumetric_flow: VolumeRate) -> Self {
        self.volumetric_flow = Some(volumetric_flow);
        self
    }

    #[must_use]
    pub fn dry_air_mass_flow(mut self, dry_air_mass_flow: MassRate) -> Self {
        self.dry_air_mass_flow = Some(dry_air_mass_flow);
        self
    }

    /// Validates the inputs and builds the flow.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MissingArgument`] if the fluid or every rate
    /// is unset, [`PropertyError::ConflictingArguments`] if more than one rate
    /// is set, or the constructor's error if the rate is invalid.
    pub fn build(self) -> Result<Flow<F>, PropertyError> {
        let fluid = PropertyError::require(self.fluid, "fluid")?;

        match (self.mass_flow, self.volumetric_flow, self.dry_air_mass_flow) {
            (Some(mass_flow), None, None) => Flow::from_mass_flow(fluid, mass_flow),
            (None, Some(volumetric_flow), None) => {
                Flow::from_volumetric_flow(fluid, volumetric_flow)
            }
            (None, None, Some(dry_air_mass_flow)) => {
                Flow::from_dry_air_mass_flow(fluid, dry_air_mass_flow)
            }
            (None, None, None) => Err(PropertyError::MissingArgument {
                name: "mass flow, volumetric flow or dry air mass flow",
            }),
            (Some(_), Some(_), _) => Err(PropertyError::ConflictingArguments {
                first: "mass flow",
                second: "volumetric flow",
            }),
            (Some(_), None, Some(_)) => Err(PropertyError::ConflictingArguments {
                first: "mass flow",
                second: "dry air mass flow",
            }),
            (None, Some(_), Some(_)) => Err(PropertyError::ConflictingArguments {
                first: "volumetric flow",
                second: "dry air mass flow",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, Ratio, ThermodynamicTemperature},
        mass_rate::kilogram_per_second,
        pressure::pascal,
        ratio::percent,
        thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_second,
    };

    use crate::support::{
        flow::{FlowOfHumidAir, FlowOfLiquidWater},
        thermo::{
            ErrorKind,
            fluid::{HumidAir, LiquidWater},
        },
    };

    fn water() -> LiquidWater {
        LiquidWater::new(
            Pressure::new::<pascal>(200_000.0),
            ThermodynamicTemperature::new::<degree_celsius>(12.0),
        )
        .unwrap()
    }

    #[test]
    fn builds_from_either_rate() {
        let by_mass = FlowOfLiquidWater::builder()
            .fluid(water())
            .mass_flow(MassRate::new::<kilogram_per_second>(0.5))
            .build()
            .unwrap();
        let by_volume = FlowOfLiquidWater::builder()
            .fluid(water())
            .volumetric_flow(by_mass.volumetric_flow())
            .build()
            .unwrap();

        let difference = (by_volume.mass_flow() - by_mass.mass_flow()).get::<kilogram_per_second>();
        assert!(difference.abs() < 1e-12);
    }

    #[test]
    fn absent_inputs_are_missing_arguments() {
        let no_fluid = FlowOfLiquidWater::builder()
            .mass_flow(MassRate::new::<kilogram_per_second>(-1.0))
            .build()
            .unwrap_err();
        assert_eq!(no_fluid, PropertyError::MissingArgument { name: "fluid" });

        let no_rate = FlowOfLiquidWater::builder().fluid(water()).build().unwrap_err();
        assert_eq!(no_rate.kind(), ErrorKind::MissingArgument);

        let negative = FlowOfLiquidWater::builder()
            .fluid(water())
            .volumetric_flow(VolumeRate::new::<cubic_meter_per_second>(-0.1))
            .build()
            .unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::Argument);
    }

    fn winter_air() -> HumidAir {
        HumidAir::from_relative_humidity(
            Pressure::new::<pascal>(98_700.0),
            ThermodynamicTemperature::new::<degree_celsius>(10.0),
            Ratio::new::<percent>(60.0),
        )
        .unwrap()
    }

    #[test]
    fn builds_humid_air_from_dry_air_flow() {
        let dry_air = MassRate::new::<kilogram_per_second>(10_000.0 / 3600.0);
        let built = FlowOfHumidAir::builder()
            .fluid(winter_air())
            .dry_air_mass_flow(dry_air)
            .build()
            .unwrap();

        assert_eq!(
            built,
            FlowOfHumidAir::from_dry_air_mass_flow(winter_air(), dry_air).unwrap()
        );

        let error = FlowOfHumidAir::builder()
            .dry_air_mass_flow(dry_air)
            .build()
            .unwrap_err();
        assert_eq!(error, PropertyError::MissingArgument { name: "fluid" });

        let error = FlowOfHumidAir::builder().fluid(winter_air()).build().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingArgument);
    }

    #[test]
    fn more_than_one_rate_is_rejected() {
        let mass_flow = MassRate::new::<kilogram_per_second>(1.0);

        let error = FlowOfLiquidWater::builder()
            .fluid(water())
            .mass_flow(mass_flow)
            .volumetric_flow(VolumeRate::new::<cubic_meter_per_second>(100.0))
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            PropertyError::ConflictingArguments {
                first: "mass flow",
                second: "volumetric flow",
            }
        );
        assert_eq!(error.kind(), ErrorKind::Argument);

        let error = FlowOfHumidAir::builder()
            .fluid(winter_air())
            .mass_flow(mass_flow)
            .dry_air_mass_flow(mass_flow)
            .build()
            .unwrap_err();
        assert!(matches!(error, PropertyError::ConflictingArguments { .. }));
    }

    #[test]
    fn water_has_no_dry_air_basis() {
        let error = FlowOfLiquidWater::builder()
            .fluid(water())
            .dry_air_mass_flow(MassRate::new::<kilogram_per_second>(1.0))
            .build()
            .unwrap_err();
        assert!(matches!(error, PropertyError::InvalidState { .. }));
    }
}
