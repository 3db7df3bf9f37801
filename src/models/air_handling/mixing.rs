//! Adiabatic mixing of humid-air streams.

use tracing::{debug, trace};
use twine_core::Model;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassRate, Pressure, Ratio},
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    flow::FlowOfHumidAir,
    thermo::{
        PropertyError,
        capability::{HasEnthalpy, ThermoState},
        correlation::humid_air,
        fluid::HumidAir,
        inverse::{self, InverseConfig},
    },
    units::SpecificEnthalpy,
};

use super::{ProcessError, ProcessType};

#[derive(Debug, Clone, PartialEq)]
pub struct MixingResult {
    pub process_type: ProcessType,
    pub inlets: Vec<FlowOfHumidAir>,
    pub outlet: FlowOfHumidAir,
}

/// Adiabatic mixing.
///
/// Dry air, moisture and enthalpy are conserved. The outlet takes the lowest
/// inlet pressure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mixing {
    config: InverseConfig,
}

impl Mixing {
    #[must_use]
    pub fn new(config: InverseConfig) -> Self {
        Self { config }
    }

    /// Mixes `inlets` into a single stream.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MissingArgument`] when `inlets` is empty and
    /// [`ProcessError::Supersaturated`] when the mixed stream would fog.
    pub fn process(&self, inlets: &[FlowOfHumidAir]) -> Result<MixingResult, ProcessError> {
        let Some(first) = inlets.first() else {
            return Err(PropertyError::MissingArgument {
                name: "inlet flows",
            }
            .into());
        };

        let dry_air = inlets
            .iter()
            .fold(MassRate::new::<kilogram_per_second>(0.0), |total, inlet| {
                total + inlet.dry_air_mass_flow()
            });

        if dry_air.get::<kilogram_per_second>() == 0.0 {
            trace!(count = inlets.len(), "nothing to mix");
            return Ok(self.result(inlets, first.with_mass_flow(dry_air)?));
        }

        if inlets.iter().all(|inlet| inlet.fluid() == first.fluid()) {
            trace!(count = inlets.len(), "mixing identical states");
            let outlet = FlowOfHumidAir::from_dry_air_mass_flow(*first.fluid(), dry_air)?;
            return Ok(self.result(inlets, outlet));
        }

        let share = |inlet: &FlowOfHumidAir| {
            inlet.dry_air_mass_flow().get::<kilogram_per_second>()
                / dry_air.get::<kilogram_per_second>()
        };

        let humidity_ratio = inlets
            .iter()
            .fold(Ratio::new::<ratio>(0.0), |mixed, inlet| {
                mixed + inlet.fluid().humidity_ratio() * share(inlet)
            });
        let enthalpy = inlets.iter().fold(
            SpecificEnthalpy::new::<joule_per_kilogram>(0.0),
            |mixed, inlet| mixed + inlet.fluid().enthalpy() * share(inlet),
        );
        let pressure = inlets
            .iter()
            .map(|inlet| inlet.fluid().pressure())
            .fold(first.fluid().pressure(), |lowest: Pressure, p| {
                if p < lowest { p } else { lowest }
            });

        let temperature =
            inverse::temperature_from_enthalpy(enthalpy, humidity_ratio, &self.config)?;

        let limit = humid_air::max_humidity_ratio(pressure, temperature);
        if humidity_ratio > limit {
            return Err(ProcessError::Supersaturated {
                humidity_ratio: humidity_ratio.get::<ratio>(),
                limit: limit.get::<ratio>(),
            });
        }

        let air = HumidAir::from_humidity_ratio(pressure, temperature, humidity_ratio)?;
        debug!(
            count = inlets.len(),
            outlet_temperature = temperature.get::<degree_celsius>(),
            "mixing solved"
        );

        Ok(self.result(
            inlets,
            FlowOfHumidAir::from_dry_air_mass_flow(air, dry_air)?,
        ))
    }

    fn result(&self, inlets: &[FlowOfHumidAir], outlet: FlowOfHumidAir) -> MixingResult {
        MixingResult {
            process_type: ProcessType::Mixing,
            inlets: inlets.to_vec(),
            outlet,
        }
    }
}

impl Model for Mixing {
    type Input = Vec<FlowOfHumidAir>;
    type Output = MixingResult;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.process(input)
    }
}
