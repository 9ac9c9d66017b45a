use super::{
    flow::WaterFlow,
    panel::{DimensionKey, DimensionPanel},
    rain::RainField,
    stats::SimulationStats,
    ticker::MonthTicker,
    MONTHS,
};
use crate::{config, error::AppError, error::FieldError, estimation::ClimateConstants};
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SimPhase {
    #[default]
    Selection,
    Input,
    Simulation,
    Analysis,
}

impl Display for SimPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = match self {
            SimPhase::Selection => "selection",
            SimPhase::Input => "input",
            SimPhase::Simulation => "simulation",
            SimPhase::Analysis => "analysis",
        };
        f.write_str(phase)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Individual,
    Township,
}

impl PropertyKind {
    pub fn default_dimensions(self) -> Dimensions {
        match self {
            PropertyKind::Individual => Dimensions { length: 10., width: 8., height: 3. },
            PropertyKind::Township => Dimensions { length: 30., width: 25., height: 4. },
        }
    }
}

impl std::str::FromStr for PropertyKind {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "individual" => Ok(PropertyKind::Individual),
            "township" => Ok(PropertyKind::Township),
            _ => Err("Invalid property kind"),
        }
    }
}

/// feet
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationData {
    pub property_kind: Option<PropertyKind>,
    pub dimensions: Dimensions,
    pub location: String,
    /// 1..=12
    pub current_month: u8,
    pub is_playing: bool,
    pub speed: f64,
}

impl Default for SimulationData {
    fn default() -> Self {
        Self {
            property_kind: None,
            dimensions: Dimensions::default(),
            location: String::new(),
            current_month: 1,
            is_playing: false,
            speed: 1.,
        }
    }
}

impl SimulationData {
    /// Stops at December.
    pub fn advance_month(&mut self) -> Option<u8> {
        if self.current_month < MONTHS {
            self.current_month += 1;
            Some(self.current_month)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SimSignal {
    SelectProperty(PropertyKind),
    UpdateDimension(DimensionKey, String),
    SetLocation(String),
    SubmitDimensions,
    Toggle,
    Reset,
    Analyze,
    Exit,
}

impl Display for SimSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimSignal::SelectProperty(kind) => write!(f, "select-property({:?})", kind),
            SimSignal::UpdateDimension(key, _) => write!(f, "update-dimension({})", key.field()),
            SimSignal::SetLocation(_) => f.write_str("set-location"),
            SimSignal::SubmitDimensions => f.write_str("submit-dimensions"),
            SimSignal::Toggle => f.write_str("toggle"),
            SimSignal::Reset => f.write_str("reset"),
            SimSignal::Analyze => f.write_str("analyze"),
            SimSignal::Exit => f.write_str("exit"),
        }
    }
}

impl std::str::FromStr for SimSignal {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "toggle" => Ok(SimSignal::Toggle),
            "reset" => Ok(SimSignal::Reset),
            "analyze" => Ok(SimSignal::Analyze),
            _ => Err("Invalid simulation command"),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RainSummary {
    pub particle_count: usize,
    pub opacity: f64,
    pub size: f64,
}

/// Live figures under the dimension inputs.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelFigures {
    pub catchment_area: f64,
    pub estimated_annual_harvest: u64,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    pub phase: SimPhase,
    pub data: SimulationData,
    pub month_name: &'static str,
    pub panel: Option<PanelFigures>,
    pub panel_errors: Vec<FieldError>,
    pub flow: Option<WaterFlow>,
    pub stats: Option<SimulationStats>,
    pub rain: Option<RainSummary>,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    pub phase: SimPhase,
    pub data: SimulationData,
    pub panel: Option<DimensionPanel>,
    pub ticker: MonthTicker,
    pub rain: Option<RainField<StdRng>>,
    pub cfg: config::Simulation,
    pub climate: ClimateConstants,
    seed: u64,
}

impl Simulation {
    pub fn new(cfg: config::Simulation, climate: ClimateConstants, seed: u64) -> Self {
        Self {
            phase: SimPhase::Selection,
            data: SimulationData::default(),
            panel: None,
            ticker: MonthTicker::new(cfg.month_interval_ms),
            rain: None,
            cfg,
            climate,
            seed,
        }
    }

    pub fn handle_signal(&mut self, signal: SimSignal) -> Result<(), AppError> {
        match (self.phase, signal) {
            (SimPhase::Selection, SimSignal::SelectProperty(kind)) => {
                self.data.property_kind = Some(kind);
                self.panel = Some(DimensionPanel::new(kind));
                self.trans_phase(SimPhase::Input);
            }
            (SimPhase::Input, SimSignal::UpdateDimension(key, text)) => {
                self.panel_mut()?.update_dimension(key, &text);
            }
            (SimPhase::Input, SimSignal::SetLocation(location)) => {
                self.panel_mut()?.set_location(&location);
            }
            (SimPhase::Input, SimSignal::SubmitDimensions) => {
                let panel = self.panel_mut()?;
                panel.validate()?;
                let (dimensions, location) = (panel.dimensions, panel.location.clone());
                self.data.dimensions = dimensions;
                self.data.location = location;
                self.trans_phase(SimPhase::Simulation);
            }
            (SimPhase::Simulation, SimSignal::Toggle) => {
                self.data.is_playing = !self.data.is_playing;
                self.refresh_rain();
                info!(playing = self.data.is_playing, month = self.data.current_month, "Simulation toggled.");
            }
            (SimPhase::Simulation | SimPhase::Analysis, SimSignal::Reset) => {
                self.data.current_month = 1;
                self.data.is_playing = false;
                self.ticker.reset();
                self.refresh_rain();
                info!("Simulation reset to month 1.");
            }
            (SimPhase::Simulation, SimSignal::Analyze) => {
                self.data.is_playing = false;
                self.refresh_rain();
                self.trans_phase(SimPhase::Analysis);
            }
            (_, SimSignal::Exit) => {
                info!(from = %self.phase, "Leaving simulation.");
                *self = Simulation::new(self.cfg, self.climate, self.seed);
            }
            (phase, signal) => {
                debug!(phase = %phase, signal = %signal, "Signal ignored in current phase.");
                return Err(AppError::invalid_transition(phase, signal));
            }
        }
        Ok(())
    }

    fn panel_mut(&mut self) -> Result<&mut DimensionPanel, AppError> {
        self.panel.as_mut().ok_or_else(|| AppError::SimulationError("input phase without a dimension panel".to_owned()))
    }

    fn trans_phase(&mut self, phase: SimPhase) {
        info!(from = %self.phase, to = %phase, "Simulation phase change.");
        self.phase = phase;
    }

    /// Called once per frame. Only advances while the simulation phase is playing.
    pub fn tick(&mut self, now: i64) -> Option<u8> {
        if self.phase != SimPhase::Simulation {
            self.ticker.skip(now);
            return None;
        }
        let changed = self.ticker.tick(now, &mut self.data);
        if let Some(month) = changed {
            info!(month, "Simulation month advanced.");
            self.refresh_rain();
        }
        if let Some(rain) = self.rain.as_mut() {
            rain.step();
        }
        trace!(month = self.data.current_month, "Simulation frame.");
        changed
    }

    fn refresh_rain(&mut self) {
        self.rain = (self.phase == SimPhase::Simulation && self.data.is_playing).then(|| {
            RainField::seeded(
                self.seed ^ self.data.current_month as u64,
                self.cfg.rain_intensity,
                self.data.current_month,
                self.data.dimensions,
            )
        });
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        let showing_results = matches!(self.phase, SimPhase::Simulation | SimPhase::Analysis);
        SimulationSnapshot {
            phase: self.phase,
            data: self.data.clone(),
            month_name: super::month_name(self.data.current_month),
            panel: self.panel.as_ref().filter(|_| self.phase == SimPhase::Input).map(|panel| PanelFigures {
                catchment_area: panel.catchment_area(),
                estimated_annual_harvest: panel.estimated_annual_harvest(&self.climate),
            }),
            panel_errors: self.panel.as_ref().map(|p| p.errors.clone()).unwrap_or_default(),
            flow: showing_results.then(|| {
                WaterFlow::compute(self.data.dimensions, self.data.current_month, self.cfg.tank_capacity_liters)
            }),
            stats: showing_results.then(|| SimulationStats::compute(&self.data)),
            rain: self.rain.as_ref().map(|rain| RainSummary {
                particle_count: rain.particles.len(),
                opacity: rain.opacity(),
                size: rain.size(),
            }),
        }
    }
}
