//! Batch project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub batches: Vec<BatchDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchDef {
    pub id: String,
    pub name: String,
    /// Plastic charged per run, in kg.
    #[serde(default = "default_batch_size_kg")]
    pub batch_size_kg: f64,
    #[serde(default)]
    pub feedstock: FeedstockDef,
    #[serde(default)]
    pub reactor: ReactorDef,
    #[serde(default)]
    pub catalyst: CatalystDef,
    #[serde(default)]
    pub layout: LayoutDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycle: Option<RecycleDef>,
    #[serde(default)]
    pub economics: EconomicsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FeedstockDef {
    /// Single-polymer charge.
    Pure { polymer: String },
    /// Shredded blend; percentages must total 100.
    Mixed {
        hdpe_pct: f64,
        ldpe_pct: f64,
        pp_pct: f64,
    },
}

impl Default for FeedstockDef {
    fn default() -> Self {
        Self::Pure {
            polymer: "HDPE".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactorDef {
    /// Setpoint temperature in °C.
    #[serde(default = "default_reactor_temperature_c")]
    pub temperature_c: f64,
    /// Operating pressure in atm (recorded, not yet modeled).
    #[serde(default = "default_reactor_pressure_atm")]
    pub pressure_atm: f64,
}

impl Default for ReactorDef {
    fn default() -> Self {
        Self {
            temperature_c: default_reactor_temperature_c(),
            pressure_atm: default_reactor_pressure_atm(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalystDef {
    /// Catalyst key (e.g., "ZSM-5", "None").
    #[serde(default = "default_catalyst_type")]
    pub catalyst_type: String,
    /// Charge loaded into the reactor, in kg.
    #[serde(default = "default_catalyst_quantity_kg")]
    pub quantity_kg: f64,
    /// Remaining activity, 0-100.
    #[serde(default = "default_catalyst_efficiency_pct")]
    pub efficiency_pct: f64,
}

impl Default for CatalystDef {
    fn default() -> Self {
        Self {
            catalyst_type: default_catalyst_type(),
            quantity_kg: default_catalyst_quantity_kg(),
            efficiency_pct: default_catalyst_efficiency_pct(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutDef {
    /// Equipment sequence key (e.g., "S1: Basic").
    #[serde(default = "default_sequence")]
    pub sequence: String,
    /// Condenser stages in the train, 1-3.
    #[serde(default = "default_condenser_stages")]
    pub condenser_stages: u32,
    /// Vacuum pumps on the line, 2-3.
    #[serde(default = "default_vacuum_pumps")]
    pub vacuum_pumps: u32,
}

impl Default for LayoutDef {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            condenser_stages: default_condenser_stages(),
            vacuum_pumps: default_vacuum_pumps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecycleDef {
    /// Wax recycle passes, 1-3.
    #[serde(default = "default_max_recycles")]
    pub max_recycles: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precracker: Option<PrecrackerDef>,
}

impl Default for RecycleDef {
    fn default() -> Self {
        Self {
            max_recycles: default_max_recycles(),
            precracker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecrackerDef {
    /// Pre-cracker operating temperature in °C.
    #[serde(default = "default_precracker_temperature_c")]
    pub temperature_c: f64,
    /// Conversion boost on the recovered wax, >= 1.0.
    #[serde(default = "default_catalyst_boost")]
    pub catalyst_boost: f64,
}

impl Default for PrecrackerDef {
    fn default() -> Self {
        Self {
            temperature_c: default_precracker_temperature_c(),
            catalyst_boost: default_catalyst_boost(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomicsDef {
    /// Feedstock purchase cost, per kg of plastic.
    #[serde(default = "default_feed_cost_per_kg")]
    pub feed_cost_per_kg: f64,
    /// Heating energy cost, per kg of plastic.
    #[serde(default = "default_energy_cost_per_kg")]
    pub energy_cost_per_kg: f64,
    /// Catalyst purchase cost, per kg of charge.
    #[serde(default = "default_catalyst_cost_per_kg")]
    pub catalyst_cost_per_kg: f64,
    /// Batches a catalyst charge survives before replacement.
    #[serde(default = "default_catalyst_life_batches")]
    pub catalyst_life_batches: f64,
    /// Light diesel oil market price, per litre (recorded, not yet modeled).
    #[serde(default = "default_ldo_cost_per_l")]
    pub ldo_cost_per_l: f64,
    /// Labor rate, per hour (recorded, not yet modeled).
    #[serde(default = "default_labor_cost_per_hr")]
    pub labor_cost_per_hr: f64,
    /// Credit for burning non-condensable gas as reactor fuel, per kg.
    #[serde(default = "default_ncg_reuse_bonus_per_kg")]
    pub ncg_reuse_bonus_per_kg: f64,
    /// Pyrolysis oil selling price, per litre.
    #[serde(default = "default_oil_price_per_l")]
    pub oil_price_per_l: f64,
}

impl Default for EconomicsDef {
    fn default() -> Self {
        Self {
            feed_cost_per_kg: default_feed_cost_per_kg(),
            energy_cost_per_kg: default_energy_cost_per_kg(),
            catalyst_cost_per_kg: default_catalyst_cost_per_kg(),
            catalyst_life_batches: default_catalyst_life_batches(),
            ldo_cost_per_l: default_ldo_cost_per_l(),
            labor_cost_per_hr: default_labor_cost_per_hr(),
            ncg_reuse_bonus_per_kg: default_ncg_reuse_bonus_per_kg(),
            oil_price_per_l: default_oil_price_per_l(),
        }
    }
}

fn default_batch_size_kg() -> f64 {
    10_000.0
}

fn default_reactor_temperature_c() -> f64 {
    450.0
}

fn default_reactor_pressure_atm() -> f64 {
    1.0
}

fn default_catalyst_type() -> String {
    "ZSM-5".to_string()
}

fn default_catalyst_quantity_kg() -> f64 {
    500.0
}

fn default_catalyst_efficiency_pct() -> f64 {
    90.0
}

fn default_sequence() -> String {
    "S1: Basic".to_string()
}

fn default_condenser_stages() -> u32 {
    1
}

fn default_vacuum_pumps() -> u32 {
    2
}

fn default_max_recycles() -> u32 {
    2
}

fn default_precracker_temperature_c() -> f64 {
    420.0
}

fn default_catalyst_boost() -> f64 {
    1.2
}

fn default_feed_cost_per_kg() -> f64 {
    10.0
}

fn default_energy_cost_per_kg() -> f64 {
    1.5
}

fn default_catalyst_cost_per_kg() -> f64 {
    45.0
}

fn default_catalyst_life_batches() -> f64 {
    20.0
}

fn default_ldo_cost_per_l() -> f64 {
    52.0
}

fn default_labor_cost_per_hr() -> f64 {
    70.0
}

fn default_ncg_reuse_bonus_per_kg() -> f64 {
    15.0
}

fn default_oil_price_per_l() -> f64 {
    60.0
}
