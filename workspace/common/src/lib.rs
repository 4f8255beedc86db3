//! Transport types shared between the prediction client, the renderers and the CLI.
//! These structs mirror the prediction API's request/response payloads field for field,
//! so (de)serialization never needs hand-written mapping code.

mod prediction;
mod series;

pub use prediction::{Interval, PredictionResult};
pub use series::{
    AgeOfBuildingPredictions, AgeSeriesPoint, Bounds, ChronicPredictions, ChronicSeriesPoint,
    SeriesPoint,
};

use serde::{Deserialize, Serialize};

// ===================== Requests =====================

/// Apartment attributes sent to every prediction endpoint.
///
/// The serialized key names are the ones the prediction API expects, including its
/// inconsistent casing (`sizeSquareMeters`, `AppCountOfBuilding`, `floornumbers`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApartmentFeatures {
    pub room_class: u32,
    #[serde(rename = "sizeSquareMeters")]
    pub size_square_meters: u32,
    #[serde(rename = "AppCountOfBuilding")]
    pub app_count_of_building: u32,
    #[serde(rename = "floornumbers")]
    pub floor_number: u32,
    pub penthouse: bool,
    #[serde(rename = "washingmachine")]
    pub washing_machine: bool,
    pub elevator: bool,
    pub garden: bool,
    #[serde(rename = "isfirstrent")]
    pub is_first_rent: bool,
    #[serde(rename = "floorlaminate")]
    pub floor_laminate: bool,
    pub renovate: bool,
    #[serde(rename = "balconyterrace")]
    pub balcony_terrace: bool,
    #[serde(rename = "ageofbuilding")]
    pub age_of_building: u32,
}

/// Request body for `/predictCH`, `/predictCHChronic` and `/predictCHAgeOfBuilding`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub address: String,
    #[serde(rename = "data")]
    pub features: ApartmentFeatures,
}

impl PredictionRequest {
    pub fn new(address: impl Into<String>, features: ApartmentFeatures) -> Self {
        Self {
            address: address.into(),
            features,
        }
    }
}
