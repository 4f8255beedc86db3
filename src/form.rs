use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use common::{ApartmentFeatures, PredictionRequest};
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

pub const DEFAULT_ADDRESS: &str = "Marktgasse 28, Bülach";

/// Apartment details as entered by the user.
///
/// Field ranges match what the prediction model was trained on.
#[derive(Debug, Clone, PartialEq, Args, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct ApartmentForm {
    /// Where is the apartment located?
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,

    /// Number of rooms (1.0 to 5.5 in steps of 0.5)
    #[arg(long, default_value_t = 2.5)]
    #[validate(range(min = 1.0, max = 5.5))]
    pub rooms: f64,

    /// Size in square meters
    #[arg(long = "size", default_value_t = 70)]
    #[validate(range(min = 20, max = 300))]
    #[serde(alias = "size")]
    pub size_square_meters: u32,

    /// Number of apartments in the building
    #[arg(long = "apartments", default_value_t = 8)]
    #[validate(range(min = 1, max = 50))]
    #[serde(alias = "apartments")]
    pub app_count_of_building: u32,

    /// Floor of the apartment
    #[arg(long = "floor", default_value_t = 2)]
    #[validate(range(min = 0, max = 20))]
    #[serde(alias = "floor")]
    pub floor_number: u32,

    /// Age of the building in years
    #[arg(long = "age", default_value_t = 5)]
    #[validate(range(min = 0, max = 100))]
    #[serde(alias = "age")]
    pub age_of_building: u32,

    /// Is it a penthouse?
    #[arg(long)]
    pub penthouse: bool,

    /// Has a washing machine?
    #[arg(long)]
    pub washing_machine: bool,

    /// Has an elevator?
    #[arg(long)]
    pub elevator: bool,

    /// Has a garden?
    #[arg(long)]
    pub garden: bool,

    /// Is it the first rent?
    #[arg(long)]
    pub first_rent: bool,

    /// Has laminate floor?
    #[arg(long)]
    pub floor_laminate: bool,

    /// Is it renovated?
    #[arg(long)]
    pub renovated: bool,

    /// Has balcony or terrace?
    #[arg(long)]
    pub balcony_terrace: bool,
}

impl Default for ApartmentForm {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            rooms: 2.5,
            size_square_meters: 70,
            app_count_of_building: 8,
            floor_number: 2,
            age_of_building: 5,
            penthouse: false,
            washing_machine: false,
            elevator: false,
            garden: false,
            first_rent: false,
            floor_laminate: false,
            renovated: false,
            balcony_terrace: false,
        }
    }
}

impl ApartmentForm {
    /// Validate the form and build the request sent to every prediction endpoint.
    pub fn to_request(&self) -> Result<PredictionRequest> {
        let address = self.address.trim();
        let form = Self {
            address: address.to_string(),
            ..self.clone()
        };
        form.validate().context("Invalid apartment details")?;
        if (self.rooms * 2.0).fract() != 0.0 {
            bail!(
                "Invalid apartment details: rooms must be a multiple of 0.5, got {}",
                self.rooms
            );
        }

        let features = ApartmentFeatures {
            room_class: self.rooms.floor() as u32,
            size_square_meters: self.size_square_meters,
            app_count_of_building: self.app_count_of_building,
            floor_number: self.floor_number,
            penthouse: self.penthouse,
            washing_machine: self.washing_machine,
            elevator: self.elevator,
            garden: self.garden,
            is_first_rent: self.first_rent,
            floor_laminate: self.floor_laminate,
            renovate: self.renovated,
            balcony_terrace: self.balcony_terrace,
            age_of_building: self.age_of_building,
        };
        debug!(?features, "Built apartment features");

        Ok(PredictionRequest::new(address, features))
    }
}

/// Form values from flags, or from a YAML/JSON file when `--input` is given.
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    #[command(flatten)]
    pub form: ApartmentForm,

    /// Read apartment details from a YAML or JSON file instead of the flags
    ///
    /// Keys are the long flag names with underscores (`size`, `apartments`, `floor`, `age`,
    /// `first_rent`, ...) or the full field names (`size_square_meters`, ...). Missing keys
    /// take their defaults; unknown keys are rejected.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl FormArgs {
    pub fn resolve(self) -> Result<ApartmentForm> {
        match self.input {
            Some(path) => {
                debug!("Reading apartment details from {}", path.display());
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_form(&raw).with_context(|| format!("Failed to parse {}", path.display()))
            }
            None => Ok(self.form),
        }
    }
}

/// YAML is a superset of JSON, so one parser covers both file formats.
pub fn parse_form(raw: &str) -> Result<ApartmentForm> {
    Ok(serde_yaml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_builds_default_request() {
        let request = ApartmentForm::default().to_request().unwrap();

        assert_eq!(request.address, DEFAULT_ADDRESS);
        assert_eq!(request.features.room_class, 2);
        assert_eq!(request.features.size_square_meters, 70);
        assert_eq!(request.features.app_count_of_building, 8);
        assert_eq!(request.features.floor_number, 2);
        assert_eq!(request.features.age_of_building, 5);
        assert!(!request.features.penthouse);
    }

    #[test]
    fn test_room_class_is_floor_of_rooms() {
        for (rooms, class) in [(1.0, 1), (1.5, 1), (3.5, 3), (5.5, 5)] {
            let form = ApartmentForm {
                rooms,
                ..Default::default()
            };
            assert_eq!(form.to_request().unwrap().features.room_class, class);
        }
    }

    #[test]
    fn test_flags_map_to_features() {
        let form = ApartmentForm {
            first_rent: true,
            renovated: true,
            balcony_terrace: true,
            ..Default::default()
        };
        let features = form.to_request().unwrap().features;
        assert!(features.is_first_rent);
        assert!(features.renovate);
        assert!(features.balcony_terrace);
        assert!(!features.garden);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let cases = [
            ApartmentForm {
                rooms: 6.0,
                ..Default::default()
            },
            ApartmentForm {
                rooms: 0.5,
                ..Default::default()
            },
            ApartmentForm {
                rooms: 2.25,
                ..Default::default()
            },
            ApartmentForm {
                size_square_meters: 19,
                ..Default::default()
            },
            ApartmentForm {
                app_count_of_building: 0,
                ..Default::default()
            },
            ApartmentForm {
                floor_number: 21,
                ..Default::default()
            },
            ApartmentForm {
                age_of_building: 101,
                ..Default::default()
            },
            ApartmentForm {
                address: String::new(),
                ..Default::default()
            },
            ApartmentForm {
                address: "   ".to_string(),
                ..Default::default()
            },
        ];

        for form in cases {
            assert!(form.to_request().is_err(), "{:?} should be rejected", form);
        }
    }

    #[test]
    fn test_parse_yaml_form_with_defaults() {
        let raw = "address: Bahnhofstrasse 1, Zürich\nrooms: 3.5\nelevator: true\n";
        let form = parse_form(raw).unwrap();

        assert_eq!(form.address, "Bahnhofstrasse 1, Zürich");
        assert_eq!(form.rooms, 3.5);
        assert!(form.elevator);
        assert_eq!(form.size_square_meters, 70);
    }

    #[test]
    fn test_parse_json_form() {
        let raw = r#"{"address": "Seestrasse 5, Thalwil", "size_square_meters": 110, "garden": true}"#;
        let form = parse_form(raw).unwrap();

        assert_eq!(form.size_square_meters, 110);
        assert!(form.garden);
        assert_eq!(form.rooms, 2.5);
    }

    #[test]
    fn test_parse_form_accepts_flag_names() {
        let raw = "size: 150\napartments: 30\nfloor: 9\nage: 60\nfirst_rent: true\n";
        let form = parse_form(raw).unwrap();

        assert_eq!(form.size_square_meters, 150);
        assert_eq!(form.app_count_of_building, 30);
        assert_eq!(form.floor_number, 9);
        assert_eq!(form.age_of_building, 60);
        assert!(form.first_rent);
    }

    #[test]
    fn test_parse_form_rejects_unknown_keys() {
        assert!(parse_form("address: Seestrasse 5, Thalwil\nsquare_meters: 110\n").is_err());
        assert!(parse_form(r#"{"size": 90, "lift": true}"#).is_err());
    }

    #[test]
    fn test_address_is_trimmed_before_sending() {
        let form = ApartmentForm {
            address: "  Seestrasse 5, Thalwil ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_request().unwrap().address, "Seestrasse 5, Thalwil");
    }

    #[test]
    fn test_resolve_reads_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apartment.yaml");
        fs::write(&path, "address: Dorfstrasse 2, Uster\nage_of_building: 40\n").unwrap();

        let args = FormArgs {
            form: ApartmentForm::default(),
            input: Some(path),
        };
        let form = args.resolve().unwrap();
        assert_eq!(form.address, "Dorfstrasse 2, Uster");
        assert_eq!(form.age_of_building, 40);
    }

    #[test]
    fn test_resolve_missing_file_fails() {
        let args = FormArgs {
            form: ApartmentForm::default(),
            input: Some(PathBuf::from("/nonexistent/apartment.yaml")),
        };
        assert!(args.resolve().is_err());
    }
}
