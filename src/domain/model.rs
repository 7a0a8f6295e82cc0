use serde::{Deserialize, Serialize};

/// Body of the gateway's `POST /cep` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepRequest {
    pub cep: String,
}

/// A resolved city. Only ever constructed with a non-empty name; an empty
/// locality from the directory provider is a not-found, not a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub city_name: String,
}

/// Current temperature as reported by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
}

/// The unique response shape returned to the original caller, unmodified
/// across the gateway hop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureResponse {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
    pub city: String,
}

impl TemperatureResponse {
    pub fn from_celsius(city: String, celsius: f64) -> Self {
        Self {
            temp_c: celsius,
            temp_f: celsius * 1.8 + 32.0,
            temp_k: celsius + 273.15,
            city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_celsius_to_fahrenheit_and_kelvin() {
        let resp = TemperatureResponse::from_celsius("São Paulo".to_string(), 22.0);
        assert_eq!(resp.temp_c, 22.0);
        assert_eq!(resp.temp_f, 22.0 * 1.8 + 32.0);
        assert_eq!(resp.temp_k, 295.15);
        assert_eq!(resp.city, "São Paulo");
    }

    #[test]
    fn conversion_holds_for_negative_and_zero() {
        for celsius in [-40.0, 0.0, 100.0] {
            let resp = TemperatureResponse::from_celsius("X".to_string(), celsius);
            assert_eq!(resp.temp_f, celsius * 1.8 + 32.0);
            assert_eq!(resp.temp_k, celsius + 273.15);
        }
    }

    #[test]
    fn response_uses_original_wire_field_names() {
        let resp = TemperatureResponse::from_celsius("Recife".to_string(), 30.0);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("temp_C").is_some());
        assert!(json.get("temp_F").is_some());
        assert!(json.get("temp_K").is_some());
        assert!(json.get("city").is_some());
    }
}
