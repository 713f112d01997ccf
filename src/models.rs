use serde::{Deserialize, Serialize};

/// Strips dash characters from a raw postal code.
///
/// This is the single canonicalization applied at every boundary: the
/// request URL, history deduplication and history selection all operate
/// on the normalized form.
pub fn normalize_code(raw: &str) -> String {
    raw.chars().filter(|c| *c != '-').collect()
}

/// One resolved CEP lookup, fields verbatim from the ViaCEP response.
///
/// Serialized with the Portuguese wire names so the persisted history
/// matches the service payload byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Postal code as returned by the service (may contain a dash).
    #[serde(rename = "cep")]
    pub code: String,
    /// Street name.
    #[serde(rename = "logradouro", default)]
    pub street: String,
    /// Address complement.
    #[serde(rename = "complemento", default)]
    pub complement: String,
    /// Neighborhood.
    #[serde(rename = "bairro", default)]
    pub neighborhood: String,
    /// City name.
    #[serde(rename = "localidade", default)]
    pub city: String,
    /// Two-letter state abbreviation.
    #[serde(rename = "uf", default)]
    pub state_abbreviation: String,
    /// IBGE municipal identifier.
    #[serde(rename = "ibge", default)]
    pub city_code: String,
    /// GIA code (São Paulo tax identifier).
    #[serde(rename = "gia", default)]
    pub gia_code: String,
    /// Telephone area code.
    #[serde(rename = "ddd", default)]
    pub area_code: String,
    /// SIAFI code (federal accounting identifier).
    #[serde(rename = "siafi", default)]
    pub siafi_code: String,
}

impl AddressRecord {
    /// Dash-stripped code used as the history deduplication key.
    pub fn normalized_code(&self) -> String {
        normalize_code(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_dashes() {
        assert_eq!(normalize_code("01001-000"), "01001000");
        assert_eq!(normalize_code("01001000"), "01001000");
        assert_eq!(normalize_code("--"), "");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_code("01-001-000");
        assert_eq!(normalize_code(&once), once);
    }

    #[test]
    fn test_record_normalized_code() {
        let record = AddressRecord {
            code: "01001-000".to_string(),
            street: "Praça da Sé".to_string(),
            complement: "lado ímpar".to_string(),
            neighborhood: "Sé".to_string(),
            city: "São Paulo".to_string(),
            state_abbreviation: "SP".to_string(),
            city_code: "3550308".to_string(),
            gia_code: "1004".to_string(),
            area_code: "11".to_string(),
            siafi_code: "7107".to_string(),
        };
        assert_eq!(record.normalized_code(), "01001000");
    }

    #[test]
    fn test_deserialize_viacep_payload() {
        let payload = serde_json::json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        });

        let record: AddressRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.code, "01001-000");
        assert_eq!(record.city, "São Paulo");
        assert_eq!(record.state_abbreviation, "SP");
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let payload = serde_json::json!({ "cep": "01001-000" });
        let record: AddressRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.street, "");
        assert_eq!(record.siafi_code, "");
    }
}
