use serde::{Deserialize, Serialize};

/// Generation parameters for a request.
///
/// Unset fields are omitted on the wire and the service applies its model
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling probability mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Ceiling on output length in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Create an empty config (all model defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the top-p value.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Sets the top-k value.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Sets the maximum output tokens.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn unset_fields_omitted() {
        let config = GenerationConfig::new();
        assert_eq!(to_value(&config).unwrap(), json!({}));
    }

    #[test]
    fn camel_case_wire_names() {
        // Exactly-representable floats so the JSON comparison is exact.
        let config = GenerationConfig::new()
            .with_temperature(0.5)
            .with_top_p(0.75)
            .with_top_k(64)
            .with_max_output_tokens(8192);
        assert_eq!(
            to_value(&config).unwrap(),
            json!({
                "temperature": 0.5,
                "topP": 0.75,
                "topK": 64,
                "maxOutputTokens": 8192
            })
        );
    }
}
