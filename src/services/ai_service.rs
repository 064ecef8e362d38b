use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Every key the model is instructed to return. A reply missing any of them
/// is rejected as malformed rather than returned partially filled.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "make",
    "model",
    "year",
    "color",
    "bodyType",
    "price",
    "mileage",
    "fuelType",
    "transmission",
    "description",
    "confidence",
];

const EXTRACTION_PROMPT: &str = r#"Analyze this car image and extract the following information:
1. Make (manufacturer)
2. Model
3. Year (approximately)
4. Color
5. Body type (SUV, Sedan, Hatchback, etc.)
6. Mileage (your best guess and only give a natural number less than 25)
7. Fuel type (your best guess)
8. Transmission type (your best guess)
9. Price (your best guess and no commas and give a natural number)
10. Short Description as to be added to a car listing (Describe only the positives)

Format your response as a clean JSON object with these fields:
{
    "make": "",
    "model": "",
    "year": 0000,
    "color": "",
    "price": "",
    "mileage": "",
    "bodyType": "",
    "fuelType": "",
    "transmission": "",
    "description": "",
    "confidence": 0.0
}

For confidence, provide a value between 0 and 1 representing how confident you are in your overall identification.
Only respond with the JSON object, nothing else."#;

#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_key: String,
}

impl AiService {
    pub fn new(api_key: String, client: Client) -> Self {
        Self { client, api_key }
    }

    /// Sends the image to Gemini with the fixed extraction instruction and
    /// returns the validated detail object. Field types are passed through
    /// as the model returned them; only key presence is enforced.
    pub async fn extract_car_details(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<JsonValue> {
        let payload = serde_json::json!({
            "contents": [{
                "parts": [
                    {
                        "inline_data": {
                            "mime_type": mime_type,
                            "data": BASE64.encode(image_bytes),
                        }
                    },
                    { "text": EXTRACTION_PROMPT }
                ]
            }]
        });

        let text = self.generate_content(payload).await?;
        parse_car_details(&text)
    }

    async fn generate_content(&self, payload: JsonValue) -> Result<String> {
        let res = self
            .client
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Gemini API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;

        body.get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid Gemini response format").into())
    }
}

/// Parses the raw model reply into the car detail object. Markdown code
/// fences around the JSON are tolerated. All eleven required keys must be
/// present and confidence must sit in [0, 1].
pub fn parse_car_details(text: &str) -> Result<JsonValue> {
    let cleaned = strip_code_fences(text);

    let details: JsonValue = serde_json::from_str(&cleaned)
        .map_err(|_| Error::BadRequest("Failed to parse AI response".to_string()))?;

    let object = details
        .as_object()
        .ok_or_else(|| Error::BadRequest("AI response is not a JSON object".to_string()))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();

    if !missing.is_empty() {
        return Err(Error::BadRequest(format!(
            "AI response missing required fields: {}",
            missing.join(", ")
        )));
    }

    if let Some(confidence) = object.get("confidence").and_then(|c| c.as_f64()) {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(Error::BadRequest(format!(
                "AI confidence out of range: {}",
                confidence
            )));
        }
    }

    Ok(details)
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_reply() -> String {
        serde_json::json!({
            "make": "Toyota",
            "model": "Corolla",
            "year": 2021,
            "color": "Red",
            "price": "18500",
            "mileage": "12",
            "bodyType": "Sedan",
            "fuelType": "Petrol",
            "transmission": "Automatic",
            "description": "Clean single-owner sedan.",
            "confidence": 0.92
        })
        .to_string()
    }

    #[test]
    fn parses_plain_json_reply() {
        let details = parse_car_details(&full_reply()).expect("valid reply");
        assert_eq!(details["make"], "Toyota");
        assert_eq!(details["confidence"], 0.92);
    }

    #[test]
    fn fenced_reply_parses_identically_to_unfenced() {
        let plain = parse_car_details(&full_reply()).unwrap();
        let fenced = format!("```json\n{}\n```", full_reply());
        assert_eq!(parse_car_details(&fenced).unwrap(), plain);
    }

    #[test]
    fn bare_fences_are_stripped_too() {
        let fenced = format!("```\n{}\n```", full_reply());
        assert!(parse_car_details(&fenced).is_ok());
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut reply: JsonValue = serde_json::from_str(&full_reply()).unwrap();
        reply.as_object_mut().unwrap().remove("transmission");
        let err = parse_car_details(&reply.to_string()).unwrap_err();
        assert!(err.to_string().contains("transmission"));
    }

    #[test]
    fn every_required_field_is_checked() {
        for field in REQUIRED_FIELDS {
            let mut reply: JsonValue = serde_json::from_str(&full_reply()).unwrap();
            reply.as_object_mut().unwrap().remove(field);
            assert!(
                parse_car_details(&reply.to_string()).is_err(),
                "missing {} should fail",
                field
            );
        }
    }

    #[test]
    fn non_json_reply_is_rejected() {
        assert!(parse_car_details("I could not identify the car.").is_err());
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let mut reply: JsonValue = serde_json::from_str(&full_reply()).unwrap();
        reply["confidence"] = serde_json::json!(1.4);
        assert!(parse_car_details(&reply.to_string()).is_err());
    }
}
