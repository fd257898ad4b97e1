use derive_new::new;
use serde::Serialize;

use super::Object;

#[derive(Debug, Serialize, new)]
pub struct InferenceRequestSchema<'a> {
    #[serde(rename = "topN")]
    pub top_n: u32,
    pub objects: &'a [Object],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_format() {
        let objects = vec![
            json!({"objectId": "a", "features": [{"name": "desc", "value": "pen"}]})
                .as_object()
                .unwrap()
                .clone(),
        ];

        let payload = serde_json::to_value(InferenceRequestSchema::new(3, &objects)).unwrap();

        assert_eq!(
            payload,
            json!({
                "topN": 3,
                "objects": [{"objectId": "a", "features": [{"name": "desc", "value": "pen"}]}]
            })
        );
    }
}
