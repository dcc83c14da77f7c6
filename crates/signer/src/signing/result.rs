use std::collections::BTreeMap;

/// A single value in a signing result.
///
/// Backends return mixed scalar types. The response renders every variant
/// to text: `Bytes` decodes as UTF-8 (lossy), the rest stringify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
}

impl SignValue {
    /// String rendering used for the response body.
    pub fn render(&self) -> String {
        match self {
            SignValue::Text(text) => text.clone(),
            SignValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            SignValue::Int(value) => value.to_string(),
        }
    }
}

/// Field mapping returned by a signing backend. Transient — rendered to
/// JSON once per successful call, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignResult {
    fields: BTreeMap<String, SignValue>,
}

impl SignResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: SignValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&SignValue> {
        self.fields.get(name)
    }

    /// Render every field to a JSON object of strings.
    pub fn into_json(self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .into_iter()
                .map(|(name, value)| (name, serde_json::Value::String(value.render())))
                .collect(),
        )
    }
}

impl FromIterator<(String, SignValue)> for SignResult {
    fn from_iter<I: IntoIterator<Item = (String, SignValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bytes_render_as_utf8_text() {
        assert_eq!(SignValue::Bytes(b"xyz".to_vec()).render(), "xyz");
    }

    #[test]
    fn invalid_utf8_renders_lossily() {
        let rendered = SignValue::Bytes(vec![0xff, b'o', b'k']).render();
        assert_eq!(rendered, "\u{fffd}ok");
    }

    #[test]
    fn int_renders_decimal() {
        assert_eq!(SignValue::Int(2048).render(), "2048");
        assert_eq!(SignValue::Int(-1).render(), "-1");
    }

    #[test]
    fn into_json_renders_all_fields_as_strings() {
        let mut result = SignResult::new();
        result.insert("signature", SignValue::Bytes(b"xyz".to_vec()));
        result.insert("keyBits", SignValue::Int(2048));
        result.insert("algorithm", SignValue::Text("secp256k1".to_owned()));

        assert_eq!(
            result.into_json(),
            json!({
                "signature": "xyz",
                "keyBits": "2048",
                "algorithm": "secp256k1",
            })
        );
    }
}
