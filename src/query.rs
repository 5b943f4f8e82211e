use std::collections::BTreeMap;

/// Query string builder for REST endpoints.
///
/// Keys are kept sorted and a key may carry several values, so the encoded
/// form is stable regardless of insertion order: `a=1&b=2&b=3`. Keys and
/// values are percent-encoded with spaces written as `+`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to `key`.
    pub fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Appends `value` only when it is not empty.
    pub fn add_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.add(key, value);
        }
        self
    }

    /// Appends `value` when present.
    pub fn add_opt<T: ToString>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    /// Joins `values` with commas under a single key, skipping empty lists.
    pub fn add_joined<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            self.add(key, joined);
        }
        self
    }

    /// Adds one `key=value` pair per item.
    pub fn add_repeated<T: ToString>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for value in values {
            self.add(key, value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn encode(&self) -> String {
        let mut pairs = Vec::new();
        for (key, values) in &self.values {
            let key = escape(key);
            for value in values {
                pairs.push(format!("{}={}", key, escape(value)));
            }
        }
        pairs.join("&")
    }

    /// Appends the encoded query to `path`, omitting the `?` when empty.
    pub fn with_path(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

fn escape(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}
