//! Composite values stored in a single string preference
//!
//! Fields are joined with [`SEPARATOR`]. There is no escaping, so encoding
//! refuses any field that would not split back out unchanged.

use crate::error::{Result, SettingsError};

/// Token placed between the fields of a composite value
pub const SEPARATOR: &str = "§splitter§";

/// Join fields with [`SEPARATOR`]
///
/// Fails when the joined value would not split back into the same fields,
/// which also catches a field ending in a prefix of the separator. The
/// field names label the error.
pub fn encode_fields(fields: &[(&'static str, &str)]) -> Result<String> {
    let joined = fields.iter().map(|(_, v)| *v).collect::<Vec<_>>().join(SEPARATOR);
    let decoded = decode_fields(&joined);
    let round_trips = decoded.len() == fields.len()
        && decoded.iter().zip(fields).all(|(d, (_, v))| d.as_str() == *v);
    if round_trips {
        return Ok(joined);
    }

    let (name, value) = fields
        .iter()
        .zip(&decoded)
        .find(|((_, v), d)| *v != d.as_str())
        .map(|(&field, _)| field)
        .or_else(|| fields.last().copied())
        .unwrap_or(("", ""));
    Err(SettingsError::ReservedSeparator { field: name, value: value.to_string() })
}

/// Split a stored value on [`SEPARATOR`], returning every part unmodified
pub fn decode_fields(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR).map(str::to_string).collect()
}

/// App pinned to a home-screen shortcut slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    /// Package name of the launched app
    pub package_name: String,
    /// User profile the app belongs to
    pub profile: i32,
    /// Text shown in the slot
    pub label: String,
}

impl ShortcutBinding {
    /// Create a binding
    pub fn new(package_name: impl Into<String>, profile: i32, label: impl Into<String>) -> Self {
        Self { package_name: package_name.into(), profile, label: label.into() }
    }

    /// Encode as `package§splitter§profile§splitter§label`
    pub fn encode(&self) -> Result<String> {
        let profile = self.profile.to_string();
        encode_fields(&[
            ("package_name", self.package_name.as_str()),
            ("profile", profile.as_str()),
            ("label", self.label.as_str()),
        ])
    }

    /// Decode a stored value; `None` unless it has exactly three fields and
    /// a numeric profile
    pub fn decode(raw: &str) -> Option<Self> {
        let fields = decode_fields(raw);
        let [package_name, profile, label]: [String; 3] = fields.try_into().ok()?;
        let profile = profile.parse().ok()?;
        Some(Self { package_name, profile, label })
    }
}

/// App launched by a swipe gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureBinding {
    /// Identifier shown for the bound app
    pub app: String,
    /// Further fields the caller needs to launch it
    pub extra: Vec<String>,
}

impl GestureBinding {
    /// Create a binding with no extra fields
    pub fn new(app: impl Into<String>) -> Self {
        Self { app: app.into(), extra: Vec::new() }
    }

    /// Append an extra field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.extra.push(field.into());
        self
    }

    /// Encode as `app§splitter§extra...`
    pub fn encode(&self) -> Result<String> {
        let mut fields = Vec::with_capacity(1 + self.extra.len());
        fields.push(("app", self.app.as_str()));
        fields.extend(self.extra.iter().map(|f| ("extra", f.as_str())));
        encode_fields(&fields)
    }

    /// Decode a stored value; `None` for an empty app identifier
    pub fn decode(raw: &str) -> Option<Self> {
        let mut fields = decode_fields(raw).into_iter();
        let app = fields.next().filter(|a| !a.is_empty())?;
        Some(Self { app, extra: fields.collect() })
    }
}
