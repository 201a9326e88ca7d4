/// Swatch value when the user has not picked anything
pub const DEFAULT_PICKER_COLOUR: &str = "#ffffff";

/// Effective deck colour: the first non-blank of the in-text directive,
/// the typed free-text colour and the picker swatch, trimmed.
pub fn resolve_colour(parsed: &str, free_text: &str, picker: &str) -> String {
    [parsed, free_text, picker]
        .into_iter()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// UI-level colour inputs that apply to every deck being added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourInputs {
    pub free_text: String,
    pub picker: String,
}

impl Default for ColourInputs {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            picker: DEFAULT_PICKER_COLOUR.to_string(),
        }
    }
}

impl ColourInputs {
    pub fn resolve(&self, parsed: &str) -> String {
        resolve_colour(parsed, &self.free_text, &self.picker)
    }
}
