use unicode_segmentation::UnicodeSegmentation;

/// Accepts `value` when it holds at least `min` user-perceived characters.
pub fn min_length(value: String, min: usize) -> Result<String, String> {
    if value.graphemes(true).count() < min {
        let unit = if min == 1 { "character" } else { "characters" };
        return Err(format!("must be at least {min} {unit} long"));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(s: String) -> Result<Self, String> {
        min_length(s, 2).map(Self)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<Self, String> {
        min_length(s, 10).map(Self)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
