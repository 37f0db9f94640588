use kernel::model::quote::Quote;
use serde::Deserialize;

// hitokoto's own shape, not the gateway envelope
#[derive(Debug, Deserialize)]
pub struct HitokotoRow {
    pub hitokoto: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub from_who: Option<String>,
}

impl From<HitokotoRow> for Quote {
    fn from(value: HitokotoRow) -> Self {
        Quote {
            text: value.hitokoto,
            from: value.from,
            from_who: value.from_who,
        }
    }
}
