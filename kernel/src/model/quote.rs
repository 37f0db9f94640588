#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub from: String,
    pub from_who: Option<String>,
}
