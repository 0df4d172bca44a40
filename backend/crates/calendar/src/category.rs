use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[display("worship")]
    Worship,
    #[display("meeting")]
    Meeting,
    #[display("event")]
    Event,
    #[display("smallgroup")]
    Smallgroup,
    #[display("vehicle")]
    Vehicle,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        Self::Worship,
        Self::Meeting,
        Self::Event,
        Self::Smallgroup,
        Self::Vehicle,
    ];

    /// Label shown in the calendar legend
    pub fn label(&self) -> &'static str {
        match self {
            Self::Worship => "예배",
            Self::Meeting => "모임",
            Self::Event => "행사",
            Self::Smallgroup => "소그룹",
            Self::Vehicle => "차량",
        }
    }
}
