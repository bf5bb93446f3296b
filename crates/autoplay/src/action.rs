use doudizhu_core::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Bid { call: bool },
    Play { cards: Vec<Card> },
    Pass,
}

impl AutoAction {
    pub fn stable_key(&self) -> String {
        match self {
            Self::Bid { call } => format!("bid:{call}"),
            Self::Play { cards } => {
                let ranks: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
                format!("play:{ranks:?}")
            }
            Self::Pass => "pass".to_string(),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::Bid { call: true } => "call landlord".to_string(),
            Self::Bid { call: false } => "decline landlord".to_string(),
            Self::Play { cards } => {
                let shown: Vec<String> = cards.iter().map(|card| card.to_string()).collect();
                format!("play [{}]", shown.join(", "))
            }
            Self::Pass => "pass".to_string(),
        }
    }
}
