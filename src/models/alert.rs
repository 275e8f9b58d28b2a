use serde::{Deserialize, Serialize};

use crate::domain::Symbol;

/// A threshold rule persisted by the backend. The client only ever creates
/// alerts and displays whatever the service returns on each poll; it never
/// edits or deletes them. All fields are optional so a schema drift on the
/// service side degrades to table placeholders instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub id: Option<String>,
    pub y: Option<String>,
    pub x: Option<String>,
    pub window: Option<u32>,
    pub threshold: Option<f64>,
    pub created_at: Option<String>,
    pub direction: Option<String>,
    pub cooldown: Option<f64>,
    pub last_triggered: Option<String>,
}

/// Creation request body for `POST /alerts`.
#[derive(Debug, Clone, Serialize)]
pub struct AlertDraft {
    pub y: Symbol,
    pub x: Symbol,
    pub window: u32,
    pub threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_alert_payload_decodes_with_placeholder_fields() {
        let alert: Alert = serde_json::from_str(r#"{"y": "ethusdt", "threshold": 1.5}"#).unwrap();
        assert_eq!(alert.y.as_deref(), Some("ethusdt"));
        assert_eq!(alert.threshold, Some(1.5));
        assert!(alert.id.is_none());
        assert!(alert.last_triggered.is_none());
    }

    #[test]
    fn draft_serializes_lowercase_symbols() {
        let draft = AlertDraft {
            y: Symbol::EthUsdt,
            x: Symbol::BtcUsdt,
            window: 200,
            threshold: 1.5,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["y"], "ethusdt");
        assert_eq!(json["x"], "btcusdt");
        assert_eq!(json["window"], 200);
    }
}
