use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceLevel {
    #[serde(rename = "Iniciante")]
    Beginner,
    #[serde(rename = "Intermediário")]
    Intermediate,
    #[serde(rename = "Avançado")]
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Iniciante",
            ExperienceLevel::Intermediate => "Intermediário",
            ExperienceLevel::Advanced => "Avançado",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => {
                "Você começou a correr há menos de 6 meses, corre até 5km ou está começando agora"
            }
            ExperienceLevel::Intermediate => {
                "Você corre regularmente há mais de 6 meses, completa 5-10km com facilidade"
            }
            ExperienceLevel::Advanced => {
                "Você treina há mais de 1 ano, participa de competições, corre mais de 10km regularmente"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Subscription length. Only 3, 4, 5 and 6 months are sold.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(into = "u32")]
pub struct PlanMonths(u32);

impl PlanMonths {
    pub const ALLOWED: [u32; 4] = [3, 4, 5, 6];

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PlanMonths {
    type Error = u32;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&months) {
            Ok(PlanMonths(months))
        } else {
            Err(months)
        }
    }
}

impl From<PlanMonths> for u32 {
    fn from(months: PlanMonths) -> u32 {
        months.0
    }
}

impl fmt::Display for PlanMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated intake form payload, serialized with the field names the
/// checkout endpoint expects.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntakeSubmission {
    pub email: String,
    #[serde(rename = "altura")]
    pub height_cm: f64,
    #[serde(rename = "peso")]
    pub weight_kg: f64,
    #[serde(rename = "idade")]
    pub age: u32,
    #[serde(rename = "objetivo")]
    pub goal: String,
    #[serde(rename = "diasDisponiveis")]
    pub days_per_week: u32,
    #[serde(rename = "mesesAcompanhamento")]
    pub months: PlanMonths,
    #[serde(rename = "nivelAtual")]
    pub level: ExperienceLevel,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CheckoutSession {
    pub url: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BuyerCount {
    pub count: u32,
}

/// Profile echoed back by the backend once a payment is confirmed.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentRecord {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub email: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub altura: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub peso: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub idade: u32,
    pub objetivo: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub dias: u32,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub meses: u32,
    pub nivel: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

// Payment provider metadata comes back as strings, so "175" and 175 are both fine.
fn number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse::<T>().map_err(serde::de::Error::custom),
    }
}

/// Which identifier the payment provider sent the buyer back with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentLookupKey {
    SessionId(String),
    ExternalReference(String),
}

impl PaymentLookupKey {
    /// A non-empty `session_id` wins over `external_reference`.
    pub fn from_query(
        session_id: Option<String>,
        external_reference: Option<String>,
    ) -> Option<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        present(session_id)
            .map(PaymentLookupKey::SessionId)
            .or_else(|| present(external_reference).map(PaymentLookupKey::ExternalReference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_months_only_accepts_sold_durations() {
        for months in [3, 4, 5, 6] {
            assert_eq!(PlanMonths::try_from(months).map(PlanMonths::get), Ok(months));
        }
        for months in [0, 1, 2, 7, 12] {
            assert_eq!(PlanMonths::try_from(months), Err(months));
        }
    }

    #[test]
    fn submission_uses_backend_field_names() {
        let submission = IntakeSubmission {
            email: "ana@example.com".to_string(),
            height_cm: 165.0,
            weight_kg: 58.5,
            age: 31,
            goal: "Correr minha primeira meia maratona".to_string(),
            days_per_week: 3,
            months: PlanMonths::try_from(4).unwrap(),
            level: ExperienceLevel::Intermediate,
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "ana@example.com",
                "altura": 165.0,
                "peso": 58.5,
                "idade": 31,
                "objetivo": "Correr minha primeira meia maratona",
                "diasDisponiveis": 3,
                "mesesAcompanhamento": 4,
                "nivelAtual": "Intermediário",
            })
        );
    }

    #[test]
    fn payment_record_accepts_stringly_typed_metadata() {
        let record: PaymentRecord = serde_json::from_value(json!({
            "user_id": 12,
            "email": "rob@example.com",
            "altura": "180",
            "peso": "82.5",
            "idade": "40",
            "objetivo": "Perder peso correndo",
            "dias": "4",
            "meses": 6,
            "nivel": "Avançado",
        }))
        .unwrap();
        assert_eq!(record.user_id, Some(12));
        assert_eq!(record.altura, 180.0);
        assert_eq!(record.peso, 82.5);
        assert_eq!(record.idade, 40);
        assert_eq!(record.dias, 4);
        assert_eq!(record.meses, 6);
    }

    #[test]
    fn payment_record_rejects_missing_or_garbage_fields() {
        let missing = serde_json::from_value::<PaymentRecord>(json!({
            "email": "rob@example.com",
            "altura": 180,
        }));
        assert!(missing.is_err());

        let garbage = serde_json::from_value::<PaymentRecord>(json!({
            "email": "rob@example.com",
            "altura": "tall",
            "peso": 80,
            "idade": 40,
            "objetivo": "x",
            "dias": 4,
            "meses": 6,
            "nivel": "Avançado",
        }));
        assert!(garbage.is_err());
    }

    #[test]
    fn lookup_key_prefers_session_id() {
        assert_eq!(
            PaymentLookupKey::from_query(Some("cs_1".into()), Some("ref_9".into())),
            Some(PaymentLookupKey::SessionId("cs_1".into()))
        );
        assert_eq!(
            PaymentLookupKey::from_query(None, Some("ref_9".into())),
            Some(PaymentLookupKey::ExternalReference("ref_9".into()))
        );
        assert_eq!(
            PaymentLookupKey::from_query(Some("".into()), Some("ref_9".into())),
            Some(PaymentLookupKey::ExternalReference("ref_9".into()))
        );
        assert_eq!(PaymentLookupKey::from_query(None, None), None);
        assert_eq!(PaymentLookupKey::from_query(Some(" ".into()), Some("".into())), None);
    }

    #[test]
    fn level_labels_round_trip() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_label("Expert"), None);
    }
}
