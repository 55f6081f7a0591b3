use crate::models::{ExperienceLevel, IntakeSubmission, PlanMonths};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Height,
    Weight,
    Age,
    Goal,
    DaysPerWeek,
    Months,
    Level,
}

/// Raw control values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeDraft {
    pub email: String,
    pub height: String,
    pub weight: String,
    pub age: String,
    pub goal: String,
    pub days_per_week: String,
    pub months: String,
    pub level: String,
}

impl IntakeDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::Age => &self.age,
            Field::Goal => &self.goal,
            Field::DaysPerWeek => &self.days_per_week,
            Field::Months => &self.months,
            Field::Level => &self.level,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Height => &mut self.height,
            Field::Weight => &mut self.weight,
            Field::Age => &mut self.age,
            Field::Goal => &mut self.goal,
            Field::DaysPerWeek => &mut self.days_per_week,
            Field::Months => &mut self.months,
            Field::Level => &mut self.level,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn record<T>(&mut self, field: Field, outcome: Result<T, &'static str>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.insert(field, message);
                None
            }
        }
    }
}

struct NumberRule {
    required: &'static str,
    not_a_number: &'static str,
    too_small: &'static str,
    too_large: &'static str,
}

const HEIGHT: NumberRule = NumberRule {
    required: "A altura é obrigatória",
    not_a_number: "A altura deve ser um número",
    too_small: "A altura deve ser no mínimo 100 cm",
    too_large: "A altura deve ser no máximo 250 cm",
};

const WEIGHT: NumberRule = NumberRule {
    required: "O peso é obrigatório",
    not_a_number: "O peso deve ser um número",
    too_small: "O peso deve ser no mínimo 30 kg",
    too_large: "O peso deve ser no máximo 300 kg",
};

const AGE: NumberRule = NumberRule {
    required: "A idade é obrigatória",
    not_a_number: "A idade deve ser um número",
    too_small: "A idade deve ser no mínimo 18 anos",
    too_large: "A idade deve ser no máximo 100 anos",
};

const DAYS: NumberRule = NumberRule {
    required: "Os dias disponíveis são obrigatórios",
    not_a_number: "Os dias disponíveis devem ser um número",
    too_small: "Deve haver no mínimo 1 dia disponível",
    too_large: "Deve haver no máximo 5 dias disponíveis",
};

const MONTHS_REQUIRED: &str = "Os meses de acompanhamento são obrigatórios";
const MONTHS_NOT_A_NUMBER: &str = "Os meses de acompanhamento devem ser um número";
const MONTHS_NOT_SOLD: &str = "Selecione um plano de 3 a 6 meses";

const GOAL_REQUIRED: &str = "O objetivo é obrigatório";
const GOAL_TOO_SHORT: &str = "O objetivo deve ter no mínimo 10 caracteres";
const GOAL_TOO_LONG: &str = "O objetivo deve ter no máximo 500 caracteres";

const LEVEL_REQUIRED: &str = "O nível atual é obrigatório";
const LEVEL_UNKNOWN: &str = "Selecione um nível válido";

const EMAIL_REQUIRED: &str = "O email é obrigatório";
const EMAIL_INVALID: &str = "Digite um email válido";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
        )
        .expect("email pattern compiles")
    })
}

fn check_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        Err(EMAIL_REQUIRED)
    } else if email_pattern().is_match(email) {
        Ok(email.to_string())
    } else {
        Err(EMAIL_INVALID)
    }
}

fn parse_number(raw: &str, rule: &NumberRule) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(rule.required);
    }
    match raw.parse::<f64>() {
        // "NaN" and "inf" parse as f64 but aren't numbers anyone typed on purpose.
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(rule.not_a_number),
    }
}

fn check_decimal(raw: &str, min: f64, max: f64, rule: &NumberRule) -> Result<f64, &'static str> {
    let value = parse_number(raw, rule)?;
    if value < min {
        Err(rule.too_small)
    } else if value > max {
        Err(rule.too_large)
    } else {
        Ok(value)
    }
}

/// Bounds are checked before wholeness, so `-3` reads as too small.
fn check_whole(raw: &str, min: u32, max: u32, rule: &NumberRule) -> Result<u32, &'static str> {
    let value = check_decimal(raw, f64::from(min), f64::from(max), rule)?;
    if value.fract() == 0.0 {
        Ok(value as u32)
    } else {
        Err(rule.not_a_number)
    }
}

fn check_goal(raw: &str) -> Result<String, &'static str> {
    match raw.chars().count() {
        0 => Err(GOAL_REQUIRED),
        n if n < 10 => Err(GOAL_TOO_SHORT),
        n if n > 500 => Err(GOAL_TOO_LONG),
        _ => Ok(raw.to_string()),
    }
}

fn check_months(raw: &str) -> Result<PlanMonths, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MONTHS_REQUIRED);
    }
    let months: f64 = match raw.parse() {
        Ok(value) if f64::is_finite(value) => value,
        _ => return Err(MONTHS_NOT_A_NUMBER),
    };
    PlanMonths::ALLOWED
        .iter()
        .find(|allowed| f64::from(**allowed) == months)
        .and_then(|allowed| PlanMonths::try_from(*allowed).ok())
        .ok_or(MONTHS_NOT_SOLD)
}

fn check_level(raw: &str) -> Result<ExperienceLevel, &'static str> {
    if raw.trim().is_empty() {
        Err(LEVEL_REQUIRED)
    } else {
        ExperienceLevel::from_label(raw.trim()).ok_or(LEVEL_UNKNOWN)
    }
}

/// Checks every field of the draft in one pass.
pub fn validate(draft: &IntakeDraft) -> Result<IntakeSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let email = errors.record(Field::Email, check_email(&draft.email));
    let height_cm = errors.record(Field::Height, check_decimal(&draft.height, 100.0, 250.0, &HEIGHT));
    let weight_kg = errors.record(Field::Weight, check_decimal(&draft.weight, 30.0, 300.0, &WEIGHT));
    let age = errors.record(Field::Age, check_whole(&draft.age, 18, 100, &AGE));
    let goal = errors.record(Field::Goal, check_goal(&draft.goal));
    let days_per_week = errors.record(Field::DaysPerWeek, check_whole(&draft.days_per_week, 1, 5, &DAYS));
    let months = errors.record(Field::Months, check_months(&draft.months));
    let level = errors.record(Field::Level, check_level(&draft.level));

    match (email, height_cm, weight_kg, age, goal, days_per_week, months, level) {
        (
            Some(email),
            Some(height_cm),
            Some(weight_kg),
            Some(age),
            Some(goal),
            Some(days_per_week),
            Some(months),
            Some(level),
        ) => Ok(IntakeSubmission {
            email,
            height_cm,
            weight_kg,
            age,
            goal,
            days_per_week,
            months,
            level,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> IntakeDraft {
        IntakeDraft {
            email: "corredor@example.com".to_string(),
            height: "175".to_string(),
            weight: "72.5".to_string(),
            age: "34".to_string(),
            goal: "Completar uma meia maratona em 6 meses".to_string(),
            days_per_week: "3".to_string(),
            months: "4".to_string(),
            level: "Intermediário".to_string(),
        }
    }

    fn error_for(field: Field, value: &str) -> Option<&'static str> {
        let mut draft = valid_draft();
        draft.set(field, value.to_string());
        match validate(&draft) {
            Ok(_) => None,
            Err(errors) => errors.get(field),
        }
    }

    #[test]
    fn valid_draft_becomes_submission() {
        let submission = validate(&valid_draft()).expect("valid");
        assert_eq!(submission.height_cm, 175.0);
        assert_eq!(submission.weight_kg, 72.5);
        assert_eq!(submission.months.get(), 4);
        assert_eq!(submission.level, ExperienceLevel::Intermediate);
    }

    #[test]
    fn height_bounds() {
        assert_eq!(error_for(Field::Height, "100"), None);
        assert_eq!(error_for(Field::Height, "250"), None);
        assert_eq!(error_for(Field::Height, "99.9"), Some("A altura deve ser no mínimo 100 cm"));
        assert_eq!(error_for(Field::Height, "251"), Some("A altura deve ser no máximo 250 cm"));
        assert_eq!(error_for(Field::Height, "0"), Some("A altura deve ser no mínimo 100 cm"));
        assert_eq!(error_for(Field::Height, "-5"), Some("A altura deve ser no mínimo 100 cm"));
        assert_eq!(error_for(Field::Height, ""), Some("A altura é obrigatória"));
        assert_eq!(error_for(Field::Height, "alto"), Some("A altura deve ser um número"));
        assert_eq!(error_for(Field::Height, "NaN"), Some("A altura deve ser um número"));
    }

    #[test]
    fn weight_and_age_bounds() {
        assert_eq!(error_for(Field::Weight, "30"), None);
        assert_eq!(error_for(Field::Weight, "300"), None);
        assert_eq!(error_for(Field::Weight, "29"), Some("O peso deve ser no mínimo 30 kg"));
        assert_eq!(error_for(Field::Weight, "301"), Some("O peso deve ser no máximo 300 kg"));
        assert_eq!(error_for(Field::Age, "18"), None);
        assert_eq!(error_for(Field::Age, "100"), None);
        assert_eq!(error_for(Field::Age, "17"), Some("A idade deve ser no mínimo 18 anos"));
        assert_eq!(error_for(Field::Age, "101"), Some("A idade deve ser no máximo 100 anos"));
        assert_eq!(error_for(Field::Age, "-3"), Some("A idade deve ser no mínimo 18 anos"));
        assert_eq!(error_for(Field::Age, "30.5"), Some("A idade deve ser um número"));
        assert_eq!(error_for(Field::Age, "trinta"), Some("A idade deve ser um número"));
    }

    #[test]
    fn months_must_be_a_sold_plan() {
        for months in ["3", "4", "5", "6"] {
            assert_eq!(error_for(Field::Months, months), None, "{months} should be accepted");
        }
        for months in ["0", "1", "2", "7", "12"] {
            assert_eq!(error_for(Field::Months, months), Some("Selecione um plano de 3 a 6 meses"));
        }
        assert_eq!(error_for(Field::Months, "-3"), Some("Selecione um plano de 3 a 6 meses"));
        assert_eq!(error_for(Field::Months, "4.0"), None);
        assert_eq!(error_for(Field::Months, "x"), Some("Os meses de acompanhamento devem ser um número"));
        assert_eq!(error_for(Field::Months, ""), Some("Os meses de acompanhamento são obrigatórios"));
    }

    #[test]
    fn days_per_week_bounds() {
        assert_eq!(error_for(Field::DaysPerWeek, "1"), None);
        assert_eq!(error_for(Field::DaysPerWeek, "5"), None);
        assert_eq!(error_for(Field::DaysPerWeek, "0"), Some("Deve haver no mínimo 1 dia disponível"));
        assert_eq!(error_for(Field::DaysPerWeek, "6"), Some("Deve haver no máximo 5 dias disponíveis"));
        assert_eq!(error_for(Field::DaysPerWeek, "-1"), Some("Deve haver no mínimo 1 dia disponível"));
    }

    #[test]
    fn goal_length_counts_characters() {
        assert_eq!(error_for(Field::Goal, "curto"), Some("O objetivo deve ter no mínimo 10 caracteres"));
        assert_eq!(error_for(Field::Goal, "çççççççççç"), None);
        assert_eq!(error_for(Field::Goal, &"a".repeat(500)), None);
        assert_eq!(error_for(Field::Goal, &"a".repeat(501)), Some("O objetivo deve ter no máximo 500 caracteres"));
        assert_eq!(error_for(Field::Goal, ""), Some("O objetivo é obrigatório"));
    }

    #[test]
    fn level_and_email() {
        assert_eq!(error_for(Field::Level, ""), Some("O nível atual é obrigatório"));
        assert_eq!(error_for(Field::Level, "Elite"), Some("Selecione um nível válido"));
        assert_eq!(error_for(Field::Email, ""), Some("O email é obrigatório"));
        assert_eq!(error_for(Field::Email, "sem-arroba.com"), Some("Digite um email válido"));
        assert_eq!(error_for(Field::Email, "a@b"), Some("Digite um email válido"));
        assert_eq!(error_for(Field::Email, "ana.souza+run@mail.com.br"), None);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = validate(&IntakeDraft::default()).expect_err("empty draft is invalid");
        assert_eq!(errors.len(), 8);
    }
}
