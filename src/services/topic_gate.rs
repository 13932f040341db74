// src/services/topic_gate.rs

/// Keywords that mark a message as nutrition/diet related. Frozen for the
/// process lifetime; matching is case-insensitive substring containment.
pub const DIET_KEYWORDS: &[&str] = &[
    "diet",
    "food",
    "meal",
    "nutrition",
    "calories",
    "weight",
    "diabetes",
    "prediabetes",
    "obesity",
    "cholesterol",
    "metabolic syndrome",
    "hypertension",
    "blood pressure",
    "heart disease",
    "cardiac",
    "stroke",
    "pcos",
    "thyroid",
    "hypothyroidism",
    "hyperthyroidism",
    "ibs",
    "crohn",
    "ulcerative colitis",
    "acid reflux",
    "gastritis",
    "liver",
    "fatty liver",
    "hepatitis",
    "kidney",
    "renal",
    "dialysis",
    "anemia",
    "osteoporosis",
    "arthritis",
    "cancer nutrition",
    "pregnancy diet",
];

/// Returns true if the message touches any diet keyword.
///
/// Substring semantics: "mediate" contains "diet" and passes the gate. That
/// matches the reference behavior and is kept on purpose.
pub fn is_in_domain(message: &str) -> bool {
    let message = message.to_lowercase();
    DIET_KEYWORDS.iter().any(|keyword| message.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercase() {
        for keyword in DIET_KEYWORDS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn gate_is_case_insensitive() {
        assert!(is_in_domain("Best FOOD for energy?"));
        assert!(is_in_domain("What's a good DIET for diabetes?"));
    }

    #[test]
    fn empty_message_is_out_of_domain() {
        assert!(!is_in_domain(""));
    }
}
