//! Choice-code vocabularies shared by validation and seeding.
//!
//! Codes are stored as plain strings in the database; the service layer
//! rejects writes whose codes are not listed here.

/// Batch group letters.
pub const GROUPS: &[&str] = &["A", "B", "C", "D", "E", "F"];

pub const SALUTATIONS: &[&str] = &["Dr.", "Prof.", "Mr.", "Ms.", "Mrs."];

/// Academic areas, code to display name.
pub const AREAS: &[(&str, &str)] = &[
    ("FAC", "Finance, Accounting, and Control"),
    ("MM", "Marketing Management"),
    ("HLAM", "Humanities, Liberal Arts, and Management"),
    ("SM", "Strategic Management"),
    ("IS", "Information Systems"),
    ("ECON", "Economics"),
    ("QMOM", "Quantitative Methods and Operations Management"),
    ("HR", "Human Resources"),
];

/// Home-state codes, code to display name.
pub const STATES: &[(&str, &str)] = &[
    ("AP", "Andhra Pradesh"),
    ("AR", "Arunachal Pradesh"),
    ("AS", "Assam"),
    ("BR", "Bihar"),
    ("CG", "Chhattisgarh"),
    ("DL", "Delhi"),
    ("GA", "Goa"),
    ("GJ", "Gujarat"),
    ("HR", "Haryana"),
    ("HP", "Himachal Pradesh"),
    ("JK", "Jammu and Kashmir"),
    ("JH", "Jharkhand"),
    ("KA", "Karnataka"),
    ("KL", "Kerala"),
    ("MP", "Madhya Pradesh"),
    ("MH", "Maharashtra"),
    ("MN", "Manipur"),
    ("ML", "Meghalaya"),
    ("MZ", "Mizoram"),
    ("NL", "Nagaland"),
    ("OD", "Odisha"),
    ("PB", "Punjab"),
    ("RJ", "Rajasthan"),
    ("SK", "Sikkim"),
    ("TN", "Tamil Nadu"),
    ("TG", "Telangana"),
    ("TR", "Tripura"),
    ("UP", "Uttar Pradesh"),
    ("UK", "Uttarakhand"),
    ("WB", "West Bengal"),
    ("AN", "Andaman and Nicobar Islands"),
    ("CH", "Chandigarh"),
    ("DN", "Dadra and Nagar Haveli"),
    ("DD", "Daman and Diu"),
    ("LD", "Lakshadweep"),
    ("PY", "Puducherry"),
];

/// States that currently have a study centre. Subset of [`STATES`] codes.
pub const STUDY_CENTER_STATES: &[&str] = &[
    "AS", "AP", "BR", "CG", "CH", "DL", "GA", "GJ", "HR", "JH", "KA", "KL", "MH", "MP", "OD", "PB",
    "RJ", "TG", "TN", "UK", "UP", "WB",
];

pub fn is_group(code: &str) -> bool {
    GROUPS.contains(&code)
}

pub fn is_salutation(code: &str) -> bool {
    SALUTATIONS.contains(&code)
}

pub fn is_area(code: &str) -> bool {
    AREAS.iter().any(|(c, _)| *c == code)
}

pub fn is_state(code: &str) -> bool {
    STATES.iter().any(|(c, _)| *c == code)
}

pub fn is_study_center_state(code: &str) -> bool {
    STUDY_CENTER_STATES.contains(&code)
}

pub fn area_label(code: &str) -> Option<&'static str> {
    AREAS.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

pub fn state_label(code: &str) -> Option<&'static str> {
    STATES.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_group_codes() {
        assert!(is_group("A"));
        assert!(is_group("F"));
        assert!(!is_group("G"));
        assert!(!is_group("a"));
    }

    #[test]
    fn test_area_lookup() {
        assert!(is_area("QMOM"));
        assert_eq!(area_label("IS"), Some("Information Systems"));
        assert_eq!(area_label("XX"), None);
    }

    #[test]
    fn test_state_lookup() {
        assert!(is_state("KL"));
        assert_eq!(state_label("KL"), Some("Kerala"));
        assert!(!is_state("ZZ"));
    }

    #[test]
    fn test_study_center_states_are_states() {
        for code in STUDY_CENTER_STATES {
            assert!(is_state(code), "unknown study centre state {code}");
        }
    }
}
