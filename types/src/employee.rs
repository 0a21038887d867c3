use serde::{Deserialize, Serialize};

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn toggled(self) -> Self {
        match self {
            EmployeeStatus::Active => EmployeeStatus::Inactive,
            EmployeeStatus::Inactive => EmployeeStatus::Active,
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "Active"),
            EmployeeStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// One row of the employee roster. In-memory only, seeded at view mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub designation: String,
    pub emp_id: String,
    pub phone: String,
    pub email: String,
    pub status: EmployeeStatus,
}

impl Employee {
    /// Search predicate for the list view: case-insensitive substring match
    /// on name, designation, emp id, and email; case-sensitive on the phone
    /// number, since it is numeric. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term_lower = term.to_lowercase();
        self.name.to_lowercase().contains(&term_lower)
            || self.designation.to_lowercase().contains(&term_lower)
            || self.emp_id.to_lowercase().contains(&term_lower)
            || self.email.to_lowercase().contains(&term_lower)
            || self.phone.contains(term)
    }
}

/// The fixed sample roster every list-view instance starts from.
pub fn sample_roster() -> Vec<Employee> {
    let rows: [(&str, &str, &str, &str, &str, EmployeeStatus); 12] = [
        ("John Smith", "Software Engineer", "EMP001", "9876543210", "john@example.com", EmployeeStatus::Active),
        ("Sarah Johnson", "HR Manager", "EMP002", "8765432109", "sarah@example.com", EmployeeStatus::Active),
        ("Michael Brown", "Product Manager", "EMP003", "7654321098", "michael@example.com", EmployeeStatus::Inactive),
        ("Emily Davis", "UX Designer", "EMP004", "6543210987", "emily@example.com", EmployeeStatus::Active),
        ("Robert Wilson", "QA Engineer", "EMP005", "5432109876", "robert@example.com", EmployeeStatus::Inactive),
        ("Jennifer Lee", "Frontend Developer", "EMP006", "4321098765", "jennifer@example.com", EmployeeStatus::Active),
        ("David Miller", "Backend Developer", "EMP007", "3210987654", "david@example.com", EmployeeStatus::Active),
        ("Jessica Taylor", "Marketing Specialist", "EMP008", "2109876543", "jessica@example.com", EmployeeStatus::Inactive),
        ("Daniel Anderson", "DevOps Engineer", "EMP009", "1098765432", "daniel@example.com", EmployeeStatus::Active),
        ("Lisa Martinez", "Data Analyst", "EMP010", "0987654321", "lisa@example.com", EmployeeStatus::Active),
        ("James Wilson", "Team Lead", "EMP011", "9876543211", "james@example.com", EmployeeStatus::Active),
        ("Emma Thompson", "Content Writer", "EMP012", "8765432110", "emma@example.com", EmployeeStatus::Inactive),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, designation, emp_id, phone, email, status))| Employee {
                id: i as u32 + 1,
                name: name.to_string(),
                designation: designation.to_string(),
                emp_id: emp_id.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                status,
            },
        )
        .collect()
}

pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
];

pub const DESIGNATIONS: [&str; 7] = [
    "Software Engineer",
    "Senior Software Engineer",
    "Product Manager",
    "UX Designer",
    "HR Manager",
    "Finance Analyst",
    "Sales Executive",
];

/// Unsubmitted add-employee form state. Owned by one view instance and
/// discarded on navigation away. Every field is a free-form string until
/// submission; dates arrive as `YYYY-MM-DD` from the date inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub work_email: String,
    pub personal_email: String,
    pub phone: String,
    pub designation: String,
    pub department: String,
    pub dob_date: String,
    pub joining_date: String,
    pub relieving_date: String,
    pub notice_period: String,
    pub address: String,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            work_email: String::new(),
            personal_email: String::new(),
            phone: String::new(),
            designation: String::new(),
            department: String::new(),
            dob_date: String::new(),
            joining_date: String::new(),
            relieving_date: String::new(),
            notice_period: "30".to_string(),
            address: String::new(),
        }
    }
}

impl EmployeeDraft {
    /// Relieving date, notice period, and address are optional; everything
    /// else must be filled before submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, &str); 10] = [
            ("id", &self.id),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("work email", &self.work_email),
            ("personal email", &self.personal_email),
            ("phone", &self.phone),
            ("designation", &self.designation),
            ("department", &self.department),
            ("date of birth", &self.dob_date),
            ("joining date", &self.joining_date),
        ];

        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> EmployeeDraft {
        EmployeeDraft {
            id: "AVS010".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            work_email: "jane.doe@example.com".to_string(),
            personal_email: "jane@example.com".to_string(),
            phone: "5550001234".to_string(),
            designation: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
            dob_date: "1990-04-12".to_string(),
            joining_date: "2024-01-08".to_string(),
            ..EmployeeDraft::default()
        }
    }

    #[test]
    fn roster_seeds_twelve_rows() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 12);
        assert_eq!(roster[0].emp_id, "EMP001");
        assert_eq!(roster[11].emp_id, "EMP012");
    }

    #[test]
    fn matching_is_case_insensitive_on_text_fields() {
        let roster = sample_roster();
        assert!(roster[0].matches("JOHN"));
        assert!(roster[0].matches("software eng"));
        assert!(roster[0].matches("emp001"));
        assert!(roster[0].matches("john@example"));
    }

    #[test]
    fn phone_matches_on_digit_substrings() {
        let roster = sample_roster();
        assert!(roster[0].matches("98765"));
        assert!(!roster[0].matches("0000"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(sample_roster().iter().all(|e| e.matches("")));
    }

    #[test]
    fn status_double_toggle_is_identity() {
        assert_eq!(
            EmployeeStatus::Active.toggled().toggled(),
            EmployeeStatus::Active
        );
    }

    #[test]
    fn draft_defaults_to_a_thirty_day_notice_period() {
        let draft = EmployeeDraft::default();
        assert_eq!(draft.notice_period, "30");
        assert!(draft.id.is_empty());
    }

    #[test]
    fn complete_draft_validates() {
        assert!(filled_draft().validate().is_ok());
    }

    #[test]
    fn relieving_date_and_address_are_optional() {
        let draft = filled_draft();
        assert!(draft.relieving_date.is_empty());
        assert!(draft.address.is_empty());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_named() {
        let mut draft = filled_draft();
        draft.phone.clear();
        draft.joining_date = "  ".to_string();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields, vec!["phone", "joining date"]);
    }
}
