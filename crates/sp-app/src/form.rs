use sp_core::EmployeeProfile;

/// A selectable option: the canonical dataset value plus its display label.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const EDUCATION_OPTIONS: [SelectOption; 8] = [
    SelectOption { value: "Doctorate", label: "Doctorate" },
    SelectOption { value: "Masters", label: "Masters" },
    SelectOption { value: "Bachelors", label: "Bachelors" },
    SelectOption { value: "Some-college", label: "Some College" },
    SelectOption { value: "HS-grad", label: "High School Graduate" },
    SelectOption { value: "11th", label: "11th Grade" },
    SelectOption { value: "10th", label: "10th Grade" },
    SelectOption { value: "9th", label: "9th Grade" },
];

pub const OCCUPATION_OPTIONS: [SelectOption; 13] = [
    SelectOption { value: "Tech-support", label: "Tech Support" },
    SelectOption { value: "Exec-managerial", label: "Executive/Managerial" },
    SelectOption { value: "Prof-specialty", label: "Professional Specialty" },
    SelectOption { value: "Sales", label: "Sales" },
    SelectOption { value: "Craft-repair", label: "Craft Repair" },
    SelectOption { value: "Adm-clerical", label: "Administrative/Clerical" },
    SelectOption { value: "Machine-op-inspct", label: "Machine Operator" },
    SelectOption { value: "Transport-moving", label: "Transportation" },
    SelectOption { value: "Handlers-cleaners", label: "Handlers/Cleaners" },
    SelectOption { value: "Farming-fishing", label: "Farming/Fishing" },
    SelectOption { value: "Protective-serv", label: "Protective Services" },
    SelectOption { value: "Priv-house-serv", label: "Private House Service" },
    SelectOption { value: "Armed-Forces", label: "Armed Forces" },
];

pub const MARITAL_STATUS_OPTIONS: [SelectOption; 7] = [
    SelectOption { value: "Married-civ-spouse", label: "Married (Civilian Spouse)" },
    SelectOption { value: "Never-married", label: "Never Married" },
    SelectOption { value: "Divorced", label: "Divorced" },
    SelectOption { value: "Separated", label: "Separated" },
    SelectOption { value: "Widowed", label: "Widowed" },
    SelectOption { value: "Married-spouse-absent", label: "Married (Spouse Absent)" },
    SelectOption { value: "Married-AF-spouse", label: "Married (Armed Forces Spouse)" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    WorkHours,
    Education,
    Occupation,
    MaritalStatus,
    Relationship,
}

pub const FIELD_ORDER: [Field; 6] = [
    Field::Age,
    Field::WorkHours,
    Field::Education,
    Field::Occupation,
    Field::MaritalStatus,
    Field::Relationship,
];

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::WorkHours => "Work Hours/Week",
            Field::Education => "Education Level",
            Field::Occupation => "Occupation",
            Field::MaritalStatus => "Marital Status",
            Field::Relationship => "Relationship",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Field::Age | Field::WorkHours)
    }
}

/// Working state of the entry form. Numeric fields hold the raw typed
/// digits; select fields hold an index into their option table, `None`
/// until the user picks one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub age: String,
    pub work_hours: String,
    pub education: Option<usize>,
    pub occupation: Option<usize>,
    pub marital_status: Option<usize>,
    pub relationship: String,
    pub focus: Field,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            age: String::new(),
            work_hours: "40".into(),
            education: None,
            occupation: None,
            marital_status: None,
            relationship: String::new(),
            focus: Field::Age,
        }
    }

    /// Back to the initial state: age empty, hours 40, nothing selected.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus_next(&mut self) {
        self.focus = Self::neighbor(self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = Self::neighbor(self.focus, FIELD_ORDER.len() - 1);
    }

    fn neighbor(field: Field, offset: usize) -> Field {
        let index = FIELD_ORDER.iter().position(|f| *f == field).unwrap_or(0);
        FIELD_ORDER[(index + offset) % FIELD_ORDER.len()]
    }

    /// Typed character routed to the focused field. Numeric fields accept
    /// digits only; select fields ignore typing (arrow keys cycle them).
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            field if field.is_numeric() => {
                if c.is_ascii_digit() {
                    let buffer = self.numeric_buffer_mut();
                    if buffer.len() < 3 {
                        buffer.push(c);
                    }
                }
            }
            Field::Relationship => {
                if self.relationship.len() < 32 && (c.is_alphanumeric() || " -".contains(c)) {
                    self.relationship.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            field if field.is_numeric() => {
                self.numeric_buffer_mut().pop();
            }
            Field::Relationship => {
                self.relationship.pop();
            }
            _ => {}
        }
    }

    fn numeric_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            Field::WorkHours => &mut self.work_hours,
            _ => &mut self.age,
        }
    }

    /// Cycle the focused select field forward or backward through its
    /// options; wraps at either end. No-op on non-select fields.
    pub fn cycle(&mut self, forward: bool) {
        let len = match self.focus {
            Field::Education => EDUCATION_OPTIONS.len(),
            Field::Occupation => OCCUPATION_OPTIONS.len(),
            Field::MaritalStatus => MARITAL_STATUS_OPTIONS.len(),
            _ => return,
        };
        let slot = match self.focus {
            Field::Education => &mut self.education,
            Field::Occupation => &mut self.occupation,
            _ => &mut self.marital_status,
        };
        *slot = Some(match (*slot, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    pub fn selected(&self, field: Field) -> Option<SelectOption> {
        match field {
            Field::Education => self.education.map(|i| EDUCATION_OPTIONS[i]),
            Field::Occupation => self.occupation.map(|i| OCCUPATION_OPTIONS[i]),
            Field::MaritalStatus => self.marital_status.map(|i| MARITAL_STATUS_OPTIONS[i]),
            _ => None,
        }
    }

    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Age => self.age.clone(),
            Field::WorkHours => self.work_hours.clone(),
            Field::Relationship => self.relationship.clone(),
            _ => self
                .selected(field)
                .map(|option| option.label.to_string())
                .unwrap_or_default(),
        }
    }

    /// Snapshot the form into a scoring record. Unset numerics default to
    /// 0 (age) and 40 (hours); unselected fields become empty strings and
    /// are caught by validation.
    pub fn to_profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            age: self.age.parse().unwrap_or(0),
            work_hours: self.work_hours.parse().unwrap_or(40),
            education: self
                .selected(Field::Education)
                .map(|o| o.value.to_string())
                .unwrap_or_default(),
            occupation: self
                .selected(Field::Occupation)
                .map(|o| o.value.to_string())
                .unwrap_or_default(),
            marital_status: self
                .selected(Field::MaritalStatus)
                .map(|o| o.value.to_string())
                .unwrap_or_default(),
            relationship: self.relationship.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_form_defaults_match_the_profile_defaults() {
        let profile = FormState::new().to_profile();
        assert_eq!(profile.age, 0);
        assert_eq!(profile.work_hours, 40);
        assert_eq!(profile.education, "");
        assert_eq!(profile.occupation, "");
        assert_eq!(profile.marital_status, "");
        assert_eq!(profile.relationship, "");
    }

    #[test]
    fn numeric_fields_take_digits_only() {
        let mut form = FormState::new();
        form.input_char('3');
        form.input_char('x');
        form.input_char('9');
        assert_eq!(form.age, "39");

        form.backspace();
        assert_eq!(form.age, "3");
    }

    #[test]
    fn select_cycling_wraps_both_ways() {
        let mut form = FormState::new();
        form.focus = Field::Education;

        form.cycle(false);
        assert_eq!(form.selected(Field::Education).unwrap().value, "9th");

        form.cycle(true);
        assert_eq!(form.selected(Field::Education).unwrap().value, "Doctorate");

        form.cycle(true);
        assert_eq!(form.selected(Field::Education).unwrap().value, "Masters");
    }

    #[test]
    fn focus_walks_the_field_order() {
        let mut form = FormState::new();
        for field in FIELD_ORDER {
            assert_eq!(form.focus, field);
            form.focus_next();
        }
        assert_eq!(form.focus, Field::Age);

        form.focus_prev();
        assert_eq!(form.focus, Field::Relationship);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut form = FormState::new();
        form.input_char('5');
        form.focus = Field::Occupation;
        form.cycle(true);
        form.focus = Field::Relationship;
        form.input_char('W');

        form.reset();
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn to_profile_uses_canonical_values_not_labels() {
        let mut form = FormState::new();
        form.focus = Field::Education;
        form.cycle(true);
        form.cycle(true);
        form.cycle(true);
        form.cycle(true);
        form.cycle(true);
        let profile = form.to_profile();
        assert_eq!(profile.education, "HS-grad");
        assert_eq!(form.display_value(Field::Education), "High School Graduate");
    }
}
