use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub class: String,
    pub age: u32,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>, class: impl Into<String>, age: u32) -> Self {
        Self { id: StudentId(id), name: name.into(), class: class.into(), age }
    }
}

/// A record body that passed validation; everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub class: String,
    pub age: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Class,
    Age,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Class, FormField::Age];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Class => "Class",
            FormField::Age => "Age",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            FormField::Name => "Enter full name",
            FormField::Class => "Enter class",
            FormField::Age => "Enter age",
        }
    }
}

/// Text typed into the add/edit form. Age stays text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub name: String,
    pub class: String,
    pub age: String,
}

impl DraftForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            class: student.class.clone(),
            age: student.age.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Class => &self.class,
            FormField::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Class => self.class = value,
            FormField::Age => self.age = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn sample_roster() -> Vec<Student> {
    vec![
        Student::new(1, "Nguyễn Văn A", "10A1", 16),
        Student::new(2, "Trần Thị B", "11A2", 17),
        Student::new(3, "Lê Văn C", "12A3", 18),
        Student::new(4, "Phạm Thị D", "10A1", 16),
        Student::new(5, "Hoàng Văn E", "11A2", 17),
        Student::new(6, "Vũ Thị F", "12A3", 18),
        Student::new(7, "Đặng Văn G", "10A1", 16),
        Student::new(8, "Bùi Thị H", "11A2", 17),
    ]
}
