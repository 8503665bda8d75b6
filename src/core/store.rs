use super::models::{
    Student,
    StudentFields,
    StudentId,
};

/// Ordered student records. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self { students: Vec::new() }
    }

    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// `max(existing ids) + 1`, so deleting the highest id frees it for reuse.
    /// `None` once a record holds `u32::MAX`.
    pub fn next_id(&self) -> Option<StudentId> {
        let max = self.students.iter().map(|student| student.id.0).max().unwrap_or(0);
        max.checked_add(1).map(StudentId)
    }

    pub fn insert(&mut self, fields: StudentFields) -> Option<StudentId> {
        let id = self.next_id()?;
        self.students.push(Student { id, name: fields.name, class: fields.class, age: fields.age });
        Some(id)
    }

    /// Replaces the fields of `id` in place. Returns false if the id is unknown.
    pub fn update(&mut self, id: StudentId, fields: StudentFields) -> bool {
        match self.students.iter_mut().find(|student| student.id == id) {
            Some(student) => {
                student.name = fields.name;
                student.class = fields.class;
                student.age = fields.age;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let pos = self.students.iter().position(|student| student.id == id)?;
        Some(self.students.remove(pos))
    }
}
