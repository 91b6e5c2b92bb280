//! Reducer-style roster state.
//!
//! The GUI owns a single [`RosterState`] snapshot and replaces it wholesale
//! whenever an intent is applied. Transitions take `&self` and return a new
//! state, so a prior snapshot can never be mutated out from under a holder.

use shared::{
    domain::{Person, PersonId},
    error::RosterError,
};

/// One user-initiated roster transition, decoupled from any UI runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIntent {
    Rename { id: PersonId, name: String },
    Delete { id: PersonId },
    ToggleVisibility,
}

/// Ordered person list plus the list-visibility flag.
///
/// Invariant: person ids are unique. [`RosterState::from_persons`] is the
/// only constructor that accepts outside data and it rejects duplicates;
/// no transition can introduce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterState {
    persons: Vec<Person>,
    show_persons: bool,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl RosterState {
    /// The reference roster of six persons. The list starts hidden.
    pub fn seeded() -> Self {
        let persons = vec![
            Person::new("a", "Darren", 26),
            Person::new("b", "Anakin", 8),
            Person::new("c", "Sansa", 18),
            Person::new("d", "Joffrey", 18),
            Person::new("e", "Arya", 16),
            Person::new("f", "Eddard", 40),
        ];
        Self {
            persons,
            show_persons: false,
        }
    }

    pub fn from_persons(persons: Vec<Person>) -> Result<Self, RosterError> {
        for (index, person) in persons.iter().enumerate() {
            if persons[..index].iter().any(|other| other.id == person.id) {
                return Err(RosterError::DuplicateId {
                    id: person.id.clone(),
                });
            }
        }
        Ok(Self {
            persons,
            show_persons: false,
        })
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn show_persons(&self) -> bool {
        self.show_persons
    }

    /// Persons the UI should render: everyone when shown, nobody when hidden.
    pub fn visible_persons(&self) -> &[Person] {
        if self.show_persons {
            &self.persons
        } else {
            &[]
        }
    }

    pub fn find(&self, id: &PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| &person.id == id)
    }

    /// Single transition entry point for all intents.
    pub fn apply(&self, intent: &RosterIntent) -> Result<Self, RosterError> {
        match intent {
            RosterIntent::Rename { id, name } => Ok(self.rename(id, name.clone())),
            RosterIntent::Delete { id } => self.delete(id),
            RosterIntent::ToggleVisibility => Ok(self.toggle_visibility()),
        }
    }

    /// Returns a roster with the matching person renamed. An id that is not
    /// in the roster leaves it unchanged; `id` and `age` are never touched.
    pub fn rename(&self, id: &PersonId, name: impl Into<String>) -> Self {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(person = %id, "rename target not in roster; ignoring");
            return self.clone();
        };
        let mut persons = self.persons.clone();
        persons[index].name = name.into();
        Self {
            persons,
            show_persons: self.show_persons,
        }
    }

    /// Removes the person with the given id.
    pub fn delete(&self, id: &PersonId) -> Result<Self, RosterError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| RosterError::UnknownPerson { id: id.clone() })?;
        self.delete_at(index)
    }

    /// Removes the person at the given position; later entries shift down.
    pub fn delete_at(&self, index: usize) -> Result<Self, RosterError> {
        if index >= self.persons.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.persons.len(),
            });
        }
        let mut persons = self.persons.clone();
        persons.remove(index);
        Ok(Self {
            persons,
            show_persons: self.show_persons,
        })
    }

    /// Flips the visibility flag. The list itself is untouched.
    pub fn toggle_visibility(&self) -> Self {
        Self {
            persons: self.persons.clone(),
            show_persons: !self.show_persons,
        }
    }

    fn index_of(&self, id: &PersonId) -> Option<usize> {
        self.persons.iter().position(|person| &person.id == id)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
