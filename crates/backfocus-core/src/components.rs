//! User-editable list of extra spacer components in the optical path.

use std::fmt;

use serde::Serialize;

use crate::error::BackfocusError;
use crate::format::{format_constant, parse_number};

/// Unique identifier of a component within its list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentId(pub String);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One extra element (filter wheel, adapter, extension) between the
/// telescope and the ONAG.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    /// Length as typed by the user; non-numeric text counts as 0 mm.
    pub length: String,
}

impl Component {
    /// Numeric length in millimetres, 0 when the text is not a finite number.
    #[must_use]
    pub fn length_mm(&self) -> f64 {
        parse_number(&self.length).unwrap_or(0.0)
    }
}

/// Field of a component targeted by [`ComponentList::update`].
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentField {
    Name(String),
    Length(String),
}

/// Ordered collection of components, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ComponentList {
    entries: Vec<Component>,
    next_id: u64,
}

impl ComponentList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new component with a fresh id.
    pub fn add(&mut self, name: impl Into<String>, length_mm: f64) -> &Component {
        self.next_id += 1;
        let component = Component {
            id: ComponentId(format!("component-{}", self.next_id)),
            name: name.into(),
            length: format_constant(length_mm),
        };
        tracing::debug!(id = %component.id, "component added");
        self.entries.push(component);
        &self.entries[self.entries.len() - 1]
    }

    /// Remove the component with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ComponentId) -> Option<Component> {
        let index = self.entries.iter().position(|c| &c.id == id)?;
        tracing::debug!(%id, "component removed");
        Some(self.entries.remove(index))
    }

    /// Change the name or length of an existing component.
    pub fn update(&mut self, id: &ComponentId, field: ComponentField) -> Result<(), BackfocusError> {
        let component = self
            .entries
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| BackfocusError::ComponentNotFound(id.clone()))?;
        match field {
            ComponentField::Name(name) => component.name = name,
            ComponentField::Length(length) => component.length = length,
        }
        Ok(())
    }

    /// Sum of all lengths; unparsable lengths contribute 0.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.entries.iter().map(Component::length_mm).sum()
    }

    #[must_use]
    pub fn get(&self, id: &ComponentId) -> Option<&Component> {
        self.entries.iter().find(|c| &c.id == id)
    }

    /// Component at display position `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Component> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a `NAME=LENGTH` command-line component.
///
/// A bare number is accepted as an unnamed component.
pub fn parse_component_spec(spec: &str) -> Result<(String, f64), BackfocusError> {
    let invalid = || BackfocusError::InvalidComponent(spec.to_string());
    let (name, length) = match spec.rsplit_once('=') {
        Some((name, length)) => (name.trim(), length),
        None => ("", spec),
    };
    let length = parse_number(length).ok_or_else(invalid)?;
    if spec.contains('=') && name.is_empty() {
        return Err(invalid());
    }
    Ok((name.to_string(), length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_unique_ids() {
        let mut list = ComponentList::new();
        let a = list.add("", 0.0).id.clone();
        let b = list.add("Filter wheel", 20.0).id.clone();
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.at(1).unwrap().name, "Filter wheel");
    }

    #[test]
    fn ids_not_reused_after_remove() {
        let mut list = ComponentList::new();
        let a = list.add("a", 1.0).id.clone();
        list.remove(&a);
        let b = list.add("b", 1.0).id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut list = ComponentList::new();
        list.add("a", 1.0);
        assert!(list.remove(&ComponentId::from("component-99")).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn update_name_and_length() {
        let mut list = ComponentList::new();
        let id = list.add("", 0.0).id.clone();
        list.update(&id, ComponentField::Name("Tilt plate".into()))
            .unwrap();
        list.update(&id, ComponentField::Length("7.5".into())).unwrap();
        let component = list.get(&id).unwrap();
        assert_eq!(component.name, "Tilt plate");
        assert!((component.length_mm() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn update_missing_fails() {
        let mut list = ComponentList::new();
        let id = ComponentId::from("component-1");
        assert_eq!(
            list.update(&id, ComponentField::Name("x".into())),
            Err(BackfocusError::ComponentNotFound(id))
        );
    }

    #[test]
    fn total_skips_unparsable_lengths() {
        let mut list = ComponentList::new();
        list.add("a", 10.0);
        let id = list.add("b", 0.0).id.clone();
        list.update(&id, ComponentField::Length("abc".into())).unwrap();
        list.add("c", 2.5);
        assert!((list.total_length() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_total_is_zero() {
        assert!(ComponentList::new().total_length().abs() < f64::EPSILON);
    }

    #[test]
    fn new_component_length_text() {
        let mut list = ComponentList::new();
        assert_eq!(list.add("", 0.0).length, "0");
        assert_eq!(list.add("", 16.5).length, "16.5");
    }

    #[test]
    fn parse_component_specs() {
        assert_eq!(
            parse_component_spec("Filter wheel=20").unwrap(),
            ("Filter wheel".to_string(), 20.0)
        );
        assert_eq!(parse_component_spec("12.5").unwrap(), (String::new(), 12.5));
        assert!(parse_component_spec("=5").is_err());
        assert!(parse_component_spec("adapter=").is_err());
        assert!(parse_component_spec("adapter=long").is_err());
    }
}
