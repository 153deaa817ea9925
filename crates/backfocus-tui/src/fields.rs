//! Focusable form fields and their tab order.

/// A focusable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TelescopeBackfocus,
    Model,
    /// Name of the component at the given row.
    ComponentName(usize),
    /// Length of the component at the given row.
    ComponentLength(usize),
    GuiderInner,
    ImagerReading,
    GuiderReading,
    Corrector,
}

impl Field {
    /// Tab order for a form holding `component_count` component rows.
    #[must_use]
    pub fn order(component_count: usize) -> Vec<Field> {
        let mut fields = vec![Field::TelescopeBackfocus, Field::Model];
        for row in 0..component_count {
            fields.push(Field::ComponentName(row));
            fields.push(Field::ComponentLength(row));
        }
        fields.extend([
            Field::GuiderInner,
            Field::ImagerReading,
            Field::GuiderReading,
            Field::Corrector,
        ]);
        fields
    }

    /// Field after `self`, wrapping around.
    #[must_use]
    pub fn next(self, component_count: usize) -> Field {
        let order = Self::order(component_count);
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    /// Field before `self`, wrapping around.
    #[must_use]
    pub fn previous(self, component_count: usize) -> Field {
        let order = Self::order(component_count);
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }

    /// Fields edited as free text.
    #[must_use]
    pub fn is_text(self) -> bool {
        !matches!(self, Field::Model | Field::Corrector)
    }

    /// Fields that hold a number in millimetres.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        self.is_text() && !matches!(self, Field::ComponentName(_))
    }

    /// Whether `c` may be typed into this field.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        if self.is_numeric() {
            c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
        } else {
            self.is_text() && !c.is_control()
        }
    }

    /// Component row this field belongs to.
    #[must_use]
    pub fn component_row(self) -> Option<usize> {
        match self {
            Field::ComponentName(row) | Field::ComponentLength(row) => Some(row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_without_components() {
        let order = Field::order(0);
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], Field::TelescopeBackfocus);
        assert_eq!(order[2], Field::GuiderInner);
    }

    #[test]
    fn order_with_components() {
        let order = Field::order(2);
        assert_eq!(order.len(), 10);
        assert_eq!(order[2], Field::ComponentName(0));
        assert_eq!(order[5], Field::ComponentLength(1));
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(Field::Corrector.next(0), Field::TelescopeBackfocus);
        assert_eq!(Field::TelescopeBackfocus.previous(0), Field::Corrector);
        assert_eq!(Field::Model.next(1), Field::ComponentName(0));
        assert_eq!(Field::GuiderInner.previous(1), Field::ComponentLength(0));
    }

    #[test]
    fn stale_row_restarts_order() {
        assert_eq!(Field::ComponentName(3).next(0), Field::Model);
    }

    #[test]
    fn accepted_characters() {
        assert!(Field::TelescopeBackfocus.accepts('7'));
        assert!(Field::GuiderReading.accepts('.'));
        assert!(!Field::GuiderReading.accepts('x'));
        assert!(Field::ComponentName(0).accepts('x'));
        assert!(Field::ComponentName(0).accepts(' '));
        assert!(!Field::Model.accepts('1'));
        assert!(!Field::Corrector.accepts('x'));
        assert!(Field::ComponentLength(0).accepts('5'));
        assert!(!Field::ComponentLength(0).accepts('m'));
        assert!(!Field::ComponentName(0).accepts('\t'));
    }

    #[test]
    fn field_kinds() {
        assert!(Field::ComponentLength(0).is_numeric());
        assert!(!Field::ComponentName(0).is_numeric());
        assert!(Field::ComponentName(0).is_text());
        assert!(!Field::Corrector.is_text());
        assert_eq!(Field::ComponentLength(4).component_row(), Some(4));
        assert_eq!(Field::GuiderInner.component_row(), None);
    }
}
