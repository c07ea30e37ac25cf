//! Column registry: which record attributes the table shows, in what order.

use std::fmt;

use crate::UserField;

/// Identifies a column: a record attribute or the row actions pseudo-column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Field(UserField),
    Actions,
}

impl ColumnKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Field(field) => field.key(),
            Self::Actions => "actions",
        }
    }

    pub fn field(self) -> Option<UserField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Actions => None,
        }
    }
}

impl From<UserField> for ColumnKey {
    fn from(field: UserField) -> Self {
        Self::Field(field)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side a column is pinned to while the table scrolls horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickySide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub label: String,
    pub visible: bool,
    /// Preferred width in points.
    pub width: Option<f32>,
    pub sticky: Option<StickySide>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<ColumnKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            visible: true,
            width: None,
            sticky: None,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn sticky(mut self, side: StickySide) -> Self {
        self.sticky = Some(side);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Ordered column descriptors with unique keys. Order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDescriptor>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        use StickySide::{Left, Right};
        use UserField as F;

        Self::new(vec![
            ColumnDescriptor::new(F::FirstName, "First Name").sticky(Left).width(250.0),
            ColumnDescriptor::new(F::LastName, "Last Name").width(150.0),
            ColumnDescriptor::new(F::Email, "Email Address").width(240.0),
            ColumnDescriptor::new(F::Role, "Role").width(140.0),
            ColumnDescriptor::new(F::Status, "Status").width(120.0),
            ColumnDescriptor::new(F::PhoneNumber, "Phone").width(160.0),
            ColumnDescriptor::new(F::CompanyName, "Company").width(180.0),
            ColumnDescriptor::new(F::City, "City").width(140.0),
            ColumnDescriptor::new(F::ZipCode, "Zip Code").width(100.0),
            ColumnDescriptor::new(F::TwitterHandle, "Twitter").width(150.0),
            ColumnDescriptor::new(F::GithubUsername, "GitHub").width(150.0),
            ColumnDescriptor::new(F::Timezone, "Timezone").width(160.0),
            ColumnDescriptor::new(F::LastLoginIp, "Login IP").width(140.0),
            ColumnDescriptor::new(F::ProjectBudget, "Budget").width(140.0),
            ColumnDescriptor::new(F::Language, "Language").width(120.0),
            ColumnDescriptor::new(F::Age, "Age").width(80.0),
            ColumnDescriptor::new(F::Salary, "Salary").width(120.0),
            ColumnDescriptor::new(F::Country, "Country").width(150.0),
            ColumnDescriptor::new(F::Department, "Department").width(150.0),
            ColumnDescriptor::new(F::JoinedDate, "Joined Date").width(150.0),
            ColumnDescriptor::new(ColumnKey::Actions, "Actions").sticky(Right).width(100.0),
        ])
    }
}

impl ColumnRegistry {
    /// Builds a registry, dropping any later descriptor that reuses a key.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        let mut unique: Vec<ColumnDescriptor> = Vec::with_capacity(columns.len());
        for column in columns {
            if unique.iter().any(|c| c.key == column.key) {
                log::warn!("dropping duplicate column {}", column.key);
                continue;
            }
            unique.push(column);
        }
        Self { columns: unique }
    }

    /// All columns, in display order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn get(&self, key: ColumnKey) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    fn get_mut(&mut self, key: ColumnKey) -> Option<&mut ColumnDescriptor> {
        let found = self.columns.iter_mut().find(|c| c.key == key);
        if found.is_none() {
            log::debug!("ignoring unknown column {key}");
        }
        found
    }

    /// Visible columns, in display order. May be empty.
    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| c.visible).collect()
    }

    /// Visible columns as laid out on screen: left-pinned first, then the
    /// unpinned ones, then right-pinned. Registry order holds within a group.
    pub fn layout(&self) -> Vec<&ColumnDescriptor> {
        let mut columns = self.visible_columns();
        columns.sort_by_key(|c| match c.sticky {
            Some(StickySide::Left) => 0,
            None => 1,
            Some(StickySide::Right) => 2,
        });
        columns
    }

    pub fn visible_count(&self) -> usize {
        self.columns.iter().filter(|c| c.visible).count()
    }

    /// Flips visibility. Unknown keys are ignored.
    pub fn toggle_visibility(&mut self, key: ColumnKey) {
        if let Some(column) = self.get_mut(key) {
            column.visible = !column.visible;
        }
    }

    pub fn hide(&mut self, key: ColumnKey) {
        if let Some(column) = self.get_mut(key) {
            column.visible = false;
        }
    }

    /// Pins a column to a side, or unpins it with `None`.
    pub fn pin(&mut self, key: ColumnKey, side: Option<StickySide>) {
        if let Some(column) = self.get_mut(key) {
            column.sticky = side;
        }
    }

    /// Moves a column to `to_index`, clamped to the last position.
    pub fn move_column(&mut self, key: ColumnKey, to_index: usize) {
        let Some(from) = self.columns.iter().position(|c| c.key == key) else {
            log::debug!("ignoring move of unknown column {key}");
            return;
        };
        let column = self.columns.remove(from);
        let to = to_index.min(self.columns.len());
        self.columns.insert(to, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(registry: &ColumnRegistry) -> Vec<ColumnKey> {
        registry.visible_columns().iter().map(|c| c.key).collect()
    }

    #[test]
    fn default_registry_matches_table_layout() {
        let registry = ColumnRegistry::default();
        assert_eq!(registry.columns().len(), 21);
        assert_eq!(registry.visible_count(), 21);

        let first = &registry.columns()[0];
        assert_eq!(first.key, ColumnKey::Field(UserField::FirstName));
        assert_eq!(first.sticky, Some(StickySide::Left));

        let last = registry.columns().last().unwrap();
        assert_eq!(last.key, ColumnKey::Actions);
        assert_eq!(last.sticky, Some(StickySide::Right));
        assert_eq!(last.width, Some(100.0));
    }

    #[test]
    fn toggle_visibility_flips_and_keeps_order() {
        let mut registry = ColumnRegistry::default();
        let email = ColumnKey::Field(UserField::Email);

        registry.toggle_visibility(email);
        assert!(!keys(&registry).contains(&email));
        assert_eq!(registry.visible_count(), 20);

        registry.toggle_visibility(email);
        assert_eq!(keys(&registry)[2], email);
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut registry = ColumnRegistry::new(vec![ColumnDescriptor::new(
            UserField::FirstName,
            "First Name",
        )]);
        let before = registry.clone();
        registry.toggle_visibility(ColumnKey::Actions);
        registry.pin(ColumnKey::Actions, Some(StickySide::Left));
        registry.move_column(ColumnKey::Actions, 0);
        assert_eq!(registry, before);
    }

    #[test]
    fn sticky_and_actions_columns_can_be_hidden() {
        let mut registry = ColumnRegistry::default();
        registry.hide(ColumnKey::Actions);
        registry.hide(ColumnKey::Field(UserField::FirstName));
        assert_eq!(registry.visible_count(), 19);
    }

    #[test]
    fn hiding_everything_is_valid() {
        let mut registry = ColumnRegistry::default();
        let all: Vec<ColumnKey> = registry.columns().iter().map(|c| c.key).collect();
        for key in all {
            registry.toggle_visibility(key);
        }
        assert!(registry.visible_columns().is_empty());
    }

    #[test]
    fn duplicate_keys_are_dropped() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new(UserField::Age, "Age"),
            ColumnDescriptor::new(UserField::Age, "Age again").hidden(),
        ]);
        assert_eq!(registry.columns().len(), 1);
        assert_eq!(registry.columns()[0].label, "Age");
    }

    #[test]
    fn move_column_reorders_and_clamps() {
        let mut registry = ColumnRegistry::default();
        let age = ColumnKey::Field(UserField::Age);

        registry.move_column(age, 0);
        assert_eq!(registry.columns()[0].key, age);

        registry.move_column(age, 999);
        assert_eq!(registry.columns().last().map(|c| c.key), Some(age));
        assert_eq!(registry.columns().len(), 21);
    }

    #[test]
    fn layout_groups_pinned_columns() {
        let mut registry = ColumnRegistry::default();
        let city = ColumnKey::Field(UserField::City);
        let age = ColumnKey::Field(UserField::Age);

        registry.pin(city, Some(StickySide::Left));
        registry.pin(age, Some(StickySide::Right));
        let layout: Vec<ColumnKey> = registry.layout().iter().map(|c| c.key).collect();

        assert_eq!(layout[..2], [ColumnKey::Field(UserField::FirstName), city]);
        assert_eq!(layout[layout.len() - 2..], [age, ColumnKey::Actions]);
        assert_eq!(layout.len(), 21);
    }

    #[test]
    fn pin_and_unpin() {
        let mut registry = ColumnRegistry::default();
        let city = ColumnKey::Field(UserField::City);

        registry.pin(city, Some(StickySide::Right));
        assert_eq!(registry.get(city).and_then(|c| c.sticky), Some(StickySide::Right));

        registry.pin(city, None);
        assert_eq!(registry.get(city).and_then(|c| c.sticky), None);
    }
}
