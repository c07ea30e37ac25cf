//! User records managed by the roster table.
//!
//! Records are immutable once loaded. Identifiers are interned with `Ustr`
//! because they are cloned and compared on every selection check.

use std::{borrow::Cow, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::ParseError;

/// Account status of a user. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Warning,
    Danger,
    Inactive,
}

impl UserStatus {
    pub const ALL: [Self; 4] = [Self::Active, Self::Warning, Self::Danger, Self::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
            Self::Inactive => "Inactive",
        }
    }

    /// Text shown to the user. `Warning` reads as "Vacation" in the table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "Vacation",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownStatus(trimmed.to_owned()))
    }
}

/// Attribute of a [`User`] that can be searched or shown in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    Id,
    FirstName,
    LastName,
    Email,
    Role,
    Age,
    EyeColor,
    Status,
    Country,
    Salary,
    JoinedDate,
    Department,
    LastActive,
    Project,
    Location,
    Tags,
    PhoneNumber,
    City,
    ZipCode,
    CompanyName,
    TwitterHandle,
    GithubUsername,
    Timezone,
    LastLoginIp,
    ProjectBudget,
    Language,
}

impl UserField {
    pub const ALL: [Self; 26] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Role,
        Self::Age,
        Self::EyeColor,
        Self::Status,
        Self::Country,
        Self::Salary,
        Self::JoinedDate,
        Self::Department,
        Self::LastActive,
        Self::Project,
        Self::Location,
        Self::Tags,
        Self::PhoneNumber,
        Self::City,
        Self::ZipCode,
        Self::CompanyName,
        Self::TwitterHandle,
        Self::GithubUsername,
        Self::Timezone,
        Self::LastLoginIp,
        Self::ProjectBudget,
        Self::Language,
    ];

    /// Stable camelCase key, used in configuration.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Role => "role",
            Self::Age => "age",
            Self::EyeColor => "eyeColor",
            Self::Status => "status",
            Self::Country => "country",
            Self::Salary => "salary",
            Self::JoinedDate => "joinedDate",
            Self::Department => "department",
            Self::LastActive => "lastActive",
            Self::Project => "project",
            Self::Location => "location",
            Self::Tags => "tags",
            Self::PhoneNumber => "phoneNumber",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::CompanyName => "companyName",
            Self::TwitterHandle => "twitterHandle",
            Self::GithubUsername => "githubUsername",
            Self::Timezone => "timezone",
            Self::LastLoginIp => "lastLoginIp",
            Self::ProjectBudget => "projectBudget",
            Self::Language => "language",
        }
    }

    pub fn is_currency(self) -> bool {
        matches!(self, Self::Salary | Self::ProjectBudget)
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UserField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key() == trimmed)
            .ok_or_else(|| ParseError::UnknownField(trimmed.to_owned()))
    }
}

/// One user entity in the managed collection.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Ustr,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub age: u32,
    pub eye_color: String,
    pub status: UserStatus,
    pub country: String,
    pub salary: u64,
    pub joined_date: NaiveDate,
    pub department: String,
    pub last_active: String,
    pub project: String,
    pub location: String,
    pub tags: Vec<String>,
    pub phone_number: String,
    pub city: String,
    pub zip_code: String,
    pub company_name: String,
    pub twitter_handle: String,
    pub github_username: String,
    pub timezone: String,
    pub last_login_ip: String,
    pub project_budget: u64,
    pub language: String,
}

impl User {
    /// Plain string form of a field, as matched by search.
    ///
    /// Numbers are plain decimals, tags are comma-joined and dates use
    /// `YYYY-MM-DD`.
    pub fn field_text(&self, field: UserField) -> Cow<'_, str> {
        match field {
            UserField::Id => Cow::Borrowed(self.id.as_str()),
            UserField::FirstName => Cow::Borrowed(&self.first_name),
            UserField::LastName => Cow::Borrowed(&self.last_name),
            UserField::Email => Cow::Borrowed(&self.email),
            UserField::Role => Cow::Borrowed(&self.role),
            UserField::Age => Cow::Owned(self.age.to_string()),
            UserField::EyeColor => Cow::Borrowed(&self.eye_color),
            UserField::Status => Cow::Borrowed(self.status.as_str()),
            UserField::Country => Cow::Borrowed(&self.country),
            UserField::Salary => Cow::Owned(self.salary.to_string()),
            UserField::JoinedDate => Cow::Owned(self.joined_date.format("%Y-%m-%d").to_string()),
            UserField::Department => Cow::Borrowed(&self.department),
            UserField::LastActive => Cow::Borrowed(&self.last_active),
            UserField::Project => Cow::Borrowed(&self.project),
            UserField::Location => Cow::Borrowed(&self.location),
            UserField::Tags => Cow::Owned(self.tags.join(",")),
            UserField::PhoneNumber => Cow::Borrowed(&self.phone_number),
            UserField::City => Cow::Borrowed(&self.city),
            UserField::ZipCode => Cow::Borrowed(&self.zip_code),
            UserField::CompanyName => Cow::Borrowed(&self.company_name),
            UserField::TwitterHandle => Cow::Borrowed(&self.twitter_handle),
            UserField::GithubUsername => Cow::Borrowed(&self.github_username),
            UserField::Timezone => Cow::Borrowed(&self.timezone),
            UserField::LastLoginIp => Cow::Borrowed(&self.last_login_ip),
            UserField::ProjectBudget => Cow::Owned(self.project_budget.to_string()),
            UserField::Language => Cow::Borrowed(&self.language),
        }
    }

    /// Text a table cell shows for a field.
    pub fn display_text(&self, field: UserField) -> Cow<'_, str> {
        match field {
            UserField::Status => Cow::Borrowed(self.status.label()),
            UserField::Salary => Cow::Owned(format_usd(self.salary)),
            UserField::ProjectBudget => Cow::Owned(format_usd(self.project_budget)),
            UserField::JoinedDate => Cow::Owned(self.joined_date.format("%b %d, %Y").to_string()),
            other => self.field_text(other),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Formats whole dollars as `$45,000.00`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.00")
}
