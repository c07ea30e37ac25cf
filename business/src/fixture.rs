//! Seed data for the record store.

use chrono::NaiveDate;
use ustr::ustr;

use crate::{User, UserStatus};

pub const FIXTURE_SIZE: usize = 100;

const FIRST_NAMES: [&str; 10] = [
    "Emily",
    "Michael",
    "Sophia",
    "James",
    "Emma",
    "Olivia",
    "Alexander",
    "Ava",
    "Ethan",
    "Isabella",
];
const LAST_NAMES: [&str; 10] = [
    "Johnson",
    "Williams",
    "Brown",
    "Davis",
    "Miller",
    "Wilson",
    "Jones",
    "Taylor",
    "Martinez",
    "Anderson",
];
const ROLES: [&str; 6] = ["Admin", "Moderator", "Editor", "User", "Manager", "Developer"];
const COUNTRIES: [&str; 8] = [
    "USA",
    "Brazil",
    "Canada",
    "Germany",
    "UK",
    "France",
    "Japan",
    "Australia",
];
const DEPARTMENTS: [&str; 6] = ["Engineering", "Product", "Sales", "HR", "Marketing", "Legal"];
const COMPANIES: [&str; 6] = [
    "TechCorp",
    "Innovate Solutions",
    "DataFlow",
    "CloudNine",
    "GreenEnergy",
    "Nexus Labs",
];
const LANGUAGES: [&str; 6] = ["English", "Portuguese", "Spanish", "French", "German", "Japanese"];
const CITIES: [&str; 5] = ["São Paulo", "New York", "London", "Berlin", "Tokyo"];
const TIMEZONES: [&str; 5] = ["UTC-3", "UTC+0", "UTC+1", "UTC-5", "UTC+9"];

/// The 100 users shown by the demo table.
///
/// Names cycle every 10 records and statuses every 4, so one tenth of the
/// store shares a first name and each status covers a quarter of it.
pub fn users() -> Vec<User> {
    (0..FIXTURE_SIZE).map(user).collect()
}

fn user(i: usize) -> User {
    let first = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last = LAST_NAMES[i % LAST_NAMES.len()];
    let handle = first.to_lowercase();
    let n = i as u64;

    User {
        id: ustr(&format!("user-{i}")),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: format!("{handle}.{}@company.com", last.to_lowercase()),
        role: ROLES[i % ROLES.len()].to_owned(),
        age: 20 + (i % 30) as u32,
        eye_color: if i % 2 == 0 { "Green" } else { "Blue" }.to_owned(),
        status: UserStatus::ALL[i % UserStatus::ALL.len()],
        country: COUNTRIES[i % COUNTRIES.len()].to_owned(),
        salary: 45_000 + n * 500,
        joined_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
        department: DEPARTMENTS[i % DEPARTMENTS.len()].to_owned(),
        last_active: "2 hours ago".to_owned(),
        project: "Alpha-1".to_owned(),
        location: "Remote".to_owned(),
        tags: vec!["Priority".to_owned(), "Remote".to_owned()],
        // phone and zip only need to look plausible and stay stable between runs
        phone_number: format!("+55 (11) 9{}", 10_000_000 + (n * 7_919_113) % 90_000_000),
        city: CITIES[i % CITIES.len()].to_owned(),
        zip_code: format!("{}", 10_000 + (n * 7_331) % 90_000),
        company_name: COMPANIES[i % COMPANIES.len()].to_owned(),
        twitter_handle: format!("@{handle}_{i}"),
        github_username: format!("{handle}{i}"),
        timezone: TIMEZONES[i % TIMEZONES.len()].to_owned(),
        last_login_ip: format!("192.168.1.{i}"),
        project_budget: 5_000 + n * 1_200,
        language: LANGUAGES[i % LANGUAGES.len()].to_owned(),
    }
}
