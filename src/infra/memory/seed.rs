use chrono::NaiveDate;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::property::Property;
use crate::domain::entities::session::Role;
use crate::domain::entities::user::User;

const CITIES: [&str; 5] = ["Lisbon", "Porto", "Braga", "Faro", "Coimbra"];
const KINDS: [&str; 6] = [
    "Lakeview Apt",
    "Mountain Cabin",
    "Studio Loft",
    "Garden Room",
    "City Flat",
    "Riverside Suite",
];
const STREETS: [&str; 4] = ["Rua Augusta", "Avenida Central", "Rua do Sol", "Largo Velho"];

/// Offline sample data used when no backend url is configured.
pub fn sample_properties() -> Vec<Property> {
    (0..30)
        .map(|idx| {
            let kind = KINDS[idx % KINDS.len()];
            let city = CITIES[idx % CITIES.len()];
            Property {
                id: idx as i64 + 1,
                title: format!("{kind} #{}", idx + 1),
                city: city.to_string(),
                address: format!("{} {}", STREETS[idx % STREETS.len()], 10 + idx * 3),
                description: format!("{kind} in {city}"),
                price: 350.0 + (idx as f64 * 37.0) % 900.0,
                size: 12.0 + (idx as f64 * 7.0) % 80.0,
                rooms: Some(1 + (idx % 4) as u32),
                available: idx % 3 != 0,
                landlord_id: Some(100 + (idx % 3) as i64),
            }
        })
        .collect()
}

pub fn sample_users() -> Vec<User> {
    let names = [
        ("Ana", "Silva"),
        ("Bruno", "Costa"),
        ("Carla", "Mendes"),
        ("Diogo", "Ramos"),
        ("Eva", "Lopes"),
        ("Filipe", "Nunes"),
        ("Gabriela", "Pires"),
        ("Hugo", "Teixeira"),
        ("Ines", "Moreira"),
        ("Joao", "Martins"),
        ("Lara", "Sousa"),
        ("Miguel", "Alves"),
    ];
    names
        .iter()
        .enumerate()
        .map(|(idx, (first, last))| User {
            id: idx as i64 + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
            role: Role::ALL[idx % Role::ALL.len()],
            enabled: idx % 5 != 4,
        })
        .collect()
}

pub fn sample_bookings() -> Vec<Booking> {
    let statuses = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Rejected,
        BookingStatus::Cancelled,
    ];
    let properties = sample_properties();
    (0..16)
        .filter_map(|idx| {
            let property = properties.get(idx * 2)?;
            let start_date = NaiveDate::from_ymd_opt(2026, 1 + (idx % 12) as u32, 1)?;
            let end_date = start_date + chrono::Duration::days(7 + idx as i64 * 3);
            let nights = (end_date - start_date).num_days() as f64;
            Some(Booking {
                id: idx as i64 + 1,
                property_id: property.id,
                property_title: property.title.clone(),
                seeker_id: 1 + (idx % 4) as i64 * 3,
                seeker_name: format!("Seeker {}", idx % 4 + 1),
                start_date,
                end_date,
                total_price: (property.price / 30.0 * nights).round(),
                status: statuses[idx % statuses.len()],
            })
        })
        .collect()
}
