// ── Built-in fallback data ──
//
// Canned stations and users shown when the very first load of those
// collections fails, so the station map and staff views still render
// something navigable offline. Collections holding this data carry
// the `ShowingFallback` phase, never `Loaded`.

use crate::model::{
    Coordinates, EquipmentGroup, LayoutArea, ResourceId, Role, SafetyEquipment, Station,
    StationContact, User, UserStatus, Utility,
};

pub(crate) fn stations() -> Vec<Station> {
    vec![
        Station {
            id: ResourceId::from(1u64),
            name: "Riverside Service Station".to_owned(),
            address: Some("14 Quay Road".to_owned()),
            city: Some("Millbrook".to_owned()),
            region: Some("West".to_owned()),
            postal_code: Some("4021".to_owned()),
            coordinates: Some(Coordinates {
                latitude: 51.482,
                longitude: -0.151,
            }),
            license_number: Some("FS-2201".to_owned()),
            operating_hours: Some("06:00-22:00".to_owned()),
            contact: StationContact {
                phone: Some("+1 555 0134".to_owned()),
                email: Some("riverside@forecourt.example".to_owned()),
                manager: Some("Priya Nair".to_owned()),
            },
            equipment: vec![
                EquipmentGroup {
                    category: "Dispensers".to_owned(),
                    items: vec!["Pump 1".to_owned(), "Pump 2".to_owned(), "Pump 3".to_owned()],
                },
                EquipmentGroup {
                    category: "Tanks".to_owned(),
                    items: vec!["Tank A (Unleaded)".to_owned(), "Tank B (Diesel)".to_owned()],
                },
            ],
            utilities: vec![Utility {
                name: "Electricity".to_owned(),
                provider: Some("GridCo".to_owned()),
            }],
            safety_equipment: vec![SafetyEquipment {
                name: "Fire extinguisher bank".to_owned(),
                last_inspection: None,
            }],
            photos: Vec::new(),
            layout_areas: vec![LayoutArea {
                name: "Forecourt".to_owned(),
                purpose: Some("Fueling".to_owned()),
            }],
            manager_id: Some(ResourceId::from(1u64)),
            technician_ids: vec![ResourceId::from(3u64)],
            asset_ids: Vec::new(),
        },
        Station {
            id: ResourceId::from(2u64),
            name: "Hillcrest Fuel & Go".to_owned(),
            address: Some("200 Summit Avenue".to_owned()),
            city: Some("Millbrook".to_owned()),
            region: Some("North".to_owned()),
            postal_code: Some("4140".to_owned()),
            coordinates: None,
            license_number: Some("FS-2202".to_owned()),
            operating_hours: Some("24/7".to_owned()),
            contact: StationContact::default(),
            equipment: Vec::new(),
            utilities: Vec::new(),
            safety_equipment: Vec::new(),
            photos: Vec::new(),
            layout_areas: Vec::new(),
            manager_id: Some(ResourceId::from(2u64)),
            technician_ids: vec![ResourceId::from(4u64)],
            asset_ids: Vec::new(),
        },
    ]
}

pub(crate) fn users() -> Vec<User> {
    vec![
        User {
            id: ResourceId::from(1u64),
            first_name: "Priya".to_owned(),
            last_name: "Nair".to_owned(),
            email: "priya.nair@forecourt.example".to_owned(),
            phone: Some("+1 555 0134".to_owned()),
            role: Role::Manager,
            status: UserStatus::Active,
            station: Some("Riverside Service Station".to_owned()),
            join_date: None,
            avatar: None,
        },
        User {
            id: ResourceId::from(2u64),
            first_name: "Marcus".to_owned(),
            last_name: "Webb".to_owned(),
            email: "marcus.webb@forecourt.example".to_owned(),
            phone: None,
            role: Role::Manager,
            status: UserStatus::Active,
            station: Some("Hillcrest Fuel & Go".to_owned()),
            join_date: None,
            avatar: None,
        },
        User {
            id: ResourceId::from(3u64),
            first_name: "Dana".to_owned(),
            last_name: "Reyes".to_owned(),
            email: "dana.reyes@forecourt.example".to_owned(),
            phone: None,
            role: Role::Technician,
            status: UserStatus::Active,
            station: Some("Riverside Service Station".to_owned()),
            join_date: None,
            avatar: None,
        },
        User {
            id: ResourceId::from(4u64),
            first_name: "Tomas".to_owned(),
            last_name: "Lindqvist".to_owned(),
            email: "tomas.lindqvist@forecourt.example".to_owned(),
            phone: None,
            role: Role::Technician,
            status: UserStatus::Inactive,
            station: Some("Hillcrest Fuel & Go".to_owned()),
            join_date: None,
            avatar: None,
        },
    ]
}
