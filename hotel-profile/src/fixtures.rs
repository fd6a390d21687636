//! Demo data for development databases

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::model::{HotelStatus, NewHotel, NewRoomType, RoomTypeStatus};
use crate::repository::{hotels, room_types};

struct HotelSeed {
    name: &'static str,
    address: &'static str,
    contact_person: &'static str,
    phone: &'static str,
    email: &'static str,
    star_level: i64,
    status: HotelStatus,
    facilities: &'static [&'static str],
    photos: &'static [&'static str],
    rooms: &'static [RoomSeed],
}

struct RoomSeed {
    name: &'static str,
    area: f64,
    bed_type: &'static str,
    max_guests: i64,
    breakfast_count: i64,
    photos: &'static [&'static str],
    description: &'static str,
    status: RoomTypeStatus,
}

const LUXURY_ROOMS: &[RoomSeed] = &[
    RoomSeed {
        name: "Deluxe King",
        area: 45.0,
        bed_type: "Super king",
        max_guests: 2,
        breakfast_count: 2,
        photos: &["luxury-king-room-1.jpg", "luxury-king-room-2.jpg"],
        description: "Spacious room with a super king bed, minibar and smart TV.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Executive Suite",
        area: 65.0,
        bed_type: "Super king",
        max_guests: 2,
        breakfast_count: 2,
        photos: &["luxury-suite-1.jpg", "luxury-suite-2.jpg"],
        description: "Separate living room and bedroom with executive lounge access.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Deluxe Twin",
        area: 50.0,
        bed_type: "Two singles",
        max_guests: 3,
        breakfast_count: 2,
        photos: &["luxury-twin-room-1.jpg", "luxury-twin-room-2.jpg"],
        description: "Two single beds, suited to business trips or families.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Presidential Suite",
        area: 120.0,
        bed_type: "Super king",
        max_guests: 4,
        breakfast_count: 4,
        photos: &["presidential-suite-1.jpg", "presidential-suite-2.jpg"],
        description: "Several bedrooms, a dining room and a private butler.",
        status: RoomTypeStatus::Active,
    },
];

const BUSINESS_ROOMS: &[RoomSeed] = &[
    RoomSeed {
        name: "Business King",
        area: 35.0,
        bed_type: "King",
        max_guests: 2,
        breakfast_count: 2,
        photos: &["business-king-room-1.jpg", "business-king-room-2.jpg"],
        description: "King bed and a work desk.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Business Twin",
        area: 38.0,
        bed_type: "Two singles",
        max_guests: 3,
        breakfast_count: 2,
        photos: &["business-twin-room-1.jpg", "business-twin-room-2.jpg"],
        description: "Two single beds for colleagues travelling together.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Business Suite",
        area: 55.0,
        bed_type: "King",
        max_guests: 2,
        breakfast_count: 2,
        photos: &["business-suite-1.jpg", "business-suite-2.jpg"],
        description: "Separate work and rest areas.",
        status: RoomTypeStatus::Active,
    },
];

const STANDARD_ROOMS: &[RoomSeed] = &[
    RoomSeed {
        name: "Standard King",
        area: 25.0,
        bed_type: "King",
        max_guests: 2,
        breakfast_count: 0,
        photos: &["standard-king-room-1.jpg", "standard-king-room-2.jpg"],
        description: "The basics, with a comfortable king bed.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Standard Twin",
        area: 28.0,
        bed_type: "Two singles",
        max_guests: 2,
        breakfast_count: 0,
        photos: &["standard-twin-room-1.jpg", "standard-twin-room-2.jpg"],
        description: "Two single beds for friends or colleagues.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Economy Family",
        area: 32.0,
        bed_type: "One king and one single",
        max_guests: 3,
        breakfast_count: 0,
        photos: &["economy-family-room-1.jpg", "economy-family-room-2.jpg"],
        description: "Room for a small family.",
        status: RoomTypeStatus::Active,
    },
    RoomSeed {
        name: "Standard King with Breakfast",
        area: 25.0,
        bed_type: "King",
        max_guests: 2,
        breakfast_count: 2,
        photos: &["standard-king-room-breakfast-1.jpg", "standard-king-room-breakfast-2.jpg"],
        description: "Standard King including breakfast for two.",
        status: RoomTypeStatus::Disabled,
    },
];

const HOTELS: &[HotelSeed] = &[
    HotelSeed {
        name: "Grand Luxury Hotel",
        address: "88 Jianguo Road, Chaoyang District, Beijing",
        contact_person: "Manager Zhang",
        phone: "010-88889999",
        email: "luxury@example.com",
        star_level: 5,
        status: HotelStatus::Operating,
        facilities: &["Restaurant", "Gym", "Pool", "Business centre", "Spa", "Airport pickup", "Meeting rooms", "WiFi"],
        photos: &["luxury-hotel-exterior.jpg", "luxury-hotel-lobby.jpg", "luxury-hotel-room.jpg"],
        rooms: LUXURY_ROOMS,
    },
    HotelSeed {
        name: "Business Hotel",
        address: "Lujiazui Financial Centre, Pudong, Shanghai",
        contact_person: "Director Li",
        phone: "021-66667777",
        email: "business@example.com",
        star_level: 4,
        status: HotelStatus::Operating,
        facilities: &["Restaurant", "Gym", "Business centre", "Meeting rooms", "WiFi"],
        photos: &["business-hotel-exterior.jpg", "business-hotel-lobby.jpg", "business-hotel-room.jpg"],
        rooms: BUSINESS_ROOMS,
    },
    HotelSeed {
        name: "Seaside Resort",
        address: "Haitang Bay Resort Area, Sanya",
        contact_person: "Mr Wang",
        phone: "0898-88776655",
        email: "beach@example.com",
        star_level: 5,
        status: HotelStatus::Operating,
        facilities: &["Restaurant", "Pool", "Spa", "Beach", "Water sports", "Bar"],
        photos: &["beach-hotel-exterior.jpg", "beach-hotel-beach.jpg", "beach-hotel-room.jpg"],
        rooms: &[],
    },
    HotelSeed {
        name: "City Express Inn",
        address: "Tiyu Zhongxin Road, Tianhe District, Guangzhou",
        contact_person: "Manager Huang",
        phone: "020-33334444",
        email: "express@example.com",
        star_level: 3,
        status: HotelStatus::Operating,
        facilities: &["WiFi", "24h front desk", "Business centre"],
        photos: &["express-hotel-exterior.jpg", "express-hotel-room.jpg"],
        rooms: STANDARD_ROOMS,
    },
    HotelSeed {
        name: "Old Town Boutique",
        address: "Inside South Gate, Beilin District, Xi'an",
        contact_person: "Manager Zhao",
        phone: "029-87654321",
        email: "boutique@example.com",
        star_level: 4,
        status: HotelStatus::Operating,
        facilities: &["Restaurant", "WiFi", "Tea room", "Cultural activities"],
        photos: &["boutique-hotel-exterior.jpg", "boutique-hotel-room.jpg", "boutique-hotel-lobby.jpg"],
        rooms: &[],
    },
    HotelSeed {
        name: "Hot Spring Retreat",
        address: "Longjing Road, Xihu District, Hangzhou",
        contact_person: "Mr Lin",
        phone: "0571-12345678",
        email: "spa@example.com",
        star_level: 5,
        status: HotelStatus::Operating,
        facilities: &["Hot spring", "Spa", "Gym", "Restaurant", "Meeting rooms", "Business centre"],
        photos: &["spa-hotel-exterior.jpg", "spa-hotel-spa.jpg", "spa-hotel-room.jpg"],
        rooms: &[],
    },
    HotelSeed {
        name: "Budget Chain Hotel",
        address: "Kehua North Road, Wuhou District, Chengdu",
        contact_person: "Manager He",
        phone: "028-55556666",
        email: "budget@example.com",
        star_level: 2,
        status: HotelStatus::Operating,
        facilities: &["WiFi", "Breakfast buffet", "24h front desk"],
        photos: &["budget-hotel-exterior.jpg", "budget-hotel-room.jpg"],
        rooms: &[],
    },
    HotelSeed {
        name: "Youth Hostel",
        address: "Qiyi Street, Old Town, Lijiang",
        contact_person: "Manager Zhou",
        phone: "0888-77889900",
        email: "hostel@example.com",
        star_level: 2,
        status: HotelStatus::Operating,
        facilities: &["WiFi", "Shared kitchen", "Luggage storage", "Travel desk"],
        photos: &["hostel-exterior.jpg", "hostel-common-room.jpg", "hostel-dorm.jpg"],
        rooms: &[],
    },
    HotelSeed {
        name: "Lakeside Garden Hotel",
        address: "Jinji Lake, Gusu District, Suzhou",
        contact_person: "Mr Song",
        phone: "0512-98765432",
        email: "lakeside@example.com",
        star_level: 4,
        status: HotelStatus::Operating,
        facilities: &["Lake view restaurant", "Garden", "Meeting rooms", "Business centre", "WiFi"],
        photos: &["lakeside-hotel-exterior.jpg", "lakeside-hotel-garden.jpg", "lakeside-hotel-room.jpg"],
        rooms: &[],
    },
    HotelSeed {
        name: "Smart Tech Hotel",
        address: "Science Park, Nanshan District, Shenzhen",
        contact_person: "Manager Zhao",
        phone: "0755-11223344",
        email: "smart@example.com",
        star_level: 4,
        status: HotelStatus::Suspended,
        facilities: &["Smart room controls", "Robot service", "WiFi", "Business centre", "Gym"],
        photos: &["smart-hotel-exterior.jpg", "smart-hotel-tech.jpg", "smart-hotel-room.jpg"],
        rooms: &[],
    },
];

/// What a seed run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub hotels: usize,
    pub room_types: usize,
    /// Hotels left alone because one with the same name exists
    pub skipped: usize,
}

/// Insert the demo hotels and their room types
///
/// Hotels already present by name are skipped, so running it twice is safe.
pub async fn seed(pool: &SqlitePool) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for seed in HOTELS {
        if hotels::find_hotel_by_name(pool, seed.name).await?.is_some() {
            log::debug!("Hotel {} already exists, skipping", seed.name);
            report.skipped += 1;
            continue;
        }

        let hotel = NewHotel::new(seed.name, seed.address, seed.contact_person, seed.phone)
            .with_star_level(seed.star_level)
            .with_email(seed.email)
            .with_status(seed.status)
            .with_facilities(seed.facilities)
            .with_photos(seed.photos);

        let hotel_id = hotels::insert_hotel(pool, &hotel)
            .await
            .with_context(|| format!("Failed to seed hotel {}", seed.name))?;
        report.hotels += 1;

        for room in seed.rooms {
            let room_type = NewRoomType::new(hotel_id, room.name, room.area, room.bed_type)
                .with_guests(room.max_guests, room.breakfast_count)
                .with_photos(room.photos)
                .with_description(room.description)
                .with_status(room.status);

            room_types::insert_room_type(pool, &room_type).await?;
            report.room_types += 1;
        }
    }

    log::info!(
        "Seeded {} hotels and {} room types ({} skipped)",
        report.hotels,
        report.room_types,
        report.skipped
    );
    Ok(report)
}
