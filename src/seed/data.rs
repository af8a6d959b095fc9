//! 시드 콘텐츠 정의
//!
//! 사이트 오픈 시점의 초기 콘텐츠입니다. 이후의 콘텐츠 변경은 모두
//! 관리자 패널에서 이루어집니다.

use crate::domain::entities::costs::GlobalCost;
use crate::domain::entities::destinations::{Coordinates, Destination, Region};
use crate::domain::entities::experiences::{Experience, ExperienceType};
use crate::domain::entities::hotels::Hotel;
use crate::domain::entities::tours::{ItineraryDay, Tour};

/// 초기 목적지 목록
pub fn destinations() -> Vec<Destination> {
    vec![
        Destination::new(
            "thimphu".to_string(),
            "Thimphu".to_string(),
            Coordinates { lat: 27.4728, lng: 89.6390 },
            Region::Western,
        ),
        Destination::new(
            "paro".to_string(),
            "Paro".to_string(),
            Coordinates { lat: 27.4305, lng: 89.4134 },
            Region::Western,
        ),
        Destination::new(
            "punakha".to_string(),
            "Punakha".to_string(),
            Coordinates { lat: 27.5921, lng: 89.8797 },
            Region::Western,
        ),
        Destination::new(
            "haa".to_string(),
            "Haa".to_string(),
            Coordinates { lat: 27.3683, lng: 89.2916 },
            Region::Western,
        ),
        Destination::new(
            "phobjikha".to_string(),
            "Phobjikha".to_string(),
            Coordinates { lat: 27.4594, lng: 90.1802 },
            Region::Central,
        ),
        Destination::new(
            "trongsa".to_string(),
            "Trongsa".to_string(),
            Coordinates { lat: 27.5026, lng: 90.5072 },
            Region::Central,
        ),
        Destination::new(
            "bumthang".to_string(),
            "Bumthang".to_string(),
            Coordinates { lat: 27.5414, lng: 90.7525 },
            Region::Central,
        ),
        Destination::new(
            "mongar".to_string(),
            "Mongar".to_string(),
            Coordinates { lat: 27.2747, lng: 91.2396 },
            Region::Eastern,
        ),
        Destination::new(
            "trashigang".to_string(),
            "Trashigang".to_string(),
            Coordinates { lat: 27.3314, lng: 91.5539 },
            Region::Eastern,
        ),
    ]
}

/// 초기 체험 유형 목록
pub fn experience_types() -> Vec<ExperienceType> {
    vec![
        ExperienceType::new("cultural-immersion".to_string(), "Cultural Immersion".to_string(), 1),
        ExperienceType::new("trekking-nature".to_string(), "Trekking & Nature".to_string(), 2),
        ExperienceType::new("wellness-rejuvenation".to_string(), "Wellness & Rejuvenation".to_string(), 3),
        ExperienceType::new("festivals".to_string(), "Festivals".to_string(), 4),
    ]
}

/// 초기 체험 목록
pub fn experiences() -> Vec<Experience> {
    vec![
        Experience::new(
            "tigers-nest-hike".to_string(),
            "Tiger's Nest Hike".to_string(),
            "Hike to Taktsang Monastery, perched on a cliff 900 metres above the Paro valley floor.".to_string(),
            None,
            "trekking-nature".to_string(),
            1,
        ),
        Experience::new(
            "farmhouse-hot-stone-bath".to_string(),
            "Farmhouse Hot Stone Bath".to_string(),
            "Soak in a traditional dotsho: river stones heated over fire, dropped into a wooden tub with artemisia leaves.".to_string(),
            None,
            "wellness-rejuvenation".to_string(),
            1,
        ),
        Experience::new(
            "thimphu-tshechu".to_string(),
            "Thimphu Tshechu".to_string(),
            "Three days of masked cham dances in the courtyard of Tashichho Dzong, held each autumn.".to_string(),
            None,
            "festivals".to_string(),
            1,
        ),
        Experience::new(
            "archery-match".to_string(),
            "Traditional Archery Match".to_string(),
            "Watch or join a round of datse, the national sport, with bamboo bows at 145 metres.".to_string(),
            None,
            "cultural-immersion".to_string(),
            1,
        ),
    ]
}

/// 초기 투어 목록
pub fn tours() -> Vec<Tour> {
    vec![
        Tour::new(
            "glimpse-of-bhutan".to_string(),
            "Glimpse of Bhutan".to_string(),
            "A five day introduction to western Bhutan: Thimphu's weekend market, Punakha Dzong at the river confluence, and the climb to Tiger's Nest.".to_string(),
            None,
            "cultural".to_string(),
            1890.0,
            5,
            vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrive Paro - Thimphu".to_string(),
                    description: "Fly into Paro, drive the valley road to the capital.".to_string(),
                    overnight: Some("Thimphu".to_string()),
                },
                ItineraryDay {
                    day: 2,
                    title: "Thimphu sightseeing".to_string(),
                    description: "Buddha Dordenma, Memorial Chorten, the takin preserve.".to_string(),
                    overnight: Some("Thimphu".to_string()),
                },
                ItineraryDay {
                    day: 3,
                    title: "Thimphu - Punakha".to_string(),
                    description: "Cross Dochula pass; prayer flags and Himalayan views. Afternoon at Punakha Dzong.".to_string(),
                    overnight: Some("Punakha".to_string()),
                },
                ItineraryDay {
                    day: 4,
                    title: "Punakha - Paro".to_string(),
                    description: "Walk to Chimi Lhakhang through rice fields, then return west.".to_string(),
                    overnight: Some("Paro".to_string()),
                },
                ItineraryDay {
                    day: 5,
                    title: "Tiger's Nest - Depart".to_string(),
                    description: "Morning hike to Taktsang, afternoon departure.".to_string(),
                    overnight: None,
                },
            ],
        ),
        Tour::new(
            "druk-path-trek".to_string(),
            "Druk Path Trek".to_string(),
            "The classic short trek between Paro and Thimphu, crossing high ridges with alpine lakes and views of Jomolhari on a clear day.".to_string(),
            None,
            "trekking".to_string(),
            2450.0,
            8,
            vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrive Paro".to_string(),
                    description: "Acclimatisation day, visit Paro Dzong and the national museum.".to_string(),
                    overnight: Some("Paro".to_string()),
                },
                ItineraryDay {
                    day: 2,
                    title: "Paro - Jele Dzong".to_string(),
                    description: "First climb through blue pine forest to the ridge camp at 3,480 m.".to_string(),
                    overnight: Some("Jele Dzong camp".to_string()),
                },
                ItineraryDay {
                    day: 3,
                    title: "Jele Dzong - Jangchulakha".to_string(),
                    description: "Ridge walking through rhododendron and yak pasture.".to_string(),
                    overnight: Some("Jangchulakha camp".to_string()),
                },
            ],
        ),
        Tour::new(
            "bumthang-cultural-heartland".to_string(),
            "Bumthang Cultural Heartland".to_string(),
            "Ten days from west to central Bhutan, ending in the four valleys of Bumthang with Jambay Lhakhang and Kurje Lhakhang.".to_string(),
            None,
            "cultural".to_string(),
            3480.0,
            10,
            vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrive Paro".to_string(),
                    description: "Transfer to the hotel, evening walk through Paro town.".to_string(),
                    overnight: Some("Paro".to_string()),
                },
                ItineraryDay {
                    day: 2,
                    title: "Paro - Thimphu - Punakha".to_string(),
                    description: "Long driving day with stops at Dochula pass.".to_string(),
                    overnight: Some("Punakha".to_string()),
                },
            ],
        ),
    ]
}

/// 초기 호텔 목록
pub fn hotels() -> Vec<Hotel> {
    vec![
        Hotel::new(
            "Zhiwa Ling Heritage".to_string(),
            "Paro".to_string(),
            Coordinates { lat: 27.4412, lng: 89.3766 },
            "$$$".to_string(),
            vec![
                "Restaurant".to_string(),
                "Spa".to_string(),
                "Hot stone bath".to_string(),
                "Temple".to_string(),
            ],
            4.8,
            vec![],
        ),
        Hotel::new(
            "Hotel Druk Thimphu".to_string(),
            "Thimphu".to_string(),
            Coordinates { lat: 27.4722, lng: 89.6363 },
            "$$".to_string(),
            vec![
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Wi-Fi".to_string(),
            ],
            4.3,
            vec![],
        ),
        Hotel::new(
            "Gangtey Lodge".to_string(),
            "Phobjikha".to_string(),
            Coordinates { lat: 27.4521, lng: 90.1637 },
            "$$$$".to_string(),
            vec![
                "Restaurant".to_string(),
                "Spa".to_string(),
                "Valley view".to_string(),
                "Fireplace".to_string(),
            ],
            4.9,
            vec![],
        ),
    ]
}

/// 초기 전역 비용 목록
pub fn global_costs() -> Vec<GlobalCost> {
    vec![
        GlobalCost::new(
            "sdf_adult".to_string(),
            "Sustainable Development Fee (adult, per night)".to_string(),
            100.0,
            "USD".to_string(),
            None,
        ),
        GlobalCost::new(
            "sdf_child".to_string(),
            "Sustainable Development Fee (6-12 years, per night)".to_string(),
            50.0,
            "USD".to_string(),
            Some("Children under 6 are exempt.".to_string()),
        ),
        GlobalCost::new(
            "visa_fee".to_string(),
            "Visa application fee".to_string(),
            40.0,
            "USD".to_string(),
            None,
        ),
        GlobalCost::new(
            "guide_day_rate".to_string(),
            "Licensed guide (per day)".to_string(),
            55.0,
            "USD".to_string(),
            Some("Included in all published tour prices.".to_string()),
        ),
    ]
}
