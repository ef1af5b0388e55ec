//! Fixed sample catalog loaded into the store at construction.

use crate::models::{
    CreateGalleryItemRequest, CreatePackageRequest, CreateServiceRequest,
    CreateTestimonialRequest, Destination, GalleryCategory,
};

pub const PACKAGE_IMAGE: &str = "/placeholder-package.jpg";
pub const AVATAR_IMAGE: &str = "/placeholder-avatar.jpg";
pub const GALLERY_ITEM_COUNT: usize = 16;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Sample tour packages
pub fn sample_packages() -> Vec<CreatePackageRequest> {
    vec![
        CreatePackageRequest {
            title: "Kashi Allahabad Ayodhya Yatra".to_string(),
            duration: "3N/4D".to_string(),
            image: PACKAGE_IMAGE.to_string(),
            description: "Experience the spiritual essence of three holy cities - Kashi (Varanasi), Allahabad (Prayagraj), and Ayodhya.".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival in Varanasi, Ganga Aarti",
                "Day 2: Varanasi temple tour and boat ride",
                "Day 3: Allahabad - Triveni Sangam visit",
                "Day 4: Ayodhya - Ram Janmabhoomi, return",
            ]),
            highlights: strings(&[
                "Ganga Aarti at Dashashwamedh Ghat",
                "Kashi Vishwanath Temple darshan",
                "Triveni Sangam in Allahabad",
                "Ram Janmabhoomi Temple visit",
            ]),
            price: 15000,
        },
        CreatePackageRequest {
            title: "Kashi Gaya Allahabad".to_string(),
            duration: "3N/4D".to_string(),
            image: PACKAGE_IMAGE.to_string(),
            description: "Visit the three most sacred cities for Hindu pilgrimage - Kashi, Gaya, and Allahabad.".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival in Varanasi",
                "Day 2: Varanasi sightseeing",
                "Day 3: Travel to Gaya, Pinda Dhan rituals",
                "Day 4: Allahabad and return",
            ]),
            highlights: strings(&[
                "Kashi Vishwanath Temple",
                "Pinda Dhan in Gaya",
                "Triveni Sangam visit",
                "Boat ride on Ganges",
            ]),
            price: 16000,
        },
        CreatePackageRequest {
            title: "Kashi Nepal".to_string(),
            duration: "7N/8D".to_string(),
            image: PACKAGE_IMAGE.to_string(),
            description: "Extended spiritual journey covering Varanasi and sacred temples of Nepal.".to_string(),
            itinerary: strings(&[
                "Day 1-2: Varanasi exploration",
                "Day 3: Travel to Nepal",
                "Day 4-6: Kathmandu and Pashupatinath",
                "Day 7-8: Return journey",
            ]),
            highlights: strings(&[
                "Kashi temples and ghats",
                "Pashupatinath Temple Nepal",
                "Muktinath Darshan",
                "Kathmandu sightseeing",
            ]),
            price: 35000,
        },
    ]
}

/// Sample testimonials
pub fn sample_testimonials() -> Vec<CreateTestimonialRequest> {
    [
        (
            "Meghavarman King",
            "Really awesome! The way you treated and took kind way of talk all are very good and hotel stay is extraordinary and temple visit on time. Thank you a lot.",
        ),
        (
            "Manaswini Chowdary",
            "The best guide. I got the bliss of Kashi everywhere. Kashi is a lifetime experience we feel and I got it because of this tourist guide. Blessed!",
        ),
        (
            "Saravanan Shanmugam",
            "You people are awesome guys, especially Mr Prakash, who took care of my mom. No words to explain. We lived like a family for 4 days. Definitely I would refer to all. Thanks!",
        ),
    ]
    .into_iter()
    .map(|(name, quote)| CreateTestimonialRequest {
        name: name.to_string(),
        quote: quote.to_string(),
        image: AVATAR_IMAGE.to_string(),
    })
    .collect()
}

/// Sample agency services
pub fn sample_services() -> Vec<CreateServiceRequest> {
    [
        (
            "Cab Booking",
            "Comfortable and reliable transportation services for your spiritual journey",
            "car",
        ),
        (
            "VIP Dharshan Booking",
            "Skip the queues with our exclusive VIP darshan arrangements",
            "eye",
        ),
        (
            "Tour Escorts",
            "Expert guides to enrich your spiritual experience with knowledge",
            "users",
        ),
        (
            "Boat Booking",
            "Sacred boat rides on holy rivers for a divine experience",
            "ship",
        ),
        (
            "Pinda Dhan",
            "Traditional ritual services performed with utmost devotion",
            "heart",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| CreateServiceRequest {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Sample gallery: item `i` cycles destinations mod 6 and categories mod 4
pub fn sample_gallery_items() -> Vec<CreateGalleryItemRequest> {
    Destination::ALL
        .iter()
        .cycle()
        .zip(GalleryCategory::ALL.iter().cycle())
        .take(GALLERY_ITEM_COUNT)
        .enumerate()
        .map(|(i, (destination, category))| CreateGalleryItemRequest {
            image: format!("/placeholder-gallery-{}.jpg", i + 1),
            destination: *destination,
            category: *category,
        })
        .collect()
}
