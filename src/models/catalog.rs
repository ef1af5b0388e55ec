use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Destination, GalleryCategory};

/// Generate a fresh record identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Site user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Request model for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// Tour package offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub image: String,
    pub description: String,
    pub itinerary: Vec<String>,
    pub highlights: Vec<String>,
    pub price: u32,
}

/// Request model for creating a tour package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePackageRequest {
    pub title: String,
    pub duration: String,
    pub image: String,
    pub description: String,
    pub itinerary: Vec<String>,
    pub highlights: Vec<String>,
    pub price: u32,
}

/// Customer testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub quote: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTestimonialRequest {
    pub name: String,
    pub quote: String,
    pub image: String,
}

/// Ancillary service offered by the agency (cabs, boats, rituals...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon tag understood by the frontend, e.g. "car" or "ship"
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    pub destination: Destination,
    pub category: GalleryCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGalleryItemRequest {
    pub image: String,
    pub destination: Destination,
    pub category: GalleryCategory,
}

impl User {
    /// Create a new User with a generated ID
    pub fn new(request: CreateUserRequest) -> Self {
        Self {
            id: new_id(),
            username: request.username,
            password: request.password,
        }
    }
}

impl Package {
    /// Create a new Package with a generated ID
    pub fn new(request: CreatePackageRequest) -> Self {
        Self {
            id: new_id(),
            title: request.title,
            duration: request.duration,
            image: request.image,
            description: request.description,
            itinerary: request.itinerary,
            highlights: request.highlights,
            price: request.price,
        }
    }
}

impl Testimonial {
    pub fn new(request: CreateTestimonialRequest) -> Self {
        Self {
            id: new_id(),
            name: request.name,
            quote: request.quote,
            image: request.image,
        }
    }
}

impl Service {
    pub fn new(request: CreateServiceRequest) -> Self {
        Self {
            id: new_id(),
            title: request.title,
            description: request.description,
            icon: request.icon,
        }
    }
}

impl GalleryItem {
    pub fn new(request: CreateGalleryItemRequest) -> Self {
        Self {
            id: new_id(),
            image: request.image,
            destination: request.destination,
            category: request.category,
        }
    }
}
