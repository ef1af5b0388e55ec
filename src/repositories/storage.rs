use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::seed;
use crate::models::{
    ContactForm, CreateGalleryItemRequest, CreatePackageRequest, CreateServiceRequest,
    CreateTestimonialRequest, CreateUserRequest, GalleryItem, Package, Service, StorageResult,
    Testimonial, User,
};

/// Trait defining the data access operations the HTTP layer depends on
#[async_trait]
pub trait Storage: Send + Sync {
    /// Find a user by ID
    async fn get_user(&self, id: &str) -> StorageResult<Option<User>>;

    /// Find the earliest-created user with this exact username
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    async fn create_user(&self, request: CreateUserRequest) -> StorageResult<User>;

    async fn get_all_users(&self) -> StorageResult<Vec<User>>;

    async fn get_all_packages(&self) -> StorageResult<Vec<Package>>;

    async fn get_package(&self, id: &str) -> StorageResult<Option<Package>>;

    async fn create_package(&self, request: CreatePackageRequest) -> StorageResult<Package>;

    async fn get_all_testimonials(&self) -> StorageResult<Vec<Testimonial>>;

    async fn get_testimonial(&self, id: &str) -> StorageResult<Option<Testimonial>>;

    async fn create_testimonial(
        &self,
        request: CreateTestimonialRequest,
    ) -> StorageResult<Testimonial>;

    async fn get_all_gallery_items(&self) -> StorageResult<Vec<GalleryItem>>;

    async fn get_gallery_item(&self, id: &str) -> StorageResult<Option<GalleryItem>>;

    async fn create_gallery_item(
        &self,
        request: CreateGalleryItemRequest,
    ) -> StorageResult<GalleryItem>;

    async fn get_all_services(&self) -> StorageResult<Vec<Service>>;

    async fn get_service(&self, id: &str) -> StorageResult<Option<Service>>;

    async fn create_service(&self, request: CreateServiceRequest) -> StorageResult<Service>;

    /// Append an already-validated submission to the contact log
    async fn submit_contact_form(&self, form: ContactForm) -> StorageResult<()>;
}

/// Anything stored in a collection is keyed by its ID
trait Record: Clone {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($entity:ty),* $(,)?) => {
        $(impl Record for $entity {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(User, Package, Testimonial, Service, GalleryItem);

/// Insertion-ordered keyed collection
struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Collection<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, record: T) -> T {
        self.index
            .insert(record.id().to_string(), self.records.len());
        self.records.push(record.clone());
        record
    }

    fn get(&self, id: &str) -> Option<T> {
        self.index
            .get(id)
            .and_then(|&position| self.records.get(position))
            .cloned()
    }

    fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|record| predicate(record)).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

struct Collections {
    users: Collection<User>,
    packages: Collection<Package>,
    testimonials: Collection<Testimonial>,
    gallery_items: Collection<GalleryItem>,
    services: Collection<Service>,
    contact_submissions: Vec<ContactForm>,
}

impl Collections {
    fn seeded() -> Self {
        let mut collections = Collections {
            users: Collection::new(),
            packages: Collection::new(),
            testimonials: Collection::new(),
            gallery_items: Collection::new(),
            services: Collection::new(),
            contact_submissions: Vec::new(),
        };

        for request in seed::sample_packages() {
            collections.packages.insert(Package::new(request));
        }
        for request in seed::sample_testimonials() {
            collections.testimonials.insert(Testimonial::new(request));
        }
        for request in seed::sample_services() {
            collections.services.insert(Service::new(request));
        }
        for request in seed::sample_gallery_items() {
            collections.gallery_items.insert(GalleryItem::new(request));
        }

        collections
    }
}

/// In-memory implementation of the Storage trait.
///
/// State lives for the process lifetime only. One lock guards all
/// collections so every operation observes a consistent snapshot.
pub struct MemStorage {
    inner: RwLock<Collections>,
}

impl MemStorage {
    /// Create a store populated with the sample catalog
    pub fn new() -> Self {
        let collections = Collections::seeded();
        info!(
            packages = collections.packages.len(),
            testimonials = collections.testimonials.len(),
            services = collections.services.len(),
            gallery_items = collections.gallery_items.len(),
            "In-memory storage seeded"
        );

        Self {
            inner: RwLock::new(collections),
        }
    }

    /// Number of contact submissions received since startup
    pub async fn contact_submission_count(&self) -> usize {
        self.inner.read().await.contact_submissions.len()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    #[instrument(skip(self))]
    async fn get_user(&self, id: &str) -> StorageResult<Option<User>> {
        Ok(self.inner.read().await.users.get(id))
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .find(|user| user.username == username))
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn create_user(&self, request: CreateUserRequest) -> StorageResult<User> {
        let user = User::new(request);
        debug!(id = %user.id, "Creating user");
        Ok(self.inner.write().await.users.insert(user))
    }

    #[instrument(skip(self))]
    async fn get_all_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.inner.read().await.users.all())
    }

    #[instrument(skip(self))]
    async fn get_all_packages(&self) -> StorageResult<Vec<Package>> {
        Ok(self.inner.read().await.packages.all())
    }

    #[instrument(skip(self))]
    async fn get_package(&self, id: &str) -> StorageResult<Option<Package>> {
        Ok(self.inner.read().await.packages.get(id))
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_package(&self, request: CreatePackageRequest) -> StorageResult<Package> {
        let package = Package::new(request);
        debug!(id = %package.id, "Creating package");
        Ok(self.inner.write().await.packages.insert(package))
    }

    #[instrument(skip(self))]
    async fn get_all_testimonials(&self) -> StorageResult<Vec<Testimonial>> {
        Ok(self.inner.read().await.testimonials.all())
    }

    #[instrument(skip(self))]
    async fn get_testimonial(&self, id: &str) -> StorageResult<Option<Testimonial>> {
        Ok(self.inner.read().await.testimonials.get(id))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_testimonial(
        &self,
        request: CreateTestimonialRequest,
    ) -> StorageResult<Testimonial> {
        let testimonial = Testimonial::new(request);
        Ok(self.inner.write().await.testimonials.insert(testimonial))
    }

    #[instrument(skip(self))]
    async fn get_all_gallery_items(&self) -> StorageResult<Vec<GalleryItem>> {
        Ok(self.inner.read().await.gallery_items.all())
    }

    #[instrument(skip(self))]
    async fn get_gallery_item(&self, id: &str) -> StorageResult<Option<GalleryItem>> {
        Ok(self.inner.read().await.gallery_items.get(id))
    }

    #[instrument(skip(self, request), fields(destination = %request.destination))]
    async fn create_gallery_item(
        &self,
        request: CreateGalleryItemRequest,
    ) -> StorageResult<GalleryItem> {
        let item = GalleryItem::new(request);
        Ok(self.inner.write().await.gallery_items.insert(item))
    }

    #[instrument(skip(self))]
    async fn get_all_services(&self) -> StorageResult<Vec<Service>> {
        Ok(self.inner.read().await.services.all())
    }

    #[instrument(skip(self))]
    async fn get_service(&self, id: &str) -> StorageResult<Option<Service>> {
        Ok(self.inner.read().await.services.get(id))
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_service(&self, request: CreateServiceRequest) -> StorageResult<Service> {
        let service = Service::new(request);
        Ok(self.inner.write().await.services.insert(service))
    }

    #[instrument(skip(self, form))]
    async fn submit_contact_form(&self, form: ContactForm) -> StorageResult<()> {
        let mut inner = self.inner.write().await;

        crate::info_with_trace!(
            name = %form.name,
            email = %form.email,
            "Contact form submitted"
        );
        debug!(phone = %form.phone, message = %form.message, "Contact form details");

        inner.contact_submissions.push(form);
        debug!(total = inner.contact_submissions.len(), "Contact log updated");
        Ok(())
    }
}
