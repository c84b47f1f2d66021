use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record managed through the admin client: one CRUD unit with an image
/// stored in its own object-storage bucket.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The reference lookup this entity's form selects from.
    type Lookup: Lookup;

    /// Human-readable kind, used in logs and messages.
    const KIND: &'static str;

    /// Object-storage bucket holding this entity's images.
    const BUCKET: &'static str;

    /// REST resource root, e.g. `/workout-plan`.
    const RESOURCE: &'static str;

    /// Server-assigned identifier. `None` until the first successful create.
    fn id(&self) -> Option<&str>;

    fn image_url(&self) -> &str;

    fn set_image_url(&mut self, url: String);

    /// Fields the list search matches against.
    fn search_fields(&self) -> Vec<&str>;
}

/// A small read-only collection used to populate selection inputs.
pub trait Lookup: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Path of the list endpoint, relative to the API base URL.
    const PATH: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;
}

/// Find a lookup entry by id.
pub fn find_lookup<'a, L: Lookup>(lookups: &'a [L], id: &str) -> Option<&'a L> {
    lookups.iter().find(|l| l.id() == id)
}
