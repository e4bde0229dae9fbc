use uuid::Uuid;

/// Trait for records that carry a UUID primary key
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> Uuid;
}
