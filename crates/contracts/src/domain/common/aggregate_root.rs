use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Root of a dashboard aggregate that travels over the API as a DTO
///
/// Defines the DTO conversions and the static entity metadata every
/// aggregate provides.
pub trait AggregateRoot: Sized {
    /// Wire shape of the aggregate
    type Dto: Serialize + DeserializeOwned;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Record id; `None` for records not yet saved
    fn id(&self) -> Option<i32>;

    /// Display name of the record
    fn name(&self) -> &str;

    /// Build the domain object from its DTO
    fn from_dto(dto: Self::Dto) -> Self;

    /// Convert back into the DTO sent to the API
    fn to_dto(&self) -> Self::Dto;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Index of the aggregate (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used in API paths (e.g. "organization")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full system name (e.g. "a001_organization")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Map a raw API object; `None` for null or objects that do not fit the DTO
    fn from_api(raw: &Value) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        match serde_json::from_value::<Self::Dto>(raw.clone()) {
            Ok(dto) => Some(Self::from_dto(dto)),
            Err(e) => {
                log::debug!("{}: rejected API payload: {}", Self::full_name(), e);
                None
            }
        }
    }

    /// Whether the record exists on the server
    fn is_persisted(&self) -> bool {
        matches!(self.id(), Some(id) if id > 0)
    }
}
